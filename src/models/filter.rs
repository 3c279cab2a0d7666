use serde::{Deserialize, Serialize};

use super::task::{Task, TaskPriority, TaskStatus};

/// User-selected narrowing criteria for the visible task list.
///
/// A filter never mutates the underlying collection—it only selects which
/// tasks are shown. `None` in either field means "match any". Criteria combine
/// with AND semantics: a task is visible when it matches the status selector
/// (if set) and the priority selector (if set).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskFilter {
    /// Set or clear the status selector. `None` means "match any status".
    pub fn set_status(&mut self, status: Option<TaskStatus>) {
        self.status = status;
    }

    /// Set or clear the priority selector. `None` means "match any priority".
    pub fn set_priority(&mut self, priority: Option<TaskPriority>) {
        self.priority = priority;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when neither selector is set, i.e. every task is visible.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|s| task.status == s)
            && self.priority.is_none_or(|p| task.priority == p)
    }

    /// Narrow a task sequence to the matching subset, preserving order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}
