//! The task collection store—single source of truth for the board.
//!
//! The store exclusively owns the ordered task collection. Every other
//! component gets a read-only view via [`TaskStore::tasks`] and requests
//! mutation through the store's methods; nothing else may replace or reorder
//! the collection. Observers register with [`TaskStore::subscribe`] and are
//! called with a post-mutation snapshot after every state change, replacing
//! the implicit re-render of a framework-managed collection.

use crate::models::{CreateTaskInput, Task, TaskStatus};

type Listener = Box<dyn FnMut(&[Task])>;

/// Handle returned by [`TaskStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

pub struct TaskStore {
    tasks: Vec<Task>,
    listeners: Vec<(SubscriberId, Listener)>,
    next_listener_id: u64,
}

impl TaskStore {
    /// Create a store seeded with an initial collection.
    ///
    /// Insertion order is display order and is preserved across all
    /// mutations. Seed validation (unique ids) happens at the input boundary
    /// in [`crate::seed`]; the store trusts its caller.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    // ============================================================
    // Read access
    // ============================================================

    /// Read-only view of the collection, in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Remove the task with the given id, preserving the order of the rest.
    ///
    /// An unknown id is a silent no-op (`false`), not an error; deleting is
    /// idempotent and retry-safe. Returns `true` when a task was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            tracing::debug!(id, "delete ignored: no such task");
            return false;
        };

        self.tasks.remove(index);
        tracing::debug!(id, remaining = self.tasks.len(), "task deleted");
        self.notify();
        true
    }

    /// Replace the status of the task with the given id; all other fields
    /// are untouched.
    ///
    /// Any status may be set from any status (reopening a completed task is
    /// legal). An unknown id is a silent no-op (`false`). Setting the status
    /// a task already has still counts as a mutation and notifies.
    pub fn change_status(&mut self, id: &str, status: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(id, "status change ignored: no such task");
            return false;
        };

        task.status = status;
        tracing::debug!(id, status = status.as_str(), "status changed");
        self.notify();
        true
    }

    /// Append a task, assigning the next sequential numeric id.
    ///
    /// The built-in seed uses ids "1".."5"; new ids continue past the highest
    /// numeric id currently in the collection, so ids stay unique even after
    /// deletions in the middle.
    pub fn add(&mut self, input: CreateTaskInput) -> Task {
        let id = self.next_task_id();
        let task = Task {
            id,
            title: input.title,
            description: input.description,
            status: input.status,
            priority: input.priority,
            due_date: input.due_date,
        };

        self.tasks.push(task.clone());
        tracing::debug!(id = %task.id, total = self.tasks.len(), "task added");
        self.notify();
        task
    }

    fn next_task_id(&self) -> String {
        let max = self
            .tasks
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    // ============================================================
    // Subscriptions
    // ============================================================

    /// Register a listener called with a snapshot of the collection after
    /// every state-changing mutation. No-op mutations do not notify.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Task]) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        // Listeners get a snapshot, not the live collection: a listener must
        // never observe (or alias) the store mid-mutation.
        let snapshot = self.tasks.clone();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
