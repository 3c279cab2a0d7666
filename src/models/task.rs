use serde::{Deserialize, Serialize};

/// A unit of work on the board.
///
/// Tasks are **in-memory only**—the collection is seeded at startup and
/// discarded when the process exits. Identity is an opaque caller-assigned
/// string (the built-in seed uses sequential numeric ids), unique within the
/// collection at all times.
///
/// The due date is kept as the raw ISO-8601 string the caller supplied;
/// parsing happens in the view layer so malformed input can degrade to
/// pass-through display instead of being rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// Free-form detail text. May be empty; empty descriptions are not rendered.
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// ISO-8601 calendar date, e.g. `2025-06-20`.
    pub due_date: String,
}

/// The workflow status of a task.
///
/// - `Pending`: Not yet started
/// - `InProgress`: Actively being worked on
/// - `Completed`: Done
///
/// Any status may be set from any status; there is no transition machine.
/// Reopening a completed task is legal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Badge text shown on task cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Done",
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| ParseEnumError {
            kind: "status",
            value: s.to_string(),
            expected: "pending, in-progress, completed",
        })
    }
}

/// The priority of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| ParseEnumError {
            kind: "priority",
            value: s.to_string(),
            expected: "low, medium, high",
        })
    }
}

/// Error for parsing a status or priority from user input (CLI flags).
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

/// Input for adding a task to the store. The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: String,
}
