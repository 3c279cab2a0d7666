//! Initialization input for the board.
//!
//! The collection is seeded once at startup—either from the built-in list or
//! from a JSON file—and never written back anywhere. The seed boundary is the
//! one place the id-uniqueness and non-empty-title invariants are checked;
//! past it, the store trusts its contents.

use std::collections::HashSet;
use std::path::Path;

use crate::models::{Task, TaskPriority, TaskStatus};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed reading seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed parsing seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate task id '{0}' in seed")]
    DuplicateId(String),

    #[error("task '{0}' has an empty title")]
    EmptyTitle(String),
}

/// The fixed built-in seed: five tasks with sequential numeric ids.
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Design landing page".to_string(),
            description: "Create the initial wireframe and mockups for the landing page."
                .to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            due_date: "2025-06-20".to_string(),
        },
        Task {
            id: "2".to_string(),
            title: "Set up CI/CD pipeline".to_string(),
            description: "Configure GitHub Actions for automated testing and deployment."
                .to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            due_date: "2025-06-18".to_string(),
        },
        Task {
            id: "3".to_string(),
            title: "Fix login bug".to_string(),
            description: "Resolve the issue where users can't log in with Google OAuth."
                .to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            due_date: "2025-06-14".to_string(),
        },
        Task {
            id: "4".to_string(),
            title: "Write unit tests".to_string(),
            description: "Add coverage for the user service module.".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::Low,
            due_date: "2025-06-22".to_string(),
        },
        Task {
            id: "5".to_string(),
            title: "Deploy to staging".to_string(),
            description: "Push the latest build to the staging environment for QA.".to_string(),
            status: TaskStatus::Completed,
            priority: TaskPriority::Medium,
            due_date: "2025-06-10".to_string(),
        },
    ]
}

/// Load a seed from a JSON file holding an array of tasks.
pub fn load(path: &Path) -> Result<Vec<Task>, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let tasks: Vec<Task> = serde_json::from_str(&raw)?;
    validate(&tasks)?;
    Ok(tasks)
}

/// Check the invariants the rest of the crate relies on: every id unique,
/// every title non-empty.
pub fn validate(tasks: &[Task]) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for task in tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(SeedError::DuplicateId(task.id.clone()));
        }
        if task.title.trim().is_empty() {
            return Err(SeedError::EmptyTitle(task.id.clone()));
        }
    }
    Ok(())
}
