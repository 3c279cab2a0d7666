//! Derived-view logic and text rendering for the board.
//!
//! Everything here is a pure function of its inputs: the view layer never
//! holds task data of its own and never mutates the store. Overdue-ness is a
//! live property computed from the clock the caller passes in, never stored
//! on the task.

use chrono::NaiveDate;

use crate::models::{Task, TaskFilter, TaskStatus};

const PENDING: char = '○';
const IN_PROGRESS: char = '◐';
const COMPLETED: char = '●';

/// Get the card symbol for a task status.
fn status_symbol(status: TaskStatus) -> char {
    match status {
        TaskStatus::Pending => PENDING,
        TaskStatus::InProgress => IN_PROGRESS,
        TaskStatus::Completed => COMPLETED,
    }
}

/// Format a raw due-date string for display.
///
/// Parses the ISO-8601 calendar date and renders it as e.g. `Jun 20, 2025`.
/// Anything that does not parse as a valid calendar date is returned
/// unchanged—malformed input degrades to pass-through, never to an
/// "invalid date" artifact, and this function never panics.
pub fn format_due_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// True when the task's due date has passed and the task is not done.
///
/// Comparison is at calendar-date granularity: a task due *today* is not
/// overdue. A due date that fails to parse is never overdue. Completed tasks
/// are never overdue regardless of due date.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    if task.status == TaskStatus::Completed {
        return false;
    }
    match NaiveDate::parse_from_str(&task.due_date, "%Y-%m-%d") {
        Ok(due) => due < today,
        Err(_) => false,
    }
}

/// Render the board as lines of text.
///
/// The visible set is the collection narrowed by `filter`, in collection
/// order. `selected` indexes into the visible set (interactive mode); rows
/// other than the selected one get a blank marker column. An empty visible
/// set renders the placeholder line instead of cards.
///
/// Example output:
/// ```text
/// taskdeck · 5 tasks (2 pending / 2 in progress / 1 done)
/// filter: status=any priority=any
///
///   ○ Design landing page  [Overdue]
///       Create the initial wireframe and mockups for the landing page.
///       status: pending · priority: high · due: Jun 20, 2025
/// ```
pub fn render_board(
    tasks: &[Task],
    filter: &TaskFilter,
    today: NaiveDate,
    selected: Option<usize>,
) -> Vec<String> {
    let visible = filter.apply(tasks);

    let mut lines = Vec::new();
    lines.push(render_summary(&visible));
    lines.push(render_filter_line(filter));
    lines.push(String::new());

    if visible.is_empty() {
        lines.push("No tasks to show.".to_string());
        return lines;
    }

    for (index, task) in visible.iter().enumerate() {
        let marker = if selected == Some(index) { '>' } else { ' ' };
        render_card(&mut lines, task, marker, today);
    }

    lines
}

fn render_summary(visible: &[&Task]) -> String {
    let pending = count_status(visible, TaskStatus::Pending);
    let in_progress = count_status(visible, TaskStatus::InProgress);
    let done = count_status(visible, TaskStatus::Completed);
    format!(
        "taskdeck · {} task{} ({} pending / {} in progress / {} done)",
        visible.len(),
        if visible.len() == 1 { "" } else { "s" },
        pending,
        in_progress,
        done
    )
}

fn count_status(visible: &[&Task], status: TaskStatus) -> usize {
    visible.iter().filter(|t| t.status == status).count()
}

fn render_filter_line(filter: &TaskFilter) -> String {
    format!(
        "filter: status={} priority={}",
        filter.status.map(|s| s.as_str()).unwrap_or("any"),
        filter.priority.map(|p| p.as_str()).unwrap_or("any"),
    )
}

/// Render one task card: title line with badges, optional description line,
/// then the priority/due metadata line.
fn render_card(lines: &mut Vec<String>, task: &Task, marker: char, today: NaiveDate) {
    let mut title_line = format!("{} {} {}", marker, status_symbol(task.status), task.title);

    if is_overdue(task, today) {
        title_line.push_str("  [Overdue]");
    }
    // Pending tasks carry no status badge, only the symbol.
    match task.status {
        TaskStatus::InProgress | TaskStatus::Completed => {
            title_line.push_str("  [");
            title_line.push_str(task.status.label());
            title_line.push(']');
        }
        TaskStatus::Pending => {}
    }
    lines.push(title_line);

    if !task.description.is_empty() {
        lines.push(format!("      {}", task.description));
    }

    lines.push(format!(
        "      status: {} · priority: {} · due: {}",
        task.status.as_str(),
        task.priority.as_str(),
        format_due_date(&task.due_date)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskPriority;

    fn task(id: &str, status: TaskStatus, due: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: String::new(),
            status,
            priority: TaskPriority::Medium,
            due_date: due.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_format_due_date_valid() {
        assert_eq!(format_due_date("2025-06-20"), "Jun 20, 2025");
        assert_eq!(format_due_date("2025-01-05"), "Jan 5, 2025");
    }

    #[test]
    fn test_format_due_date_passthrough() {
        assert_eq!(format_due_date("not a date"), "not a date");
        assert_eq!(format_due_date("2025-02-30"), "2025-02-30");
        assert_eq!(format_due_date(""), "");
    }

    #[test]
    fn test_overdue_requires_past_date_and_open_status() {
        assert!(is_overdue(&task("1", TaskStatus::Pending, "2025-06-14"), today()));
        assert!(is_overdue(
            &task("2", TaskStatus::InProgress, "2024-12-31"),
            today()
        ));
        // Due today is not overdue.
        assert!(!is_overdue(&task("3", TaskStatus::Pending, "2025-06-15"), today()));
        assert!(!is_overdue(&task("4", TaskStatus::Pending, "2025-06-16"), today()));
    }

    #[test]
    fn test_completed_is_never_overdue() {
        assert!(!is_overdue(
            &task("1", TaskStatus::Completed, "2020-01-01"),
            today()
        ));
    }

    #[test]
    fn test_unparseable_due_date_is_never_overdue() {
        assert!(!is_overdue(&task("1", TaskStatus::Pending, "someday"), today()));
    }

    #[test]
    fn test_empty_board_renders_placeholder() {
        let lines = render_board(&[], &TaskFilter::default(), today(), None);
        assert!(lines.contains(&"No tasks to show.".to_string()));
        assert!(!lines.iter().any(|l| l.contains('○')));
    }

    #[test]
    fn test_filtered_to_nothing_renders_placeholder() {
        let tasks = vec![task("1", TaskStatus::Pending, "2025-06-20")];
        let filter = TaskFilter {
            status: Some(TaskStatus::Completed),
            priority: None,
        };
        let lines = render_board(&tasks, &filter, today(), None);
        assert!(lines.contains(&"No tasks to show.".to_string()));
    }

    #[test]
    fn test_cards_carry_badges_and_metadata() {
        let tasks = vec![
            task("1", TaskStatus::InProgress, "2025-06-14"),
            task("2", TaskStatus::Completed, "2025-06-10"),
        ];
        let lines = render_board(&tasks, &TaskFilter::default(), today(), None);
        let text = lines.join("\n");

        assert!(text.contains("◐ Task 1  [Overdue]  [In progress]"));
        assert!(text.contains("● Task 2  [Done]"));
        assert!(text.contains("due: Jun 14, 2025"));
    }

    #[test]
    fn test_selected_row_gets_marker() {
        let tasks = vec![
            task("1", TaskStatus::Pending, "2025-06-20"),
            task("2", TaskStatus::Pending, "2025-06-21"),
        ];
        let lines = render_board(&tasks, &TaskFilter::default(), today(), Some(1));
        assert!(lines.iter().any(|l| l.starts_with("> ○ Task 2")));
        assert!(lines.iter().any(|l| l.starts_with("  ○ Task 1")));
    }
}
