//! Interactive terminal board.
//!
//! Single-threaded and event-driven: every mutation happens synchronously in
//! response to a key press, followed by a redraw. There is no background
//! work and no timer—overdue-ness is recomputed from the clock at each
//! render, not tracked by a running task.
//!
//! Keys: `Up`/`Down` select, `s` opens the status picker (`Up`/`Down` to
//! choose, `Enter` commits, `Esc` abandons), `d` deletes, `f`/`p` cycle the
//! status/priority filters, `q` or `Ctrl-C` quits.

use std::cell::Cell;
use std::io::{IsTerminal, Write};
use std::rc::Rc;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::models::{TaskFilter, TaskPriority, TaskStatus};
use crate::store::TaskStore;
use crate::view;

const ANSI_CLEAR: &str = "\x1b[2J\x1b[H";

/// The status selector's transient shadow value.
///
/// Seeded from the authoritative status when the picker opens and dropped
/// whenever the store changes underneath it. The store remains the only
/// source of truth; this is view-local state to keep the selector responsive
/// before a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusPicker {
    task_id: String,
    pending: TaskStatus,
}

struct Board {
    store: TaskStore,
    filter: TaskFilter,
    selected: usize,
    picker: Option<StatusPicker>,
    dirty: Rc<Cell<bool>>,
    quit: bool,
}

impl Board {
    fn new(mut store: TaskStore) -> Self {
        let dirty = Rc::new(Cell::new(false));
        let flag = dirty.clone();
        store.subscribe(move |_| flag.set(true));

        Self {
            store,
            filter: TaskFilter::default(),
            selected: 0,
            picker: None,
            dirty,
            quit: false,
        }
    }

    fn visible_len(&self) -> usize {
        self.filter.apply(self.store.tasks()).len()
    }

    /// Id of the task the selection marker is on, if any task is visible.
    fn selected_id(&self) -> Option<String> {
        self.filter
            .apply(self.store.tasks())
            .get(self.selected)
            .map(|t| t.id.clone())
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }

    /// React to a store notification: any view-local cache of store data is
    /// stale now. The picker is dropped rather than reconciled field-by-field.
    fn on_store_changed(&mut self) {
        self.picker = None;
        self.clamp_selection();
    }

    fn on_key(&mut self, key: KeyEvent) {
        if !is_press_like(&key) {
            return;
        }

        if should_quit_on_key(&key) {
            self.quit = true;
            return;
        }

        if self.picker.is_some() {
            self.on_picker_key(&key);
        } else {
            self.on_list_key(&key);
        }

        if self.dirty.replace(false) {
            self.on_store_changed();
        }
    }

    fn on_list_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let len = self.visible_len();
                if len > 0 {
                    self.selected = (self.selected + 1).min(len - 1);
                }
            }
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'s') => {
                if let Some(id) = self.selected_id() {
                    let current = self
                        .store
                        .get(&id)
                        .map(|t| t.status)
                        .unwrap_or(TaskStatus::Pending);
                    self.picker = Some(StatusPicker {
                        task_id: id,
                        pending: current,
                    });
                }
            }
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'d') => {
                if let Some(id) = self.selected_id() {
                    self.store.delete(&id);
                }
            }
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'f') => {
                self.filter.set_status(cycle_status(self.filter.status));
                self.clamp_selection();
            }
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'p') => {
                self.filter.set_priority(cycle_priority(self.filter.priority));
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn on_picker_key(&mut self, key: &KeyEvent) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Up => {
                picker.pending = step_status(picker.pending, -1);
            }
            KeyCode::Down => {
                picker.pending = step_status(picker.pending, 1);
            }
            KeyCode::Enter => {
                let (id, status) = (picker.task_id.clone(), picker.pending);
                self.picker = None;
                self.store.change_status(&id, status);
            }
            KeyCode::Esc => {
                self.picker = None;
            }
            _ => {}
        }
    }

    fn render(&self, today: NaiveDate, interactive: bool) -> Vec<String> {
        let selected = if interactive && self.visible_len() > 0 {
            Some(self.selected)
        } else {
            None
        };

        let mut lines = view::render_board(self.store.tasks(), &self.filter, today, selected);

        if let Some(picker) = &self.picker {
            let title = self
                .store
                .get(&picker.task_id)
                .map(|t| t.title.clone())
                .unwrap_or_default();
            lines.push(String::new());
            lines.push(format!("change status · {}", title));
            for status in TaskStatus::ALL {
                let marker = if status == picker.pending { '>' } else { ' ' };
                lines.push(format!("  {} {}", marker, status.label()));
            }
            lines.push("Enter commit · Esc cancel".to_string());
        } else if interactive {
            lines.push(String::new());
            lines.push(
                "q quit · Up/Down select · s status · d delete · f filter status · p filter priority"
                    .to_string(),
            );
        }

        lines
    }
}

/// Run the interactive board until the user quits.
///
/// When stdout is not a terminal (piped output), degrades to printing a
/// single frame, the same shape `tdk show` produces.
pub fn run(store: TaskStore) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        let board = Board::new(store);
        let frame = board.render(Local::now().date_naive(), false);
        println!("{}", frame.join("\n"));
        return Ok(());
    }

    let mut board = Board::new(store);
    let _guard = RawModeGuard::enable()?;

    draw(&board)?;
    while !board.quit {
        match event::read()? {
            Event::Key(key) => {
                board.on_key(key);
                if !board.quit {
                    draw(&board)?;
                }
            }
            Event::Resize(_, _) => draw(&board)?,
            _ => {}
        }
    }

    Ok(())
}

/// Redraw the whole frame. Raw mode disables output post-processing, so
/// lines are joined with explicit carriage returns.
fn draw(board: &Board) -> Result<()> {
    let lines = board.render(Local::now().date_naive(), true);
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}{}\r\n", ANSI_CLEAR, lines.join("\r\n"))?;
    stdout.flush()?;
    Ok(())
}

fn should_quit_on_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(value) => {
            value.eq_ignore_ascii_case(&'q')
                || (value.eq_ignore_ascii_case(&'c')
                    && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

fn is_press_like(key: &KeyEvent) -> bool {
    matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

fn cycle_status(current: Option<TaskStatus>) -> Option<TaskStatus> {
    match current {
        None => Some(TaskStatus::Pending),
        Some(TaskStatus::Pending) => Some(TaskStatus::InProgress),
        Some(TaskStatus::InProgress) => Some(TaskStatus::Completed),
        Some(TaskStatus::Completed) => None,
    }
}

fn cycle_priority(current: Option<TaskPriority>) -> Option<TaskPriority> {
    match current {
        None => Some(TaskPriority::Low),
        Some(TaskPriority::Low) => Some(TaskPriority::Medium),
        Some(TaskPriority::Medium) => Some(TaskPriority::High),
        Some(TaskPriority::High) => None,
    }
}

fn step_status(current: TaskStatus, delta: isize) -> TaskStatus {
    let all = TaskStatus::ALL;
    let index = all.iter().position(|s| *s == current).unwrap_or(0) as isize;
    let next = (index + delta).rem_euclid(all.len() as isize) as usize;
    all[next]
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
