//! One-way notifications about mutations and refused bookings.

use crate::db::log::ttlog;
use crate::ui::messages;
use rusqlite::Connection;
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

/// Fire-and-forget sink: implementations never report failures back.
pub trait NotificationSink {
    fn notify(&self, level: Level, operation: &str, message: &str);
}

/// Prints to the terminal and appends to the `log` table.
///
/// Errors are only written to the log table: the caller returns them and
/// `main` prints them once.
pub struct ConsoleSink {
    log: Option<Connection>,
}

impl ConsoleSink {
    /// Terminal only.
    pub fn new() -> Self {
        Self { log: None }
    }

    /// Also append each notice to the `log` table of `database`. An
    /// unreachable database degrades to terminal-only output.
    pub fn with_log(database: &str) -> Self {
        match Connection::open(database) {
            Ok(conn) => Self { log: Some(conn) },
            Err(e) => {
                messages::warning(format!("Failed to open log database: {e}"));
                Self::new()
            }
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ConsoleSink {
    fn notify(&self, level: Level, operation: &str, message: &str) {
        match level {
            Level::Info => messages::info(message),
            Level::Success => messages::success(message),
            Level::Warning => messages::warning(message),
            Level::Error => {}
        }

        if let Some(conn) = &self.log
            && let Err(e) = ttlog(conn, operation, level_tag(level), message)
        {
            messages::warning(format!("Failed to write internal log: {e}"));
        }
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Info => "info",
        Level::Success => "ok",
        Level::Warning => "warning",
        Level::Error => "rejected",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub operation: String,
    pub message: String,
}

/// Collects notices in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    notices: RefCell<Vec<Notice>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, level: Level, operation: &str, message: &str) {
        self.notices.borrow_mut().push(Notice {
            level,
            operation: operation.to_string(),
            message: message.to_string(),
        });
    }
}
