//! In-process, append-only record of log lines.
//!
//! A [`Journal`] is an explicitly constructed handle; clones share the same entries.
//! Writers append under an exclusive lock, readers take a snapshot under a shared one,
//! so every read observes a consistent prefix of what was appended.

use chrono::{DateTime, Local};
use parking_lot::RwLock;
use std::fmt::{self, Write as _};
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

/// One journal line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

impl JournalEntry {
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self { timestamp: Local::now(), level, message: message.into() }
    }
}

/// Renders as `[YYYY-MM-DD HH:MM:SS] [LEVEL] message`.
impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {}", self.timestamp.format("%Y-%m-%d %H:%M:%S"), self.level, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<RwLock<Vec<JournalEntry>>>,
}

impl Journal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, level: Level, message: impl Into<String>) {
        let entry = JournalEntry::new(level, message);
        self.entries.write().push(entry);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.record(Level::INFO, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.record(Level::WARN, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.record(Level::ERROR, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.record(Level::DEBUG, message);
    }

    /// Snapshot of every entry, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.read().clone()
    }

    /// The last `count` entries, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<JournalEntry> {
        let entries = self.entries.read();
        let start = entries.len().saturating_sub(count);
        entries[start..].to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// A `tracing` layer that appends every event it sees to this journal.
    #[must_use]
    pub fn layer(&self) -> JournalLayer {
        JournalLayer { journal: self.clone() }
    }
}

#[derive(Debug, Clone)]
pub struct JournalLayer {
    journal: Journal,
}

impl<S: Subscriber> Layer<S> for JournalLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventText::default();
        event.record(&mut visitor);
        self.journal.record(*event.metadata().level(), visitor.finish());
    }
}

/// Flattens an event into `message key=value ...`.
#[derive(Default)]
struct EventText {
    message: String,
    fields: String,
}

impl EventText {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields
        } else {
            format!("{} {}", self.message, self.fields)
        }
    }
}

impl Visit for EventText {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
            return;
        }
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={value:?}", field.name());
    }
}
