//! # Freight logging
//!
//! Installs the process-wide `tracing` subscriber for the freight platform. Three sinks
//! can be combined, and all of them sit behind one level filter (`RUST_LOG` directives
//! are honoured on top of the configured level):
//!
//! * **console**: compact, colored lines for operators;
//! * **file**: daily rolling `<name>.YYYY-MM-DD.log` files under a directory, plain text
//!   or one JSON object per line, written off-thread;
//! * **journal**: an in-process [`Journal`] that keeps every line for the platform to
//!   inspect.
//!
//! ## Example
//!
//! ```rust
//! # use freight_logger::{Journal, Logger, LevelFilter};
//!
//! let journal = Journal::new();
//! let _logger = Logger::builder()
//!     .name("freight")
//!     .console(false)
//!     .level(LevelFilter::DEBUG)
//!     .journal(journal.clone())
//!     .init()
//!     .unwrap();
//!
//! tracing::info!("Platform ready");
//! assert_eq!(journal.recent(1)[0].message, "Platform ready");
//! ```

mod error;
mod journal;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::journal::{Journal, JournalEntry, JournalLayer};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Daily files kept before the oldest is removed.
const RETAINED_FILES: usize = 14;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
pub struct Unnamed;
#[derive(Debug)]
pub struct Named(String);

/// Subscriber settings. A name is required before [`init`](LoggerBuilder::init) exists.
#[derive(Debug)]
#[must_use = "builders do nothing unless you call .init()"]
pub struct LoggerBuilder<N = Unnamed> {
    name: N,
    level: LevelFilter,
    console: bool,
    directory: Option<PathBuf>,
    json: bool,
    journal: Option<Journal>,
}

impl LoggerBuilder<Unnamed> {
    /// Names the logger; also the prefix of every log file.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<Named> {
        LoggerBuilder {
            name: Named(name.into()),
            level: self.level,
            console: self.console,
            directory: self.directory,
            json: self.json,
            journal: self.journal,
        }
    }
}

impl<N> LoggerBuilder<N> {
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Directory for rolling files. Created on init when missing.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// JSON lines in the log files. Has no effect without a directory.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    pub fn journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }
}

impl LoggerBuilder<Named> {
    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the file writer's worker; keep it alive for as long as
    /// lines should reach disk.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for a blank name or when no sink is enabled.
    /// * [`LoggerError::Directory`] / [`LoggerError::Appender`] when the file sink cannot
    ///   be opened.
    /// * [`LoggerError::Subscriber`] when a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let name = self.name.0;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if !self.console && self.directory.is_none() && self.journal.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No sink enabled: choose console, a log directory or a journal".into(),
                context: Some(name.into()),
            });
        }

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_target(false).boxed());
        }
        if let Some(journal) = &self.journal {
            layers.push(journal.layer().boxed());
        }

        let guard = match &self.directory {
            Some(directory) => {
                fs::create_dir_all(directory)
                    .context(format!("Creating {}", directory.display()))?;
                let appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(&name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(RETAINED_FILES)
                    .build(directory)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            }
            None => None,
        };

        let filter = EnvFilter::builder().with_default_directive(self.level.into()).from_env_lossy();
        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { name, journal: self.journal, guard })
    }
}

/// Handle to the installed subscriber. Dropping it flushes and stops the file writer.
#[must_use = "dropping the handle stops file logging"]
#[derive(Debug)]
pub struct Logger {
    name: String,
    journal: Option<Journal>,
    guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: Unnamed,
            level: LevelFilter::INFO,
            console: true,
            directory: None,
            json: false,
            journal: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The journal events are mirrored into, if one was attached.
    #[must_use]
    pub const fn journal(&self) -> Option<&Journal> {
        self.journal.as_ref()
    }

    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!(logger = %self.name, "Flushing log files");
        }
    }
}
