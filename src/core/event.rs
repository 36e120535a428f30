//! In-flight log events
//!
//! An [`Event`] collects typed fields for one record and is written by its
//! terminal call. Events created below the logger's minimum level are
//! disabled: every setter and terminal on them is a no-op.

use super::log_context::FieldValue;
use super::log_entry::LogEntry;
use super::logger::Logger;
use chrono::{DateTime, Utc};
use std::error::Error as StdError;

/// Field key used for error causes
pub const ERROR_FIELD: &str = "error";

struct Pending {
    logger: Logger,
    entry: LogEntry,
}

/// A single record under construction
///
/// # Example
///
/// ```
/// use logshim::core::Logger;
/// use logshim::appenders::WriterAppender;
///
/// let logger = Logger::new(WriterAppender::new(std::io::sink()));
/// logger.info()
///     .str("user", "alice")
///     .int("attempt", 3)
///     .msg("login accepted");
/// ```
#[must_use = "an event is discarded unless `msg` or `send` is called"]
pub struct Event {
    pending: Option<Pending>,
}

impl Event {
    pub(crate) fn enabled_for(logger: Logger, entry: LogEntry) -> Self {
        Self {
            pending: Some(Pending { logger, entry }),
        }
    }

    pub(crate) fn disabled() -> Self {
        Self { pending: None }
    }

    /// Whether this event will produce output
    pub fn enabled(&self) -> bool {
        self.pending.is_some()
    }

    /// Attach a field of any supported type
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        if let Some(pending) = self.pending.as_mut() {
            pending.entry.context.add_field(key, value);
        }
        self
    }

    pub fn bool(self, key: &str, value: bool) -> Self {
        self.field(key, value)
    }

    pub fn int(self, key: &str, value: i32) -> Self {
        self.field(key, value)
    }

    pub fn int64(self, key: &str, value: i64) -> Self {
        self.field(key, value)
    }

    pub fn uint64(self, key: &str, value: u64) -> Self {
        self.field(key, value)
    }

    pub fn str(self, key: &str, value: &str) -> Self {
        self.field(key, value)
    }

    pub fn time(self, key: &str, value: DateTime<Utc>) -> Self {
        self.field(key, value)
    }

    /// Attach an error cause under the `error` key
    pub fn err(mut self, cause: &dyn StdError) -> Self {
        if let Some(pending) = self.pending.as_mut() {
            pending
                .entry
                .context
                .add_field(ERROR_FIELD, FieldValue::Error(cause.to_string()));
        }
        self
    }

    /// Set the message and write the record
    pub fn msg(self, text: &str) {
        if let Some(Pending { logger, mut entry }) = self.pending {
            entry.message = text.to_string();
            logger.write(entry);
        }
    }

    /// Write the record with an empty message
    pub fn send(self) {
        self.msg("");
    }
}
