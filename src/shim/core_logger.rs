//! [`ShimLogger`] implementation over the bundled backend

use super::level::translate_level;
use super::traits::{Message, ShimLogger};
use crate::appenders::WriterAppender;
use crate::core::{Appender, Event, Logger};
use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::io::Write;

/// Name reported by [`CoreLogger::name`]
pub const CORE_LOGGER_NAME: &str = "CoreLog";

/// Facade over one backend [`Logger`]
///
/// Every record carries a timestamp. Levels below the configured minimum
/// still hand out builders; they are simply never written.
///
/// ```
/// use logshim::prelude::*;
///
/// let log = CoreLogger::new(std::io::sink(), Level::Info);
/// log.info().str("k", "v").int("n", 42).msg("hello");
/// log.debug().msg("filtered, but safe to build");
/// assert_eq!(log.name(), "CoreLog");
/// ```
#[derive(Debug, Clone)]
pub struct CoreLogger {
    name: &'static str,
    logger: Logger,
}

impl CoreLogger {
    /// Log JSON lines to `sink` at `level` and above
    ///
    /// `level` may be a [`Level`](super::Level) or a raw level code. An
    /// unknown code falls back to WARN and the substitution is itself logged
    /// at ERROR through the new logger; construction never fails.
    pub fn new<W>(sink: W, level: impl Into<i32>) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::with_appender(WriterAppender::new(sink), level)
    }

    /// Same as [`new`](Self::new) over any backend appender
    pub fn with_appender<A: Appender + 'static>(appender: A, level: impl Into<i32>) -> Self {
        let (min_level, config_err) = translate_level(level);

        let logger = Logger::builder()
            .min_level(min_level)
            .timestamp(true)
            .appender(appender)
            .build();

        if let Some(err) = config_err {
            logger.err(&err).msg("log configuration error");
        }

        Self {
            name: CORE_LOGGER_NAME,
            logger,
        }
    }

    /// The wrapped backend logger, for flushing and metrics
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl ShimLogger for CoreLogger {
    type Message = CoreMessage;

    fn name(&self) -> &str {
        self.name
    }

    fn err(&self, cause: &dyn StdError) -> CoreMessage {
        CoreMessage::from(self.logger.err(cause))
    }

    fn error(&self) -> CoreMessage {
        CoreMessage::from(self.logger.error())
    }

    fn warn(&self) -> CoreMessage {
        CoreMessage::from(self.logger.warn())
    }

    fn notice(&self) -> CoreMessage {
        CoreMessage::from(self.logger.info())
    }

    fn info(&self) -> CoreMessage {
        CoreMessage::from(self.logger.info())
    }

    fn debug(&self) -> CoreMessage {
        CoreMessage::from(self.logger.debug())
    }
}

/// [`Message`] over one backend [`Event`]
#[must_use = "a message is discarded unless `msg` or `msgf` is called"]
pub struct CoreMessage {
    event: Event,
}

impl From<Event> for CoreMessage {
    fn from(event: Event) -> Self {
        Self { event }
    }
}

impl Message for CoreMessage {
    fn err(self, cause: &dyn StdError) -> Self {
        Self::from(self.event.err(cause))
    }

    fn bool(self, key: &str, value: bool) -> Self {
        Self::from(self.event.bool(key, value))
    }

    fn int(self, key: &str, value: i32) -> Self {
        Self::from(self.event.int(key, value))
    }

    fn int64(self, key: &str, value: i64) -> Self {
        Self::from(self.event.int64(key, value))
    }

    fn uint64(self, key: &str, value: u64) -> Self {
        Self::from(self.event.uint64(key, value))
    }

    fn str(self, key: &str, value: &str) -> Self {
        Self::from(self.event.str(key, value))
    }

    fn time(self, key: &str, value: DateTime<Utc>) -> Self {
        Self::from(self.event.time(key, value))
    }

    fn msg(self, text: &str) {
        self.event.msg(text);
    }
}
