//! Main logger implementation
//!
//! A [`Logger`] is a cheap, cloneable handle onto one appender. Each handle
//! carries its own minimum level and timestamp setting, so derived loggers
//! (`logger.clone().level(..)`) share the sink without sharing configuration.

use super::{
    appender::Appender,
    error::Result,
    event::Event,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use chrono::Utc;
use parking_lot::Mutex;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

struct Shared {
    appender: Mutex<Box<dyn Appender>>,
    metrics: LoggerMetrics,
}

impl Drop for Shared {
    fn drop(&mut self) {
        if let Err(e) = self.appender.get_mut().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped logs (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

#[derive(Clone)]
pub struct Logger {
    min_level: LogLevel,
    timestamp: bool,
    shared: Arc<Shared>,
}

impl Logger {
    /// Create a logger that passes every level and adds no timestamp
    #[must_use]
    pub fn new<A: Appender + 'static>(appender: A) -> Self {
        Self::from_boxed(Box::new(appender))
    }

    fn from_boxed(appender: Box<dyn Appender>) -> Self {
        Self {
            min_level: LogLevel::Trace,
            timestamp: false,
            shared: Arc::new(Shared {
                appender: Mutex::new(appender),
                metrics: LoggerMetrics::new(),
            }),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logshim::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .timestamp(true)
    ///     .appender(WriterAppender::new(std::io::sink()))
    ///     .build();
    /// assert!(logger.enabled(LogLevel::Debug));
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Derive a logger with a different minimum level over the same sink
    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Derive a logger that stamps every event at creation time
    #[must_use]
    pub fn with_timestamp(mut self) -> Self {
        self.timestamp = true;
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn timestamps_enabled(&self) -> bool {
        self.timestamp
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Start an event at `level`
    ///
    /// Below the minimum level this returns a disabled event, which costs no
    /// allocation and writes nothing.
    pub fn event(&self, level: LogLevel) -> Event {
        if !self.enabled(level) {
            self.shared.metrics.record_filtered();
            return Event::disabled();
        }

        let mut entry = LogEntry::new(level, String::new());
        if self.timestamp {
            entry = entry.with_timestamp(Utc::now());
        }
        Event::enabled_for(self.clone(), entry)
    }

    #[inline]
    pub fn trace(&self) -> Event {
        self.event(LogLevel::Trace)
    }

    #[inline]
    pub fn debug(&self) -> Event {
        self.event(LogLevel::Debug)
    }

    #[inline]
    pub fn info(&self) -> Event {
        self.event(LogLevel::Info)
    }

    #[inline]
    pub fn warn(&self) -> Event {
        self.event(LogLevel::Warn)
    }

    #[inline]
    pub fn error(&self) -> Event {
        self.event(LogLevel::Error)
    }

    #[inline]
    pub fn fatal(&self) -> Event {
        self.event(LogLevel::Fatal)
    }

    /// Start an error-level event carrying `cause`
    pub fn err(&self, cause: &dyn StdError) -> Event {
        self.error().err(cause)
    }

    /// Hand a finished entry to the appender
    ///
    /// A failing or panicking appender loses the entry, which is counted as
    /// dropped; the caller never sees the failure.
    pub(crate) fn write(&self, entry: LogEntry) {
        let mut appender = self.shared.appender.lock();

        let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            appender.append(&entry)
        }));

        match append_result {
            Ok(Ok(())) => {
                self.shared.metrics.record_logged();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Appender '{}' failed: {}", appender.name(), e);
                self.shared.metrics.record_dropped();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Appender '{}' panicked: {}",
                    appender.name(),
                    panic_msg
                );
                self.shared.metrics.record_dropped();
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.shared.appender.lock().flush()
    }

    /// Get the logger metrics, shared by every handle over this sink
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.shared.metrics
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("timestamp", &self.timestamp)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    min_level: LogLevel,
    timestamp: bool,
    appender: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Trace,
            timestamp: false,
            appender: None,
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Stamp every event with its creation time
    #[must_use = "builder methods return a new value"]
    pub fn timestamp(mut self, enabled: bool) -> Self {
        self.timestamp = enabled;
        self
    }

    /// Set the appender, replacing any previous one
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    /// Build the Logger
    ///
    /// Without an appender, records are encoded and discarded.
    pub fn build(self) -> Logger {
        let appender: Box<dyn Appender> = match self.appender {
            Some(appender) => appender,
            None => Box::new(crate::appenders::WriterAppender::new(std::io::sink())),
        };

        let logger = Logger::from_boxed(appender).level(self.min_level);
        if self.timestamp {
            logger.with_timestamp()
        } else {
            logger
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<LogEntry>>>);

    impl Appender for Capture {
        fn append(&mut self, entry: &LogEntry) -> Result<()> {
            self.0.lock().push(entry.clone());
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::writer("Simulated failure"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingAppender;

    impl Appender for PanickingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            panic!("appender exploded");
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_builder_defaults() {
        let logger = LoggerBuilder::default().build();

        assert_eq!(logger.min_level(), LogLevel::Trace);
        assert!(!logger.timestamps_enabled());
        logger.info().msg("discarded by io::sink");
        assert_eq!(logger.metrics().total_logged(), 1);
    }

    #[test]
    fn test_builder_full_configuration() {
        let capture = Capture::default();
        let logger = Logger::builder()
            .min_level(LogLevel::Info)
            .timestamp(true)
            .appender(capture.clone())
            .build();

        logger.debug().msg("hidden");
        logger.info().msg("shown");

        let entries = capture.0.lock();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "shown");
        assert!(entries[0].timestamp.is_some());
    }

    #[test]
    fn test_level_filtering() {
        let logger = Logger::new(Capture::default()).level(LogLevel::Warn);

        assert!(!logger.enabled(LogLevel::Debug));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Fatal));
    }

    #[test]
    fn test_extreme_levels() {
        let capture = Capture::default();
        let logger = Logger::new(capture.clone());

        logger.trace().msg("trace");
        logger.fatal().msg("fatal");

        let levels: Vec<LogLevel> = capture.0.lock().iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![LogLevel::Trace, LogLevel::Fatal]);
    }

    #[test]
    fn test_derived_loggers_share_sink() {
        let capture = Capture::default();
        let base = Logger::new(capture.clone());
        let strict = base.clone().level(LogLevel::Error);

        base.debug().msg("from base");
        strict.debug().msg("filtered");
        strict.error().msg("from strict");

        assert_eq!(capture.0.lock().len(), 2);
        assert_eq!(base.metrics().total_logged(), 2);
        assert_eq!(base.metrics().filtered_count(), 1);
    }

    #[test]
    fn test_failing_appender_counts_drop() {
        let logger = Logger::new(FailingAppender);

        logger.error().msg("lost");

        assert_eq!(logger.metrics().dropped_count(), 1);
        assert_eq!(logger.metrics().total_logged(), 0);
    }

    #[test]
    fn test_shutdown_after_drops() {
        let logger = Logger::new(FailingAppender);
        let derived = logger.clone().level(LogLevel::Warn);

        logger.error().msg("lost");
        derived.error().msg("lost too");

        assert_eq!(logger.metrics().drop_rate(), 100.0);
        drop(logger);
        assert_eq!(derived.metrics().dropped_count(), 2);
        drop(derived);
    }

    #[test]
    fn test_panicking_appender_is_isolated() {
        let logger = Logger::new(PanickingAppender);

        logger.info().msg("first");
        logger.info().msg("second");

        assert_eq!(logger.metrics().dropped_count(), 2);
    }

    #[test]
    fn test_err_starts_error_event() {
        let capture = Capture::default();
        let logger = Logger::new(capture.clone());

        logger.err(&LoggerError::other("bad state")).msg("operation failed");

        let entries = capture.0.lock();
        assert_eq!(entries[0].level, LogLevel::Error);
        assert_eq!(
            entries[0].context.get("error").map(ToString::to_string),
            Some("bad state".to_string())
        );
    }
}
