//! Structured logging backend: levels, events, entries and appenders

pub mod appender;
pub mod error;
pub mod event;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use event::{Event, ERROR_FIELD};
pub use log_context::{FieldValue, LogContext};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use output_format::{OutputFormat, RESERVED_KEYS};
pub use timestamp::TimestampFormat;
