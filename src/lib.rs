//! # logshim
//!
//! A thin logging facade: application code logs through the [`ShimLogger`]
//! and [`Message`] traits with backend-independent [`Level`]s, and a backend
//! adapter does the formatting and writing.
//!
//! ## Features
//!
//! - **Stable contract**: five abstract levels (`Debug`, `Info`, `Notice`,
//!   `Warn`, `Error`) mapped onto the backend's own scale
//! - **Fluent builders**: typed key/value fields, then one `msg`/`msgf`
//! - **Self-reporting configuration**: an unknown level falls back to WARN and
//!   is logged, never thrown
//! - **Thread safe**: one logger, many threads, one builder per line
//!
//! ```
//! use logshim::prelude::*;
//!
//! let log = CoreLogger::new(std::io::stderr(), Level::Info);
//! log.info().str("k", "v").int("n", 42).msg("hello");
//! ```

pub mod appenders;
pub mod core;
pub mod macros;
pub mod shim;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::appenders::ConsoleAppender;
    pub use crate::appenders::WriterAppender;
    pub use crate::core::{
        Appender, LogLevel, Logger, LoggerBuilder, LoggerError, OutputFormat, Result,
        TimestampFormat,
    };
    pub use crate::shim::{translate_level, CoreLogger, CoreMessage, Level, Message, ShimLogger};
}

#[cfg(feature = "console")]
pub use crate::appenders::ConsoleAppender;
pub use crate::appenders::WriterAppender;
pub use crate::core::{
    Appender, Event, FieldValue, LogContext, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerError, LoggerMetrics, OutputFormat, Result, TimestampFormat,
};
pub use crate::shim::{
    translate_level, CoreLogger, CoreMessage, Level, Message, ShimLogger, CORE_LOGGER_NAME,
};
