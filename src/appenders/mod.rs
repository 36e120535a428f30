//! Appender implementations

#[cfg(feature = "console")]
pub mod console;
pub mod writer;

#[cfg(feature = "console")]
pub use console::ConsoleAppender;
pub use writer::WriterAppender;

pub use crate::core::Appender;
