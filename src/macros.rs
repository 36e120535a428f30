//! Formatting macros for the facade.
//!
//! These wrap `format_args!` so call sites read like `println!`.
//!
//! # Examples
//!
//! ```
//! use logshim::prelude::*;
//! use logshim::{info, msgf};
//!
//! let log = CoreLogger::new(std::io::sink(), Level::Info);
//!
//! let port = 8080;
//! info!(log, "Server listening on port {}", port);
//!
//! msgf!(log.warn().str("peer", "10.0.0.7"), "retry {} of {}", 2, 5);
//! ```

/// Finish a [`Message`](crate::Message) with a formatted text.
///
/// ```
/// # use logshim::prelude::*;
/// # let log = CoreLogger::new(std::io::sink(), Level::Debug);
/// use logshim::msgf;
/// msgf!(log.info(), "count={}", 7);
/// ```
#[macro_export]
macro_rules! msgf {
    ($message:expr, $($arg:tt)+) => {
        $crate::Message::msgf($message, format_args!($($arg)+))
    };
}

/// Log a formatted line at a level chosen at runtime.
///
/// ```
/// # use logshim::prelude::*;
/// # let log = CoreLogger::new(std::io::sink(), Level::Debug);
/// use logshim::log;
/// log!(log, Level::Notice, "Cache warmed in {}ms", 12);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::msgf!($crate::ShimLogger::at_level(&$logger, $level), $($arg)+)
    };
}

/// Log a formatted debug-level line.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::msgf!($crate::ShimLogger::debug(&$logger), $($arg)+)
    };
}

/// Log a formatted info-level line.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::msgf!($crate::ShimLogger::info(&$logger), $($arg)+)
    };
}

/// Log a formatted notice-level line.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::msgf!($crate::ShimLogger::notice(&$logger), $($arg)+)
    };
}

/// Log a formatted warn-level line.
///
/// ```
/// # use logshim::prelude::*;
/// # let log = CoreLogger::new(std::io::sink(), Level::Debug);
/// use logshim::warn;
/// warn!(log, "Disk usage at {}%", 91);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::msgf!($crate::ShimLogger::warn(&$logger), $($arg)+)
    };
}

/// Log a formatted error-level line.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::msgf!($crate::ShimLogger::error(&$logger), $($arg)+)
    };
}
