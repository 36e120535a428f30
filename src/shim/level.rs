//! Abstract severity levels and their translation to backend levels

use crate::core::{LogLevel, LoggerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend level used for any unrecognized abstract level
pub const FALLBACK_LEVEL: LogLevel = LogLevel::Warn;

/// Backend-independent severity, ordered from least to most severe
///
/// The integer codes are stable, so levels read from configuration as
/// numbers can be passed straight to [`translate_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Notice = 2,
    Warn = 3,
    Error = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warn,
        Level::Error,
    ];

    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.code()
    }
}

impl TryFrom<i32> for Level {
    type Error = LoggerError;

    fn try_from(code: i32) -> Result<Self, LoggerError> {
        Level::ALL
            .into_iter()
            .find(|level| level.code() == code)
            .ok_or_else(|| LoggerError::unknown_level_code(code))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "NOTICE" => Ok(Level::Notice),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Map an abstract level (or raw level code) onto the backend scale
///
/// Notice has no backend counterpart and folds into Info. Unknown codes map
/// to [`FALLBACK_LEVEL`] and come back with an error describing the
/// substitution; the error is for the caller to log, not to abort on.
///
/// ```
/// use logshim::{translate_level, Level, LogLevel};
///
/// assert_eq!(translate_level(Level::Notice).0, LogLevel::Info);
///
/// let (level, err) = translate_level(99);
/// assert_eq!(level, LogLevel::Warn);
/// assert!(err.unwrap().to_string().contains("99"));
/// ```
pub fn translate_level(level: impl Into<i32>) -> (LogLevel, Option<LoggerError>) {
    let code = level.into();
    match Level::try_from(code) {
        Ok(Level::Error) => (LogLevel::Error, None),
        Ok(Level::Warn) => (LogLevel::Warn, None),
        Ok(Level::Notice) | Ok(Level::Info) => (LogLevel::Info, None),
        Ok(Level::Debug) => (LogLevel::Debug, None),
        Err(_) => (FALLBACK_LEVEL, Some(LoggerError::invalid_level(code))),
    }
}
