//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Abstract level code outside the known range
    #[error("invalid log level {level}, defaulting to WARN level")]
    InvalidLevel { level: i32 },

    /// Integer that is not the code of any abstract level
    #[error("unknown log level code {code}")]
    UnknownLevelCode { code: i32 },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid level error
    pub fn invalid_level(level: i32) -> Self {
        LoggerError::InvalidLevel { level }
    }

    /// Create an unknown level code error
    pub fn unknown_level_code(code: i32) -> Self {
        LoggerError::UnknownLevelCode { code }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
