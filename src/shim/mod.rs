//! Logging facade: abstract levels, the logger/message contract, and its
//! implementation over [`crate::core`]

pub mod core_logger;
pub mod level;
pub mod traits;

pub use core_logger::{CoreLogger, CoreMessage, CORE_LOGGER_NAME};
pub use level::{translate_level, Level, FALLBACK_LEVEL};
pub use traits::{Message, ShimLogger};
