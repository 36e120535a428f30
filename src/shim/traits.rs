//! The backend-agnostic logging contract
//!
//! Application code is written against [`ShimLogger`] and [`Message`];
//! swapping the backend means swapping the type behind them, not the call
//! sites.

use super::level::Level;
use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;

/// A single log line under construction
///
/// Setters consume and return the builder so calls chain; the terminal
/// [`msg`](Message::msg) or [`msgf`](Message::msgf) consumes it for good.
pub trait Message: Sized {
    /// Attach an error cause under the conventional `error` key
    fn err(self, cause: &dyn StdError) -> Self;

    fn bool(self, key: &str, value: bool) -> Self;

    fn int(self, key: &str, value: i32) -> Self;

    fn int64(self, key: &str, value: i64) -> Self;

    fn uint64(self, key: &str, value: u64) -> Self;

    fn str(self, key: &str, value: &str) -> Self;

    fn time(self, key: &str, value: DateTime<Utc>) -> Self;

    /// Emit the line with `text` as its message
    fn msg(self, text: &str);

    /// Emit the line with a formatted message
    ///
    /// Usually called through the [`msgf!`](crate::msgf) macro.
    fn msgf(self, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(text) => self.msg(text),
            None => self.msg(&args.to_string()),
        }
    }
}

/// A logger exposing one builder entry point per abstract level
pub trait ShimLogger: Send + Sync {
    type Message: Message;

    /// Identifies the backend implementation in use
    fn name(&self) -> &str;

    /// Start an error-level line carrying `cause`
    fn err(&self, cause: &dyn StdError) -> Self::Message;

    fn error(&self) -> Self::Message;

    fn warn(&self) -> Self::Message;

    fn notice(&self) -> Self::Message;

    fn info(&self) -> Self::Message;

    fn debug(&self) -> Self::Message;

    /// Start a line at a level chosen at runtime
    fn at_level(&self, level: Level) -> Self::Message {
        match level {
            Level::Error => self.error(),
            Level::Warn => self.warn(),
            Level::Notice => self.notice(),
            Level::Info => self.info(),
            Level::Debug => self.debug(),
        }
    }
}

macro_rules! forward_shim_logger {
    ($($wrapper:ty),+) => {
        $(
            impl<L: ShimLogger + ?Sized> ShimLogger for $wrapper {
                type Message = L::Message;

                fn name(&self) -> &str {
                    (**self).name()
                }

                fn err(&self, cause: &dyn StdError) -> Self::Message {
                    (**self).err(cause)
                }

                fn error(&self) -> Self::Message {
                    (**self).error()
                }

                fn warn(&self) -> Self::Message {
                    (**self).warn()
                }

                fn notice(&self) -> Self::Message {
                    (**self).notice()
                }

                fn info(&self) -> Self::Message {
                    (**self).info()
                }

                fn debug(&self) -> Self::Message {
                    (**self).debug()
                }
            }
        )+
    };
}

forward_shim_logger!(&L, std::sync::Arc<L>, Box<L>);
