//! Logging macros.
//!
//! Each macro expands behind `if $crate::ACTIVE`, checks the channel before
//! any formatting happens, and captures the caller at the call site. They
//! log through `chanlog::global()` unless a `logger:` is given first.
//!
//! ```rust
//! use chanlog::{chan_assert, chan_log, log_method_call, Channel};
//!
//! struct Player { health: i32 }
//!
//! impl Player {
//!     fn jump(&self) {
//!         log_method_call!(Channel::Player);
//!         chan_log!(Channel::Player, "jump with health {}", self.health);
//!         chan_assert!(self.health >= 0, "health below zero: {}", self.health);
//!     }
//! }
//!
//! chanlog::global().set_channel(Channel::Player, true);
//! Player { health: 3 }.jump();
//! ```

/// Capture the identity of the enclosing function as a `CallerId`.
#[macro_export]
macro_rules! caller {
    () => {{
        fn __chanlog_here() {}
        fn __chanlog_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallerId::from_path(
            __chanlog_name_of(__chanlog_here),
            ::std::file!(),
            ::std::line!(),
        )
    }};
}

/// Log a formatted message on a channel.
///
/// The message is only formatted when the channel is enabled.
#[macro_export]
macro_rules! chan_log {
    (logger: $logger:expr, $channel:expr, $($arg:tt)+) => {{
        if $crate::ACTIVE {
            let logger: &$crate::ChannelLogger = $logger;
            let channel: $crate::Channel = $channel;
            if logger.is_enabled(channel) {
                logger.log(channel, &::std::format!($($arg)+));
            }
        }
    }};
    ($channel:expr, $($arg:tt)+) => {
        $crate::chan_log!(logger: $crate::global(), $channel, $($arg)+)
    };
}

/// Log that the enclosing function was entered.
#[macro_export]
macro_rules! log_method_call {
    (logger: $logger:expr, $channel:expr $(,)?) => {{
        if $crate::ACTIVE {
            let logger: &$crate::ChannelLogger = $logger;
            let channel: $crate::Channel = $channel;
            if logger.is_enabled(channel) {
                logger.log_method_call(channel, $crate::caller!());
            }
        }
    }};
    ($channel:expr $(,)?) => {
        $crate::log_method_call!(logger: $crate::global(), $channel)
    };
}

/// Report and break if the condition is false.
///
/// The message is only formatted on failure. Channels do not apply.
#[macro_export]
macro_rules! chan_assert {
    (logger: $logger:expr, $cond:expr, $($arg:tt)+) => {{
        if $crate::ACTIVE {
            let logger: &$crate::ChannelLogger = $logger;
            if !($cond) {
                logger.assert(false, &::std::format!($($arg)+), $crate::caller!());
            }
        }
    }};
    ($cond:expr, $($arg:tt)+) => {
        $crate::chan_assert!(logger: $crate::global(), $cond, $($arg)+)
    };
}
