//! The channel logger.
//!
//! # Data Flow
//! ```text
//! set_channel / log / log_method_call / assert
//!     → ACTIVE gate (compile-time constant)
//!     → channel-state check (assert: condition check)
//!     → LogEvent (formatted line)
//!     → console sink
//!     → observers for the event kind, in registration order
//!     → break handler (assert only)
//! ```
//!
//! # Design Decisions
//! - The state table and observer lists live in an instance, so tests and
//!   tools can build independent loggers; `global()` is a convenience
//!   instance for game code
//! - Nothing here returns an error. A failed assert is a deliberate
//!   interruption, delivered through the break handler
//! - Every entry point checks `ACTIVE` first; with it false the calls
//!   optimise away

use std::fmt;
use std::sync::OnceLock;
use crate::caller::CallerId;
use crate::channel::Channel;
use crate::config::schema::{AssertAction, ChannelsConfig, ConsoleStyle, DebugConfig};
use crate::console::{Console, SilentConsole, StdoutConsole, TracingConsole};
use crate::event::{EventKind, LogEvent};
use crate::observer::{ObserverId, Observers};
use crate::pause::{BreakHandler, ContinueBreak, PanicBreak, PromptBreak};
use crate::state::ChannelTable;
use crate::ACTIVE;

/// Channel-gated debug logger.
pub struct ChannelLogger {
    table: ChannelTable,
    observers: Observers,
    console: Box<dyn Console>,
    breaker: Box<dyn BreakHandler>,
}

impl ChannelLogger {
    /// Logger with every channel disabled, tracing console, pause on assert.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a logger from configuration. Initial channel states are set
    /// without notifications.
    pub fn from_config(config: &DebugConfig) -> Self {
        let builder = Self::builder().channels(&config.channels);

        let builder = match config.console.style {
            ConsoleStyle::Tracing => builder.console(TracingConsole),
            ConsoleStyle::Stdout => builder.console(StdoutConsole),
            ConsoleStyle::Silent => builder.console(SilentConsole),
        };

        let builder = match config.assert.on_failure {
            AssertAction::Pause => builder.break_handler(PromptBreak),
            AssertAction::Panic => builder.break_handler(PanicBreak),
            AssertAction::Continue => builder.break_handler(ContinueBreak),
        };

        builder.build()
    }

    /// Return true if logging on this channel would produce output.
    pub fn is_enabled(&self, channel: Channel) -> bool {
        ACTIVE && self.table.is_enabled(channel)
    }

    /// Channels currently enabled, in ordinal order. Empty when logging is
    /// compiled out, matching `is_enabled`.
    pub fn enabled_channels(&self) -> Vec<Channel> {
        if !ACTIVE {
            return Vec::new();
        }
        self.table.enabled()
    }

    /// Enable or disable a channel.
    ///
    /// Always reports the new state, even when it did not change.
    pub fn set_channel(&self, channel: Channel, enabled: bool) {
        if !ACTIVE {
            return;
        }
        self.table.set(channel, enabled);
        self.emit(&LogEvent::channel_set(channel, enabled));
    }

    /// Log a message if the channel is enabled.
    pub fn log(&self, channel: Channel, message: &str) {
        if !self.is_enabled(channel) {
            return;
        }
        self.emit(&LogEvent::log(channel, message));
    }

    /// Log that `caller` was entered, if the channel is enabled.
    ///
    /// Use `log_method_call!` to capture the caller automatically.
    pub fn log_method_call(&self, channel: Channel, caller: CallerId) {
        if !self.is_enabled(channel) {
            return;
        }
        self.emit(&LogEvent::method_call(channel, caller));
    }

    /// Report and break if `condition` is false. Not gated by any channel.
    ///
    /// Use `chan_assert!` to capture the caller automatically.
    pub fn assert(&self, condition: bool, message: &str, caller: CallerId) {
        if !ACTIVE || condition {
            return;
        }
        let event = LogEvent::assert(message, caller);
        self.emit(&event);
        self.breaker.on_break(&event.message);
    }

    /// Bring channel states in line with `config`.
    ///
    /// Only channels whose state changes are set (and reported). Returns
    /// the number of channels changed; always 0 when logging is compiled out.
    pub fn apply_channels(&self, config: &ChannelsConfig) -> usize {
        if !ACTIVE {
            return 0;
        }
        let mut changed = 0;
        for channel in Channel::ALL {
            let wanted = config.wants(channel);
            if self.table.is_enabled(channel) != wanted {
                self.set_channel(channel, wanted);
                changed += 1;
            }
        }
        changed
    }

    /// Register an observer for one event kind.
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> ObserverId
    where
        F: Fn(&LogEvent) + Send + Sync + 'static,
    {
        self.observers.for_kind(kind).add(handler)
    }

    /// Deregister an observer. Returns false if it was not registered for
    /// this kind.
    pub fn unsubscribe(&self, kind: EventKind, id: ObserverId) -> bool {
        self.observers.for_kind(kind).remove(id)
    }

    pub fn observer_count(&self, kind: EventKind) -> usize {
        self.observers.for_kind(kind).len()
    }

    fn emit(&self, event: &LogEvent) {
        self.console.emit(event.kind, &event.message);
        self.observers.notify(event);
    }
}

impl Default for ChannelLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChannelLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelLogger")
            .field("table", &self.table)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

/// Builder for `ChannelLogger`.
pub struct LoggerBuilder {
    console: Box<dyn Console>,
    breaker: Box<dyn BreakHandler>,
    table: ChannelTable,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            console: Box::new(TracingConsole),
            breaker: Box::new(PromptBreak),
            table: ChannelTable::new(),
        }
    }

    pub fn console<C: Console + 'static>(mut self, console: C) -> Self {
        self.console = Box::new(console);
        self
    }

    pub fn break_handler<B: BreakHandler + 'static>(mut self, breaker: B) -> Self {
        self.breaker = Box::new(breaker);
        self
    }

    /// Start with a channel enabled. No notification is emitted.
    pub fn enable(self, channel: Channel) -> Self {
        self.table.set(channel, true);
        self
    }

    pub fn enable_all(mut self) -> Self {
        for channel in Channel::ALL {
            self = self.enable(channel);
        }
        self
    }

    /// Start with the channel states described by `config`.
    pub fn channels(self, config: &ChannelsConfig) -> Self {
        for channel in Channel::ALL {
            self.table.set(channel, config.wants(channel));
        }
        self
    }

    pub fn build(self) -> ChannelLogger {
        ChannelLogger {
            table: self.table,
            observers: Observers::new(),
            console: self.console,
            breaker: self.breaker,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<ChannelLogger> = OnceLock::new();

/// The process-wide logger used by the logging macros.
///
/// Created with `ChannelLogger::new()` on first use unless `install` ran
/// first.
pub fn global() -> &'static ChannelLogger {
    GLOBAL.get_or_init(ChannelLogger::new)
}

/// Install the process-wide logger. Fails, handing the logger back, if the
/// global logger already exists.
pub fn install(logger: ChannelLogger) -> Result<(), ChannelLogger> {
    GLOBAL.set(logger)
}
