//! Channel-gated debug logging for game runtimes.
//!
//! # Architecture Overview
//!
//! ```text
//!   game code
//!      │  chan_log! / log_method_call! / chan_assert!   (caller! captures Type::method)
//!      ▼
//!   ┌──────────────────────────── ChannelLogger ────────────────────────────┐
//!   │  ACTIVE gate → ChannelTable (bit per Channel) → LogEvent (line)       │
//!   │        │                          │                      │            │
//!   │        ▼                          ▼                      ▼            │
//!   │   Console sink            Observers (per kind)     BreakHandler       │
//!   │   tracing/stdout          file, overlay, custom    (failed assert)    │
//!   └───────────────────────────────────────────────────────────────────────┘
//!      ▲
//!      │ apply_channels on change
//!   config (TOML) + watcher
//! ```
//!
//! # Build modes
//!
//! `ACTIVE` is true in builds with debug assertions, or with the `editor`
//! feature. When false, every logging entry point returns before doing any
//! work and the macros compile to nothing.

// Core
pub mod caller;
pub mod channel;
pub mod event;
pub mod logger;
pub mod observer;
pub mod state;

// Output
pub mod console;
pub mod pause;
pub mod sinks;

// Cross-cutting concerns
pub mod config;
pub mod observability;

mod macros;

/// True when channel logging is compiled in.
pub const ACTIVE: bool = cfg!(any(debug_assertions, feature = "editor"));

pub use caller::CallerId;
pub use channel::{Channel, ParseChannelError};
pub use config::DebugConfig;
pub use event::{EventKind, LogEvent};
pub use logger::{global, install, ChannelLogger, LoggerBuilder};
pub use observer::ObserverId;
