//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! TracingConsole (channel lines, target "chanlog")
//! config watcher, sinks (internal diagnostics)
//!     → tracing events
//!     → logging.rs (subscriber: filter + pretty/JSON formatter)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - The library only emits tracing events; installing a subscriber is left
//!   to the binary (or the host game) via `init_logging`
//! - `RUST_LOG` overrides the configured filter

pub mod logging;
