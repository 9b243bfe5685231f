//! Ready-made observers.
//!
//! # Data Flow
//! ```text
//! ChannelLogger emits LogEvent
//!     → observer list for the event kind
//!     → file.rs (append lines or JSON events to disk)
//!     → overlay.rs (bounded buffer for on-screen display)
//! ```
//!
//! # Design Decisions
//! - Sinks never log through the channel logger, so they cannot recurse
//! - Sink failures are reported through `tracing` and swallowed; a logging
//!   call never fails because an observer did

pub mod file;
pub mod overlay;

pub use file::{FileFormat, FileObserver};
pub use overlay::OverlayBuffer;
