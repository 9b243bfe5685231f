//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DebugConfig (validated)
//!     → ChannelLogger::from_config / init_logging
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → ChannelLogger::apply_channels (only changed channels are reported)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid config
//! - Unknown channel names are rejected by serde, duplicates by validation
//! - Only channel states are hot-reloaded; console and assert settings
//!   apply when a logger is built

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AssertAction, ChannelsConfig, ConsoleStyle, DebugConfig, LogFormat};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
