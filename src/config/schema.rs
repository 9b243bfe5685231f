//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the logger.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use crate::channel::Channel;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DebugConfig {
    /// Initial channel states.
    pub channels: ChannelsConfig,

    /// Console sink selection.
    pub console: ConsoleConfig,

    /// Failed-assert behaviour.
    pub assert: AssertConfig,

    /// Tracing subscriber settings.
    pub logging: LoggingConfig,
}

/// Which channels start enabled.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ChannelsConfig {
    /// Channels to enable. Unknown names fail deserialization.
    pub enabled: Vec<Channel>,

    /// Enable every channel.
    pub all: bool,
}

impl ChannelsConfig {
    /// Desired state of a channel under this config.
    pub fn wants(&self, channel: Channel) -> bool {
        self.all || self.enabled.contains(&channel)
    }
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub style: ConsoleStyle,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStyle {
    /// Route lines through `tracing`.
    #[default]
    Tracing,
    /// Write exact lines to stdout.
    Stdout,
    /// Drop console output; observers still fire.
    Silent,
}

/// Failed-assert configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AssertConfig {
    pub on_failure: AssertAction,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssertAction {
    /// Wait for the developer at the terminal.
    #[default]
    Pause,
    /// Panic with the assert report.
    Panic,
    /// Report and keep going.
    Continue,
}

/// Tracing subscriber configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "chanlog=debug,info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}
