//! Debug channel definitions.
//!
//! # Responsibilities
//! - Enumerate the fixed set of channels the runtime can log to
//! - Provide the stable ordinal used to index the state table
//! - Map channels to and from their upper-snake display names
//!
//! # Design Decisions
//! - The set is closed at compile time; callers cannot name a channel
//!   outside it, so logging calls never validate channel input
//! - Names are only parsed at the config/CLI boundary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named category of debug output.
///
/// Add channels for your game here. The ordinal (declaration order) is the
/// slot in the state table.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Channel {
    GameManager = 0,
    Database = 1,
    GameObject = 2,
    Hud = 3,
    Renderer = 4,
    Sound = 5,
    Input = 6,
    Camera = 7,
    Player = 8,
}

// The state table is a single u32 bit vector.
const _: () = assert!(Channel::COUNT <= 32);

impl Channel {
    /// Every channel, in ordinal order.
    pub const ALL: [Channel; 9] = [
        Channel::GameManager,
        Channel::Database,
        Channel::GameObject,
        Channel::Hud,
        Channel::Renderer,
        Channel::Sound,
        Channel::Input,
        Channel::Camera,
        Channel::Player,
    ];

    /// Number of channels; sizes the state table.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable slot index of this channel.
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Display name as it appears in console output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::GameManager => "GAME_MANAGER",
            Channel::Database => "DATABASE",
            Channel::GameObject => "GAME_OBJECT",
            Channel::Hud => "HUD",
            Channel::Renderer => "RENDERER",
            Channel::Sound => "SOUND",
            Channel::Input => "INPUT",
            Channel::Camera => "CAMERA",
            Channel::Player => "PLAYER",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a name does not match any channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown channel '{0}'")]
pub struct ParseChannelError(pub String);

impl FromStr for Channel {
    type Err = ParseChannelError;

    /// Accepts the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseChannelError(s.to_string()))
    }
}
