//! Log events handed to the console sink and observers.

use serde::Serialize;
use std::fmt;
use crate::caller::CallerId;
use crate::channel::Channel;

/// Which operation produced an event. Each kind has its own observer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ChannelSet,
    Log,
    MethodCall,
    Assert,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::ChannelSet,
        EventKind::Log,
        EventKind::MethodCall,
        EventKind::Assert,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::ChannelSet => "channel_set",
            EventKind::Log => "log",
            EventKind::MethodCall => "method_call",
            EventKind::Assert => "assert",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single formatted diagnostic line plus the pieces it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEvent {
    pub kind: EventKind,
    /// Channel the line was logged on; `None` for asserts.
    pub channel: Option<Channel>,
    /// The exact line written to the console, trailing newline included.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<CallerId>,
}

impl LogEvent {
    pub(crate) fn channel_set(channel: Channel, enabled: bool) -> Self {
        Self {
            kind: EventKind::ChannelSet,
            channel: Some(channel),
            message: format!("{}: CHANNEL IS {}\n", channel, bool_name(enabled)),
            caller: None,
        }
    }

    pub(crate) fn log(channel: Channel, message: &str) -> Self {
        Self {
            kind: EventKind::Log,
            channel: Some(channel),
            message: format!("{}: {}\n", channel, message),
            caller: None,
        }
    }

    pub(crate) fn method_call(channel: Channel, caller: CallerId) -> Self {
        Self {
            kind: EventKind::MethodCall,
            channel: Some(channel),
            message: format!("{}: METHODCALL {}\n", channel, caller),
            caller: Some(caller),
        }
    }

    pub(crate) fn assert(message: &str, caller: CallerId) -> Self {
        Self {
            kind: EventKind::Assert,
            channel: None,
            message: format!("{}\nMETHODCALL {}\n", message, caller),
            caller: Some(caller),
        }
    }
}

fn bool_name(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller() -> CallerId {
        CallerId::from_path("game::Player::jump::__chanlog_here", "src/player.rs", 42)
    }

    #[test]
    fn test_line_formats() {
        assert_eq!(
            LogEvent::channel_set(Channel::Player, true).message,
            "PLAYER: CHANNEL IS True\n"
        );
        assert_eq!(
            LogEvent::channel_set(Channel::Hud, false).message,
            "HUD: CHANNEL IS False\n"
        );
        assert_eq!(LogEvent::log(Channel::Player, "jump").message, "PLAYER: jump\n");
        assert_eq!(
            LogEvent::method_call(Channel::Camera, caller()).message,
            "CAMERA: METHODCALL Player::jump\n"
        );
        assert_eq!(
            LogEvent::assert("health below zero", caller()).message,
            "health below zero\nMETHODCALL Player::jump\n"
        );
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(LogEvent::log(Channel::Sound, "beep")).unwrap();
        assert_eq!(json["kind"], "log");
        assert_eq!(json["channel"], "SOUND");
        assert_eq!(json["message"], "SOUND: beep\n");
        assert!(json.get("caller").is_none());

        let json = serde_json::to_value(LogEvent::assert("bad", caller())).unwrap();
        assert_eq!(json["channel"], serde_json::Value::Null);
        assert_eq!(json["caller"]["method"], "jump");
        assert_eq!(json["caller"]["line"], 42);
    }
}
