//! Channel state table.
//!
//! One enabled bit per channel, all starting disabled. The table is a
//! single atomic bit vector so a logger can be shared between threads
//! without a lock.

use std::sync::atomic::{AtomicU32, Ordering};
use crate::channel::Channel;

/// Process-lifetime enable/disable flags, indexed by channel ordinal.
#[derive(Debug, Default)]
pub struct ChannelTable {
    bits: AtomicU32,
}

impl ChannelTable {
    /// Create a table with every channel disabled.
    pub fn new() -> Self {
        Self::default()
    }

    const fn mask(channel: Channel) -> u32 {
        1 << channel.ordinal() as u32
    }

    /// Return true if the channel is enabled.
    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.bits.load(Ordering::Relaxed) & Self::mask(channel) != 0
    }

    /// Set a channel's state, returning the previous state.
    pub fn set(&self, channel: Channel, enabled: bool) -> bool {
        let mask = Self::mask(channel);
        let prev = if enabled {
            self.bits.fetch_or(mask, Ordering::Relaxed)
        } else {
            self.bits.fetch_and(!mask, Ordering::Relaxed)
        };
        prev & mask != 0
    }

    /// Channels currently enabled, in ordinal order.
    pub fn enabled(&self) -> Vec<Channel> {
        let bits = self.bits.load(Ordering::Relaxed);
        Channel::ALL
            .into_iter()
            .filter(|c| bits & Self::mask(*c) != 0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_channels_start_disabled() {
        let table = ChannelTable::new();
        for channel in Channel::ALL {
            assert!(!table.is_enabled(channel));
        }
        assert!(table.enabled().is_empty());
    }

    #[test]
    fn test_set_is_per_channel() {
        let table = ChannelTable::new();

        assert!(!table.set(Channel::Player, true));
        assert!(table.is_enabled(Channel::Player));
        assert!(!table.is_enabled(Channel::Camera));

        // Setting the same state again reports it was already set
        assert!(table.set(Channel::Player, true));

        table.set(Channel::GameManager, true);
        assert_eq!(table.enabled(), vec![Channel::GameManager, Channel::Player]);

        assert!(table.set(Channel::Player, false));
        assert_eq!(table.enabled(), vec![Channel::GameManager]);
    }
}
