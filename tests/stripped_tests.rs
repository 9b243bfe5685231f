//! Release builds without the `editor` feature compile logging out.
#![cfg(not(any(debug_assertions, feature = "editor")))]

use chanlog::{chan_assert, chan_log, log_method_call, CallerId, Channel};

mod common;
use common::Harness;

fn caller() -> CallerId {
    CallerId::from_path("game::player::Player::respawn::__chanlog_here", "src/player.rs", 12)
}

#[test]
fn test_every_entry_point_is_silent() {
    let h = Harness::new();

    h.logger.set_channel(Channel::Player, true);
    assert!(!h.logger.is_enabled(Channel::Player));

    h.logger.log(Channel::Player, "jump");
    h.logger.log_method_call(Channel::Player, caller());
    h.logger.assert(false, "health below zero", caller());

    chan_log!(logger: &h.logger, Channel::Player, "score {}", 10);
    log_method_call!(logger: &h.logger, Channel::Player);
    chan_assert!(logger: &h.logger, false, "ammo {}", -1);

    assert!(h.lines().is_empty());
    assert!(h.events.lock().unwrap().is_empty());
    assert_eq!(h.break_count(), 0);
}
