//! Behavioural tests for the channel logger.
#![cfg(any(debug_assertions, feature = "editor"))]

use std::sync::{Arc, Mutex};
use chanlog::{CallerId, Channel, EventKind};

mod common;
use common::Harness;

fn caller() -> CallerId {
    CallerId::from_path("game::player::Player::respawn::__chanlog_here", "src/player.rs", 12)
}

#[test]
fn test_log_is_noop_for_fresh_channels() {
    let h = Harness::new();
    for channel in Channel::ALL {
        h.logger.log(channel, "nothing");
    }
    assert!(h.lines().is_empty());
    assert!(h.events.lock().unwrap().is_empty());
}

#[test]
fn test_enabled_log_emits_once_to_console_and_observers() {
    let h = Harness::new();
    h.logger.set_channel(Channel::Sound, true);
    h.reset();

    h.logger.log(Channel::Sound, "play explosion.wav");

    assert_eq!(h.lines(), vec!["SOUND: play explosion.wav\n"]);
    assert_eq!(h.observed(EventKind::Log), vec!["SOUND: play explosion.wav\n"]);
    assert!(h.observed(EventKind::ChannelSet).is_empty());
}

#[test]
fn test_log_observers_run_in_registration_order() {
    let h = Harness::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    for n in 1..=3 {
        let order = order.clone();
        h.logger
            .subscribe(EventKind::Log, move |e| order.lock().unwrap().push((n, e.message.clone())));
    }

    h.logger.set_channel(Channel::Hud, true);
    h.logger.log(Channel::Hud, "score 10");

    let order = order.lock().unwrap();
    assert_eq!(order.len(), 3);
    assert_eq!(order.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(order.iter().all(|(_, m)| m == "HUD: score 10\n"));
}

#[test]
fn test_disable_restores_noop() {
    let h = Harness::new();
    h.logger.set_channel(Channel::Input, true);
    h.logger.set_channel(Channel::Input, false);
    h.reset();

    h.logger.log(Channel::Input, "key");
    h.logger.log_method_call(Channel::Input, caller());

    assert!(h.lines().is_empty());
    assert!(h.events.lock().unwrap().is_empty());
}

#[test]
fn test_set_channel_not_deduplicated() {
    let h = Harness::new();
    for _ in 0..3 {
        h.logger.set_channel(Channel::GameObject, false);
    }

    assert_eq!(h.lines(), vec!["GAME_OBJECT: CHANNEL IS False\n"; 3]);
    assert_eq!(h.observed(EventKind::ChannelSet).len(), 3);
}

#[test]
fn test_assert_true_is_noop() {
    let h = Harness::new();
    h.logger.assert(true, "never shown", caller());

    assert!(h.lines().is_empty());
    assert!(h.observed(EventKind::Assert).is_empty());
    assert_eq!(h.break_count(), 0);
}

#[test]
fn test_assert_false_reports_and_breaks_once() {
    let h = Harness::new();
    h.logger.assert(false, "respawn without checkpoint", caller());

    let expected = "respawn without checkpoint\nMETHODCALL Player::respawn\n";
    assert_eq!(h.lines(), vec![expected]);
    assert_eq!(h.observed(EventKind::Assert), vec![expected]);
    assert_eq!(h.break_count(), 1);

    let events = h.events.lock().unwrap();
    assert_eq!(events[0].channel, None);
    assert_eq!(events[0].caller.map(|c| c.line), Some(12));
}

#[test]
fn test_assert_ignores_channel_state() {
    let h = Harness::new();
    for channel in Channel::ALL {
        h.logger.set_channel(channel, false);
    }
    h.reset();

    h.logger.assert(false, "still reported", caller());
    assert_eq!(h.lines().len(), 1);
    assert_eq!(h.break_count(), 1);
}

#[test]
fn test_method_call_reports_caller() {
    let h = Harness::new();
    h.logger.log_method_call(Channel::Player, caller());
    assert!(h.lines().is_empty());

    h.logger.set_channel(Channel::Player, true);
    h.reset();
    h.logger.log_method_call(Channel::Player, caller());

    assert_eq!(h.lines(), vec!["PLAYER: METHODCALL Player::respawn\n"]);
    assert_eq!(h.observed(EventKind::MethodCall).len(), 1);
}

#[test]
fn test_unsubscribed_observer_stops_receiving() {
    let h = Harness::new();
    let seen = Arc::new(Mutex::new(0));
    let counter = seen.clone();
    let id = h.logger.subscribe(EventKind::Log, move |_| *counter.lock().unwrap() += 1);

    h.logger.set_channel(Channel::Database, true);
    h.logger.log(Channel::Database, "first");
    assert!(h.logger.unsubscribe(EventKind::Log, id));
    h.logger.log(Channel::Database, "second");

    assert_eq!(*seen.lock().unwrap(), 1);
    assert_eq!(h.observed(EventKind::Log).len(), 2);
}

#[test]
fn test_player_scenario() {
    let h = Harness::new();

    h.logger.set_channel(Channel::Player, true);
    h.logger.log(Channel::Player, "jump");
    h.logger.set_channel(Channel::Player, false);
    h.logger.log(Channel::Player, "jump2");

    assert_eq!(
        h.lines(),
        vec![
            "PLAYER: CHANNEL IS True\n",
            "PLAYER: jump\n",
            "PLAYER: CHANNEL IS False\n",
        ]
    );
}

#[test]
fn test_shared_across_threads() {
    let h = Arc::new(Harness::new());
    h.logger.set_channel(Channel::Renderer, true);
    h.reset();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let h = h.clone();
            std::thread::spawn(move || {
                for j in 0..25 {
                    h.logger.log(Channel::Renderer, &format!("thread {} frame {}", i, j));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(h.lines().len(), 100);
    assert_eq!(h.observed(EventKind::Log).len(), 100);
}
