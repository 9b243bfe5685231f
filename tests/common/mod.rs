//! Shared harness for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use chanlog::console::CapturedConsole;
use chanlog::{ChannelLogger, EventKind, LogEvent};

/// A logger wired to an in-memory console, a counting break handler, and
/// one recording observer per event kind.
pub struct Harness {
    pub logger: ChannelLogger,
    pub console: CapturedConsole,
    pub breaks: Arc<AtomicUsize>,
    pub events: Arc<Mutex<Vec<LogEvent>>>,
}

impl Harness {
    pub fn new() -> Self {
        let console = CapturedConsole::new();
        let breaks = Arc::new(AtomicUsize::new(0));
        let counter = breaks.clone();

        let logger = ChannelLogger::builder()
            .console(console.clone())
            .break_handler(move |_report: &str| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        let events = Arc::new(Mutex::new(Vec::new()));
        for kind in EventKind::ALL {
            let events = events.clone();
            logger.subscribe(kind, move |e| events.lock().unwrap().push(e.clone()));
        }

        Self {
            logger,
            console,
            breaks,
            events,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.console.lines()
    }

    pub fn break_count(&self) -> usize {
        self.breaks.load(Ordering::SeqCst)
    }

    /// Observed messages for one event kind.
    pub fn observed(&self, kind: EventKind) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Forget everything recorded so far.
    pub fn reset(&self) {
        self.console.clear();
        self.events.lock().unwrap().clear();
        self.breaks.store(0, Ordering::SeqCst);
    }
}
