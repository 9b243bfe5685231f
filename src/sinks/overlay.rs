//! Bounded buffer of recent events for an on-screen overlay.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use crate::event::{EventKind, LogEvent};
use crate::logger::ChannelLogger;
use crate::observer::ObserverId;

const DEFAULT_CAPACITY: usize = 64;

/// Keeps the most recent events; the oldest is dropped when full.
///
/// Clones share the same buffer, so one clone can be attached to a logger
/// while the renderer reads from another.
#[derive(Debug, Clone)]
pub struct OverlayBuffer {
    capacity: usize,
    buffer: Arc<Mutex<VecDeque<LogEvent>>>,
}

impl OverlayBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            buffer: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
        }
    }

    pub fn record(&self, event: &LogEvent) {
        let mut buffer = match self.buffer.lock() {
            Ok(b) => b,
            Err(poisoned) => poisoned.into_inner(),
        };
        if buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(event.clone());
    }

    /// Buffered lines, oldest first, without trailing newlines.
    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .map(|e| e.message.trim_end_matches('\n').to_string())
            .collect()
    }

    pub fn events(&self) -> Vec<LogEvent> {
        self.buffer
            .lock()
            .map(|b| b.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        if let Ok(mut b) = self.buffer.lock() {
            b.clear();
        }
    }

    /// Subscribe a shared handle of this buffer to each of `kinds`.
    pub fn attach(&self, logger: &ChannelLogger, kinds: &[EventKind]) -> Vec<ObserverId> {
        kinds
            .iter()
            .map(|kind| {
                let overlay = self.clone();
                logger.subscribe(*kind, move |event| overlay.record(event))
            })
            .collect()
    }
}

impl Default for OverlayBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
