//! Observer registration and fan-out.
//!
//! # Responsibilities
//! - Hold one ordered callback list per event kind
//! - Add/remove handlers at any time, identified by `ObserverId`
//! - Invoke handlers synchronously, in registration order
//!
//! # Design Decisions
//! - Lists are copy-on-write snapshots behind `ArcSwap`. Dispatch iterates a
//!   snapshot without holding any lock, so a handler may register or remove
//!   observers; changes apply from the next event on
//! - A handler that logs on the same channel recurses without bound; that is
//!   the caller's obligation to avoid

use arc_swap::ArcSwap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use crate::event::{EventKind, LogEvent};

/// Shared observer callback.
pub type Handler = Arc<dyn Fn(&LogEvent) + Send + Sync>;

/// Handle returned on registration, used to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Ordered callback list for a single event kind.
pub struct ObserverList {
    entries: ArcSwap<Vec<(ObserverId, Handler)>>,
}

impl ObserverList {
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Register a handler at the end of the list.
    pub fn add<F>(&self, handler: F) -> ObserverId
    where
        F: Fn(&LogEvent) + Send + Sync + 'static,
    {
        let id = ObserverId(NEXT_ID.fetch_add(1, Ordering::Relaxed));
        let handler: Handler = Arc::new(handler);
        self.entries.rcu(|current| {
            let mut next = Vec::clone(current);
            next.push((id, handler.clone()));
            next
        });
        id
    }

    /// Remove a handler. Returns false if it was not registered here.
    pub fn remove(&self, id: ObserverId) -> bool {
        let mut removed = false;
        self.entries.rcu(|current| {
            let next: Vec<_> = current.iter().filter(|(i, _)| *i != id).cloned().collect();
            removed = next.len() != current.len();
            next
        });
        removed
    }

    /// Invoke every registered handler with the event.
    pub fn notify(&self, event: &LogEvent) {
        let snapshot = self.entries.load_full();
        for (_, handler) in snapshot.iter() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ObserverList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverList").field("len", &self.len()).finish()
    }
}

/// The four per-kind observer lists.
#[derive(Debug, Default)]
pub struct Observers {
    channel_set: ObserverList,
    log: ObserverList,
    method_call: ObserverList,
    assert: ObserverList,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_kind(&self, kind: EventKind) -> &ObserverList {
        match kind {
            EventKind::ChannelSet => &self.channel_set,
            EventKind::Log => &self.log,
            EventKind::MethodCall => &self.method_call,
            EventKind::Assert => &self.assert,
        }
    }

    /// Route an event to the list matching its kind.
    pub fn notify(&self, event: &LogEvent) {
        self.for_kind(event.kind).notify(event);
    }
}
