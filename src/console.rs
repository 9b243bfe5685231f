//! Console sink.
//!
//! # Responsibilities
//! - Write every emitted line to a text output surface
//!
//! # Design Decisions
//! - `TracingConsole` is the default so lines land wherever the host's
//!   tracing subscriber sends them (terminal, file, JSON)
//! - Lines carry their trailing newline; sinks that add their own strip it

use std::io::Write;
use std::sync::{Arc, Mutex};
use crate::event::EventKind;

/// Target used for every tracing event the console emits.
pub const TRACING_TARGET: &str = "chanlog";

/// Destination for emitted lines.
pub trait Console: Send + Sync {
    fn emit(&self, kind: EventKind, line: &str);
}

impl<F> Console for F
where
    F: Fn(EventKind, &str) + Send + Sync,
{
    fn emit(&self, kind: EventKind, line: &str) {
        self(kind, line)
    }
}

/// Emits through `tracing`. Asserts at WARN, everything else at INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn emit(&self, kind: EventKind, line: &str) {
        let line = line.trim_end_matches('\n');
        match kind {
            EventKind::Assert => tracing::warn!(target: TRACING_TARGET, kind = %kind, "{}", line),
            _ => tracing::info!(target: TRACING_TARGET, kind = %kind, "{}", line),
        }
    }
}

/// Writes the exact line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn emit(&self, _kind: EventKind, line: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = out.write_all(line.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "Failed to write log line to stdout");
        }
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentConsole;

impl Console for SilentConsole {
    fn emit(&self, _kind: EventKind, _line: &str) {}
}

/// Records lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CapturedConsole {
    lines: Arc<Mutex<Vec<(EventKind, String)>>>,
}

impl CapturedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|(_, line)| line).collect()
    }

    /// Lines with the event kind that produced them.
    pub fn entries(&self) -> Vec<(EventKind, String)> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl Console for CapturedConsole {
    fn emit(&self, kind: EventKind, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((kind, line.to_string()));
        }
    }
}
