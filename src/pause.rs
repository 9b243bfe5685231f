//! Break handling for failed assertions.
//!
//! After a failed assert has been reported, the logger hands the report to
//! a `BreakHandler` so a developer can inspect state before execution goes
//! on.

use std::io::{BufRead, IsTerminal, Write};

/// What to do once a failed assertion has been reported.
pub trait BreakHandler: Send + Sync {
    fn on_break(&self, report: &str);
}

impl<F> BreakHandler for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_break(&self, report: &str) {
        self(report)
    }
}

/// Blocks until Enter is pressed when a terminal is attached.
///
/// Without a terminal there is nobody to resume execution, so it logs and
/// continues.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBreak;

impl BreakHandler for PromptBreak {
    fn on_break(&self, report: &str) {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            tracing::warn!("Assertion break requested but no terminal is attached, continuing");
            return;
        }

        let mut err = std::io::stderr().lock();
        let _ = write!(err, "{}[chanlog] execution paused, press Enter to continue... ", report);
        let _ = err.flush();
        drop(err);

        let mut line = String::new();
        if let Err(e) = stdin.lock().read_line(&mut line) {
            tracing::warn!(error = %e, "Failed to read from terminal, continuing");
        }
    }
}

/// Panics with the report, like a failed `debug_assert!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicBreak;

impl BreakHandler for PanicBreak {
    fn on_break(&self, report: &str) {
        panic!("{}", report.trim_end_matches('\n'));
    }
}

/// Reports only; execution continues immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinueBreak;

impl BreakHandler for ContinueBreak {
    fn on_break(&self, _report: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "bad\nMETHODCALL A::b")]
    fn test_panic_break() {
        PanicBreak.on_break("bad\nMETHODCALL A::b\n");
    }

    #[test]
    fn test_continue_break_returns() {
        ContinueBreak.on_break("ignored\n");
    }
}
