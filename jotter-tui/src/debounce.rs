//! Timer debouncer for rapidly-changing inputs.
//!
//! The raw input updates on every keystroke; `poll` yields the settled
//! value once a full quiet period passes with no further edits. Driven
//! by the event loop's ticks, so resolution is bounded by the tick
//! interval.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Record an edit at `now`, restarting the quiet period.
    pub fn update(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some((value.into(), now));
    }

    /// The value still waiting to settle, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_ref().map(|(value, _)| value.as_str())
    }

    /// Yield the settled value if the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let settled = match &self.pending {
            Some((_, edited_at)) => now.duration_since(*edited_at) >= self.quiet,
            None => false,
        };
        if settled {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
