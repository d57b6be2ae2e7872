//! Trailing-edge coalescing for high-frequency events.
//!
//! Scroll and resize events arrive far more often than the page can usefully
//! react. A [`Coalescer`] keeps only the most recent value of a burst and
//! tells the host when to come back for it. The host owns the actual timer
//! (an animation frame or a `setTimeout`); the coalescer only tracks the
//! pending value and its deadline, so every decision is deterministic given
//! the timestamps passed in.
//!
//! Two modes cover the two granularities the page needs:
//!
//! - [`CoalesceMode::Throttle`]: the first push arms a deadline one window
//!   out and later pushes ride along. At most one apply per window.
//! - [`CoalesceMode::Debounce`]: every push moves the deadline. The value is
//!   applied once input has been quiet for a whole window.
//!
//! In both modes the last value pushed is the one applied.

#[cfg(test)]
#[path = "coalesce_test.rs"]
mod coalesce_test;

use serde::Deserialize;

/// How pushes move the deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoalesceMode {
    /// Deadline fixed by the first push of a burst.
    #[default]
    Throttle,
    /// Deadline pushed back by every push.
    Debounce,
}

/// Latest-wins holder for one kind of event.
#[derive(Clone, Debug)]
pub struct Coalescer<T> {
    mode: CoalesceMode,
    window_ms: f64,
    pending: Option<T>,
    deadline_ms: Option<f64>,
}

impl<T> Coalescer<T> {
    /// Negative or non-finite windows are treated as zero.
    #[must_use]
    pub fn new(mode: CoalesceMode, window_ms: f64) -> Self {
        let window_ms = if window_ms.is_finite() { window_ms.max(0.0) } else { 0.0 };
        Self { mode, window_ms, pending: None, deadline_ms: None }
    }

    #[must_use]
    pub fn mode(&self) -> CoalesceMode {
        self.mode
    }

    #[must_use]
    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }

    /// Record `value` as the latest of the current burst.
    ///
    /// Returns the deadline when the host has to arm (or re-arm) its timer,
    /// `None` when an already armed timer still covers this value.
    pub fn push(&mut self, value: T, now_ms: f64) -> Option<f64> {
        self.pending = Some(value);
        match (self.mode, self.deadline_ms) {
            (CoalesceMode::Throttle, Some(_)) => None,
            _ => {
                let deadline = now_ms + self.window_ms;
                self.deadline_ms = Some(deadline);
                Some(deadline)
            }
        }
    }

    /// Take the pending value if its deadline has been reached.
    pub fn take_due(&mut self, now_ms: f64) -> Option<T> {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Take the pending value regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.deadline_ms = None;
        self.pending.take()
    }

    /// Drop the pending value without applying it.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
        self.pending = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<f64> {
        self.deadline_ms
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref()
    }
}
