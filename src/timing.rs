//! Rate limiting primitives driven by explicit timestamps.
//!
//! Neither type owns a timer. Callers pass `now` into every call and poll
//! at (or after) `next_deadline()`, which keeps them deterministic and lets
//! the same code run under a browser event loop, tokio or a test clock.

use std::time::{Duration, Instant};

/// Trailing-edge debounce: fires once `delay` has passed since the last call
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a call, pushing the deadline out
    pub fn call(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether the debounced invocation is due; clears it when it is
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Leading and trailing throttle carrying the latest value.
///
/// The first call in an idle period passes through. Calls inside the
/// interval replace a single pending value, which is released by `poll`
/// once the interval ends and opens a new interval.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    interval: Duration,
    window_end: Option<Instant>,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_end: None,
            pending: None,
        }
    }

    fn in_window(&self, now: Instant) -> bool {
        self.window_end.is_some_and(|end| now < end)
    }

    /// Returns the value when it should be applied right away
    pub fn call(&mut self, value: T, now: Instant) -> Option<T> {
        if self.in_window(now) {
            self.pending = Some(value);
            return None;
        }
        // A trailing value that was never polled is superseded by this one
        self.pending = None;
        self.window_end = Some(now + self.interval);
        Some(value)
    }

    /// Release the trailing value once the interval is over
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.window_end.is_none() || self.in_window(now) {
            return None;
        }
        match self.pending.take() {
            Some(value) => {
                self.window_end = Some(now + self.interval);
                Some(value)
            }
            None => {
                self.window_end = None;
                None
            }
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().and(self.window_end)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending value and reset to idle
    pub fn cancel(&mut self) {
        self.pending = None;
        self.window_end = None;
    }
}
