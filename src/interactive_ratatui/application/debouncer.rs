//! Cancel-and-reschedule debounce primitive.
//!
//! The caller supplies the clock so the TUI loop can poll it each tick and
//! tests can drive it with synthetic instants.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    interval: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Schedule `value` for delivery one interval after `now`, replacing
    /// whatever was pending.
    pub fn emit(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.interval));
    }

    /// Deliver the pending value if its quiet period is over.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
