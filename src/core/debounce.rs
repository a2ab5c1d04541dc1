use std::time::{
    Duration,
    Instant,
};

struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Cancellable single-slot timer for collapsing bursts of input.
///
/// Each `push` replaces whatever was scheduled and restarts the quiet period.
/// `poll` hands out the value once its deadline has passed. Dropping the
/// debouncer discards anything still scheduled.
pub struct Debouncer<T> {
    quiet_period: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_period: Duration) -> Self {
        Self { quiet_period, pending: None }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending { value, deadline: now + self.quiet_period });
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// How long until the scheduled value is due, if one is scheduled.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline.saturating_duration_since(now))
    }
}
