use std::time::{Duration, Instant};

/// Timer-based input coalescing.
///
/// Each [`set`](Debouncer::set) re-arms the deadline; the pending value fires
/// once the deadline passes and a consecutive duplicate of the last emitted
/// value never fires. Polling happens on the application tick, so the
/// effective delay is the configured window rounded up to the next tick.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<String>,
    deadline: Option<Instant>,
    last_emitted: Option<String>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            deadline: None,
            last_emitted: None,
        }
    }

    /// Record a new value and re-arm the deadline
    pub fn set(&mut self, value: impl Into<String>) {
        self.set_at(value, Instant::now());
    }

    /// Clock-injected variant of [`set`](Debouncer::set)
    pub fn set_at(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(value.into());
        self.deadline = Some(now + self.delay);
    }

    /// Fire the pending value if its deadline has passed
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    /// Clock-injected variant of [`poll`](Debouncer::poll)
    pub fn poll_at(&mut self, now: Instant) -> Option<String> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        self.deadline = None;
        let value = self.pending.take()?;
        if self.last_emitted.as_deref() == Some(value.as_str()) {
            return None;
        }

        self.last_emitted = Some(value.clone());
        Some(value)
    }

    /// Drop any pending value and forget the emission history
    pub fn reset(&mut self) {
        self.pending = None;
        self.deadline = None;
        self.last_emitted = None;
    }

    /// Whether a value is waiting for its deadline
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
