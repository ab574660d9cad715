use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
///
/// Timestamps are offsets from an origin chosen by the implementation; only
/// differences between samples are meaningful.
pub trait TimeSource {
    fn now(&mut self) -> Duration;
}

/// Wall-clock source backed by `std::time::Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually driven source.
///
/// Clones share the same underlying value, so a test can keep one handle and
/// advance time while a host owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn get(&self) -> Duration {
        self.now.get()
    }
}

impl TimeSource for ManualClock {
    fn now(&mut self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let mut other = clock.clone();
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(17));
        assert_eq!(other.now(), Duration::from_millis(33));
    }

    #[test]
    fn monotonic_clock_never_goes_backwards() {
        let mut clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
