use std::time::Duration;

/// Frame timing snapshot.
///
/// All timestamps are offsets from the host's monotonic origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous tick (or since `start` on the first tick).
    pub delta: Duration,

    /// Time elapsed since the loop started.
    pub elapsed: Duration,

    /// Timestamp sampled for this tick.
    pub now: Duration,

    /// Zero-based frame counter.
    pub frame_index: u64,
}

impl FrameTime {
    /// Delta time in seconds.
    #[inline]
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Delta time in milliseconds.
    #[inline]
    pub fn delta_millis(&self) -> f32 {
        self.delta.as_secs_f32() * 1000.0
    }

    /// Elapsed time in seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The clock never samples time itself: the caller passes the timestamp of
/// each tick, which keeps it deterministic under scripted hosts.
///
/// Delta time is exact by default. Clamping is opt-in through
/// [`FrameClock::with_clamps`], for loops that would rather not see the full
/// gap after a debugger pause or a long stall.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Duration,
    last: Duration,
    frame_index: u64,
    clamps: Option<(Duration, Duration)>,
}

impl FrameClock {
    /// Creates an unclamped clock with its baseline at zero.
    pub fn new() -> Self {
        Self {
            start: Duration::ZERO,
            last: Duration::ZERO,
            frame_index: 0,
            clamps: None,
        }
    }

    /// Creates a clock with delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            clamps: Some((dt_min, dt_max)),
            ..Self::new()
        }
    }

    /// Sets both the start time and the last sample time to `now`.
    pub fn start(&mut self, now: Duration) {
        self.start = now;
        self.last = now;
        self.frame_index = 0;
    }

    /// Moves the delta baseline to `now` without touching elapsed time.
    ///
    /// Useful when resuming after a suspension.
    pub fn reset(&mut self, now: Duration) {
        self.last = now;
    }

    /// Timestamp of the most recent sample.
    #[inline]
    pub fn last(&self) -> Duration {
        self.last
    }

    /// Timestamp the clock was started at.
    #[inline]
    pub fn started_at(&self) -> Duration {
        self.start
    }

    /// Number of ticks produced since `start`.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock to `now` and returns a new `FrameTime`.
    pub fn tick(&mut self, now: Duration) -> FrameTime {
        // A clock that steps backwards yields a zero delta.
        let mut delta = now.saturating_sub(self.last);

        if let Some((dt_min, dt_max)) = self.clamps {
            delta = delta.clamp(dt_min, dt_max);
        }

        self.last = now;

        let ft = FrameTime {
            delta,
            elapsed: now.saturating_sub(self.start),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_tick_measures_from_start() {
        let mut clock = FrameClock::new();
        clock.start(ms(100));
        let ft = clock.tick(ms(116));
        assert_eq!(ft.delta, ms(16));
        assert_eq!(ft.elapsed, ms(16));
        assert_eq!(ft.frame_index, 0);
    }

    #[test]
    fn delta_is_difference_between_samples() {
        let mut clock = FrameClock::new();
        clock.start(ms(0));
        clock.tick(ms(16));
        let ft = clock.tick(ms(33));
        assert_eq!(ft.delta, ms(17));
        assert_eq!(ft.elapsed, ms(33));
        assert_eq!(clock.last(), ms(33));
    }

    #[test]
    fn identical_samples_give_zero_delta() {
        let mut clock = FrameClock::new();
        clock.start(ms(0));
        clock.tick(ms(20));
        let ft = clock.tick(ms(20));
        assert_eq!(ft.delta, Duration::ZERO);
        assert_eq!(ft.delta_secs(), 0.0);
    }

    #[test]
    fn backwards_sample_saturates() {
        let mut clock = FrameClock::new();
        clock.start(ms(50));
        let ft = clock.tick(ms(40));
        assert_eq!(ft.delta, Duration::ZERO);
        assert_eq!(ft.elapsed, Duration::ZERO);
    }

    #[test]
    fn clamps_bound_delta_but_not_elapsed() {
        let mut clock = FrameClock::with_clamps(ms(1), ms(250));
        clock.start(ms(0));
        let ft = clock.tick(ms(2000));
        assert_eq!(ft.delta, ms(250));
        assert_eq!(ft.elapsed, ms(2000));

        let ft = clock.tick(ms(2000));
        assert_eq!(ft.delta, ms(1));
    }

    #[test]
    fn reset_moves_delta_baseline_only() {
        let mut clock = FrameClock::new();
        clock.start(ms(0));
        clock.reset(ms(500));
        let ft = clock.tick(ms(510));
        assert_eq!(ft.delta, ms(10));
        assert_eq!(ft.elapsed, ms(510));
    }

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        clock.start(ms(0));
        for i in 0..3 {
            assert_eq!(clock.tick(ms(i * 10)).frame_index, i);
        }
        assert_eq!(clock.frame_count(), 3);
    }
}
