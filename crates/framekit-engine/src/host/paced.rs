use std::time::Duration;

use crate::time::{MonotonicClock, TimeSource};

use super::{FrameHost, FrameRequest, HostError};

/// Configuration for [`PacedHost`].
#[derive(Debug, Clone)]
pub struct PacedHostConfig {
    /// Target refresh rate. Zero, non-finite, or too slow to express as a
    /// `Duration` means uncapped.
    pub refresh_hz: f64,

    /// Stop delivering frames after this many. `None` runs until the loop stops.
    pub max_frames: Option<u64>,
}

impl Default for PacedHostConfig {
    fn default() -> Self {
        Self {
            refresh_hz: 60.0,
            max_frames: None,
        }
    }
}

/// Wall-clock host pacing frames to a fixed refresh rate.
///
/// A frame falls due one interval after the previous delivered frame. If the
/// loop falls behind, the next frame is due immediately; missed refreshes are
/// dropped rather than replayed.
#[derive(Debug)]
pub struct PacedHost {
    clock: MonotonicClock,
    interval: Duration,
    max_frames: Option<u64>,

    next_due: Duration,
    pending: Option<(FrameRequest, Duration)>,
    next_id: u64,
    delivered: u64,
}

impl PacedHost {
    pub fn new(config: PacedHostConfig) -> Self {
        let interval = if config.refresh_hz.is_finite() && config.refresh_hz > 0.0 {
            Duration::try_from_secs_f64(1.0 / config.refresh_hz).unwrap_or_else(|e| {
                log::warn!("refresh rate {} Hz is out of range ({e}); running uncapped", config.refresh_hz);
                Duration::ZERO
            })
        } else {
            Duration::ZERO
        };

        log::debug!(
            "paced host: interval {:?}, budget {:?}",
            interval,
            config.max_frames
        );

        Self {
            clock: MonotonicClock::new(),
            interval,
            max_frames: config.max_frames,
            next_due: Duration::ZERO,
            pending: None,
            next_id: 0,
            delivered: 0,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn frames_delivered(&self) -> u64 {
        self.delivered
    }
}

impl Default for PacedHost {
    fn default() -> Self {
        Self::new(PacedHostConfig::default())
    }
}

impl FrameHost for PacedHost {
    fn now(&mut self) -> Duration {
        self.clock.now()
    }

    fn schedule_next_frame(&mut self) -> Result<FrameRequest, HostError> {
        if let Some(max) = self.max_frames {
            if self.delivered >= max {
                return Err(HostError::BudgetExhausted { frames: max });
            }
        }

        if let Some((request, _)) = self.pending {
            return Ok(request);
        }

        let due = self.next_due.max(self.clock.now());
        let request = FrameRequest(self.next_id);
        self.next_id += 1;
        self.pending = Some((request, due));
        Ok(request)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if matches!(self.pending, Some((pending, _)) if pending == request) {
            self.pending = None;
        }
    }

    fn wait_frame(&mut self) -> Option<Duration> {
        let (_, due) = self.pending.take()?;

        let now = self.clock.now();
        if now < due {
            std::thread::sleep(due - now);
        }

        let now = self.clock.now();
        self.delivered += 1;
        self.next_due = now + self.interval;
        Some(now)
    }
}
