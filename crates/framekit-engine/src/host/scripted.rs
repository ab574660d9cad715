use std::collections::VecDeque;
use std::time::Duration;

use crate::time::{ManualClock, TimeSource};

use super::{FrameHost, FrameRequest, HostError};

/// Deterministic host replaying a fixed list of frame timestamps.
///
/// Each scheduled frame consumes the next timestamp. Once the script is
/// exhausted (or [`teardown`](Self::teardown) is called) the host reports
/// itself unavailable, which ends the loop the same way a destroyed display
/// context would.
#[derive(Debug)]
pub struct ScriptedHost {
    clock: ManualClock,
    script: VecDeque<Duration>,
    pending: Option<FrameRequest>,
    next_id: u64,
    schedule_calls: u64,
    torn_down: bool,
}

impl ScriptedHost {
    /// Host whose clock reads `start` until the first frame is delivered.
    pub fn new(start: Duration, frames: impl IntoIterator<Item = Duration>) -> Self {
        let clock = ManualClock::new();
        clock.set(start);
        Self {
            clock,
            script: frames.into_iter().collect(),
            pending: None,
            next_id: 0,
            schedule_calls: 0,
            torn_down: false,
        }
    }

    /// Convenience constructor with millisecond timestamps.
    pub fn from_millis(start: u64, frames: &[u64]) -> Self {
        Self::new(
            Duration::from_millis(start),
            frames.iter().map(|&ms| Duration::from_millis(ms)),
        )
    }

    /// Handle to the host clock.
    pub fn clock(&self) -> ManualClock {
        self.clock.clone()
    }

    /// Simulates the host context going away.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.pending = None;
    }

    /// How many times the scheduling primitive was invoked, including refusals.
    #[inline]
    pub fn schedule_calls(&self) -> u64 {
        self.schedule_calls
    }

    /// Timestamps not yet delivered.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl FrameHost for ScriptedHost {
    fn now(&mut self) -> Duration {
        self.clock.now()
    }

    fn schedule_next_frame(&mut self) -> Result<FrameRequest, HostError> {
        self.schedule_calls += 1;

        if self.torn_down || self.script.is_empty() {
            return Err(HostError::Unavailable);
        }

        if let Some(pending) = self.pending {
            return Ok(pending);
        }

        let request = FrameRequest(self.next_id);
        self.next_id += 1;
        self.pending = Some(request);
        Ok(request)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
    }

    fn wait_frame(&mut self) -> Option<Duration> {
        self.pending.take()?;
        let now = self.script.pop_front()?;
        self.clock.set(now);
        Some(now)
    }
}
