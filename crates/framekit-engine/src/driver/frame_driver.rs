use std::time::Duration;

use crate::camera::PerspectiveCamera;
use crate::core::{FrameCtx, StopHandle};
use crate::host::{FrameHost, FrameRequest};
use crate::render::Renderer;
use crate::scene::Scene;
use crate::time::{FrameClock, FrameTime};

type UpdateFn = Box<dyn FnMut(&mut FrameCtx<'_>) -> anyhow::Result<()>>;

struct Callback {
    name: String,
    update: UpdateFn,
    failures: u64,
}

/// Lifecycle of a [`FrameDriver`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DriverState {
    /// Constructed, never started.
    Idle,
    Running,
    Stopped,
}

/// Why a loop ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StopReason {
    /// `stop()` was called on the driver, a callback, or a `StopHandle`.
    Requested,
    /// The host refused to schedule another frame.
    HostUnavailable,
    /// The host had no pending frame to deliver.
    NoFrame,
}

/// Result of a single [`FrameDriver::tick`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickOutcome {
    /// Frame rendered and the next one is scheduled.
    Scheduled,
    /// Frame rendered; a stop was requested so nothing was scheduled.
    Stopped,
    /// Frame rendered; the host could not schedule another one.
    HostUnavailable,
    /// The driver was not running; nothing happened.
    Inactive,
}

/// Summary returned by [`FrameDriver::run`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    /// Elapsed time reported by the last tick.
    pub elapsed: Duration,
    pub reason: StopReason,
}

/// Drives update callbacks and a renderer at the host's frame cadence.
///
/// The driver never samples time or sleeps on its own: timestamps come from
/// the host, and only the host's `wait_frame` blocks. One tick:
///
/// 1. advance the clock to `now` (delta since previous tick, elapsed since start)
/// 2. run every callback, in registration order
/// 3. render once
/// 4. schedule the next frame unless a stop was requested
pub struct FrameDriver {
    clock: FrameClock,
    callbacks: Vec<Callback>,
    state: DriverState,
    stop: StopHandle,
    stop_reason: Option<StopReason>,
    pending: Option<FrameRequest>,
    last_frame: Option<FrameTime>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::with_clock(FrameClock::new())
    }

    /// Driver using a preconfigured clock (e.g. one with delta clamps).
    pub fn with_clock(clock: FrameClock) -> Self {
        Self {
            clock,
            callbacks: Vec::new(),
            state: DriverState::Idle,
            stop: StopHandle::new(),
            stop_reason: None,
            pending: None,
            last_frame: None,
        }
    }

    /// Registers an update callback.
    pub fn on_update<F>(&mut self, name: impl Into<String>, mut f: F) -> &mut Self
    where
        F: FnMut(&mut FrameCtx<'_>) + 'static,
    {
        self.push_callback(
            name.into(),
            Box::new(move |ctx| {
                f(ctx);
                Ok(())
            }),
        )
    }

    /// Registers an update callback that may fail.
    ///
    /// A failure is logged and counted; the remaining callbacks and the
    /// render still run for that tick, and the callback runs again next tick.
    pub fn on_try_update<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: FnMut(&mut FrameCtx<'_>) -> anyhow::Result<()> + 'static,
    {
        self.push_callback(name.into(), Box::new(f))
    }

    fn push_callback(&mut self, name: String, update: UpdateFn) -> &mut Self {
        log::debug!("registered update callback '{name}'");
        self.callbacks.push(Callback { name, update, failures: 0 });
        self
    }

    #[inline]
    pub fn callback_count(&self) -> usize {
        self.callbacks.len()
    }

    /// Number of failed invocations of the named callback.
    pub fn failures(&self, name: &str) -> Option<u64> {
        self.callbacks.iter().find(|c| c.name == name).map(|c| c.failures)
    }

    /// Handle that stops this driver from outside a tick.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Begins the loop at `now`.
    ///
    /// Resets the clock baseline and clears any earlier stop request.
    /// Does nothing if the driver is already running.
    pub fn start(&mut self, now: Duration) {
        if self.state == DriverState::Running {
            log::debug!("frame driver already running; start ignored");
            return;
        }

        self.clock.start(now);
        self.stop.clear();
        self.stop_reason = None;
        self.pending = None;
        self.last_frame = None;
        self.state = DriverState::Running;

        log::debug!(
            "frame driver started at {now:?} with {} update callbacks",
            self.callbacks.len()
        );
    }

    /// Stops the loop; no further frame is scheduled.
    ///
    /// A frame already requested from the host stays pending: `run` cancels
    /// it on exit, but code ticking by hand should call
    /// [`stop_with`](Self::stop_with) instead.
    pub fn stop(&mut self) {
        self.stop.stop();
        if self.state == DriverState::Running {
            self.halt(StopReason::Requested);
        }
    }

    /// Stops the loop and cancels the frame pending on `host`, if any.
    pub fn stop_with<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        self.stop();
        if let Some(request) = self.pending.take() {
            host.cancel_frame(request);
        }
    }

    fn halt(&mut self, reason: StopReason) {
        self.state = DriverState::Stopped;
        self.stop_reason = Some(reason);
        log::debug!(
            "frame driver stopped after {} frames ({reason:?})",
            self.clock.frame_count()
        );
    }

    /// Runs one frame.
    ///
    /// A tick on a driver that is not running, or whose stop flag was set
    /// between ticks, does nothing and returns [`TickOutcome::Inactive`].
    pub fn tick<H, R>(
        &mut self,
        now: Duration,
        host: &mut H,
        scene: &mut Scene,
        camera: &mut PerspectiveCamera,
        renderer: &mut R,
    ) -> TickOutcome
    where
        H: FrameHost + ?Sized,
        R: Renderer + ?Sized,
    {
        if self.state != DriverState::Running {
            return TickOutcome::Inactive;
        }
        if self.stop.is_requested() {
            self.halt(StopReason::Requested);
            return TickOutcome::Inactive;
        }

        self.pending = None;
        let time = self.clock.tick(now);

        {
            let stop = &self.stop;
            let mut ctx = FrameCtx::new(time, scene, camera, stop);

            for cb in &mut self.callbacks {
                if let Err(err) = (cb.update)(&mut ctx) {
                    cb.failures += 1;
                    log::warn!(
                        "update '{}' failed on frame {}: {err:#}",
                        cb.name,
                        time.frame_index
                    );
                }
            }
        }

        renderer.render(scene, camera);
        self.last_frame = Some(time);

        if self.stop.is_requested() {
            self.halt(StopReason::Requested);
            return TickOutcome::Stopped;
        }

        match host.schedule_next_frame() {
            Ok(request) => {
                self.pending = Some(request);
                TickOutcome::Scheduled
            }
            Err(err) => {
                log::debug!("{err}; frame loop ends");
                self.halt(StopReason::HostUnavailable);
                TickOutcome::HostUnavailable
            }
        }
    }

    /// Runs the loop until it is stopped or the host stops delivering frames.
    ///
    /// Starts the driver at `host.now()`, requests the first frame, then
    /// alternates `wait_frame` and `tick`. Any request still pending on exit
    /// is cancelled.
    pub fn run<H, R>(
        &mut self,
        host: &mut H,
        scene: &mut Scene,
        camera: &mut PerspectiveCamera,
        renderer: &mut R,
    ) -> RunSummary
    where
        H: FrameHost + ?Sized,
        R: Renderer + ?Sized,
    {
        self.start(host.now());

        match host.schedule_next_frame() {
            Ok(request) => self.pending = Some(request),
            Err(err) => {
                log::debug!("{err}; no frame was ever scheduled");
                self.halt(StopReason::HostUnavailable);
            }
        }

        while self.state == DriverState::Running {
            if self.stop.is_requested() {
                self.halt(StopReason::Requested);
                break;
            }

            let Some(now) = host.wait_frame() else {
                self.halt(StopReason::NoFrame);
                break;
            };

            self.tick(now, host, scene, camera, renderer);
        }

        if let Some(request) = self.pending.take() {
            host.cancel_frame(request);
        }

        RunSummary {
            frames: self.clock.frame_count(),
            elapsed: self.last_frame.map(|t| t.elapsed).unwrap_or(Duration::ZERO),
            reason: self.stop_reason.unwrap_or(StopReason::Requested),
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    #[inline]
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    /// Ticks since the last `start`.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Last sampled timestamp, or `None` before the first `start`.
    pub fn last_time(&self) -> Option<Duration> {
        match self.state {
            DriverState::Idle => None,
            _ => Some(self.clock.last()),
        }
    }

    /// Timing of the most recent tick.
    #[inline]
    pub fn last_frame(&self) -> Option<FrameTime> {
        self.last_frame
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}
