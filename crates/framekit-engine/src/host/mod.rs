//! Frame hosts.
//!
//! A host stands in for the display: it owns the time source and the
//! "call me on the next refresh" primitive. The driver asks for exactly one
//! frame at a time; the host decides when that frame is due.

mod error;
mod paced;
mod scripted;

use std::time::Duration;

pub use error::HostError;
pub use paced::{PacedHost, PacedHostConfig};
pub use scripted::ScriptedHost;

/// Ticket for a scheduled frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FrameRequest(pub(crate) u64);

impl FrameRequest {
    #[inline]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Per-frame scheduling primitive plus time source.
pub trait FrameHost {
    /// Current timestamp from the host's monotonic source.
    fn now(&mut self) -> Duration;

    /// Requests one more frame.
    ///
    /// An error means the host can no longer deliver frames (torn down,
    /// budget spent). Callers treat that as the end of the loop.
    fn schedule_next_frame(&mut self) -> Result<FrameRequest, HostError>;

    /// Drops a pending request. Unknown or already-delivered requests are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);

    /// Waits until the pending frame is due and returns the timestamp to tick with.
    ///
    /// Returns `None` if no frame is pending.
    fn wait_frame(&mut self) -> Option<Duration>;
}
