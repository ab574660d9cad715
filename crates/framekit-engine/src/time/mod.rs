//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to a host.
//! Intended usage:
//! - one `FrameClock` per loop
//! - the host samples a `TimeSource` and passes the timestamp to `tick()`

mod frame_clock;
mod source;

pub use frame_clock::{FrameClock, FrameTime};
pub use source::{ManualClock, MonotonicClock, TimeSource};
