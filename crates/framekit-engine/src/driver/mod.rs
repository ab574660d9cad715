//! Frame driver.
//!
//! Owns the frame clock and the registered update callbacks. Each tick it
//! advances the clock, runs the callbacks against the scene, renders once,
//! and asks the host for the next frame. [`FrameDriver::run`] wraps that in
//! an explicit loop that checks the stop flag every iteration.

mod frame_driver;

pub use frame_driver::{DriverState, FrameDriver, RunSummary, StopReason, TickOutcome};
