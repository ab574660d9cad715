//! Core loop-facing contracts.
//!
//! This module defines what update callbacks see each tick and how they ask
//! the loop to end. It keeps driver internals out of user code.

mod ctx;
mod stop;

pub use ctx::FrameCtx;
pub use stop::StopHandle;
