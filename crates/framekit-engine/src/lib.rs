//! Framekit engine crate.
//!
//! This crate owns the frame loop and the scene pieces it drives: a host
//! delivers frame timestamps, the driver runs update callbacks against the
//! scene and hands the result to a renderer once per frame.

pub mod camera;
pub mod core;
pub mod driver;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod render;
pub mod scene;
pub mod time;
