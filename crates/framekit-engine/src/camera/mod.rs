//! Cameras and camera controls.
//!
//! Conventions: right-handed world space, +Y up, the default camera looks
//! down -Z. Field of view is given in degrees, every other angle in radians.

mod orbit;
mod perspective;

pub use orbit::OrbitControls;
pub use perspective::PerspectiveCamera;
