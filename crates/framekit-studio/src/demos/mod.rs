//! Demo scenes.
//!
//! Each demo builds a scene, a camera and the update callbacks that animate
//! them. Still demos render a single frame and never start the loop.

pub mod animation;
pub mod camera;
pub mod geometry;
pub mod transform;
pub mod tweaks;

use framekit_engine::camera::PerspectiveCamera;
use framekit_engine::driver::FrameDriver;
use framekit_engine::scene::Scene;

/// Red used by every demo mesh.
pub const MESH_COLOR: u32 = 0xff0000;

pub struct DemoScene {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub driver: FrameDriver,
    pub animated: bool,
}

impl DemoScene {
    pub fn still(scene: Scene, camera: PerspectiveCamera) -> Self {
        Self { scene, camera, driver: FrameDriver::new(), animated: false }
    }

    pub fn animated(scene: Scene, camera: PerspectiveCamera, driver: FrameDriver) -> Self {
        Self { scene, camera, driver, animated: true }
    }
}

/// Camera with the demos' lens settings at the given aspect ratio.
pub fn lens(aspect: f32) -> PerspectiveCamera {
    PerspectiveCamera::new(75.0, aspect, 0.1, 100.0)
}
