//! Rendering capability.
//!
//! The frame driver only knows the [`Renderer`] trait: one synchronous,
//! side-effect-only `render(scene, camera)` call per tick. Renderers own
//! their output surface and read the scene without mutating it.

mod ascii;

pub use ascii::AsciiRenderer;

use crate::camera::PerspectiveCamera;
use crate::scene::Scene;

/// Draws the current scene state through a camera.
pub trait Renderer {
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera);
}

impl<F> Renderer for F
where
    F: FnMut(&Scene, &PerspectiveCamera),
{
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        self(scene, camera)
    }
}
