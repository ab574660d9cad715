use framekit_engine::camera::OrbitControls;
use framekit_engine::driver::FrameDriver;
use framekit_engine::geometry::Geometry;
use framekit_engine::scene::{Material, Scene, SceneObject};
use glam::Vec3;

use super::{lens, DemoScene, MESH_COLOR};

/// Elevation slider range.
pub const ELEVATION_RANGE: (f32, f32) = (-3.0, 3.0);

const AUTO_ROTATE: f32 = 0.3;

/// Values that a debug panel would expose for the mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tweaks {
    pub elevation: f32,
    pub hidden: bool,
    pub wireframe: bool,
}

impl Tweaks {
    /// Elevation snapped to the slider's 0.01 step and range.
    pub fn clamped_elevation(&self) -> f32 {
        let (min, max) = ELEVATION_RANGE;
        let y = if self.elevation.is_finite() { self.elevation } else { 0.0 };
        (y.clamp(min, max) * 100.0).round() / 100.0
    }
}

/// A subdivided cube configured from tweak values, orbited with damping.
pub fn build(aspect: f32, tweaks: &Tweaks) -> DemoScene {
    let mut mesh = SceneObject::new(
        "mesh",
        Geometry::cuboid_segmented(1.0, 1.0, 1.0, 2, 2, 2),
        Material::basic(MESH_COLOR).wireframe(tweaks.wireframe),
    )
    .with_position(Vec3::new(0.0, tweaks.clamped_elevation(), 0.0));
    if tweaks.hidden {
        mesh = mesh.hidden();
    }

    let mut scene = Scene::new();
    scene.add(mesh);

    let camera = lens(aspect).with_position(Vec3::new(1.0, 1.0, 2.0));

    let mut controls = OrbitControls::new(Vec3::ZERO)
        .with_damping(true)
        .with_auto_rotate(AUTO_ROTATE);

    let mut driver = FrameDriver::new();
    driver.on_update("controls", move |ctx| {
        controls.update(ctx.camera, ctx.time.delta);
    });

    DemoScene::animated(scene, camera, driver)
}
