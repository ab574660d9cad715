use framekit_engine::driver::FrameDriver;
use framekit_engine::geometry::Geometry;
use framekit_engine::scene::{Material, Scene, SceneObject};
use glam::Vec3;

use super::{lens, DemoScene, MESH_COLOR};

/// Spin rate in radians per millisecond.
const SPIN_PER_MS: f32 = 0.001;

/// A cube spinning around Y at a rate independent of the refresh rate.
pub fn build(aspect: f32) -> DemoScene {
    let mut scene = Scene::new();
    let mesh = scene.add(SceneObject::new(
        "mesh",
        Geometry::cuboid(1.0, 1.0, 1.0),
        Material::basic(MESH_COLOR),
    ));

    let camera = lens(aspect).with_position(Vec3::new(0.0, 0.0, 3.0));

    let mut driver = FrameDriver::new();
    driver.on_update("spin", move |ctx| {
        let dt = ctx.time.delta_millis();
        if let Some(mesh) = ctx.object_mut(mesh) {
            mesh.transform.rotation.y += SPIN_PER_MS * dt;
        }
    });

    DemoScene::animated(scene, camera, driver)
}
