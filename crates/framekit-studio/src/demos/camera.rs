use framekit_engine::driver::FrameDriver;
use framekit_engine::geometry::Geometry;
use framekit_engine::scene::{Material, Scene, SceneObject};
use glam::Vec3;

use super::{lens, DemoScene, MESH_COLOR};

/// A subdivided cube whose Y rotation equals the elapsed time, viewed from
/// above a corner.
pub fn build(aspect: f32) -> DemoScene {
    let mut scene = Scene::new();
    let mesh = scene.add(SceneObject::new(
        "mesh",
        Geometry::cuboid_segmented(1.0, 1.0, 1.0, 5, 5, 5),
        Material::basic(MESH_COLOR),
    ));

    let mut camera = lens(aspect).with_position(Vec3::new(2.0, 2.0, 2.0));
    camera.look_at(Vec3::ZERO);

    let mut driver = FrameDriver::new();
    driver.on_update("turn", move |ctx| {
        let elapsed = ctx.time.elapsed_secs();
        if let Some(mesh) = ctx.object_mut(mesh) {
            mesh.transform.rotation.y = elapsed;
        }
    });

    DemoScene::animated(scene, camera, driver)
}
