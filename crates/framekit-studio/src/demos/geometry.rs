use framekit_engine::camera::OrbitControls;
use framekit_engine::driver::FrameDriver;
use framekit_engine::geometry::{Geometry, GeometryError};
use framekit_engine::scene::{Material, Scene, SceneObject};
use glam::Vec3;
use rand::Rng;

use super::{lens, DemoScene, MESH_COLOR};

pub const DEFAULT_TRIANGLES: u32 = 500;

/// Upper bound accepted on the command line.
pub const MAX_TRIANGLES: u32 = 1_000_000;

/// Slow turn so the orbit is visible without pointer input.
const AUTO_ROTATE: f32 = 0.5;

/// A cloud of random triangles in wireframe, orbited with damping.
pub fn build<R: Rng + ?Sized>(
    aspect: f32,
    triangles: usize,
    rng: &mut R,
) -> Result<DemoScene, GeometryError> {
    let mut scene = Scene::new();
    scene.add(SceneObject::new(
        "triangles",
        Geometry::random_triangles(triangles, rng)?,
        Material::basic(MESH_COLOR).wireframe(true),
    ));

    let camera = lens(aspect).with_position(Vec3::new(0.0, 0.0, 3.0));

    let mut controls = OrbitControls::new(Vec3::ZERO)
        .with_damping(true)
        .with_auto_rotate(AUTO_ROTATE);

    let mut driver = FrameDriver::new();
    driver.on_update("controls", move |ctx| {
        controls.update(ctx.camera, ctx.time.delta);
    });

    Ok(DemoScene::animated(scene, camera, driver))
}

#[cfg(test)]
mod tests {
    use framekit_engine::camera::PerspectiveCamera;
    use framekit_engine::host::ScriptedHost;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn builds_requested_triangle_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let demo = build(1.0, 50, &mut rng).unwrap();

        let id = demo.scene.find_by_name("triangles").unwrap();
        let object = demo.scene.get(id).unwrap();
        assert_eq!(object.geometry.triangle_count(), 50);
        assert!(object.material.wireframe);
    }

    #[test]
    fn camera_orbits_while_running() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut demo = build(1.0, 10, &mut rng).unwrap();
        let before = demo.camera.position;

        let frames: Vec<u64> = (1..=30).map(|i| i * 16).collect();
        let mut host = ScriptedHost::from_millis(0, &frames);
        let mut renderer = |_: &Scene, _: &PerspectiveCamera| {};
        demo.driver.run(&mut host, &mut demo.scene, &mut demo.camera, &mut renderer);

        let after = demo.camera.position;
        assert!((after - before).length() > 1e-3);
        assert!((after.length() - before.length()).abs() < 1e-3);
    }

    #[test]
    fn oversized_cloud_is_an_error() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(build(1.0, Geometry::MAX_TRIANGLES + 1, &mut rng).is_err());
    }
}
