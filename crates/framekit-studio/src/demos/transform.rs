use framekit_engine::geometry::Geometry;
use framekit_engine::scene::{Material, Scene, SceneObject};
use glam::Vec3;

use super::{lens, DemoScene, MESH_COLOR};

/// A cube moved off-centre, seen once from the front.
pub fn build(aspect: f32) -> DemoScene {
    let mut scene = Scene::new();
    scene.add(
        SceneObject::new("mesh", Geometry::cuboid(1.0, 1.0, 1.0), Material::basic(MESH_COLOR))
            .with_position(Vec3::new(0.7, -0.6, 1.0)),
    );

    let camera = lens(aspect).with_position(Vec3::new(0.0, 0.0, 3.0));
    DemoScene::still(scene, camera)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_single_frame() {
        let demo = build(1.0);
        assert!(!demo.animated);
        assert_eq!(demo.driver.callback_count(), 0);

        let id = demo.scene.find_by_name("mesh").unwrap();
        assert_eq!(demo.scene.get(id).unwrap().transform.position, Vec3::new(0.7, -0.6, 1.0));
    }
}
