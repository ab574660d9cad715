use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::geometry::Geometry;

/// Position, rotation and scale of an object.
///
/// `rotation` holds Euler angles in radians applied in XYZ order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[inline]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Object-to-world matrix (scale, then rotate, then translate).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Flat-shaded surface description.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Material {
    /// Linear RGB in `[0, 1]`.
    pub color: [f32; 3],
    pub wireframe: bool,
}

impl Material {
    /// Solid material from a `0xRRGGBB` value.
    pub fn basic(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self { color: [r, g, b], wireframe: false }
    }

    pub fn wireframe(mut self, on: bool) -> Self {
        self.wireframe = on;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::basic(0xffffff)
    }
}

/// A renderable entity: geometry, material, transform and visibility.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
    pub visible: bool,
    pub geometry: Geometry,
    pub material: Material,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            visible: true,
            geometry,
            material,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
