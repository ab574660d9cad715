use glam::{Mat4, Vec3, Vec4Swizzles};

/// Perspective projection camera.
///
/// Orientation is expressed as a look-at target, so the camera keeps facing
/// the target while its position moves.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Width over height of the output surface.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Points the camera at `target`.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Updates the aspect ratio. Non-positive or non-finite values are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect > 0.0 && aspect.is_finite() {
            self.aspect = aspect;
        } else {
            log::debug!("ignoring invalid camera aspect {aspect}");
        }
    }

    /// World-to-view matrix.
    ///
    /// If the target coincides with the position the camera looks down -Z.
    pub fn view(&self) -> Mat4 {
        let mut forward = self.target - self.position;
        if forward.length_squared() <= f32::EPSILON {
            forward = Vec3::NEG_Z;
        }

        let mut up = self.up;
        if forward.cross(up).length_squared() <= f32::EPSILON {
            // Looking straight along `up`; any perpendicular axis works.
            up = Vec3::Z;
        }

        Mat4::look_to_rh(self.position, forward, up)
    }

    /// View-to-clip matrix (OpenGL depth range).
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Projects a world-space point to normalized device coordinates.
    ///
    /// Returns `None` for points behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        self.project_with(&self.view_projection(), world)
    }

    /// Like [`project`](Self::project) with a precomputed view-projection matrix.
    pub fn project_with(&self, view_projection: &Mat4, world: Vec3) -> Option<Vec3> {
        let clip = *view_projection * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(clip.xyz() / clip.w)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(75.0, 800.0 / 600.0, 0.1, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_center() {
        let mut cam = PerspectiveCamera::default().with_position(Vec3::new(2.0, 2.0, 2.0));
        cam.look_at(Vec3::ZERO);
        let ndc = cam.project(Vec3::ZERO).unwrap();
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "{ndc:?}");
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }

    #[test]
    fn point_behind_camera_is_culled() {
        let cam = PerspectiveCamera::default().with_position(Vec3::new(0.0, 0.0, 3.0));
        assert!(cam.project(Vec3::new(0.0, 0.0, 5.0)).is_none());
    }

    #[test]
    fn right_of_target_projects_right() {
        let cam = PerspectiveCamera::default().with_position(Vec3::new(0.0, 0.0, 3.0));
        let ndc = cam.project(Vec3::new(0.5, 0.0, 0.0)).unwrap();
        assert!(ndc.x > 0.0);
    }

    #[test]
    fn degenerate_orientation_stays_finite() {
        let cam = PerspectiveCamera::default();
        let mut straight_up = cam.clone();
        straight_up.look_at(Vec3::new(0.0, 5.0, 0.0));
        let mut coincident = cam.clone();
        coincident.look_at(Vec3::ZERO);

        assert!(straight_up.view().is_finite());
        assert!(coincident.view().is_finite());
    }

    #[test]
    fn invalid_aspect_is_ignored() {
        let mut cam = PerspectiveCamera::default();
        cam.set_aspect(0.0);
        cam.set_aspect(f32::NAN);
        assert_eq!(cam.aspect, 800.0 / 600.0);
        cam.set_aspect(2.0);
        assert_eq!(cam.aspect, 2.0);
    }
}
