use std::f32::consts::PI;
use std::time::Duration;

use glam::Vec3;

use super::PerspectiveCamera;

const POLE_EPSILON: f32 = 1e-6;
const MOVE_EPSILON: f32 = 1e-5;

/// Orbits a camera around a target point.
///
/// Rotation requests accumulate and are applied by [`update`](Self::update),
/// which is meant to run once per tick. With damping enabled the pending
/// rotation decays by `damping_factor` each update instead of being applied
/// at once, giving the camera inertia.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    /// Fraction of the pending rotation applied per update, in `(0, 1]`.
    pub damping_factor: f32,
    /// Automatic rotation around the target in radians per second.
    pub auto_rotate_speed: f32,

    pending_theta: f32,
    pending_phi: f32,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enable_damping: false,
            damping_factor: 0.05,
            auto_rotate_speed: 0.0,
            pending_theta: 0.0,
            pending_phi: 0.0,
        }
    }

    pub fn with_damping(mut self, on: bool) -> Self {
        self.enable_damping = on;
        self
    }

    pub fn with_auto_rotate(mut self, radians_per_sec: f32) -> Self {
        self.auto_rotate_speed = radians_per_sec;
        self
    }

    /// Requests a rotation around the vertical axis.
    pub fn rotate_left(&mut self, angle: f32) {
        self.pending_theta -= angle;
    }

    /// Requests a rotation towards the top pole.
    pub fn rotate_up(&mut self, angle: f32) {
        self.pending_phi -= angle;
    }

    /// Rotation still waiting to be applied, as `(azimuth, polar)`.
    pub fn pending(&self) -> (f32, f32) {
        (self.pending_theta, self.pending_phi)
    }

    /// Applies pending rotation to `camera` and points it at the target.
    ///
    /// Returns `true` if the camera position changed.
    pub fn update(&mut self, camera: &mut PerspectiveCamera, delta: Duration) -> bool {
        if self.auto_rotate_speed != 0.0 {
            self.rotate_left(self.auto_rotate_speed * delta.as_secs_f32());
        }

        let offset = camera.position - self.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            // Camera sits on the target; there is no orbit to follow.
            camera.look_at(self.target);
            return false;
        }

        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).acos();

        let factor = if self.enable_damping { self.damping_factor.clamp(0.0, 1.0) } else { 1.0 };
        theta += self.pending_theta * factor;
        phi = (phi + self.pending_phi * factor).clamp(POLE_EPSILON, PI - POLE_EPSILON);

        if self.enable_damping {
            self.pending_theta *= 1.0 - factor;
            self.pending_phi *= 1.0 - factor;
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
        }

        let next = self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );

        let moved = (next - camera.position).length() > MOVE_EPSILON;
        camera.position = next;
        camera.look_at(self.target);
        moved
    }
}
