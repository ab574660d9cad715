use crate::camera::PerspectiveCamera;
use crate::scene::{ObjectId, Scene, SceneObject};
use crate::time::FrameTime;

use super::StopHandle;

/// Per-tick context passed to update callbacks.
///
/// Lifetimes:
/// - `'a` is the duration of one tick; the scene and camera are borrowed
///   mutably for that long and released before the render call.
pub struct FrameCtx<'a> {
    pub time:   FrameTime,
    pub scene:  &'a mut Scene,
    pub camera: &'a mut PerspectiveCamera,
    stop:       &'a StopHandle,
}

impl<'a> FrameCtx<'a> {
    pub(crate) fn new(
        time: FrameTime,
        scene: &'a mut Scene,
        camera: &'a mut PerspectiveCamera,
        stop: &'a StopHandle,
    ) -> Self {
        Self { time, scene, camera, stop }
    }

    /// Shorthand for `self.scene.get_mut(id)`.
    #[inline]
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.scene.get_mut(id)
    }

    /// Requests that the loop stop.
    ///
    /// The current tick still runs its remaining callbacks and renders; no
    /// further frame is scheduled.
    pub fn stop(&self) {
        self.stop.stop();
    }

    #[inline]
    pub fn stop_requested(&self) -> bool {
        self.stop.is_requested()
    }
}
