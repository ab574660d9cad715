use std::io::Write;

use framekit_engine::camera::PerspectiveCamera;
use framekit_engine::render::{AsciiRenderer, Renderer};
use framekit_engine::scene::Scene;

const CLEAR: &str = "\x1b[2J";
const HOME: &str = "\x1b[H";

/// Presents [`AsciiRenderer`] frames on a terminal.
///
/// Each frame repaints in place. A write failure (closed pipe, detached
/// terminal) disables output for the rest of the run; the loop keeps going.
pub struct TerminalRenderer<W: Write> {
    inner: AsciiRenderer,
    out: W,
    quiet: bool,
    cleared: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(inner: AsciiRenderer, out: W) -> Self {
        Self { inner, out, quiet: false, cleared: false }
    }

    /// Rasterize without writing anything.
    pub fn quiet(mut self, on: bool) -> Self {
        self.quiet = on;
        self
    }

    #[cfg(test)]
    fn inner(&self) -> &AsciiRenderer {
        &self.inner
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }

    fn present(&mut self) -> std::io::Result<()> {
        if !self.cleared {
            self.out.write_all(CLEAR.as_bytes())?;
            self.cleared = true;
        }
        self.out.write_all(HOME.as_bytes())?;
        self.out.write_all(self.inner.frame().as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        self.inner.render(scene, camera);

        if self.quiet {
            return;
        }
        if let Err(e) = self.present() {
            log::warn!("terminal output failed, continuing without it: {e}");
            self.quiet = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use framekit_engine::geometry::Geometry;
    use framekit_engine::scene::{Material, SceneObject};
    use glam::Vec3;

    use super::*;

    fn scene() -> (Scene, PerspectiveCamera) {
        let mut scene = Scene::new();
        scene.add(SceneObject::new("mesh", Geometry::cuboid(1.0, 1.0, 1.0), Material::basic(0xff0000)));
        let camera = PerspectiveCamera::new(75.0, 1.0, 0.1, 100.0).with_position(Vec3::new(0.0, 0.0, 3.0));
        (scene, camera)
    }

    #[test]
    fn clears_once_then_homes_each_frame() {
        let (scene, camera) = scene();
        let mut term = TerminalRenderer::new(AsciiRenderer::new(20, 10), Vec::new());
        term.render(&scene, &camera);
        term.render(&scene, &camera);

        let out = String::from_utf8(term.into_output()).unwrap();
        assert_eq!(out.matches(CLEAR).count(), 1);
        assert_eq!(out.matches(HOME).count(), 2);
        assert!(out.chars().any(|c| ".:-=+*#%@".contains(c)));
    }

    #[test]
    fn quiet_still_rasterizes() {
        let (scene, camera) = scene();
        let mut term = TerminalRenderer::new(AsciiRenderer::new(20, 10), Vec::new()).quiet(true);
        term.render(&scene, &camera);

        assert_eq!(term.inner().frames_rendered(), 1);
        assert!(term.into_output().is_empty());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_goes_quiet() {
        let (scene, camera) = scene();
        let mut term = TerminalRenderer::new(AsciiRenderer::new(8, 4), Broken);
        term.render(&scene, &camera);
        assert!(term.quiet);
        term.render(&scene, &camera);
        assert_eq!(term.inner().frames_rendered(), 2);
    }
}
