use glam::{Mat4, Vec3, Vec4, Vec4Swizzles};

use crate::camera::PerspectiveCamera;
use crate::scene::{Scene, SceneObject};

use super::Renderer;

/// Shade ramp from darkest to brightest.
const RAMP: &[u8] = b".:-=+*#%@";

/// Wireframe glyph.
const LINE: char = 'o';

/// Clip-space margin in front of the near plane; keeps `w` away from zero.
const NEAR_EPSILON: f32 = 1e-5;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 0.5;

/// Software renderer that rasterizes the scene into a character grid.
///
/// Solid materials are filled with flat-shaded glyphs and depth tested;
/// wireframe materials draw their edges. Geometry is clipped against the
/// camera's near plane, so objects straddling the camera are partly drawn.
/// The output is available as text via [`frame`](Self::frame) after each
/// render.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    background: char,
    cells: Vec<char>,
    depth: Vec<f32>,
    light_dir: Vec3,
    frames_rendered: u64,
}

impl AsciiRenderer {
    /// Creates a renderer with a `width` x `height` cell grid. Zero sizes are raised to 1.
    pub fn new(width: usize, height: usize) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            width,
            height,
            background: ' ',
            cells: vec![' '; width * height],
            depth: vec![f32::INFINITY; width * height],
            light_dir: Vec3::new(0.4, 0.8, 0.6).normalize(),
            frames_rendered: 0,
        }
    }

    pub fn with_background(mut self, background: char) -> Self {
        self.background = background;
        self.cells.fill(background);
        self
    }

    /// Resizes the grid; the next render fills it.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.cells = vec![self.background; self.width * self.height];
        self.depth = vec![f32::INFINITY; self.width * self.height];
    }

    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Camera aspect ratio that makes the grid look undistorted.
    pub fn aspect(&self) -> f32 {
        self.width as f32 * CELL_ASPECT / self.height as f32
    }

    #[inline]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Glyph at `(col, row)`, or `None` outside the grid.
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Number of cells that differ from the background.
    pub fn coverage(&self) -> usize {
        self.cells.iter().filter(|&&c| c != self.background).count()
    }

    /// The last rendered frame, one line per row.
    pub fn frame(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }

    fn clear(&mut self) {
        self.cells.fill(self.background);
        self.depth.fill(f32::INFINITY);
    }

    /// NDC to fractional cell coordinates, keeping NDC depth.
    fn to_screen(&self, ndc: Vec3) -> Vec3 {
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * (self.width - 1) as f32,
            (1.0 - ndc.y) * 0.5 * (self.height - 1) as f32,
            ndc.z,
        )
    }

    fn plot(&mut self, x: i64, y: i64, z: f32, glyph: char) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        if !(-1.0..=1.0).contains(&z) {
            return;
        }
        let i = y as usize * self.width + x as usize;
        if z <= self.depth[i] {
            self.depth[i] = z;
            self.cells[i] = glyph;
        }
    }

    /// Clip-space position to fractional cell coordinates.
    fn clip_to_screen(&self, clip: Vec4) -> Vec3 {
        self.to_screen(clip.xyz() / clip.w)
    }

    fn draw_object(&mut self, object: &SceneObject, view_projection: &Mat4) {
        let model = object.transform.matrix();
        let mvp = *view_projection * model;

        let verts = object.geometry.vertices();
        let clip: Vec<Vec4> = verts.iter().map(|&v| mvp * v.extend(1.0)).collect();

        if object.material.wireframe {
            for (a, b) in object.geometry.edges() {
                if let Some((ca, cb)) = clip_segment_near(clip[a as usize], clip[b as usize]) {
                    let (pa, pb) = (self.clip_to_screen(ca), self.clip_to_screen(cb));
                    self.line(pa, pb, LINE);
                }
            }
            return;
        }

        let [r, g, b] = object.material.color;
        let luminance = (0.2126 * r + 0.7152 * g + 0.0722 * b).clamp(0.0, 1.0);

        for &[ia, ib, ic] in object.geometry.triangles() {
            let polygon = clip_polygon_near(&[clip[ia as usize], clip[ib as usize], clip[ic as usize]]);
            if polygon.len() < 3 {
                continue;
            }

            let wa = model.transform_point3(verts[ia as usize]);
            let wb = model.transform_point3(verts[ib as usize]);
            let wc = model.transform_point3(verts[ic as usize]);
            let normal = (wb - wa).cross(wc - wa).normalize_or_zero();

            // Winding is not consistent across geometries, so light both sides.
            let diffuse = normal.dot(self.light_dir).abs();
            let intensity = (0.25 + 0.75 * diffuse) * (0.35 + 0.65 * luminance);
            let glyph = shade(intensity);

            let screen: Vec<Vec3> = polygon.iter().map(|&c| self.clip_to_screen(c)).collect();
            for i in 1..screen.len() - 1 {
                self.fill_triangle(screen[0], screen[i], screen[i + 1], glyph);
            }
        }
    }

    fn fill_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, glyph: char) {
        let area = edge(a, b, c);
        if area.abs() <= f32::EPSILON {
            return;
        }

        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as i64;
        let max_x = a.x.max(b.x).max(c.x).ceil().min((self.width - 1) as f32) as i64;
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as i64;
        let max_y = a.y.max(b.y).max(c.y).ceil().min((self.height - 1) as f32) as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec3::new(x as f32, y as f32, 0.0);
                let w0 = edge(b, c, p) / area;
                let w1 = edge(c, a, p) / area;
                let w2 = edge(a, b, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let z = w0 * a.z + w1 * b.z + w2 * c.z;
                self.plot(x, y, z, glyph);
            }
        }
    }

    fn line(&mut self, a: Vec3, b: Vec3, glyph: char) {
        let steps = (b.x - a.x).abs().max((b.y - a.y).abs()).ceil().max(1.0);
        // Off-screen lines still get walked; cap the work for wild projections.
        let steps = steps.min(4.0 * (self.width + self.height) as f32) as i64;

        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = a.lerp(b, t);
            self.plot(p.x.round() as i64, p.y.round() as i64, p.z, glyph);
        }
    }
}

impl Renderer for AsciiRenderer {
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) {
        self.clear();

        let view_projection = camera.view_projection();
        for (_, object) in scene.iter() {
            if object.visible {
                self.draw_object(object, &view_projection);
            }
        }

        self.frames_rendered += 1;
    }
}

/// Signed distance to the near plane in clip space; visible when positive.
#[inline]
fn near_distance(p: Vec4) -> f32 {
    p.z + p.w
}

/// Keeps the part of a segment in front of the near plane.
fn clip_segment_near(a: Vec4, b: Vec4) -> Option<(Vec4, Vec4)> {
    let (da, db) = (near_distance(a), near_distance(b));
    match (da > NEAR_EPSILON, db > NEAR_EPSILON) {
        (true, true) => Some((a, b)),
        (false, false) => None,
        (true, false) => Some((a, a.lerp(b, (da - NEAR_EPSILON) / (da - db)))),
        (false, true) => Some((b.lerp(a, (db - NEAR_EPSILON) / (db - da)), b)),
    }
}

/// Clips a convex polygon against the near plane (Sutherland-Hodgman).
fn clip_polygon_near(polygon: &[Vec4]) -> Vec<Vec4> {
    let mut out = Vec::with_capacity(polygon.len() + 1);
    for (i, &cur) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let (dc, dn) = (near_distance(cur), near_distance(next));
        if dc > NEAR_EPSILON {
            out.push(cur);
        }
        if (dc > NEAR_EPSILON) != (dn > NEAR_EPSILON) {
            out.push(cur.lerp(next, (dc - NEAR_EPSILON) / (dc - dn)));
        }
    }
    out
}

/// Signed doubled area of triangle `(a, b, p)` in screen space.
#[inline]
fn edge(a: Vec3, b: Vec3, p: Vec3) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn shade(intensity: f32) -> char {
    let i = (intensity.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
    RAMP[i] as char
}
