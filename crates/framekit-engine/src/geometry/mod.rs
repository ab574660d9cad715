//! Triangle geometry.
//!
//! Geometry is stored as a vertex list plus triangle indices. Box geometry
//! keeps separate vertices per face so that each face can be subdivided on
//! its own grid.

mod error;

use std::collections::BTreeSet;

use glam::Vec3;
use rand::Rng;

pub use error::GeometryError;

/// Indexed triangle mesh in object space.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl Geometry {
    /// Largest triangle count whose vertex indices fit in `u32`.
    pub const MAX_TRIANGLES: usize = (u32::MAX / 3) as usize;

    /// Axis-aligned box centered on the origin, one segment per face edge.
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::cuboid_segmented(width, height, depth, 1, 1, 1)
    }

    /// Axis-aligned box with each face subdivided into a grid.
    ///
    /// Segment counts below 1 are raised to 1.
    pub fn cuboid_segmented(
        width: f32,
        height: f32,
        depth: f32,
        width_segments: u32,
        height_segments: u32,
        depth_segments: u32,
    ) -> Self {
        let (ws, hs, ds) = (width_segments.max(1), height_segments.max(1), depth_segments.max(1));
        let (hx, hy, hz) = (width * 0.5, height * 0.5, depth * 0.5);

        let mut geo = Self { vertices: Vec::new(), triangles: Vec::new() };

        // (face center, u span, v span, u segments, v segments)
        let faces = [
            (Vec3::new(hx, 0.0, 0.0), Vec3::new(0.0, 0.0, -depth), Vec3::new(0.0, height, 0.0), ds, hs),
            (Vec3::new(-hx, 0.0, 0.0), Vec3::new(0.0, 0.0, depth), Vec3::new(0.0, height, 0.0), ds, hs),
            (Vec3::new(0.0, hy, 0.0), Vec3::new(width, 0.0, 0.0), Vec3::new(0.0, 0.0, -depth), ws, ds),
            (Vec3::new(0.0, -hy, 0.0), Vec3::new(width, 0.0, 0.0), Vec3::new(0.0, 0.0, depth), ws, ds),
            (Vec3::new(0.0, 0.0, hz), Vec3::new(width, 0.0, 0.0), Vec3::new(0.0, height, 0.0), ws, hs),
            (Vec3::new(0.0, 0.0, -hz), Vec3::new(-width, 0.0, 0.0), Vec3::new(0.0, height, 0.0), ws, hs),
        ];

        for (center, u, v, us, vs) in faces {
            geo.push_plane(center, u, v, us, vs);
        }

        geo
    }

    /// Builds a triangle soup from flat `x, y, z` triples.
    ///
    /// Every nine values form one triangle.
    pub fn from_positions(positions: Vec<f32>) -> Result<Self, GeometryError> {
        if positions.is_empty() {
            return Err(GeometryError::Empty);
        }
        if positions.len() % 9 != 0 {
            return Err(GeometryError::NotTriangles { len: positions.len() });
        }
        if positions.len() / 9 > Self::MAX_TRIANGLES {
            return Err(GeometryError::TooManyTriangles { count: positions.len() / 9 });
        }
        if let Some(index) = positions.iter().position(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite { index });
        }

        let vertices: Vec<Vec3> = positions
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect();

        let triangles = (0..vertices.len() as u32 / 3)
            .map(|t| [t * 3, t * 3 + 1, t * 3 + 2])
            .collect();

        Ok(Self { vertices, triangles })
    }

    /// `count` independent triangles with every coordinate uniform in `[-1, 1)`.
    pub fn random_triangles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self, GeometryError> {
        if count > Self::MAX_TRIANGLES {
            return Err(GeometryError::TooManyTriangles { count });
        }

        let vertices: Vec<Vec3> = (0..count * 3)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                )
            })
            .collect();

        let triangles = (0..count as u32)
            .map(|t| [t * 3, t * 3 + 1, t * 3 + 2])
            .collect();

        Ok(Self { vertices, triangles })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Unique undirected edges as vertex index pairs, lower index first.
    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut set = BTreeSet::new();
        for &[a, b, c] in &self.triangles {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                set.insert((p.min(q), p.max(q)));
            }
        }
        set.into_iter().collect()
    }

    fn push_plane(&mut self, center: Vec3, u: Vec3, v: Vec3, u_segments: u32, v_segments: u32) {
        let base = self.vertices.len() as u32;
        let corner = center - u * 0.5 - v * 0.5;

        for j in 0..=v_segments {
            for i in 0..=u_segments {
                let fu = i as f32 / u_segments as f32;
                let fv = j as f32 / v_segments as f32;
                self.vertices.push(corner + u * fu + v * fv);
            }
        }

        let row = u_segments + 1;
        for j in 0..v_segments {
            for i in 0..u_segments {
                let a = base + j * row + i;
                let b = a + 1;
                let c = a + row;
                let d = c + 1;
                self.triangles.push([a, b, d]);
                self.triangles.push([a, d, c]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // ── cuboid ────────────────────────────────────────────────────────────

    #[test]
    fn unit_cube_counts() {
        let g = Geometry::cuboid(1.0, 1.0, 1.0);
        assert_eq!(g.vertex_count(), 24);
        assert_eq!(g.triangle_count(), 12);
        // 4 border edges + 1 diagonal per face, faces do not share vertices.
        assert_eq!(g.edges().len(), 30);
    }

    #[test]
    fn cube_vertices_lie_on_surface() {
        let g = Geometry::cuboid(2.0, 4.0, 6.0);
        for v in g.vertices() {
            assert!(v.x.abs() <= 1.0 + 1e-6);
            assert!(v.y.abs() <= 2.0 + 1e-6);
            assert!(v.z.abs() <= 3.0 + 1e-6);
            let on_face = (v.x.abs() - 1.0).abs() < 1e-6
                || (v.y.abs() - 2.0).abs() < 1e-6
                || (v.z.abs() - 3.0).abs() < 1e-6;
            assert!(on_face, "{v:?} is not on a face");
        }
    }

    #[test]
    fn segmented_cube_counts() {
        let g = Geometry::cuboid_segmented(1.0, 1.0, 1.0, 2, 2, 2);
        // Each face is a 3x3 vertex grid with 2x2 cells.
        assert_eq!(g.vertex_count(), 6 * 9);
        assert_eq!(g.triangle_count(), 6 * 8);
    }

    #[test]
    fn zero_segments_are_raised_to_one() {
        let g = Geometry::cuboid_segmented(1.0, 1.0, 1.0, 0, 0, 0);
        assert_eq!(g, Geometry::cuboid(1.0, 1.0, 1.0));
    }

    // ── from_positions ────────────────────────────────────────────────────

    #[test]
    fn single_triangle() {
        let g = Geometry::from_positions(vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
        assert_eq!(g.triangle_count(), 1);
        assert_eq!(g.vertices()[1], Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(g.edges(), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn rejects_empty_and_partial_triangles() {
        assert_eq!(Geometry::from_positions(vec![]), Err(GeometryError::Empty));
        assert_eq!(
            Geometry::from_positions(vec![0.0; 6]),
            Err(GeometryError::NotTriangles { len: 6 })
        );
    }

    #[test]
    fn rejects_non_finite() {
        let mut p = vec![0.0; 9];
        p[4] = f32::NAN;
        assert_eq!(Geometry::from_positions(p), Err(GeometryError::NonFinite { index: 4 }));
    }

    // ── random_triangles ──────────────────────────────────────────────────

    #[test]
    fn random_triangles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = Geometry::random_triangles(500, &mut rng).unwrap();
        assert_eq!(g.triangle_count(), 500);
        assert_eq!(g.vertex_count(), 1500);
        for v in g.vertices() {
            for c in v.to_array() {
                assert!((-1.0..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn random_triangles_are_seed_deterministic() {
        let a = Geometry::random_triangles(10, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = Geometry::random_triangles(10, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn triangle_count_is_bounded_by_index_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let count = Geometry::MAX_TRIANGLES + 1;
        assert_eq!(
            Geometry::random_triangles(count, &mut rng),
            Err(GeometryError::TooManyTriangles { count })
        );
        assert_eq!(
            Geometry::random_triangles(usize::MAX / 2, &mut rng),
            Err(GeometryError::TooManyTriangles { count: usize::MAX / 2 })
        );
    }

    #[test]
    fn zero_random_triangles_is_empty() {
        let g = Geometry::random_triangles(0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(g.triangle_count(), 0);
        assert_eq!(g.vertex_count(), 0);
    }
}
