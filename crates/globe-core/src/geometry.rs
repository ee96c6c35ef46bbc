use glam::Vec3;
use std::f32::consts::PI;

/// Latitude/longitude sphere drawn as the edges of its triangles.
///
/// Vertex layout is a `(height_segments + 1) x (width_segments + 1)` grid,
/// row 0 at the north pole. The seam column is kept as separate vertices so
/// the grid stays rectangular, but no edge is emitted along it twice.
#[derive(Clone, Debug)]
pub struct WireframeSphere {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl WireframeSphere {
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let w = width_segments.max(3);
        let h = height_segments.max(2);
        let cols = w + 1;

        let mut vertices = Vec::with_capacity(((h + 1) * cols) as usize);
        for iy in 0..=h {
            let v = iy as f32 / h as f32;
            let (sin_t, cos_t) = (v * PI).sin_cos();
            for ix in 0..=w {
                let u = ix as f32 / w as f32;
                let (sin_p, cos_p) = (u * 2.0 * PI).sin_cos();
                vertices.push(Vec3::new(
                    -radius * cos_p * sin_t,
                    radius * cos_t,
                    radius * sin_p * sin_t,
                ));
            }
        }

        let at = |iy: u32, ix: u32| iy * cols + ix;
        let mut edges = Vec::new();
        // Latitude rings, skipping the collapsed pole rows.
        for iy in 1..h {
            for ix in 0..w {
                edges.push([at(iy, ix), at(iy, ix + 1)]);
            }
        }
        // Meridians.
        for iy in 0..h {
            for ix in 0..w {
                edges.push([at(iy, ix), at(iy + 1, ix)]);
            }
        }
        // Quad diagonals; the pole caps are single triangles but still carry one.
        for iy in 0..h {
            for ix in 0..w {
                edges.push([at(iy, ix), at(iy + 1, ix + 1)]);
            }
        }

        Self {
            radius,
            width_segments: w,
            height_segments: h,
            vertices,
            edges,
        }
    }

    /// Endpoints of every edge.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|[a, b]| (self.vertices[*a as usize], self.vertices[*b as usize]))
    }
}
