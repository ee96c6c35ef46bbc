//! Even placement of labels on a sphere.
//!
//! Points follow a spherical Fibonacci-style spiral: the polar angle walks
//! from one pole to the other with equal-area spacing while the azimuth
//! turns at a rate scaled by `sqrt(total * PI)`, which keeps neighbouring
//! points roughly equidistant for any label count.

use glam::Vec3;
use std::f32::consts::PI;

/// A catalog entry placed on the globe surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec3,
}

/// Position of label `index` out of `total` on a sphere of `radius`.
///
/// `index` is expected in `0..total`. A `total` of zero is treated as one so
/// the function stays total; the catalog never hands it an empty list.
#[inline]
pub fn sphere_point(index: usize, total: usize, radius: f32) -> Vec3 {
    debug_assert!(index < total.max(1), "index {index} out of range for {total}");
    let total = total.max(1) as f32;
    // Clamp keeps rounding from pushing acos outside its domain.
    let cos_phi = (-1.0 + (2.0 * index as f32) / total).clamp(-1.0, 1.0);
    let phi = cos_phi.acos();
    let theta = (total * PI).sqrt() * phi;
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(
        radius * theta.cos() * sin_phi,
        radius * cos_phi,
        radius * theta.sin() * sin_phi,
    )
}

/// All `total` positions in index order.
pub fn sphere_points(total: usize, radius: f32) -> impl Iterator<Item = Vec3> {
    (0..total).map(move |i| sphere_point(i, total, radius))
}
