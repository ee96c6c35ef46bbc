use glam::{Mat4, Vec2, Vec3};

// Pure screen-projection helpers for the 2D canvas renderer.

/// A world point mapped to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    /// Clip-space w, i.e. distance along the view direction.
    pub depth: f32,
}

/// Project `p` through `view_proj` into a `width x height` pixel canvas.
///
/// Returns `None` for points at or behind the camera plane.
#[inline]
pub fn project_point(view_proj: Mat4, p: Vec3, width: f32, height: f32) -> Option<Projected> {
    let clip = view_proj * p.extend(1.0);
    if clip.w <= 1e-5 || !clip.is_finite() {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    let sx = (ndc.x + 1.0) * 0.5 * width;
    let sy = (1.0 - ndc.y) * 0.5 * height;
    Some(Projected {
        screen: Vec2::new(sx, sy),
        depth: clip.w,
    })
}

/// Pixels covered by one world unit at `depth` for a vertical fov.
#[inline]
pub fn pixels_per_unit(fovy_radians: f32, height_px: f32, depth: f32) -> f32 {
    let focal = 0.5 * height_px / (0.5 * fovy_radians).tan();
    focal / depth.max(1e-5)
}

/// CSS color string for a linear `[0, 1]` rgb triple and alpha.
pub fn rgba_css(rgb: [f32; 3], alpha: f32) -> String {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        c(rgb[0]),
        c(rgb[1]),
        c(rgb[2]),
        alpha.clamp(0.0, 1.0)
    )
}

/// Indices of `depths` ordered far to near, for painter's-order drawing.
pub fn back_to_front(depths: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..depths.len()).collect();
    order.sort_by(|a, b| depths[*b].total_cmp(&depths[*a]));
    order
}
