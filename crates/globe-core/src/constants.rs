use glam::Vec3;

// Shared layout/animation tuning constants used by the web frontend.

// Globe layout
pub const LABEL_RADIUS: f32 = 3.2; // labels float just outside the wireframe
pub const SPHERE_RADIUS: f32 = 2.6;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;

// Animation
pub const ROTATION_RATE: f32 = 0.3; // radians per second around +Y

// Look
pub const WIREFRAME_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const WIREFRAME_OPACITY: f32 = 0.3;
pub const LABEL_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
pub const LABEL_FONT_SIZE: f32 = 0.15; // world units
pub const BACKGROUND_COLOR: [f32; 3] = [0.0, 0.0, 0.0];

// Camera
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 7.0];
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit interaction
pub const ORBIT_MIN_DISTANCE: f32 = 4.0;
pub const ORBIT_MAX_DISTANCE: f32 = 12.0;
pub const ORBIT_AUTO_ROTATE_SPEED: f32 = 0.8; // 1.0 == one turn per minute
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;

// Device classification
pub const CONSTRAINED_MAX_VIEWPORT_WIDTH: f64 = 768.0; // logical px, inclusive

#[inline]
pub fn camera_position_vec3() -> Vec3 {
    Vec3::from_array(CAMERA_POSITION)
}
