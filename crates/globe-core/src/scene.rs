//! Scene-side types shared with the web frontend.
//!
//! These types avoid platform-specific APIs. The frontend reads them to
//! build camera matrices and to draw the wireframe and its labels.

use crate::catalog::Catalog;
use crate::constants::*;
use crate::geometry::WireframeSphere;
use crate::sphere::Label;
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::TAU;

/// Compile-time look and layout of the globe.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub sphere_radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub label_radius: f32,
    pub label_font_size: f32,
    pub label_color: [f32; 3],
    pub wireframe_color: [f32; 3],
    pub wireframe_opacity: f32,
    pub background_color: [f32; 3],
    pub camera_position: Vec3,
    pub camera_fov_degrees: f32,
    pub rotation_rate: f32,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            sphere_radius: SPHERE_RADIUS,
            width_segments: SPHERE_WIDTH_SEGMENTS,
            height_segments: SPHERE_HEIGHT_SEGMENTS,
            label_radius: LABEL_RADIUS,
            label_font_size: LABEL_FONT_SIZE,
            label_color: LABEL_COLOR,
            wireframe_color: WIREFRAME_COLOR,
            wireframe_opacity: WIREFRAME_OPACITY,
            background_color: BACKGROUND_COLOR,
            camera_position: camera_position_vec3(),
            camera_fov_degrees: CAMERA_FOV_DEGREES,
            rotation_rate: ROTATION_RATE,
        }
    }
}

/// The single transform that carries both the wireframe and the label group.
///
/// There is one rotation value; the mesh and the labels are children of it,
/// so they cannot drift apart.
#[derive(Clone, Debug)]
pub struct GlobeNode {
    rotation_y: f32,
    sphere: WireframeSphere,
    labels: Vec<Label>,
    label_radius: f32,
}

impl GlobeNode {
    pub fn new(config: &GlobeConfig, catalog: &Catalog) -> Self {
        Self {
            rotation_y: 0.0,
            sphere: WireframeSphere::new(
                config.sphere_radius,
                config.width_segments,
                config.height_segments,
            ),
            labels: catalog.labels(config.label_radius),
            label_radius: config.label_radius,
        }
    }

    /// Rebuild the label list; rotation is kept.
    pub fn set_catalog(&mut self, catalog: &Catalog) {
        self.labels = catalog.labels(self.label_radius);
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Current Y rotation of the sphere mesh, reduced mod 2π into `[0, TAU)`.
    /// Accumulated steps past a full turn are not tracked.
    pub fn mesh_rotation(&self) -> f32 {
        self.rotation_y
    }

    /// Same angle as [`GlobeNode::mesh_rotation`].
    pub fn label_rotation(&self) -> f32 {
        self.rotation_y
    }

    /// Advance the rotation around +Y, wrapped to `[0, TAU)`.
    pub fn rotate_y(&mut self, step: f32) {
        self.rotation_y = (self.rotation_y + step).rem_euclid(TAU);
    }

    pub fn sphere(&self) -> &WireframeSphere {
        &self.sphere
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_rotation_y(self.rotation_y))
    }

    /// World-space label anchors after the node rotation.
    pub fn world_labels(&self) -> impl Iterator<Item = (&str, Vec3)> + '_ {
        let q = Quat::from_rotation_y(self.rotation_y);
        self.labels.iter().map(move |l| (l.text.as_str(), q * l.position))
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(config: &GlobeConfig, aspect: f32) -> Self {
        Self {
            eye: config.camera_position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: config.camera_fov_degrees.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_and_labels_share_rotation() {
        let mut node = GlobeNode::new(&GlobeConfig::default(), &Catalog::reduced());
        node.rotate_y(0.25);
        node.rotate_y(0.5);
        assert_eq!(node.mesh_rotation(), node.label_rotation());
        assert!((node.rotation_y() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn rotation_wraps_at_full_turn() {
        let mut node = GlobeNode::new(&GlobeConfig::default(), &Catalog::reduced());
        node.rotate_y(TAU + 0.5);
        assert!((node.rotation_y() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn world_labels_follow_the_node() {
        let mut node = GlobeNode::new(&GlobeConfig::default(), &Catalog::reduced());
        node.rotate_y(std::f32::consts::FRAC_PI_2);
        for ((_, world), label) in node.world_labels().zip(node.labels()) {
            let expected = node.transform().transform_point3(label.position);
            assert!(world.distance(expected) < 1e-4);
            // rotation around Y leaves height alone
            assert!((world.y - label.position.y).abs() < 1e-5);
        }
    }

    #[test]
    fn set_catalog_relayouts_labels() {
        let mut node = GlobeNode::new(&GlobeConfig::default(), &Catalog::reduced());
        node.rotate_y(1.0);
        node.set_catalog(&Catalog::full());
        assert_eq!(node.labels().len(), 35);
        assert!((node.rotation_y() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn camera_sees_the_origin_in_front() {
        let cam = Camera::new(&GlobeConfig::default(), 16.0 / 9.0);
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.w > 0.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
