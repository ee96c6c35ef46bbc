// Host-side tests for the pure projection helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod project {
    include!("../src/project.rs");
}

use glam::{Mat4, Vec3};
use globe_core::{Camera, GlobeConfig};
use project::*;

fn camera() -> Camera {
    Camera::new(&GlobeConfig::default(), 1.0)
}

#[test]
fn origin_projects_to_canvas_center() {
    let vp = camera().view_projection();
    let p = project_point(vp, Vec3::ZERO, 800.0, 600.0).unwrap();
    assert!((p.screen.x - 400.0).abs() < 1e-3);
    assert!((p.screen.y - 300.0).abs() < 1e-3);
    assert!((p.depth - 7.0).abs() < 1e-4);
}

#[test]
fn up_is_up_on_screen() {
    let vp = camera().view_projection();
    let top = project_point(vp, Vec3::new(0.0, 2.0, 0.0), 100.0, 100.0).unwrap();
    let right = project_point(vp, Vec3::new(2.0, 0.0, 0.0), 100.0, 100.0).unwrap();
    assert!(top.screen.y < 50.0);
    assert!(right.screen.x > 50.0);
}

#[test]
fn points_behind_camera_are_dropped() {
    let vp = camera().view_projection();
    assert!(project_point(vp, Vec3::new(0.0, 0.0, 8.0), 100.0, 100.0).is_none());
    assert!(project_point(vp, Vec3::new(0.0, 0.0, 7.0), 100.0, 100.0).is_none());
}

#[test]
fn nearer_points_are_shallower() {
    let vp = camera().view_projection();
    let front = project_point(vp, Vec3::new(0.0, 0.0, 3.2), 100.0, 100.0).unwrap();
    let back = project_point(vp, Vec3::new(0.0, 0.0, -3.2), 100.0, 100.0).unwrap();
    assert!(front.depth < back.depth);
}

#[test]
fn pixels_per_unit_matches_projection() {
    let cam = camera();
    let vp = cam.view_projection();
    let h = 600.0;
    let a = project_point(vp, Vec3::ZERO, h, h).unwrap();
    let b = project_point(vp, Vec3::new(0.0, 1.0, 0.0), h, h).unwrap();
    let measured = (a.screen.y - b.screen.y).abs();
    let predicted = pixels_per_unit(cam.fovy_radians, h, a.depth);
    assert!((measured - predicted).abs() < 0.01 * predicted);
}

#[test]
fn identity_maps_ndc_corners() {
    let p = project_point(Mat4::IDENTITY, Vec3::new(-1.0, 1.0, 0.5), 200.0, 100.0).unwrap();
    assert_eq!(p.screen.x, 0.0);
    assert_eq!(p.screen.y, 0.0);
}

#[test]
fn css_colors() {
    assert_eq!(rgba_css([1.0, 0.0, 0.0], 0.3), "rgba(255, 0, 0, 0.3)");
    assert_eq!(rgba_css([2.0, -1.0, 0.5], 1.5), "rgba(255, 0, 128, 1)");
}

#[test]
fn painter_order_is_far_to_near() {
    assert_eq!(back_to_front(&[5.0, 9.0, 7.0]), vec![1, 2, 0]);
    assert!(back_to_front(&[]).is_empty());
}
