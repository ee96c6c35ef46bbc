// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use globe_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn layout_constants_are_positive() {
    assert!(SPHERE_RADIUS > 0.0);
    assert!(LABEL_RADIUS > 0.0);
    assert!(LABEL_FONT_SIZE > 0.0);
    assert!(ROTATION_RATE > 0.0);
    assert!(SPHERE_WIDTH_SEGMENTS >= 3 && SPHERE_HEIGHT_SEGMENTS >= 2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Labels hover outside the wireframe
    assert!(LABEL_RADIUS > SPHERE_RADIUS);

    // Camera starts outside the label shell and inside the orbit clamp
    let d = camera_position_vec3().length();
    assert!(d > LABEL_RADIUS);
    assert!(d >= ORBIT_MIN_DISTANCE && d <= ORBIT_MAX_DISTANCE);
    assert!(ORBIT_MIN_DISTANCE > LABEL_RADIUS);
    assert!(ORBIT_MAX_DISTANCE > ORBIT_MIN_DISTANCE);

    // Opacity is a fraction
    assert!(WIREFRAME_OPACITY > 0.0 && WIREFRAME_OPACITY <= 1.0);
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_constants_are_sane() {
    assert!(!CANVAS_ID.is_empty());
    assert_ne!(CANVAS_ID, FALLBACK_ID);
    assert!(WIREFRAME_LINE_WIDTH_CSS > 0.0);
    assert!(LABEL_MIN_FONT_PX > 0.0);
    assert!(FALLBACK_STYLE.contains("border-radius: 50%"));
    assert!(FALLBACK_TEXT.contains("Interactive 3D Globe"));
}

#[test]
fn resumed_frame_turns_the_globe_by_a_small_step() {
    let mut surface = GlobeSurface::new(
        GlobeConfig::default(),
        OrbitSettings::default(),
        CapabilityCell::default(),
    );
    surface.mount(&Catalog::reduced());
    // a tab left in the background for a minute
    let delta = 60.0_f32.min(MAX_FRAME_DELTA_SEC);
    assert!(matches!(surface.frame(delta), FrameOutcome::Advanced(_)));
    let angle = surface.node().map(GlobeNode::rotation_y).unwrap_or_default();
    assert!((angle - MAX_FRAME_DELTA_SEC * ROTATION_RATE).abs() < 1e-6);
    assert!(angle < 0.1);
}
