// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_movement_since_last_event() {
    let mut d = DragState::default();
    assert!(d.begin(1, Vec2::new(10.0, 10.0)));
    assert_eq!(d.move_to(1, Vec2::new(15.0, 8.0)), Some(Vec2::new(5.0, -2.0)));
    assert_eq!(d.move_to(1, Vec2::new(15.0, 8.0)), Some(Vec2::ZERO));
}

#[test]
fn moves_without_press_are_ignored() {
    let mut d = DragState::default();
    assert_eq!(d.move_to(1, Vec2::new(1.0, 1.0)), None);
}

#[test]
fn second_pointer_does_not_steal_the_drag() {
    let mut d = DragState::default();
    d.begin(1, Vec2::ZERO);
    assert!(!d.begin(2, Vec2::new(50.0, 50.0)));
    assert_eq!(d.move_to(2, Vec2::new(60.0, 60.0)), None);
    assert_eq!(d.move_to(1, Vec2::new(1.0, 0.0)), Some(Vec2::new(1.0, 0.0)));
}

#[test]
fn release_ends_only_the_tracked_pointer() {
    let mut d = DragState::default();
    d.begin(3, Vec2::ZERO);
    d.end(4);
    assert!(d.active);
    d.end(3);
    assert!(!d.active);
    assert_eq!(d.move_to(3, Vec2::ONE), None);
    // a fresh press after release is accepted
    assert!(d.begin(4, Vec2::ONE));
}
