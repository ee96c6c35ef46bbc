//! Orbit camera controller.
//!
//! The camera sits on a sphere around the target and is steered by pointer
//! drags. There is no zoom or pan; the distance is fixed at construction,
//! clamped to the configured range. Auto-rotation turns the camera slowly around
//! the vertical axis and is switched off on constrained devices.

use crate::capability::Capability;
use crate::constants::*;
use crate::scene::Camera;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const POLAR_EPS: f32 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSettings {
    pub auto_rotate: bool,
    /// 1.0 is one full turn per minute.
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    settings: OrbitSettings,
    target: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
    pending_azimuth: f32,
    pending_polar: f32,
    auto_rotate_allowed: bool,
}

impl OrbitController {
    pub fn new(settings: OrbitSettings, eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length();
        let (azimuth, polar) = if distance > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / distance).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };
        let distance = distance.clamp(settings.min_distance, settings.max_distance);
        Self {
            settings,
            target,
            azimuth,
            polar: polar.clamp(POLAR_EPS, PI - POLAR_EPS),
            distance,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            auto_rotate_allowed: true,
        }
    }

    /// Capability consumer: constrained devices lose auto-rotation.
    pub fn apply_capability(&mut self, capability: Capability) {
        self.auto_rotate_allowed = !capability.is_constrained();
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.settings.auto_rotate && self.auto_rotate_allowed
    }

    /// Queue a drag of `(dx, dy)` pixels on a viewport `height_px` tall.
    /// A drag across the full height is one full turn.
    pub fn drag(&mut self, dx: f32, dy: f32, height_px: f32) {
        if height_px.is_nan() || height_px <= 0.0 {
            return;
        }
        let k = TAU * self.settings.rotate_speed / height_px;
        self.pending_azimuth -= dx * k;
        self.pending_polar -= dy * k;
    }

    /// Fold queued input and auto-rotation into the camera angles.
    pub fn update(&mut self, delta_sec: f32) {
        if self.is_auto_rotating() && delta_sec.is_finite() && delta_sec > 0.0 {
            self.pending_azimuth -= TAU / 60.0 * self.settings.auto_rotate_speed * delta_sec;
        }
        self.azimuth = (self.azimuth + self.pending_azimuth).rem_euclid(TAU);
        self.polar = (self.polar + self.pending_polar).clamp(POLAR_EPS, PI - POLAR_EPS);
        self.pending_azimuth = 0.0;
        self.pending_polar = 0.0;
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        self.target + self.distance * Vec3::new(sin_p * sin_a, cos_p, sin_p * cos_a)
    }

    pub fn apply_to(&self, camera: &mut Camera) {
        camera.eye = self.eye();
        camera.target = self.target;
    }
}
