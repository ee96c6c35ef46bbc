use crate::capability::{Capability, CapabilityCell};
use crate::catalog::Catalog;
use crate::orbit::{OrbitController, OrbitSettings};
use crate::rotation::{FrameOutcome, RotationAnimator};
use crate::scene::{Camera, GlobeConfig, GlobeNode};
use crate::subscription::Subscription;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;

/// Render surface state: the globe node, its camera and the two capability
/// consumers (animator and orbit auto-rotate).
///
/// The node is `None` until [`GlobeSurface::mount`]; frames before that are
/// skipped.
pub struct GlobeSurface {
    config: GlobeConfig,
    node: Option<GlobeNode>,
    animator: RotationAnimator,
    capability: CapabilityCell,
    orbit: Rc<RefCell<OrbitController>>,
    camera: Camera,
    _orbit_capability: Subscription,
}

impl GlobeSurface {
    pub fn new(
        config: GlobeConfig,
        orbit_settings: OrbitSettings,
        capability: CapabilityCell,
    ) -> Self {
        let camera = Camera::new(&config, 1.0);
        let mut orbit = OrbitController::new(orbit_settings, camera.eye, Vec3::ZERO);
        orbit.apply_capability(capability.get());
        let orbit = Rc::new(RefCell::new(orbit));

        let orbit_for_cell = orbit.clone();
        let orbit_capability = capability.subscribe(move |c: Capability| {
            match orbit_for_cell.try_borrow_mut() {
                Ok(mut o) => o.apply_capability(c),
                Err(_) => log::warn!("[surface] orbit busy, capability {:?} not applied", c),
            }
        });

        Self {
            animator: RotationAnimator::new(config.rotation_rate),
            config,
            node: None,
            capability,
            orbit,
            camera,
            _orbit_capability: orbit_capability,
        }
    }

    /// Build the globe node from `catalog`. Rotation restarts at zero.
    pub fn mount(&mut self, catalog: &Catalog) {
        log::info!("[surface] mounting {} labels", catalog.len());
        self.node = Some(GlobeNode::new(&self.config, catalog));
    }

    pub fn unmount(&mut self) {
        self.node = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.node.is_some()
    }

    /// Swap the label list, keeping the current rotation.
    pub fn set_catalog(&mut self, catalog: &Catalog) {
        match self.node.as_mut() {
            Some(node) => node.set_catalog(catalog),
            None => self.mount(catalog),
        }
    }

    /// Per-frame update. Never blocks and never fails.
    pub fn frame(&mut self, delta_sec: f32) -> FrameOutcome {
        let outcome = self
            .animator
            .on_frame(self.node.as_mut(), delta_sec, self.capability.get());
        if let Ok(mut orbit) = self.orbit.try_borrow_mut() {
            orbit.update(delta_sec);
            orbit.apply_to(&mut self.camera);
        }
        outcome
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    pub fn node(&self) -> Option<&GlobeNode> {
        self.node.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn capability(&self) -> &CapabilityCell {
        &self.capability
    }

    /// Shared handle for input wiring.
    pub fn orbit(&self) -> Rc<RefCell<OrbitController>> {
        self.orbit.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(cell: CapabilityCell) -> GlobeSurface {
        GlobeSurface::new(GlobeConfig::default(), OrbitSettings::default(), cell)
    }

    #[test]
    fn frames_before_mount_do_nothing() {
        let mut s = surface(CapabilityCell::default());
        assert_eq!(s.frame(0.016), FrameOutcome::Detached);
        assert!(s.node().is_none());
    }

    #[test]
    fn capability_reaches_both_consumers() {
        let cell = CapabilityCell::default();
        let mut s = surface(cell.clone());
        s.mount(&Catalog::reduced());
        assert!(s.orbit().borrow().is_auto_rotating());

        cell.set(Capability::Constrained);
        assert!(!s.orbit().borrow().is_auto_rotating());
        assert_eq!(s.frame(0.5), FrameOutcome::Suppressed);
        assert_eq!(s.node().map(GlobeNode::rotation_y), Some(0.0));
    }

    #[test]
    fn dropping_the_surface_releases_its_listener() {
        let cell = CapabilityCell::default();
        let s = surface(cell.clone());
        assert_eq!(cell.listener_count(), 1);
        drop(s);
        assert_eq!(cell.listener_count(), 0);
    }

    #[test]
    fn orbit_moves_camera_on_frame() {
        let mut s = surface(CapabilityCell::default());
        s.mount(&Catalog::full());
        let before = s.camera().eye;
        s.frame(1.0);
        assert!(s.camera().eye.distance(before) > 1e-3);
        assert!((s.camera().eye.length() - 7.0).abs() < 1e-4);
    }

    #[test]
    fn set_catalog_mounts_when_needed() {
        let mut s = surface(CapabilityCell::default());
        s.set_catalog(&Catalog::reduced());
        assert!(s.is_mounted());
        s.unmount();
        assert!(!s.is_mounted());
    }
}
