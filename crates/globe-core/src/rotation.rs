use crate::capability::Capability;
use crate::constants::ROTATION_RATE;
use crate::scene::GlobeNode;

/// What a frame did to the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// Rotation advanced by this many radians.
    Advanced(f32),
    /// Constrained device; nothing moved.
    Suppressed,
    /// No render target attached yet; frame skipped.
    Detached,
}

/// Per-frame auto-rotation of the globe node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationAnimator {
    rate: f32,
}

impl Default for RotationAnimator {
    fn default() -> Self {
        Self::new(ROTATION_RATE)
    }
}

impl RotationAnimator {
    pub fn new(rate: f32) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Advance `target` by `delta_sec * rate` unless suppressed.
    ///
    /// Never panics: a missing target or a bogus delta just skips motion.
    pub fn on_frame(
        &self,
        target: Option<&mut GlobeNode>,
        delta_sec: f32,
        capability: Capability,
    ) -> FrameOutcome {
        let Some(node) = target else {
            log::trace!("[rotation] no render target, skipping frame");
            return FrameOutcome::Detached;
        };
        if capability.is_constrained() {
            return FrameOutcome::Suppressed;
        }
        let delta = if delta_sec.is_finite() && delta_sec > 0.0 {
            delta_sec
        } else {
            0.0
        };
        let step = delta * self.rate;
        node.rotate_y(step);
        FrameOutcome::Advanced(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::scene::GlobeConfig;

    fn node() -> GlobeNode {
        GlobeNode::new(&GlobeConfig::default(), &Catalog::reduced())
    }

    #[test]
    fn suppressed_frames_leave_rotation_alone() {
        let anim = RotationAnimator::default();
        let mut n = node();
        for _ in 0..10 {
            let out = anim.on_frame(Some(&mut n), 0.5, Capability::Constrained);
            assert_eq!(out, FrameOutcome::Suppressed);
        }
        assert_eq!(n.mesh_rotation(), 0.0);
        assert_eq!(n.label_rotation(), 0.0);
    }

    #[test]
    fn rotation_is_linear_in_elapsed_time() {
        let anim = RotationAnimator::default();
        let mut n = node();
        anim.on_frame(Some(&mut n), 0.016, Capability::Full);
        anim.on_frame(Some(&mut n), 0.5, Capability::Full);
        let expected = (0.016 + 0.5) * ROTATION_RATE;
        assert!((n.mesh_rotation() - expected).abs() < 1e-6);
        assert_eq!(n.mesh_rotation(), n.label_rotation());
    }

    #[test]
    fn long_runs_are_linear_modulo_a_full_turn() {
        let anim = RotationAnimator::default();
        let mut n = node();
        anim.on_frame(Some(&mut n), 10.0, Capability::Full);
        anim.on_frame(Some(&mut n), 15.0, Capability::Full);
        let expected = ((10.0 + 15.0) * ROTATION_RATE).rem_euclid(std::f32::consts::TAU);
        assert!((n.mesh_rotation() - expected).abs() < 1e-5);
        assert!(n.mesh_rotation() < 2.0 * std::f32::consts::PI);
    }

    #[test]
    fn detached_target_is_skipped() {
        let anim = RotationAnimator::default();
        assert_eq!(
            anim.on_frame(None, 0.016, Capability::Full),
            FrameOutcome::Detached
        );
    }

    #[test]
    fn bogus_deltas_do_not_move_or_panic() {
        let anim = RotationAnimator::default();
        let mut n = node();
        for d in [-1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 0.0] {
            assert_eq!(
                anim.on_frame(Some(&mut n), d, Capability::Full),
                FrameOutcome::Advanced(0.0)
            );
        }
        assert_eq!(n.rotation_y(), 0.0);
    }

    #[test]
    fn custom_rate() {
        let anim = RotationAnimator::new(1.0);
        let mut n = node();
        assert_eq!(
            anim.on_frame(Some(&mut n), 0.25, Capability::Full),
            FrameOutcome::Advanced(0.25)
        );
    }
}
