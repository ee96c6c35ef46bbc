//! Platform-free core of the label globe: label placement, the rotation
//! rule, device-capability tracking and the orbit camera.

pub mod capability;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod host;
pub mod orbit;
pub mod rotation;
pub mod scene;
pub mod sphere;
pub mod subscription;
pub mod surface;

pub use capability::*;
pub use catalog::*;
pub use constants::*;
pub use error::{GlobeError, Result};
pub use geometry::WireframeSphere;
pub use host::{HostEnvironment, ManualHost, ResizeHandler};
pub use orbit::{OrbitController, OrbitSettings};
pub use rotation::{FrameOutcome, RotationAnimator};
pub use scene::{Camera, GlobeConfig, GlobeNode};
pub use sphere::{sphere_point, sphere_points, Label};
pub use subscription::Subscription;
pub use surface::GlobeSurface;
