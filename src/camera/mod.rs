//! Camera model and pose transitions.
//!
//! Provides the perspective camera, the pose/viewport value types and the
//! controller that owns the single authoritative camera pose.

/// Core camera, pose and viewport types.
pub mod core;
/// Replace-in-flight pose transitions.
pub mod transition;

pub use self::core::{Camera, CameraPose, Viewport};
pub use self::transition::{CameraTransitionController, TransitionRequest};
