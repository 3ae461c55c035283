//! Pointer hover detection and the affordance tweens it drives.

/// Per-body affordance values and their tween arena.
pub mod affordance;
/// Hover hit-testing and enter/exit sequencing.
pub mod controller;

pub use affordance::{Affordance, AffordanceTween, AffordanceTweens, TweenKind};
pub use controller::HoverHitTestController;
