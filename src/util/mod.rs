//! Shared utilities: easing curves and the timed-interpolation primitive.

pub mod easing;
pub mod tween;
