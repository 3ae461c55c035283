//! Timed interpolation primitive.
//!
//! A [`Tween`] only tracks *when* an interpolation runs and how its progress
//! is shaped; the owner keeps the `from`/`to` values and lerps them with the
//! eased progress. Replacing a tween is just overwriting the owner's slot.

use glam::Vec3;
use web_time::{Duration, Instant};

use super::easing::{progress, EasingFunction};

/// Start time, duration and easing of one running interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// When the interpolation started.
    pub start: Instant,
    /// Total interpolation time. Zero resolves on the first evaluation.
    pub duration: Duration,
    /// Curve applied to the linear progress.
    pub easing: EasingFunction,
}

impl Tween {
    /// Create a tween starting at `start`.
    pub fn new(
        start: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start,
            duration,
            easing,
        }
    }

    /// Clamped linear progress at `now`.
    #[inline]
    pub fn raw_progress(&self, now: Instant) -> f32 {
        progress(self.start, now, self.duration)
    }

    /// Eased progress at `now`.
    #[inline]
    pub fn eased_progress(&self, now: Instant) -> f32 {
        self.easing.evaluate(self.raw_progress(now))
    }

    /// Whether the tween has reached progress 1 at `now`.
    #[inline]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.raw_progress(now) >= 1.0
    }
}

/// Lerp two positions by `t`.
#[inline]
pub fn lerp_position(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start + (end - start) * t
}

/// Lerp two f32 values by `t`.
#[inline]
pub fn lerp_f32(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
