//! Easing curves and the progress primitive shared by every timed
//! interpolation in the crate (camera transitions and hover affordances).

use serde::{Deserialize, Serialize};
use web_time::{Duration, Instant};

/// Easing function variants for interpolation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-in-out: `4t³` below the midpoint, `1 - (-2t + 2)³ / 2`
    /// above it. Symmetric, zero velocity at both ends.
    CubicInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing for camera flights and affordance tweens.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Whether every control parameter is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            EasingFunction::CubicHermite { c1, c2 } => {
                c1.is_finite() && c2.is_finite()
            }
            _ => true,
        }
    }

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]; NaN is treated as 0.0.
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let k = -2.0 * t + 2.0;
                    1.0 - k * k * k / 2.0
                }
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Linear progress of a timed interpolation, clamped to [0.0, 1.0].
///
/// A `now` earlier than `start` yields 0.0. A zero `duration` resolves
/// immediately to 1.0.
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let t = elapsed.as_secs_f64() / duration.as_secs_f64();
    (t as f32).clamp(0.0, 1.0)
}
