use web_time::{Duration, Instant};

use super::core::CameraPose;
use crate::util::easing::EasingFunction;
use crate::util::tween::Tween;

/// One in-flight camera flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    /// Pose captured when the flight began.
    pub from_pose: CameraPose,
    /// Destination pose.
    pub to_pose: CameraPose,
    /// Timing of the flight.
    pub tween: Tween,
}

/// Owns the authoritative camera pose and at most one in-flight transition.
///
/// A new transition always starts from the literal current pose and
/// replaces whatever was in flight, so interrupting a flight never pops.
#[derive(Debug, Clone)]
pub struct CameraTransitionController {
    current: CameraPose,
    active: Option<TransitionRequest>,
    easing: EasingFunction,
}

impl CameraTransitionController {
    /// Create an idle controller resting at `initial`.
    ///
    /// A non-finite `initial` pose is replaced by a default overview-ish
    /// pose so the current pose is always finite.
    pub fn new(initial: CameraPose, easing: EasingFunction) -> Self {
        let current = if initial.is_finite() {
            initial
        } else {
            log::warn!("non-finite initial camera pose, using fallback");
            CameraPose::new(glam::Vec3::new(0.0, 0.0, 10.0), glam::Vec3::ZERO)
        };
        Self {
            current,
            active: None,
            easing,
        }
    }

    /// Change the easing used by subsequent transitions.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.easing = easing;
    }

    /// The authoritative current pose.
    pub fn pose(&self) -> CameraPose {
        self.current
    }

    /// The in-flight transition, if any.
    pub fn active(&self) -> Option<&TransitionRequest> {
        self.active.as_ref()
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Start flying to `to_pose`, replacing any in-flight transition.
    ///
    /// A non-finite destination is rejected and leaves the controller
    /// untouched. A zero `duration` resolves on the next tick.
    pub fn begin_transition(
        &mut self,
        to_pose: CameraPose,
        duration: Duration,
        now: Instant,
    ) {
        if !to_pose.is_finite() {
            log::warn!("rejecting non-finite camera transition target");
            return;
        }
        if self.active.is_some() {
            log::debug!("camera transition replaced mid-flight");
        }
        self.active = Some(TransitionRequest {
            from_pose: self.current,
            to_pose,
            tween: Tween::new(now, duration, self.easing),
        });
    }

    /// Jump to `pose` immediately, discarding any in-flight transition.
    pub fn snap_to(&mut self, pose: CameraPose) {
        if pose.is_finite() {
            self.current = pose;
            self.active = None;
        }
    }

    /// Stop any in-flight transition, holding the pose reached so far.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            log::debug!("camera transition cancelled");
        }
    }

    /// Advance the in-flight transition to `now`.
    ///
    /// Returns `true` on the tick at which a transition completes. A no-op
    /// returning `false` when idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(request) = self.active else {
            return false;
        };
        if request.tween.is_finished(now) {
            self.current = request.to_pose;
            self.active = None;
            return true;
        }
        let t = request.tween.eased_progress(now);
        let pose = request.from_pose.lerp(&request.to_pose, t);
        if pose.is_finite() {
            self.current = pose;
        }
        false
    }
}
