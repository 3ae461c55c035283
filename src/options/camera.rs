use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{clamp_or, finite_vec_or};
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and flight parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 20.0, max = 90.0),
        extend("step" = 1.0)
    )]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Duration of a select/deselect camera flight in milliseconds.
    #[schemars(
        title = "Flight Time (ms)",
        range(min = 0, max = 5000),
        extend("step" = 50)
    )]
    pub transition_ms: u64,
    /// Easing curve applied to camera flights.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Eye position of the overview pose.
    #[schemars(skip)]
    pub overview_position: [f32; 3],
    /// Look-at target of the overview pose.
    #[schemars(skip)]
    pub overview_target: [f32; 3],
    /// Eye offset from a focused body, in multiples of its display radius.
    #[schemars(skip)]
    pub focus_offset: [f32; 3],
}

impl CameraOptions {
    pub(super) fn sanitize(&mut self) {
        let d = Self::default();
        self.fovy = clamp_or(self.fovy, 1.0, 179.0, d.fovy);
        if !(self.znear.is_finite() && self.znear > 0.0) {
            self.znear = d.znear;
        }
        if !(self.zfar.is_finite() && self.zfar > self.znear) {
            self.zfar = d.zfar.max(self.znear * 10.0);
        }
        if !self.easing.is_finite() {
            self.easing = d.easing;
        }
        self.overview_position =
            finite_vec_or(self.overview_position, d.overview_position);
        self.overview_target =
            finite_vec_or(self.overview_target, d.overview_target);
        self.focus_offset = finite_vec_or(self.focus_offset, d.focus_offset);
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 2000.0,
            transition_ms: 1500,
            easing: EasingFunction::CubicInOut,
            overview_position: [0.0, 30.0, 45.0],
            overview_target: [0.0, 0.0, 0.0],
            focus_offset: [0.0, 1.5, 4.0],
        }
    }
}
