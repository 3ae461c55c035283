use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clamp_or;
use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Hover", inline)]
#[serde(default)]
/// Hover affordance parameters.
pub struct HoverOptions {
    /// Scale multiplier of a hovered body.
    #[schemars(
        title = "Hover Scale",
        range(min = 1.0, max = 2.0),
        extend("step" = 0.05)
    )]
    pub hover_scale: f32,
    /// Label opacity of a hovered body.
    #[schemars(
        title = "Label Opacity",
        range(min = 0.0, max = 1.0),
        extend("step" = 0.05)
    )]
    pub label_opacity: f32,
    /// Enter/exit tween duration in milliseconds.
    #[schemars(
        title = "Tween Time (ms)",
        range(min = 0, max = 2000),
        extend("step" = 10)
    )]
    pub tween_ms: u64,
    /// Easing curve of the enter/exit tween.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Pick sphere radius as a multiple of the display radius.
    #[schemars(skip)]
    pub pick_radius_scale: f32,
}

impl HoverOptions {
    pub(super) fn sanitize(&mut self) {
        let d = Self::default();
        self.hover_scale = clamp_or(self.hover_scale, 0.1, 10.0, d.hover_scale);
        self.label_opacity =
            clamp_or(self.label_opacity, 0.0, 1.0, d.label_opacity);
        self.pick_radius_scale =
            clamp_or(self.pick_radius_scale, 0.1, 10.0, d.pick_radius_scale);
        if !self.easing.is_finite() {
            self.easing = d.easing;
        }
    }
}

impl Default for HoverOptions {
    fn default() -> Self {
        Self {
            hover_scale: 1.2,
            label_opacity: 1.0,
            tween_ms: 250,
            easing: EasingFunction::CubicInOut,
            pick_radius_scale: 1.1,
        }
    }
}
