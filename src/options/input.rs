use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clamp_or;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Pointer handling parameters.
pub struct InputOptions {
    /// Pointer travel in pixels after which a press becomes a drag.
    #[schemars(
        title = "Drag Threshold",
        range(min = 0.0, max = 32.0),
        extend("step" = 1.0)
    )]
    pub drag_threshold_px: f32,
}

impl InputOptions {
    pub(super) fn sanitize(&mut self) {
        self.drag_threshold_px = clamp_or(
            self.drag_threshold_px,
            0.0,
            1000.0,
            Self::default().drag_threshold_px,
        );
    }
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            drag_threshold_px: 4.0,
        }
    }
}
