use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clamp_or;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Labels", inline)]
#[serde(default)]
/// Screen-space label placement.
pub struct LabelOptions {
    /// Height of the label anchor above the body center, in display radii.
    #[schemars(
        title = "Label Height",
        range(min = 0.0, max = 4.0),
        extend("step" = 0.1)
    )]
    pub height_radii: f32,
}

impl LabelOptions {
    pub(super) fn sanitize(&mut self) {
        let fallback = Self::default().height_radii;
        self.height_radii =
            clamp_or(self.height_radii, -100.0, 100.0, fallback);
    }
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self { height_radii: 1.5 }
    }
}
