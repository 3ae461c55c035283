use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clamp_or;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Cosmetic parameters of the orbital motion.
pub struct MotionOptions {
    /// Height of the vertical bob in world units. Zero disables it.
    #[schemars(
        title = "Bob Amplitude",
        range(min = 0.0, max = 2.0),
        extend("step" = 0.05)
    )]
    pub bob_amplitude: f32,
    /// Angular frequency of the bob in radians per second.
    #[schemars(
        title = "Bob Frequency",
        range(min = 0.0, max = 5.0),
        extend("step" = 0.1)
    )]
    pub bob_frequency: f32,
}

impl MotionOptions {
    pub(super) fn sanitize(&mut self) {
        let d = Self::default();
        self.bob_amplitude =
            clamp_or(self.bob_amplitude, 0.0, 100.0, d.bob_amplitude);
        self.bob_frequency =
            clamp_or(self.bob_frequency, 0.0, 100.0, d.bob_frequency);
    }
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            bob_amplitude: 0.2,
            bob_frequency: 0.8,
        }
    }
}
