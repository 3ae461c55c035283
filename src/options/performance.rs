use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::clamp_or;
use crate::performance::{QualityTier, TierParams};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Performance", inline)]
#[serde(default)]
/// Adaptive quality parameters.
pub struct PerformanceOptions {
    /// Whether the governor may change tiers at all.
    #[schemars(title = "Adaptive Quality")]
    pub adaptive: bool,
    /// Delay after the first frame before the first decision, in ms.
    #[schemars(skip)]
    pub warmup_ms: u64,
    /// Length of the rolling sample window, in ms.
    #[schemars(skip)]
    pub window_ms: u64,
    /// Minimum time between two tier decisions, in ms.
    #[schemars(skip)]
    pub dwell_ms: u64,
    /// Average FPS below which the tier drops.
    #[schemars(
        title = "Low FPS",
        range(min = 10.0, max = 120.0),
        extend("step" = 1.0)
    )]
    pub low_fps: f32,
    /// Average FPS above which the tier rises.
    #[schemars(
        title = "High FPS",
        range(min = 10.0, max = 144.0),
        extend("step" = 1.0)
    )]
    pub high_fps: f32,
    /// Tier applied before any measurement.
    #[schemars(skip)]
    pub initial_tier: QualityTier,
    /// Rendering parameters of the standard tier.
    #[schemars(skip)]
    pub standard: TierParams,
    /// Rendering parameters of the enhanced tier.
    #[schemars(skip)]
    pub enhanced: TierParams,
}

impl PerformanceOptions {
    /// Parameter record of `tier`.
    pub fn params(&self, tier: QualityTier) -> &TierParams {
        match tier {
            QualityTier::Standard => &self.standard,
            QualityTier::Enhanced => &self.enhanced,
        }
    }

    pub(super) fn sanitize(&mut self) {
        let d = Self::default();
        self.low_fps = clamp_or(self.low_fps, 0.0, 1000.0, d.low_fps);
        self.high_fps = clamp_or(self.high_fps, 0.0, 1000.0, d.high_fps)
            .max(self.low_fps);
        sanitize_tier(&mut self.standard, &d.standard);
        sanitize_tier(&mut self.enhanced, &d.enhanced);
    }
}

fn sanitize_tier(params: &mut TierParams, fallback: &TierParams) {
    params.bloom_strength =
        clamp_or(params.bloom_strength, 0.0, 100.0, fallback.bloom_strength);
    params.max_pixel_ratio =
        clamp_or(params.max_pixel_ratio, 0.25, 8.0, fallback.max_pixel_ratio);
}

impl Default for PerformanceOptions {
    fn default() -> Self {
        Self {
            adaptive: true,
            warmup_ms: 3000,
            window_ms: 2000,
            dwell_ms: 5000,
            low_fps: 45.0,
            high_fps: 57.0,
            initial_tier: QualityTier::Enhanced,
            standard: TierParams {
                bloom_strength: 0.6,
                shadow_map_size: 1024,
                particle_count: 1500,
                max_pixel_ratio: 1.0,
            },
            enhanced: TierParams {
                bloom_strength: 1.2,
                shadow_map_size: 2048,
                particle_count: 4000,
                max_pixel_ratio: 2.0,
            },
        }
    }
}
