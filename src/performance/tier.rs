use serde::{Deserialize, Serialize};

/// Ordered rendering-cost tiers. `Standard < Enhanced`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    /// Reduced effects for slow devices.
    Standard,
    /// Full effects.
    #[default]
    Enhanced,
}

impl QualityTier {
    /// The next cheaper tier, or `None` at the bottom.
    pub fn lower(self) -> Option<Self> {
        match self {
            Self::Standard => None,
            Self::Enhanced => Some(Self::Standard),
        }
    }

    /// The next richer tier, or `None` at the top.
    pub fn higher(self) -> Option<Self> {
        match self {
            Self::Standard => Some(Self::Enhanced),
            Self::Enhanced => None,
        }
    }

    /// Lowercase name for logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Enhanced => "enhanced",
        }
    }
}

/// The complete rendering-parameter record of one tier.
///
/// Applying a tier replaces every field; nothing carries over from the
/// previous tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierParams {
    /// Bloom post-processing strength.
    pub bloom_strength: f32,
    /// Shadow map resolution in texels per side.
    pub shadow_map_size: u32,
    /// Number of background particles (star field, dust).
    pub particle_count: u32,
    /// Upper bound on the device pixel ratio used for the render target.
    pub max_pixel_ratio: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(QualityTier::Standard < QualityTier::Enhanced);
        assert_eq!(QualityTier::Enhanced.lower(), Some(QualityTier::Standard));
        assert_eq!(QualityTier::Standard.lower(), None);
        assert_eq!(QualityTier::Standard.higher(), Some(QualityTier::Enhanced));
        assert_eq!(QualityTier::Enhanced.higher(), None);
    }
}
