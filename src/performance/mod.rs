//! Adaptive quality: frame-time sampling and tier selection.

/// Rolling-window governor.
pub mod governor;
/// Quality tiers and their parameter records.
pub mod tier;

pub use governor::{PerformanceGovernor, PerformanceSample, PerformanceSummary};
pub use tier::{QualityTier, TierParams};
