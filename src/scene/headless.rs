//! A scene adapter with no GPU behind it.
//!
//! Uses the default projection and picking math and records what the core
//! asked it to do. Drives tests, benches and the demo binary.

use super::adapter::{FrameView, RenderedBody, SceneAdapter};
use crate::camera::Viewport;
use crate::error::OrreryError;
use crate::labels::LabelPosition;
use crate::performance::{QualityTier, TierParams};

/// Recording, GPU-less [`SceneAdapter`].
#[derive(Debug, Clone, Default)]
pub struct HeadlessScene {
    viewport: Viewport,
    applied_tiers: Vec<(QualityTier, TierParams)>,
    frames_rendered: u64,
    last_bodies: Vec<RenderedBody>,
    last_labels: Vec<LabelPosition>,
    fail_render: bool,
}

impl HeadlessScene {
    /// Create a headless scene of the given size.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Simulate a window resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Make every subsequent `render` call fail (lost device, etc).
    pub fn set_fail_render(&mut self, fail: bool) {
        self.fail_render = fail;
    }

    /// Every tier application, oldest first.
    pub fn applied_tiers(&self) -> &[(QualityTier, TierParams)] {
        &self.applied_tiers
    }

    /// Parameters of the most recent tier application.
    pub fn current_params(&self) -> Option<&TierParams> {
        self.applied_tiers.last().map(|(_, p)| p)
    }

    /// Number of successfully presented frames.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Bodies of the last presented frame.
    pub fn last_bodies(&self) -> &[RenderedBody] {
        &self.last_bodies
    }

    /// Labels of the last presented frame.
    pub fn last_labels(&self) -> &[LabelPosition] {
        &self.last_labels
    }
}

impl SceneAdapter for HeadlessScene {
    fn viewport_size(&self) -> Viewport {
        self.viewport
    }

    fn apply_quality_tier(&mut self, tier: QualityTier, params: &TierParams) {
        self.applied_tiers.push((tier, *params));
    }

    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), OrreryError> {
        if self.fail_render {
            return Err(OrreryError::Render("headless device lost".to_owned()));
        }
        self.last_bodies.clear();
        self.last_bodies.extend_from_slice(frame.bodies);
        self.last_labels.clear();
        self.last_labels.extend_from_slice(frame.labels);
        self.frames_rendered += 1;
        Ok(())
    }
}
