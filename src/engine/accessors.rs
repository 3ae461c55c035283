//! Read-only queries on [`NavigationEngine`].

use super::NavigationEngine;
use crate::camera::{Camera, CameraPose, Viewport};
use crate::hover::Affordance;
use crate::labels::LabelPosition;
use crate::options::Options;
use crate::orbit::{BodyCatalog, BodyId, BodyTransform};
use crate::performance::{PerformanceSummary, QualityTier};
use crate::selection::SelectionState;

// ── Selection ──

impl NavigationEngine {
    /// Body focused or being flown to.
    pub fn selected_body_id(&self) -> Option<BodyId> {
        self.selection.selected()
    }

    /// Whether a camera flight is underway.
    pub fn is_transitioning(&self) -> bool {
        self.camera.is_transitioning()
    }

    /// Full selection state.
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Body whose detail panel should be shown. Only set once the camera
    /// has arrived.
    pub fn detail_panel_body(&self) -> Option<BodyId> {
        self.selection.detail_panel()
    }

    /// Body under the pointer as of the last tick.
    pub fn hovered_body_id(&self) -> Option<BodyId> {
        self.hover.hovered()
    }

    /// Current hover affordance of `id`.
    pub fn affordance(&self, id: BodyId) -> Affordance {
        self.hover.affordance(id)
    }
}

// ── Camera ──

impl NavigationEngine {
    /// Current camera pose.
    pub fn camera_pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Camera used for the last rendered frame.
    pub fn camera(&self) -> &Camera {
        &self.frame_camera
    }

    /// Viewport as of the last tick or resize.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

// ── Performance ──

impl NavigationEngine {
    /// Active quality tier.
    pub fn current_quality_tier(&self) -> QualityTier {
        self.governor.tier()
    }

    /// Rolling frame statistics.
    pub fn performance_summary(&self) -> PerformanceSummary {
        self.governor.summary()
    }
}

// ── Scene ──

impl NavigationEngine {
    /// Transform of `id` as of the last tick.
    pub fn body_transform(&self, id: BodyId) -> Option<BodyTransform> {
        self.transforms.get(&id).copied()
    }

    /// Label positions computed by the last tick.
    pub fn labels(&self) -> &[LabelPosition] {
        self.labels.positions()
    }

    /// Loaded bodies.
    pub fn catalog(&self) -> &BodyCatalog {
        &self.catalog
    }

    /// Active options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Simulation time of the last tick, in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }
}
