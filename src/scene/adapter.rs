use glam::{Vec2, Vec3};

use super::math::{self, Pickable};
use crate::camera::{Camera, Viewport};
use crate::error::OrreryError;
use crate::labels::LabelPosition;
use crate::orbit::{BodyId, BodyTransform};
use crate::performance::{QualityTier, TierParams};

/// One body as it should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedBody {
    /// Body id.
    pub id: BodyId,
    /// Position and spin for this frame.
    pub transform: BodyTransform,
    /// Hover affordance scale multiplier (1.0 at rest).
    pub scale: f32,
}

/// Everything the rendering layer needs to present one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Camera for this frame.
    pub camera: &'a Camera,
    /// Every loaded body.
    pub bodies: &'a [RenderedBody],
    /// Label overlay positions for the UI binding layer.
    pub labels: &'a [LabelPosition],
    /// Tier currently in effect.
    pub tier: QualityTier,
}

/// The rendering/scene-graph layer the navigation core drives.
///
/// Projection and picking have default implementations built on the
/// camera matrices; adapters backed by a real scene graph can override
/// them with their own primitives.
pub trait SceneAdapter {
    /// Current drawable size in physical pixels.
    fn viewport_size(&self) -> Viewport;

    /// Project a world position to viewport pixels, `None` when behind the
    /// camera.
    fn project_to_screen(
        &self,
        world: Vec3,
        camera: &Camera,
        viewport: Viewport,
    ) -> Option<Vec2> {
        math::project_point(world, camera, viewport)
    }

    /// Frontmost pickable under the NDC pointer, if any.
    fn raycast_pick(
        &self,
        pointer_ndc: Vec2,
        camera: &Camera,
        pickables: &[Pickable],
    ) -> Option<BodyId> {
        math::pick_frontmost(pointer_ndc, camera, pickables)
    }

    /// Replace every rendering parameter with those of `tier`. Must be
    /// idempotent.
    fn apply_quality_tier(&mut self, tier: QualityTier, params: &TierParams);

    /// Present a frame.
    fn render(&mut self, frame: &FrameView<'_>) -> Result<(), OrreryError>;
}
