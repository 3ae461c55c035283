use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;

use crate::camera::{Camera, Viewport};
use crate::orbit::{BodyCatalog, BodyId, BodyTransform};
use crate::scene::SceneAdapter;

/// Where to draw one label this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPosition {
    /// Body the label belongs to.
    pub body_id: BodyId,
    /// Pixel position (origin top-left), `None` when the anchor is behind
    /// the camera and the label must be hidden.
    pub position: Option<Vec2>,
    /// Label opacity in [0, 1].
    pub opacity: f32,
}

/// A live label for one relevant (hovered or selected) body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOverlay {
    /// Body the label belongs to.
    pub body_id: BodyId,
    /// Position written on the last update.
    pub last_screen_position: Option<Vec2>,
}

/// Keeps exactly one overlay per relevant body and re-projects every
/// overlay on every frame, without smoothing.
#[derive(Debug, Clone, Default)]
pub struct ScreenSpaceLabelProjector {
    overlays: Vec<LabelOverlay>,
    output: Vec<LabelPosition>,
    height_radii: f32,
}

impl ScreenSpaceLabelProjector {
    /// Create a projector placing labels `height_radii` display radii above
    /// the body center.
    pub fn new(height_radii: f32) -> Self {
        Self {
            overlays: Vec::new(),
            output: Vec::new(),
            height_radii: if height_radii.is_finite() {
                height_radii
            } else {
                0.0
            },
        }
    }

    /// Change the label height.
    pub fn set_height_radii(&mut self, height_radii: f32) {
        if height_radii.is_finite() {
            self.height_radii = height_radii;
        }
    }

    /// Create overlays for newly relevant bodies and destroy overlays of
    /// bodies that are no longer relevant. Duplicates in `relevant` map to a
    /// single overlay.
    pub fn sync(&mut self, relevant: &[BodyId]) {
        self.overlays.retain(|o| {
            let keep = relevant.contains(&o.body_id);
            if !keep {
                log::debug!("label destroyed for {}", o.body_id);
            }
            keep
        });
        for &id in relevant {
            if !self.overlays.iter().any(|o| o.body_id == id) {
                log::debug!("label created for {id}");
                self.overlays.push(LabelOverlay {
                    body_id: id,
                    last_screen_position: None,
                });
            }
        }
    }

    /// Re-project every live overlay for this frame.
    ///
    /// `opacity_of` supplies each label's opacity. Bodies without a
    /// transform (already disposed) get a hidden label.
    pub fn update<S, F>(
        &mut self,
        scene: &S,
        catalog: &BodyCatalog,
        transforms: &FxHashMap<BodyId, BodyTransform>,
        camera: &Camera,
        viewport: Viewport,
        opacity_of: F,
    ) where
        S: SceneAdapter + ?Sized,
        F: Fn(BodyId) -> f32,
    {
        self.output.clear();
        for overlay in &mut self.overlays {
            let anchor = catalog.get(overlay.body_id).and_then(|body| {
                let lift = body.display_radius * self.height_radii;
                transforms
                    .get(&overlay.body_id)
                    .map(|tf| tf.position + Vec3::Y * lift)
            });
            let position = anchor
                .and_then(|w| scene.project_to_screen(w, camera, viewport))
                .filter(|p| p.is_finite());
            overlay.last_screen_position = position;
            self.output.push(LabelPosition {
                body_id: overlay.body_id,
                position,
                opacity: opacity_of(overlay.body_id).clamp(0.0, 1.0),
            });
        }
    }

    /// Label positions computed by the last update.
    pub fn positions(&self) -> &[LabelPosition] {
        &self.output
    }

    /// Overlay of `id`, if one is live.
    pub fn overlay(&self, id: BodyId) -> Option<&LabelOverlay> {
        self.overlays.iter().find(|o| o.body_id == id)
    }

    /// Number of live overlays.
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Whether no overlay is live.
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraPose;
    use crate::options::CameraOptions;
    use crate::orbit::CelestialBody;
    use crate::scene::HeadlessScene;

    const VIEWPORT: Viewport = Viewport::new(800, 600);

    fn setup() -> (BodyCatalog, FxHashMap<BodyId, BodyTransform>) {
        let catalog = BodyCatalog::from_bodies([
            CelestialBody::new(BodyId(1), 1.0, 0.0, 0.0),
            CelestialBody::new(BodyId(2), 1.0, 30.0, 0.0),
        ]);
        let mut transforms = FxHashMap::default();
        let _ = transforms.insert(
            BodyId(1),
            BodyTransform {
                position: Vec3::ZERO,
                spin: 0.0,
            },
        );
        let _ = transforms.insert(
            BodyId(2),
            BodyTransform {
                position: Vec3::new(0.0, 0.0, 30.0),
                spin: 0.0,
            },
        );
        (catalog, transforms)
    }

    fn camera() -> Camera {
        Camera::from_pose(
            &CameraPose::new(Vec3::new(0.0, 0.0, 20.0), Vec3::ZERO),
            &CameraOptions::default(),
            VIEWPORT,
        )
    }

    fn refresh(
        labels: &mut ScreenSpaceLabelProjector,
        catalog: &BodyCatalog,
        transforms: &FxHashMap<BodyId, BodyTransform>,
        opacity: f32,
    ) {
        let scene = HeadlessScene::new(VIEWPORT);
        let cam = camera();
        labels.update(&scene, catalog, transforms, &cam, VIEWPORT, |_| opacity);
    }

    #[test]
    fn sync_keeps_one_overlay_per_body() {
        let mut labels = ScreenSpaceLabelProjector::new(1.5);
        labels.sync(&[BodyId(1), BodyId(1)]);
        assert_eq!(labels.len(), 1);
        labels.sync(&[BodyId(1), BodyId(2)]);
        assert_eq!(labels.len(), 2);
        labels.sync(&[BodyId(2)]);
        assert!(labels.overlay(BodyId(1)).is_none());
        labels.sync(&[]);
        assert!(labels.is_empty());
    }

    #[test]
    fn label_floats_above_body() {
        let (catalog, transforms) = setup();
        let mut labels = ScreenSpaceLabelProjector::new(1.5);
        labels.sync(&[BodyId(1)]);
        refresh(&mut labels, &catalog, &transforms, 1.0);

        let pos = labels.positions()[0].position.unwrap();
        assert!((pos.x - 400.0).abs() < 1e-3);
        assert!(pos.y < 300.0);
        let overlay = labels.overlay(BodyId(1)).unwrap();
        assert_eq!(overlay.last_screen_position, Some(pos));
    }

    #[test]
    fn label_behind_camera_is_hidden() {
        let (catalog, transforms) = setup();
        let mut labels = ScreenSpaceLabelProjector::new(1.5);
        labels.sync(&[BodyId(2)]);
        refresh(&mut labels, &catalog, &transforms, 1.0);
        assert_eq!(labels.positions()[0].position, None);
    }

    #[test]
    fn positions_follow_moving_body_without_smoothing() {
        let (catalog, mut transforms) = setup();
        let mut labels = ScreenSpaceLabelProjector::new(0.0);
        labels.sync(&[BodyId(1)]);
        refresh(&mut labels, &catalog, &transforms, 1.0);
        let before = labels.positions()[0].position.unwrap();

        let _ = transforms.insert(
            BodyId(1),
            BodyTransform {
                position: Vec3::new(3.0, 0.0, 0.0),
                spin: 0.0,
            },
        );
        refresh(&mut labels, &catalog, &transforms, 1.0);
        let after = labels.positions()[0].position.unwrap();
        let expected = scene_projection(Vec3::new(3.0, 0.0, 0.0));
        assert!(after.x > before.x);
        assert!((after - expected).length() < 1e-3);
    }

    fn scene_projection(world: Vec3) -> Vec2 {
        crate::scene::math::project_point(world, &camera(), VIEWPORT).unwrap()
    }

    #[test]
    fn missing_transform_hides_label_and_opacity_is_clamped() {
        let (catalog, _) = setup();
        let mut labels = ScreenSpaceLabelProjector::new(1.5);
        labels.sync(&[BodyId(1)]);
        refresh(&mut labels, &catalog, &FxHashMap::default(), 3.0);
        assert_eq!(labels.positions()[0].position, None);
        assert_eq!(labels.positions()[0].opacity, 1.0);
    }
}
