//! The per-view navigation context.
//!
//! [`NavigationEngine`] composes the orbital simulator, camera flights,
//! hover, labels, the performance governor and selection, and sequences
//! them once per frame against a [`SceneAdapter`].

mod accessors;
mod command;
mod input;
mod options;
mod scene_management;

pub use command::NavCommand;
use glam::Vec3;
use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

use crate::camera::{Camera, CameraPose, CameraTransitionController, Viewport};
use crate::hover::HoverHitTestController;
use crate::input::PointerState;
use crate::labels::ScreenSpaceLabelProjector;
use crate::options::Options;
use crate::orbit::{BodyCatalog, BodyId, BodyTransform, OrbitalMotionSimulator};
use crate::performance::PerformanceGovernor;
use crate::scene::{FrameView, Pickable, RenderedBody, SceneAdapter};
use crate::selection::SelectionController;

/// Smallest radius used to scale the focus offset, so zero-sized bodies
/// still get a usable viewing distance.
const MIN_FOCUS_RADIUS: f32 = 0.1;

/// The navigation core of one 3D view.
///
/// Owns every piece of cross-frame state (camera pose, hover id, selection,
/// quality tier, performance samples) and advances it once per frame.
/// Instantiate one engine per view; nothing is global, so several engines
/// can coexist (e.g. in tests).
///
/// # Frame loop
///
/// Call [`tick`](Self::tick) once per animation frame with the frame's
/// timestamp and the scene adapter. Within a tick the steps run in a fixed
/// order, each seeing the results of the previous ones:
///
/// 1. orbital motion
/// 2. camera transition (and selection arrival)
/// 3. hover hit-test and affordance tweens
/// 4. label projection
/// 5. performance sampling and tier selection
/// 6. render
///
/// # Input
///
/// Pointer events go through [`handle_input`](Self::handle_input);
/// programmatic actions through [`execute`](Self::execute) or the
/// [`select_body`](Self::select_body) / [`deselect_body`](Self::deselect_body)
/// shortcuts.
pub struct NavigationEngine {
    options: Options,
    catalog: BodyCatalog,
    simulator: OrbitalMotionSimulator,
    camera: CameraTransitionController,
    hover: HoverHitTestController,
    labels: ScreenSpaceLabelProjector,
    governor: PerformanceGovernor,
    selection: SelectionController,
    pointer: PointerState,
    viewport: Viewport,
    /// Camera used for the last frame; clicks are resolved against it.
    frame_camera: Camera,
    start: Instant,
    /// Seconds since `start`, never decreasing.
    elapsed: f64,
    transforms: FxHashMap<BodyId, BodyTransform>,
    pickables: Vec<Pickable>,
    rendered: Vec<RenderedBody>,
    tier_dirty: bool,
}

impl NavigationEngine {
    /// Create an engine at the overview pose. `start` is time zero of the
    /// orbital simulation. Invalid option values are replaced, see
    /// [`Options::sanitized`].
    pub fn new(
        options: Options,
        catalog: BodyCatalog,
        viewport: Viewport,
        start: Instant,
    ) -> Self {
        let options = options.sanitized();
        let overview = overview_pose(&options);
        let camera =
            CameraTransitionController::new(overview, options.camera.easing);
        let frame_camera =
            Camera::from_pose(&camera.pose(), &options.camera, viewport);
        log::debug!(
            "navigation engine created with {} bodies, {}x{} viewport",
            catalog.len(),
            viewport.width,
            viewport.height
        );
        Self {
            simulator: OrbitalMotionSimulator::new(options.motion.clone()),
            hover: HoverHitTestController::new(options.hover.clone()),
            labels: ScreenSpaceLabelProjector::new(options.labels.height_radii),
            governor: PerformanceGovernor::new(&options.performance),
            selection: SelectionController::new(),
            pointer: PointerState::new(options.input.drag_threshold_px),
            camera,
            frame_camera,
            viewport,
            start,
            elapsed: 0.0,
            transforms: FxHashMap::default(),
            pickables: Vec::new(),
            rendered: Vec::new(),
            tier_dirty: true,
            catalog,
            options,
        }
    }

    /// Advance every component to `now` and render through `scene`.
    ///
    /// Never fails: adapter errors are logged and the frame is dropped.
    pub fn tick<S: SceneAdapter + ?Sized>(
        &mut self,
        now: Instant,
        scene: &mut S,
    ) {
        self.viewport = scene.viewport_size();
        if self.tier_dirty {
            self.apply_tier(scene);
        }

        // 1. Orbital motion
        let t = now.saturating_duration_since(self.start).as_secs_f64();
        self.elapsed = self.elapsed.max(t);
        self.simulator
            .simulate_into(&self.catalog, self.elapsed, &mut self.transforms);

        // 2. Camera
        if self.camera.tick(now) {
            self.selection.on_camera_arrived();
        }
        self.frame_camera = Camera::from_pose(
            &self.camera.pose(),
            &self.options.camera,
            self.viewport,
        );

        // 3. Hover
        self.rebuild_pickables();
        let pointer_ndc = self
            .pointer
            .position()
            .and_then(|p| self.viewport.pixel_to_ndc(p));
        let hit = self.hover.hit_test(
            &*scene,
            pointer_ndc,
            &self.frame_camera,
            &self.pickables,
        );
        self.hover.update(hit, now);
        self.hover.tick(now);

        // 4. Labels
        self.update_labels(&*scene);

        // 5. Performance
        self.governor.record_frame(now);
        if self.governor.evaluate(now).is_some() {
            self.apply_tier(scene);
        }

        // 6. Render
        self.render(scene);
    }

    fn apply_tier<S: SceneAdapter + ?Sized>(&mut self, scene: &mut S) {
        let tier = self.governor.tier();
        scene.apply_quality_tier(tier, self.options.performance.params(tier));
        self.tier_dirty = false;
    }

    fn rebuild_pickables(&mut self) {
        self.pickables.clear();
        for body in self.catalog.iter() {
            if let Some(tf) = self.transforms.get(&body.id) {
                self.pickables.push(Pickable {
                    id: body.id,
                    center: tf.position,
                    radius: self.hover.pick_radius(body.display_radius)
                        * self.hover.affordance(body.id).scale,
                });
            }
        }
    }

    fn update_labels<S: SceneAdapter + ?Sized>(&mut self, scene: &S) {
        let selected = self.selection.selected();
        let mut relevant = Vec::with_capacity(2);
        relevant.extend(self.hover.hovered());
        relevant.extend(selected);
        self.labels.sync(&relevant);

        let hover = &self.hover;
        self.labels.update(
            scene,
            &self.catalog,
            &self.transforms,
            &self.frame_camera,
            self.viewport,
            |id| {
                if selected == Some(id) {
                    1.0
                } else {
                    hover.affordance(id).label_opacity
                }
            },
        );
    }

    fn render<S: SceneAdapter + ?Sized>(&mut self, scene: &mut S) {
        self.rendered.clear();
        for body in self.catalog.iter() {
            if let Some(tf) = self.transforms.get(&body.id) {
                self.rendered.push(RenderedBody {
                    id: body.id,
                    transform: *tf,
                    scale: self.hover.affordance(body.id).scale,
                });
            }
        }
        let frame = FrameView {
            camera: &self.frame_camera,
            bodies: &self.rendered,
            labels: self.labels.positions(),
            tier: self.governor.tier(),
        };
        if let Err(e) = scene.render(&frame) {
            log::warn!("frame dropped: {e}");
        }
    }

    /// Camera flight duration from the options.
    fn flight_duration(&self) -> Duration {
        Duration::from_millis(self.options.camera.transition_ms)
    }

    /// Pose looking at body `id` from the configured offset, using its
    /// position at the current simulation time.
    fn focus_pose(&self, id: BodyId) -> Option<CameraPose> {
        let body = self.catalog.get(id)?;
        let center = self.transforms.get(&id).map_or_else(
            || self.simulator.transform(body, self.elapsed).position,
            |tf| tf.position,
        );
        let offset = Vec3::from(self.options.camera.focus_offset)
            * body.display_radius.max(MIN_FOCUS_RADIUS);
        Some(CameraPose::looking_at(center, offset))
    }

    /// Select body `id` and fly to it.
    ///
    /// Unknown (not yet loaded) ids and the already-selected id are
    /// silently ignored.
    pub fn select_body(&mut self, id: BodyId, now: Instant) {
        let Some(pose) = self.focus_pose(id) else {
            log::debug!("select ignored: {id} not loaded");
            return;
        };
        let duration = self.flight_duration();
        let _ = self
            .selection
            .select(id, pose, &mut self.camera, duration, now);
    }

    /// Clear the selection and fly back to the overview. A no-op when
    /// nothing is selected.
    pub fn deselect_body(&mut self, now: Instant) {
        let duration = self.flight_duration();
        let overview = overview_pose(&self.options);
        let _ = self
            .selection
            .deselect(overview, &mut self.camera, duration, now);
    }
}

/// Overview pose from the options.
fn overview_pose(options: &Options) -> CameraPose {
    CameraPose::new(
        Vec3::from(options.camera.overview_position),
        Vec3::from(options.camera.overview_target),
    )
}
