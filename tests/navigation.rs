//! End-to-end navigation scenarios against the public API, driven by a
//! synthetic clock and the headless scene adapter.

use glam::Vec3;
use orrery::camera::{CameraPose, CameraTransitionController, Viewport};
use orrery::engine::{NavCommand, NavigationEngine};
use orrery::input::InputEvent;
use orrery::options::Options;
use orrery::orbit::{BodyCatalog, BodyId, CelestialBody};
use orrery::performance::QualityTier;
use orrery::scene::{HeadlessScene, SceneAdapter};
use orrery::selection::SelectionState;
use orrery::util::easing::EasingFunction;
use web_time::{Duration, Instant};

const VIEWPORT: Viewport = Viewport::new(1280, 720);
const FRAME: Duration = Duration::from_micros(16_667);

fn five_bodies() -> BodyCatalog {
    let radii = [8.0, 12.0, 16.0, 14.0, 20.0];
    let speeds = [0.1, 0.05, 0.08, 0.02, 0.09];
    BodyCatalog::from_bodies((0..5).map(|i| {
        CelestialBody::new(BodyId(i as u32 + 1), 1.0, radii[i], speeds[i])
            .with_phase(i as f32)
    }))
}

/// A single body parked at the origin, under the overview look-at target.
fn parked_body() -> BodyCatalog {
    BodyCatalog::from_bodies([CelestialBody::new(BodyId(1), 3.0, 0.0, 0.0)])
}

fn still_options() -> Options {
    let mut options = Options::default();
    options.motion.bob_amplitude = 0.0;
    options
}

fn start(
    options: Options,
    catalog: BodyCatalog,
    t0: Instant,
) -> NavigationEngine {
    NavigationEngine::new(options, catalog, VIEWPORT, t0)
}

fn move_to(
    engine: &mut NavigationEngine,
    scene: &HeadlessScene,
    x: f32,
    now: Instant,
) {
    engine.handle_input(InputEvent::CursorMoved { x, y: 360.0 }, scene, now);
}

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn eased_transition_samples_cubic_curve() {
    let t0 = Instant::now();
    let from = CameraPose::new(Vec3::splat(10.0), Vec3::ZERO);
    let to = CameraPose::new(Vec3::ZERO, Vec3::X);
    let mut camera =
        CameraTransitionController::new(from, EasingFunction::CubicInOut);
    camera.begin_transition(to, Duration::from_millis(1000), t0);

    // Quarter time: eased progress 4 * 0.25^3 = 0.0625, linear would be 0.25
    assert!(!camera.tick(t0 + Duration::from_millis(250)));
    let pose = camera.pose();
    assert!(close(pose.position, Vec3::splat(10.0 * (1.0 - 0.0625))));
    assert!(close(pose.target, Vec3::X * 0.0625));

    // The in-out curve is symmetric, so halfway is the midpoint
    assert!(!camera.tick(t0 + Duration::from_millis(500)));
    assert!(close(camera.pose().position, Vec3::splat(5.0)));

    assert!(camera.tick(t0 + Duration::from_millis(1000)));
    assert_eq!(camera.pose(), to);
    assert!(!camera.is_transitioning());
}

#[test]
fn selecting_same_body_twice_starts_one_flight() {
    let t0 = Instant::now();
    let mut engine = start(Options::default(), five_bodies(), t0);
    let mut scene = HeadlessScene::new(VIEWPORT);
    engine.tick(t0, &mut scene);

    engine.select_body(BodyId(3), t0);
    engine.tick(t0 + Duration::from_millis(600), &mut scene);

    // A restarted flight would still be underway at the original deadline
    engine.select_body(BodyId(3), t0 + Duration::from_millis(600));
    engine.tick(t0 + Duration::from_millis(1500), &mut scene);
    assert!(!engine.is_transitioning());
    assert_eq!(engine.selection_state(), SelectionState::Focused(BodyId(3)));
}

#[test]
fn deselect_with_nothing_selected_is_noop() {
    let t0 = Instant::now();
    let mut engine = start(Options::default(), five_bodies(), t0);
    let mut scene = HeadlessScene::new(VIEWPORT);
    engine.tick(t0, &mut scene);
    let before = engine.camera_pose();

    engine.execute(NavCommand::DeselectBody, t0);
    assert!(!engine.is_transitioning());
    assert_eq!(engine.selection_state(), SelectionState::Idle);
    engine.tick(t0 + Duration::from_secs(1), &mut scene);
    assert_eq!(engine.camera_pose(), before);
}

#[test]
fn full_select_deselect_round_trip() {
    let t0 = Instant::now();
    let options = Options::default();
    let overview = CameraPose::new(
        Vec3::from(options.camera.overview_position),
        Vec3::from(options.camera.overview_target),
    );
    let mut engine = start(options, five_bodies(), t0);
    let mut scene = HeadlessScene::new(VIEWPORT);

    engine.select_body(BodyId(2), t0);
    let mut now = t0;
    while now < t0 + Duration::from_millis(1600) {
        engine.tick(now, &mut scene);
        now += FRAME;
    }
    assert_eq!(engine.detail_panel_body(), Some(BodyId(2)));

    engine.deselect_body(now);
    assert_eq!(engine.detail_panel_body(), None);
    assert_eq!(engine.selected_body_id(), None);
    let back = now + Duration::from_millis(1500);
    engine.tick(back, &mut scene);
    assert_eq!(engine.selection_state(), SelectionState::Idle);
    assert!(close(engine.camera_pose().position, overview.position));
}

#[test]
fn hover_enter_plays_once_while_pointer_rests() {
    let t0 = Instant::now();
    let options = still_options();
    let hover_scale = options.hover.hover_scale;
    let mut engine = start(options, parked_body(), t0);
    let mut scene = HeadlessScene::new(VIEWPORT);

    // Pointer jitters over the body for the whole tween duration
    for ms in (0..=300).step_by(20) {
        let now = t0 + Duration::from_millis(ms);
        let x = if ms % 40 == 0 { 640.0 } else { 641.0 };
        move_to(&mut engine, &scene, x, now);
        engine.tick(now, &mut scene);
    }
    assert_eq!(engine.hovered_body_id(), Some(BodyId(1)));
    let affordance = engine.affordance(BodyId(1));
    assert!((affordance.scale - hover_scale).abs() < 1e-6);
    assert!((affordance.label_opacity - 1.0).abs() < 1e-6);
    assert_eq!(scene.last_bodies()[0].scale, affordance.scale);

    // Leaving plays the exit tween back to rest
    let leave = t0 + Duration::from_millis(400);
    engine.handle_input(InputEvent::PointerLeft, &scene, leave);
    engine.tick(leave, &mut scene);
    engine.tick(leave + Duration::from_millis(300), &mut scene);
    assert_eq!(engine.hovered_body_id(), None);
    assert!((engine.affordance(BodyId(1)).scale - 1.0).abs() < 1e-6);
}

#[test]
fn hovered_label_floats_above_body() {
    let t0 = Instant::now();
    let mut engine = start(still_options(), parked_body(), t0);
    let mut scene = HeadlessScene::new(VIEWPORT);
    move_to(&mut engine, &scene, 640.0, t0);
    engine.tick(t0, &mut scene);

    let labels = engine.labels();
    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].body_id, BodyId(1));
    let body_px = scene
        .project_to_screen(Vec3::ZERO, engine.camera(), VIEWPORT)
        .unwrap();
    let label_px = labels[0].position.unwrap();
    assert!(label_px.y < body_px.y);
    assert_eq!(scene.last_labels(), labels);
}

#[test]
fn governor_drops_then_recovers_quality() {
    let t0 = Instant::now();
    let mut options = Options::default();
    options.performance.warmup_ms = 1000;
    options.performance.window_ms = 1000;
    options.performance.dwell_ms = 2000;
    let standard = options.performance.standard;
    let mut engine = start(options, five_bodies(), t0);
    let mut scene = HeadlessScene::new(VIEWPORT);

    // 20 fps for two seconds
    let mut now = t0;
    for _ in 0..40 {
        engine.tick(now, &mut scene);
        now += Duration::from_millis(50);
    }
    assert_eq!(engine.current_quality_tier(), QualityTier::Standard);
    assert_eq!(scene.current_params(), Some(&standard));

    // 100 fps for three seconds
    for _ in 0..300 {
        engine.tick(now, &mut scene);
        now += Duration::from_millis(10);
    }
    assert_eq!(engine.current_quality_tier(), QualityTier::Enhanced);
    let tiers: Vec<QualityTier> =
        scene.applied_tiers().iter().map(|(t, _)| *t).collect();
    assert_eq!(
        tiers,
        [QualityTier::Enhanced, QualityTier::Standard, QualityTier::Enhanced]
    );
}

#[test]
fn failing_renderer_does_not_halt_navigation() {
    let t0 = Instant::now();
    let mut engine = start(Options::default(), five_bodies(), t0);
    let mut scene = HeadlessScene::new(VIEWPORT);
    scene.set_fail_render(true);

    engine.select_body(BodyId(1), t0);
    engine.tick(t0, &mut scene);
    engine.tick(t0 + Duration::from_secs(2), &mut scene);
    assert_eq!(engine.detail_panel_body(), Some(BodyId(1)));
    assert_eq!(scene.frames_rendered(), 0);

    scene.set_fail_render(false);
    engine.tick(t0 + Duration::from_millis(2016), &mut scene);
    assert_eq!(scene.frames_rendered(), 1);
    assert_eq!(scene.last_bodies().len(), 5);
}

#[test]
fn unloaded_body_cannot_be_selected_until_inserted() {
    let t0 = Instant::now();
    let mut engine = start(Options::default(), five_bodies(), t0);
    engine.select_body(BodyId(6), t0);
    assert_eq!(engine.selection_state(), SelectionState::Idle);

    assert!(engine.insert_body(CelestialBody::new(BodyId(6), 1.0, 30.0, 0.01)));
    engine.select_body(BodyId(6), t0);
    assert_eq!(
        engine.selection_state(),
        SelectionState::Transitioning { target: Some(BodyId(6)) }
    );
}

#[test]
fn resized_viewport_reaches_projection() {
    let t0 = Instant::now();
    let mut engine = start(Options::default(), five_bodies(), t0);
    let mut scene = HeadlessScene::new(VIEWPORT);
    engine.tick(t0, &mut scene);
    assert!((engine.camera().aspect - 1280.0 / 720.0).abs() < 1e-6);

    scene.set_viewport(Viewport::new(600, 600));
    engine.tick(t0 + FRAME, &mut scene);
    assert_eq!(engine.viewport(), Viewport::new(600, 600));
    assert!((engine.camera().aspect - 1.0).abs() < 1e-6);
}
