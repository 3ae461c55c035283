//! Headless demo: drives a [`NavigationEngine`] at a synthetic 60 Hz over
//! a five-body system (or a TOML catalog given as the first argument),
//! scripting a hover, a selection and a deselection, and logs the state.
//!
//! Run with `RUST_LOG=debug` to see every state-machine transition.

use std::path::Path;

use orrery::camera::Viewport;
use orrery::engine::{NavCommand, NavigationEngine};
use orrery::error::OrreryError;
use orrery::input::InputEvent;
use orrery::options::Options;
use orrery::orbit::{
    BodyCatalog, BodyId, CelestialBody, OrbitalMotionSimulator,
};
use orrery::scene::{HeadlessScene, SceneAdapter};
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_micros(16_667);
const FRAMES: u32 = 60 * 12;

fn default_catalog() -> BodyCatalog {
    let radii = [8.0, 12.0, 16.0, 14.0, 20.0];
    let speeds = [0.1, 0.05, 0.08, 0.02, 0.09];
    let phases = [0.0, 1.2, 2.5, 4.0, 5.3];
    BodyCatalog::from_bodies((0..5).map(|i| {
        let id = BodyId(i as u32 + 1);
        let display_radius = 1.0 + i as f32 * 0.25;
        CelestialBody::new(id, display_radius, radii[i], speeds[i])
            .with_phase(phases[i])
            .with_spin(0.5)
    }))
}

fn load_catalog() -> Result<BodyCatalog, OrreryError> {
    match std::env::args().nth(1) {
        Some(path) => BodyCatalog::load(Path::new(&path)),
        None => Ok(default_catalog()),
    }
}

fn main() {
    env_logger::init();

    let catalog = match load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("failed to load catalog: {e}");
            std::process::exit(1);
        }
    };
    let Some(first) = catalog.at(0).map(|b| b.id) else {
        log::error!("catalog is empty");
        std::process::exit(1);
    };

    let viewport = Viewport::new(1280, 720);
    let mut scene = HeadlessScene::new(viewport);
    let start = Instant::now();
    let mut engine =
        NavigationEngine::new(Options::default(), catalog, viewport, start);
    log::info!(
        "simulating {} bodies for {FRAMES} frames",
        engine.catalog().len()
    );

    for frame in 0..FRAMES {
        let now = start + FRAME * frame;
        match frame {
            // Park the pointer at the screen center
            60 => {
                let size = scene.viewport_size();
                engine.handle_input(
                    InputEvent::CursorMoved {
                        x: size.width as f32 / 2.0,
                        y: size.height as f32 / 2.0,
                    },
                    &scene,
                    now,
                );
            }
            120 => engine.execute(NavCommand::SelectBody(first), now),
            300 => engine.execute(NavCommand::FocusNext, now),
            480 => engine.execute(NavCommand::DeselectBody, now),
            600 => engine.handle_input(InputEvent::PointerLeft, &scene, now),
            _ => {}
        }
        engine.tick(now, &mut scene);

        if frame % 60 == 0 {
            let pose = engine.camera_pose();
            log::info!(
                "t={:>5.2}s camera=({:.1}, {:.1}, {:.1}) selected={:?} \
                 panel={:?} hovered={:?} labels={}",
                engine.elapsed_seconds(),
                pose.position.x,
                pose.position.y,
                pose.position.z,
                engine.selected_body_id(),
                engine.detail_panel_body(),
                engine.hovered_body_id(),
                engine.labels().len(),
            );
        }
    }

    let simulator =
        OrbitalMotionSimulator::new(engine.options().motion.clone());
    let transforms =
        simulator.simulate(engine.catalog(), engine.elapsed_seconds());
    for (id, tf) in transforms {
        log::info!(
            "{id} at ({:.2}, {:.2}, {:.2}) spin {:.2}",
            tf.position.x,
            tf.position.y,
            tf.position.z,
            tf.spin
        );
    }

    let summary = engine.performance_summary();
    log::info!(
        "done: {} frames rendered, {:.1} fps, tier {}",
        scene.frames_rendered(),
        summary.fps,
        summary.tier.name()
    );
}
