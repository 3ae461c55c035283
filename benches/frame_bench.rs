//! Frame-loop benchmarks: easing, orbital simulation and a full engine tick.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use orrery::camera::Viewport;
use orrery::engine::NavigationEngine;
use orrery::input::InputEvent;
use orrery::options::{MotionOptions, Options};
use orrery::orbit::{BodyCatalog, BodyId, CelestialBody, OrbitalMotionSimulator};
use orrery::scene::HeadlessScene;
use orrery::util::easing::EasingFunction;
use rustc_hash::FxHashMap;
use web_time::{Duration, Instant};

fn catalog(count: u32) -> BodyCatalog {
    BodyCatalog::from_bodies((1..=count).map(|i| {
        CelestialBody::new(BodyId(i), 1.0, 4.0 + i as f32, 0.01 * i as f32)
            .with_phase(i as f32)
            .with_spin(0.3)
    }))
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicInOut;
    let _ = c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))));
    });
}

fn simulate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_into");
    for count in [5_u32, 50, 500] {
        let catalog = catalog(count);
        let sim = OrbitalMotionSimulator::new(MotionOptions::default());
        let mut out = FxHashMap::default();
        let _ = group.bench_function(format!("{count}_bodies"), |b| {
            b.iter(|| sim.simulate_into(&catalog, black_box(123.4), &mut out));
        });
    }
    group.finish();
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_tick");
    for count in [5_u32, 50] {
        let viewport = Viewport::new(1280, 720);
        let start = Instant::now();
        let mut engine = NavigationEngine::new(
            Options::default(),
            catalog(count),
            viewport,
            start,
        );
        let mut scene = HeadlessScene::new(viewport);
        engine.handle_input(
            InputEvent::CursorMoved { x: 640.0, y: 360.0 },
            &scene,
            start,
        );
        let mut now = start;
        let _ = group.bench_function(format!("{count}_bodies"), |b| {
            b.iter(|| {
                now += Duration::from_micros(16_667);
                engine.tick(now, &mut scene);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, easing_benchmark, simulate_benchmark, tick_benchmark);
criterion_main!(benches);
