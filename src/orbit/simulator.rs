use std::f64::consts::TAU;

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::body::{BodyCatalog, BodyId, CelestialBody};
use crate::options::MotionOptions;

/// Golden angle in radians; spreads per-body bob phases evenly.
const BOB_PHASE_STEP: f64 = 2.399_963_229_728_653;

/// Per-frame placement of one body. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTransform {
    /// World-space center.
    pub position: Vec3,
    /// Spin angle about the body's own axis, in [0, 2π).
    pub spin: f32,
}

/// Orbit angle of `body` at `t` seconds, wrapped to [0, 2π).
///
/// Computed in f64 so long sessions keep full precision before wrapping.
pub fn orbit_angle(body: &CelestialBody, t: f64) -> f64 {
    let speed = f64::from(body.orbit_angular_speed);
    (f64::from(body.initial_phase_angle) + t * speed).rem_euclid(TAU)
}

/// Spin angle of `body` at `t` seconds, wrapped to [0, 2π).
pub fn spin_angle(body: &CelestialBody, t: f64) -> f64 {
    (t * f64::from(body.spin_angular_speed)).rem_euclid(TAU)
}

/// Pure mapping from elapsed time to body transforms.
///
/// The result depends only on the catalog and `t`, never on call history,
/// so the simulator can be driven by a real clock or a test clock alike.
#[derive(Debug, Clone, Default)]
pub struct OrbitalMotionSimulator {
    motion: MotionOptions,
}

impl OrbitalMotionSimulator {
    /// Create a simulator with the given cosmetic motion options.
    pub fn new(motion: MotionOptions) -> Self {
        Self { motion }
    }

    /// Replace the motion options.
    pub fn set_options(&mut self, motion: MotionOptions) {
        self.motion = motion;
    }

    /// Transform of a single body at `t` seconds.
    ///
    /// Non-finite or negative `t` is treated as 0.
    pub fn transform(&self, body: &CelestialBody, t: f64) -> BodyTransform {
        let t = if t.is_finite() { t.max(0.0) } else { 0.0 };
        let angle = orbit_angle(body, t);
        let r = f64::from(body.orbit_radius);
        BodyTransform {
            position: Vec3::new(
                (angle.cos() * r) as f32,
                self.bob(body.id, t) as f32,
                (angle.sin() * r) as f32,
            ),
            spin: spin_angle(body, t) as f32,
        }
    }

    /// Vertical bob, zero at t = 0 and desynchronized per body id.
    fn bob(&self, id: BodyId, t: f64) -> f64 {
        let amplitude = f64::from(self.motion.bob_amplitude);
        if amplitude == 0.0 || !amplitude.is_finite() {
            return 0.0;
        }
        let phase = (f64::from(id.0) * BOB_PHASE_STEP).rem_euclid(TAU);
        let w = f64::from(self.motion.bob_frequency);
        // Wrap the argument before sin() for the same precision reason as
        // the orbit angle.
        let arg = (w * t + phase).rem_euclid(TAU);
        amplitude * (arg.sin() - phase.sin())
    }

    /// Transforms of every catalog body at `t`, written into `out`.
    ///
    /// `out` is cleared first so removed bodies never linger.
    pub fn simulate_into(
        &self,
        catalog: &BodyCatalog,
        t: f64,
        out: &mut FxHashMap<BodyId, BodyTransform>,
    ) {
        out.clear();
        out.extend(catalog.iter().map(|b| (b.id, self.transform(b, t))));
    }

    /// Transforms of every catalog body at `t`, in catalog order.
    pub fn simulate(
        &self,
        catalog: &BodyCatalog,
        t: f64,
    ) -> Vec<(BodyId, BodyTransform)> {
        catalog.iter().map(|b| (b.id, self.transform(b, t))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RADII: [f32; 5] = [8.0, 12.0, 16.0, 14.0, 20.0];
    const SPEEDS: [f32; 5] = [0.1, 0.05, 0.08, 0.02, 0.09];

    fn scenario_catalog() -> BodyCatalog {
        BodyCatalog::from_bodies((0..5).map(|i| {
            CelestialBody::new(BodyId(i as u32 + 1), 1.0, RADII[i], SPEEDS[i])
                .with_phase(i as f32 * 1.3)
                .with_spin(0.5)
        }))
    }

    fn flat() -> OrbitalMotionSimulator {
        OrbitalMotionSimulator::new(MotionOptions {
            bob_amplitude: 0.0,
            ..MotionOptions::default()
        })
    }

    fn angle_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn positions_at_t0_lie_on_phase() {
        let sim = OrbitalMotionSimulator::default();
        let catalog = scenario_catalog();
        for body in catalog.iter() {
            let tf = sim.transform(body, 0.0);
            let phase = body.initial_phase_angle;
            let expected = Vec3::new(
                phase.cos() * body.orbit_radius,
                0.0,
                phase.sin() * body.orbit_radius,
            );
            assert!((tf.position - expected).length() < 1e-4, "{}", body.id);
        }
    }

    #[test]
    fn body_one_advances_one_radian_in_ten_seconds() {
        let catalog = scenario_catalog();
        let body = catalog.get(BodyId(1)).unwrap();
        let expected =
            (f64::from(body.initial_phase_angle) + 1.0).rem_euclid(TAU);
        assert!(angle_diff(orbit_angle(body, 10.0), expected) < 1e-6);
    }

    #[test]
    fn angle_delta_matches_speed_regardless_of_call_order() {
        let catalog = scenario_catalog();
        let sim = flat();
        let body = catalog.get(BodyId(3)).unwrap();

        let later = sim.transform(body, 42.0);
        let earlier = sim.transform(body, 7.5);
        let later_again = sim.transform(body, 42.0);
        assert_eq!(later, later_again);

        let angle = |p: Vec3| f64::from(p.z).atan2(f64::from(p.x));
        let a2 = angle(later.position);
        let a1 = angle(earlier.position);
        let expected =
            (34.5 * f64::from(body.orbit_angular_speed)).rem_euclid(TAU);
        assert!(angle_diff(a2 - a1, expected) < 1e-4);
    }

    #[test]
    fn spin_is_wrapped_for_long_sessions() {
        let sim = OrbitalMotionSimulator::default();
        let catalog = scenario_catalog();
        let body = catalog.get(BodyId(2)).unwrap();
        // ~1 year of runtime
        let tf = sim.transform(body, 3.15e7);
        assert!(tf.spin >= 0.0 && tf.spin < std::f32::consts::TAU);
        assert!(tf.position.is_finite());
    }

    #[test]
    fn bob_is_bounded_and_desynchronized() {
        let sim = OrbitalMotionSimulator::default();
        let catalog = scenario_catalog();
        let t = 2.0;
        let heights: Vec<f32> = catalog
            .iter()
            .map(|b| sim.transform(b, t).position.y)
            .collect();
        let amp = MotionOptions::default().bob_amplitude;
        assert!(heights.iter().all(|h| h.abs() <= 2.0 * amp + 1e-6));
        assert!(heights.windows(2).any(|w| (w[0] - w[1]).abs() > 1e-4));
    }

    #[test]
    fn non_finite_time_is_treated_as_zero() {
        let sim = OrbitalMotionSimulator::default();
        let catalog = scenario_catalog();
        let body = catalog.get(BodyId(4)).unwrap();
        assert_eq!(sim.transform(body, f64::NAN), sim.transform(body, 0.0));
    }

    #[test]
    fn simulate_into_drops_removed_bodies() {
        let sim = flat();
        let mut catalog = scenario_catalog();
        let mut out = FxHashMap::default();
        sim.simulate_into(&catalog, 1.0, &mut out);
        assert_eq!(out.len(), 5);

        let _ = catalog.remove(BodyId(2));
        sim.simulate_into(&catalog, 1.0, &mut out);
        assert_eq!(out.len(), 4);
        assert!(!out.contains_key(&BodyId(2)));
        assert_eq!(sim.simulate(&catalog, 1.0).len(), 4);
    }
}
