//! Orbiting bodies and their motion over time.

/// Body records, ids and the loaded-body catalog.
pub mod body;
/// Pure elapsed-time → transform simulation.
pub mod simulator;

pub use body::{BodyCatalog, BodyId, CelestialBody, VisualParams};
pub use simulator::{BodyTransform, OrbitalMotionSimulator};
