use std::fmt;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::OrreryError;

/// Stable, unique identifier of a body.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

/// Appearance hints forwarded untouched to the scene adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualParams {
    /// Base color (linear RGB).
    pub color: [f32; 3],
    /// Emissive intensity (stars glow, planets don't).
    pub emissive: f32,
    /// Whether the body is drawn with a ring.
    pub ring: bool,
}

impl Default for VisualParams {
    fn default() -> Self {
        Self {
            color: [0.8, 0.8, 0.8],
            emissive: 0.0,
            ring: false,
        }
    }
}

/// An orbiting body. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Stable identifier.
    pub id: BodyId,
    /// Radius of the rendered sphere.
    pub display_radius: f32,
    /// Radius of the circular orbit around the origin.
    pub orbit_radius: f32,
    /// Orbit angular speed in radians per second.
    pub orbit_angular_speed: f32,
    /// Spin angular speed in radians per second.
    #[serde(default)]
    pub spin_angular_speed: f32,
    /// Orbit angle at t = 0, in radians.
    #[serde(default)]
    pub initial_phase_angle: f32,
    /// Appearance hints.
    #[serde(default)]
    pub visual: VisualParams,
}

impl CelestialBody {
    /// Body with the given orbit and default spin/visuals.
    pub fn new(
        id: BodyId,
        display_radius: f32,
        orbit_radius: f32,
        orbit_angular_speed: f32,
    ) -> Self {
        Self {
            id,
            display_radius,
            orbit_radius,
            orbit_angular_speed,
            spin_angular_speed: 0.0,
            initial_phase_angle: 0.0,
            visual: VisualParams::default(),
        }
    }

    /// Builder: set the initial phase angle.
    #[must_use]
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.initial_phase_angle = phase;
        self
    }

    /// Builder: set the spin angular speed.
    #[must_use]
    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin_angular_speed = spin;
        self
    }

    /// Whether every numeric field is finite and the radii non-negative.
    pub fn is_valid(&self) -> bool {
        [
            self.display_radius,
            self.orbit_radius,
            self.orbit_angular_speed,
            self.spin_angular_speed,
            self.initial_phase_angle,
        ]
        .iter()
        .all(|v| v.is_finite())
            && self.display_radius >= 0.0
            && self.orbit_radius >= 0.0
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    bodies: Vec<CelestialBody>,
}

/// The bodies whose assets have finished loading, in insertion order.
///
/// Only bodies present here are simulated, pickable and selectable.
#[derive(Debug, Clone, Default)]
pub struct BodyCatalog {
    bodies: Vec<CelestialBody>,
    index: FxHashMap<BodyId, usize>,
}

impl BodyCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from bodies, skipping invalid ones and duplicates.
    pub fn from_bodies(
        bodies: impl IntoIterator<Item = CelestialBody>,
    ) -> Self {
        let mut catalog = Self::new();
        for body in bodies {
            let _ = catalog.insert(body);
        }
        catalog
    }

    /// Parse a catalog from TOML (`[[bodies]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| OrreryError::CatalogParse(e.to_string()))?;
        Ok(Self::from_bodies(file.bodies))
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Add a loaded body. Returns `false` (and changes nothing) if the id is
    /// already present or the body has non-finite parameters.
    pub fn insert(&mut self, body: CelestialBody) -> bool {
        if self.index.contains_key(&body.id) {
            log::warn!("ignoring duplicate {}", body.id);
            return false;
        }
        if !body.is_valid() {
            log::warn!("ignoring {} with invalid parameters", body.id);
            return false;
        }
        let _ = self.index.insert(body.id, self.bodies.len());
        self.bodies.push(body);
        true
    }

    /// Remove a disposed body, returning it if it was present.
    pub fn remove(&mut self, id: BodyId) -> Option<CelestialBody> {
        let slot = self.index.remove(&id)?;
        let body = self.bodies.remove(slot);
        for idx in self.index.values_mut() {
            if *idx > slot {
                *idx -= 1;
            }
        }
        Some(body)
    }

    /// Look up a body by id.
    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.index.get(&id).map(|&i| &self.bodies[i])
    }

    /// Whether a body is loaded.
    pub fn contains(&self, id: BodyId) -> bool {
        self.index.contains_key(&id)
    }

    /// Position of `id` in insertion order.
    pub fn position_of(&self, id: BodyId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Body at insertion-order position `idx`.
    pub fn at(&self, idx: usize) -> Option<&CelestialBody> {
        self.bodies.get(idx)
    }

    /// All bodies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Number of loaded bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether no body is loaded.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
