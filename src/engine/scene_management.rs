//! Adding and disposing bodies at runtime.

use web_time::Instant;

use super::{overview_pose, NavigationEngine};
use crate::orbit::{BodyCatalog, BodyId, CelestialBody};

impl NavigationEngine {
    /// Add a body. Rejects duplicate ids and non-finite parameters;
    /// returns whether the body was added.
    pub fn insert_body(&mut self, body: CelestialBody) -> bool {
        let id = body.id;
        let added = self.catalog.insert(body);
        if added {
            log::debug!("{id} loaded");
        } else {
            log::warn!(
                "rejected body {id}: duplicate id or invalid parameters"
            );
        }
        added
    }

    /// Dispose body `id`.
    ///
    /// Its hover, label and transform go away at once; if it was selected
    /// the camera flies back to the overview. Returns the removed body.
    pub fn remove_body(
        &mut self,
        id: BodyId,
        now: Instant,
    ) -> Option<CelestialBody> {
        let body = self.catalog.remove(id)?;
        let _ = self.transforms.remove(&id);
        self.pickables.retain(|p| p.id != id);
        self.hover.forget(id);
        let duration = self.flight_duration();
        let overview = overview_pose(&self.options);
        self.selection
            .forget(id, overview, &mut self.camera, duration, now);
        log::debug!("{id} disposed");
        Some(body)
    }

    /// Replace the whole catalog. Every body-specific state is dropped and
    /// the camera returns to the overview if something was selected.
    pub fn replace_catalog(&mut self, catalog: BodyCatalog, now: Instant) {
        let ids: Vec<BodyId> = self.catalog.iter().map(|b| b.id).collect();
        for id in ids {
            let _ = self.remove_body(id, now);
        }
        self.catalog = catalog;
        log::info!("catalog replaced, {} bodies", self.catalog.len());
    }
}
