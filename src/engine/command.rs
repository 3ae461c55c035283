//! The engine's programmatic vocabulary.
//!
//! Every host-initiated operation (a "details" button, keyboard focus
//! cycling, a window resize) is represented as a `NavCommand`. Hosts
//! construct commands and pass them to
//! [`NavigationEngine::execute`](super::NavigationEngine::execute).

use web_time::Instant;

use super::NavigationEngine;
use crate::input::PointerKind;
use crate::orbit::BodyId;

/// A host-initiated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    // ── Selection ───────────────────────────────────────────────────
    /// Select a body and fly to it. Unknown ids are ignored.
    SelectBody(BodyId),

    /// Clear the selection and fly back to the overview.
    DeselectBody,

    /// Select the next body in catalog order, wrapping around.
    FocusNext,

    /// Select the previous body in catalog order, wrapping around.
    FocusPrevious,

    // ── Surface ─────────────────────────────────────────────────────
    /// The host detected a different pointer device class.
    SetPointerKind(PointerKind),

    /// The drawable surface changed size (physical pixels).
    Resize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
}

impl NavigationEngine {
    /// Execute a command at time `now`.
    pub fn execute(&mut self, command: NavCommand, now: Instant) {
        log::debug!("execute {command:?}");
        match command {
            NavCommand::SelectBody(id) => self.select_body(id, now),
            NavCommand::DeselectBody => self.deselect_body(now),
            NavCommand::FocusNext => self.cycle_focus(true, now),
            NavCommand::FocusPrevious => self.cycle_focus(false, now),
            NavCommand::SetPointerKind(kind) => {
                self.set_pointer_kind(kind, now);
            }
            NavCommand::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Move the selection one step through the catalog. With nothing
    /// selected, forward starts at the first body and backward at the last.
    fn cycle_focus(&mut self, forward: bool, now: Instant) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let current = self
            .selection
            .selected()
            .and_then(|id| self.catalog.position_of(id));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        if let Some(id) = self.catalog.at(next).map(|b| b.id) {
            self.select_body(id, now);
        }
    }
}
