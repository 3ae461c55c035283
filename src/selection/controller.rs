use web_time::{Duration, Instant};

use crate::camera::{CameraPose, CameraTransitionController};
use crate::orbit::BodyId;

/// Where the selection state machine is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Overview, nothing selected.
    #[default]
    Idle,
    /// Camera in flight; `target` is the body being approached, or `None`
    /// when returning to the overview.
    Transitioning {
        /// Destination body, if any.
        target: Option<BodyId>,
    },
    /// Camera settled on a body.
    Focused(BodyId),
}

/// Drives camera flights on select/deselect and tracks arrival.
///
/// The detail panel is shown only once the camera has arrived
/// (`Focused`) and hidden as soon as the focus is left.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Selected body: the one focused or being flown to.
    pub fn selected(&self) -> Option<BodyId> {
        match self.state {
            SelectionState::Idle
            | SelectionState::Transitioning { target: None } => None,
            SelectionState::Transitioning { target: Some(id) }
            | SelectionState::Focused(id) => Some(id),
        }
    }

    /// Whether a select/deselect flight is underway.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, SelectionState::Transitioning { .. })
    }

    /// Body whose detail panel should be visible.
    pub fn detail_panel(&self) -> Option<BodyId> {
        match self.state {
            SelectionState::Focused(id) => Some(id),
            _ => None,
        }
    }

    /// Fly to `focus_pose` for body `id`.
    ///
    /// Selecting the already-selected body is a no-op, as is a non-finite
    /// pose. Returns whether a flight started.
    pub fn select(
        &mut self,
        id: BodyId,
        focus_pose: CameraPose,
        camera: &mut CameraTransitionController,
        duration: Duration,
        now: Instant,
    ) -> bool {
        if self.selected() == Some(id) {
            return false;
        }
        if !focus_pose.is_finite() {
            log::warn!("no finite focus pose for {id}, ignoring selection");
            return false;
        }
        camera.begin_transition(focus_pose, duration, now);
        log::debug!("selection {:?} -> transitioning to {id}", self.state);
        self.state = SelectionState::Transitioning { target: Some(id) };
        true
    }

    /// Fly back to `overview`.
    ///
    /// A no-op when nothing is selected. Returns whether a flight started.
    /// With a non-finite `overview` the selection is still cleared, but the
    /// camera stops where it is and the state drops straight to `Idle`.
    pub fn deselect(
        &mut self,
        overview: CameraPose,
        camera: &mut CameraTransitionController,
        duration: Duration,
        now: Instant,
    ) -> bool {
        if self.selected().is_none() {
            return false;
        }
        if !overview.is_finite() {
            log::warn!("no finite overview pose, deselecting in place");
            camera.cancel();
            self.state = SelectionState::Idle;
            return false;
        }
        camera.begin_transition(overview, duration, now);
        log::debug!("selection {:?} -> transitioning to overview", self.state);
        self.state = SelectionState::Transitioning { target: None };
        true
    }

    /// Notify that the camera flight finished this frame.
    pub fn on_camera_arrived(&mut self) {
        if let SelectionState::Transitioning { target } = self.state {
            self.state = match target {
                Some(id) => {
                    log::info!("focused {id}");
                    SelectionState::Focused(id)
                }
                None => SelectionState::Idle,
            };
        }
    }

    /// The selected body was disposed; fall back to the overview.
    pub fn forget(
        &mut self,
        id: BodyId,
        overview: CameraPose,
        camera: &mut CameraTransitionController,
        duration: Duration,
        now: Instant,
    ) {
        if self.selected() == Some(id) {
            let _ = self.deselect(overview, camera, duration, now);
        }
    }
}
