//! Pointer input for [`NavigationEngine`].

use web_time::Instant;

use super::NavigationEngine;
use crate::input::{ClickResult, InputEvent, PointerKind};
use crate::scene::SceneAdapter;

impl NavigationEngine {
    /// Process a platform-agnostic pointer event.
    ///
    /// Moves only record the pointer; the hover hit-test runs on the next
    /// [`tick`](Self::tick). A click (press and release without dragging)
    /// is resolved immediately against the last rendered frame: a body
    /// under the pointer is selected, empty space deselects.
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y }, &scene, now);
    /// let press = InputEvent::PointerButton { pressed: true };
    /// engine.handle_input(press, &scene, now);
    /// ```
    pub fn handle_input<S: SceneAdapter + ?Sized>(
        &mut self,
        event: InputEvent,
        scene: &S,
        now: Instant,
    ) {
        match event {
            InputEvent::CursorMoved { x, y } => self.pointer.handle_move(x, y),
            InputEvent::PointerLeft => self.pointer.handle_leave(),
            InputEvent::PointerButton { pressed: true } => {
                self.pointer.handle_press();
            }
            InputEvent::PointerButton { pressed: false } => {
                if let ClickResult::Click { position } =
                    self.pointer.handle_release()
                {
                    self.dispatch_click(position, scene, now);
                }
            }
        }
    }

    /// Switch hover handling for a different device class.
    pub fn set_pointer_kind(&mut self, kind: PointerKind, now: Instant) {
        log::info!("pointer kind set to {kind:?}");
        self.hover.set_pointer_kind(kind, now);
    }

    fn dispatch_click<S: SceneAdapter + ?Sized>(
        &mut self,
        position: glam::Vec2,
        scene: &S,
        now: Instant,
    ) {
        let hit = self.viewport.pixel_to_ndc(position).and_then(|ndc| {
            scene.raycast_pick(ndc, &self.frame_camera, &self.pickables)
        });
        match hit {
            Some(id) => self.select_body(id, now),
            None => self.deselect_body(now),
        }
    }
}
