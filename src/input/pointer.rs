use glam::Vec2;

/// Result of releasing the primary button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickResult {
    /// Dragged, or released without a matching press.
    NoAction,
    /// A click at the given pixel position.
    Click {
        /// Where the pointer was released.
        position: Vec2,
    },
}

/// Tracks the pointer position and the press/drag/release cycle.
#[derive(Debug, Clone)]
pub struct PointerState {
    position: Option<Vec2>,
    press_position: Option<Vec2>,
    is_dragging: bool,
    drag_threshold: f32,
}

impl PointerState {
    /// Create a pointer state with no known position.
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            position: None,
            press_position: None,
            is_dragging: false,
            drag_threshold: drag_threshold.max(0.0),
        }
    }

    /// Change the drag threshold in pixels.
    pub fn set_drag_threshold(&mut self, threshold: f32) {
        self.drag_threshold = threshold.max(0.0);
    }

    /// Last known pointer position in pixels, if the pointer is over the
    /// surface.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Whether the current press has turned into a drag.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Update the cursor position. Non-finite coordinates mean "no
    /// pointer".
    pub fn handle_move(&mut self, x: f32, y: f32) {
        let pos = Vec2::new(x, y);
        if !pos.is_finite() {
            self.position = None;
            return;
        }
        if let Some(press) = self.press_position {
            if press.distance(pos) > self.drag_threshold {
                self.is_dragging = true;
            }
        }
        self.position = Some(pos);
    }

    /// The pointer left the surface; any press in progress is abandoned.
    pub fn handle_leave(&mut self) {
        self.position = None;
        self.press_position = None;
        self.is_dragging = false;
    }

    /// Primary button pressed at the current position.
    pub fn handle_press(&mut self) {
        self.press_position = self.position;
        self.is_dragging = false;
    }

    /// Primary button released; classify the gesture.
    pub fn handle_release(&mut self) -> ClickResult {
        let press = self.press_position.take();
        let was_dragging = std::mem::take(&mut self.is_dragging);
        match (press, self.position) {
            (Some(_), Some(position)) if !was_dragging => {
                ClickResult::Click { position }
            }
            _ => ClickResult::NoAction,
        }
    }
}
