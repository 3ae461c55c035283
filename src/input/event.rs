use serde::{Deserialize, Serialize};

/// Platform-agnostic pointer events, in physical pixels.
///
/// These are fed into
/// [`NavigationEngine::handle_input`].
///
/// [`NavigationEngine::handle_input`]:
///     crate::engine::NavigationEngine::handle_input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Primary button (or touch contact) pressed or released.
    PointerButton {
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Pointer left the surface.
    PointerLeft,
}

/// Device class of the pointer, supplied by the host.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerKind {
    /// A persistent pointer (mouse, trackpad, pen with hover).
    #[default]
    Mouse,
    /// A touch screen; there is no pointer between taps.
    Touch,
}

impl PointerKind {
    /// Whether hover affordances make sense for this device.
    pub fn supports_hover(self) -> bool {
        matches!(self, Self::Mouse)
    }
}
