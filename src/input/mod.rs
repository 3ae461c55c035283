//! Input handling: platform-agnostic pointer events, the device class, and
//! the press/drag/release state machine.

/// Platform-agnostic input events.
pub mod event;
/// Pointer position and click classification.
pub mod pointer;

pub use event::{InputEvent, PointerKind};
pub use pointer::{ClickResult, PointerState};
