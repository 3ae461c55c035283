//! Screen-space labels that float above relevant bodies.
//!
//! The projector never touches presentation primitives; it emits
//! [`LabelPosition`] records that a UI binding layer applies.

mod projector;

pub use projector::{LabelOverlay, LabelPosition, ScreenSpaceLabelProjector};
