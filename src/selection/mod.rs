//! Select/deselect state machine coordinating camera flights and the
//! detail panel.

mod controller;

pub use controller::{SelectionController, SelectionState};
