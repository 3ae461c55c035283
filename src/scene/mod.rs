//! The boundary to the rendering layer: the [`SceneAdapter`] trait, the
//! per-frame [`FrameView`] handed to it, and the math its default methods
//! use.

mod adapter;
/// A GPU-less adapter for tests and headless runs.
pub mod headless;
/// Projection and ray-picking math.
pub mod math;

pub use adapter::{FrameView, RenderedBody, SceneAdapter};
pub use headless::HeadlessScene;
pub use math::{Pickable, Ray};
