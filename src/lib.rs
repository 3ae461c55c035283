// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Real-time navigation core for interfaces that fly a camera between
//! orbiting bodies.
//!
//! Orrery owns the per-frame state of such a view (orbital motion, camera
//! flights, hover affordances, label placement, adaptive quality and
//! selection) and drives any renderer through a narrow adapter trait.
//!
//! # Key entry points
//!
//! - [`engine::NavigationEngine`] - the per-view context object, ticked
//!   once per frame
//! - [`scene::SceneAdapter`] - what a renderer implements to be driven
//! - [`orbit::BodyCatalog`] - the loaded bodies and their orbits
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! Every component is an explicit value owned by the engine; nothing is
//! global. Time enters only through the `now` passed to each call, so a
//! session can be replayed deterministically in tests. Rendering, picking
//! and projection go through [`scene::SceneAdapter`]; a GPU-less
//! [`scene::HeadlessScene`] ships with the crate.
//!
//! ```ignore
//! let now = Instant::now();
//! let mut engine = NavigationEngine::new(options, catalog, viewport, now);
//! loop {
//!     engine.tick(Instant::now(), &mut scene);
//! }
//! ```

pub mod camera;
pub mod engine;
pub mod error;
pub mod hover;
pub mod input;
pub mod labels;
pub mod options;
pub mod orbit;
pub mod performance;
pub mod scene;
pub mod selection;
pub mod util;
