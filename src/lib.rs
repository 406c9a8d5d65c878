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

//! Interactive core of a 3D educational "journey map" quiz game.
//!
//! Trailhead models a path of quiz-level nodes laid along a smooth curve,
//! a character that travels between nodes, an orbital camera the user
//! drags and zooms, and a multiple-choice quiz flow that gates level
//! progression. Rendering, raycasting, and windowing are external: the
//! crate computes state every frame and an embedding renderer draws it.
//!
//! # Key entry points
//!
//! - [`engine::JourneyEngine`] - the per-frame interactive core
//! - [`engine::JourneyCommand`] - the engine's interactive vocabulary
//! - [`journey::JourneyContent`] - quiz/level content loaded from TOML or
//!   JSON
//! - [`options::Options`] - runtime configuration (camera, transitions)
//!
//! # Architecture
//!
//! Everything is single-threaded and frame-driven. Pointer events go
//! through an [`input::InputProcessor`] that turns them into commands;
//! the engine executes commands and advances animation state once per
//! frame from a wall-clock timestamp, so transition durations are
//! independent of frame rate. The camera the renderer reads is derived
//! state: it is recomputed from the spherical orbit model whenever that
//! model changes.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod journey;
pub mod options;

pub use engine::command::JourneyCommand;
pub use engine::JourneyEngine;
pub use error::TrailheadError;
