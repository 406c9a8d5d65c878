//! Camera system for the journey scene.
//!
//! Provides the orbital camera model: a spherical orbit state, the
//! look-at viewpoint derived from it, and a controller translating
//! drag/scroll gestures into orbit changes.

/// Orbit controller applying pointer gestures with clamping.
pub mod controller;
/// Core look-at camera struct read by the renderer.
pub mod core;
/// Spherical orbit state and conversions.
pub mod orbit;
