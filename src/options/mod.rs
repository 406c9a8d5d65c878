//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera projection, orbit clamps and
//! sensitivities, transition timing, idle bob) are consolidated here.
//! Options serialize to/from TOML for presets, and a JSON Schema export
//! describes the UI-exposed fields for overlay tooling.

mod camera;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::TrailheadError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[transition]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and orbit control parameters.
    pub camera: CameraOptions,
    /// Level transition and idle animation parameters.
    pub transition: TransitionOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// I/O or TOML parse failures.
    pub fn load(path: &Path) -> Result<Self, TrailheadError> {
        let content =
            std::fs::read_to_string(path).map_err(TrailheadError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TrailheadError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization or I/O failures.
    pub fn save(&self, path: &Path) -> Result<(), TrailheadError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrailheadError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TrailheadError::Io)?;
        }
        std::fs::write(path, content).map_err(TrailheadError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[transition]
duration_ms = 500
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.transition.duration_ms, 500);
        // Everything else should be default
        assert_eq!(opts.transition.rest_height, 0.8);
        assert_eq!(opts.camera.max_radius, 50.0);
    }

    #[test]
    fn clamp_ranges_are_ordered_by_default() {
        let opts = Options::default();
        assert!(opts.camera.min_radius < opts.camera.max_radius);
        assert!(opts.camera.min_elevation < opts.camera.max_elevation);
        assert!(
            opts.camera.initial_radius >= opts.camera.min_radius
                && opts.camera.initial_radius <= opts.camera.max_radius
        );
    }
}
