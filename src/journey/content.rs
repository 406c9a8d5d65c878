//! On-disk journey definitions.
//!
//! Journey content is a plain data table: levels in path order, each
//! carrying its quizzes. Documents are TOML (the preset format, stored
//! under `assets/journeys/`) or JSON (web-origin content); both
//! deserialize with defaults so partial documents work.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::level::LevelStatus;
use super::quiz::Quiz;
use crate::error::TrailheadError;

/// One level entry in a journey document.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub struct LevelContent {
    /// Stable level identifier; content lists levels in path order.
    pub id: u32,
    /// Initial progression status (locked unless stated otherwise).
    #[serde(default)]
    pub status: LevelStatus,
    /// Questions gating this level.
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

/// A complete journey document.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(default)]
pub struct JourneyContent {
    /// Levels in path order.
    pub levels: Vec<LevelContent>,
}

impl JourneyContent {
    /// Generate a JSON Schema describing journey documents, for
    /// authoring tools.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(JourneyContent)
    }

    /// Load a journey from a TOML or JSON file, chosen by extension.
    ///
    /// # Errors
    ///
    /// I/O failures, parse failures, or an unrecognized extension.
    pub fn load(path: &Path) -> Result<Self, TrailheadError> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            other => Err(TrailheadError::ContentLoad(format!(
                "unrecognized journey format {other:?} for {}",
                path.display()
            ))),
        }
    }

    /// Parse a TOML journey document.
    ///
    /// # Errors
    ///
    /// [`TrailheadError::ContentParse`] on malformed TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, TrailheadError> {
        toml::from_str(text)
            .map_err(|e| TrailheadError::ContentParse(e.to_string()))
    }

    /// Parse a JSON journey document.
    ///
    /// # Errors
    ///
    /// [`TrailheadError::ContentParse`] on malformed JSON.
    pub fn from_json_str(text: &str) -> Result<Self, TrailheadError> {
        serde_json::from_str(text)
            .map_err(|e| TrailheadError::ContentParse(e.to_string()))
    }

    /// Save as pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Serialization or I/O failures.
    pub fn save(&self, path: &Path) -> Result<(), TrailheadError> {
        let text = toml::to_string_pretty(self)
            .map_err(|e| TrailheadError::ContentParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Author-facing content checks, returned as human-readable
    /// warnings.
    ///
    /// The engine never enforces these; tooling (the CLI, an editor)
    /// surfaces them. Checks: every quiz has exactly one correct
    /// option, no level is empty, and at least one level starts
    /// unlocked.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for level in &self.levels {
            if level.quizzes.is_empty() {
                warnings
                    .push(format!("level {} has no quizzes", level.id));
            }
            for quiz in &level.quizzes {
                if let Err(msg) = quiz.validate() {
                    warnings.push(format!("level {}: {msg}", level.id));
                }
            }
        }
        if !self.levels.is_empty()
            && !self
                .levels
                .iter()
                .any(|l| l.status != LevelStatus::Locked)
        {
            warnings.push("no level starts unlocked".into());
        }
        warnings
    }
}
