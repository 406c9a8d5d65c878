//! Crate-level error types.

use std::fmt;

/// Errors produced by the trailhead crate.
///
/// Invalid *requests* (selecting a locked level, re-requesting an active
/// transition, oversized input deltas) are deliberately not errors; they
/// are silent no-ops at the call site.
#[derive(Debug)]
pub enum TrailheadError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Journey content parsing failure (TOML or JSON).
    ContentParse(String),
    /// Journey content is structurally unusable (empty, unknown format).
    ContentLoad(String),
    /// Options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for TrailheadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ContentParse(msg) => {
                write!(f, "content parse error: {msg}")
            }
            Self::ContentLoad(msg) => {
                write!(f, "content load error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for TrailheadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrailheadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
