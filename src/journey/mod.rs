//! The journey domain: the path curve, the level table built along it,
//! and the quiz content that gates progression.

/// On-disk journey content (TOML/JSON documents).
pub mod content;
/// Level nodes and the journey table.
pub mod level;
/// Catmull-Rom path curve with arc-length sampling.
pub mod path;
/// Quiz data model and the per-level quiz session.
pub mod quiz;

pub use content::{JourneyContent, LevelContent};
pub use level::{Journey, LevelNode, LevelStatus};
pub use path::{zigzag_waypoints, PathCurve};
pub use quiz::{AnswerOutcome, Quiz, QuizOption, QuizSession, SessionPhase};
