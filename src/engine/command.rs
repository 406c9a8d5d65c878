//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a pointer
//! gesture, an overlay button, or a programmatic call — is represented
//! as a `JourneyCommand`. Consumers construct commands and pass them to
//! [`JourneyEngine::execute`](super::JourneyEngine::execute); the
//! engine never cares *how* a command was triggered.

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JourneyCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the camera by `delta` pixels of secondary-button drag.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Pan the camera origin by `delta` pixels of primary-button drag.
    PanCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Dolly the camera by `delta` vertical pixels of tertiary-button
    /// drag.
    ZoomCamera {
        /// Vertical drag delta.
        delta: f32,
    },

    /// Dolly the camera by a scroll wheel delta.
    Zoom {
        /// Wheel delta (positive = wheel away from the user).
        delta: f32,
    },

    // ── Journey ─────────────────────────────────────────────────────
    /// Open the quiz for a level node the user clicked.
    ///
    /// Dropped when the node is locked, a transition is animating, or
    /// the overlay is already open.
    SelectLevel {
        /// Id of the clicked node.
        id: u32,
    },

    // ── Quiz overlay ────────────────────────────────────────────────
    /// Answer the current question by *presented* option index.
    AnswerQuiz {
        /// Index into the shuffled option list shown to the user.
        option: usize,
    },

    /// The overlay's confirm button: advances past a correct answer,
    /// completes a cleared level (starting the travel transition), or
    /// closes a failed run.
    ConfirmQuiz,

    /// Close the quiz overlay without completing the level.
    DismissQuiz,
}
