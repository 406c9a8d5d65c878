//! The per-frame interactive core tying the components together.
//!
//! The engine is single-threaded and frame-driven: pointer/overlay
//! callbacks call [`execute`](JourneyEngine::execute) as events arrive,
//! and the render loop calls [`update`](JourneyEngine::update) once per
//! display refresh with a wall-clock timestamp. Mutual exclusion
//! between user camera control and the transition animation is the
//! orbit controller's `enabled` flag, toggled here.

/// Command vocabulary.
pub mod command;

use glam::Vec3;
use web_time::Instant;

pub use self::command::JourneyCommand;
use crate::animation::transition::{TransitionController, TransitionPhase};
use crate::camera::controller::OrbitController;
use crate::camera::core::Camera;
use crate::camera::orbit::OrbitState;
use crate::error::TrailheadError;
use crate::journey::quiz::{QuizSession, SessionPhase};
use crate::journey::{
    zigzag_waypoints, Journey, JourneyContent, LevelNode, PathCurve,
};
use crate::options::Options;

/// The interactive core of the journey map.
///
/// Owns the level table, the path curve, the orbit camera, the
/// character, the transition state machine, and the optional active
/// quiz session. An external renderer reads [`camera`](Self::camera),
/// [`character_position`](Self::character_position), and
/// [`levels`](Self::levels) every frame; an external raycaster feeds
/// node hits back in through [`execute`](Self::execute).
pub struct JourneyEngine {
    options: Options,
    path: PathCurve,
    journey: Journey,
    orbit: OrbitController,
    camera: Camera,
    character: Vec3,
    transitions: TransitionController,
    quiz: Option<QuizSession>,
    started: Instant,
}

impl JourneyEngine {
    /// Build the engine from journey content.
    ///
    /// The character and camera start framed on the first level of the
    /// path.
    ///
    /// # Errors
    ///
    /// [`TrailheadError::ContentLoad`] when the content has no usable
    /// levels.
    pub fn new(
        content: &JourneyContent,
        options: Options,
    ) -> Result<Self, TrailheadError> {
        let path = PathCurve::new(zigzag_waypoints(content.levels.len()));
        let journey = Journey::from_content(content, &path)?;
        let first = journey.first_level_id();

        let transitions =
            TransitionController::new(options.transition.clone(), first);
        let mut orbit = OrbitController::new(options.camera.clone());

        let start_point = path.level_point(0, journey.len());
        let character = start_point
            + Vec3::Y * options.transition.rest_height;
        orbit.set_state(OrbitState::framing(
            start_point,
            options.transition.framing_offset(),
        ));

        let mut camera = Camera {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.6,
            fovy: options.camera.fovy,
            znear: options.camera.znear,
            zfar: options.camera.zfar,
        };
        orbit.update_viewpoint(&mut camera);

        Ok(Self {
            options,
            path,
            journey,
            orbit,
            camera,
            character,
            transitions,
            quiz: None,
            started: Instant::now(),
        })
    }

    /// Execute one command.
    ///
    /// Camera gestures route to the orbit controller (no-ops while a
    /// transition holds the camera); selection and quiz commands drive
    /// the level/quiz flow. Invalid commands are silent no-ops.
    pub fn execute(&mut self, command: JourneyCommand) {
        match command {
            JourneyCommand::RotateCamera { delta } => {
                self.orbit.rotate(delta);
            }
            JourneyCommand::PanCamera { delta } => self.orbit.pan(delta),
            JourneyCommand::ZoomCamera { delta } => {
                self.orbit.zoom_drag(delta);
            }
            JourneyCommand::Zoom { delta } => {
                self.orbit.zoom_scroll(delta);
            }
            JourneyCommand::SelectLevel { id } => self.select_level(id),
            JourneyCommand::AnswerQuiz { option } => {
                self.answer_quiz(option);
            }
            JourneyCommand::ConfirmQuiz => self.confirm_quiz(),
            JourneyCommand::DismissQuiz => self.quiz = None,
        }
    }

    /// Advance animation state to `now` and recompute the viewpoint.
    pub fn update(&mut self, now: Instant) {
        let idle_elapsed =
            now.saturating_duration_since(self.started).as_secs_f32();

        let mut character = self.character;
        let mut orbit_state = *self.orbit.state();
        let phase = self.transitions.update(
            now,
            idle_elapsed,
            &self.path,
            self.journey.len(),
            &mut character,
            &mut orbit_state,
        );
        self.character = character;
        self.orbit.set_state(orbit_state);
        self.orbit.set_enabled(phase == TransitionPhase::Idle);
        self.orbit.update_viewpoint(&mut self.camera);
    }

    /// Update the camera aspect after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// The viewpoint the renderer reads.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current character world position.
    #[must_use]
    pub fn character_position(&self) -> Vec3 {
        self.character
    }

    /// The logical current level (updates the moment a transition is
    /// accepted, not when its animation finishes).
    #[must_use]
    pub fn current_level(&self) -> u32 {
        self.transitions.current_level()
    }

    /// Whether a level transition is animating.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transitions.is_transitioning()
    }

    /// Level nodes in path order, for node visualization.
    #[must_use]
    pub fn levels(&self) -> &[LevelNode] {
        self.journey.levels()
    }

    /// The active quiz session, when the overlay is open.
    #[must_use]
    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    /// The path curve levels are placed on (for drawing the trail).
    #[must_use]
    pub fn path(&self) -> &PathCurve {
        &self.path
    }

    /// The options in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Click-handling layer: opens the quiz for a selectable node.
    ///
    /// This is where lock status is checked — the transition controller
    /// downstream never re-checks it.
    fn select_level(&mut self, id: u32) {
        if self.transitions.is_transitioning() || self.quiz.is_some() {
            return;
        }
        if !self.journey.is_selectable(id) {
            log::debug!("ignoring click on locked level {id}");
            return;
        }
        let Some(level) = self.journey.level(id) else {
            return;
        };
        self.quiz = QuizSession::new(
            id,
            level.quizzes.clone(),
            &mut rand::rng(),
        );
        if self.quiz.is_none() {
            log::warn!("level {id} has no quizzes to show");
        }
    }

    fn answer_quiz(&mut self, option: usize) {
        if let Some(session) = &mut self.quiz {
            if let Some(outcome) = session.answer(option) {
                log::debug!(
                    "level {} question {}: {outcome:?}",
                    session.level_id(),
                    session.question_index()
                );
            }
        }
    }

    /// The overlay's confirm button.
    fn confirm_quiz(&mut self) {
        let Some(session) = &mut self.quiz else {
            return;
        };
        match session.phase() {
            SessionPhase::Asking => {}
            SessionPhase::AwaitingNext => session.advance(),
            SessionPhase::Failed => self.quiz = None,
            SessionPhase::Cleared => {
                let level_id = session.level_id();
                self.quiz = None;
                if let Some(next) = self.journey.complete_level(level_id)
                {
                    let accepted = self.transitions.request(
                        next,
                        &self.path,
                        self.journey.len(),
                        self.character,
                        *self.orbit.state(),
                        Instant::now(),
                    );
                    if accepted {
                        self.orbit.set_enabled(false);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::journey::content::LevelContent;
    use crate::journey::quiz::{Quiz, QuizOption};
    use crate::journey::LevelStatus;

    fn two_level_content() -> JourneyContent {
        let quiz = |q: &str| Quiz {
            question: q.into(),
            options: vec![
                QuizOption {
                    text: "right".into(),
                    correct: true,
                },
                QuizOption {
                    text: "wrong".into(),
                    correct: false,
                },
            ],
        };
        JourneyContent {
            levels: vec![
                LevelContent {
                    id: 0,
                    status: LevelStatus::Unlocked,
                    quizzes: vec![quiz("a?"), quiz("b?")],
                },
                LevelContent {
                    id: 1,
                    status: LevelStatus::Locked,
                    quizzes: vec![quiz("c?")],
                },
            ],
        }
    }

    fn engine() -> JourneyEngine {
        JourneyEngine::new(&two_level_content(), Options::default())
            .unwrap()
    }

    fn answer_correctly(engine: &mut JourneyEngine) {
        let option = engine
            .quiz()
            .unwrap()
            .presented_options()
            .iter()
            .position(|(_, o)| o.correct)
            .unwrap();
        engine.execute(JourneyCommand::AnswerQuiz { option });
    }

    /// Clear every question of the currently open quiz and confirm
    /// through the transition start.
    fn clear_open_quiz(engine: &mut JourneyEngine) {
        loop {
            let Some(phase) = engine.quiz().map(QuizSession::phase)
            else {
                break;
            };
            match phase {
                SessionPhase::Asking => answer_correctly(engine),
                _ => engine.execute(JourneyCommand::ConfirmQuiz),
            }
        }
    }

    #[test]
    fn starts_framed_on_the_first_level() {
        let e = engine();
        let start = e.path().level_point(0, 2);
        assert!(
            (e.character_position() - (start + Vec3::Y * 0.8)).length()
                < 1e-4
        );
        assert_eq!(e.current_level(), 0);
        // Camera looks at the first level's point.
        assert!((e.camera().target - start).length() < 1e-4);
    }

    #[test]
    fn locked_level_click_is_rejected_here() {
        let mut e = engine();
        e.execute(JourneyCommand::SelectLevel { id: 1 });
        assert!(e.quiz().is_none());
        assert!(!e.is_transitioning());
    }

    #[test]
    fn unlocked_level_click_opens_the_quiz() {
        let mut e = engine();
        e.execute(JourneyCommand::SelectLevel { id: 0 });
        let session = e.quiz().unwrap();
        assert_eq!(session.level_id(), 0);
        assert_eq!(session.phase(), SessionPhase::Asking);
    }

    #[test]
    fn clearing_a_level_unlocks_and_travels_to_the_next() {
        let mut e = engine();
        e.execute(JourneyCommand::SelectLevel { id: 0 });
        clear_open_quiz(&mut e);

        assert!(e.is_transitioning());
        // Logical level changes at accept time.
        assert_eq!(e.current_level(), 1);
        assert_eq!(e.levels()[0].status, LevelStatus::Completed);
        assert_eq!(e.levels()[1].status, LevelStatus::Unlocked);
    }

    #[test]
    fn transition_holds_the_camera_until_it_finishes() {
        let mut e = engine();
        e.execute(JourneyCommand::SelectLevel { id: 0 });
        clear_open_quiz(&mut e);
        assert!(e.is_transitioning());

        // Camera gestures are dropped mid-transition.
        let radius_before = e.orbit.state().radius;
        e.execute(JourneyCommand::Zoom { delta: 100.0 });
        assert_eq!(e.orbit.state().radius, radius_before);

        // Clicks are dropped mid-transition too.
        e.execute(JourneyCommand::SelectLevel { id: 1 });
        assert!(e.quiz().is_none());

        // Run the animation out.
        let end = Instant::now() + Duration::from_millis(1600);
        e.update(end);
        assert!(!e.is_transitioning());

        let rest = e.path().level_point(1, 2) + Vec3::Y * 0.8;
        assert!((e.character_position() - rest).length() < 1e-3);

        // Control is handed back.
        e.execute(JourneyCommand::Zoom { delta: 10.0 });
        assert!(e.orbit.state().radius < radius_before);
    }

    #[test]
    fn wrong_answer_leaves_progression_unchanged() {
        let mut e = engine();
        e.execute(JourneyCommand::SelectLevel { id: 0 });
        let wrong = e
            .quiz()
            .unwrap()
            .presented_options()
            .iter()
            .position(|(_, o)| !o.correct)
            .unwrap();
        e.execute(JourneyCommand::AnswerQuiz { option: wrong });
        assert_eq!(e.quiz().unwrap().phase(), SessionPhase::Failed);

        e.execute(JourneyCommand::ConfirmQuiz);
        assert!(e.quiz().is_none());
        assert!(!e.is_transitioning());
        assert_eq!(e.levels()[0].status, LevelStatus::Unlocked);
        assert_eq!(e.levels()[1].status, LevelStatus::Locked);
    }

    #[test]
    fn dismiss_closes_the_overlay_without_completing() {
        let mut e = engine();
        e.execute(JourneyCommand::SelectLevel { id: 0 });
        answer_correctly(&mut e);
        e.execute(JourneyCommand::DismissQuiz);
        assert!(e.quiz().is_none());
        assert_eq!(e.levels()[0].status, LevelStatus::Unlocked);
    }

    #[test]
    fn selection_while_overlay_open_is_dropped() {
        let mut e = engine();
        e.execute(JourneyCommand::SelectLevel { id: 0 });
        let index_before = e.quiz().unwrap().question_index();
        e.execute(JourneyCommand::SelectLevel { id: 0 });
        assert_eq!(e.quiz().unwrap().question_index(), index_before);
    }

    #[test]
    fn camera_gestures_apply_while_idle() {
        let mut e = engine();
        e.update(Instant::now());
        let radius_before = e.orbit.state().radius;
        e.execute(JourneyCommand::ZoomCamera { delta: 20.0 });
        assert!(e.orbit.state().radius > radius_before);

        let azimuth_before = e.orbit.state().azimuth;
        e.execute(JourneyCommand::RotateCamera {
            delta: glam::Vec2::new(10.0, 0.0),
        });
        assert!(e.orbit.state().azimuth < azimuth_before);
    }

    #[test]
    fn update_keeps_viewpoint_consistent_with_orbit() {
        let mut e = engine();
        e.execute(JourneyCommand::PanCamera {
            delta: glam::Vec2::new(30.0, -12.0),
        });
        e.update(Instant::now());
        let relative = e.camera().eye - e.orbit.state().origin;
        assert!(
            (relative.length() - e.orbit.state().radius).abs() < 1e-3
        );
    }
}
