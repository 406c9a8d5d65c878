//! Headless demo: load a journey, clear each level in order, and follow
//! the travel transitions frame by frame.
//!
//! ```text
//! RUST_LOG=debug cargo run -- assets/journeys/french_basics.toml
//! ```

use std::path::Path;
use std::process::ExitCode;

use trailhead::journey::quiz::SessionPhase;
use trailhead::journey::JourneyContent;
use trailhead::options::Options;
use trailhead::{JourneyCommand, JourneyEngine};
use web_time::Instant;

const FRAME: std::time::Duration = std::time::Duration::from_millis(16);

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/journeys/french_basics.toml".to_owned());

    let content = match JourneyContent::load(Path::new(&path)) {
        Ok(content) => content,
        Err(e) => {
            log::error!("failed to load {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    for warning in content.validate() {
        log::warn!("content: {warning}");
    }

    let mut engine = match JourneyEngine::new(&content, Options::default())
    {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("failed to build journey: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "journey loaded: {} levels, path length {:.1}",
        engine.levels().len(),
        engine.path().length()
    );

    loop {
        let level = engine.current_level();
        engine.execute(JourneyCommand::SelectLevel { id: level });
        drive_quiz(&mut engine);

        // Step simulated frames until the travel animation settles.
        engine.update(Instant::now());
        while engine.is_transitioning() {
            std::thread::sleep(FRAME);
            engine.update(Instant::now());
        }

        log::info!(
            "at level {} — character {:?}",
            engine.current_level(),
            engine.character_position()
        );

        if engine.current_level() == level {
            break;
        }
    }

    log::info!("journey complete");
    ExitCode::SUCCESS
}

/// Answer every question of the open quiz correctly and confirm
/// through to completion.
fn drive_quiz(engine: &mut JourneyEngine) {
    loop {
        let Some(phase) = engine.quiz().map(|s| s.phase()) else {
            return;
        };
        match phase {
            SessionPhase::Asking => {
                let correct = engine.quiz().and_then(|s| {
                    s.presented_options()
                        .iter()
                        .position(|(_, o)| o.correct)
                });
                let Some(option) = correct else {
                    log::warn!("question has no correct option, closing");
                    engine.execute(JourneyCommand::DismissQuiz);
                    return;
                };
                engine.execute(JourneyCommand::AnswerQuiz { option });
            }
            SessionPhase::AwaitingNext
            | SessionPhase::Cleared
            | SessionPhase::Failed => {
                engine.execute(JourneyCommand::ConfirmQuiz);
            }
        }
    }
}
