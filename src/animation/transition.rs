//! The level-to-level transition state machine.

use glam::Vec3;
use web_time::{Duration, Instant};

use super::interpolation::lerp_vec3;
use crate::camera::orbit::OrbitState;
use crate::journey::path::PathCurve;
use crate::options::TransitionOptions;

/// Captured endpoints of an in-flight transition.
///
/// A transient value object: created when a level change is accepted,
/// dropped when progress reaches 1.0.
#[derive(Debug, Clone)]
struct ActiveTransition {
    start_character: Vec3,
    end_character: Vec3,
    start_orbit: OrbitState,
    end_orbit: OrbitState,
    started: Instant,
    duration: Duration,
}

impl ActiveTransition {
    /// Animation progress in [0, 1], clamped.
    #[inline]
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// State the controller is in after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// No transition active; the character bobs at its resting point and
    /// the camera is under user control.
    Idle,
    /// A transition is animating the character and camera.
    Transitioning,
}

/// Owns the discrete notion of "current level" and animates level
/// changes.
///
/// Two states: idle and transitioning. A level-change request is
/// accepted only when idle and targeting a different level; everything
/// else is a silent no-op. The *logical* level changes the moment a
/// request is accepted — the visual animation lags behind by up to the
/// fixed duration, so UI reacting to the current level (unlock markers,
/// node highlights) updates immediately.
///
/// Lock status is never checked here. Rejecting clicks on locked nodes
/// is the click-handling layer's job; by the time a request reaches
/// this controller it is assumed legitimate.
pub struct TransitionController {
    current: u32,
    active: Option<ActiveTransition>,
    options: TransitionOptions,
}

impl TransitionController {
    /// Create an idle controller sitting at `initial_level`.
    #[must_use]
    pub fn new(options: TransitionOptions, initial_level: u32) -> Self {
        Self {
            current: initial_level,
            active: None,
            options,
        }
    }

    /// The logical current level (updated at request accept time).
    #[must_use]
    pub fn current_level(&self) -> u32 {
        self.current
    }

    /// Whether a transition is animating.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// The resting character position for a level: its curve point plus
    /// the fixed height offset.
    #[must_use]
    pub fn rest_position(
        &self,
        level: u32,
        path: &PathCurve,
        level_count: usize,
    ) -> Vec3 {
        let point = path.level_point(level as usize, level_count);
        point + Vec3::Y * self.options.rest_height
    }

    /// Request a change to `target`. Returns whether it was accepted.
    ///
    /// Silent no-op when a transition is already active or `target`
    /// equals the current level. On accept, captures `character` and
    /// `orbit` as start values, computes the end point from the path
    /// curve and the end orbit from the configured framing offset, and
    /// records `now` as the start timestamp. The caller must suspend
    /// direct camera control until the controller reports idle again.
    pub fn request(
        &mut self,
        target: u32,
        path: &PathCurve,
        level_count: usize,
        character: Vec3,
        orbit: OrbitState,
        now: Instant,
    ) -> bool {
        if self.active.is_some() || target == self.current {
            return false;
        }

        let end_point = path.level_point(target as usize, level_count);
        let end_orbit =
            OrbitState::framing(end_point, self.options.framing_offset());
        let end_character = end_point + Vec3::Y * self.options.rest_height;

        self.active = Some(ActiveTransition {
            start_character: character,
            end_character,
            start_orbit: orbit,
            end_orbit,
            started: now,
            duration: Duration::from_millis(self.options.duration_ms),
        });

        log::debug!(
            "transition accepted: level {} -> {} over {}ms",
            self.current,
            target,
            self.options.duration_ms
        );
        self.current = target;
        true
    }

    /// Per-frame update; writes the animated character position and
    /// orbit state.
    ///
    /// While transitioning, both interpolate linearly against wall-clock
    /// progress; at progress 1.0 the controller returns to idle in the
    /// same call. While idle, the character holds the current level's
    /// resting point with a sine bob on the vertical axis
    /// (`idle_elapsed` is seconds since the scene started).
    pub fn update(
        &mut self,
        now: Instant,
        idle_elapsed: f32,
        path: &PathCurve,
        level_count: usize,
        character: &mut Vec3,
        orbit: &mut OrbitState,
    ) -> TransitionPhase {
        if let Some(active) = &self.active {
            let progress = active.progress(now);
            *character = lerp_vec3(
                active.start_character,
                active.end_character,
                progress,
            );
            *orbit = OrbitState::lerp(
                &active.start_orbit,
                &active.end_orbit,
                progress,
            );
            if progress >= 1.0 {
                log::debug!("transition to level {} complete", self.current);
                self.active = None;
                return TransitionPhase::Idle;
            }
            return TransitionPhase::Transitioning;
        }

        let rest = self.rest_position(self.current, path, level_count);
        let bob = (idle_elapsed * self.options.bob_frequency).sin()
            * self.options.bob_amplitude;
        character.y = rest.y + bob;
        TransitionPhase::Idle
    }
}
