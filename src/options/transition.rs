use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
/// Level transition and idle animation parameters.
pub struct TransitionOptions {
    /// Wall-clock duration of a level transition in milliseconds.
    #[schemars(title = "Duration (ms)", range(min = 0, max = 10_000), extend("step" = 100))]
    pub duration_ms: u64,
    /// Offset from a level's point to the camera eye when framing it,
    /// as `[x, y, z]`.
    #[schemars(skip)]
    pub camera_offset: [f32; 3],
    /// Height of the character above its level point when at rest.
    ///
    /// One constant for every code path: initial placement, idle bob
    /// base, and transition endpoints all use this value.
    #[schemars(skip)]
    pub rest_height: f32,
    /// Amplitude of the idle bob, in world units.
    #[schemars(title = "Bob Amplitude", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub bob_amplitude: f32,
    /// Frequency of the idle bob, in radians per second.
    #[schemars(title = "Bob Frequency", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub bob_frequency: f32,
}

impl TransitionOptions {
    /// The framing offset as a vector.
    #[must_use]
    pub fn framing_offset(&self) -> Vec3 {
        Vec3::from_array(self.camera_offset)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1500,
            camera_offset: [0.0, 10.0, 10.0],
            rest_height: 0.8,
            bob_amplitude: 0.05,
            bob_frequency: 5.0,
        }
    }
}
