use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and orbit control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Smallest orbit radius the user can zoom to.
    #[schemars(title = "Min Zoom Distance", range(min = 1.0, max = 20.0), extend("step" = 1.0))]
    pub min_radius: f32,
    /// Largest orbit radius the user can zoom to.
    #[schemars(title = "Max Zoom Distance", range(min = 20.0, max = 200.0), extend("step" = 5.0))]
    pub max_radius: f32,
    /// Lowest camera elevation above the ground plane, in degrees.
    #[schemars(skip)]
    pub min_elevation: f32,
    /// Highest camera elevation, in degrees.
    #[schemars(skip)]
    pub max_elevation: f32,
    /// Degrees of rotation per pixel of secondary-button drag.
    #[schemars(title = "Rotate Speed", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub rotate_sensitivity: f32,
    /// Radius change per pixel of tertiary-button drag.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_sensitivity: f32,
    /// Origin translation per pixel of primary-button drag. Negative so
    /// the world follows the pointer.
    #[schemars(title = "Pan Speed", range(min = -0.1, max = 0.0), extend("step" = 0.005))]
    pub pan_sensitivity: f32,
    /// Radius change per unit of wheel delta.
    #[schemars(title = "Scroll Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub scroll_sensitivity: f32,
    /// Orbit radius before the first transition.
    #[schemars(skip)]
    pub initial_radius: f32,
    /// Orbit azimuth before the first transition, in degrees.
    #[schemars(skip)]
    pub initial_azimuth: f32,
    /// Orbit elevation before the first transition, in degrees.
    #[schemars(skip)]
    pub initial_elevation: f32,
    /// Vertical offset applied to the look target above the orbit
    /// origin.
    #[schemars(skip)]
    pub look_offset: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            min_radius: 5.0,
            max_radius: 50.0,
            min_elevation: 5.0,
            max_elevation: 85.0,
            rotate_sensitivity: 0.3,
            zoom_sensitivity: 0.05,
            pan_sensitivity: -0.01,
            scroll_sensitivity: 0.01,
            initial_radius: 20.0,
            initial_azimuth: 180.0,
            initial_elevation: 25.0,
            look_offset: 0.0,
        }
    }
}
