use glam::{Quat, Vec2, Vec3};

use crate::camera::core::Camera;
use crate::camera::orbit::OrbitState;
use crate::options::CameraOptions;

/// Translates pointer gestures into orbit state changes and derives the
/// viewpoint the renderer reads.
///
/// The controller owns the live [`OrbitState`] plus an `enabled` flag.
/// While disabled (a level transition is animating the camera), every
/// gesture method is a silent no-op; this flag is the only mutual
/// exclusion between user control and the transition animation.
pub struct OrbitController {
    state: OrbitState,
    enabled: bool,
    options: CameraOptions,
}

impl OrbitController {
    /// Create a controller with the initial orbit from `options`.
    #[must_use]
    pub fn new(options: CameraOptions) -> Self {
        let state = OrbitState::new(
            Vec3::ZERO,
            options.initial_radius,
            options.initial_azimuth,
            options.initial_elevation,
        );
        Self {
            state,
            enabled: true,
            options,
        }
    }

    /// The current orbit state.
    #[must_use]
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    /// Replace the orbit state wholesale.
    ///
    /// Bypasses clamping: the transition controller writes interpolated
    /// states through here, and its endpoints are derived from fixed
    /// configuration, not user input.
    pub fn set_state(&mut self, state: OrbitState) {
        self.state = state;
    }

    /// Whether gesture input is currently applied.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable gesture input.
    ///
    /// The transition controller disables the camera for the duration of
    /// a level transition and re-enables it on completion.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Read-only access to the camera options in effect.
    #[must_use]
    pub fn options(&self) -> &CameraOptions {
        &self.options
    }

    /// Secondary-button drag: rotate around the origin.
    ///
    /// `azimuth -= dx * rotate_sensitivity`,
    /// `elevation += dy * rotate_sensitivity`, elevation clamped.
    pub fn rotate(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        self.state.azimuth -= delta.x * self.options.rotate_sensitivity;
        self.state.elevation += delta.y * self.options.rotate_sensitivity;
        self.clamp_elevation();
    }

    /// Primary-button drag: translate the origin in the ground plane.
    ///
    /// The world forward/left axes are rotated by the current azimuth so
    /// the pan always follows the screen, then scaled by the (negative)
    /// pan sensitivity and the respective pointer delta.
    pub fn pan(&mut self, delta: Vec2) {
        if !self.enabled {
            return;
        }
        let yaw = Quat::from_rotation_y(self.state.azimuth.to_radians());
        let forward = yaw * Vec3::Z;
        let left = yaw * Vec3::X;
        self.state.origin +=
            forward * (self.options.pan_sensitivity * delta.y);
        self.state.origin += left * (self.options.pan_sensitivity * delta.x);
    }

    /// Tertiary-button drag: dolly in/out.
    ///
    /// `radius += dy * zoom_sensitivity`, clamped.
    pub fn zoom_drag(&mut self, delta_y: f32) {
        if !self.enabled {
            return;
        }
        self.state.radius += delta_y * self.options.zoom_sensitivity;
        self.clamp_radius();
    }

    /// Scroll wheel: dolly in/out.
    ///
    /// `radius -= dy * scroll_sensitivity`, clamped. Scrolling is more
    /// sensitive than the tertiary drag.
    pub fn zoom_scroll(&mut self, delta_y: f32) {
        if !self.enabled {
            return;
        }
        self.state.radius -= delta_y * self.options.scroll_sensitivity;
        self.clamp_radius();
    }

    /// Write eye and look target into the renderer-facing camera.
    ///
    /// Pure function of the orbit state; the look target is the origin
    /// shifted up by the configured offset.
    pub fn update_viewpoint(&self, camera: &mut Camera) {
        camera.eye = self.state.eye();
        camera.target =
            self.state.origin + Vec3::Y * self.options.look_offset;
    }

    fn clamp_elevation(&mut self) {
        self.state.elevation = self
            .state
            .elevation
            .clamp(self.options.min_elevation, self.options.max_elevation);
    }

    fn clamp_radius(&mut self) {
        self.state.radius = self
            .state
            .radius
            .clamp(self.options.min_radius, self.options.max_radius);
    }
}
