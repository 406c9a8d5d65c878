//! Spherical orbit state for a look-at camera.

use glam::Vec3;

use crate::animation::interpolation::{lerp_f32, lerp_vec3};

/// Four-number representation of a look-at camera: the point it orbits,
/// the distance from that point, and two angles stored in degrees.
///
/// The concrete viewpoint is always derived from this state, never the
/// other way around. Angles are kept in degrees because every consumer
/// (input sensitivities, options files, transitions) works in degrees;
/// conversion to radians happens only inside [`eye`](Self::eye).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// The point the camera looks at.
    pub origin: Vec3,
    /// Distance from the origin.
    pub radius: f32,
    /// Rotation around the world Y axis, in degrees.
    pub azimuth: f32,
    /// Angle above the XZ plane, in degrees.
    pub elevation: f32,
}

impl OrbitState {
    /// Create an orbit state from its four parameters.
    #[must_use]
    pub fn new(origin: Vec3, radius: f32, azimuth: f32, elevation: f32) -> Self {
        Self {
            origin,
            radius,
            azimuth,
            elevation,
        }
    }

    /// Camera eye position derived from the spherical parameters.
    ///
    /// `origin + radius * (sin az * cos el, sin el, cos az * cos el)`,
    /// with both angles converted from degrees.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let az = self.azimuth.to_radians();
        let el = self.elevation.to_radians();
        self.origin
            + self.radius
                * Vec3::new(az.sin() * el.cos(), el.sin(), az.cos() * el.cos())
    }

    /// The orbit state that views `target` from `target + offset`.
    ///
    /// Inverts the spherical conversion: `radius = |offset|`,
    /// `elevation = asin(offset.y / radius)`,
    /// `azimuth = atan2(offset.x, offset.z)`, angles in degrees. The
    /// offset must be non-zero; it is a fixed configuration vector, not
    /// user input.
    #[must_use]
    pub fn framing(target: Vec3, offset: Vec3) -> Self {
        let radius = offset.length();
        let elevation = (offset.y / radius).asin().to_degrees();
        let azimuth = offset.x.atan2(offset.z).to_degrees();
        Self {
            origin: target,
            radius,
            azimuth,
            elevation,
        }
    }

    /// Componentwise linear interpolation between two orbit states.
    ///
    /// Each spherical parameter interpolates independently; the eye
    /// position traced out is *not* a straight line, which is what gives
    /// level transitions their swing around the path.
    #[must_use]
    pub fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        Self {
            origin: lerp_vec3(start.origin, end.origin, t),
            radius: lerp_f32(start.radius, end.radius, t),
            azimuth: lerp_f32(start.azimuth, end.azimuth, t),
            elevation: lerp_f32(start.elevation, end.elevation, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_distance_round_trips_radius() {
        let states = [
            OrbitState::new(Vec3::ZERO, 20.0, 180.0, 25.0),
            OrbitState::new(Vec3::new(3.0, -1.0, 7.5), 5.0, 0.0, 5.0),
            OrbitState::new(Vec3::new(-10.0, 0.0, 2.0), 50.0, 45.0, 85.0),
            OrbitState::new(Vec3::new(0.5, 0.5, 0.5), 14.142, -137.0, 44.9),
        ];
        for s in states {
            let relative = s.eye() - s.origin;
            assert!(
                (relative.length() - s.radius).abs() < 1e-3,
                "|eye - origin| = {} should equal radius {}",
                relative.length(),
                s.radius
            );
        }
    }

    #[test]
    fn framing_inverts_spherical_conversion() {
        let target = Vec3::new(10.0, 0.0, -30.0);
        let offset = Vec3::new(0.0, 10.0, 10.0);
        let state = OrbitState::framing(target, offset);

        assert_eq!(state.origin, target);
        assert!((state.radius - 200.0_f32.sqrt()).abs() < 1e-4);
        assert!((state.elevation - 45.0).abs() < 1e-3);
        assert!(state.azimuth.abs() < 1e-3);

        // Deriving the eye from the framing state lands back on
        // target + offset.
        let eye = state.eye();
        assert!((eye - (target + offset)).length() < 1e-3);
    }

    #[test]
    fn framing_off_axis_offset() {
        let state =
            OrbitState::framing(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0));
        assert!((state.azimuth - 90.0).abs() < 1e-3);
        assert!(state.elevation.abs() < 1e-3);
        assert!((state.radius - 10.0).abs() < 1e-4);
    }

    #[test]
    fn lerp_midpoint() {
        let a = OrbitState::new(Vec3::ZERO, 10.0, 0.0, 10.0);
        let b = OrbitState::new(Vec3::new(4.0, 0.0, -8.0), 20.0, 90.0, 50.0);
        let mid = OrbitState::lerp(&a, &b, 0.5);
        assert_eq!(mid.origin, Vec3::new(2.0, 0.0, -4.0));
        assert_eq!(mid.radius, 15.0);
        assert_eq!(mid.azimuth, 45.0);
        assert_eq!(mid.elevation, 30.0);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = OrbitState::new(Vec3::ZERO, 10.0, 180.0, 25.0);
        let b = OrbitState::new(Vec3::new(1.0, 2.0, 3.0), 14.0, -90.0, 45.0);
        assert_eq!(OrbitState::lerp(&a, &b, 0.0), a);
        assert_eq!(OrbitState::lerp(&a, &b, 1.0), b);
    }
}
