//! Centralized interpolation utilities for the transition system.
//!
//! Transitions are deliberately linear: each animated quantity moves at
//! constant rate from its captured start to its computed end. The helpers
//! here exist so the character path and every camera parameter share one
//! definition of "lerp".

use glam::Vec3;

/// Lerp two positions.
#[inline]
#[must_use]
pub fn lerp_vec3(start: Vec3, end: Vec3, t: f32) -> Vec3 {
    start + (end - start) * t
}

/// Lerp two scalars.
#[inline]
#[must_use]
pub fn lerp_f32(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_vec3_midpoint() {
        let start = Vec3::ZERO;
        let end = Vec3::new(10.0, 20.0, 30.0);
        let result = lerp_vec3(start, end, 0.5);
        assert!((result - Vec3::new(5.0, 10.0, 15.0)).length() < 0.001);
    }

    #[test]
    fn lerp_vec3_endpoints() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let end = Vec3::new(-4.0, 0.0, 9.0);
        assert_eq!(lerp_vec3(start, end, 0.0), start);
        assert_eq!(lerp_vec3(start, end, 1.0), end);
    }

    #[test]
    fn lerp_f32_quarter() {
        let result = lerp_f32(0.0, 100.0, 0.25);
        assert!((result - 25.0).abs() < 0.001);
    }
}
