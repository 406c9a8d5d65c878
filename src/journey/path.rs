//! The journey path: a smooth interpolating curve through an ordered
//! waypoint list, sampled by fractional parameter.
//!
//! Levels sit at evenly spaced *arc-length* fractions of the curve, so
//! the precomputed arc table matters: a raw Catmull-Rom parameter does
//! not advance uniformly with distance, and level nodes would bunch up
//! on short segments without the reparameterization.

use glam::Vec3;

/// Number of uniform samples in the arc-length table.
const ARC_SAMPLES: usize = 256;

/// Minimum knot spacing, keeping the centripetal parameterization
/// finite when neighboring control points coincide (as they do at the
/// clamped endpoints).
const MIN_KNOT_SPACING: f32 = 1e-4;

/// The serpentine waypoint layout of the journey map: x cycles through
/// `{0, 10, 0, -10}` while z recedes by 8 per level.
#[must_use]
pub fn zigzag_waypoints(count: usize) -> Vec<Vec3> {
    const X_PATTERN: [f32; 4] = [0.0, 10.0, 0.0, -10.0];
    (0..count)
        .map(|i| {
            Vec3::new(X_PATTERN[i % 4], 0.0, 10.0 - (i as f32) * 8.0)
        })
        .collect()
}

/// A centripetal Catmull-Rom curve through a fixed waypoint list, with
/// arc-length parameterized sampling.
///
/// Built once per journey; read-only afterwards.
#[derive(Debug, Clone)]
pub struct PathCurve {
    points: Vec<Vec3>,
    /// Cumulative length at `ARC_SAMPLES + 1` uniform curve parameters.
    arc_table: Vec<f32>,
}

impl PathCurve {
    /// Build a curve through `points` and precompute its arc table.
    ///
    /// A single waypoint yields a degenerate curve that always returns
    /// that point; an empty list always returns the world origin.
    #[must_use]
    pub fn new(points: Vec<Vec3>) -> Self {
        let mut curve = Self {
            points,
            arc_table: Vec::new(),
        };
        if curve.points.len() >= 2 {
            let mut table = Vec::with_capacity(ARC_SAMPLES + 1);
            table.push(0.0);
            let mut total = 0.0_f32;
            let mut prev = curve.point(0.0);
            for i in 1..=ARC_SAMPLES {
                let t = i as f32 / ARC_SAMPLES as f32;
                let p = curve.point(t);
                total += prev.distance(p);
                table.push(total);
                prev = p;
            }
            curve.arc_table = table;
        }
        curve
    }

    /// The waypoints the curve interpolates.
    #[must_use]
    pub fn waypoints(&self) -> &[Vec3] {
        &self.points
    }

    /// Total arc length of the curve.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.arc_table.last().copied().unwrap_or(0.0)
    }

    /// Point at arc-length fraction `u` in `[0, 1]` (clamped).
    #[must_use]
    pub fn point_at(&self, u: f32) -> Vec3 {
        if self.points.len() < 2 {
            return self.points.first().copied().unwrap_or(Vec3::ZERO);
        }
        let total = self.length();
        if total <= 0.0 {
            return self.points[0];
        }

        let target = u.clamp(0.0, 1.0) * total;
        // First sample whose cumulative length reaches the target.
        let hi = self
            .arc_table
            .partition_point(|&len| len < target)
            .clamp(1, ARC_SAMPLES);
        let lo = hi - 1;
        let span = self.arc_table[hi] - self.arc_table[lo];
        let within = if span > 0.0 {
            (target - self.arc_table[lo]) / span
        } else {
            0.0
        };
        let t = (lo as f32 + within) / ARC_SAMPLES as f32;
        self.point(t)
    }

    /// Curve point for level `index` out of `count` levels.
    ///
    /// Levels are spaced at `index / (count - 1)`; the denominator is
    /// clamped to 1 so a single-level journey samples parameter 0
    /// instead of dividing by zero.
    #[must_use]
    pub fn level_point(&self, index: usize, count: usize) -> Vec3 {
        let denom = count.saturating_sub(1).max(1);
        self.point_at(index as f32 / denom as f32)
    }

    /// Point at raw curve parameter `t` in `[0, 1]`, uniform across
    /// segments (not arc length).
    fn point(&self, t: f32) -> Vec3 {
        let n = self.points.len();
        if n < 2 {
            return self.points.first().copied().unwrap_or(Vec3::ZERO);
        }
        let scaled = t.clamp(0.0, 1.0) * (n - 1) as f32;
        let seg = (scaled.floor() as usize).min(n - 2);
        let local = scaled - seg as f32;

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p0 = self.points[seg.saturating_sub(1)];
        let p3 = self.points[(seg + 2).min(n - 1)];
        catmull_rom(p0, p1, p2, p3, local)
    }
}

/// Centripetal knot spacing (alpha = 0.5).
#[inline]
fn knot_interval(a: Vec3, b: Vec3) -> f32 {
    a.distance(b).sqrt().max(MIN_KNOT_SPACING)
}

/// Affine combination of `a` and `b` at parameter `t` over `[ta, tb]`.
#[inline]
fn mix(a: Vec3, b: Vec3, ta: f32, tb: f32, t: f32) -> Vec3 {
    a * ((tb - t) / (tb - ta)) + b * ((t - ta) / (tb - ta))
}

/// Barry-Goldman pyramidal evaluation of the centripetal Catmull-Rom
/// segment from `p1` to `p2`, at local parameter `t` in `[0, 1]`.
fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t0 = 0.0;
    let t1 = t0 + knot_interval(p0, p1);
    let t2 = t1 + knot_interval(p1, p2);
    let t3 = t2 + knot_interval(p2, p3);
    let t = t1 + (t2 - t1) * t;

    let a1 = mix(p0, p1, t0, t1, t);
    let a2 = mix(p1, p2, t1, t2, t);
    let a3 = mix(p2, p3, t2, t3, t);
    let b1 = mix(a1, a2, t0, t2, t);
    let b2 = mix(a2, a3, t1, t3, t);
    mix(b1, b2, t1, t2, t)
}
