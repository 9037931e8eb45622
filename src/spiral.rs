//! Sunflower-spiral point generation.
//!
//! Produces `n` points with near-uniform areal density on a disc: radius
//! follows a square-root profile so equal-width annuli receive point counts
//! proportional to their area, and the angle advances by a fixed irrational
//! increment (the golden angle by default) so no two points share a ray.

use crate::types::PolarPoint;
use std::f64::consts::{PI, TAU};

/// The golden angle, `π(3 − √5)` ≈ 2.39996 rad.
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5.0_f64.sqrt())
}

/// Generate `count` spiral points filling a disc of radius `max_radius`.
///
/// Point `i` (1-based) sits at radius `max_radius * sqrt(i / count)` and
/// angle `(i * angle_increment) mod 2π`. Indices are assigned in generation
/// order starting at 0.
pub fn spiral_points(count: usize, max_radius: f64, angle_increment: f64) -> Vec<PolarPoint> {
    (1..=count)
        .map(|i| {
            PolarPoint::new(
                i - 1,
                max_radius * (i as f64 / count as f64).sqrt(),
                (i as f64 * angle_increment).rem_euclid(TAU),
            )
        })
        .collect()
}
