//! Nearest-neighbor chain ordering.
//!
//! An alternative to the serpentine sector pipeline: start at the first
//! point and repeatedly hop to the closest remaining one. It produces short
//! hops but no balance or crossing guarantees, so the planner never calls
//! it — it exists for comparing chain lengths during panel bring-up.

use crate::types::PolarPoint;

fn distance(a: &PolarPoint, b: &PolarPoint) -> f64 {
    let (ax, ay) = a.to_cartesian();
    let (bx, by) = b.to_cartesian();
    (ax - bx).hypot(ay - by)
}

/// Order points by repeated nearest-neighbor selection, starting from the
/// first point in the slice. Ties resolve to the earliest remaining point.
pub fn greedy_path(points: &[PolarPoint]) -> Vec<PolarPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut remaining = points[1..].to_vec();
    let mut path = Vec::with_capacity(points.len());
    path.push(points[0]);

    while !remaining.is_empty() {
        let current = path[path.len() - 1];
        let nearest = remaining
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| distance(&current, a).total_cmp(&distance(&current, b)))
            .map(|(i, _)| i)
            .unwrap_or(0);
        path.push(remaining.remove(nearest));
    }

    path
}
