//! Sector partition, radial banding, and serpentine ordering.
//!
//! This is the heart of the pipeline. Each point is assigned to an angular
//! sector by its offset-adjusted angle, each sector is sliced into
//! fixed-width radial bands, and each band is traversed in angle order with
//! the direction alternating band to band — so the chain sweeps one way
//! across the innermost band, steps outward, and sweeps back, never crossing
//! itself.

use crate::types::{Direction, PolarPoint, RoutedPoint, SectorPath};
use std::collections::BTreeMap;
use std::f64::consts::TAU;

/// A point tagged with the normalized angle actually used for its sector
/// assignment. Ordering within a band uses this, not the raw angle: the raw
/// angle of a sector straddling the 0/2π seam would interleave the band.
#[derive(Debug, Clone, Copy)]
struct AssignedPoint {
    point: PolarPoint,
    adjusted_angle: f64,
}

/// Assign every point to one of `sectors` angular slices under `offset`.
///
/// Sector index is `floor(adjusted / slice)` with
/// `adjusted = (angle + offset) mod 2π` and `slice = 2π / sectors`, clamped
/// to the last sector to absorb floating-point overshoot when
/// `adjusted` lands exactly on `2π`. The partition is total and exclusive.
fn assign_sectors(points: &[PolarPoint], sectors: usize, offset: f64) -> Vec<Vec<AssignedPoint>> {
    let slice = TAU / sectors as f64;
    let mut buckets: Vec<Vec<AssignedPoint>> = vec![Vec::new(); sectors];

    for &point in points {
        let adjusted = (point.angle + offset).rem_euclid(TAU);
        let index = ((adjusted / slice) as usize).min(sectors - 1);
        buckets[index].push(AssignedPoint { point, adjusted_angle: adjusted });
    }

    buckets
}

/// Group one sector's points into radial bands keyed by
/// `floor(radius / band_width)`. A point exactly on a band boundary belongs
/// to the outer band (its floor). The `BTreeMap` yields bands in increasing
/// key order, innermost first.
fn radial_bands(
    sector: Vec<AssignedPoint>,
    band_width: f64,
) -> BTreeMap<usize, Vec<AssignedPoint>> {
    let mut bands: BTreeMap<usize, Vec<AssignedPoint>> = BTreeMap::new();
    for ap in sector {
        let key = (ap.point.radius / band_width).floor() as usize;
        bands.entry(key).or_default().push(ap);
    }
    bands
}

/// Order one sector's points into a serpentine path.
///
/// Bands are processed innermost first. Within a band, points are sorted by
/// adjusted angle ascending; the band's direction then decides whether that
/// order is kept (`Ascending`) or reversed (`Descending`).
///
/// The innermost band picks its direction by comparing the radii of its
/// angle-sorted endpoints: strictly decreasing endpoint radius flips it to
/// `Descending`. Every later band is simply the opposite of its predecessor.
/// (The endpoint-radius rule on the first band only is inherited behavior;
/// see DESIGN.md for why it is kept as-is.)
fn order_sector(sector_index: usize, mut points: Vec<AssignedPoint>, band_width: f64) -> SectorPath {
    // Inner-to-outer pre-sort; band re-sorts below are stable, so points at
    // equal adjusted angles stay in radius order.
    points.sort_by(|a, b| a.point.radius.total_cmp(&b.point.radius));

    let mut path = Vec::with_capacity(points.len());
    let mut prev: Option<Direction> = None;

    for (_key, mut band) in radial_bands(points, band_width) {
        band.sort_by(|a, b| a.adjusted_angle.total_cmp(&b.adjusted_angle));

        let direction = match prev {
            None => {
                // Bands are never created empty, so the endpoints exist.
                if band[0].point.radius > band[band.len() - 1].point.radius {
                    band.reverse();
                    Direction::Descending
                } else {
                    Direction::Ascending
                }
            }
            Some(Direction::Ascending) => {
                band.reverse();
                Direction::Descending
            }
            Some(Direction::Descending) => Direction::Ascending,
        };

        for ap in &band {
            path.push(RoutedPoint {
                index: ap.point.index,
                radius: ap.point.radius,
                angle: ap.point.angle,
                direction,
            });
        }
        prev = Some(direction);
    }

    SectorPath { sector: sector_index, points: path }
}

/// Run the full partition → banding → ordering pass for one offset.
///
/// Preconditions (`sectors >= 1`, `band_width > 0`, radii finite and
/// non-negative) are enforced once at [`crate::plan_panel`]; this function
/// assumes them.
pub fn sector_paths(
    points: &[PolarPoint],
    sectors: usize,
    band_width: f64,
    offset: f64,
) -> Vec<SectorPath> {
    assign_sectors(points, sectors, offset)
        .into_iter()
        .enumerate()
        .map(|(i, bucket)| order_sector(i, bucket, band_width))
        .collect()
}
