//! Angular-offset search for equal sector population.
//!
//! Sector membership is a discontinuous function of the offset, so the scan
//! recomputes the full partition from scratch at every step — there is no
//! incremental update worth having at panel sizes. The scan is a plain
//! linear sweep with a hard iteration cap, so it always terminates.

use crate::sectors::sector_paths;
use crate::types::{PolarPoint, SectorPath};

/// Result of the offset scan: the chosen offset with its sector state.
/// Intermediate states are discarded.
#[derive(Debug, Clone)]
pub struct BalanceOutcome {
    pub offset: f64,
    pub balanced: bool,
    pub paths: Vec<SectorPath>,
}

fn counts_equal(paths: &[SectorPath]) -> bool {
    let first = paths[0].points.len();
    paths.iter().all(|p| p.points.len() == first)
}

/// Sweep the angular offset from 0 in `step` increments until every sector
/// holds the same number of points, or until the offset exceeds `bound`.
///
/// Offsets are computed as `i * step` rather than accumulated, so the sweep
/// position carries no floating-point drift. On a failed sweep the last
/// offset actually evaluated is accepted with `balanced: false` — an uneven
/// partition is the caller's call to keep or reject, not an error here.
///
/// Iteration count is capped at `⌈bound / step⌉ + 1` regardless of input.
pub fn balance_offset(
    points: &[PolarPoint],
    sectors: usize,
    band_width: f64,
    step: f64,
    bound: f64,
) -> BalanceOutcome {
    let max_steps = (bound / step).ceil() as usize + 1;

    let mut last: Option<BalanceOutcome> = None;
    for i in 0..max_steps {
        let offset = i as f64 * step;
        if offset > bound {
            break;
        }
        let paths = sector_paths(points, sectors, band_width, offset);
        if counts_equal(&paths) {
            return BalanceOutcome { offset, balanced: true, paths };
        }
        last = Some(BalanceOutcome { offset, balanced: false, paths });
    }

    // Unreachable only if bound < 0; the offset 0 pass always runs otherwise.
    last.unwrap_or_else(|| BalanceOutcome {
        offset: 0.0,
        balanced: false,
        paths: sector_paths(points, sectors, band_width, 0.0),
    })
}
