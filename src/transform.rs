//! Chain order → board coordinates for one footprint family.
//!
//! Position and rotation deliberately use different angles: the footprint
//! center sits on the point's raw polar ray, while the rotation follows the
//! chain — a point visited on an `Ascending` sweep faces the opposite way
//! (+180°) from one visited on a `Descending` sweep, so pads line up along
//! the traversal. Y is negated for board coordinates (Y grows downward).

use crate::types::{Direction, FootprintFamily, PanelPlan, PlacementRecord};
use std::f64::consts::PI;

/// The rotation-driving angle for a routed point: flipped by π on ascending
/// sweeps, untouched on descending ones.
pub fn effective_angle(angle: f64, direction: Direction) -> f64 {
    match direction {
        Direction::Ascending => angle + PI,
        Direction::Descending => angle,
    }
}

/// Place one family at every point of the plan.
///
/// Records are emitted sector by sector in ascending sector order, following
/// each sector's chain, so downstream part numbering matches the traversal.
/// Sector labels are `<letter><slot>` with the letter derived from the
/// sector index (`A` onward) and the slot counting chain order.
pub fn place_family(plan: &PanelPlan, family: &FootprintFamily) -> Vec<PlacementRecord> {
    let mut records = Vec::with_capacity(plan.point_count());

    for path in &plan.paths {
        let letter = sector_letter(path.sector);
        for (slot, p) in path.points.iter().enumerate() {
            let rotation = effective_angle(p.angle, p.direction).to_degrees();
            let reach = p.radius + family.radial_offset;

            records.push(PlacementRecord {
                index: p.index,
                x: reach * p.angle.cos(),
                y: -(reach * p.angle.sin()),
                rotation_degrees: rotation + family.rotation_offset,
                sector: path.sector,
                sector_label: format!("{letter}{slot}"),
            });
        }
    }

    records
}

/// Sector letter: `A` for sector 0, `B` for 1, … Panels use single-digit
/// sector counts in practice; past `Z` the label wraps through ASCII.
fn sector_letter(sector: usize) -> char {
    (b'A' + (sector % 26) as u8) as char
}
