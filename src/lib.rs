//! PanelWeave — serpentine placement engine for radial LED panels.
//!
//! Takes a cloud of polar points on a disc (typically a sunflower spiral
//! from [`spiral`]), partitions it into angular sectors with equal
//! population, and orders each sector into a non-self-crossing serpentine
//! chain suitable for wiring addressable LEDs. The ordered chain is then
//! mapped into board coordinates per footprint family and exported as
//! pick-and-place CSV and a fixed-point C header.
//!
//! # Pipeline
//!
//! ```text
//! PolarPoints
//!   → Balance search       (offset sweep until sector counts match)
//!       → Sector assign    (angular slices under the candidate offset)
//!       → Radial banding   (fixed-width annuli per sector)
//!       → Serpentine order (angle sort + alternating direction)
//!   → PanelPlan            (paths + directions, JSON-serializable)
//!   → Transform            (per-family board coordinates + rotation)
//!   → Quantize             (int16 fixed-point, overflow-checked)
//!   → Export               (CSV / C header strings)
//! ```

pub mod balance;
pub mod export;
pub mod greedy;
pub mod quantize;
pub mod sectors;
pub mod spiral;
pub mod transform;
pub mod types;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use types::{PanelPlan, PolarPoint};

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("sector count must be at least 1")]
    NoSectors,
    #[error("band width must be positive, got {0}")]
    BandWidth(f64),
    #[error("offset step must be positive, got {0}")]
    OffsetStep(f64),
    #[error("point {index} has invalid radius {radius} (must be finite and non-negative)")]
    BadRadius { index: usize, radius: f64 },
}

/// Planner parameters. Defaults match the reference panel: six sectors,
/// 3.8-unit bands, a 0.01-radian balance sweep bounded at one full turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Number of angular sectors.
    #[serde(default = "default_sectors")]
    pub sectors: usize,
    /// Radial band width for the serpentine chunking.
    #[serde(default = "default_band_width")]
    pub band_width: f64,
    /// Offset increment for the balance sweep, in radians.
    #[serde(default = "default_offset_step")]
    pub offset_step: f64,
    /// Sweep bound: offsets past this are not tried and the last state is
    /// accepted unbalanced.
    #[serde(default = "default_scan_bound")]
    pub scan_bound: f64,
}

fn default_sectors() -> usize { 6 }
fn default_band_width() -> f64 { 3.8 }
fn default_offset_step() -> f64 { 0.01 }
fn default_scan_bound() -> f64 { std::f64::consts::TAU }

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            sectors: default_sectors(),
            band_width: default_band_width(),
            offset_step: default_offset_step(),
            scan_bound: default_scan_bound(),
        }
    }
}

/// Compute a placement plan for the given points.
///
/// This is the main entry point: it validates the inputs, sweeps the
/// angular offset until the sectors hold equal point counts (or the sweep
/// bound is hit), and returns the winning offset's serpentine paths with
/// every point's traversal direction.
///
/// An unbalanceable input is not an error — the plan comes back with
/// `balanced: false` and the actual counts, and the caller decides.
pub fn plan_panel(points: &[PolarPoint], config: &PlanConfig) -> Result<PanelPlan, PlanError> {
    if config.sectors == 0 {
        return Err(PlanError::NoSectors);
    }
    if !(config.band_width > 0.0) {
        return Err(PlanError::BandWidth(config.band_width));
    }
    if !(config.offset_step > 0.0) {
        return Err(PlanError::OffsetStep(config.offset_step));
    }
    for p in points {
        if !p.radius.is_finite() || p.radius < 0.0 {
            return Err(PlanError::BadRadius { index: p.index, radius: p.radius });
        }
    }

    let outcome = balance::balance_offset(
        points,
        config.sectors,
        config.band_width,
        config.offset_step,
        config.scan_bound,
    );

    let mut directions = vec![None; points.len()];
    for path in &outcome.paths {
        for p in &path.points {
            directions[p.index] = Some(p.direction);
        }
    }

    Ok(PanelPlan {
        version: 1,
        offset: outcome.offset,
        balanced: outcome.balanced,
        sector_counts: outcome.paths.iter().map(|p| p.points.len()).collect(),
        paths: outcome.paths,
        directions,
    })
}

/// Serialize a plan to pretty JSON.
pub fn to_json(plan: &PanelPlan) -> String {
    serde_json::to_string_pretty(plan).expect("plan serialization should not fail")
}
