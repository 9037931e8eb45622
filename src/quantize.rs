//! Fixed-point encoding of placement records for the firmware table.
//!
//! Coordinates are stored as `int16_t` hundredths of a unit and angles as
//! tenths of a degree, which caps representable coordinates at ±327.67
//! units. Out-of-range values are a hard error, never wrapped or clamped.

use crate::types::{PlacementRecord, PolarPoint};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coordinates are stored ×100 (0.01-unit precision).
pub const COORDINATE_SCALE: i32 = 100;
/// Rotations and angles are stored ×10 (0.1-degree precision).
pub const ROTATION_SCALE: i32 = 10;

#[derive(Error, Debug)]
pub enum QuantizeError {
    #[error("quantized {field} value {value} does not fit int16 range [-32768, 32767]")]
    Overflow { field: &'static str, value: f64 },
}

/// One row of the firmware coordinate table, fully fixed-point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelCoord {
    /// Emission-order ID, 0-based — the LED chain index.
    pub id: i16,
    /// Board X ×[`COORDINATE_SCALE`].
    pub x: i16,
    /// Board Y ×[`COORDINATE_SCALE`].
    pub y: i16,
    /// Footprint rotation in 0.1° units.
    pub rotation: i16,
    /// Polar radius ×[`COORDINATE_SCALE`].
    pub r: i16,
    /// Polar angle in 0.1° units.
    pub theta_deg: i16,
    /// Sector label carried through for header comments.
    pub label: String,
}

fn scale_to_i16(value: f64, scale: i32, field: &'static str) -> Result<i16, QuantizeError> {
    let scaled = (value * f64::from(scale)).round();
    if scaled >= f64::from(i16::MIN) && scaled <= f64::from(i16::MAX) {
        Ok(scaled as i16)
    } else {
        Err(QuantizeError::Overflow { field, value: scaled })
    }
}

/// Quantize one family's placement records into firmware table rows.
///
/// `points` is the ingestion-order point list; each record's polar source is
/// looked up by its index. IDs restate emission order, matching the order
/// the chain is electrically wired in.
pub fn quantize_records(
    records: &[PlacementRecord],
    points: &[PolarPoint],
) -> Result<Vec<PanelCoord>, QuantizeError> {
    records
        .iter()
        .enumerate()
        .map(|(id, rec)| {
            let src = points[rec.index];
            Ok(PanelCoord {
                id: scale_to_i16(id as f64, 1, "id")?,
                x: scale_to_i16(rec.x, COORDINATE_SCALE, "x")?,
                y: scale_to_i16(rec.y, COORDINATE_SCALE, "y")?,
                rotation: scale_to_i16(rec.rotation_degrees, ROTATION_SCALE, "rotation")?,
                r: scale_to_i16(src.radius, COORDINATE_SCALE, "r")?,
                theta_deg: scale_to_i16(src.angle.to_degrees(), ROTATION_SCALE, "theta")?,
                label: rec.sector_label.clone(),
            })
        })
        .collect()
}
