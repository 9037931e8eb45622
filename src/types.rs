//! Output types for the placement pipeline.
//!
//! All plan-level types derive [`serde::Serialize`] and [`serde::Deserialize`]
//! so a finished plan can be written to JSON and consumed by external tools
//! (panel visualizers, board review scripts) without recomputing anything.

use serde::{Deserialize, Serialize};

/// A footprint site in polar coordinates.
///
/// `index` is assigned once at ingestion and is the point's identity for the
/// rest of the pipeline — direction lookups and quantized IDs always go
/// through it, never through float equality on `(radius, angle)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    /// Ingestion-order identity, `0..n`.
    pub index: usize,
    /// Distance from panel center. Must be finite and non-negative.
    pub radius: f64,
    /// Angle in radians. Any finite value; normalization happens during
    /// sector assignment.
    pub angle: f64,
}

impl PolarPoint {
    pub fn new(index: usize, radius: f64, angle: f64) -> Self {
        Self { index, radius, angle }
    }

    /// Cartesian position of the bare point (no footprint offset applied).
    pub fn to_cartesian(&self) -> (f64, f64) {
        (self.radius * self.angle.cos(), self.radius * self.angle.sin())
    }
}

/// Traversal direction assigned to one radial band.
///
/// `Ascending` bands are visited in increasing adjusted-angle order,
/// `Descending` bands in decreasing order. Consecutive bands of a sector
/// strictly alternate, which is what makes the chain serpentine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// The opposite direction, used for band-to-band alternation.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A point whose place in the chain has been resolved: it knows its sector
/// traversal direction. Raw `radius`/`angle` are carried through so the
/// transform stage needs no side lookups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoutedPoint {
    pub index: usize,
    pub radius: f64,
    pub angle: f64,
    pub direction: Direction,
}

/// One sector's serpentine traversal, innermost band first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorPath {
    /// Sector index in `[0, sectors)`.
    pub sector: usize,
    /// Points in visiting order.
    pub points: Vec<RoutedPoint>,
}

/// Complete placement plan — the output of [`crate::plan_panel`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelPlan {
    /// Format version (currently 1).
    pub version: u32,
    /// Angular offset (radians) chosen by the balance search.
    pub offset: f64,
    /// Whether the balance search found an offset with equal sector counts.
    /// `false` means the scan hit its bound and the counts below are uneven.
    pub balanced: bool,
    /// Point count per sector, indexed by sector.
    pub sector_counts: Vec<usize>,
    /// Per-sector serpentine paths in ascending sector order.
    pub paths: Vec<SectorPath>,
    /// Traversal direction per input point, indexed by [`PolarPoint::index`].
    /// Every entry is `Some` after a successful plan.
    pub directions: Vec<Option<Direction>>,
}

impl PanelPlan {
    /// Total number of placed points across all sectors.
    pub fn point_count(&self) -> usize {
        self.paths.iter().map(|p| p.points.len()).sum()
    }

    /// Direction assigned to the point with the given ingestion index.
    pub fn direction_of(&self, index: usize) -> Option<Direction> {
        self.directions.get(index).copied().flatten()
    }
}

/// A named footprint family: how one physical component type sits relative
/// to its placement point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootprintFamily {
    /// Family name, used for artifact file names (e.g. `"led"`).
    pub name: String,
    /// Reference designator prefix for part numbering (e.g. `"D"`).
    pub part_prefix: String,
    /// Radial shift of the footprint center from the placement point.
    pub radial_offset: f64,
    /// Fixed rotation added on top of the chain-derived angle, in degrees.
    pub rotation_offset: f64,
}

impl FootprintFamily {
    /// Addressable LED package, centered on the point, rotated +90°.
    pub fn led() -> Self {
        Self {
            name: "led".into(),
            part_prefix: "D".into(),
            radial_offset: 0.0,
            rotation_offset: 90.0,
        }
    }

    /// Decoupling MLCC, pulled 1.6 units inward, rotated +270°.
    pub fn mlcc() -> Self {
        Self {
            name: "mlcc".into(),
            part_prefix: "C".into(),
            radial_offset: -1.6,
            rotation_offset: 270.0,
        }
    }
}

/// A footprint placed in board coordinates for one family at one point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Ingestion index of the underlying point.
    pub index: usize,
    /// Board X, family offset applied.
    pub x: f64,
    /// Board Y, family offset applied. Y grows downward (EDA convention),
    /// hence the sign flip relative to math coordinates.
    pub y: f64,
    /// Footprint rotation in degrees, family offset applied.
    pub rotation_degrees: f64,
    /// Sector index this record was emitted from.
    pub sector: usize,
    /// Label `<sector letter><slot>`, e.g. `"A0"`, `"B17"`. The slot counts
    /// emission order within the sector's chain, not radial order.
    pub sector_label: String,
}
