//! Pick-and-place CSV and firmware C header emitters.
//!
//! Both emitters build plain strings with [`std::fmt::Write`]; writing them
//! to disk is the CLI's job. The CSV feeds board assembly tooling, the
//! header is compiled straight into the panel firmware so it can map chain
//! IDs back to physical positions.

use crate::quantize::{PanelCoord, COORDINATE_SCALE, ROTATION_SCALE};
use crate::types::{FootprintFamily, PlacementRecord};
use std::fmt::Write;

/// Render one family's placement records as a pick-and-place CSV.
///
/// Columns: `ID, Part Number, x, y, rotation, sector`. IDs count from 1 and
/// part numbers prepend the family's designator prefix (`D1`, `C2`, …).
pub fn to_placement_csv(records: &[PlacementRecord], family: &FootprintFamily) -> String {
    let mut out = String::new();
    out.push_str("ID,Part Number,x,y,rotation,sector\n");

    for (i, rec) in records.iter().enumerate() {
        let id = i + 1;
        let _ = writeln!(
            out,
            "{id},{prefix}{id},{x},{y},{rot},{label}",
            prefix = family.part_prefix,
            x = rec.x,
            y = rec.y,
            rot = rec.rotation_degrees,
            label = rec.sector_label,
        );
    }

    out
}

/// Render the quantized coordinate table as a self-contained C header.
///
/// The header carries the scale constants alongside the data so the
/// firmware can invert the quantization, plus bounds-checked lookup
/// helpers and a range summary for review.
pub fn to_coordinate_header(coords: &[PanelCoord]) -> String {
    let mut out = String::new();

    out.push_str("#ifndef PANEL_COORDINATES_H\n");
    out.push_str("#define PANEL_COORDINATES_H\n\n");
    out.push_str("#include <stdint.h>\n");
    out.push_str("#include <stddef.h>\n\n");
    out.push_str("// Panel coordinate table (fixed-point)\n");
    out.push_str("// Generated by panelweave - do not edit by hand\n");
    out.push_str("// Coordinates in 0.01-unit steps, angles in 0.1-degree steps\n");
    out.push_str("//\n");

    if let Some(ranges) = Ranges::of(coords) {
        out.push_str("// Data ranges:\n");
        let _ = writeln!(
            out,
            "//   id: 0 ~ {} (total: {} sites)",
            coords.len() - 1,
            coords.len()
        );
        let _ = writeln!(
            out,
            "//   x: {} ~ {} ({:.2} ~ {:.2} units)",
            ranges.x.0,
            ranges.x.1,
            f64::from(ranges.x.0) / f64::from(COORDINATE_SCALE),
            f64::from(ranges.x.1) / f64::from(COORDINATE_SCALE),
        );
        let _ = writeln!(
            out,
            "//   y: {} ~ {} ({:.2} ~ {:.2} units)",
            ranges.y.0,
            ranges.y.1,
            f64::from(ranges.y.0) / f64::from(COORDINATE_SCALE),
            f64::from(ranges.y.1) / f64::from(COORDINATE_SCALE),
        );
        let _ = writeln!(
            out,
            "//   r: {} ~ {} ({:.2} ~ {:.2} units)",
            ranges.r.0,
            ranges.r.1,
            f64::from(ranges.r.0) / f64::from(COORDINATE_SCALE),
            f64::from(ranges.r.1) / f64::from(COORDINATE_SCALE),
        );
        let _ = writeln!(
            out,
            "//   theta: {} ~ {} ({:.1} ~ {:.1} deg)",
            ranges.theta.0,
            ranges.theta.1,
            f64::from(ranges.theta.0) / f64::from(ROTATION_SCALE),
            f64::from(ranges.theta.1) / f64::from(ROTATION_SCALE),
        );
        out.push_str("//\n");
    }

    out.push_str("// real value = int16_t value / scale; int16_t value = real * scale\n\n");

    let _ = writeln!(out, "#define PANEL_COORD_COUNT {}", coords.len());
    let _ = writeln!(
        out,
        "#define COORDINATE_SCALE {COORDINATE_SCALE}  // 0.01-unit steps"
    );
    let _ = writeln!(
        out,
        "#define ROTATION_SCALE {ROTATION_SCALE}     // 0.1-degree steps\n"
    );

    out.push_str("typedef struct {\n");
    out.push_str("    int16_t id;\n");
    out.push_str("    int16_t x;          // 0.01-unit steps\n");
    out.push_str("    int16_t y;          // 0.01-unit steps\n");
    out.push_str("    int16_t r;          // 0.01-unit steps\n");
    out.push_str("    int16_t theta_deg;  // 0.1-degree steps\n");
    out.push_str("} panel_coord_t;\n\n");

    out.push_str("static const panel_coord_t panel_coords[PANEL_COORD_COUNT] = {\n");
    for (i, c) in coords.iter().enumerate() {
        let comma = if i + 1 < coords.len() { "," } else { "" };
        let _ = writeln!(
            out,
            "    {{ {:3}, {:6}, {:6}, {:6}, {:5} }}{comma}  // {}",
            c.id, c.x, c.y, c.r, c.theta_deg, c.label,
        );
    }
    out.push_str("};\n\n");

    out.push_str("#define COORD_TO_FLOAT(coord) ((float)(coord) / COORDINATE_SCALE)\n");
    out.push_str("#define ROTATION_TO_FLOAT(rot) ((float)(rot) / ROTATION_SCALE)\n");
    out.push_str("#define FLOAT_TO_COORD(val) ((int16_t)((val) * COORDINATE_SCALE))\n");
    out.push_str("#define FLOAT_TO_ROTATION(val) ((int16_t)((val) * ROTATION_SCALE))\n\n");

    out.push_str("static inline const panel_coord_t* panel_coord_get(int16_t id) {\n");
    out.push_str("    if (id < 0 || id >= PANEL_COORD_COUNT) {\n");
    out.push_str("        return NULL;\n");
    out.push_str("    }\n");
    out.push_str("    return &panel_coords[id];\n");
    out.push_str("}\n\n");

    out.push_str("static inline int16_t panel_coord_count(void) {\n");
    out.push_str("    return PANEL_COORD_COUNT;\n");
    out.push_str("}\n\n");

    out.push_str("#endif // PANEL_COORDINATES_H\n");

    out
}

/// Min/max of each quantized column, for the header's review comment.
struct Ranges {
    x: (i16, i16),
    y: (i16, i16),
    r: (i16, i16),
    theta: (i16, i16),
}

impl Ranges {
    fn of(coords: &[PanelCoord]) -> Option<Self> {
        let first = coords.first()?;
        let mut ranges = Ranges {
            x: (first.x, first.x),
            y: (first.y, first.y),
            r: (first.r, first.r),
            theta: (first.theta_deg, first.theta_deg),
        };
        for c in coords {
            ranges.x = (ranges.x.0.min(c.x), ranges.x.1.max(c.x));
            ranges.y = (ranges.y.0.min(c.y), ranges.y.1.max(c.y));
            ranges.r = (ranges.r.0.min(c.r), ranges.r.1.max(c.r));
            ranges.theta = (ranges.theta.0.min(c.theta_deg), ranges.theta.1.max(c.theta_deg));
        }
        Some(ranges)
    }
}
