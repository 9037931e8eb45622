//! Integration tests for the placement pipeline.
//!
//! Tests the full chain: spiral points → balanced plan → family transform →
//! quantization → CSV / C header export.

use panelweave::export::{to_coordinate_header, to_placement_csv};
use panelweave::quantize::{quantize_records, COORDINATE_SCALE, ROTATION_SCALE};
use panelweave::transform::{effective_angle, place_family};
use panelweave::types::{Direction, FootprintFamily, PolarPoint};
use panelweave::{plan_panel, spiral, to_json, PlanConfig, PlanError};
use std::f64::consts::{PI, TAU};

/// A small but realistic panel: 120 spiral points on an 86.5-unit disc.
fn reference_points() -> Vec<PolarPoint> {
    spiral::spiral_points(120, 86.5, spiral::golden_angle())
}

fn reference_config() -> PlanConfig {
    PlanConfig::default()
}

// ─── Full pipeline tests ────────────────────────────────────────────────────

#[test]
fn spiral_produces_valid_plan() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();

    assert_eq!(plan.version, 1);
    assert_eq!(plan.paths.len(), 6);
    assert_eq!(
        plan.point_count(),
        points.len(),
        "plan should place every input point exactly once"
    );
    assert_eq!(plan.sector_counts.len(), 6);
    assert_eq!(plan.sector_counts.iter().sum::<usize>(), points.len());
    if plan.balanced {
        let first = plan.sector_counts[0];
        assert!(plan.sector_counts.iter().all(|&c| c == first));
    }
}

#[test]
fn every_point_lands_in_exactly_one_sector() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();

    let mut seen = vec![0usize; points.len()];
    for path in &plan.paths {
        for p in &path.points {
            seen[p.index] += 1;
        }
    }
    assert!(seen.iter().all(|&c| c == 1), "partition must be total and exclusive");
}

#[test]
fn direction_map_covers_every_point() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();

    assert_eq!(plan.directions.len(), points.len());
    for (i, d) in plan.directions.iter().enumerate() {
        assert!(d.is_some(), "point {i} has no direction");
        assert_eq!(plan.direction_of(i), *d);
    }
}

#[test]
fn band_directions_alternate_within_each_sector() {
    let points = reference_points();
    let config = reference_config();
    let plan = plan_panel(&points, &config).unwrap();

    for path in &plan.paths {
        // Recover the band sequence from the path: the chain visits bands in
        // increasing key order, so key changes delimit bands.
        let mut band_dirs: Vec<(usize, Direction)> = Vec::new();
        for p in &path.points {
            let key = (p.radius / config.band_width).floor() as usize;
            match band_dirs.last() {
                Some(&(last_key, _)) if last_key == key => {}
                _ => band_dirs.push((key, p.direction)),
            }
        }
        for w in band_dirs.windows(2) {
            assert!(w[0].0 < w[1].0, "bands must appear in increasing key order");
            assert_eq!(
                w[1].1,
                w[0].1.flipped(),
                "consecutive bands in sector {} must alternate",
                path.sector
            );
        }
        // A band has one direction: every point in it agrees.
        for p in &path.points {
            let key = (p.radius / config.band_width).floor() as usize;
            let dir = band_dirs.iter().find(|(k, _)| *k == key).map(|(_, d)| *d);
            assert_eq!(Some(p.direction), dir);
        }
    }
}

#[test]
fn two_sector_scenario_matches_reference_behavior() {
    let points = vec![
        PolarPoint::new(0, 5.0, 0.0),
        PolarPoint::new(1, 15.0, 0.1),
        PolarPoint::new(2, 5.0, PI),
        PolarPoint::new(3, 15.0, PI + 0.1),
    ];
    let config = PlanConfig { sectors: 2, band_width: 10.0, ..PlanConfig::default() };
    let plan = plan_panel(&points, &config).unwrap();

    assert!(plan.balanced);
    assert_eq!(plan.offset, 0.0);
    assert_eq!(plan.sector_counts, vec![2, 2]);

    let s0: Vec<usize> = plan.paths[0].points.iter().map(|p| p.index).collect();
    assert_eq!(s0, vec![0, 1]);
    assert_eq!(plan.paths[0].points[0].direction, Direction::Ascending);
    assert_eq!(plan.paths[0].points[1].direction, Direction::Descending);
}

#[test]
fn empty_input_balances_immediately() {
    let plan = plan_panel(&[], &reference_config()).unwrap();
    assert!(plan.balanced);
    assert_eq!(plan.offset, 0.0);
    assert!(plan.paths.iter().all(|p| p.points.is_empty()));
    assert!(plan.directions.is_empty());
}

#[test]
fn unbalanceable_input_terminates_unbalanced() {
    // Seven points into six sectors can never split evenly.
    let points = spiral::spiral_points(7, 40.0, spiral::golden_angle());
    let plan = plan_panel(&points, &reference_config()).unwrap();
    assert!(!plan.balanced);
    assert!(plan.offset <= TAU);
    assert_eq!(plan.point_count(), 7);
}

// ─── Precondition tests ─────────────────────────────────────────────────────

#[test]
fn zero_sectors_is_rejected() {
    let config = PlanConfig { sectors: 0, ..PlanConfig::default() };
    assert!(matches!(plan_panel(&[], &config), Err(PlanError::NoSectors)));
}

#[test]
fn non_positive_band_width_is_rejected() {
    let config = PlanConfig { band_width: 0.0, ..PlanConfig::default() };
    assert!(matches!(plan_panel(&[], &config), Err(PlanError::BandWidth(_))));
}

#[test]
fn negative_radius_is_rejected() {
    let points = vec![PolarPoint::new(0, -1.0, 0.0)];
    let err = plan_panel(&points, &reference_config()).unwrap_err();
    assert!(matches!(err, PlanError::BadRadius { index: 0, .. }));
}

// ─── Transform tests ────────────────────────────────────────────────────────

#[test]
fn rotation_recovers_the_chain_angle() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();
    let family = FootprintFamily::led();
    let records = place_family(&plan, &family);

    assert_eq!(records.len(), points.len());
    for rec in &records {
        let direction = plan.direction_of(rec.index).unwrap();
        let expected = effective_angle(points[rec.index].angle, direction).to_degrees();
        let recovered = rec.rotation_degrees - family.rotation_offset;
        let delta = (recovered - expected).rem_euclid(360.0);
        assert!(
            delta < 1e-9 || delta > 360.0 - 1e-9,
            "rotation should invert to the chain angle (got delta {delta})"
        );
    }
}

#[test]
fn position_uses_raw_angle_with_family_offset() {
    let points = vec![PolarPoint::new(0, 10.0, 0.0), PolarPoint::new(1, 10.0, PI)];
    let config = PlanConfig { sectors: 2, band_width: 20.0, ..PlanConfig::default() };
    let plan = plan_panel(&points, &config).unwrap();

    let records = place_family(&plan, &FootprintFamily::mlcc());
    let rec = records.iter().find(|r| r.index == 0).unwrap();
    // MLCC pulls 1.6 units inward: x = (10 - 1.6)·cos(0), y = -(10 - 1.6)·sin(0).
    assert!((rec.x - 8.4).abs() < 1e-12);
    assert!(rec.y.abs() < 1e-12);
}

#[test]
fn sector_labels_count_emission_order() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();
    let records = place_family(&plan, &FootprintFamily::led());

    for (sector, path) in plan.paths.iter().enumerate() {
        let letter = (b'A' + sector as u8) as char;
        let labels: Vec<String> = records
            .iter()
            .filter(|r| r.sector == sector)
            .map(|r| r.sector_label.clone())
            .collect();
        let expected: Vec<String> =
            (0..path.points.len()).map(|i| format!("{letter}{i}")).collect();
        assert_eq!(labels, expected);
    }
}

// ─── Quantization tests ─────────────────────────────────────────────────────

#[test]
fn quantized_table_roundtrips_within_half_step() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();
    let records = place_family(&plan, &FootprintFamily::led());
    let coords = quantize_records(&records, &points).unwrap();

    assert_eq!(coords.len(), records.len());
    for (rec, c) in records.iter().zip(&coords) {
        let x = f64::from(c.x) / f64::from(COORDINATE_SCALE);
        let rot = f64::from(c.rotation) / f64::from(ROTATION_SCALE);
        assert!((x - rec.x).abs() <= 0.5 / f64::from(COORDINATE_SCALE) + 1e-9);
        assert!((rot - rec.rotation_degrees).abs() <= 0.5 / f64::from(ROTATION_SCALE) + 1e-9);
    }
    // IDs restate emission order.
    for (i, c) in coords.iter().enumerate() {
        assert_eq!(c.id as usize, i);
    }
}

#[test]
fn oversized_panel_overflows_quantization() {
    // Radius 400 puts x past the int16 coordinate range (±327.67).
    let points = vec![PolarPoint::new(0, 400.0, 0.0)];
    let config = PlanConfig { sectors: 1, ..PlanConfig::default() };
    let plan = plan_panel(&points, &config).unwrap();
    let records = place_family(&plan, &FootprintFamily::led());
    assert!(quantize_records(&records, &points).is_err());
}

// ─── Export tests ───────────────────────────────────────────────────────────

#[test]
fn csv_has_header_and_numbered_parts() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();
    let family = FootprintFamily::led();
    let records = place_family(&plan, &family);
    let csv = to_placement_csv(&records, &family);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "ID,Part Number,x,y,rotation,sector");
    assert_eq!(lines.len(), records.len() + 1);
    assert!(lines[1].starts_with("1,D1,"));
    assert!(lines[2].starts_with("2,D2,"));
    assert!(lines[1].ends_with(",A0"));
}

#[test]
fn mlcc_csv_uses_capacitor_prefix() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();
    let family = FootprintFamily::mlcc();
    let records = place_family(&plan, &family);
    let csv = to_placement_csv(&records, &family);
    assert!(csv.lines().nth(1).unwrap().starts_with("1,C1,"));
}

#[test]
fn c_header_is_self_contained() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();
    let records = place_family(&plan, &FootprintFamily::led());
    let coords = quantize_records(&records, &points).unwrap();
    let header = to_coordinate_header(&coords);

    assert!(header.starts_with("#ifndef PANEL_COORDINATES_H"));
    assert!(header.ends_with("#endif // PANEL_COORDINATES_H\n"));
    assert!(header.contains(&format!("#define PANEL_COORD_COUNT {}", coords.len())));
    assert!(header.contains("#define COORDINATE_SCALE 100"));
    assert!(header.contains("#define ROTATION_SCALE 10"));
    assert!(header.contains("typedef struct {"));
    assert!(header.contains("} panel_coord_t;"));
    assert!(header.contains("static const panel_coord_t panel_coords[PANEL_COORD_COUNT]"));
    assert!(header.contains("panel_coord_get"));
    // One table row per coordinate, each tagged with its sector label.
    assert_eq!(header.matches("// A0").count(), 1);
}

#[test]
fn empty_header_still_compiles_shape() {
    let header = to_coordinate_header(&[]);
    assert!(header.contains("#define PANEL_COORD_COUNT 0"));
    assert!(!header.contains("// Data ranges:"));
}

// ─── JSON output tests ──────────────────────────────────────────────────────

#[test]
fn json_roundtrips() {
    let points = reference_points();
    let plan = plan_panel(&points, &reference_config()).unwrap();
    let json = to_json(&plan);

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should parse");
    assert_eq!(parsed["version"], 1);
    assert!(parsed["paths"].is_array());
    assert!(parsed["directions"].is_array());
    assert!(parsed["sector_counts"].is_array());
    assert_eq!(parsed["paths"].as_array().unwrap().len(), 6);
}

#[test]
fn json_directions_use_lowercase_names() {
    let points = vec![PolarPoint::new(0, 5.0, 0.1), PolarPoint::new(1, 5.0, PI + 0.1)];
    let config = PlanConfig { sectors: 2, band_width: 10.0, ..PlanConfig::default() };
    let plan = plan_panel(&points, &config).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&to_json(&plan)).unwrap();
    assert_eq!(parsed["directions"][0], "ascending");
}
