//! `panelweave plan` — generate, balance, and write placement artifacts.

use panelweave::export::{to_coordinate_header, to_placement_csv};
use panelweave::quantize::quantize_records;
use panelweave::transform::place_family;
use panelweave::types::FootprintFamily;
use panelweave::{plan_panel, spiral, to_json, PlanConfig};
use std::path::Path;
use std::process;

pub fn run(count: usize, diameter: f64, sectors: usize, band_width: f64, out_dir: &str) {
    let config = PlanConfig {
        sectors,
        band_width,
        ..PlanConfig::default()
    };

    let points = spiral::spiral_points(count, diameter / 2.0, spiral::golden_angle());
    eprintln!("Spiral: {count} points, radius {:.1}", diameter / 2.0);

    let plan = plan_panel(&points, &config).unwrap_or_else(|e| {
        eprintln!("Plan error: {e}");
        process::exit(1);
    });

    eprintln!(
        "Offset: {:.2} rad ({}), sector counts {:?}",
        plan.offset,
        if plan.balanced { "balanced" } else { "UNBALANCED" },
        plan.sector_counts,
    );

    let out_dir = Path::new(out_dir);
    for family in [FootprintFamily::led(), FootprintFamily::mlcc()] {
        let records = place_family(&plan, &family);
        let csv_path = out_dir.join(format!("units_{}.csv", family.name));
        write_file(&csv_path, &to_placement_csv(&records, &family));

        // Only the LED chain goes into firmware; the caps have no wiring order.
        if family.name == "led" {
            let coords = quantize_records(&records, &points).unwrap_or_else(|e| {
                eprintln!("Quantization error: {e}");
                process::exit(1);
            });
            write_file(&out_dir.join("panel_coordinates.h"), &to_coordinate_header(&coords));
        }
    }

    write_file(&out_dir.join("panel_plan.json"), &to_json(&plan));
}

fn write_file(path: &Path, contents: &str) {
    std::fs::write(path, contents).unwrap_or_else(|e| {
        eprintln!("Error writing {}: {e}", path.display());
        process::exit(1);
    });
    eprintln!("Wrote {}", path.display());
}
