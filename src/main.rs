mod cli;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "panelweave", about = "Radial panel placement — spiral points → balanced sectors → serpentine chain → pick-and-place")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate spiral points, balance the sectors, and write CSV / C header
    /// / JSON artifacts.
    Plan {
        /// Number of footprint sites to place.
        #[arg(long, default_value_t = 1200)]
        count: usize,
        /// Component circle diameter in board units.
        #[arg(long, default_value_t = 173.0)]
        diameter: f64,
        /// Number of angular sectors.
        #[arg(long, default_value_t = 6)]
        sectors: usize,
        /// Radial band width for serpentine chunking.
        #[arg(long, default_value_t = 3.8)]
        band_width: f64,
        /// Directory the artifacts are written into.
        #[arg(long, default_value = ".")]
        out_dir: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Plan {
            count,
            diameter,
            sectors,
            band_width,
            out_dir,
        } => cli::plan::run(count, diameter, sectors, band_width, &out_dir),
    }
}
