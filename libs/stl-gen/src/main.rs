//! `stl-gen`: write procedural models as ASCII STL.
//!
//! # Commands
//!
//! - `stl-gen brownian` - random-walk plate
//! - `stl-gen shower-ring` - split shower-curtain ring
//!
//! Output goes to stdout unless `--output` is given. `--report` writes a
//! JSON summary of the facet count, bounds and any diagnostics.
//! Set `RUST_LOG=info` to see what was generated.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::constants::{
    BROWNIAN_DX, BROWNIAN_DY, BROWNIAN_DZ, BROWNIAN_HEIGHT, BROWNIAN_SEED, BROWNIAN_THICKNESS,
    BROWNIAN_WIDTH, RING_CLEARANCE, RING_FRAGMENTS, RING_GAP, RING_ROD_DIAMETER,
    RING_STRIP_WIDTH, RING_THICKNESS,
};
use stl_gen::{brownian_plate, shower_ring, BrownianParams, Model, ShowerRingParams};

/// Procedural STL generator
#[derive(Parser)]
#[command(name = "stl-gen")]
#[command(about = "Generate printable solids as ASCII STL", long_about = None)]
#[command(version)]
struct Cli {
    /// Write the STL to this file instead of stdout
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    /// Write a JSON summary of the written solid to this file
    #[arg(long, global = true)]
    report: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Thin plate with a random-walk surface
    Brownian(BrownianArgs),

    /// Split ring that clips around a curtain rod
    ShowerRing(ShowerRingArgs),
}

#[derive(Args)]
struct BrownianArgs {
    /// Random walk seed
    #[arg(long, default_value_t = BROWNIAN_SEED)]
    seed: u64,

    /// Plate width along X (mm)
    #[arg(long, default_value_t = BROWNIAN_WIDTH)]
    width: f64,

    /// Column spacing (mm)
    #[arg(long, default_value_t = BROWNIAN_DX)]
    dx: f64,

    /// Largest height step between rows (mm)
    #[arg(long, default_value_t = BROWNIAN_DY)]
    dy: f64,

    /// Plate height along Z (mm)
    #[arg(long, default_value_t = BROWNIAN_HEIGHT)]
    height: f64,

    /// Row spacing (mm)
    #[arg(long, default_value_t = BROWNIAN_DZ)]
    dz: f64,

    /// Plate thickness (mm)
    #[arg(long, default_value_t = BROWNIAN_THICKNESS)]
    thickness: f64,
}

impl From<BrownianArgs> for BrownianParams {
    fn from(args: BrownianArgs) -> Self {
        Self {
            seed: args.seed,
            width: args.width,
            dx: args.dx,
            dy: args.dy,
            height: args.height,
            dz: args.dz,
            thickness: args.thickness,
        }
    }
}

#[derive(Args)]
struct ShowerRingArgs {
    /// Diameter of the curtain rod (mm)
    #[arg(long, default_value_t = RING_ROD_DIAMETER)]
    rod_diameter: f64,

    /// Radial width of the ring (mm)
    #[arg(long, default_value_t = RING_STRIP_WIDTH)]
    strip_width: f64,

    /// Opening left in the ring (radians)
    #[arg(long, default_value_t = RING_GAP)]
    gap: f64,

    /// Sheet thickness (mm)
    #[arg(long, default_value_t = RING_THICKNESS)]
    thickness: f64,

    /// Arc resolution, segments per full turn
    #[arg(long, default_value_t = RING_FRAGMENTS)]
    fragments: u32,

    /// Play between tab and slot (mm)
    #[arg(long, default_value_t = RING_CLEARANCE)]
    clearance: f64,
}

impl From<ShowerRingArgs> for ShowerRingParams {
    fn from(args: ShowerRingArgs) -> Self {
        Self {
            rod_diameter: args.rod_diameter,
            strip_width: args.strip_width,
            gap: args.gap,
            thickness: args.thickness,
            fragments: args.fragments,
            clearance: args.clearance,
            ..Self::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let model = match cli.command {
        Commands::Brownian(args) => brownian_plate(&args.into())?,
        Commands::ShowerRing(args) => shower_ring(&args.into())?,
    };
    write(&model, cli.output.as_deref(), cli.report.as_deref())
}

fn write(model: &Model, output: Option<&Path>, report: Option<&Path>) -> Result<()> {
    let summary = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            model.write_stl(BufWriter::new(file))?
        }
        None => model.write_stl(BufWriter::new(io::stdout().lock()))?,
    };

    log::info!(
        "wrote solid {} with {} facets ({} warnings, {} errors)",
        summary.name,
        summary.facets,
        summary.diagnostics.warning_count(),
        summary.diagnostics.error_count()
    );

    if let Some(path) = report {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
