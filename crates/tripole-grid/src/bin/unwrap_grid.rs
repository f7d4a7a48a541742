//! CLI demo for the tripole unwrap.
//!
//! Builds a synthetic tripole-style grid, unwraps it for cyclic plotting and
//! reports seam diagnostics. Useful for eyeballing what a plotting layer
//! will receive without wiring up a dataset.
//!
//! Usage:
//!   cargo run --bin unwrap-grid -- --mesh gx1
//!   cargo run --bin unwrap-grid -- --columns 64 --rows 48 --json

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tripole_grid::{meshes, testdata, unwrap_tripole, MeshDims, SeamCorrectionTable};

#[derive(Parser, Debug)]
#[command(name = "unwrap-grid")]
#[command(about = "Unwrap a synthetic tripole grid and report seam diagnostics")]
struct Args {
    /// Named mesh preset (gx1 or tx0.1); overrides --columns/--rows
    #[arg(short, long)]
    mesh: Option<String>,

    /// Number of grid columns (ni)
    #[arg(long, default_value_t = 64)]
    columns: usize,

    /// Number of grid rows (nj)
    #[arg(long, default_value_t = 48)]
    rows: usize,

    /// Longitude of the first column, degrees in the 0-360 convention
    #[arg(long, default_value_t = 320.0)]
    first_lon: f64,

    /// Mask a continent-like band of columns in the test field
    #[arg(long)]
    masked: bool,

    /// Print the unwrapped coordinate arrays as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let dims = match args.mesh.as_deref() {
        Some("gx1") => meshes::gx1(),
        Some("tx0.1") | Some("tx0_1") => meshes::tx0_1(),
        Some(other) => bail!("unknown mesh preset: {}", other),
        None => MeshDims {
            ni: args.columns,
            nj: args.rows,
        },
    };

    info!(ni = dims.ni, nj = dims.nj, "building synthetic tripole grid");

    let (lon, lat) = testdata::create_tripole_mesh(dims.ni, dims.nj, args.first_lon);
    let field = if args.masked {
        testdata::create_masked_field(dims.ni, dims.nj)
    } else {
        testdata::create_field(dims.ni, dims.nj)
    };

    let unwrapped = unwrap_tripole(&lon, &lat, &field, &SeamCorrectionTable::standard())?;

    if args.json {
        let out = serde_json::json!({
            "shape": { "columns": unwrapped.lon.width, "rows": unwrapped.lon.height },
            "lon": &unwrapped.lon,
            "lat": &unwrapped.lat,
        });
        println!("{}", serde_json::to_string(&out)?);
        return Ok(());
    }

    let cell_width = 360.0 / dims.ni as f64;

    println!("Tripole unwrap");
    println!("==============");
    println!("Source shape:       {} x {}", dims.ni, dims.nj);
    println!(
        "Unwrapped shape:    {} x {}",
        unwrapped.lon.width, unwrapped.lon.height
    );
    println!("Cell width:         {:.4}°", cell_width);
    println!(
        "Max interior step:  {:.4}°",
        unwrapped.max_lon_step(false)
    );
    println!(
        "Max step (closing): {:.4}°",
        unwrapped.max_lon_step(true)
    );

    let row = 0;
    let first = unwrapped.lon.get(0, row).unwrap_or(f64::NAN);
    let last = unwrapped
        .lon
        .get(unwrapped.lon.width - 1, row)
        .unwrap_or(f64::NAN);
    println!(
        "Row 0 seam:         {:.6}° -> {:.6}° (gap {:.6}°)",
        first,
        last,
        last - first
    );
    println!(
        "Valid field cells:  {} of {}",
        unwrapped.field.valid_count(),
        unwrapped.field.data.len()
    );

    Ok(())
}
