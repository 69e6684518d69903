//! # ImageTrace CLI
//!
//! Traces a black-and-white image into closed polylines, fits them to a
//! sketch width and optionally writes SVG, JSON and sketch-line renderings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use imagetrace::config::{load_config, TraceConfig};
use imagetrace::export::{polylines_to_svg, sketch_to_json, to_json, write_text};
use imagetrace::raster::load_grid;
use imagetrace::sketch::fit_to_width;
use imagetrace::trace::trace_grid;

/// Command-line interface for imagetrace
#[derive(Parser, Debug)]
#[command(name = "imagetrace")]
#[command(version)]
#[command(about = "Trace black-and-white images into closed pixel-edge polylines")]
struct Cli {
    /// Image to trace (PNG, JPEG, BMP, GIF, TIFF)
    input: PathBuf,

    /// JSON config file; command-line flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Channel-mean level below which a pixel is traced (0-255)
    #[arg(long)]
    threshold: Option<u8>,

    /// Trace light regions instead of dark ones
    #[arg(long)]
    invert: bool,

    /// Width of the fitted sketch
    #[arg(long)]
    target_width: Option<f64>,

    /// Write an SVG rendering to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Write the traced polylines as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the fitted sketch lines (scaled, Y up) as JSON to this path
    #[arg(long)]
    sketch: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("Tracing failed: {e:#}");
        std::process::exit(1);
    }
}

/// Merge the config file (if any) with command-line overrides.
fn resolve_config(cli: &Cli) -> Result<TraceConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => TraceConfig::default(),
    };

    if let Some(level) = cli.threshold {
        config.threshold = level;
    }
    if cli.invert {
        config.invert = true;
    }
    if let Some(width) = cli.target_width {
        config.target_width = width;
    }

    config.validate()?;
    Ok(config)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    let grid = load_grid(&cli.input, config.threshold())
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    info!(
        "{}: {}x{} pixels, {} traced",
        display_name(&cli.input),
        grid.width(),
        grid.height(),
        grid.foreground_count()
    );

    let polylines = trace_grid(&grid)?;
    let sketch = fit_to_width(&polylines, config.target_width)?;
    info!(
        "sketch: {} lines at {:.6} units per pixel",
        sketch.lines.len(),
        sketch.scale
    );

    if let Some(path) = &cli.svg {
        let svg = polylines_to_svg(&polylines, grid.width(), grid.height(), &config.svg);
        write_text(path, &svg)?;
        info!("wrote {}", path.display());
    }

    if let Some(path) = &cli.json {
        let json = to_json(&polylines, grid.width(), grid.height())?;
        write_text(path, &json)?;
        info!("wrote {}", path.display());
    }

    if let Some(path) = &cli.sketch {
        write_text(path, &sketch_to_json(&sketch)?)?;
        info!("wrote {}", path.display());
    }

    println!(
        "Traced {} polylines from {}.",
        polylines.len(),
        display_name(&cli.input)
    );
    Ok(())
}
