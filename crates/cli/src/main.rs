//! Wiremap CLI - isometric wireframe terrain rendering

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wiremap_colormap::{render_pixels, ElevationPalette};
use wiremap_core::io::{read_map, MapFile};
use wiremap_pipeline::normalizer::normalize;
use wiremap_pipeline::projector::{project, ProjectParams};
use wiremap_pipeline::rasterizer::{rasterize, RasterizeParams};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "wiremap")]
#[command(author, version, about = "Isometric wireframe terrain rendering", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a map file to a PNG image
    Render {
        /// Input map file
        input: PathBuf,
        /// Output image file
        #[arg(short, long, default_value = "terrain.png")]
        output: PathBuf,
        /// Override the resolution scale factor from the map header
        #[arg(short, long)]
        resolution: Option<f64>,
        /// Override the smoothness divisor from the map header
        #[arg(short, long)]
        smoothness: Option<i32>,
        /// Palette configuration file (TOML)
        #[arg(long)]
        palette: Option<PathBuf>,
        /// Channel intensity added per unit of depth
        #[arg(long)]
        step: Option<f64>,
        /// Depth at which land coloring switches to mountain red
        #[arg(long)]
        mountain_threshold: Option<f64>,
        /// Baseline channel intensity floor
        #[arg(long)]
        min_color: Option<f64>,
    },
    /// Show information about a map file
    Info {
        /// Input map file
        input: PathBuf,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn load_map(path: &PathBuf) -> Result<MapFile> {
    let pb = spinner("Reading map...");
    let map = read_map(path).context("Failed to read map file")?;
    pb.finish_and_clear();
    info!(
        "Input: {} x {} cells",
        map.grid.cols(),
        map.grid.rows()
    );
    Ok(map)
}

fn load_palette(
    path: Option<&PathBuf>,
    step: Option<f64>,
    mountain_threshold: Option<f64>,
    min_color: Option<f64>,
) -> Result<ElevationPalette> {
    let mut palette = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).context("Failed to read palette file")?;
            toml::from_str(&text).context("Failed to parse palette file")?
        }
        None => ElevationPalette::default(),
    };

    if let Some(step) = step {
        palette.step = step;
    }
    if let Some(threshold) = mountain_threshold {
        palette.mountain_threshold = threshold;
    }
    if let Some(min_color) = min_color {
        palette.min_color = min_color;
    }
    Ok(palette)
}

fn done(name: &str, path: &PathBuf, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            output,
            resolution,
            smoothness,
            palette,
            step,
            mountain_threshold,
            min_color,
        } => {
            let map = load_map(&input)?;
            let resolution = resolution.unwrap_or(map.resolution);
            let smoothness = smoothness.unwrap_or(map.smoothness);
            let palette = load_palette(palette.as_ref(), step, mountain_threshold, min_color)?;

            let start = Instant::now();
            let mesh = project(&map.grid, ProjectParams { smoothness })
                .context("Failed to project grid")?;
            let pixels = rasterize(&mesh, RasterizeParams { resolution })
                .context("Failed to rasterize mesh")?;
            let normalized = normalize(pixels).context("Failed to normalize pixels")?;
            info!(
                "Canvas: {} x {}, {} pixel writes",
                normalized.canvas_width(),
                normalized.canvas_height(),
                normalized.pixels.len()
            );
            let canvas = render_pixels(
                &normalized.pixels,
                normalized.canvas_width(),
                normalized.canvas_height(),
                &palette,
            )
            .context("Failed to render canvas")?;
            let elapsed = start.elapsed();

            let pb = spinner("Writing image...");
            let img =
                image::RgbImage::from_raw(canvas.width(), canvas.height(), canvas.into_raw())
                    .context("Canvas buffer size mismatch")?;
            img.save(&output).context("Failed to write image")?;
            pb.finish_and_clear();

            done("Render", &output, elapsed);
        }

        Commands::Info { input } => {
            let map = load_map(&input)?;
            let (rows, cols) = map.grid.shape();
            let stats = map.grid.statistics();

            println!("File: {}", input.display());
            println!("Dimensions: {} x {} ({} cells)", cols, rows, map.grid.len());
            println!("Resolution: {}", map.resolution);
            println!("Smoothness: {}", map.smoothness);
            println!("\nAltitudes:");
            println!("  Min: {}", stats.min);
            println!("  Max: {}", stats.max);
            println!("  Mean: {:.4}", stats.mean);
        }
    }

    Ok(())
}
