//! lanemark CLI — command-line interface for lane boundary detection.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "lanemark")]
#[command(about = "Detect lane boundary segments in road images (Canny edges + probabilistic Hough)")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[allow(clippy::large_enum_variant)]
enum Commands {
    /// Detect lane segments in an image.
    Detect(CliDetectArgs),

    /// Print the built-in tuning presets.
    Presets,
}

#[derive(Debug, Clone, Args)]
struct CliDetectArgs {
    /// Path to the input image.
    #[arg(long)]
    image: PathBuf,

    /// Path to write the annotated frame (PNG).
    #[arg(long)]
    out: PathBuf,

    /// Path to write the Canny edge map (PNG).
    #[arg(long)]
    edges: Option<PathBuf>,

    /// Path to write the detection summary (JSON).
    #[arg(long)]
    report: Option<PathBuf>,

    /// Apply a named preset to the edge and line values. Takes precedence
    /// over the individual flags below; the region flags stay in effect.
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Lower Canny hysteresis threshold.
    #[arg(long, default_value_t = 50)]
    canny_low: i32,

    /// Upper Canny hysteresis threshold.
    #[arg(long, default_value_t = 150)]
    canny_high: i32,

    /// Accumulator votes required to accept a line.
    #[arg(long, default_value_t = 50)]
    hough_threshold: i32,

    /// Minimum accepted segment extent in pixels.
    #[arg(long, default_value_t = 50)]
    min_length: i32,

    /// Largest bridged gap along a line in pixels.
    #[arg(long, default_value_t = 10)]
    max_gap: i32,

    /// Top of the region of interest, percent of frame height.
    #[arg(long, default_value_t = 50)]
    roi_top: i32,

    /// Bottom of the region of interest, percent of frame height.
    #[arg(long, default_value_t = 100)]
    roi_bottom: i32,
}

impl CliDetectArgs {
    fn to_params(&self) -> lanemark::DetectionParameters {
        let mut params = lanemark::DetectionParameters {
            canny_low: self.canny_low,
            canny_high: self.canny_high,
            hough_threshold: self.hough_threshold,
            hough_min_length: self.min_length,
            hough_max_gap: self.max_gap,
            roi_top: self.roi_top,
            roi_bottom: self.roi_bottom,
        };
        if let Some(preset) = self.preset {
            preset.to_core().apply_to(&mut params);
        }
        params.clamped()
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    Conservative,
    Balanced,
    Aggressive,
}

impl PresetArg {
    fn to_core(self) -> lanemark::Preset {
        match self {
            Self::Conservative => lanemark::Preset::Conservative,
            Self::Balanced => lanemark::Preset::Balanced,
            Self::Aggressive => lanemark::Preset::Aggressive,
        }
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect(args) => run_detect(&args),
        Commands::Presets => run_presets(),
    }
}

// ── detect ─────────────────────────────────────────────────────────────

fn run_detect(args: &CliDetectArgs) -> CliResult<()> {
    tracing::info!("Loading image: {}", args.image.display());

    let frame = lanemark::load_frame(&args.image).map_err(|e| -> CliError {
        format!("Failed to load image {}: {}", args.image.display(), e).into()
    })?;
    let (w, h) = frame.dimensions();
    tracing::info!("Frame size: {}x{}", w, h);

    let params = args.to_params();
    let result = lanemark::detect(&frame, &params)?;

    let stats = result.stats();
    match stats.mean_length_px {
        Some(mean) => {
            tracing::info!("Detected {} segments (mean length {:.1}px)", stats.count, mean)
        }
        None => tracing::info!("Detected 0 segments"),
    }

    result.annotated.save(&args.out).map_err(|e| -> CliError {
        format!("Failed to write {}: {}", args.out.display(), e).into()
    })?;
    tracing::info!("Annotated frame written to {}", args.out.display());

    if let Some(ref edges_path) = args.edges {
        result.edge_map.save(edges_path).map_err(|e| -> CliError {
            format!("Failed to write {}: {}", edges_path.display(), e).into()
        })?;
        tracing::info!("Edge map written to {}", edges_path.display());
    }

    if let Some(ref report_path) = args.report {
        let json = serde_json::to_string_pretty(&result.summary())?;
        std::fs::write(report_path, &json)?;
        tracing::info!("Report written to {}", report_path.display());
    }

    Ok(())
}

// ── presets ────────────────────────────────────────────────────────────

fn run_presets() -> CliResult<()> {
    println!("lanemark tuning presets");
    for preset in lanemark::Preset::ALL {
        let (canny_low, canny_high, threshold, min_length, max_gap) = preset.bundle();
        println!(
            "  {:<12} canny {}..{}, votes {}, min length {}px, max gap {}px",
            preset.name(),
            canny_low,
            canny_high,
            threshold,
            min_length,
            max_gap
        );
    }
    Ok(())
}
