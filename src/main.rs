use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gfx2sg::models::{CliOverrides, ConvertOptions, ConverterConfig, RecomputeSetting, CONFIG_ENV};
use gfx2sg::services::ConversionService;
use sg_tiles::hardware::{MAX_HEIGHT, MAX_WIDTH, PALETTE_SIZE};
use sg_tiles::HardwarePalette;

#[derive(Parser)]
#[command(name = "gfx2sg")]
#[command(about = "Convert images into tile bitmap and attribute streams for 16-color tile displays")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert PNG images into `<stem> (tiles).bin` and `<stem> (palette).bin`
    Convert {
        /// Input PNG files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Palette index (1-15) to encode as transparent
        #[arg(short, long, allow_negative_numbers = true)]
        transparent: Option<i64>,

        /// Also write `<stem> (preview).png` showing the encoded result
        #[arg(short, long)]
        preview: bool,

        /// Report color substitutions, clashes and duplicate tiles
        #[arg(short, long)]
        verbose: bool,

        /// YAML config file (defaults to $GFX2SG_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Line color recomputation for sprite tiles
        #[arg(long, value_enum)]
        recompute: Option<RecomputeSetting>,

        /// Print a JSON report on stdout
        #[arg(long)]
        json: bool,
    },
    /// Print the hardware palette
    Palette,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            files,
            transparent,
            preview,
            verbose,
            config,
            recompute,
            json,
        }) => run_convert_command(
            &files,
            CliOverrides {
                transparent_index: transparent,
                verbose,
                preview,
                recompute,
            },
            config,
            json,
        ),
        Some(Commands::Palette) => {
            run_palette_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert each input file, continuing past failures
fn run_convert_command(
    files: &[PathBuf],
    overrides: CliOverrides,
    config_path: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => ConverterConfig::load(&path)?,
        None => ConverterConfig::load_from_env()?.unwrap_or_default(),
    };

    // Rejects a bad transparent index before any input is opened
    let options = ConvertOptions::resolve(&config, overrides)?;

    let default_filter = if options.diagnostics {
        "gfx2sg=info"
    } else {
        "gfx2sg=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    tracing::debug!(?options, "Resolved options");

    let service = ConversionService::new(options);
    let batch = service.convert_batch(files);

    if json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else {
        for report in &batch.converted {
            println!(
                "Converted {} ({} tiles, {} bytes per stream)",
                report.input.display(),
                report.tile_count,
                report.tile_count * 8
            );
        }
    }

    if !batch.is_success() {
        anyhow::bail!("{} of {} files failed", batch.failed.len(), batch.total());
    }

    Ok(())
}

fn run_palette_command() {
    let palette = HardwarePalette::SG;
    for (idx, color) in palette.colors().iter().enumerate() {
        println!("{idx:>2}  {color}  {}", palette.name(idx as u8));
    }
}

fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV).ok();

    println!("gfx2sg v{VERSION}");
    println!("Tile bitmap and attribute encoder for 16-color tile displays\n");

    println!("Hardware:");
    println!("  Max size: {MAX_WIDTH}x{MAX_HEIGHT}, multiples of 8");
    println!("  Palette:  {PALETTE_SIZE} colors, 2 per tile line");

    println!("\nEnvironment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  gfx2sg convert   Convert PNG images to tile streams");
    println!("  gfx2sg palette   Print the hardware palette");
    println!("\nRun 'gfx2sg --help' for more details.");
}
