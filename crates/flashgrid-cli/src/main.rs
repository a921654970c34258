//! Flashgrid CLI
//!
//! Thin wrapper around flashgrid-core for checking presets without a browser.
//!
//! ## Usage
//!
//! ```bash
//! # How many base-width cards fit
//! flashgrid columns --width 1000
//!
//! # All three presets for a viewport
//! flashgrid presets --width 1280 --padding 32
//!
//! # Same, as JSON
//! flashgrid presets --width 1280 --json
//!
//! # :root block for one density
//! flashgrid css --width 1000 --columns 5
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use flashgrid_core::{
    BasePreset, ColumnPreset, PageConfig, PresetEngine, ScaledPreset, ViewportMetrics,
};
use serde_json::{json, Map, Value};

/// Flashgrid - card grid presets
#[derive(Parser)]
#[command(name = "flashgrid")]
#[command(version = "0.1.0")]
#[command(about = "Flashgrid - responsive card grid presets")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file with base preset overrides
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ViewportArgs {
    /// Viewport width in px (window.innerWidth)
    #[arg(short, long)]
    width: f64,

    /// Left + right body padding in px
    #[arg(short, long, default_value_t = 0.0)]
    padding: f64,
}

impl ViewportArgs {
    fn metrics(&self) -> ViewportMetrics {
        ViewportMetrics::new(self.width, self.padding)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Auto-fit column count at base size
    Columns {
        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Show the 4/5/6 preset table
    Presets {
        #[command(flatten)]
        viewport: ViewportArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the :root block for one density
    Css {
        #[command(flatten)]
        viewport: ViewportArgs,

        /// Cards per row (4, 5 or 6)
        #[arg(short = 'n', long, default_value = "4")]
        columns: ColumnPreset,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_base(config: Option<&PathBuf>) -> Result<BasePreset> {
    match config {
        Some(path) => {
            let config = PageConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            Ok(config.base)
        }
        None => Ok(BasePreset::default()),
    }
}

fn preset_json(preset: &ScaledPreset) -> Value {
    let mut map = Map::new();
    map.insert("factor".to_string(), json!(preset.factor()));
    for (name, value) in preset.declarations() {
        map.insert(name.to_string(), Value::String(value));
    }
    Value::Object(map)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let engine = PresetEngine::new(load_base(cli.config.as_ref())?);

    match cli.command {
        Commands::Columns { viewport } => {
            println!("{}", engine.base_column_count(&viewport.metrics()));
        }

        Commands::Presets { viewport, json } => {
            let metrics = viewport.metrics();
            let base_columns = engine.base_column_count(&metrics);
            let table = engine.compute_dynamic_presets(&metrics);

            if json {
                let mut presets = Map::new();
                for (key, preset) in table.iter() {
                    presets.insert(key.to_string(), preset_json(preset));
                }
                let out = json!({
                    "device_width": metrics.device_width,
                    "body_padding": metrics.body_padding,
                    "base_columns": base_columns,
                    "presets": presets,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!(
                    "Viewport: {}px (padding {}px), auto-fit columns: {}",
                    metrics.device_width, metrics.body_padding, base_columns
                );
                for (key, preset) in table.iter() {
                    println!();
                    println!("Preset {} (factor {:.4})", key, preset.factor());
                    for (name, value) in preset.declarations() {
                        println!("  {:<24} {}", name, value);
                    }
                }
            }
        }

        Commands::Css { viewport, columns } => {
            let table = engine.compute_dynamic_presets(&viewport.metrics());
            print!("{}", table.get(columns).to_css());
        }
    }

    Ok(())
}
