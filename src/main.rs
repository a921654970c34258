#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use flashgrid_core::config::CONFIG_FILE_NAME;
use flashgrid_core::{ColumnPreset, FlipPolicy, PageConfig};

/// Global page config, set from command line
static CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page config (loaded at startup or default)
pub fn get_config() -> PageConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Default config location (<config dir>/flashgrid/config.json)
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flashgrid")
        .join(CONFIG_FILE_NAME)
}

/// Flashgrid - flashcard grid
#[derive(Parser, Debug)]
#[command(name = "flashgrid-desktop")]
#[command(about = "Flashgrid - flashcards in a 4, 5 or 6 per row grid")]
struct Args {
    /// Config file (default: <config dir>/flashgrid/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cards per row on load (4, 5 or 6)
    #[arg(short = 'n', long)]
    columns: Option<ColumnPreset>,

    /// Overlapping clicks: restart (default) or overlap
    #[arg(long)]
    flip_policy: Option<FlipPolicy>,

    /// Window width
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // An explicit --config must load; the default location may be absent
    let mut config = match &args.config {
        Some(path) => PageConfig::load(path),
        None => PageConfig::load_or_default(&default_config_path()),
    }
    .unwrap_or_else(|err| {
        tracing::error!("Failed to load config: {}", err);
        std::process::exit(1);
    });

    if let Some(columns) = args.columns {
        config.initial_columns = columns;
    }
    if let Some(policy) = args.flip_policy {
        config.flip.policy = policy;
    }

    tracing::info!(
        "Starting with {} per row, flip policy {}",
        config.initial_columns,
        config.flip.policy
    );

    // Store config globally
    let _ = CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Flashgrid")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
