#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::AssistantConfig;
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Portfolio document override, set from command line
static DATA_FILE: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Model connection settings, resolved once at startup
static ASSISTANT: OnceLock<AssistantConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the portfolio document path, if one was given
pub fn get_data_file() -> Option<PathBuf> {
    DATA_FILE.get().cloned().flatten()
}

/// Get the assistant configuration
pub fn get_assistant_config() -> AssistantConfig {
    ASSISTANT.get().cloned().unwrap_or_else(AssistantConfig::from_env)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Folio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio with theme customization and an AI assistant")]
struct Args {
    /// Portfolio data document (JSON). Defaults to the bundled document.
    #[arg(short = 'f', long)]
    data_file: Option<PathBuf>,

    /// Directory for stored preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Language model to use for the assistant
    #[arg(short, long)]
    model: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let assistant = AssistantConfig::from_env().with_model(args.model);

    if assistant.api_key.is_none() {
        tracing::warn!("No GEMINI_API_KEY set; the assistant will be unavailable");
    }

    tracing::info!(
        data_dir = ?data_dir,
        data_file = ?args.data_file,
        model = %assistant.model,
        "Starting Folio"
    );

    let _ = DATA_DIR.set(data_dir);
    let _ = DATA_FILE.set(args.data_file);
    let _ = ASSISTANT.set(assistant);

    let config = Config::new()
        .with_custom_head(theme::custom_head())
        .with_window(
            WindowBuilder::new()
                .with_title("Folio")
                .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
