//! Folio CLI
//!
//! Thin wrapper around folio-core functions for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Check a portfolio document
//! folio validate portfolio-data.json
//!
//! # Derive a full palette from three base colors
//! folio palette --mode dark --bg "#0a192f" --text "#ccd6f6" --accent "#64ffda"
//!
//! # Print the stylesheet the app would inject
//! folio css
//!
//! # Inspect or change stored preferences
//! folio theme show
//! folio theme toggle
//! folio theme color dark accentColor "#ff6b6b"
//! folio effect set waves
//!
//! # Ask the portfolio assistant (needs GEMINI_API_KEY)
//! folio ask "What testing frameworks does Avery use?"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::color::is_hex_color;
use folio_core::{
    Appearance, AssistantConfig, BackgroundEffect, ChatSession, GeminiClient, PortfolioData,
    Preferences, ThemeColors, ThemeKey, ThemeMode,
};

/// Folio - personal portfolio tooling
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - portfolio content, theme and assistant tooling")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Preference directory (default: <data dir>/folio)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Portfolio document used when a command takes no FILE (default: bundled)
    #[arg(short = 'f', long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a portfolio document and report content issues
    Validate {
        /// Document to check
        file: Option<PathBuf>,
    },

    /// Print the palette derived from three base colors
    Palette {
        /// light or dark
        #[arg(short, long, default_value = "dark")]
        mode: String,
        /// Background color (#rrggbb)
        #[arg(long)]
        bg: String,
        /// Primary text color (#rrggbb)
        #[arg(long)]
        text: String,
        /// Accent color (#rrggbb)
        #[arg(long)]
        accent: String,
    },

    /// Print the theme stylesheet for the stored (or default) palettes
    Css {
        /// Document supplying the default palettes
        file: Option<PathBuf>,
    },

    /// Theme mode and palette preferences
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Background effect preference
    Effect {
        #[command(subcommand)]
        action: EffectAction,
    },

    /// Ask the portfolio assistant one question
    Ask {
        /// The question
        question: String,
        /// Document the assistant answers from
        file: Option<PathBuf>,
        /// Model to use (default: FOLIO_MODEL or gemini-2.5-flash)
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the stored mode, effect and whether palettes are customized
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the mode explicitly
    Set {
        /// light or dark
        mode: String,
    },
    /// Change one palette color, as the customizer would
    Color {
        /// Palette to edit (light or dark)
        mode: String,
        /// Color key, e.g. bgColor, accentColor, vantaColor
        key: String,
        /// New value (#rrggbb)
        value: String,
    },
    /// Drop customized palettes
    Reset,
}

#[derive(Subcommand)]
enum EffectAction {
    /// List known effects; `*` marks the stored one
    List,
    /// Show the stored effect
    Show,
    /// Store a new effect
    Set {
        /// Effect name, e.g. fog, net, waves, dots, none
        name: String,
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

/// Get the default data directory (<platform data dir>/folio)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Load a document from `file`, or the bundled one.
fn load_data(file: Option<&PathBuf>) -> Result<PortfolioData> {
    match file {
        Some(path) => PortfolioData::load(path).with_context(|| format!("Failed to load {}", path.display())),
        None => PortfolioData::bundled().context("Failed to parse bundled portfolio data"),
    }
}

fn parse_mode(s: &str) -> Result<ThemeMode> {
    s.parse::<ThemeMode>()
        .map_err(|_| anyhow::anyhow!("Invalid mode '{}'. Must be one of: light, dark", s))
}

fn parse_hex(label: &str, value: &str) -> Result<()> {
    if !is_hex_color(value) {
        anyhow::bail!("Invalid {} color '{}'. Expected #rrggbb", label, value);
    }
    Ok(())
}

fn print_palette(colors: &ThemeColors) {
    for (key, value) in colors.entries() {
        println!("{}: {}", key, value);
    }
}

fn open_appearance(data_dir: &Path, data: &PortfolioData) -> Result<Appearance> {
    let prefs = Preferences::in_dir(data_dir)
        .with_context(|| format!("Failed to open preferences in {}", data_dir.display()))?;
    Ok(Appearance::load(prefs, data.theme_config.clone())?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let data_file = cli.data_file;

    match cli.command {
        Commands::Validate { file } => {
            let file = file.or(data_file);
            let data = load_data(file.as_ref())?;
            let issues = data.validate();

            println!("Portfolio: {}", data.personal_info.name);
            println!("  Title: {}", data.personal_info.title);
            println!("  Experience: {}", data.experience.len());
            println!(
                "  Skills: {} in {} categories",
                data.skills.iter().map(|c| c.skills.len()).sum::<usize>(),
                data.skills.len()
            );
            println!("  Projects: {}", data.projects.len());
            println!("  Certifications: {}", data.certifications.len());
            println!();

            if issues.is_empty() {
                println!("No issues found.");
            } else {
                println!("{} issue(s):", issues.len());
                for issue in &issues {
                    println!("  - {}", issue);
                }
            }
        }

        Commands::Palette {
            mode,
            bg,
            text,
            accent,
        } => {
            let mode = parse_mode(&mode)?;
            parse_hex("background", &bg)?;
            parse_hex("text", &text)?;
            parse_hex("accent", &accent)?;

            print_palette(&ThemeColors::from_base(mode, &bg, &text, &accent));
        }

        Commands::Css { file } => {
            let data = load_data(file.or(data_file).as_ref())?;
            let appearance = open_appearance(&data_dir, &data)?;
            println!("{}", appearance.stylesheet());
        }

        Commands::Theme { action } => {
            let data = load_data(data_file.as_ref())?;
            let mut appearance = open_appearance(&data_dir, &data)?;

            match action {
                ThemeAction::Show => {
                    println!("Mode: {}", appearance.mode());
                    println!("Effect: {}", appearance.effect());
                    println!(
                        "Customized: {}",
                        if appearance.is_customized() { "yes" } else { "no" }
                    );
                    println!();
                    print_palette(appearance.colors());
                }

                ThemeAction::Toggle => {
                    let mode = appearance.toggle_mode()?;
                    println!("Theme: {}", mode);
                }

                ThemeAction::Set { mode } => {
                    let mode = parse_mode(&mode)?;
                    appearance.set_mode(mode)?;
                    println!("Theme: {}", mode);
                }

                ThemeAction::Color { mode, key, value } => {
                    let mode = parse_mode(&mode)?;
                    let key: ThemeKey = key.parse()?;

                    appearance.set_color(mode, key, &value)?;
                    println!("Updated {} palette:", mode);
                    print_palette(appearance.config().colors(mode));
                }

                ThemeAction::Reset => {
                    appearance.reset()?;
                    println!("Theme reset to defaults.");
                }
            }
        }

        Commands::Effect { action } => {
            let prefs = Preferences::in_dir(&data_dir)
                .with_context(|| format!("Failed to open preferences in {}", data_dir.display()))?;

            match action {
                EffectAction::List => {
                    let current = prefs.background_effect()?;
                    for effect in BackgroundEffect::ALL {
                        let marker = if effect == current { "*" } else { " " };
                        let note = if BackgroundEffect::SELECTABLE.contains(&effect) {
                            ""
                        } else {
                            " (not offered in the customizer)"
                        };
                        println!("{} {}{}", marker, effect, note);
                    }
                }

                EffectAction::Show => {
                    println!("Effect: {}", prefs.background_effect()?);
                }

                EffectAction::Set { name } => {
                    let effect: BackgroundEffect = name.parse()?;
                    prefs.set_background_effect(effect)?;
                    println!("Effect: {}", effect);
                }
            }
        }

        Commands::Ask {
            question,
            file,
            model,
        } => {
            if question.trim().is_empty() {
                anyhow::bail!("Question is empty; nothing to ask");
            }

            let data = load_data(file.or(data_file).as_ref())?;
            let config = AssistantConfig::from_env().with_model(model);
            let client = GeminiClient::from_config(&config)
                .context("GEMINI_API_KEY is not set; the assistant is unavailable")?;

            tracing::info!(model = %client.model(), "Asking assistant");

            let mut session = ChatSession::new(Arc::new(client), &data)?;
            let reply = session.send(&question).await?;
            println!("{}", reply);
        }
    }

    Ok(())
}
