//! Folio Core Library
//!
//! Content, theming and assistant logic for a personal portfolio.
//!
//! ## Overview
//!
//! Folio renders biographical content from a static data document, lets
//! visitors restyle the page (light/dark palettes, animated background), and
//! answers questions about the portfolio through a hosted language model.
//! This crate holds everything that is not presentation:
//!
//! - **content**: the data document model and its validation
//! - **color / theme**: hex arithmetic and derived-palette generation
//! - **effects**: background animation options
//! - **preferences / appearance**: persisted visitor choices
//! - **assistant**: the model client and conversation state
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{Appearance, PortfolioData, Preferences, ThemeKey, ThemeMode};
//!
//! let data = PortfolioData::bundled()?;
//! let prefs = Preferences::in_dir("/tmp/folio")?;
//! let mut appearance = Appearance::load(prefs, data.theme_config.clone())?;
//!
//! appearance.set_color(ThemeMode::Dark, ThemeKey::AccentColor, "#ff8800")?;
//! println!("{}", appearance.stylesheet());
//! ```

pub mod appearance;
pub mod assistant;
pub mod color;
pub mod content;
pub mod effects;
pub mod error;
pub mod preferences;
pub mod theme;

// Re-exports
pub use appearance::Appearance;
pub use assistant::{
    AssistantConfig, ChatMessage, ChatRole, ChatSession, GeminiClient, LanguageModel, Transcript,
};
pub use color::Rgb;
pub use content::{
    CertificationItem, ContactInfo, ContentIssue, ExperienceItem, PersonalInfo, PortfolioData,
    Project, Section, SkillCategory, SkillIcon, SkillItem,
};
pub use effects::BackgroundEffect;
pub use error::{FolioError, FolioResult};
pub use preferences::Preferences;
pub use theme::{derive_colors, stylesheet, ThemeColors, ThemeConfig, ThemeKey, ThemeMode};
