//! Edge case and boundary condition tests
//!
//! These tests verify persisted appearance state survives restarts and that
//! odd stored values or inputs degrade gracefully.

use folio_core::preferences::{EFFECT_KEY, THEME_CONFIG_KEY, THEME_KEY};
use folio_core::{
    Appearance, BackgroundEffect, FolioError, PortfolioData, Preferences, ThemeConfig, ThemeKey,
    ThemeMode,
};
use tempfile::TempDir;

fn defaults() -> ThemeConfig {
    PortfolioData::bundled().unwrap().theme_config
}

fn open(dir: &TempDir) -> Appearance {
    let prefs = Preferences::in_dir(dir.path()).unwrap();
    Appearance::load(prefs, defaults()).unwrap()
}

// ============================================================================
// Persistence Across Restarts
// ============================================================================

/// Every visitor choice is restored on the next launch
#[test]
fn test_choices_survive_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut appearance = open(&dir);
        appearance.set_mode(ThemeMode::Dark).unwrap();
        appearance.set_effect(BackgroundEffect::Waves).unwrap();
        appearance
            .set_color(ThemeMode::Light, ThemeKey::TextPrimary, "#112233")
            .unwrap();
    }

    let restored = open(&dir);
    assert_eq!(restored.mode(), ThemeMode::Dark);
    assert_eq!(restored.effect(), BackgroundEffect::Waves);
    assert_eq!(restored.config().light.text_primary, "#112233");
    assert!(restored.is_customized());
}

/// Reset removes the stored palette so a restart is back to defaults
#[test]
fn test_reset_survives_restart() {
    let dir = TempDir::new().unwrap();
    {
        let mut appearance = open(&dir);
        appearance
            .set_color(ThemeMode::Dark, ThemeKey::BgColor, "#000000")
            .unwrap();
        appearance.reset().unwrap();
    }

    let restored = open(&dir);
    assert!(!restored.is_customized());
    assert_eq!(restored.config().dark.bg_color, defaults().dark.bg_color);
}

/// Reset does not touch the mode or the effect
#[test]
fn test_reset_keeps_mode_and_effect() {
    let dir = TempDir::new().unwrap();
    let mut appearance = open(&dir);
    appearance.set_mode(ThemeMode::Dark).unwrap();
    appearance.set_effect(BackgroundEffect::None).unwrap();
    appearance.reset().unwrap();
    assert_eq!(appearance.mode(), ThemeMode::Dark);
    assert_eq!(appearance.effect(), BackgroundEffect::None);
}

// ============================================================================
// Odd Stored Values
// ============================================================================

/// Values written by something else are tolerated
#[test]
fn test_foreign_values_fall_back() {
    let dir = TempDir::new().unwrap();
    {
        let prefs = Preferences::in_dir(dir.path()).unwrap();
        prefs.set(THEME_KEY, "solarized").unwrap();
        prefs.set(EFFECT_KEY, "").unwrap();
        prefs.set(THEME_CONFIG_KEY, "[]").unwrap();
    }

    let appearance = open(&dir);
    assert_eq!(appearance.mode(), ThemeMode::Light);
    assert_eq!(appearance.effect(), BackgroundEffect::Fog);
    assert_eq!(appearance.config(), &defaults());
}

// ============================================================================
// Odd Inputs
// ============================================================================

/// A color edit that is not hex is refused and leaves nothing behind
#[test]
fn test_non_hex_color_edit_is_refused() {
    let dir = TempDir::new().unwrap();
    let before = defaults();
    {
        let mut appearance = open(&dir);
        let err = appearance
            .set_color(ThemeMode::Dark, ThemeKey::BgColor, "black")
            .unwrap_err();
        assert!(matches!(err, FolioError::InvalidColor(ref v) if v == "black"));
        assert_eq!(appearance.config(), &before);
        assert!(!appearance.is_customized());
    }

    // Nothing was persisted either
    let reopened = open(&dir);
    assert_eq!(reopened.config(), &before);
}

/// Derivation itself tolerates a non-hex base: dependent colors carry the
/// unparsed value instead of failing
#[test]
fn test_non_hex_base_color_derivation() {
    let config = ThemeConfig::default().with_change(ThemeMode::Dark, ThemeKey::BgColor, "black");

    let dark = &config.dark;
    assert_eq!(dark.bg_color, "black");
    assert_eq!(dark.border_color, "black");
    assert_eq!(dark.header_bg, "black");
    // The renderer cannot use it, so the effect is skipped
    assert!(BackgroundEffect::Fog.options(dark).is_none());
}

/// Toggling twice is a no-op on the visible state
#[test]
fn test_double_toggle() {
    let dir = TempDir::new().unwrap();
    let mut appearance = open(&dir);
    let start = appearance.mode();
    appearance.toggle_mode().unwrap();
    appearance.toggle_mode().unwrap();
    assert_eq!(appearance.mode(), start);
}
