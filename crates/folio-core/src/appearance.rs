//! Visitor appearance state: mode, palettes and background effect.
//!
//! Every mutation is written through to [`Preferences`] before it returns,
//! so the next launch starts where the visitor left off.

use crate::color::is_hex_color;
use crate::effects::BackgroundEffect;
use crate::error::FolioError;
use crate::preferences::Preferences;
use crate::theme::{stylesheet, ThemeColors, ThemeConfig, ThemeKey, ThemeMode};

#[derive(Clone)]
pub struct Appearance {
    prefs: Preferences,
    defaults: ThemeConfig,
    config: ThemeConfig,
    mode: ThemeMode,
    effect: BackgroundEffect,
}

impl Appearance {
    /// Restore state from the store. `defaults` come from the data document
    /// and are used whenever no customized palette is stored.
    pub fn load(prefs: Preferences, defaults: ThemeConfig) -> Result<Self, FolioError> {
        let mode = prefs.theme_mode()?;
        let effect = prefs.background_effect()?;
        let config = match prefs.theme_config()? {
            Some(saved) => {
                tracing::debug!("Using customized theme config");
                saved
            }
            None => defaults.clone(),
        };

        Ok(Self {
            prefs,
            defaults,
            config,
            mode,
            effect,
        })
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn effect(&self) -> BackgroundEffect {
        self.effect
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Palette of the active mode.
    pub fn colors(&self) -> &ThemeColors {
        self.config.colors(self.mode)
    }

    /// Whether the palettes differ from the data document's.
    pub fn is_customized(&self) -> bool {
        self.config != self.defaults
    }

    pub fn toggle_mode(&mut self) -> Result<ThemeMode, FolioError> {
        self.set_mode(self.mode.toggle())?;
        Ok(self.mode)
    }

    pub fn set_mode(&mut self, mode: ThemeMode) -> Result<(), FolioError> {
        self.prefs.set_theme_mode(mode)?;
        self.mode = mode;
        tracing::info!(mode = %mode, "Theme mode changed");
        Ok(())
    }

    pub fn set_effect(&mut self, effect: BackgroundEffect) -> Result<(), FolioError> {
        self.prefs.set_background_effect(effect)?;
        self.effect = effect;
        tracing::info!(effect = %effect, "Background effect changed");
        Ok(())
    }

    /// Apply one customizer edit to `mode`'s palette and persist the result.
    ///
    /// `value` must be `#rrggbb`; anything else is refused and nothing changes.
    pub fn set_color(&mut self, mode: ThemeMode, key: ThemeKey, value: &str) -> Result<(), FolioError> {
        if !is_hex_color(value) {
            return Err(FolioError::InvalidColor(value.to_string()));
        }
        let next = self.config.with_change(mode, key, value);
        self.prefs.save_theme_config(&next)?;
        self.config = next;
        tracing::debug!(mode = %mode, key = %key, value, "Theme color changed");
        Ok(())
    }

    /// Back to the data document's palettes; the stored customization is dropped.
    pub fn reset(&mut self) -> Result<(), FolioError> {
        self.prefs.clear_theme_config()?;
        self.config = self.defaults.clone();
        tracing::info!("Theme reset to defaults");
        Ok(())
    }

    /// Style rules to inject for the current palettes.
    pub fn stylesheet(&self) -> String {
        stylesheet(&self.config)
    }
}
