//! Light/dark palettes and the derivation of secondary colors.
//!
//! Each mode carries eighteen CSS values. Three of them (background, primary
//! text, accent) are the base colors a visitor edits; most of the rest are
//! computed from those by [`derive_colors`]. The two animation colors are
//! edited independently but follow the base colors while they still match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{rgb_triplet, shade, with_alpha};
use crate::error::FolioError;

/// Which palette is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Dark, ThemeMode::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggle(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(FolioError::UnknownMode(other.to_string())),
        }
    }
}

/// Every CSS value of one palette.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub bg_color: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_title: String,
    pub border_color: String,
    pub card_bg: String,
    pub card_bg_hover: String,
    pub accent_color: String,
    pub accent_color_translucent: String,
    pub accent_glow: String,
    pub accent_shadow: String,
    pub accent_hover_bg: String,
    pub scrollbar_track: String,
    pub scrollbar_thumb: String,
    pub scrollbar_thumb_hover: String,
    pub header_bg: String,
    pub vanta_color: String,
    pub vanta_bg_color: String,
}

/// Names one field of [`ThemeColors`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeKey {
    BgColor,
    TextPrimary,
    TextSecondary,
    TextTitle,
    BorderColor,
    CardBg,
    CardBgHover,
    AccentColor,
    AccentColorTranslucent,
    AccentGlow,
    AccentShadow,
    AccentHoverBg,
    ScrollbarTrack,
    ScrollbarThumb,
    ScrollbarThumbHover,
    HeaderBg,
    VantaColor,
    VantaBgColor,
}

impl ThemeKey {
    /// Declaration order; also the order of the injected CSS variables.
    pub const ALL: [ThemeKey; 18] = [
        ThemeKey::BgColor,
        ThemeKey::TextPrimary,
        ThemeKey::TextSecondary,
        ThemeKey::TextTitle,
        ThemeKey::BorderColor,
        ThemeKey::CardBg,
        ThemeKey::CardBgHover,
        ThemeKey::AccentColor,
        ThemeKey::AccentColorTranslucent,
        ThemeKey::AccentGlow,
        ThemeKey::AccentShadow,
        ThemeKey::AccentHoverBg,
        ThemeKey::ScrollbarTrack,
        ThemeKey::ScrollbarThumb,
        ThemeKey::ScrollbarThumbHover,
        ThemeKey::HeaderBg,
        ThemeKey::VantaColor,
        ThemeKey::VantaBgColor,
    ];

    /// Keys shown under "Core Palette" in the customizer.
    pub const BASE: [ThemeKey; 3] = [ThemeKey::BgColor, ThemeKey::TextPrimary, ThemeKey::AccentColor];

    /// Keys shown under "Background Animation" in the customizer.
    pub const ANIMATION: [ThemeKey; 2] = [ThemeKey::VantaColor, ThemeKey::VantaBgColor];

    /// Field name as it appears in the data document.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKey::BgColor => "bgColor",
            ThemeKey::TextPrimary => "textPrimary",
            ThemeKey::TextSecondary => "textSecondary",
            ThemeKey::TextTitle => "textTitle",
            ThemeKey::BorderColor => "borderColor",
            ThemeKey::CardBg => "cardBg",
            ThemeKey::CardBgHover => "cardBgHover",
            ThemeKey::AccentColor => "accentColor",
            ThemeKey::AccentColorTranslucent => "accentColorTranslucent",
            ThemeKey::AccentGlow => "accentGlow",
            ThemeKey::AccentShadow => "accentShadow",
            ThemeKey::AccentHoverBg => "accentHoverBg",
            ThemeKey::ScrollbarTrack => "scrollbarTrack",
            ThemeKey::ScrollbarThumb => "scrollbarThumb",
            ThemeKey::ScrollbarThumbHover => "scrollbarThumbHover",
            ThemeKey::HeaderBg => "headerBg",
            ThemeKey::VantaColor => "vantaColor",
            ThemeKey::VantaBgColor => "vantaBgColor",
        }
    }

    /// `bgColor` -> `--bg-color`
    pub fn css_var(&self) -> String {
        let mut out = String::from("--");
        for c in self.name().chars() {
            if c.is_ascii_uppercase() {
                out.push('-');
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Base keys trigger re-derivation when changed.
    pub fn is_base(&self) -> bool {
        Self::BASE.contains(self)
    }

    /// Customizer label.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeKey::BgColor => "Background",
            ThemeKey::TextPrimary => "Text",
            ThemeKey::AccentColor => "Accent",
            ThemeKey::VantaColor => "Primary Color",
            ThemeKey::VantaBgColor => "Background Color",
            other => other.name(),
        }
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKey {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| FolioError::UnknownThemeKey(s.to_string()))
    }
}

impl ThemeColors {
    pub fn get(&self, key: ThemeKey) -> &str {
        match key {
            ThemeKey::BgColor => &self.bg_color,
            ThemeKey::TextPrimary => &self.text_primary,
            ThemeKey::TextSecondary => &self.text_secondary,
            ThemeKey::TextTitle => &self.text_title,
            ThemeKey::BorderColor => &self.border_color,
            ThemeKey::CardBg => &self.card_bg,
            ThemeKey::CardBgHover => &self.card_bg_hover,
            ThemeKey::AccentColor => &self.accent_color,
            ThemeKey::AccentColorTranslucent => &self.accent_color_translucent,
            ThemeKey::AccentGlow => &self.accent_glow,
            ThemeKey::AccentShadow => &self.accent_shadow,
            ThemeKey::AccentHoverBg => &self.accent_hover_bg,
            ThemeKey::ScrollbarTrack => &self.scrollbar_track,
            ThemeKey::ScrollbarThumb => &self.scrollbar_thumb,
            ThemeKey::ScrollbarThumbHover => &self.scrollbar_thumb_hover,
            ThemeKey::HeaderBg => &self.header_bg,
            ThemeKey::VantaColor => &self.vanta_color,
            ThemeKey::VantaBgColor => &self.vanta_bg_color,
        }
    }

    pub fn set(&mut self, key: ThemeKey, value: impl Into<String>) {
        let slot = match key {
            ThemeKey::BgColor => &mut self.bg_color,
            ThemeKey::TextPrimary => &mut self.text_primary,
            ThemeKey::TextSecondary => &mut self.text_secondary,
            ThemeKey::TextTitle => &mut self.text_title,
            ThemeKey::BorderColor => &mut self.border_color,
            ThemeKey::CardBg => &mut self.card_bg,
            ThemeKey::CardBgHover => &mut self.card_bg_hover,
            ThemeKey::AccentColor => &mut self.accent_color,
            ThemeKey::AccentColorTranslucent => &mut self.accent_color_translucent,
            ThemeKey::AccentGlow => &mut self.accent_glow,
            ThemeKey::AccentShadow => &mut self.accent_shadow,
            ThemeKey::AccentHoverBg => &mut self.accent_hover_bg,
            ThemeKey::ScrollbarTrack => &mut self.scrollbar_track,
            ThemeKey::ScrollbarThumb => &mut self.scrollbar_thumb,
            ThemeKey::ScrollbarThumbHover => &mut self.scrollbar_thumb_hover,
            ThemeKey::HeaderBg => &mut self.header_bg,
            ThemeKey::VantaColor => &mut self.vanta_color,
            ThemeKey::VantaBgColor => &mut self.vanta_bg_color,
        };
        *slot = value.into();
    }

    /// `(key, value)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (ThemeKey, &str)> + '_ {
        ThemeKey::ALL.iter().map(move |k| (*k, self.get(*k)))
    }

    /// Palette with only the base and animation colors set; the rest derived.
    pub fn from_base(mode: ThemeMode, bg: &str, text: &str, accent: &str) -> ThemeColors {
        let base = ThemeColors {
            bg_color: bg.to_string(),
            text_primary: text.to_string(),
            accent_color: accent.to_string(),
            vanta_color: accent.to_string(),
            vanta_bg_color: bg.to_string(),
            ..ThemeColors::default()
        };
        derive_colors(mode, &base)
    }
}

/// Both palettes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub dark: ThemeColors,
    pub light: ThemeColors,
}

impl ThemeConfig {
    pub fn colors(&self, mode: ThemeMode) -> &ThemeColors {
        match mode {
            ThemeMode::Dark => &self.dark,
            ThemeMode::Light => &self.light,
        }
    }

    pub fn colors_mut(&mut self, mode: ThemeMode) -> &mut ThemeColors {
        match mode {
            ThemeMode::Dark => &mut self.dark,
            ThemeMode::Light => &mut self.light,
        }
    }

    /// Apply one customizer edit.
    ///
    /// Base-key edits re-derive the whole mode. The animation colors are
    /// linked to the background and accent only while they still equal them.
    pub fn with_change(&self, mode: ThemeMode, key: ThemeKey, value: &str) -> ThemeConfig {
        let old = self.colors(mode);
        let mut updated = old.clone();
        updated.set(key, value);

        if key.is_base() {
            let mut derived = derive_colors(mode, &updated);
            if old.vanta_bg_color == old.bg_color {
                derived.vanta_bg_color = derived.bg_color.clone();
            }
            if old.vanta_color == old.accent_color {
                derived.vanta_color = derived.accent_color.clone();
            }
            updated = derived;
        }

        let mut next = self.clone();
        *next.colors_mut(mode) = updated;
        next
    }
}

/// Compute the secondary colors of a palette from its three base colors.
///
/// Pure: copies `base` and overwrites every derived field. Animation colors
/// are carried through unchanged.
pub fn derive_colors(mode: ThemeMode, base: &ThemeColors) -> ThemeColors {
    let bg = base.bg_color.as_str();
    let text = base.text_primary.as_str();
    let accent = base.accent_color.as_str();
    let a = rgb_triplet(accent);

    let mut out = base.clone();
    out.accent_color_translucent = with_alpha(accent, 0.5);
    out.accent_shadow = format!("0 4px 14px 0 rgba({}, 0.15)", a);
    out.accent_hover_bg = with_alpha(accent, 0.1);
    out.header_bg = with_alpha(bg, 0.85);

    match mode {
        ThemeMode::Dark => {
            out.text_secondary = shade(text, -0.3);
            out.text_title = shade(text, -0.1);
            out.border_color = shade(bg, 0.4);
            out.card_bg = with_alpha(&shade(bg, 0.15), 0.75);
            out.card_bg_hover = with_alpha(&shade(bg, 0.3), 0.75);
            out.accent_glow = format!("0 0 12px rgba({a}, 0.4), 0 0 28px rgba({a}, 0.2)");
            out.scrollbar_track = bg.to_string();
            out.scrollbar_thumb = shade(bg, 0.4);
            out.scrollbar_thumb_hover = shade(text, -0.4);
        }
        ThemeMode::Light => {
            out.text_secondary = shade(text, 0.2);
            out.text_title = shade(text, -0.3);
            out.border_color = shade(bg, -0.1);
            out.card_bg = shade(bg, 1.0);
            out.card_bg_hover = shade(bg, -0.05);
            out.accent_glow = format!("0 0 12px rgba({a}, 0.2)");
            out.scrollbar_track = shade(bg, -0.1);
            out.scrollbar_thumb = shade(bg, -0.2);
            out.scrollbar_thumb_hover = shade(bg, -0.4);
        }
    }
    out
}

/// Class toggled on the document element while light mode is active.
pub const LIGHT_CLASS: &str = "light";

/// Selector the light palette is scoped to. It sits on `<html>` so the page
/// background and viewport scrollbars pick it up too.
pub const LIGHT_SCOPE: &str = "html.light";

/// Selector the dark palette is scoped to.
pub const DARK_SCOPE: &str = ":root";

fn css_block(selector: &str, colors: &ThemeColors) -> String {
    let mut block = format!("{} {{\n", selector);
    for (key, value) in colors.entries() {
        block.push_str(&format!("    {}: {};\n", key.css_var(), value));
    }
    block.push('}');
    block
}

/// Script that puts [`LIGHT_CLASS`] on the document element for light mode
/// and removes it for dark mode.
pub fn mode_class_script(mode: ThemeMode) -> String {
    format!(
        "document.documentElement.classList.toggle('{}', {});",
        LIGHT_CLASS,
        mode == ThemeMode::Light
    )
}

/// The injected style rules: dark variables at the root, light variables on
/// the light-mode scope.
pub fn stylesheet(config: &ThemeConfig) -> String {
    format!(
        "{}\n{}",
        css_block(DARK_SCOPE, &config.dark),
        css_block(LIGHT_SCOPE, &config.light)
    )
}
