//! Animated background effects.
//!
//! The renderer itself is a third-party WebGL library living in the page; this
//! module only decides which effect runs and with which options, and emits
//! the snippets that start and stop it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::color::Rgb;
use crate::error::FolioError;
use crate::theme::ThemeColors;

/// Global holding the live renderer instance.
const INSTANCE_GLOBAL: &str = "window.__folioBackground";

/// DOM id of the element the renderer draws into.
pub const CONTAINER_ID: &str = "folio-background";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BackgroundEffect {
    None,
    Net,
    Waves,
    Dots,
    #[default]
    Fog,
    Clouds,
    Clouds2,
    Globe,
    Birds,
    Cells,
    Trunk,
    Topology,
    Halo,
    Rings,
    Ripple,
}

impl BackgroundEffect {
    pub const ALL: [BackgroundEffect; 15] = [
        BackgroundEffect::None,
        BackgroundEffect::Net,
        BackgroundEffect::Waves,
        BackgroundEffect::Dots,
        BackgroundEffect::Fog,
        BackgroundEffect::Clouds,
        BackgroundEffect::Clouds2,
        BackgroundEffect::Globe,
        BackgroundEffect::Birds,
        BackgroundEffect::Cells,
        BackgroundEffect::Trunk,
        BackgroundEffect::Topology,
        BackgroundEffect::Halo,
        BackgroundEffect::Rings,
        BackgroundEffect::Ripple,
    ];

    /// Effects offered in the customizer dropdown.
    pub const SELECTABLE: [BackgroundEffect; 5] = [
        BackgroundEffect::None,
        BackgroundEffect::Fog,
        BackgroundEffect::Net,
        BackgroundEffect::Waves,
        BackgroundEffect::Dots,
    ];

    /// Upper-case name; also the renderer's constructor name.
    pub fn name(&self) -> &'static str {
        match self {
            BackgroundEffect::None => "NONE",
            BackgroundEffect::Net => "NET",
            BackgroundEffect::Waves => "WAVES",
            BackgroundEffect::Dots => "DOTS",
            BackgroundEffect::Fog => "FOG",
            BackgroundEffect::Clouds => "CLOUDS",
            BackgroundEffect::Clouds2 => "CLOUDS2",
            BackgroundEffect::Globe => "GLOBE",
            BackgroundEffect::Birds => "BIRDS",
            BackgroundEffect::Cells => "CELLS",
            BackgroundEffect::Trunk => "TRUNK",
            BackgroundEffect::Topology => "TOPOLOGY",
            BackgroundEffect::Halo => "HALO",
            BackgroundEffect::Rings => "RINGS",
            BackgroundEffect::Ripple => "RIPPLE",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, BackgroundEffect::None)
    }

    /// Renderer options for this effect under the given palette.
    ///
    /// Returns `None` for [`BackgroundEffect::None`], or when a color this
    /// effect uses is not a hex color. Colors an effect ignores are not checked.
    pub fn options(&self, colors: &ThemeColors) -> Option<Map<String, Value>> {
        let hex = |value: &str| Rgb::parse_hex(value).map(Rgb::to_u32);
        let color = || hex(colors.vanta_color.as_str());
        let background = || hex(colors.vanta_bg_color.as_str());
        let accent = || hex(colors.accent_color.as_str());

        let specific = match self {
            BackgroundEffect::None => return None,
            BackgroundEffect::Net => json!({
                "color": color()?, "backgroundColor": background()?,
                "points": 10.0, "maxDistance": 22.0, "spacing": 16.0,
            }),
            BackgroundEffect::Waves => json!({
                "color": color()?, "backgroundColor": background()?,
                "shininess": 30.0, "waveHeight": 15.0, "waveSpeed": 0.75, "zoom": 0.85,
            }),
            BackgroundEffect::Dots => json!({
                "color": color()?, "color2": accent()?, "backgroundColor": background()?,
                "size": 3, "spacing": 30.0,
            }),
            BackgroundEffect::Fog => json!({
                "highlightColor": accent()?, "lowlightColor": color()?, "baseColor": background()?,
                "blurFactor": 0.6, "speed": 1.2, "zoom": 0.8,
            }),
            BackgroundEffect::Clouds => json!({
                "skyColor": background()?, "cloudColor": color()?, "cloudShadowColor": accent()?,
                "sunColor": 0xffffff, "sunGlareColor": 0xffffff, "sunLightColor": 0xffffff,
                "speed": 1.0,
            }),
            BackgroundEffect::Clouds2 => json!({
                "backgroundColor": background()?, "color1": color()?, "color2": accent()?, "speed": 1.0,
            }),
            BackgroundEffect::Globe => json!({
                "color": color()?, "color2": accent()?, "backgroundColor": background()?, "size": 1.0,
            }),
            BackgroundEffect::Birds => json!({
                "color1": color()?, "color2": accent()?, "backgroundColor": background()?,
                "birdSize": 1.0, "wingSpan": 20.0, "speedLimit": 4.0,
                "separation": 20.0, "alignment": 20.0, "cohesion": 20.0,
            }),
            BackgroundEffect::Cells => json!({
                "color1": color()?, "color2": accent()?, "backgroundColor": background()?,
                "size": 2.0, "speed": 1.0,
            }),
            BackgroundEffect::Trunk => json!({
                "color": color()?, "backgroundColor": background()?,
                "spacingX": 20.0, "spacingY": 20.0, "chaos": 2.0,
            }),
            BackgroundEffect::Topology => json!({
                "color": color()?, "backgroundColor": background()?,
            }),
            BackgroundEffect::Halo => json!({
                "baseColor": accent()?, "backgroundColor": background()?,
                "amplitudeFactor": 1.5, "size": 1.2,
            }),
            BackgroundEffect::Rings => json!({
                "color": accent()?, "backgroundColor": background()?,
            }),
            BackgroundEffect::Ripple => json!({
                "color1": color()?, "color2": accent()?, "backgroundColor": background()?,
                "frequency": 3.0, "scale": 1.0,
            }),
        };

        let mut options = base_options();
        if let Value::Object(extra) = specific {
            options.extend(extra);
        }
        Some(options)
    }
}

fn base_options() -> Map<String, Value> {
    let mut base = Map::new();
    base.insert("mouseControls".into(), Value::Bool(true));
    base.insert("touchControls".into(), Value::Bool(true));
    base.insert("gyroControls".into(), Value::Bool(false));
    base.insert("minHeight".into(), json!(200.0));
    base.insert("minWidth".into(), json!(200.0));
    base.insert("scale".into(), json!(1.0));
    base.insert("scaleMobile".into(), json!(1.0));
    base
}

impl fmt::Display for BackgroundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackgroundEffect {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|e| e.name() == wanted)
            .ok_or_else(|| FolioError::UnknownEffect(s.to_string()))
    }
}

/// Script that destroys the live renderer instance, if any.
pub fn teardown_script() -> String {
    format!(
        "if ({g} && typeof {g}.destroy === 'function') {{ {g}.destroy(); }} {g} = null;",
        g = INSTANCE_GLOBAL
    )
}

/// Script that replaces the live renderer with `effect`.
///
/// The previous instance is always torn down first so at most one runs.
/// A missing constructor or a throwing one is reported to the console.
pub fn mount_script(effect: BackgroundEffect, options: &Map<String, Value>) -> String {
    let options = Value::Object(options.clone());
    format!(
        r#"{teardown}
(function() {{
  var el = document.getElementById("{container}");
  if (!el || !window.VANTA) {{ return; }}
  var ctor = window.VANTA["{name}"];
  if (typeof ctor !== 'function') {{
    console.error('Background effect "{name}" not found or is not a function.');
    return;
  }}
  var opts = {options};
  opts.el = el;
  opts.THREE = window.THREE;
  try {{
    {g} = ctor(opts);
  }} catch (e) {{
    console.error('Background effect "{name}" initialization failed:', e);
  }}
}})();"#,
        teardown = teardown_script(),
        container = CONTAINER_ID,
        name = effect.name(),
        options = options,
        g = INSTANCE_GLOBAL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;

    fn palette() -> ThemeColors {
        ThemeColors::from_base(ThemeMode::Dark, "#0a192f", "#ccd6f6", "#64ffda")
    }

    #[test]
    fn names_roundtrip() {
        for effect in BackgroundEffect::ALL {
            assert_eq!(effect.name().parse::<BackgroundEffect>().unwrap(), effect);
        }
        assert_eq!("clouds2".parse::<BackgroundEffect>().unwrap(), BackgroundEffect::Clouds2);
        assert!("SPARKLES".parse::<BackgroundEffect>().is_err());
    }

    #[test]
    fn default_is_fog() {
        assert_eq!(BackgroundEffect::default(), BackgroundEffect::Fog);
    }

    #[test]
    fn serde_uses_upper_case_names() {
        let json = serde_json::to_string(&BackgroundEffect::Clouds2).unwrap();
        assert_eq!(json, "\"CLOUDS2\"");
    }

    #[test]
    fn none_has_no_options() {
        assert!(BackgroundEffect::None.options(&palette()).is_none());
    }

    #[test]
    fn fog_maps_palette_to_renderer_colors() {
        let opts = BackgroundEffect::Fog.options(&palette()).unwrap();
        assert_eq!(opts["highlightColor"], json!(0x64ffda));
        assert_eq!(opts["lowlightColor"], json!(0x64ffda));
        assert_eq!(opts["baseColor"], json!(0x0a192f));
        assert_eq!(opts["blurFactor"], json!(0.6));
        assert_eq!(opts["mouseControls"], json!(true));
        assert_eq!(opts["gyroControls"], json!(false));
    }

    #[test]
    fn every_effect_but_none_produces_options() {
        let colors = palette();
        for effect in BackgroundEffect::ALL.into_iter().filter(|e| !e.is_none()) {
            let opts = effect.options(&colors).expect("options");
            assert_eq!(opts["scale"], json!(1.0), "{effect}");
        }
    }

    #[test]
    fn malformed_animation_color_disables_effect() {
        let mut colors = palette();
        colors.vanta_bg_color = "transparent".into();
        assert!(BackgroundEffect::Net.options(&colors).is_none());
    }

    #[test]
    fn unused_colors_are_not_checked() {
        let mut colors = palette();
        colors.vanta_color = "not-a-color".into();
        assert!(BackgroundEffect::Fog.options(&colors).is_none());

        let rings = BackgroundEffect::Rings.options(&colors).unwrap();
        assert_eq!(rings["color"], json!(0x64ffda));
        assert_eq!(rings["backgroundColor"], json!(0x0a192f));
        let halo = BackgroundEffect::Halo.options(&colors).unwrap();
        assert_eq!(halo["baseColor"], json!(0x64ffda));
    }

    #[test]
    fn mount_script_tears_down_first() {
        let opts = BackgroundEffect::Waves.options(&palette()).unwrap();
        let script = mount_script(BackgroundEffect::Waves, &opts);
        let teardown_at = script.find(".destroy()").unwrap();
        let create_at = script.find("ctor(opts)").unwrap();
        assert!(teardown_at < create_at);
        assert!(script.contains("window.VANTA[\"WAVES\"]"));
        assert!(script.contains("\"waveSpeed\":0.75"));
    }
}
