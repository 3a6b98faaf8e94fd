//! Global styles and document head for the portfolio window.
//!
//! Palette colors are not defined here: they arrive as CSS custom properties
//! in the injected theme stylesheet (`--bg-color`, `--accent-color`, ...).

mod styles;

use folio_core::BackgroundEffect;

pub use styles::GLOBAL_STYLES;

/// three.js build the background renderers are written against.
const THREE_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/three.js/r134/three.min.js";

/// Renderer bundles, one per effect.
const VANTA_CDN: &str = "https://cdn.jsdelivr.net/npm/vanta@0.5.24/dist";

/// Script URL for an effect's renderer; `None` has no renderer.
pub fn effect_script_url(effect: BackgroundEffect) -> Option<String> {
    if effect.is_none() {
        return None;
    }
    Some(format!(
        "{}/vanta.{}.min.js",
        VANTA_CDN,
        effect.name().to_ascii_lowercase()
    ))
}

/// `<head>` additions: three.js and the renderers the customizer offers.
pub fn custom_head() -> String {
    let mut head = format!(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n<script src=\"{}\"></script>\n",
        THREE_URL
    );
    for url in BackgroundEffect::SELECTABLE
        .into_iter()
        .filter_map(effect_script_url)
    {
        head.push_str(&format!("<script src=\"{}\"></script>\n", url));
    }
    head
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_urls_use_lowercase_names() {
        assert_eq!(
            effect_script_url(BackgroundEffect::Fog).as_deref(),
            Some("https://cdn.jsdelivr.net/npm/vanta@0.5.24/dist/vanta.fog.min.js")
        );
        assert_eq!(effect_script_url(BackgroundEffect::None), None);
    }

    #[test]
    fn head_loads_three_before_renderers() {
        let head = custom_head();
        let three = head.find("three.min.js").unwrap();
        let fog = head.find("vanta.fog.min.js").unwrap();
        assert!(three < fog);
        assert!(head.contains("vanta.net.min.js"));
        assert!(head.contains("vanta.waves.min.js"));
        assert!(head.contains("vanta.dots.min.js"));
    }
}
