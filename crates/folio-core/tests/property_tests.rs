//! Property-based tests for color arithmetic and palette derivation
//!
//! Uses proptest to verify invariants of shading, derivation and theme edits.

use folio_core::color::{shade, Rgb};
use folio_core::theme::{derive_colors, ThemeColors, ThemeConfig, ThemeKey, ThemeMode};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any 24-bit color
fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

/// Hex strings in mixed case, with and without the leading '#'
fn hex_strategy() -> impl Strategy<Value = String> {
    (rgb_strategy(), any::<bool>(), any::<bool>()).prop_map(|(rgb, hash, upper)| {
        let hex = rgb.to_hex();
        let hex = if upper { hex.to_uppercase() } else { hex };
        if hash {
            hex
        } else {
            hex.trim_start_matches('#').to_string()
        }
    })
}

/// Strings that are never `#rrggbb`
fn malformed_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[g-z ]{0,12}|#[0-9a-f]{1,5}|#[0-9a-f]{7,9}")
        .expect("valid regex")
}

fn mode_strategy() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Light), Just(ThemeMode::Dark)]
}

fn palette(mode: ThemeMode, bg: Rgb, text: Rgb, accent: Rgb) -> ThemeColors {
    ThemeColors::from_base(mode, &bg.to_hex(), &text.to_hex(), &accent.to_hex())
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Shading by zero returns the same color, normalized to lowercase with '#'
    #[test]
    fn shade_zero_is_identity(hex in hex_strategy()) {
        let expected = Rgb::parse_hex(&hex).unwrap().to_hex();
        prop_assert_eq!(shade(&hex, 0.0), expected);
    }

    /// Shading always yields a parseable color for parseable input
    #[test]
    fn shade_stays_in_gamut(hex in hex_strategy(), p in -2.0f64..2.0) {
        prop_assert!(Rgb::parse_hex(&shade(&hex, p)).is_some());
    }

    /// Lightening never darkens a channel and darkening never lightens one
    #[test]
    fn shade_is_monotonic(rgb in rgb_strategy(), p in 0.0f64..1.0) {
        let lighter = rgb.shade(p);
        let darker = rgb.shade(-p);
        prop_assert!(lighter.r >= rgb.r && lighter.g >= rgb.g && lighter.b >= rgb.b);
        prop_assert!(darker.r <= rgb.r && darker.g <= rgb.g && darker.b <= rgb.b);
    }

    /// Malformed colors pass through untouched
    #[test]
    fn malformed_passes_through(bad in malformed_strategy(), p in -1.0f64..1.0) {
        prop_assert_eq!(shade(&bad, p), bad);
    }

    /// Derivation is idempotent: deriving a derived palette changes nothing
    #[test]
    fn derivation_is_idempotent(
        mode in mode_strategy(),
        bg in rgb_strategy(),
        text in rgb_strategy(),
        accent in rgb_strategy()
    ) {
        let once = palette(mode, bg, text, accent);
        let twice = derive_colors(mode, &once);
        prop_assert_eq!(once, twice);
    }

    /// Editing one mode never touches the other
    #[test]
    fn edits_are_mode_local(
        mode in mode_strategy(),
        bg in rgb_strategy(),
        value in rgb_strategy()
    ) {
        let config = ThemeConfig {
            dark: palette(ThemeMode::Dark, bg, Rgb::WHITE, Rgb::new(100, 255, 218)),
            light: palette(ThemeMode::Light, bg, Rgb::BLACK, Rgb::new(37, 99, 235)),
        };
        let next = config.with_change(mode, ThemeKey::BgColor, &value.to_hex());
        prop_assert_eq!(next.colors(mode.toggle()), config.colors(mode.toggle()));
        prop_assert_eq!(&next.colors(mode).bg_color, &value.to_hex());
        // Still linked, so the animation background follows
        prop_assert_eq!(&next.colors(mode).vanta_bg_color, &value.to_hex());
    }
}
