//! Hex color arithmetic used by palette derivation.
//!
//! Colors travel through the theme as plain CSS strings. Only `#rrggbb`
//! (leading `#` optional, any case) is understood; every helper here hands a
//! malformed string back untouched instead of failing.

use std::fmt;

/// RGB triplet fallback used when the accent color cannot be parsed.
pub const FALLBACK_ACCENT_TRIPLET: &str = "100, 255, 218";

/// An opaque 24-bit color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`. Shorthand (`#fff`) and alpha forms are rejected.
    pub fn parse_hex(input: &str) -> Option<Rgb> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Packed `0xRRGGBB`, the form WebGL renderers take.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Blend toward white (`percent > 0`) or black (`percent < 0`).
    ///
    /// `percent` is a fraction, clamped to `[-1, 1]`.
    pub fn shade(self, percent: f64) -> Rgb {
        let p = percent.clamp(-1.0, 1.0);
        let target = if p < 0.0 { 0.0 } else { 255.0 };
        let amount = p.abs();
        let blend = |c: u8| {
            let c = f64::from(c);
            (c + (target - c) * amount).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: blend(self.r),
            g: blend(self.g),
            b: blend(self.b),
        }
    }

    /// `r, g, b` as used inside `rgba(...)`.
    pub fn triplet(self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Shade a hex color string. Malformed input comes back unchanged.
pub fn shade(color: &str, percent: f64) -> String {
    match Rgb::parse_hex(color) {
        Some(rgb) => rgb.shade(percent).to_hex(),
        None => color.to_string(),
    }
}

/// `rgba(r, g, b, alpha)` for a hex color. Malformed input comes back unchanged.
pub fn with_alpha(color: &str, alpha: f64) -> String {
    match Rgb::parse_hex(color) {
        Some(rgb) => format!("rgba({}, {})", rgb.triplet(), alpha),
        None => color.to_string(),
    }
}

/// `r, g, b` for a hex color, or [`FALLBACK_ACCENT_TRIPLET`].
pub fn rgb_triplet(color: &str) -> String {
    Rgb::parse_hex(color)
        .map(Rgb::triplet)
        .unwrap_or_else(|| FALLBACK_ACCENT_TRIPLET.to_string())
}

/// Whether a string is a color the derivation understands.
pub fn is_hex_color(color: &str) -> bool {
    Rgb::parse_hex(color).is_some()
}
