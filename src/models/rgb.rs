//! RGB and HSL color values with permissive hex parsing.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value derived from a `#RRGGBB` hex string.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Parsing never fails: anything that is not a well-formed 7-character
/// hex color becomes black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Black, the fallback for malformed hex input.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White, the reference background for guideline contrast ratios.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a `#RRGGBB` hex string.
    ///
    /// Only strings of exactly 7 characters, a `#` followed by six hex
    /// digits (any case), produce a color. Everything else, including
    /// short forms like `#fff`, silently yields [`RgbColor::BLACK`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenguide::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hex("#336699"), RgbColor::new(0x33, 0x66, 0x99));
    /// assert_eq!(RgbColor::from_hex("#xyz"), RgbColor::BLACK);
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let Some(digits) = hex.strip_prefix('#') else {
            return Self::BLACK;
        };

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::BLACK;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Ok(r), Ok(g), Ok(b)) => Self::new(r, g, b),
            _ => Self::BLACK,
        }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use tokenguide::models::RgbColor;
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Returns the channels normalized to the 0.0-1.0 range.
    #[must_use]
    pub fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Converts the RGB color to HSL (Hue, Saturation, Lightness).
    ///
    /// Hue is in degrees (0.0-360.0), saturation and lightness are
    /// percentages (0.0-100.0). Achromatic colors have hue and
    /// saturation of zero.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let (r, g, b) = self.normalized();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return HslColor {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // Red wins ties, then green, matching the usual switch on max
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        HslColor {
            h: h / 6.0 * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// CSS functional notation, e.g. `rgb(51, 102, 153)`.
    #[must_use]
    pub fn to_css_rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css_rgb())
    }
}

/// HSL color with hue in degrees and saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue (0.0-360.0 degrees)
    pub h: f64,
    /// Saturation (0.0-100.0 percent)
    pub s: f64,
    /// Lightness (0.0-100.0 percent)
    pub l: f64,
}

impl HslColor {
    /// CSS functional notation with one decimal, e.g. `hsl(210.0, 50.0%, 40.0%)`.
    #[must_use]
    pub fn to_css_hsl(&self) -> String {
        format!("hsl({:.1}, {:.1}%, {:.1}%)", self.h, self.s, self.l)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css_hsl())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        assert_eq!(RgbColor::from_hex("#FF0000"), RgbColor::new(255, 0, 0));
        assert_eq!(RgbColor::from_hex("#00ff00"), RgbColor::new(0, 255, 0));
        assert_eq!(RgbColor::from_hex("#336699"), RgbColor::new(51, 102, 153));
    }

    #[test]
    fn test_from_hex_malformed_is_black() {
        assert_eq!(RgbColor::from_hex("#xyz"), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hex("#fff"), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hex("336699"), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hex("#3366999"), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hex("#GG0000"), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hex(""), RgbColor::BLACK);
        assert_eq!(RgbColor::from_hex("8px"), RgbColor::BLACK);
        // Multi-byte characters must not panic on slicing
        assert_eq!(RgbColor::from_hex("#ééé"), RgbColor::BLACK);
    }

    #[test]
    fn test_hex_roundtrip_case_insensitive() {
        for hex in ["#336699", "#abcdef", "#ABCDEF", "#000000", "#ffffff", "#0a1B2c"] {
            let color = RgbColor::from_hex(hex);
            assert_eq!(color.to_hex(), hex.to_uppercase());
        }
    }

    #[test]
    fn test_css_rgb_text() {
        assert_eq!(RgbColor::from_hex("#xyz").to_css_rgb(), "rgb(0, 0, 0)");
        assert_eq!(RgbColor::new(51, 102, 153).to_string(), "rgb(51, 102, 153)");
    }

    #[test]
    fn test_to_hsl_primary_colors() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hsl().to_css_hsl(), "hsl(0.0, 100.0%, 50.0%)");
        assert_eq!(RgbColor::new(0, 255, 0).to_hsl().to_css_hsl(), "hsl(120.0, 100.0%, 50.0%)");
        assert_eq!(RgbColor::new(0, 0, 255).to_hsl().to_css_hsl(), "hsl(240.0, 100.0%, 50.0%)");
    }

    #[test]
    fn test_to_hsl_achromatic() {
        let white = RgbColor::WHITE.to_hsl();
        assert_eq!(white.h, 0.0);
        assert_eq!(white.s, 0.0);
        assert!((white.l - 100.0).abs() < 1e-9);

        assert_eq!(RgbColor::BLACK.to_hsl().to_css_hsl(), "hsl(0.0, 0.0%, 0.0%)");
    }

    #[test]
    fn test_to_hsl_mixed() {
        // #336699 -> hsl(210, 50%, 40%)
        let hsl = RgbColor::new(0x33, 0x66, 0x99).to_hsl();
        assert_eq!(hsl.to_css_hsl(), "hsl(210.0, 50.0%, 40.0%)");

        // Magenta: red and blue tie for max, red branch wins
        let hsl = RgbColor::new(255, 0, 255).to_hsl();
        assert!((hsl.h - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_hsl_light_saturation_branch() {
        // l > 0.5 uses d / (2 - max - min)
        let hsl = RgbColor::new(255, 204, 204).to_hsl();
        assert_eq!(hsl.to_css_hsl(), "hsl(0.0, 100.0%, 90.0%)");
    }
}
