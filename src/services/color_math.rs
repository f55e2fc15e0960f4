//! Color conversions and the WCAG 2.x contrast formula.
//!
//! Every function here is total: malformed hex input degrades to black
//! instead of failing, so callers never need to handle errors.

use crate::models::{ContrastResult, HslColor, RgbColor};

/// Linearization cut-off used by WCAG 2.x for sRGB channels.
const SRGB_LINEAR_THRESHOLD: f64 = 0.039_28;

/// Converts a `#RRGGBB` string to RGB, black if malformed.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> RgbColor {
    RgbColor::from_hex(hex)
}

/// Converts a `#RRGGBB` string to HSL, black if malformed.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> HslColor {
    RgbColor::from_hex(hex).to_hsl()
}

/// Linearizes one 0-255 sRGB channel.
fn linearize(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= SRGB_LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x.
///
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B on linearized channels.
#[must_use]
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    0.0722_f64.mul_add(
        linearize(b),
        0.2126_f64.mul_add(linearize(r), 0.7152 * linearize(g)),
    )
}

/// Luminance of a hex color string.
#[must_use]
pub fn luminance_of(hex: &str) -> f64 {
    let color = hex_to_rgb(hex);
    relative_luminance(color.r, color.g, color.b)
}

/// Contrast between two hex colors, rated against WCAG thresholds.
///
/// ratio = (lighter + 0.05) / (darker + 0.05), so it is always >= 1.0
/// and independent of argument order.
///
/// # Examples
///
/// ```
/// use tokenguide::models::WcagRating;
/// use tokenguide::services::color_math::contrast_ratio;
///
/// let result = contrast_ratio("#000000", "#ffffff");
/// assert!((result.ratio - 21.0).abs() < 1e-9);
/// assert_eq!(result.rating, WcagRating::Aaa);
/// ```
#[must_use]
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> ContrastResult {
    let lum_a = luminance_of(hex_a);
    let lum_b = luminance_of(hex_b);
    let (lighter, darker) = if lum_a > lum_b {
        (lum_a, lum_b)
    } else {
        (lum_b, lum_a)
    };

    ContrastResult::from_ratio((lighter + 0.05) / (darker + 0.05))
}

/// Returns true for `#RRGGBB` strings (hex digits in any case).
#[must_use]
pub fn is_valid_hex(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].bytes().all(|b| b.is_ascii_hexdigit())
}
