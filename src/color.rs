//! Color model
//!
//! Colors are either RGB (channels conventionally 0-255) or HSL (hue 0-360,
//! saturation and lightness 0-100). Components are stored as `f64` and are
//! never clamped on construction: an out-of-range HSL hue flows through the
//! conversion formulas as-is.
//!
//! Two colors are equal when their hex encodings are equal, so an HSL color
//! and an RGB color that round to the same 8-bit channels compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// Error returned when parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),

    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// Color in RGB space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Color in HSL space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// A color in either representation
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
}

/// Round a raw channel to the nearest 8-bit value, saturating out-of-range input
#[inline]
fn channel_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsl(self) -> Hsl {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // First matching channel wins when two share the max
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let h = sector / 6.0;

        Hsl::new(h * 360.0, s * 100.0, l * 100.0)
    }

    /// Channels rounded to 8 bits
    pub fn to_u8(self) -> (u8, u8, u8) {
        (channel_u8(self.r), channel_u8(self.g), channel_u8(self.b))
    }
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        let h = self.h / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s == 0.0 {
            let v = (l * 255.0).round();
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let r = hue_to_channel(p, q, h + 1.0 / 3.0);
        let g = hue_to_channel(p, q, h);
        let b = hue_to_channel(p, q, h - 1.0 / 3.0);

        Rgb::new((r * 255.0).round(), (g * 255.0).round(), (b * 255.0).round())
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(Rgb::new(r, g, b))
    }

    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Color::Hsl(Hsl::new(h, s, l))
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Color::Rgb(rgb) => rgb,
            Color::Hsl(hsl) => hsl.to_rgb(),
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        match *self {
            Color::Rgb(rgb) => rgb.to_hsl(),
            Color::Hsl(hsl) => hsl,
        }
    }

    /// `#rrggbb`, lowercase, channels rounded to the nearest integer
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb().to_u8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// CSS `rgb(r, g, b)` with rounded channels
    pub fn to_css_rgb(&self) -> String {
        let (r, g, b) = self.to_rgb().to_u8();
        format!("rgb({}, {}, {})", r, g, b)
    }

    /// CSS `hsl(h, s%, l%)` with the raw, unrounded components
    pub fn to_css_hsl(&self) -> String {
        let hsl = self.to_hsl();
        format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
    }

    /// Pack into opaque ARGB for the pixel buffer
    pub fn to_argb_u32(&self) -> u32 {
        let (r, g, b) = self.to_rgb().to_u8();
        0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
    }

    /// Parse from `#rrggbb` or `rrggbb`
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::Length(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(f64::from)
                .map_err(|_| ColorParseError::Digits(s.to_string()))
        };

        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgb().to_u8() == other.to_rgb().to_u8()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgb().to_u8().hash(state);
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Color::Hsl(hsl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tolerance: f64) {
        assert!((a - b).abs() <= tolerance, "{} vs {}", a, b);
    }

    #[test]
    fn test_hex_encoding() {
        assert_eq!(Color::rgb(12.0, 34.0, 56.0).to_hex(), "#0c2238");
        assert_eq!(Color::rgb(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Color::rgb(255.0, 255.0, 255.0).to_hex(), "#ffffff");
        // Rounds before encoding
        assert_eq!(Color::rgb(10.4, 10.5, 9.6).to_hex(), "#0a0b0a");
    }

    #[test]
    fn test_css_strings() {
        assert_eq!(Color::rgb(204.0, 45.0, 214.0).to_css_rgb(), "rgb(204, 45, 214)");
        assert_eq!(Color::rgb(1.4, 2.6, 3.0).to_css_rgb(), "rgb(1, 3, 3)");
        assert_eq!(Color::hsl(244.0, 29.0, 33.0).to_css_hsl(), "hsl(244, 29%, 33%)");
        assert_eq!(Color::hsl(10.5, 0.25, 50.0).to_css_hsl(), "hsl(10.5, 0.25%, 50%)");
    }

    #[test]
    fn test_primary_conversions() {
        let red = Color::rgb(255.0, 0.0, 0.0).to_hsl();
        assert_close(red.h, 0.0, 1e-9);
        assert_close(red.s, 100.0, 1e-9);
        assert_close(red.l, 50.0, 1e-9);

        let green = Color::rgb(0.0, 255.0, 0.0).to_hsl();
        assert_close(green.h, 120.0, 1e-9);

        let blue = Color::rgb(0.0, 0.0, 255.0).to_hsl();
        assert_close(blue.h, 240.0, 1e-9);

        assert_eq!(Color::hsl(240.0, 100.0, 50.0).to_hex(), "#0000ff");
        assert_eq!(Color::hsl(60.0, 100.0, 50.0).to_hex(), "#ffff00");
    }

    #[test]
    fn test_gray_has_no_hue_or_saturation() {
        let gray = Color::rgb(128.0, 128.0, 128.0).to_hsl();
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_close(gray.l, 50.196, 0.001);

        let back = Color::hsl(0.0, 0.0, 50.0).to_rgb();
        assert_eq!(back.to_u8(), (128, 128, 128));
    }

    #[test]
    fn test_magenta_side_of_red_wraps_hue() {
        // g < b with red as max takes the +6 branch
        let hsl = Color::rgb(255.0, 0.0, 128.0).to_hsl();
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "hue {}", hsl.h);
    }

    #[test]
    fn test_equality_uses_hex() {
        let rgb = Color::rgb(10.0, 10.0, 10.0);
        let hsl = Color::hsl(0.0, 0.0, 3.92);
        assert_eq!(hsl.to_hex(), "#0a0a0a");
        assert_eq!(rgb, hsl);

        // Different raw hue, same rounded channels (achromatic)
        assert_eq!(Color::hsl(0.0, 0.0, 3.92), Color::hsl(200.0, 0.0, 3.92));

        assert_ne!(rgb, Color::rgb(10.0, 10.0, 11.0));
    }

    #[test]
    fn test_out_of_range_hue_is_not_validated() {
        let wrapped = Color::hsl(420.0, 100.0, 50.0);
        assert!(matches!(wrapped, Color::Hsl(Hsl { h, .. }) if h == 420.0));
        assert_eq!(wrapped, Color::hsl(60.0, 100.0, 50.0));

        // Each channel offset is wrapped only once, so far-out hues collapse
        assert_eq!(Color::hsl(800.0, 100.0, 50.0).to_hex(), "#000000");
    }

    #[test]
    fn test_from_hex() {
        let color = Color::from_hex("#0c2238").unwrap();
        assert_eq!(color.to_hex(), "#0c2238");
        assert_eq!(Color::from_hex("FFFFFF").unwrap().to_hex(), "#ffffff");
        assert!(matches!(
            Color::from_hex("#fff"),
            Err(ColorParseError::Length(_))
        ));
        assert!(matches!(
            Color::from_hex("#gg0000"),
            Err(ColorParseError::Digits(_))
        ));
    }

    #[test]
    fn test_argb_packing() {
        assert_eq!(Color::rgb(0x12 as f64, 0x34 as f64, 0x56 as f64).to_argb_u32(), 0xFF123456);
        assert_eq!(Color::rgb(-5.0, 300.0, 0.0).to_argb_u32(), 0xFF00FF00);
    }

    #[test]
    fn test_rgb_hsl_rgb_round_trip_within_one() {
        let mut values: Vec<u32> = (0..=255).step_by(5).collect();
        values.extend([1, 2, 127, 128, 129, 253, 254]);

        for &r in &values {
            for &g in &values {
                for &b in &values {
                    let original = Rgb::new(r as f64, g as f64, b as f64);
                    let (r2, g2, b2) = original.to_hsl().to_rgb().to_u8();
                    assert!(
                        (r as i32 - r2 as i32).abs() <= 1
                            && (g as i32 - g2 as i32).abs() <= 1
                            && (b as i32 - b2 as i32).abs() <= 1,
                        "({}, {}, {}) came back as ({}, {}, {})",
                        r,
                        g,
                        b,
                        r2,
                        g2,
                        b2
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsl_rgb_hsl_round_trip() {
        let mut values: Vec<u32> = (0..=255).step_by(5).collect();
        values.extend([1, 2, 127, 128, 129, 253, 254]);

        for &r in &values {
            for &g in &values {
                for &b in &values {
                    let hsl = Rgb::new(r as f64, g as f64, b as f64).to_hsl();
                    let back = hsl.to_rgb().to_hsl();
                    let context = format!("rgb({}, {}, {}): {:?} vs {:?}", r, g, b, hsl, back);

                    assert!((hsl.l - back.l).abs() <= 0.5, "{}", context);
                    assert!((hsl.s - back.s).abs() <= 1.0, "{}", context);
                    // Hue is meaningless for grays
                    if hsl.s > 1.0 {
                        let dh = (hsl.h - back.h).abs();
                        assert!(dh.min(360.0 - dh) <= 1.0, "{}", context);
                    }
                }
            }
        }
    }

    #[test]
    fn test_hsl_round_trip_from_hsl_side() {
        for (h, s, l) in [(210.0, 65.0, 13.0), (0.0, 100.0, 50.0), (300.0, 20.0, 80.0)] {
            let once = Hsl::new(h, s, l).to_rgb().to_hsl();
            let twice = once.to_rgb().to_hsl();
            assert_eq!(once.to_rgb().to_u8(), twice.to_rgb().to_u8());
            assert!((once.l - twice.l).abs() <= 0.5);
        }
    }
}
