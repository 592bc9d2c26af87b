//! SolidColor, the color representation used by the slider config.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Parses and formats hex
//! strings and interpolates in HCL space for the segment gradients.

use floem::peniko::Color;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::math;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl SolidColor {
    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Create from f64 RGBA (all 0.0–1.0).
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Parse a hex string (with or without `#`, 3, 6, or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 3 and 6-char hex default to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match stripped.len() {
            3 => {
                let r = channel(&stripped[0..1])?;
                let g = channel(&stripped[1..2])?;
                let b = channel(&stripped[2..3])?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = channel(&stripped[0..2])?;
                let g = channel(&stripped[2..4])?;
                let b = channel(&stripped[4..6])?;
                Some(Self::from_rgb(r, g, b))
            }
            8 => {
                let r = channel(&stripped[0..2])?;
                let g = channel(&stripped[2..4])?;
                let b = channel(&stripped[4..6])?;
                let a = channel(&stripped[6..8])?;
                Some(Self {
                    a: a as f64 / 255.0,
                    ..Self::from_rgb(r, g, b)
                })
            }
            _ => None,
        }
    }

    /// Format as uppercase hex (no `#` prefix).
    ///
    /// Returns 6 chars (RRGGBB) when alpha is 1.0, 8 chars (RRGGBBAA) otherwise.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        if (self.a - 1.0).abs() < 0.001 {
            format!("{:02X}{:02X}{:02X}", r, g, b)
        } else {
            let a = (self.a * 255.0).round() as u8;
            format!("{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    /// Interpolate towards `other` in HCL space at `t` (0.0–1.0).
    ///
    /// Hue travels the short way around; alpha is interpolated linearly.
    /// `t <= 0` and `t >= 1` return the endpoints unchanged.
    pub fn lerp_hcl(&self, other: &SolidColor, t: f64) -> SolidColor {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        let from = math::rgb_to_hcl(self.r, self.g, self.b);
        let to = math::rgb_to_hcl(other.r, other.g, other.b);
        let (r, g, b) = math::hcl_to_rgb(math::lerp_hcl(from, to, t));
        let a = self.a + (other.a - self.a) * t;
        Self { r, g, b, a }
    }

    pub(crate) fn to_color(self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for SolidColor {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or(ConfigError::InvalidColor(value))
    }
}

impl From<SolidColor> for String {
    fn from(color: SolidColor) -> Self {
        format!("#{}", color.to_hex())
    }
}

/// Gradient stops for one arc segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentColors {
    pub from_color: SolidColor,
    pub to_color: SolidColor,
}

/// Colors at the two ends of segment `index` out of `total_segments`.
///
/// The gradient `color_from → color_to` is sampled at `index / n` and
/// `(index + 1) / n`, so neighbouring segments share their boundary color.
pub fn segment_color(
    index: usize,
    total_segments: usize,
    color_from: SolidColor,
    color_to: SolidColor,
) -> SegmentColors {
    assert!(total_segments >= 1, "at least one segment is required");
    assert!(index < total_segments, "segment index out of range");
    let n = total_segments as f64;
    SegmentColors {
        from_color: color_from.lerp_hcl(&color_to, index as f64 / n),
        to_color: color_from.lerp_hcl(&color_to, (index + 1) as f64 / n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn orange() -> SolidColor {
        SolidColor::from_rgb(0xff, 0x98, 0x00)
    }

    fn yellow() -> SolidColor {
        SolidColor::from_rgb(0xff, 0xcf, 0x00)
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(SolidColor::from_hex("#fff"), Some(SolidColor::from_rgb(255, 255, 255)));
        assert_eq!(SolidColor::from_hex("ff9800"), Some(orange()));
        let translucent = SolidColor::from_hex("FF980080").unwrap();
        assert!((translucent.a() - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(SolidColor::from_hex("#12345"), None);
        assert_eq!(SolidColor::from_hex("zzzzzz"), None);
    }

    #[test]
    fn formats_hex() {
        assert_eq!(orange().to_hex(), "FF9800");
        assert_eq!(SolidColor::from_rgba(1.0, 0.0, 0.0, 0.0).to_hex(), "FF000000");
        assert_eq!(String::from(yellow()), "#FFCF00");
    }

    #[test]
    fn rejects_bad_color_strings() {
        let err = SolidColor::try_from("not-a-color".to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(s) if s == "not-a-color"));
    }

    #[test]
    fn interpolates_in_hcl_space() {
        let red = SolidColor::from_rgb(255, 0, 0);
        let blue = SolidColor::from_rgb(0, 0, 255);
        assert_eq!(red.lerp_hcl(&blue, 0.5).to_hex(), "F50086");
        let white = SolidColor::from_rgb(255, 255, 255);
        assert_eq!(white.lerp_hcl(&orange(), 0.5).to_hex(), "FFBD3A");
        let black = SolidColor::from_rgb(0, 0, 0);
        assert_eq!(black.lerp_hcl(&orange(), 0.5).to_hex(), "903B00");
    }

    #[test]
    fn interior_segment_colors_follow_the_gradient() {
        let colors = segment_color(2, 5, orange(), yellow());
        assert_eq!(colors.from_color.to_hex(), "FFAE00");
        assert_eq!(colors.to_color.to_hex(), "FFB900");
    }

    #[test]
    fn adjacent_segments_share_boundary_color() {
        let a = segment_color(1, 4, orange(), yellow());
        let b = segment_color(2, 4, orange(), yellow());
        assert_eq!(a.to_color, b.from_color);
    }

    proptest! {
        #[test]
        fn gradient_endpoints_are_exact(
            n in 1usize..64,
            from in (0u8..=255, 0u8..=255, 0u8..=255),
            to in (0u8..=255, 0u8..=255, 0u8..=255),
        ) {
            let a = SolidColor::from_rgb(from.0, from.1, from.2);
            let b = SolidColor::from_rgb(to.0, to.1, to.2);
            prop_assert_eq!(segment_color(0, n, a, b).from_color, a);
            prop_assert_eq!(segment_color(n - 1, n, a, b).to_color, b);
        }
    }
}
