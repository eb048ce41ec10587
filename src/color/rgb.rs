//! Color types and channel arithmetic.

use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (the leading `#` is optional).
    pub fn from_hex(text: &str) -> Result<Self> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("Invalid hex color: {text:?}");
        }
        Ok(Self {
            r: u8::from_str_radix(&hex[0..2], 16)?,
            g: u8::from_str_radix(&hex[2..4], 16)?,
            b: u8::from_str_radix(&hex[4..6], 16)?,
        })
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Subtract `delta` from each channel, clamped at 0.
    pub fn darken(&self, delta: u8) -> Rgb {
        Rgb {
            r: self.r.saturating_sub(delta),
            g: self.g.saturating_sub(delta),
            b: self.b.saturating_sub(delta),
        }
    }

    /// Linear interpolation between `a` and `b`, per 8-bit channel,
    /// rounded to the nearest integer.
    pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb { r: mix(a.r, b.r), g: mix(a.g, b.g), b: mix(a.b, b.b) }
    }

    pub const fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

impl fmt::Display for Rgb {
    /// Format as CSS: rgb(r,g,b)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    /// Serialized as a `#rrggbb` string.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Rgb::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// RGB color with an alpha channel in [0.0, 1.0].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

impl fmt::Display for Rgba {
    /// Format as CSS: rgba(r,g,b,a)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.alpha.clamp(0.0, 1.0);
        write!(f, "rgba({},{},{},{})", self.rgb.r, self.rgb.g, self.rgb.b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn hex_round_trip() {
        let color = Rgb::from_hex("#3288bd").unwrap();
        assert_eq!(color, Rgb::new(0x32, 0x88, 0xbd));
        assert_eq!(color.to_hex(), "#3288bd");
        assert_eq!(Rgb::from_hex("ffffff").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn hex_rejects_garbage() {
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("not a color").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn darken_saturates() {
        assert_eq!(Rgb::new(100, 50, 10).darken(40), Rgb::new(60, 10, 0));
        assert_eq!(Rgb::new(0, 0, 0).darken(40), Rgb::new(0, 0, 0));
    }

    #[test]
    fn lerp_endpoints_exact() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 50);
        assert_eq!(Rgb::lerp(a, b, 0.0), a);
        assert_eq!(Rgb::lerp(a, b, 1.0), b);
        assert_eq!(Rgb::lerp(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn css_display() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1,2,3)");
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(0.6).to_string(), "rgba(1,2,3,0.6)");
    }
}
