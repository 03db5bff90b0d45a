//! RGBA color values in the CSS text form the conversion server parses,
//! e.g. `rgba(255, 128, 0, 1)`.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in `0.0..=1.0`
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from the float channels a picker widget reports (0-255, alpha 0-1).
    pub fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self {
            r: byte(r),
            g: byte(g),
            b: byte(b),
            a: a.clamp(0.0, 1.0) as f32,
        }
    }
}

/// Shown when a picker opens on a field with no color yet.
pub const DEFAULT_PICKER_COLOR: Rgba = Rgba::new(128, 128, 128, 1.0);

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // two decimals are plenty for opacity and avoid f32 noise like 0.30000001
        let alpha = (self.a * 100.0).round() / 100.0;
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let trimmed = s.trim();

        let (body, with_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(err());
        };
        let body = body.strip_suffix(')').ok_or_else(err)?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(err());
        }

        let channel = |p: &str| p.parse::<u8>().map_err(|_| err());
        let a = if with_alpha {
            let a = parts[3].parse::<f32>().map_err(|_| err())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(err());
            }
            a
        } else {
            1.0
        };

        Ok(Rgba::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
    }
}
