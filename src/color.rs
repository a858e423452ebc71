//! Colors.

use crate::error::Error;
use std::str::FromStr;

/// An RGBA color with components in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Creates a color from 8-bit components.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color {
            r: f64::from(r) / 255.,
            g: f64::from(g) / 255.,
            b: f64::from(b) / 255.,
            a: f64::from(a) / 255.,
        }
    }

    /// Returns the same color with the given alpha.
    pub fn opacity(self, alpha: f64) -> Color {
        Color { a: alpha, ..self }
    }
}

/// Parses `#rrggbb` or `#rrggbbaa`.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Color, Error> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }

        let component = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let alpha = if hex.len() == 8 { component(6)? } else { 255 };
        Ok(Color::rgba8(component(0)?, component(2)?, component(4)?, alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        let c: Color = "#ff0080".parse().unwrap();
        assert_eq!(c, Color::rgba8(255, 0, 128, 255));
        let c: Color = "#1c1e22c0".parse().unwrap();
        assert_eq!(c, Color::rgba8(28, 30, 34, 192));
    }

    #[test]
    fn reject_malformed() {
        for s in &["ff0080", "#ff00", "#gg0000", "#ff0080ff00"] {
            assert!(
                matches!(s.parse::<Color>(), Err(Error::InvalidColor(_))),
                "{} should not parse",
                s
            );
        }
    }

    #[test]
    fn opacity_keeps_rgb() {
        let c = Color::new(0.1, 0.2, 0.3, 1.).opacity(0.5);
        assert_eq!(c, Color::new(0.1, 0.2, 0.3, 0.5));
    }
}
