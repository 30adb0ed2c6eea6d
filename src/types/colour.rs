//! Colour type and hex parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::{OchreError, Result};

/// An RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    ///
    /// The leading `#` is optional and digits may be in either case.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 => {
                // #RGB -> #RRGGBB
                let r = parse_hex_digit(hex.chars().nth(0).unwrap())?;
                let g = parse_hex_digit(hex.chars().nth(1).unwrap())?;
                let b = parse_hex_digit(hex.chars().nth(2).unwrap())?;
                Ok(Self::new(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                // #RRGGBB
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Canonical hex form: uppercase, with leading `#`.
    pub fn hex(self) -> String {
        self.to_string()
    }

    /// CSS functional notation, e.g. `rgb(231, 71, 38)`.
    pub fn css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Colour {
    type Err = OchreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

fn invalid_hex(s: &str) -> OchreError {
    OchreError::InvalidArgument {
        message: format!("invalid hex colour: {}", s),
        help: Some("use #RGB or #RRGGBB format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| OchreError::InvalidArgument {
            message: format!("invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| OchreError::InvalidArgument {
        message: format!("invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#E74726").unwrap();
        assert_eq!(c, Colour::new(231, 71, 38));

        let c = Colour::from_hex("#1b355e").unwrap();
        assert_eq!(c, Colour::new(0x1B, 0x35, 0x5E));
    }

    #[test]
    fn test_from_hex_3digit() {
        let c = Colour::from_hex("#F00").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0));

        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c, Colour::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_from_hex_no_hash() {
        let c = Colour::from_hex("E74726").unwrap();
        assert_eq!(c, Colour::new(231, 71, 38));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#ÿÿÿ").is_err());
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(format!("{}", Colour::new(231, 71, 38)), "#E74726");
        assert_eq!(Colour::from_hex("#e6e7e9").unwrap().hex(), "#E6E7E9");
    }

    #[test]
    fn test_css_rgb() {
        assert_eq!(Colour::new(231, 71, 38).css_rgb(), "rgb(231, 71, 38)");
    }

    #[test]
    fn test_round_trip() {
        let c = Colour::new(0xDA, 0xA8, 0xA2);
        assert_eq!(Colour::from_hex(&c.hex()).unwrap(), c);
    }
}
