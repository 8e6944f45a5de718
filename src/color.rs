use std::{fmt, str::FromStr};

use num_traits::clamp;

use super::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

pub const WHITE: Color = Color::rgb(255, 255, 255);

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    to_channel(a as f64 + (b as f64 - a as f64) * t)
}

// Channels are mixed in plain sRGB bytes, no linearization.
fn mix(base: u8, over: u8, alpha: u8) -> u8 {
    let a = alpha as f64 / 255.;
    to_channel(base as f64 * (1. - a) + over as f64 * a)
}

fn to_channel(x: f64) -> u8 {
    clamp(x.round(), 0., 255.) as u8
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Parses a `#RRGGBB` string. Digits may be either case.
    pub fn from_hex(src: &str) -> Result<Self, ColorError> {
        let digits = src.strip_prefix('#').ok_or(ColorError::MissingHash)?;
        if digits.len() != 6 {
            return Err(ColorError::Length(digits.len()))
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Digit(digits.to_string()))
        }

        let channel = |i: usize| {
            digits.get(i..i + 2)
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or_else(|| ColorError::Digit(digits.to_string()))
        };

        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Component-wise linear interpolation, rounded to the nearest byte.
    pub fn lerp(start: Self, end: Self, t: f64) -> Self {
        Color {
            red: lerp(start.red, end.red, t),
            green: lerp(start.green, end.green, t),
            blue: lerp(start.blue, end.blue, t)
        }
    }

    /// Composites `over` at opacity `alpha / 255` on top of `self`.
    pub fn blend(self, over: Self, alpha: u8) -> Self {
        Color {
            red: mix(self.red, over.red, alpha),
            green: mix(self.green, over.green, alpha),
            blue: mix(self.blue, over.blue, alpha)
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}
