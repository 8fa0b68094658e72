//! Colour index and RGB types.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{RasterError, Result};

use super::Palette;

/// An index into the fixed nine-entry palette.
///
/// Any `i32` can be held so that out-of-palette values can be passed around
/// and rejected at draw time; only indices `0..=8` are valid for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color(i32);

impl Color {
    pub const RED: Self = Self(0);
    pub const GREEN: Self = Self(1);
    pub const BLUE: Self = Self(2);
    pub const YELLOW: Self = Self(3);
    pub const ORANGE: Self = Self(4);
    pub const PURPLE: Self = Self(5);
    pub const BROWN: Self = Self(6);
    pub const BLACK: Self = Self(7);
    pub const WHITE: Self = Self(8);

    /// Wrap a raw index. The index is not checked.
    pub const fn new(index: i32) -> Self {
        Self(index)
    }

    /// The raw palette index.
    pub const fn index(self) -> i32 {
        self.0
    }

    /// Check if the index names a palette entry.
    pub const fn is_valid(self) -> bool {
        self.0 >= 0 && self.0 < Palette::LEN as i32
    }

    /// Look up a colour by palette name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Palette::lookup(name)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<i32> for Color {
    fn from(index: i32) -> Self {
        Self(index)
    }
}

impl FromStr for Color {
    type Err = RasterError;

    /// Accepts either a decimal index or a palette name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<i32>() {
            return Ok(Self(index));
        }
        Self::from_name(s).ok_or_else(|| RasterError::Parse {
            message: format!("Unknown colour: {}", s),
            help: Some(format!(
                "Use an index 0-8 or one of: {}",
                Palette::iter()
                    .map(|(_, name, _)| name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scene files may give a colour as an index or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Index(i32),
    Name(String),
}

impl TryFrom<ColorRepr> for Color {
    type Error = String;

    fn try_from(repr: ColorRepr) -> std::result::Result<Self, Self::Error> {
        match repr {
            ColorRepr::Index(index) => Ok(Self(index)),
            ColorRepr::Name(name) => name.parse().map_err(|e: RasterError| e.to_string()),
        }
    }
}

/// An 8-bit-per-channel RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
