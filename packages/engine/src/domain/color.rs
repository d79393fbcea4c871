//! Cell colors
//!
//! Colors are packed into a single `u32` in ABGR order
//! (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA]), the same layout as a
//! canvas `ImageData` buffer, so the grid can be copied to JS without conversion.
//! On the JS side and in config JSON they are CSS hex strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

/// Default cell color ("blank")
pub const BLANK: Color = Color::rgb(0xFF, 0xFF, 0xFF);
/// Cell border stroke
pub const BORDER: Color = Color::rgb(0xCC, 0xCC, 0xCC);

pub const MAGENTA: Color = Color::rgb(0xFF, 0x2D, 0xF1);
pub const ORANGE: Color = Color::rgb(0xFF, 0x57, 0x33);
pub const GREEN: Color = Color::rgb(0x33, 0xFF, 0x57);
pub const BLUE: Color = Color::rgb(0x33, 0x57, 0xFF);
pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x33);

/// Swatches offered by the right-click color picker, in display order
pub const PRESET_PALETTE: [Color; 5] = [MAGENTA, ORANGE, GREEN, BLUE, YELLOW];

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    #[inline]
    pub const fn to_abgr(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.a() == 0xFF
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (case-insensitive)
    pub fn from_hex(input: &str) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidColor(input.to_string());

        let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        let digits: Vec<u8> = hex
            .chars()
            .map(|c| c.to_digit(16).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(invalid)?;

        match digits.len() {
            3 | 4 => {
                // #abc == #aabbcc
                let expand = |d: u8| d * 17;
                let a = digits.get(3).map_or(0xFF, |&d| expand(d));
                Ok(Self::rgba(expand(digits[0]), expand(digits[1]), expand(digits[2]), a))
            }
            6 | 8 => {
                let byte = |i: usize| (digits[i] << 4) | digits[i + 1];
                let a = if digits.len() == 8 { byte(6) } else { 0xFF };
                Ok(Self::rgba(byte(0), byte(2), byte(4), a))
            }
            _ => Err(invalid()),
        }
    }

    /// CSS hex string; alpha is only written when not opaque
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r(), self.g(), self.b(), self.a())
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
