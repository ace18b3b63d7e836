//! Display colors
//!
//! Purely cosmetic. Built once and handed to whatever draws the game; the
//! simulation never sees it.

use serde::{Deserialize, Serialize};

use crate::error::SnakeError;

/// The colors a player can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    Red,
    Green,
    Blue,
    Black,
    White,
    Yellow,
    Cyan,
    Magenta,
}

impl NamedColor {
    /// Menu order
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Black,
        NamedColor::White,
        NamedColor::Yellow,
        NamedColor::Cyan,
        NamedColor::Magenta,
    ];

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            NamedColor::Red => [255, 0, 0],
            NamedColor::Green => [0, 255, 0],
            NamedColor::Blue => [0, 0, 255],
            NamedColor::Black => [0, 0, 0],
            NamedColor::White => [255, 255, 255],
            NamedColor::Yellow => [255, 255, 0],
            NamedColor::Cyan => [0, 255, 255],
            NamedColor::Magenta => [255, 0, 255],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamedColor::Red => "Red",
            NamedColor::Green => "Green",
            NamedColor::Blue => "Blue",
            NamedColor::Black => "Black",
            NamedColor::White => "White",
            NamedColor::Yellow => "Yellow",
            NamedColor::Cyan => "Cyan",
            NamedColor::Magenta => "Magenta",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

/// Colors for each drawable piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub head: NamedColor,
    pub tail: NamedColor,
    pub fruit: NamedColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            head: NamedColor::Green,
            tail: NamedColor::Green,
            fruit: NamedColor::Red,
        }
    }
}

/// A palette resolved to RGB triples, as a renderer consumes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteRgb {
    pub head: [u8; 3],
    pub tail: [u8; 3],
    pub fruit: [u8; 3],
}

impl Palette {
    /// Parse a palette from JSON. Missing entries keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SnakeError> {
        let palette = serde_json::from_str(json)?;
        log::debug!("Loaded palette {:?}", palette);
        Ok(palette)
    }

    pub fn rgb(&self) -> PaletteRgb {
        PaletteRgb {
            head: self.head.rgb(),
            tail: self.tail.rgb(),
            fruit: self.fruit.rgb(),
        }
    }
}
