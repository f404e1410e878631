//! Colors, fixed palettes, and the round-robin palette cycler.

use crate::error::PlotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Blue,
    Green,
    Red,
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Resolves the color to 8-bit RGB components.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Blue => (0, 0, 255),
            Color::Green => (0, 128, 0),
            Color::Red => (255, 0, 0),
            Color::Cyan => (0, 191, 191),
            Color::Magenta => (191, 0, 191),
            Color::Yellow => (191, 191, 0),
            Color::Black => (0, 0, 0),
            Color::White => (255, 255, 255),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Color {
    type Err = PlotError;

    /// Accepts single-letter codes (`"k"`), names (`"black"`), and `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let color = match trimmed.to_ascii_lowercase().as_str() {
            "b" | "blue" => Color::Blue,
            "g" | "green" => Color::Green,
            "r" | "red" => Color::Red,
            "c" | "cyan" => Color::Cyan,
            "m" | "magenta" => Color::Magenta,
            "y" | "yellow" => Color::Yellow,
            "k" | "black" => Color::Black,
            "w" | "white" => Color::White,
            hex if hex.len() == 7
                && hex.starts_with('#')
                && hex[1..].chars().all(|c| c.is_ascii_hexdigit()) =>
            {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&hex[range], 16)
                        .map_err(|_| PlotError::InvalidSettings(format!("invalid color: {s}")))
                };
                Color::Rgb(channel(1..3)?, channel(3..5)?, channel(5..7)?)
            }
            _ => return Err(PlotError::InvalidSettings(format!("unknown color: {s}"))),
        };
        Ok(color)
    }
}

/// Colors handed out by `plot_vecs`, by position.
pub const VECTOR_PALETTE: [Color; 6] = [
    Color::Black,
    Color::Blue,
    Color::Green,
    Color::Red,
    Color::Cyan,
    Color::Magenta,
];

/// Colors handed out to planes drawn without an explicit color.
pub const PLANE_PALETTE: [Color; 6] = [
    Color::Blue,
    Color::Green,
    Color::Red,
    Color::Cyan,
    Color::Magenta,
    Color::Black,
];

/// Default cycle for lines plotted without a color.
pub const LINE_PALETTE: [Color; 10] = [
    Color::rgb(0x1f, 0x77, 0xb4),
    Color::rgb(0xff, 0x7f, 0x0e),
    Color::rgb(0x2c, 0xa0, 0x2c),
    Color::rgb(0xd6, 0x27, 0x28),
    Color::rgb(0x94, 0x67, 0xbd),
    Color::rgb(0x8c, 0x56, 0x4b),
    Color::rgb(0xe3, 0x77, 0xc2),
    Color::rgb(0x7f, 0x7f, 0x7f),
    Color::rgb(0xbc, 0xbd, 0x22),
    Color::rgb(0x17, 0xbe, 0xcf),
];

/// Color at `index`, wrapping around the palette.
pub fn palette_color(palette: &[Color], index: usize) -> Color {
    palette[index % palette.len()]
}

/// Round-robin palette state.
///
/// Not shared: whoever owns a cycler owns its sequence, and two cyclers never
/// observe each other's progress. Not thread-safe.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCycler {
    palette: Vec<Color>,
    index: usize,
    start: usize,
}

impl ColorCycler {
    /// # Panics
    /// If `palette` is empty.
    pub fn new(palette: &[Color]) -> Self {
        Self::starting_at(palette, 0)
    }

    pub fn starting_at(palette: &[Color], start: usize) -> Self {
        assert!(!palette.is_empty(), "color palette must not be empty");
        let start = start % palette.len();
        Self {
            palette: palette.to_vec(),
            index: start,
            start,
        }
    }

    /// The cycler used for planes.
    pub fn planes() -> Self {
        Self::new(&PLANE_PALETTE)
    }

    /// Returns the current color and advances by one.
    pub fn next_color(&mut self) -> Color {
        let current = self.palette[self.index];
        self.index = (self.index + 1) % self.palette.len();
        current
    }

    pub fn peek(&self) -> Color {
        self.palette[self.index]
    }

    /// Rewinds to the start index given at construction.
    pub fn reset(&mut self) {
        self.index = self.start;
    }
}

impl Default for ColorCycler {
    fn default() -> Self {
        Self::planes()
    }
}
