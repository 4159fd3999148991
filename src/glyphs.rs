//! Border glyph registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Line-drawing family used for the box frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Single,
    Double,
    #[default]
    Round,
    Bold,
    Ascii,
}

/// Corner, horizontal and vertical glyphs for one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl GlyphSet {
    const fn new(corners: [char; 4], horizontal: char, vertical: char) -> Self {
        Self {
            top_left: corners[0],
            top_right: corners[1],
            bottom_left: corners[2],
            bottom_right: corners[3],
            horizontal,
            vertical,
        }
    }

    /// Left and right corners for the top or bottom edge.
    pub fn corners(&self, edge: Edge) -> (char, char) {
        match edge {
            Edge::Top => (self.top_left, self.top_right),
            Edge::Bottom => (self.bottom_left, self.bottom_right),
        }
    }
}

/// Which horizontal border a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

static SINGLE: GlyphSet = GlyphSet::new(['┌', '┐', '└', '┘'], '─', '│');
static DOUBLE: GlyphSet = GlyphSet::new(['╔', '╗', '╚', '╝'], '═', '║');
static ROUND: GlyphSet = GlyphSet::new(['╭', '╮', '╰', '╯'], '─', '│');
static BOLD: GlyphSet = GlyphSet::new(['┏', '┓', '┗', '┛'], '━', '┃');
static ASCII: GlyphSet = GlyphSet::new(['+', '+', '+', '+'], '-', '|');

impl BorderStyle {
    pub const ALL: [BorderStyle; 5] = [
        BorderStyle::Single,
        BorderStyle::Double,
        BorderStyle::Round,
        BorderStyle::Bold,
        BorderStyle::Ascii,
    ];

    /// Shared, read-only glyph table for this style.
    pub fn glyphs(self) -> &'static GlyphSet {
        match self {
            BorderStyle::Single => &SINGLE,
            BorderStyle::Double => &DOUBLE,
            BorderStyle::Round => &ROUND,
            BorderStyle::Bold => &BOLD,
            BorderStyle::Ascii => &ASCII,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::Round => "round",
            BorderStyle::Bold => "bold",
            BorderStyle::Ascii => "ascii",
        }
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BorderStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(BorderStyle::Single),
            "double" => Ok(BorderStyle::Double),
            "round" | "rounded" => Ok(BorderStyle::Round),
            "bold" | "heavy" => Ok(BorderStyle::Bold),
            "ascii" => Ok(BorderStyle::Ascii),
            _ => Err(ConfigError::UnknownBorderStyle(s.to_string())),
        }
    }
}
