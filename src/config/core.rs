use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::glyphs::BorderStyle;
use crate::padding::PaddingInput;

/// Width used when a caller does not pick one.
pub const DEFAULT_WIDTH: usize = 40;

/// Horizontal placement of titles inside a border line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleAlign {
    #[default]
    Left,
    Center,
    Right,
    /// First title flush left, second flush right. Needs exactly two titles.
    SpaceBetween,
}

impl FromStr for TitleAlign {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TitleAlign::Left),
            "center" | "centre" => Ok(TitleAlign::Center),
            "right" => Ok(TitleAlign::Right),
            "space-between" | "space_between" => Ok(TitleAlign::SpaceBetween),
            _ => Err(ConfigError::UnknownAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for TitleAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TitleAlign::Left => "left",
            TitleAlign::Center => "center",
            TitleAlign::Right => "right",
            TitleAlign::SpaceBetween => "space-between",
        })
    }
}

/// Which border line carries the titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitlePosition {
    #[default]
    Top,
    Bottom,
}

impl FromStr for TitlePosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(TitlePosition::Top),
            "bottom" => Ok(TitlePosition::Bottom),
            _ => Err(ConfigError::UnknownPosition(s.to_string())),
        }
    }
}

impl fmt::Display for TitlePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TitlePosition::Top => "top",
            TitlePosition::Bottom => "bottom",
        })
    }
}

/// Title text embedded in a border line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    /// Bold titles get a bold annotation over their columns.
    pub bold: bool,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Title::new(text)
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Title::new(text)
    }
}

/// Per-side border visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderSides {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Default for BorderSides {
    fn default() -> Self {
        Self::all()
    }
}

impl BorderSides {
    pub const fn all() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            top: false,
            bottom: false,
            left: false,
            right: false,
        }
    }
}

/// Declarative description of one box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxSpec {
    pub titles: Vec<Title>,
    /// Column count of every output line.
    pub width: usize,
    pub border_style: BorderStyle,
    pub title_align: TitleAlign,
    pub title_position: TitlePosition,
    pub truncate: bool,
    pub padding: PaddingInput,
    pub borders: BorderSides,
    /// Opaque color token handed to whatever paints the output.
    pub border_color: Option<String>,
    /// Interior lines, rendered verbatim.
    pub body: Vec<String>,
    /// Minimum number of output lines; the interior grows with blank lines.
    pub min_height: Option<usize>,
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self {
            titles: Vec::new(),
            width: DEFAULT_WIDTH,
            border_style: BorderStyle::default(),
            title_align: TitleAlign::default(),
            title_position: TitlePosition::default(),
            truncate: false,
            padding: PaddingInput::default(),
            borders: BorderSides::default(),
            border_color: None,
            body: Vec::new(),
            min_height: None,
        }
    }
}

impl BoxSpec {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<Title>) -> Self {
        self.titles.push(title.into());
        self
    }

    pub fn with_titles<I, T>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Title>,
    {
        self.titles = titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_border_style(mut self, style: BorderStyle) -> Self {
        self.border_style = style;
        self
    }

    pub fn with_align(mut self, align: TitleAlign) -> Self {
        self.title_align = align;
        self
    }

    pub fn with_position(mut self, position: TitlePosition) -> Self {
        self.title_position = position;
        self
    }

    pub fn with_truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_padding(mut self, padding: PaddingInput) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_borders(mut self, borders: BorderSides) -> Self {
        self.borders = borders;
        self
    }

    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn with_min_height(mut self, height: usize) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Titles with text, in order. Empty strings count as absent.
    pub fn present_titles(&self) -> Vec<&Title> {
        self.titles.iter().filter(|t| !t.is_empty()).collect()
    }
}
