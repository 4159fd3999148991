use serde::Serialize;

use crate::config::{Title, TitleAlign};
use crate::glyphs::{Edge, GlyphSet};
use crate::width::{str_width, truncate};

/// How an oversized title was brought back inside the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowKind {
    /// Truncation was requested and applied.
    Truncated,
    /// Truncation was off but the title still had to shrink to fit.
    AutoShrunk,
}

/// Notice that a title was shortened while composing a border line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleOverflow {
    pub kind: OverflowKind,
    pub title: String,
    pub natural_width: usize,
    pub rendered_width: usize,
}

impl TitleOverflow {
    fn new(kind: OverflowKind, full: &str, rendered: &str) -> Self {
        Self {
            kind,
            title: full.to_string(),
            natural_width: str_width(full),
            rendered_width: str_width(rendered),
        }
    }
}

/// Display columns `[start, end)` occupied by title text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleRun {
    pub start: usize,
    pub end: usize,
    pub bold: bool,
}

/// A finished border line plus where its titles landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedLine {
    pub text: String,
    pub titles: Vec<TitleRun>,
    pub overflow: Vec<TitleOverflow>,
}

impl ComposedLine {
    fn plain(text: String) -> Self {
        Self {
            text,
            titles: Vec::new(),
            overflow: Vec::new(),
        }
    }
}

fn fill(glyph: char, count: usize) -> String {
    std::iter::repeat(glyph).take(count).collect()
}

/// Border line without titles: corner, horizontal fill, corner.
///
/// `width` must be at least 2; callers validate this before composing.
pub fn plain_border_line(width: usize, glyphs: &GlyphSet, edge: Edge) -> String {
    let (left, right) = glyphs.corners(edge);
    let mut line = String::with_capacity(width * 3);
    line.push(left);
    line.push_str(&fill(glyphs.horizontal, width.saturating_sub(2)));
    line.push(right);
    line
}

/// Compose a border line carrying `titles`.
///
/// Empty titles must already be filtered out. Space-between only applies to
/// exactly two titles; any other count is joined with a single space and
/// placed by `align` (space-between then places it like `left`).
pub fn compose_border_line(
    titles: &[&Title],
    width: usize,
    glyphs: &GlyphSet,
    align: TitleAlign,
    truncate_titles: bool,
    edge: Edge,
) -> ComposedLine {
    match titles {
        [] => ComposedLine::plain(plain_border_line(width, glyphs, edge)),
        [first, second] if align == TitleAlign::SpaceBetween => {
            space_between(first, second, width, glyphs, truncate_titles, edge)
        }
        _ => combined(titles, width, glyphs, align, truncate_titles, edge),
    }
}

fn combined(
    titles: &[&Title],
    width: usize,
    glyphs: &GlyphSet,
    align: TitleAlign,
    truncate_titles: bool,
    edge: Edge,
) -> ComposedLine {
    let inner = width.saturating_sub(2);
    let joined = titles
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let bold = titles.iter().all(|t| t.bold);

    let mut overflow = Vec::new();
    let mut text = joined.clone();
    let max_title = inner.saturating_sub(2);
    if truncate_titles && str_width(&text) > max_title {
        text = truncate(&joined, max_title);
        overflow.push(TitleOverflow::new(OverflowKind::Truncated, &joined, &text));
    }

    if str_width(&text) + 2 > inner {
        text = truncate(&joined, inner.saturating_sub(4));
        overflow.push(TitleOverflow::new(OverflowKind::AutoShrunk, &joined, &text));
    }

    let title_width = str_width(&text);
    if text.is_empty() || title_width + 2 > inner {
        let mut line = ComposedLine::plain(plain_border_line(width, glyphs, edge));
        line.overflow = overflow;
        return line;
    }

    let remaining = inner - title_width - 2;
    let (before, after) = match align {
        TitleAlign::Left | TitleAlign::SpaceBetween => (0, remaining),
        TitleAlign::Right => (remaining, 0),
        TitleAlign::Center => (remaining / 2, remaining - remaining / 2),
    };

    let (left, right) = glyphs.corners(edge);
    let mut line = String::with_capacity(width * 3);
    line.push(left);
    line.push_str(&fill(glyphs.horizontal, before));
    line.push(' ');
    line.push_str(&text);
    line.push(' ');
    line.push_str(&fill(glyphs.horizontal, after));
    line.push(right);

    let start = 1 + before + 1;
    ComposedLine {
        text: line,
        titles: vec![TitleRun {
            start,
            end: start + title_width,
            bold,
        }],
        overflow,
    }
}

fn space_between(
    first: &Title,
    second: &Title,
    width: usize,
    glyphs: &GlyphSet,
    truncate_titles: bool,
    edge: Edge,
) -> ComposedLine {
    let inner = width.saturating_sub(2);
    let max_each = inner.saturating_sub(1) / 2;

    let mut overflow = Vec::new();
    let mut shrink = |title: &Title, kind: OverflowKind, current: String| -> String {
        let shrunk = truncate(&title.text, max_each);
        if shrunk != current {
            overflow.push(TitleOverflow::new(kind, &title.text, &shrunk));
        }
        shrunk
    };

    let mut left_text = first.text.clone();
    let mut right_text = second.text.clone();
    if truncate_titles {
        left_text = shrink(first, OverflowKind::Truncated, left_text);
        right_text = shrink(second, OverflowKind::Truncated, right_text);
    }
    if str_width(&left_text) + str_width(&right_text) + 1 > inner {
        left_text = shrink(first, OverflowKind::AutoShrunk, left_text);
        right_text = shrink(second, OverflowKind::AutoShrunk, right_text);
    }

    let left_width = str_width(&left_text);
    let right_width = str_width(&right_text);
    let gap = inner.saturating_sub(left_width + right_width);

    let (left, right) = glyphs.corners(edge);
    let mut line = String::with_capacity(width * 3);
    line.push(left);
    line.push_str(&left_text);
    line.push_str(&fill(glyphs.horizontal, gap));
    line.push_str(&right_text);
    line.push(right);

    let mut titles = Vec::new();
    if left_width > 0 {
        titles.push(TitleRun {
            start: 1,
            end: 1 + left_width,
            bold: first.bold,
        });
    }
    if right_width > 0 {
        let end = width - 1;
        titles.push(TitleRun {
            start: end - right_width,
            end,
            bold: second.bold,
        });
    }

    ComposedLine {
        text: line,
        titles,
        overflow,
    }
}
