use std::fmt;

use blake3::Hash;
use serde::Serialize;

use crate::compose::{TitleOverflow, TitleRun, compose_border_line, plain_border_line};
use crate::config::{BoxSpec, Title, TitlePosition};
use crate::error::{ConfigError, Result};
use crate::glyphs::{Edge, GlyphSet};
use crate::padding::DEFAULT_PADDING;
use crate::width::{pad_to, sanitize, str_width, truncate};

/// Narrowest box that can still draw both corners.
pub const MIN_WIDTH: usize = 2;

/// Style to apply over a column range of one output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum StyleToken {
    /// Border glyphs, carrying the caller's opaque color token.
    Border(String),
    Bold,
}

/// Annotation covering display columns `[start, end)` of `line`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSpan {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub token: StyleToken,
}

/// Output of one render: plain lines of identical width plus annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBox {
    pub width: usize,
    pub lines: Vec<String>,
    pub spans: Vec<StyleSpan>,
    pub overflow: Vec<TitleOverflow>,
}

impl RenderedBox {
    /// Content hash of the rendered text, ignoring annotations.
    ///
    /// Two boxes that differ only in color or bold styling share a digest.
    pub fn digest(&self) -> Hash {
        blake3::hash(self.to_string().as_bytes())
    }

    pub fn spans_for_line(&self, line: usize) -> impl Iterator<Item = &StyleSpan> {
        self.spans.iter().filter(move |span| span.line == line)
    }
}

impl fmt::Display for RenderedBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Render a box straight to newline-joined text.
pub fn render_to_string(spec: &BoxSpec) -> Result<String> {
    assemble(spec).map(|rendered| rendered.to_string())
}

struct Assembler<'a> {
    spec: &'a BoxSpec,
    glyphs: &'static GlyphSet,
    out: RenderedBox,
}

/// Lay out every line of the box described by `spec`.
pub fn assemble(spec: &BoxSpec) -> Result<RenderedBox> {
    if spec.width < MIN_WIDTH {
        return Err(ConfigError::WidthTooSmall {
            width: spec.width,
            min: MIN_WIDTH,
        });
    }

    let padding = spec.padding.resolve(DEFAULT_PADDING);
    let cleaned: Vec<Title> = spec
        .present_titles()
        .into_iter()
        .map(|title| Title {
            text: sanitize(&title.text).into_owned(),
            bold: title.bold,
        })
        .collect();
    let titles: Vec<&Title> = cleaned.iter().collect();

    let mut assembler = Assembler {
        spec,
        glyphs: spec.border_style.glyphs(),
        out: RenderedBox {
            width: spec.width,
            lines: Vec::new(),
            spans: Vec::new(),
            overflow: Vec::new(),
        },
    };

    let top_titles: &[&Title] = match spec.title_position {
        TitlePosition::Top => titles.as_slice(),
        TitlePosition::Bottom => &[],
    };
    let bottom_titles: &[&Title] = match spec.title_position {
        TitlePosition::Top => &[],
        TitlePosition::Bottom => titles.as_slice(),
    };

    assembler.push_border(Edge::Top, spec.borders.top, top_titles);

    // Horizontal padding gives way before the content area goes negative.
    let avail = spec.width - 2;
    let left = padding.left.min(avail);
    let right = padding.right.min(avail - left);
    let content_width = avail - left - right;

    let content: Vec<String> = spec
        .body
        .iter()
        .flat_map(|line| line.split('\n'))
        .map(|line| sanitize(line).into_owned())
        .collect();
    let used = 2 + padding.top + content.len() + padding.bottom;
    let filler = spec.min_height.map_or(0, |min| min.saturating_sub(used));

    for _ in 0..padding.top {
        assembler.push_interior("", left, right, content_width);
    }
    for line in &content {
        assembler.push_interior(line, left, right, content_width);
    }
    for _ in 0..filler + padding.bottom {
        assembler.push_interior("", left, right, content_width);
    }

    assembler.push_border(Edge::Bottom, spec.borders.bottom, bottom_titles);

    let rendered = assembler.out;
    for (index, line) in rendered.lines.iter().enumerate() {
        let actual = str_width(line);
        if actual != rendered.width {
            return Err(ConfigError::LineWidthMismatch {
                line: index,
                expected: rendered.width,
                actual,
            });
        }
    }
    Ok(rendered)
}

impl Assembler<'_> {
    fn next_index(&self) -> usize {
        self.out.lines.len()
    }

    fn border_span(&mut self, start: usize, end: usize) {
        if let Some(color) = &self.spec.border_color {
            if start < end {
                self.out.spans.push(StyleSpan {
                    line: self.out.lines.len(),
                    start,
                    end,
                    token: StyleToken::Border(color.clone()),
                });
            }
        }
    }

    fn push_border(&mut self, edge: Edge, visible: bool, titles: &[&Title]) {
        let width = self.spec.width;
        if !visible {
            self.out.lines.push(" ".repeat(width));
            return;
        }

        if titles.is_empty() {
            self.border_span(0, width);
            self.out
                .lines
                .push(plain_border_line(width, self.glyphs, edge));
            return;
        }

        let composed = compose_border_line(
            titles,
            width,
            self.glyphs,
            self.spec.title_align,
            self.spec.truncate,
            edge,
        );
        self.annotate_title_line(&composed.titles);
        self.out.overflow.extend(composed.overflow);
        self.out.lines.push(composed.text);
    }

    /// Border color over the glyph segments, bold over the titles.
    fn annotate_title_line(&mut self, runs: &[TitleRun]) {
        let line = self.next_index();
        let mut cursor = 0;
        for run in runs {
            self.border_span(cursor, run.start);
            if run.bold {
                self.out.spans.push(StyleSpan {
                    line,
                    start: run.start,
                    end: run.end,
                    token: StyleToken::Bold,
                });
            }
            cursor = run.end;
        }
        self.border_span(cursor, self.spec.width);
    }

    fn push_interior(&mut self, content: &str, left: usize, right: usize, content_width: usize) {
        let width = self.spec.width;
        let sides = self.spec.borders;
        let mut line = String::with_capacity(width + 8);

        line.push(if sides.left { self.glyphs.vertical } else { ' ' });
        line.push_str(&" ".repeat(left));
        line.push_str(&pad_to(&truncate(content, content_width), content_width));
        line.push_str(&" ".repeat(right));
        line.push(if sides.right { self.glyphs.vertical } else { ' ' });

        if sides.left {
            self.border_span(0, 1);
        }
        if sides.right {
            self.border_span(width - 1, width);
        }
        self.out.lines.push(line);
    }
}
