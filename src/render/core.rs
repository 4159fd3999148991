use std::io::{self, Write};

use blake3::Hash;
use crossterm::style::{Attribute, Color, ContentStyle};
use thiserror::Error;

use crate::assemble::{RenderedBox, StyleSpan, StyleToken};
use crate::error::ConfigError;
use crate::width::{char_width, clip};

/// Failures while laying out or writing a box.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Renderer runtime parameters.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Visible surface width; lines are clamped to it. `None` disables clamping.
    pub surface_width: Option<usize>,
    /// Emit ANSI styling for the box annotations.
    pub color: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            surface_width: None,
            color: true,
        }
    }
}

/// Writes rendered boxes to a terminal-like surface.
///
/// A render identical to the previous one (same text, annotations and
/// settings) is skipped; only changed output is repainted.
pub struct SurfaceRenderer {
    settings: RendererSettings,
    last_painted: Option<Hash>,
}

impl SurfaceRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self {
            settings,
            last_painted: None,
        }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    /// Paint `rendered`. Returns `false` when it matched the previous paint.
    pub fn render(&mut self, writer: &mut impl Write, rendered: &RenderedBox) -> io::Result<bool> {
        let digest = self.paint_key(rendered);
        if self.last_painted == Some(digest) {
            return Ok(false);
        }

        for (index, line) in rendered.lines.iter().enumerate() {
            let visible = match self.settings.surface_width {
                Some(limit) => clip(line, limit),
                None => line.clone(),
            };
            let spans: Vec<&StyleSpan> = rendered.spans_for_line(index).collect();
            let painted = if self.settings.color {
                paint_line(&visible, &spans)
            } else {
                visible
            };
            writeln!(writer, "{}", painted)?;
        }

        writer.flush()?;
        self.last_painted = Some(digest);
        Ok(true)
    }
}

impl SurfaceRenderer {
    /// Hash of everything that shows up on the surface for `rendered`.
    fn paint_key(&self, rendered: &RenderedBox) -> Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(rendered.digest().as_bytes());
        for span in &rendered.spans {
            for value in [span.line, span.start, span.end] {
                hasher.update(&(value as u64).to_le_bytes());
            }
            match &span.token {
                StyleToken::Border(color) => {
                    hasher.update(b"border:");
                    hasher.update(color.as_bytes());
                }
                StyleToken::Bold => {
                    hasher.update(b"bold");
                }
            }
            hasher.update(b";");
        }
        hasher.update(&[u8::from(self.settings.color)]);
        let surface = self.settings.surface_width.map_or(u64::MAX, |w| w as u64);
        hasher.update(&surface.to_le_bytes());
        hasher.finalize()
    }
}

/// Map an opaque color token onto a terminal color, if it names one.
pub fn parse_color(token: &str) -> Option<Color> {
    Color::try_from(token.trim()).ok()
}

fn style_at(column: usize, spans: &[&StyleSpan]) -> ContentStyle {
    let mut style = ContentStyle::new();
    for span in spans {
        if column < span.start || column >= span.end {
            continue;
        }
        match &span.token {
            StyleToken::Border(token) => style.foreground_color = parse_color(token),
            StyleToken::Bold => style.attributes.set(Attribute::Bold),
        }
    }
    style
}

/// Apply column-range annotations to one plain line as ANSI styling.
pub fn paint_line(line: &str, spans: &[&StyleSpan]) -> String {
    if spans.is_empty() {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() * 2);
    let mut run = String::new();
    let mut run_style = ContentStyle::new();
    let mut column = 0;

    for ch in line.chars() {
        let style = style_at(column, spans);
        if style != run_style && !run.is_empty() {
            flush_run(&mut out, &mut run, run_style);
        }
        run_style = style;
        run.push(ch);
        column += char_width(ch);
    }
    flush_run(&mut out, &mut run, run_style);
    out
}

fn flush_run(out: &mut String, run: &mut String, style: ContentStyle) {
    if run.is_empty() {
        return;
    }
    if style == ContentStyle::new() {
        out.push_str(run);
    } else {
        out.push_str(&style.apply(run.as_str()).to_string());
    }
    run.clear();
}
