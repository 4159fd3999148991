use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde_json::json;
use thiserror::Error;

use crate::assemble::{RenderedBox, assemble};
use crate::compose::OverflowKind;
use crate::config::{BorderSides, BoxSpec, DEFAULT_WIDTH, Title, TitleAlign, TitlePosition};
use crate::error::ConfigError;
use crate::geometry::Size;
use crate::glyphs::BorderStyle;
use crate::logging::{LogLevel, Logger, LoggingError, event_with_fields, json_kv, json_str};
use crate::padding::PaddingInput;
use crate::render::{RenderError, RendererSettings, SurfaceRenderer, needs_bypass, render_direct};

/// Widest box the command line accepts.
pub const MAX_WIDTH: u16 = 200;
/// Largest padding the command line accepts on any side.
pub const MAX_PADDING: u8 = 10;

const LOG_TARGET: &str = "title_box::driver";

pub type DriverResult<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Newline-joined box lines
    #[default]
    Text,
    /// Lines, annotations and digest as JSON
    Json,
}

fn parse_style(value: &str) -> Result<BorderStyle, ConfigError> {
    value.parse()
}

fn parse_align(value: &str) -> Result<TitleAlign, ConfigError> {
    value.parse()
}

fn parse_position(value: &str) -> Result<TitlePosition, ConfigError> {
    value.parse()
}

/// Print a titled, bordered text box
#[derive(Parser, Debug, Clone)]
#[command(name = "title-box")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Title embedded in the border
    pub title: Option<String>,

    /// Comma-separated titles; overrides TITLE
    #[arg(long, value_delimiter = ',')]
    pub titles: Vec<String>,

    /// Box width in columns
    #[arg(short, long, default_value_t = DEFAULT_WIDTH as u16, value_parser = clap::value_parser!(u16).range(1..=MAX_WIDTH as i64))]
    pub width: u16,

    /// Padding on every side
    #[arg(short, long, value_parser = padding_parser())]
    pub padding: Option<u8>,

    /// Left and right padding
    #[arg(long, value_parser = padding_parser())]
    pub padding_x: Option<u8>,

    /// Top and bottom padding
    #[arg(long, value_parser = padding_parser())]
    pub padding_y: Option<u8>,

    #[arg(long, value_parser = padding_parser())]
    pub padding_top: Option<u8>,

    #[arg(long, value_parser = padding_parser())]
    pub padding_bottom: Option<u8>,

    #[arg(long, value_parser = padding_parser())]
    pub padding_left: Option<u8>,

    #[arg(long, value_parser = padding_parser())]
    pub padding_right: Option<u8>,

    /// Border color, passed through to the terminal painter
    #[arg(short, long, visible_alias = "border-color", default_value = "blue")]
    pub color: String,

    /// single, double, round, bold or ascii
    #[arg(long, default_value = "round", value_parser = parse_style)]
    pub border_style: BorderStyle,

    /// left, center, right or space-between
    #[arg(long, default_value = "left", value_parser = parse_align)]
    pub title_align: TitleAlign,

    /// top or bottom
    #[arg(long, default_value = "top", value_parser = parse_position)]
    pub title_position: TitlePosition,

    /// Shorten long titles with an ellipsis
    #[arg(long)]
    pub truncate: bool,

    /// Accepted for compatibility; wide glyphs are always measured
    #[arg(long)]
    pub full_width_safe: bool,

    #[arg(long)]
    pub no_border_top: bool,

    #[arg(long)]
    pub no_border_bottom: bool,

    #[arg(long)]
    pub no_border_left: bool,

    #[arg(long)]
    pub no_border_right: bool,

    /// Body line inside the box (repeatable)
    #[arg(short, long = "line", value_name = "TEXT")]
    pub lines: Vec<String>,

    /// Minimum number of output lines
    #[arg(long)]
    pub height: Option<u16>,

    /// Never emit color codes
    #[arg(long)]
    pub no_color: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Append JSON-lines diagnostics to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

fn padding_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(0..=i64::from(MAX_PADDING))
}

impl CliArgs {
    /// Box description for these flags.
    pub fn to_spec(&self) -> BoxSpec {
        let titles: Vec<Title> = if self.titles.is_empty() {
            self.title.iter().map(|t| Title::new(t.as_str())).collect()
        } else {
            self.titles.iter().map(|t| Title::new(t.trim())).collect()
        };

        let side = |value: Option<u8>| value.map(usize::from);
        let padding = PaddingInput {
            padding: side(self.padding),
            padding_x: side(self.padding_x),
            padding_y: side(self.padding_y),
            top: side(self.padding_top),
            bottom: side(self.padding_bottom),
            left: side(self.padding_left),
            right: side(self.padding_right),
        };

        BoxSpec {
            titles,
            width: usize::from(self.width),
            border_style: self.border_style,
            title_align: self.title_align,
            title_position: self.title_position,
            truncate: self.truncate,
            padding,
            borders: BorderSides {
                top: !self.no_border_top,
                bottom: !self.no_border_bottom,
                left: !self.no_border_left,
                right: !self.no_border_right,
            },
            border_color: Some(self.color.clone()),
            body: self.lines.clone(),
            min_height: self.height.map(usize::from),
        }
    }
}

/// How the driver writes its output.
#[derive(Debug, Clone, Default)]
pub struct DriverOptions {
    pub format: OutputFormat,
    pub color: bool,
    /// Host terminal size; `None` when output is not a terminal.
    pub host: Option<Size>,
    pub full_width_safe: bool,
}

/// Renders one box to a writer, choosing between the surface renderer and
/// the direct bypass, and reports what happened to an optional logger.
pub struct CliDriver {
    spec: BoxSpec,
    options: DriverOptions,
    logger: Option<Logger>,
}

impl CliDriver {
    pub fn new(spec: BoxSpec, options: DriverOptions) -> Self {
        Self {
            spec,
            options,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn spec(&self) -> &BoxSpec {
        &self.spec
    }

    pub fn run(&self, writer: &mut impl Write) -> DriverResult<RenderedBox> {
        self.emit(
            LogLevel::Info,
            "render_started",
            [
                json_kv("width", self.spec.width),
                json_str("style", self.spec.border_style.name()),
                json_str("align", self.spec.title_align.to_string()),
                json_str("position", self.spec.title_position.to_string()),
                json_kv("titles", self.spec.present_titles().len()),
            ],
        );
        if self.options.full_width_safe {
            self.emit(LogLevel::Debug, "full_width_safe_ignored", []);
        }

        let rendered = match self.options.format {
            OutputFormat::Json => self.write_json(writer)?,
            OutputFormat::Text => self.write_text(writer)?,
        };

        for overflow in &rendered.overflow {
            let kind = match overflow.kind {
                OverflowKind::Truncated => "truncated",
                OverflowKind::AutoShrunk => "auto_shrunk",
            };
            self.emit(
                LogLevel::Warn,
                "title_overflow",
                [
                    json_str("kind", kind),
                    json_str("title", overflow.title.as_str()),
                    json_kv("natural_width", overflow.natural_width),
                    json_kv("rendered_width", overflow.rendered_width),
                ],
            );
        }

        self.emit(
            LogLevel::Info,
            "render_completed",
            [
                json_kv("lines", rendered.lines.len()),
                json_str("digest", rendered.digest().to_hex().as_str()),
            ],
        );
        Ok(rendered)
    }

    fn write_text(&self, writer: &mut impl Write) -> DriverResult<RenderedBox> {
        if needs_bypass(self.spec.width, self.options.host) {
            self.emit(
                LogLevel::Debug,
                "bypass_selected",
                [
                    json_kv("requested", self.spec.width),
                    json_kv("host", self.options.host.map(|size| size.width)),
                ],
            );
            return Ok(render_direct(&self.spec, writer, self.options.color)?);
        }

        let rendered = assemble(&self.spec)?;
        let mut renderer = SurfaceRenderer::new(RendererSettings {
            surface_width: self.options.host.map(|size| usize::from(size.width)),
            color: self.options.color,
        });
        renderer
            .render(writer, &rendered)
            .map_err(RenderError::from)?;
        Ok(rendered)
    }

    fn write_json(&self, writer: &mut impl Write) -> DriverResult<RenderedBox> {
        let rendered = assemble(&self.spec)?;
        let payload = json!({
            "digest": rendered.digest().to_hex().as_str(),
            "box": &rendered,
        });
        serde_json::to_writer_pretty(&mut *writer, &payload)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(rendered)
    }

    fn emit<const N: usize>(
        &self,
        level: LogLevel,
        message: &str,
        fields: [(String, serde_json::Value); N],
    ) {
        if let Some(logger) = &self.logger {
            let event = event_with_fields(level, LOG_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use crate::width::str_width;

    fn args(flags: &[&str]) -> CliArgs {
        let mut argv = vec!["title-box"];
        argv.extend_from_slice(flags);
        CliArgs::try_parse_from(argv).unwrap()
    }

    fn run_plain(spec: BoxSpec, host: Option<Size>) -> (String, MemorySink) {
        let sink = MemorySink::new();
        let driver = CliDriver::new(
            spec,
            DriverOptions {
                host,
                ..DriverOptions::default()
            },
        )
        .with_logger(Logger::new(sink.clone()));
        let mut output = Vec::new();
        driver.run(&mut output).unwrap();
        (String::from_utf8(output).unwrap(), sink)
    }

    #[test]
    fn defaults_match_documented_cli() {
        let spec = args(&["Hello"]).to_spec();
        assert_eq!(spec.width, DEFAULT_WIDTH);
        assert_eq!(spec.width, BoxSpec::default().width);
        assert_eq!(spec.titles, vec![Title::new("Hello")]);
        assert_eq!(spec.border_style, BorderStyle::Round);
        assert_eq!(spec.border_color.as_deref(), Some("blue"));
        assert_eq!(spec.padding, PaddingInput::default());
    }

    #[test]
    fn short_and_long_flags() {
        let spec = args(&["Mixed Title", "-w", "25", "--padding", "1", "-c", "yellow"]).to_spec();
        assert_eq!(spec.width, 25);
        assert_eq!(spec.padding.padding, Some(1));
        assert_eq!(spec.border_color.as_deref(), Some("yellow"));
    }

    #[test]
    fn titles_list_overrides_positional() {
        let spec = args(&["Single", "--titles", "Left, Right", "--title-align", "space-between"])
            .to_spec();
        assert_eq!(spec.titles, vec![Title::new("Left"), Title::new("Right")]);
        assert_eq!(spec.title_align, TitleAlign::SpaceBetween);
    }

    #[test]
    fn border_and_padding_flags_map_to_spec() {
        let spec = args(&[
            "T",
            "--no-border-left",
            "--padding-x",
            "3",
            "--padding-top",
            "0",
            "--line",
            "one",
            "-l",
            "two",
            "--height",
            "9",
        ])
        .to_spec();
        assert!(!spec.borders.left);
        assert!(spec.borders.right);
        assert_eq!(spec.padding.padding_x, Some(3));
        assert_eq!(spec.padding.top, Some(0));
        assert_eq!(spec.body, vec!["one".to_string(), "two".to_string()]);
        assert_eq!(spec.min_height, Some(9));
    }

    #[test]
    fn invalid_values_are_rejected() {
        for flags in [
            &["T", "--width", "201"][..],
            &["T", "--width", "invalid"],
            &["T", "--padding", "11"],
            &["T", "--border-style", "dotted"],
            &["T", "--title-align", "justify"],
            &["T", "--title-position", "middle"],
            &["T", "--width"],
            &["T", "--bogus"],
        ] {
            let mut argv = vec!["title-box"];
            argv.extend_from_slice(flags);
            assert!(CliArgs::try_parse_from(argv).is_err(), "{flags:?}");
        }
    }

    #[test]
    fn unknown_host_takes_bypass() {
        let (text, sink) = run_plain(BoxSpec::new(150).with_title("Width150"), None);
        assert!(text.lines().all(|line| str_width(line) == 150));
        assert!(sink.messages().contains(&"bypass_selected".to_string()));
    }

    #[test]
    fn fitting_box_uses_surface() {
        let host = Some(Size::new(120, 40));
        let (text, sink) = run_plain(BoxSpec::new(60).with_title("Fits"), host);
        assert!(text.lines().all(|line| str_width(line) == 60));
        let messages = sink.messages();
        assert!(!messages.contains(&"bypass_selected".to_string()));
        assert_eq!(messages.first().map(String::as_str), Some("render_started"));
        assert_eq!(messages.last().map(String::as_str), Some("render_completed"));
    }

    #[test]
    fn overflow_is_logged_as_warning() {
        let spec = BoxSpec::new(20)
            .with_title("This is a very long title that should be truncated")
            .with_truncate(true);
        let (_, sink) = run_plain(spec, None);
        let warning = sink
            .events()
            .into_iter()
            .find(|e| e.message == "title_overflow")
            .unwrap();
        assert_eq!(warning.level, LogLevel::Warn);
        assert_eq!(warning.fields["kind"], "truncated");
    }

    #[test]
    fn json_format_carries_lines_and_digest() {
        let driver = CliDriver::new(
            BoxSpec::new(30).with_title("Json"),
            DriverOptions {
                format: OutputFormat::Json,
                ..DriverOptions::default()
            },
        );
        let mut output = Vec::new();
        let rendered = driver.run(&mut output).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["digest"], rendered.digest().to_hex().as_str());
        assert_eq!(value["box"]["width"], 30);
        assert_eq!(value["box"]["lines"][0], rendered.lines[0].as_str());
    }

    #[test]
    fn width_one_is_a_config_error() {
        let driver = CliDriver::new(BoxSpec::new(1), DriverOptions::default());
        let err = driver.run(&mut Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            DriverError::Render(RenderError::Config(ConfigError::WidthTooSmall { .. }))
        ));
    }
}
