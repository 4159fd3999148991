//! Titled, bordered text boxes for terminal display.
//!
//! The core is a pure layout engine: a [`BoxSpec`] goes in, a
//! [`RenderedBox`] comes out, and every line of it measures exactly
//! `spec.width` display columns. Painting, terminal detection and the
//! command-line front end sit on top in [`render`] and [`driver`].
//!
//! ```
//! use title_box::{BoxSpec, BorderStyle, assemble};
//!
//! let spec = BoxSpec::new(30)
//!     .with_title("Test Title")
//!     .with_border_style(BorderStyle::Round);
//! let rendered = assemble(&spec).unwrap();
//! assert!(rendered.lines[0].starts_with('╭'));
//! ```

pub mod assemble;
pub mod compose;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod glyphs;
pub mod logging;
pub mod padding;
pub mod render;
pub mod width;

pub use assemble::{RenderedBox, StyleSpan, StyleToken, assemble, render_to_string};
pub use compose::{ComposedLine, OverflowKind, TitleOverflow, compose_border_line};
pub use config::{BorderSides, BoxSpec, Title, TitleAlign, TitlePosition};
pub use error::{ConfigError, Result};
pub use geometry::Size;
pub use glyphs::{BorderStyle, Edge, GlyphSet};
pub use logging::{LogEvent, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use padding::{PaddingInput, ResolvedPadding};
pub use render::{RendererSettings, SurfaceRenderer, needs_bypass, render_direct};
pub use width::{sanitize, str_width, truncate};
