//! Title line composer.
//!
//! Builds a single top or bottom border line with titles embedded in it.
//! Every composed line measures exactly the requested width; titles that do
//! not fit are truncated or auto-shrunk, never allowed to push the corner
//! glyphs out of place.

mod core;

pub use self::core::{
    ComposedLine, OverflowKind, TitleOverflow, TitleRun, compose_border_line, plain_border_line,
};
