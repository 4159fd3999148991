//! Box assembler.
//!
//! Turns a [`BoxSpec`](crate::BoxSpec) into the full list of output lines:
//! top border, padded interior, bottom border. Styling is kept out of the
//! text and reported as column-range annotations instead.

mod core;

pub use self::core::{
    MIN_WIDTH, RenderedBox, StyleSpan, StyleToken, assemble, render_to_string,
};
