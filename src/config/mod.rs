//! Box description types.
//!
//! A [`BoxSpec`] is built once per render, either through the builder
//! methods here or from command-line flags, and never mutated by the
//! layout engine.

mod core;

pub use self::core::{BorderSides, BoxSpec, DEFAULT_WIDTH, Title, TitleAlign, TitlePosition};
