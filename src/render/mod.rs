//! Output painting.
//!
//! [`SurfaceRenderer`] paints a [`RenderedBox`](crate::RenderedBox) the way an
//! interactive surface would, clamped to the surface width. The bypass in
//! [`bypass`] writes the full requested width regardless of the host.

pub mod bypass;
mod core;

pub use bypass::{needs_bypass, render_direct};
pub use self::core::{RenderError, RendererSettings, SurfaceRenderer, paint_line, parse_color};
