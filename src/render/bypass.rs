//! Direct rendering for boxes wider than the host surface.
//!
//! An interactive surface clamps every line to the visible width. When the
//! requested width is larger, the box is assembled as usual and written
//! line by line with no clamp, so the caller always gets the width it asked
//! for.

use std::io::Write;

use crate::assemble::{RenderedBox, assemble};
use crate::config::BoxSpec;
use crate::geometry::Size;
use crate::render::{RenderError, RendererSettings, SurfaceRenderer};

/// Whether `requested` columns would be clamped by a host of size `host`.
///
/// An unknown host (output is not a terminal) always takes the bypass.
pub fn needs_bypass(requested: usize, host: Option<Size>) -> bool {
    host.is_none_or(|size| requested > usize::from(size.width))
}

/// Assemble `spec` and write it unclamped.
pub fn render_direct(
    spec: &BoxSpec,
    writer: &mut impl Write,
    color: bool,
) -> Result<RenderedBox, RenderError> {
    let rendered = assemble(spec)?;
    let mut renderer = SurfaceRenderer::new(RendererSettings {
        surface_width: None,
        color,
    });
    renderer.render(writer, &rendered)?;
    Ok(rendered)
}
