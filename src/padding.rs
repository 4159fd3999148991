//! Layered padding resolution.
//!
//! Each side walks its own chain: explicit side, then the matching axis
//! (`x` for left/right, `y` for top/bottom), then the uniform value, then
//! the caller's default.

use serde::{Deserialize, Serialize};

/// Padding applied when nothing more specific is supplied.
pub const DEFAULT_PADDING: usize = 1;

/// Optional padding inputs as supplied by a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingInput {
    pub padding: Option<usize>,
    pub padding_x: Option<usize>,
    pub padding_y: Option<usize>,
    pub top: Option<usize>,
    pub bottom: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Final per-side padding for one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedPadding {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl PaddingInput {
    pub fn uniform(padding: usize) -> Self {
        Self {
            padding: Some(padding),
            ..Self::default()
        }
    }

    pub fn resolve(&self, default: usize) -> ResolvedPadding {
        let side = |explicit: Option<usize>, axis: Option<usize>| {
            explicit.or(axis).or(self.padding).unwrap_or(default)
        };
        ResolvedPadding {
            top: side(self.top, self.padding_y),
            bottom: side(self.bottom, self.padding_y),
            left: side(self.left, self.padding_x),
            right: side(self.right, self.padding_x),
        }
    }
}
