//! Terminal display width helpers.
//!
//! Widths come from a bounded classification table rather than a full
//! East-Asian-Width implementation. Only the CJK, Kana and Hangul blocks are
//! treated as double width, and only control characters as zero width.
//! Combining marks, emoji and other wide code points measure as one column.
//! Text is passed through [`sanitize`] before layout so no zero-width control
//! character ever reaches the output.

mod core;
mod ellipsis;

pub use self::core::{char_width, sanitize, str_width};
pub use self::ellipsis::{ELLIPSIS, clip, pad_to, truncate};
