use thiserror::Error;

/// Unified result type for the box layout engine.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors surfaced by the layout engine when a box cannot be described.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown border style `{0}` (expected single, double, round, bold or ascii)")]
    UnknownBorderStyle(String),
    #[error("unknown title alignment `{0}` (expected left, center, right or space-between)")]
    UnknownAlignment(String),
    #[error("unknown title position `{0}` (expected top or bottom)")]
    UnknownPosition(String),
    #[error("width {width} is too small, a box needs at least {min} columns")]
    WidthTooSmall { width: usize, min: usize },
    #[error("line {line} is {actual} columns wide, expected {expected}")]
    LineWidthMismatch {
        line: usize,
        expected: usize,
        actual: usize,
    },
}
