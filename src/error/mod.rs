//! Error module orchestrator.
//!
//! Layout code only ever fails with a [`ConfigError`]; title overflow is
//! recovered inside the composer and never surfaces here.

mod types;

pub use types::{ConfigError, Result};
