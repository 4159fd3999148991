//! Command-line front end.
//!
//! Flag parsing lives in [`cli`]; the binary only wires stdout, the host
//! terminal size and exit codes around it.

pub mod cli;

pub use cli::{
    CliArgs, CliDriver, DriverError, DriverOptions, DriverResult, MAX_PADDING, MAX_WIDTH,
    OutputFormat,
};
