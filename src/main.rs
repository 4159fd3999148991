//! # title-box
//!
//! Print a titled, bordered text box to standard output.
//!
//! ```bash
//! title-box "Hello World"
//! title-box "My Title" --width 60 --color green
//! title-box --titles Left,Right --title-align space-between -w 50
//! title-box "日本語タイトル" --border-style double --truncate -w 15
//! ```

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use title_box::Size;
use title_box::driver::{CliArgs, CliDriver, DriverOptions, DriverResult, OutputFormat};
use title_box::logging::{FileSink, Logger};

/// Log files are truncated once they pass this size.
const LOG_MAX_BYTES: u64 = 1024 * 1024;

fn main() -> ExitCode {
    if std::env::args_os().len() <= 1 {
        let _ = CliArgs::command().print_help();
        return ExitCode::SUCCESS;
    }

    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // help and version go to stdout and are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("title-box: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> DriverResult<()> {
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();

    let options = DriverOptions {
        format: args.format,
        color: interactive && !args.no_color && args.format == OutputFormat::Text,
        host: if interactive { Size::terminal() } else { None },
        full_width_safe: args.full_width_safe,
    };

    let mut driver = CliDriver::new(args.to_spec(), options);
    if let Some(path) = &args.log_file {
        driver = driver.with_logger(Logger::new(FileSink::new(path, LOG_MAX_BYTES)?));
    }

    let mut handle = stdout.lock();
    driver.run(&mut handle)?;
    Ok(())
}
