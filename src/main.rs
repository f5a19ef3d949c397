//! Main application entry point.
//!
//! Parses the command line and dispatches to the library:
//!
//! - `bulbutil [OPTIONS]`: run the configured mode until interrupted
//! - `bulbutil sun [--date YYYY-MM-DD]`: print solar times and exit
//! - `--help` / `--version`: print and exit
//!
//! Startup errors (bad configuration, unknown timezone, missing joystick) are
//! printed with their full context chain and exit with status 1. A run ended
//! by a shutdown signal exits with status 0.

use anyhow::Result;

use bulbutil::args::{self, CliAction, CommonOptions, ParsedArgs};
use bulbutil::commands;
use bulbutil::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use bulbutil::logger::{Log, LoggerGuard};
use bulbutil::{Bulbutil, log_end, log_error_exit, log_pipe, log_warning};

/// Apply the logging options shared by every command.
fn init_logging(options: &CommonOptions) -> Option<LoggerGuard> {
    Log::set_debug(options.debug_enabled);

    let path = options.log_file.clone()?;
    match Log::start_file_logging(path.clone()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            log_pipe!();
            log_warning!("Cannot log to {path}: {e}");
            None
        }
    }
}

fn run(action: CliAction) -> Result<()> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(EXIT_FAILURE);
        }
        CliAction::Run(options) => Bulbutil::new(options).run().map(|_| ()),
        CliAction::Sun { options, date } => commands::sun::handle_sun_command(&options, date),
    }
}

fn main() {
    let parsed_args = ParsedArgs::from_env();

    // Kept alive until after the final error message
    let log_guard = match &parsed_args.action {
        CliAction::Run(options) | CliAction::Sun { options, .. } => init_logging(options),
        _ => None,
    };

    let code = match run(parsed_args.action) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            log_error_exit!("{e:#}");
            log_end!();
            EXIT_FAILURE
        }
    };

    drop(log_guard);
    std::process::exit(code);
}
