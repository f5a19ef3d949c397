//! Command-line argument parsing.
//!
//! Turns the raw argument list into a [`CliAction`]. Invalid input never
//! panics or exits here: a warning is logged and the action becomes
//! [`CliAction::ShowHelpDueToError`], leaving the exit to `main`.

use chrono::NaiveDate;

use crate::config::ConfigOverrides;
use crate::modes::ModeKind;
use crate::time_source::parse_date;

/// Settings shared by every action that runs against a configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonOptions {
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    /// Write output to this file instead of the terminal
    pub log_file: Option<String>,
    pub overrides: ConfigOverrides,
}

/// What the program was asked to do.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Drive the bulb with the configured mode until interrupted
    Run(CommonOptions),
    /// Print sunrise, sunset and solar position for a day
    Sun {
        options: CommonOptions,
        date: Option<NaiveDate>,
    },
    ShowHelp,
    ShowVersion,
    /// Show help due to invalid arguments and exit with failure
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

fn invalid(message: String) -> ParsedArgs {
    log_warning!("{message}");
    ParsedArgs {
        action: CliAction::ShowHelpDueToError,
    }
}

impl ParsedArgs {
    /// Parse arguments; the first item is the program name and is skipped.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        // Help and version win over everything else
        if args.iter().any(|arg| arg == "--help" || arg == "-h") {
            return ParsedArgs {
                action: CliAction::ShowHelp,
            };
        }
        if args.iter().any(|arg| arg == "--version" || arg == "-V") {
            return ParsedArgs {
                action: CliAction::ShowVersion,
            };
        }

        let mut options = CommonOptions::default();
        let mut command: Option<String> = None;
        let mut date: Option<NaiveDate> = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let flag = arg.as_str();

            if matches!(
                flag,
                "--config" | "-c" | "--log" | "--mode" | "-m" | "--lat" | "--lon" | "--interval"
                    | "-i" | "--date"
            ) {
                let Some(value) = iter.next() else {
                    return invalid(format!("Missing value for {flag}"));
                };

                match flag {
                    "--config" | "-c" => options.config_dir = Some(value.clone()),
                    "--log" => options.log_file = Some(value.clone()),
                    "--mode" | "-m" => match value.parse::<ModeKind>() {
                        Ok(mode) => options.overrides.mode = Some(mode),
                        Err(e) => return invalid(e.to_string()),
                    },
                    "--lat" => match parse_number(value, flag) {
                        Ok(lat) => options.overrides.latitude = Some(lat),
                        Err(message) => return invalid(message),
                    },
                    "--lon" => match parse_number(value, flag) {
                        Ok(lon) => options.overrides.longitude = Some(lon),
                        Err(message) => return invalid(message),
                    },
                    "--interval" | "-i" => match parse_number(value, flag) {
                        Ok(secs) => options.overrides.interval = Some(secs),
                        Err(message) => return invalid(message),
                    },
                    _ => match parse_date(value) {
                        Ok(day) => date = Some(day),
                        Err(message) => return invalid(message),
                    },
                }
                continue;
            }

            match flag {
                "--debug" | "-d" => options.debug_enabled = true,
                _ if flag.starts_with('-') && flag.len() > 1 => {
                    return invalid(format!("Unknown argument: {flag}"));
                }
                _ if command.is_some() => {
                    return invalid(format!("Unexpected argument: {flag}"));
                }
                _ => command = Some(flag.to_string()),
            }
        }

        let action = match command.as_deref() {
            None if date.is_some() => {
                return invalid("--date can only be used with the 'sun' command".to_string());
            }
            None => CliAction::Run(options),
            Some("sun") => CliAction::Sun { options, date },
            Some(other) => return invalid(format!("Unknown command: {other}")),
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Numeric flag value; negative numbers such as `--lon -74.0` are accepted.
fn parse_number(value: &str, flag: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("Invalid number for {flag}: '{value}'"))
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("bulbutil [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-m, --mode <name>      Mode to run: circadian, music or joystick");
    log_indented!("    --lat <degrees>    Latitude, positive north");
    log_indented!("    --lon <degrees>    Longitude, positive east");
    log_indented!("-i, --interval <secs>  Seconds between ticks");
    log_indented!("    --log <file>       Write output to a file instead of the terminal");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("sun [--date YYYY-MM-DD] Show sunrise, sunset and solar position");
    log_end!();
}
