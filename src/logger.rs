//! Structured terminal output with box-drawing decoration.
//!
//! Every line goes through [`write_output`], which prints to stdout or, once
//! [`Log::start_file_logging`] has been called, hands the line to a writer
//! thread that appends it to a file with color codes removed.
//!
//! ## Conventions
//!
//! - `log_version!` opens the output once at startup: `┏ bulbutil vX.Y.Z ━━╸`.
//! - `log_block_start!` begins a new block with a spacer pipe: `┃` then `┣ message`.
//! - `log_decorated!` continues a block: `┣ message`.
//! - `log_indented!` lists details under the previous line: `┃   message`.
//! - `log_pipe!` inserts an empty `┃` line, mostly before a leveled message
//!   that starts its own block.
//! - `log_end!` closes the output once at shutdown: `╹`.
//! - `log_info!`, `log_warning!`, `log_error!`, `log_critical!` and
//!   `log_debug!` carry a colored `[LEVEL]` tag. `log_debug!` prints only when
//!   debug output is enabled.
//!
//! With debug output enabled, every line is prefixed with the local wall
//! clock time so scheduler cadence can be read straight off the log.

use std::io::Write;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Sender, channel};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

// Set once when --log is given
static LOG_CHANNEL: OnceLock<Sender<LogMessage>> = OnceLock::new();

enum LogMessage {
    Formatted(String),
    Shutdown,
}

/// Global switches for log output.
pub struct Log;

impl Log {
    /// Enable `log_debug!` output and timestamp prefixes.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_debug() -> bool {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }

    /// Route all further output to `file_path` until the guard is dropped.
    pub fn start_file_logging(file_path: String) -> anyhow::Result<LoggerGuard> {
        let file = std::fs::File::create(&file_path)
            .map_err(|e| anyhow::anyhow!("Failed to create log file {file_path}: {e}"))?;
        let (tx, rx) = channel();

        LOG_CHANNEL
            .set(tx.clone())
            .map_err(|_| anyhow::anyhow!("File logging already started"))?;

        let handle = std::thread::spawn(move || {
            let mut file = std::io::BufWriter::new(file);

            loop {
                match rx.recv() {
                    Ok(LogMessage::Formatted(text)) => file.write_all(text.as_bytes())?,
                    Ok(LogMessage::Shutdown) | Err(_) => {
                        file.flush()?;
                        break;
                    }
                }
            }

            Ok::<(), anyhow::Error>(())
        });

        Ok(LoggerGuard {
            tx,
            handle: Some(handle),
        })
    }

    /// `[HH:MM:SS] ` in debug mode, empty otherwise. Public for macro access.
    pub fn get_timestamp_prefix() -> String {
        if Self::is_debug() {
            format!("[{}] ", chrono::Local::now().format("%H:%M:%S"))
        } else {
            String::new()
        }
    }
}

/// Flushes and stops the file writer when dropped.
pub struct LoggerGuard {
    tx: Sender<LogMessage>,
    handle: Option<std::thread::JoinHandle<anyhow::Result<()>>>,
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(LogMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Remove `ESC [ ... m` color sequences.
pub(crate) fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch == 'm' {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Print a finished line, or queue it for the log file. Used by the macros.
pub fn write_output(text: &str) {
    if let Some(tx) = LOG_CHANNEL.get() {
        let _ = tx.send(LogMessage::Formatted(strip_ansi_codes(text)));
    } else {
        print!("{text}");
        let _ = std::io::stdout().flush();
    }
}

/// Shared body of the logging macros: `$layout` receives the timestamp
/// prefix and the formatted message.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($layout:literal, $fmt:literal $($arg:tt)*) => {{
        let prefix = $crate::logger::Log::get_timestamp_prefix();
        let message = format!($fmt $($arg)*);
        $crate::logger::write_output(&format!($layout, prefix = prefix, message = message));
    }};
    ($layout:literal, $expr:expr) => {{
        let prefix = $crate::logger::Log::get_timestamp_prefix();
        let message = $expr;
        $crate::logger::write_output(&format!($layout, prefix = prefix, message = message));
    }};
}

// # Logging Macros

/// Continue the current block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣ {message}\n", $($arg)*)
    };
}

/// Detail line under the previous message.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)*) => {
        $crate::__log_line!("{prefix}┃   {message}\n", $($arg)*)
    };
}

/// Empty spacer line.
#[macro_export]
macro_rules! log_pipe {
    () => {
        $crate::__log_line!("{prefix}┃{message}\n", "")
    };
}

/// Start a new block.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)*) => {
        $crate::__log_line!("{prefix}┃\n{prefix}┣ {message}\n", $($arg)*)
    };
}

/// Startup header.
#[macro_export]
macro_rules! log_version {
    () => {
        $crate::__log_line!(
            "{prefix}┏ bulbutil v{message} ━━╸\n",
            env!("CARGO_PKG_VERSION")
        )
    };
}

/// Final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {
        $crate::__log_line!("{prefix}╹{message}\n", "")
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣[\x1b[32mINFO\x1b[0m] {message}\n", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣[\x1b[33mWARNING\x1b[0m] {message}\n", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣[\x1b[31mERROR\x1b[0m] {message}\n", $($arg)*)
    };
}

/// Error that ends the program: closes the block with `┗`.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)*) => {
        $crate::__log_line!("{prefix}┃\n{prefix}┗[\x1b[31mERROR\x1b[0m] {message}\n", $($arg)*)
    };
}

#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)*) => {
        $crate::__log_line!("{prefix}┣[\x1b[31mCRITICAL\x1b[0m] {message}\n", $($arg)*)
    };
}

/// Only printed with `--debug`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::Log::is_debug() {
            $crate::__log_line!("{prefix}┣[\x1b[32mDEBUG\x1b[0m] {message}\n", $($arg)*)
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi_codes() {
        assert_eq!(
            strip_ansi_codes("┣[\x1b[33mWARNING\x1b[0m] careful"),
            "┣[WARNING] careful"
        );
        assert_eq!(strip_ansi_codes("plain text"), "plain text");
        assert_eq!(strip_ansi_codes("lone \x1b escape"), "lone \x1b escape");
    }

    #[test]
    fn test_timestamp_prefix_only_in_debug() {
        assert!(!Log::is_debug());
        assert_eq!(Log::get_timestamp_prefix(), "");
    }
}
