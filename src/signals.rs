//! Shutdown signal handling.
//!
//! SIGINT, SIGTERM and SIGHUP clear the shared `running` flag, which the
//! scheduler checks before and after every action and while sleeping. A second
//! signal while shutdown is already under way exits immediately, for actions
//! that hang on a device.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGHUP, SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use crate::constants::EXIT_INTERRUPTED;

/// Signal handling state shared between threads
pub struct SignalState {
    /// Cleared once a shutdown signal arrives
    pub running: Arc<AtomicBool>,
}

/// Message shown when a shutdown signal arrives.
fn shutdown_message(sig: i32, debug_enabled: bool) -> &'static str {
    match sig {
        SIGINT if debug_enabled => "Received SIGINT (Ctrl+C), stopping after the current tick...",
        SIGINT => "Received interrupt signal, stopping after the current tick...",
        SIGTERM => "Received termination request, stopping after the current tick...",
        SIGHUP => "Received hangup signal, stopping after the current tick...",
        _ => "Received shutdown signal, stopping after the current tick...",
    }
}

/// Clear `running` for a shutdown signal.
///
/// Returns `false` if shutdown had already been requested.
fn request_shutdown(running: &AtomicBool) -> bool {
    running.swap(false, Ordering::SeqCst)
}

/// Install the handlers and start the listener thread.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let running = Arc::new(AtomicBool::new(true));

    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).context("failed to register signal handlers")?;

    let running_clone = running.clone();

    thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            for sig in signals.forever() {
                if request_shutdown(&running_clone) {
                    log_pipe!();
                    log_info!("{}", shutdown_message(sig, debug_enabled));
                } else {
                    log_pipe!();
                    log_warning!("Second shutdown signal received, exiting immediately");
                    log_end!();
                    std::process::exit(EXIT_INTERRUPTED);
                }
            }
        })
        .context("failed to spawn signal handler thread")?;

    log_debug!("Signal handlers installed for PID {}", std::process::id());

    Ok(SignalState { running })
}
