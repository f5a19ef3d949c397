//! Application coordinator for the long-running mode loop.
//!
//! Handles the startup sequence around the scheduler:
//! - Configuration loading and command-line overrides
//! - Signal handler setup
//! - Mode construction (coordinate resolution, device opening)
//! - Running the scheduler until a shutdown signal arrives
//!
//! The `Bulbutil` builder keeps the startup steps that need real resources
//! (signals, the system clock, the bulb) separate from [`run_mode`], which
//! takes all of them injected and is what the tests drive.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::args::CommonOptions;
use crate::bulb::{Bulb, DryRunBulb};
use crate::config::{self, Config};
use crate::modes::build_mode;
use crate::scheduler::{EventSink, RunSummary, Scheduler, TerminalEventSink};
use crate::signals::setup_signal_handler;
use crate::time_source::{RealTimeSource, TimeSource};

/// Builder for running bulbutil from the command line.
///
/// ```no_run
/// use bulbutil::Bulbutil;
/// use bulbutil::args::CommonOptions;
///
/// # fn main() -> anyhow::Result<()> {
/// Bulbutil::new(CommonOptions::default()).run()?;
/// # Ok(())
/// # }
/// ```
pub struct Bulbutil {
    options: CommonOptions,
}

impl Bulbutil {
    pub fn new(options: CommonOptions) -> Self {
        Self { options }
    }

    /// Run until interrupted.
    pub fn run(self) -> Result<RunSummary> {
        log_version!();
        if self.options.debug_enabled {
            log_pipe!();
            log_debug!("Debug mode enabled - showing every tick");
        }

        let config = load_config(&self.options)?;
        config.log_config();

        let signal_state = setup_signal_handler(self.options.debug_enabled)?;
        let bulb = Box::new(DryRunBulb::new(config.bulb_name()));

        let summary = run_mode(
            &config,
            bulb,
            Arc::new(RealTimeSource),
            signal_state.running,
            Box::new(TerminalEventSink),
        )?;

        log_end!();
        Ok(summary)
    }
}

/// Load the configuration selected by `options` and apply its overrides.
pub fn load_config(options: &CommonOptions) -> Result<Config> {
    if options.config_dir.is_some() {
        config::set_config_dir(options.config_dir.clone())?;
    }

    let mut config = config::load()?;
    config
        .apply_overrides(&options.overrides)
        .context("Invalid command-line override")?;
    Ok(config)
}

/// Build the configured mode and schedule it until `running` is cleared.
pub fn run_mode(
    config: &Config,
    bulb: Box<dyn Bulb>,
    clock: Arc<dyn TimeSource>,
    running: Arc<AtomicBool>,
    sink: Box<dyn EventSink>,
) -> Result<RunSummary> {
    let mut mode = build_mode(config, bulb, clock.clone())?;
    let mut scheduler = Scheduler::new(running, clock, sink);
    scheduler.run(mode.as_mut())
}
