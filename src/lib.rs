//! # bulbutil library
//!
//! Internal library for the `bulbutil` binary.
//!
//! This library exists to enable testing of the internals and to keep CLI
//! dispatch (main.rs) separate from application logic.
//!
//! ## Architecture
//!
//! - **Entry Point**: `Bulbutil` builder loads configuration, installs signal
//!   handlers and runs the scheduler
//! - **Scheduling**: `scheduler` runs the active mode on a fixed-delay loop until cancelled
//! - **Modes**: `modes` with the circadian, music and joystick behaviors
//! - **Geographic**: `geo` module with the sunrise equation and location estimation
//! - **Devices**: `bulb` driver trait and the dry-run driver
//! - **Configuration**: `config` module for TOML-based settings
//! - **Commands**: `commands` module for one-shot CLI subcommands
//! - **Infrastructure**: signal handling, time sources and logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod bulb;
pub mod commands;
pub mod config;
pub mod constants;
pub mod geo;
pub mod modes;
pub mod scheduler;
pub mod signals;
pub mod time_source;

mod bulbutil;

pub use bulbutil::{Bulbutil, load_config, run_mode};
