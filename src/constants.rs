//! Application constants and default values for bulbutil.
//!
//! This module contains the configuration defaults, validation limits,
//! astronomical constants and operational timing values used throughout
//! the application.

use crate::modes::ModeKind;

// ═══ Application Configuration Defaults ═══
// These values are used when config options are not specified by the user

pub const DEFAULT_MODE: ModeKind = ModeKind::Circadian;
pub const DEFAULT_CIRCADIAN_INTERVAL: f64 = 60.0; // seconds
pub const DEFAULT_MUSIC_INTERVAL: f64 = 0.1; // seconds
pub const DEFAULT_JOYSTICK_INTERVAL: f64 = 0.05; // seconds
pub const DEFAULT_DAY_TEMP: u32 = 6500; // Kelvin - close to natural daylight
pub const DEFAULT_NIGHT_TEMP: u32 = 2700; // Kelvin - incandescent warmth
pub const DEFAULT_DAY_BRIGHTNESS: u8 = 100; // percent
pub const DEFAULT_NIGHT_BRIGHTNESS: u8 = 30; // percent
pub const DEFAULT_TRANSITION_DURATION: u64 = 60; // minutes, centred on sunrise/sunset
pub const DEFAULT_BPM: f64 = 120.0;
pub const DEFAULT_JOYSTICK_DEVICE: &str = "/dev/input/js0";
pub const DEFAULT_BULB: &str = "bulb";

// ═══ Validation Limits ═══

// Color temperature limits (Kelvin scale, typical smart bulb range)
pub const MINIMUM_TEMP: u32 = 1500;
pub const MAXIMUM_TEMP: u32 = 9000;

// Brightness limits (percent)
pub const MINIMUM_BRIGHTNESS: u8 = 1;
pub const MAXIMUM_BRIGHTNESS: u8 = 100;

// Transition window limits
pub const MINIMUM_TRANSITION_DURATION: u64 = 5; // minutes
pub const MAXIMUM_TRANSITION_DURATION: u64 = 240; // minutes

// Tick interval limits
pub const MINIMUM_INTERVAL: f64 = 0.01; // seconds
pub const MAXIMUM_INTERVAL: f64 = 3600.0; // seconds

// Tempo limits
pub const MINIMUM_BPM: f64 = 20.0;
pub const MAXIMUM_BPM: f64 = 300.0;

// ═══ Astronomical Constants ═══
// Sunrise equation, see https://en.wikipedia.org/wiki/Sunrise_equation

pub const J2000: f64 = 2451545.0; // Julian date of 2000-01-01 12:00 UT
pub const UNIX_EPOCH_JULIAN_DATE: f64 = 2440587.5; // Julian date of 1970-01-01 00:00 UT
pub const TERRESTRIAL_TIME_CORRECTION: f64 = 0.0008; // days
pub const SECONDS_PER_DAY: f64 = 86400.0;
pub const EARTH_AXIAL_TILT: f64 = 23.44; // degrees
pub const PERIHELION_ARGUMENT: f64 = 102.9372; // degrees
pub const SUNRISE_ELEVATION: f64 = -0.83; // degrees, refraction + solar disc radius

// ═══ Operational Timing Constants ═══

pub const CHECK_INTERVAL_MS: u64 = 100; // How often to check the running flag during sleep

// ═══ Exit Codes ═══

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INTERRUPTED: i32 = 130; // second shutdown signal, 128 + SIGINT
