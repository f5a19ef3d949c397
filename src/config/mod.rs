//! Configuration system for bulbutil.
//!
//! Settings live in `bulbutil.toml` inside `$XDG_CONFIG_HOME/bulbutil/` (or
//! the directory given with `--config`). A commented default file is written
//! on first run. Coordinates may also be kept in a separate `geo.toml` next
//! to it, which takes precedence over the main file, so the main file can be
//! shared without revealing where the user lives.
//!
//! ```toml
//! #[Mode]
//! mode = "circadian"           # Select: "circadian", "music", "joystick"
//! bulb = "bulb"                # Name of the bulb to drive
//! # interval = 60              # Seconds between ticks (default depends on mode)
//!
//! #[Circadian]
//! day_temp = 6500              # Color temperature during day (1500-9000) Kelvin
//! night_temp = 2700            # Color temperature during night (1500-9000) Kelvin
//! day_brightness = 100         # Brightness during day (1-100%)
//! night_brightness = 30        # Brightness during night (1-100%)
//! transition_duration = 60     # Blend window around sunrise/sunset (5-240) minutes
//! # latitude = 52.2297         # Detected from the system timezone when omitted
//! # longitude = 21.0122
//!
//! #[Music]
//! bpm = 120                    # Tempo of the pulse (20-300)
//!
//! #[Joystick]
//! joystick_device = "/dev/input/js0"
//! ```
//!
//! Every field is optional. Values are validated on load and again after
//! command-line overrides are applied; accessors fill in defaults.

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::Result;
use chrono::Duration as ChronoDuration;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::*;
use crate::modes::{CircadianSettings, ModeKind};

pub use builder::create_default_config;
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};

/// Coordinates kept in the optional `geo.toml`.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct GeoConfig {
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
}

/// Settings loaded from `bulbutil.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    pub mode: Option<ModeKind>,
    pub bulb: Option<String>,
    pub interval: Option<f64>, // seconds, overrides the per-mode default
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub day_temp: Option<u32>,
    pub night_temp: Option<u32>,
    pub day_brightness: Option<u8>,
    pub night_brightness: Option<u8>,
    pub transition_duration: Option<u64>, // minutes
    pub bpm: Option<f64>,
    pub joystick_device: Option<String>,
}

/// Values given on the command line, which win over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub mode: Option<ModeKind>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub interval: Option<f64>,
}

impl Config {
    /// Apply command-line overrides and re-validate.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) -> Result<()> {
        if let Some(mode) = overrides.mode {
            self.mode = Some(mode);
        }
        if let Some(lat) = overrides.latitude {
            self.latitude = Some(lat);
        }
        if let Some(lon) = overrides.longitude {
            self.longitude = Some(lon);
        }
        if let Some(interval) = overrides.interval {
            self.interval = Some(interval);
        }

        validation::validate_config(self)
    }

    pub fn mode_kind(&self) -> ModeKind {
        self.mode.unwrap_or(DEFAULT_MODE)
    }

    pub fn bulb_name(&self) -> String {
        self.bulb.clone().unwrap_or_else(|| DEFAULT_BULB.to_string())
    }

    /// Delay between ticks for `kind`, honoring an explicit `interval`.
    ///
    /// An interval that is not a positive, finite number of seconds falls
    /// back to the mode default.
    pub fn tick_interval(&self, kind: ModeKind) -> Duration {
        let default = match kind {
            ModeKind::Circadian => DEFAULT_CIRCADIAN_INTERVAL,
            ModeKind::Music => DEFAULT_MUSIC_INTERVAL,
            ModeKind::Joystick => DEFAULT_JOYSTICK_INTERVAL,
        };
        self.interval
            .filter(|secs| *secs > 0.0)
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .unwrap_or_else(|| Duration::from_secs_f64(default))
    }

    pub fn circadian_settings(&self) -> CircadianSettings {
        let minutes = self
            .transition_duration
            .unwrap_or(DEFAULT_TRANSITION_DURATION);

        CircadianSettings {
            day_temp: self.day_temp.unwrap_or(DEFAULT_DAY_TEMP),
            night_temp: self.night_temp.unwrap_or(DEFAULT_NIGHT_TEMP),
            day_brightness: self.day_brightness.unwrap_or(DEFAULT_DAY_BRIGHTNESS),
            night_brightness: self.night_brightness.unwrap_or(DEFAULT_NIGHT_BRIGHTNESS),
            transition: ChronoDuration::minutes(minutes as i64),
        }
    }

    pub fn bpm(&self) -> f64 {
        self.bpm.unwrap_or(DEFAULT_BPM)
    }

    pub fn joystick_device(&self) -> String {
        self.joystick_device
            .clone()
            .unwrap_or_else(|| DEFAULT_JOYSTICK_DEVICE.to_string())
    }

    /// Print the settings relevant to the selected mode.
    pub fn log_config(&self) {
        let kind = self.mode_kind();

        log_block_start!("Loaded configuration");
        log_indented!("Mode: {kind}");
        log_indented!("Bulb: {}", self.bulb_name());
        log_indented!("Tick interval: {:?}", self.tick_interval(kind));

        match kind {
            ModeKind::Circadian => {
                match (self.latitude, self.longitude) {
                    (Some(lat), Some(lon)) => log_indented!(
                        "Location: {:.4}°{}, {:.4}°{}",
                        lat.abs(),
                        if lat >= 0.0 { "N" } else { "S" },
                        lon.abs(),
                        if lon >= 0.0 { "E" } else { "W" }
                    ),
                    _ => log_indented!("Location: from system timezone"),
                }

                let settings = self.circadian_settings();
                log_indented!(
                    "Day: {}K @ {}%",
                    settings.day_temp,
                    settings.day_brightness
                );
                log_indented!(
                    "Night: {}K @ {}%",
                    settings.night_temp,
                    settings.night_brightness
                );
                log_indented!(
                    "Transition: {} minutes",
                    settings.transition.num_minutes()
                );
            }
            ModeKind::Music => log_indented!("Tempo: {} bpm", self.bpm()),
            ModeKind::Joystick => log_indented!("Device: {}", self.joystick_device()),
        }
    }
}

#[cfg(test)]
mod tests;
