//! Bulb behavior modes.
//!
//! Every mode implements [`Mode`]: a label, the interval between ticks and
//! one side-effecting action per tick. The scheduler only ever sees the
//! trait; [`ModeKind`] names the variants for configuration and the CLI.

mod circadian;
mod joystick;
mod music;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::bulb::Bulb;
use crate::config::Config;
use crate::geo::TimezoneLocation;
use crate::time_source::TimeSource;

pub use circadian::{CircadianMode, CircadianSettings, Daylight, daylight, resolve_coordinate};
pub use joystick::{
    AxisState, DeviceJoystick, JoystickEvent, JoystickEventKind, JoystickInput, JoystickMode,
    decode_event,
};
pub use music::{MusicMode, pulse_state};

/// A bulb behavior driven by the scheduler.
pub trait Mode {
    /// Name of the mode, used in log output.
    fn label(&self) -> &'static str;

    /// Delay between the end of one action and the start of the next.
    fn tick_interval(&self) -> Duration;

    /// Run one tick. Errors are reported by the scheduler and do not stop it.
    fn perform_action(&mut self) -> Result<()>;
}

/// The available modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    /// Follow the sun: cool and bright by day, warm and dim at night.
    Circadian,
    /// Pulse with a fixed tempo.
    Music,
    /// Steer hue and brightness with a joystick.
    Joystick,
}

impl ModeKind {
    pub const ALL: [ModeKind; 3] = [ModeKind::Circadian, ModeKind::Music, ModeKind::Joystick];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModeKind::Circadian => "circadian",
            ModeKind::Music => "music",
            ModeKind::Joystick => "joystick",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        ModeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow::anyhow!("Unknown mode '{s}' (expected circadian, music or joystick)")
            })
    }
}

/// Construct the configured mode.
///
/// All fallible setup happens here (coordinate resolution, opening the
/// joystick device) so a broken configuration aborts startup instead of
/// failing on every tick.
pub fn build_mode(
    config: &Config,
    bulb: Box<dyn Bulb>,
    clock: Arc<dyn TimeSource>,
) -> Result<Box<dyn Mode>> {
    let kind = config.mode_kind();
    let interval = config.tick_interval(kind);

    let mode: Box<dyn Mode> = match kind {
        ModeKind::Circadian => {
            let coordinate = resolve_coordinate(
                config.latitude,
                config.longitude,
                &TimezoneLocation::system(),
            )
            .context("Failed to determine coordinates for circadian mode")?;

            Box::new(CircadianMode::new(
                coordinate,
                config.circadian_settings(),
                interval,
                bulb,
                clock,
            ))
        }
        ModeKind::Music => Box::new(MusicMode::new(config.bpm(), interval, bulb, clock)),
        ModeKind::Joystick => {
            let device = config.joystick_device();
            let input = DeviceJoystick::open(&device)
                .with_context(|| format!("Failed to open joystick device {device}"))?;
            Box::new(JoystickMode::new(Box::new(input), interval, bulb))
        }
    };

    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_kind_parsing() {
        assert_eq!("circadian".parse::<ModeKind>().unwrap(), ModeKind::Circadian);
        assert_eq!("MUSIC".parse::<ModeKind>().unwrap(), ModeKind::Music);
        assert_eq!("Joystick".parse::<ModeKind>().unwrap(), ModeKind::Joystick);

        let err = "disco".parse::<ModeKind>().unwrap_err();
        assert!(err.to_string().contains("Unknown mode 'disco'"));
    }

    #[test]
    fn test_mode_kind_display_round_trip() {
        for kind in ModeKind::ALL {
            assert_eq!(kind.to_string().parse::<ModeKind>().unwrap(), kind);
        }
    }
}
