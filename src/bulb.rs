//! Bulb driver abstraction.
//!
//! Modes decide *what* the bulb should look like and hand a [`BulbState`] to a
//! [`Bulb`]. Talking to real hardware happens behind this trait; the shipped
//! [`DryRunBulb`] only reports the requested state, which keeps the
//! scheduling and circadian logic testable without a device on the network.

use anyhow::Result;
use std::fmt;

/// Color part of a bulb state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BulbColor {
    /// White light at a color temperature in Kelvin.
    Temperature(u32),
    /// Colored light; hue in degrees (0-359), saturation in percent.
    Hsv { hue: u16, saturation: u8 },
}

/// Desired state of the bulb for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulbState {
    pub power: bool,
    /// Brightness in percent (0-100).
    pub brightness: u8,
    pub color: BulbColor,
}

impl BulbState {
    pub fn white(brightness: u8, kelvin: u32) -> Self {
        Self {
            power: true,
            brightness: brightness.min(100),
            color: BulbColor::Temperature(kelvin),
        }
    }

    pub fn colored(brightness: u8, hue: u16, saturation: u8) -> Self {
        Self {
            power: true,
            brightness: brightness.min(100),
            color: BulbColor::Hsv {
                hue: hue % 360,
                saturation: saturation.min(100),
            },
        }
    }

    pub fn off() -> Self {
        Self {
            power: false,
            brightness: 0,
            color: BulbColor::Temperature(0),
        }
    }
}

impl fmt::Display for BulbState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.power {
            return write!(f, "off");
        }
        match self.color {
            BulbColor::Temperature(kelvin) => write!(f, "on {}% @ {kelvin}K", self.brightness),
            BulbColor::Hsv { hue, saturation } => write!(
                f,
                "on {}% @ hue {hue}° saturation {saturation}%",
                self.brightness
            ),
        }
    }
}

/// A controllable bulb.
#[cfg_attr(test, mockall::automock)]
pub trait Bulb {
    /// Request the given state. Must either fully apply it or fail.
    fn apply(&mut self, state: &BulbState) -> Result<()>;

    /// Name of the device, used in log output.
    fn name(&self) -> String;
}

/// Bulb driver that only reports requested states.
///
/// Identical consecutive requests are reported once, so fast modes do not
/// flood the output.
pub struct DryRunBulb {
    name: String,
    last: Option<BulbState>,
}

impl DryRunBulb {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last: None,
        }
    }

    /// Last state requested, if any.
    pub fn last_state(&self) -> Option<BulbState> {
        self.last
    }
}

impl Bulb for DryRunBulb {
    fn apply(&mut self, state: &BulbState) -> Result<()> {
        if self.last.as_ref() != Some(state) {
            log_decorated!("{}: {state}", self.name);
            self.last = Some(*state);
        }
        Ok(())
    }

    fn name(&self) -> String {
        self.name.clone()
    }
}
