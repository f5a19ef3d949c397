//! Joystick mode: steer the bulb with a game controller.
//!
//! Reads the Linux joystick API (`/dev/input/jsN`). Every event is an 8-byte
//! record in native byte order:
//!
//! ```text
//! u32 time    event timestamp in milliseconds
//! i16 value   axis position (-32767..=32767) or button state (0/1)
//! u8  type    0x01 button, 0x02 axis, or'ed with 0x80 for initial state
//! u8  number  axis or button index
//! ```
//!
//! Axis 0 picks the hue, axis 1 the brightness (stick up is brighter) and
//! button 0 toggles the light.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read};
use std::os::unix::fs::OpenOptionsExt;
use std::time::Duration;

use nix::fcntl::OFlag;

use super::Mode;
use crate::bulb::{Bulb, BulbState};

const EVENT_SIZE: usize = 8;
const JS_EVENT_BUTTON: u8 = 0x01;
const JS_EVENT_AXIS: u8 = 0x02;
const JS_EVENT_INIT: u8 = 0x80;
const AXIS_MAX: f64 = 32767.0;

const HUE_AXIS: u8 = 0;
const BRIGHTNESS_AXIS: u8 = 1;
const POWER_BUTTON: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoystickEventKind {
    Button,
    Axis,
    Unknown(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoystickEvent {
    pub time_ms: u32,
    pub value: i16,
    pub kind: JoystickEventKind,
    pub number: u8,
    /// Synthetic event describing the initial state after opening the device.
    pub init: bool,
}

/// Decode one `js_event` record.
pub fn decode_event(raw: &[u8; EVENT_SIZE]) -> JoystickEvent {
    let time_ms = u32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]);
    let value = i16::from_ne_bytes([raw[4], raw[5]]);
    let kind = match raw[6] & !JS_EVENT_INIT {
        JS_EVENT_BUTTON => JoystickEventKind::Button,
        JS_EVENT_AXIS => JoystickEventKind::Axis,
        other => JoystickEventKind::Unknown(other),
    };

    JoystickEvent {
        time_ms,
        value,
        kind,
        number: raw[7],
        init: raw[6] & JS_EVENT_INIT != 0,
    }
}

/// Source of joystick events.
pub trait JoystickInput {
    /// All events that arrived since the last call. Never blocks.
    fn poll(&mut self) -> Result<Vec<JoystickEvent>>;
}

/// A joystick device node opened in non-blocking mode.
pub struct DeviceJoystick {
    file: File,
    pending: Vec<u8>,
}

impl DeviceJoystick {
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .custom_flags(OFlag::O_NONBLOCK.bits())
            .open(path)
            .with_context(|| format!("Cannot open {path}"))?;

        log_decorated!("Joystick device: {path}");

        Ok(Self {
            file,
            pending: Vec::with_capacity(EVENT_SIZE * 8),
        })
    }
}

impl JoystickInput for DeviceJoystick {
    fn poll(&mut self) -> Result<Vec<JoystickEvent>> {
        let mut buf = [0u8; EVENT_SIZE * 16];

        loop {
            match self.file.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => self.pending.extend_from_slice(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e).context("Failed to read joystick events"),
            }
        }

        let complete = self.pending.len() - self.pending.len() % EVENT_SIZE;
        let events = self.pending[..complete]
            .chunks_exact(EVENT_SIZE)
            .map(|chunk| {
                let mut raw = [0u8; EVENT_SIZE];
                raw.copy_from_slice(chunk);
                decode_event(&raw)
            })
            .collect();
        self.pending.drain(..complete);

        Ok(events)
    }
}

/// Light settings accumulated from joystick input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    pub hue: u16,
    pub brightness: u8,
    pub power: bool,
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            hue: 0,
            brightness: 100,
            power: true,
        }
    }
}

impl AxisState {
    /// Fold one event into the state.
    pub fn update(&mut self, event: &JoystickEvent) {
        // -1.0 (left/up) ..= 1.0 (right/down)
        let position = (f64::from(event.value) / AXIS_MAX).clamp(-1.0, 1.0);

        match (event.kind, event.number) {
            (JoystickEventKind::Axis, HUE_AXIS) => {
                self.hue = ((position + 1.0) / 2.0 * 359.0).round() as u16;
            }
            (JoystickEventKind::Axis, BRIGHTNESS_AXIS) => {
                let level = (1.0 - position) / 2.0 * 100.0;
                self.brightness = level.round().clamp(1.0, 100.0) as u8;
            }
            (JoystickEventKind::Button, POWER_BUTTON) if event.value == 1 && !event.init => {
                self.power = !self.power;
            }
            _ => {}
        }
    }

    pub fn bulb_state(&self) -> BulbState {
        if self.power {
            BulbState::colored(self.brightness, self.hue, 100)
        } else {
            BulbState::off()
        }
    }
}

pub struct JoystickMode {
    input: Box<dyn JoystickInput>,
    interval: Duration,
    bulb: Box<dyn Bulb>,
    axes: AxisState,
    applied: Option<BulbState>,
}

impl JoystickMode {
    pub fn new(input: Box<dyn JoystickInput>, interval: Duration, bulb: Box<dyn Bulb>) -> Self {
        Self {
            input,
            interval,
            bulb,
            axes: AxisState::default(),
            applied: None,
        }
    }

    pub fn axes(&self) -> AxisState {
        self.axes
    }
}

impl Mode for JoystickMode {
    fn label(&self) -> &'static str {
        "joystick"
    }

    fn tick_interval(&self) -> Duration {
        self.interval
    }

    fn perform_action(&mut self) -> Result<()> {
        for event in self.input.poll()? {
            self.axes.update(&event);
        }

        let state = self.axes.bulb_state();
        if self.applied == Some(state) {
            return Ok(());
        }

        self.bulb
            .apply(&state)
            .with_context(|| format!("Failed to set {} to {state}", self.bulb.name()))?;
        self.applied = Some(state);
        Ok(())
    }
}
