//! Music mode: pulse the bulb at a fixed tempo.
//!
//! The beat phase is derived from the clock on every tick rather than counted
//! from ticks, so a late tick never drifts the pulse off the beat.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use super::Mode;
use crate::bulb::{Bulb, BulbState};
use crate::time_source::TimeSource;

const PULSE_FLOOR: f64 = 20.0; // percent between beats
const PULSE_DECAY: f64 = 4.0;
const HUE_STEP: u64 = 30; // degrees per beat

/// Bulb state `elapsed_secs` after the first beat at the given tempo.
///
/// Brightness jumps to 100% on each beat and decays exponentially towards
/// the floor; the hue moves one step per beat around the color wheel.
pub fn pulse_state(elapsed_secs: f64, bpm: f64) -> BulbState {
    let beats = elapsed_secs.max(0.0) * bpm / 60.0;
    let beat = beats.floor();
    let phase = beats - beat;

    let brightness = PULSE_FLOOR + (100.0 - PULSE_FLOOR) * (-PULSE_DECAY * phase).exp();
    let hue = ((beat as u64 * HUE_STEP) % 360) as u16;

    BulbState::colored(brightness.round() as u8, hue, 100)
}

pub struct MusicMode {
    bpm: f64,
    interval: Duration,
    bulb: Box<dyn Bulb>,
    clock: Arc<dyn TimeSource>,
    started: DateTime<Utc>,
}

impl MusicMode {
    pub fn new(
        bpm: f64,
        interval: Duration,
        bulb: Box<dyn Bulb>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        let started = clock.now();
        Self {
            bpm,
            interval,
            bulb,
            clock,
            started,
        }
    }
}

impl Mode for MusicMode {
    fn label(&self) -> &'static str {
        "music"
    }

    fn tick_interval(&self) -> Duration {
        self.interval
    }

    fn perform_action(&mut self) -> Result<()> {
        let elapsed = (self.clock.now() - self.started).num_milliseconds() as f64 / 1000.0;
        let state = pulse_state(elapsed, self.bpm);

        self.bulb
            .apply(&state)
            .with_context(|| format!("Failed to pulse {}", self.bulb.name()))
    }
}
