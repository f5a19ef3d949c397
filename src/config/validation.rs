//! Configuration validation.
//!
//! Rejects values the modes cannot work with. Errors name the offending field
//! and the accepted range so the user can fix the file without reading docs.

use anyhow::Result;

use super::Config;
use crate::constants::*;

/// Check every field that is set. Unset fields fall back to valid defaults.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(interval) = config.interval
        && !(MINIMUM_INTERVAL..=MAXIMUM_INTERVAL).contains(&interval)
    {
        anyhow::bail!(
            "interval ({interval} s) must be between {MINIMUM_INTERVAL} and {MAXIMUM_INTERVAL} seconds"
        );
    }

    if let Some(lat) = config.latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {lat})");
    }

    if let Some(lon) = config.longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        anyhow::bail!("longitude must be between -180 and 180 degrees (got {lon})");
    }

    validate_temperature(config.day_temp, "day_temp")?;
    validate_temperature(config.night_temp, "night_temp")?;
    validate_brightness(config.day_brightness, "day_brightness")?;
    validate_brightness(config.night_brightness, "night_brightness")?;

    if let Some(minutes) = config.transition_duration
        && !(MINIMUM_TRANSITION_DURATION..=MAXIMUM_TRANSITION_DURATION).contains(&minutes)
    {
        anyhow::bail!(
            "transition_duration ({minutes} minutes) must be between {MINIMUM_TRANSITION_DURATION} and {MAXIMUM_TRANSITION_DURATION} minutes"
        );
    }

    if let Some(bpm) = config.bpm
        && !(MINIMUM_BPM..=MAXIMUM_BPM).contains(&bpm)
    {
        anyhow::bail!("bpm ({bpm}) must be between {MINIMUM_BPM} and {MAXIMUM_BPM}");
    }

    if let Some(device) = &config.joystick_device
        && device.trim().is_empty()
    {
        anyhow::bail!("joystick_device must not be empty");
    }

    if let Some(bulb) = &config.bulb
        && bulb.trim().is_empty()
    {
        anyhow::bail!("bulb must not be empty");
    }

    // Day dimmer than night is allowed but almost always a typo
    if let (Some(day), Some(night)) = (config.day_brightness, config.night_brightness)
        && day < night
    {
        log_pipe!();
        log_warning!("day_brightness ({day}%) is lower than night_brightness ({night}%)");
    }

    Ok(())
}

fn validate_temperature(value: Option<u32>, field: &str) -> Result<()> {
    if let Some(temp) = value
        && !(MINIMUM_TEMP..=MAXIMUM_TEMP).contains(&temp)
    {
        anyhow::bail!("{field} ({temp}) must be between {MINIMUM_TEMP} and {MAXIMUM_TEMP} Kelvin");
    }
    Ok(())
}

fn validate_brightness(value: Option<u8>, field: &str) -> Result<()> {
    if let Some(brightness) = value
        && !(MINIMUM_BRIGHTNESS..=MAXIMUM_BRIGHTNESS).contains(&brightness)
    {
        anyhow::bail!(
            "{field} ({brightness}%) must be between {MINIMUM_BRIGHTNESS} and {MAXIMUM_BRIGHTNESS} percent"
        );
    }
    Ok(())
}
