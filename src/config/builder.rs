//! Default configuration file generation.
//!
//! The generated file lists every setting with its default and a comment
//! describing the accepted values, aligned in one column.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;

/// Write a commented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content()).context("Failed to write default config file")?;

    log_block_start!("Created default configuration");
    log_indented!("{}", path.display());
    Ok(())
}

pub(crate) fn default_config_content() -> String {
    ConfigBuilder::new()
        .add_section("Mode")
        .add_setting(
            "mode",
            &format!("\"{DEFAULT_MODE}\""),
            "Select: \"circadian\", \"music\", \"joystick\"",
        )
        .add_setting(
            "bulb",
            &format!("\"{DEFAULT_BULB}\""),
            "Name of the bulb to drive",
        )
        .add_disabled_setting(
            "interval",
            &DEFAULT_CIRCADIAN_INTERVAL.to_string(),
            &format!(
                "Seconds between ticks ({MINIMUM_INTERVAL}-{MAXIMUM_INTERVAL}), default depends on mode"
            ),
        )
        .add_section("Circadian")
        .add_setting(
            "day_temp",
            &DEFAULT_DAY_TEMP.to_string(),
            &format!("Color temperature during day ({MINIMUM_TEMP}-{MAXIMUM_TEMP}) Kelvin"),
        )
        .add_setting(
            "night_temp",
            &DEFAULT_NIGHT_TEMP.to_string(),
            &format!("Color temperature during night ({MINIMUM_TEMP}-{MAXIMUM_TEMP}) Kelvin"),
        )
        .add_setting(
            "day_brightness",
            &DEFAULT_DAY_BRIGHTNESS.to_string(),
            &format!("Brightness during day ({MINIMUM_BRIGHTNESS}-{MAXIMUM_BRIGHTNESS}%)"),
        )
        .add_setting(
            "night_brightness",
            &DEFAULT_NIGHT_BRIGHTNESS.to_string(),
            &format!("Brightness during night ({MINIMUM_BRIGHTNESS}-{MAXIMUM_BRIGHTNESS}%)"),
        )
        .add_setting(
            "transition_duration",
            &DEFAULT_TRANSITION_DURATION.to_string(),
            &format!(
                "Blend window around sunrise/sunset ({MINIMUM_TRANSITION_DURATION}-{MAXIMUM_TRANSITION_DURATION}) minutes"
            ),
        )
        .add_disabled_setting(
            "latitude",
            "52.229700",
            "Detected from the system timezone when omitted",
        )
        .add_disabled_setting("longitude", "21.012200", "Positive east, negative west")
        .add_section("Music")
        .add_setting(
            "bpm",
            &DEFAULT_BPM.to_string(),
            &format!("Tempo of the pulse ({MINIMUM_BPM}-{MAXIMUM_BPM})"),
        )
        .add_section("Joystick")
        .add_setting(
            "joystick_device",
            &format!("\"{DEFAULT_JOYSTICK_DEVICE}\""),
            "Linux joystick device node",
        )
        .build()
}

/// Assembles the default config with aligned comments.
struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    /// A setting shown commented out, for values that are better left unset.
    fn add_disabled_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("# {key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !result.is_empty() {
                        result.push(String::new());
                    }
                    result.push(title);
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        let mut content = result.join("\n");
        content.push('\n');
        content
    }
}
