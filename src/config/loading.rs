//! Configuration loading.
//!
//! Finds the config file, creates a default one if missing, parses it,
//! merges `geo.toml` coordinates and validates the result.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::validation::validate_config;
use super::{Config, GeoConfig};

const CONFIG_FILE_NAME: &str = "bulbutil.toml";
const GEO_FILE_NAME: &str = "geo.toml";

/// Directory given with `--config`, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for this process. Can only be called once.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// The `--config` directory, if one was given.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Path of `bulbutil.toml`.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("bulbutil").join(CONFIG_FILE_NAME))
}

/// Load the configuration, creating a default file first if none exists.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        super::builder::create_default_config(&config_path)
            .context("Failed to create default config during load")?;
    }

    load_from_path(&config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))
}

/// Load configuration from a specific file. Does not create it.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!("Configuration file not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    // geo.toml values are validated together with the rest
    load_geo_override_from_path(&mut config, path);

    validate_config(&config)?;

    Ok(config)
}

/// Merge coordinates from `geo.toml` next to `config_path`, if present.
///
/// A broken `geo.toml` is reported and ignored.
pub(crate) fn load_geo_override_from_path(config: &mut Config, config_path: &Path) {
    let Some(geo_path) = config_path.parent().map(|dir| dir.join(GEO_FILE_NAME)) else {
        return;
    };

    if !geo_path.exists() {
        return;
    }

    let geo_config = fs::read_to_string(&geo_path)
        .map_err(|e| format!("Failed to read {GEO_FILE_NAME}: {e}"))
        .and_then(|content| {
            toml::from_str::<GeoConfig>(&content)
                .map_err(|e| format!("Failed to parse {GEO_FILE_NAME}: {e}"))
        });

    match geo_config {
        Ok(geo) => {
            if let Some(lat) = geo.latitude {
                config.latitude = Some(lat);
            }
            if let Some(lon) = geo.longitude {
                config.longitude = Some(lon);
            }
            log_debug!("Coordinates merged from {}", geo_path.display());
        }
        Err(message) => {
            log_pipe!();
            log_warning!("{message}. Using coordinates from main config.");
        }
    }
}
