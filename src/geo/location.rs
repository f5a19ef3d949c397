//! Coordinate resolution for the circadian mode.
//!
//! When the configuration carries no latitude/longitude, bulbutil estimates
//! the location from the system timezone. The estimate is the position of the
//! city that names the IANA zone, which is good enough for sunrise/sunset to
//! within a few minutes for most people living in that zone.

use anyhow::{Context, Result};
use chrono_tz::Tz;
use std::path::Path;

use super::solar::GeoCoordinate;
use super::zones::{ZONE_COORDINATES, ZONE_LINKS};

/// Source of the coordinate used by the circadian mode.
pub trait LocationProvider {
    /// Resolve the coordinate, failing if no location can be determined.
    fn resolve(&self) -> Result<GeoCoordinate>;

    /// Short human readable description of where the coordinate came from.
    fn describe(&self) -> String;
}

/// A coordinate supplied explicitly (config file or command line).
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub GeoCoordinate);

impl LocationProvider for FixedLocation {
    fn resolve(&self) -> Result<GeoCoordinate> {
        Ok(self.0)
    }

    fn describe(&self) -> String {
        "configured coordinates".to_string()
    }
}

/// Location estimated from the system's IANA timezone.
#[derive(Debug, Clone, Default)]
pub struct TimezoneLocation {
    zone_override: Option<String>,
}

impl TimezoneLocation {
    /// Detect the zone from the system at resolve time.
    pub fn system() -> Self {
        Self::default()
    }

    /// Use a fixed zone name instead of asking the system.
    pub fn from_zone_name(name: impl Into<String>) -> Self {
        Self {
            zone_override: Some(name.into()),
        }
    }

    fn zone(&self) -> Result<Tz> {
        let name = match &self.zone_override {
            Some(name) => name.clone(),
            None => detect_system_timezone()?,
        };

        name.parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Unknown timezone '{name}': {e}"))
    }
}

impl LocationProvider for TimezoneLocation {
    fn resolve(&self) -> Result<GeoCoordinate> {
        let tz = self.zone()?;
        coordinates_for_timezone(tz).with_context(|| {
            format!("No known coordinates for timezone {tz}; set latitude and longitude in the config")
        })
    }

    fn describe(&self) -> String {
        match self.zone() {
            Ok(tz) => format!("timezone {tz}"),
            Err(_) => "system timezone".to_string(),
        }
    }
}

/// Determine the IANA name of the system timezone.
///
/// Checked in order: `TZ`, `/etc/timezone`, the `/etc/localtime` symlink. A
/// source naming a zone chrono-tz does not know is skipped.
pub fn detect_system_timezone() -> Result<String> {
    let candidates = [
        (
            "TZ",
            std::env::var("TZ")
                .ok()
                .and_then(|value| zone_from_tz_variable(&value)),
        ),
        (
            "/etc/timezone",
            std::fs::read_to_string("/etc/timezone")
                .ok()
                .map(|content| content.trim().to_string())
                .filter(|name| !name.is_empty()),
        ),
    ];

    for (source, zone) in candidates {
        let Some(zone) = zone else { continue };
        if zone.parse::<Tz>().is_ok() {
            return Ok(zone);
        }
        log_debug!("Ignoring unrecognized timezone '{zone}' from {source}");
    }

    zone_from_localtime_link(Path::new("/etc/localtime"))
}

/// Zone name from a `TZ` value: `Area/City`, `:Area/City` or a path into a
/// zoneinfo directory such as `:/usr/share/zoneinfo/Area/City`.
pub(crate) fn zone_from_tz_variable(value: &str) -> Option<String> {
    let value = value.trim().trim_start_matches(':').trim();
    if value.contains("zoneinfo/") {
        return zone_from_zoneinfo_path(value);
    }
    (!value.is_empty()).then(|| value.to_string())
}

fn zone_from_localtime_link(path: &Path) -> Result<String> {
    let target = std::fs::read_link(path)
        .with_context(|| format!("Could not read timezone link {}", path.display()))?;
    zone_from_zoneinfo_path(&target.to_string_lossy())
        .with_context(|| format!("{} does not point into a zoneinfo directory", path.display()))
}

/// Extract `Area/City` from a path such as `/usr/share/zoneinfo/Area/City`.
pub(crate) fn zone_from_zoneinfo_path(path: &str) -> Option<String> {
    let (_, zone) = path.split_once("zoneinfo/")?;
    // Some distributions use zoneinfo/posix/... and zoneinfo/right/...
    let zone = zone
        .strip_prefix("posix/")
        .or_else(|| zone.strip_prefix("right/"))
        .unwrap_or(zone);
    (!zone.is_empty()).then(|| zone.to_string())
}

/// Representative coordinates for a timezone, if known.
///
/// Backward-compatible names (`US/Eastern`, `Europe/Kiev`) resolve through
/// the zone they link to. Fixed-offset zones such as `Etc/GMT+5` have none.
pub fn coordinates_for_timezone(tz: Tz) -> Option<GeoCoordinate> {
    coordinates_for_zone_name(tz.name())
}

fn coordinates_for_zone_name(name: &str) -> Option<GeoCoordinate> {
    let zone = ZONE_LINKS
        .binary_search_by(|(link, _)| (*link).cmp(name))
        .map(|index| ZONE_LINKS[index].1)
        .unwrap_or(name);

    let index = ZONE_COORDINATES
        .binary_search_by(|(candidate, _, _)| (*candidate).cmp(zone))
        .ok()?;
    let (_, latitude, longitude) = ZONE_COORDINATES[index];
    GeoCoordinate::new(latitude, longitude).ok()
}
