//! Display and formatting utilities for solar calculations.
//!
//! Used by the `sun` subcommand and by circadian startup in debug mode to
//! show what the sunrise equation produced for the active coordinate.

use chrono::{DateTime, Local, Utc};

use super::solar::{GeoCoordinate, SolarError, solar_elevation, solar_snapshot};

/// Format a duration as `Hh MMm`.
pub fn format_duration(duration: chrono::Duration) -> String {
    let minutes = duration.num_minutes();
    format!("{}h {:02}m", minutes / 60, (minutes % 60).abs())
}

fn format_instant(instant: DateTime<Utc>) -> String {
    format!(
        "{} UTC ({} local)",
        instant.format("%H:%M:%S"),
        instant.with_timezone(&Local).format("%H:%M:%S")
    )
}

/// Log the solar snapshot for a coordinate at an instant.
///
/// Polar day and night are reported rather than treated as failures; only
/// out-of-range instants bubble up.
pub fn log_solar_info(
    coordinate: GeoCoordinate,
    instant: DateTime<Utc>,
) -> Result<(), SolarError> {
    log_block_start!("Solar calculation for {coordinate}");
    log_indented!("          Date: {}", instant.format("%Y-%m-%d"));

    match solar_snapshot(coordinate, instant) {
        Ok(snapshot) => {
            log_indented!("       Sunrise: {}", format_instant(snapshot.sunrise));
            log_indented!("   Solar noon: {}", format_instant(snapshot.transit));
            log_indented!("        Sunset: {}", format_instant(snapshot.sunset));
            log_indented!("    Day length: {}", format_duration(snapshot.day_length()));
            log_indented!("   Declination: {:+.3}°", snapshot.declination);
            log_indented!("    Hour angle: {:.3}°", snapshot.hour_angle);
        }
        Err(SolarError::NoSunriseSunset {
            condition,
            transit,
            declination,
        }) => {
            log_indented!("     Condition: {condition} (no sunrise or sunset)");
            log_indented!("   Solar noon: {}", format_instant(transit));
            log_indented!("   Declination: {declination:+.3}°");
        }
        Err(e) => return Err(e),
    }

    log_indented!(
        "     Elevation: {:+.2}° at {}",
        solar_elevation(coordinate, instant),
        instant.format("%H:%M:%S UTC")
    );

    Ok(())
}
