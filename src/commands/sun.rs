//! Implementation of the `sun` command.
//!
//! Prints the sunrise equation results for the configured coordinate, either
//! for today or for the day given with `--date`.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::args::CommonOptions;
use crate::bulbutil::load_config;
use crate::config::Config;
use crate::geo::location::{LocationProvider, TimezoneLocation};
use crate::geo::log_solar_info;
use crate::geo::solar::{GeoCoordinate, local_mean_noon};
use crate::modes::resolve_coordinate;
use crate::time_source::{RealTimeSource, TimeSource};

/// Handle `bulbutil sun [--date YYYY-MM-DD]`.
pub fn handle_sun_command(options: &CommonOptions, date: Option<NaiveDate>) -> Result<()> {
    log_version!();

    let config = load_config(options)?;
    let (coordinate, instant) = solar_query(
        &config,
        date,
        &TimezoneLocation::system(),
        &RealTimeSource,
    )?;

    log_solar_info(coordinate, instant).context("Solar calculation failed")?;
    log_end!();
    Ok(())
}

/// Coordinate and instant to report for.
///
/// With a date, the instant is local mean noon at the coordinate so the
/// reported solar day is the requested one wherever on Earth it is.
pub(crate) fn solar_query(
    config: &Config,
    date: Option<NaiveDate>,
    fallback: &dyn LocationProvider,
    clock: &dyn TimeSource,
) -> Result<(GeoCoordinate, DateTime<Utc>)> {
    let coordinate = resolve_coordinate(config.latitude, config.longitude, fallback)
        .context("Failed to determine coordinates")?;

    let instant = match date {
        Some(day) => local_mean_noon(day, coordinate.longitude()),
        None => clock.now(),
    };

    Ok((coordinate, instant))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::FixedLocation;
    use crate::time_source::SimulatedTimeSource;
    use chrono::TimeZone;

    fn config_at(latitude: f64, longitude: f64) -> Config {
        Config {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Config::default()
        }
    }

    #[test]
    fn test_query_defaults_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 15, 30, 0).unwrap();
        let clock = SimulatedTimeSource::new(now);
        let fallback = FixedLocation(GeoCoordinate::new(0.0, 0.0).unwrap());

        let (coordinate, instant) =
            solar_query(&config_at(48.8566, 2.3522), None, &fallback, &clock).unwrap();

        assert_eq!(coordinate, GeoCoordinate::new(48.8566, 2.3522).unwrap());
        assert_eq!(instant, now);
    }

    #[test]
    fn test_query_with_date_uses_local_mean_noon() {
        let clock = SimulatedTimeSource::new(Utc::now());
        let fallback = FixedLocation(GeoCoordinate::new(0.0, 0.0).unwrap());
        let date = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();

        let (_, instant) =
            solar_query(&config_at(-36.8485, 174.7633), Some(date), &fallback, &clock).unwrap();

        // 174.76°E: local noon is about 11.65 hours before UTC noon
        assert_eq!(instant, local_mean_noon(date, 174.7633));
        assert_eq!(instant.date_naive(), date);
    }

    #[test]
    fn test_query_falls_back_to_provider() {
        let clock = SimulatedTimeSource::new(Utc::now());
        let fallback = FixedLocation(GeoCoordinate::new(52.2297, 21.0122).unwrap());

        let (coordinate, _) = solar_query(&Config::default(), None, &fallback, &clock).unwrap();
        assert_eq!(coordinate, GeoCoordinate::new(52.2297, 21.0122).unwrap());
    }
}
