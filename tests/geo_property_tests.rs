use bulbutil::geo::solar::{
    GeoCoordinate, SolarError, from_julian_date, julian_date, local_mean_noon, sun_times,
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

/// Latitudes safely outside the polar circles (with refraction the midnight
/// sun already appears around 65.7°).
fn temperate_latitude_strategy() -> impl Strategy<Value = f64> {
    -65.0..=65.0
}

fn longitude_strategy() -> impl Strategy<Value = f64> {
    -180.0..=180.0
}

/// Any instant during 2024.
fn instant_2024_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().timestamp();
    let end = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap().timestamp();
    (start..end).prop_map(|secs| DateTime::from_timestamp(secs, 0).unwrap())
}

/// Any calendar date during 2024.
fn date_2024_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..366).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
    })
}

#[cfg(test)]
mod solar_property_tests {
    use super::*;

    proptest! {
        /// Sunrise precedes solar noon which precedes sunset everywhere
        /// outside the polar circles, all year round.
        #[test]
        fn test_sunrise_before_transit_before_sunset(
            lat in temperate_latitude_strategy(),
            lon in longitude_strategy(),
            instant in instant_2024_strategy()
        ) {
            let snapshot = sun_times(lat, lon, instant).unwrap();
            prop_assert!(
                snapshot.sunrise < snapshot.transit,
                "sunrise {} not before transit {} at ({lat}, {lon})",
                snapshot.sunrise,
                snapshot.transit
            );
            prop_assert!(
                snapshot.transit < snapshot.sunset,
                "transit {} not before sunset {} at ({lat}, {lon})",
                snapshot.transit,
                snapshot.sunset
            );
        }

        /// The solar day reported always contains the query instant's local
        /// mean noon within half a day plus the equation of time.
        #[test]
        fn test_transit_near_query_day(
            lat in temperate_latitude_strategy(),
            lon in longitude_strategy(),
            instant in instant_2024_strategy()
        ) {
            let snapshot = sun_times(lat, lon, instant).unwrap();
            let gap = (snapshot.transit - instant).num_minutes().abs();
            prop_assert!(
                gap <= 12 * 60 + 20,
                "transit {} is {gap} minutes from {instant}",
                snapshot.transit
            );
        }

        /// At the equator every day lasts about twelve hours.
        #[test]
        fn test_equator_day_length_near_twelve_hours(
            lon in longitude_strategy(),
            date in date_2024_strategy()
        ) {
            let snapshot = sun_times(0.0, lon, local_mean_noon(date, lon)).unwrap();
            let minutes = snapshot.day_length().num_seconds() as f64 / 60.0;
            prop_assert!((minutes - 727.0).abs() < 5.0, "day length {minutes:.1} min on {date}");
        }

        /// Moving 15° east brings sunrise and sunset one hour earlier in UTC.
        #[test]
        fn test_longitude_shift_of_fifteen_degrees(
            lat in -60.0..=60.0f64,
            lon in -150.0..=150.0f64,
            date in date_2024_strategy()
        ) {
            let instant = date.and_hms_opt(12, 0, 0).unwrap().and_utc();
            let base = sun_times(lat, lon, instant).unwrap();
            let shifted = sun_times(lat, lon + 15.0, instant).unwrap();

            let sunrise_shift = (shifted.sunrise - base.sunrise).num_seconds();
            let sunset_shift = (shifted.sunset - base.sunset).num_seconds();
            prop_assert!((sunrise_shift + 3600).abs() < 120, "sunrise shift {sunrise_shift}s");
            prop_assert!((sunset_shift + 3600).abs() < 120, "sunset shift {sunset_shift}s");
        }

        /// Instant -> Julian date -> instant is lossless to well under a millisecond.
        #[test]
        fn test_julian_date_round_trip(
            secs in -2_000_000_000i64..4_000_000_000i64,
            millis in 0u32..1000
        ) {
            let instant = DateTime::from_timestamp(secs, millis * 1_000_000).unwrap();
            let back = from_julian_date(julian_date(instant)).unwrap();
            let error = (back - instant).num_microseconds().unwrap().abs();
            prop_assert!(error < 1_000, "round trip error {error}us for {instant}");
        }

        /// The calculation never panics, whatever the valid coordinate; it
        /// either yields ordered events or a polar condition.
        #[test]
        fn test_any_valid_coordinate_is_handled(
            lat in -90.0..=90.0f64,
            lon in longitude_strategy(),
            instant in instant_2024_strategy()
        ) {
            match sun_times(lat, lon, instant) {
                Ok(snapshot) => prop_assert!(snapshot.sunrise < snapshot.sunset),
                Err(SolarError::NoSunriseSunset { .. }) => prop_assert!(lat.abs() > 60.0),
                Err(e) => prop_assert!(false, "unexpected error {e}"),
            }
        }

        /// Out-of-range coordinates are rejected, never computed.
        #[test]
        fn test_invalid_coordinates_rejected(
            lat in 90.0001..1000.0f64,
            lon in 180.0001..1000.0f64,
            negate in prop::bool::ANY
        ) {
            let (lat, lon) = if negate { (-lat, -lon) } else { (lat, lon) };
            let is_invalid_coordinate = matches!(
                GeoCoordinate::new(lat, 0.0),
                Err(SolarError::InvalidCoordinate { .. })
            );
            prop_assert!(is_invalid_coordinate);
            prop_assert!(GeoCoordinate::new(0.0, lon).is_err());
        }
    }
}
