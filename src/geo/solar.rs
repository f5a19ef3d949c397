//! Sunrise equation and solar position for a coordinate and an instant.
//!
//! Implements the "complete calculation on Earth" form of the sunrise equation
//! (<https://en.wikipedia.org/wiki/Sunrise_equation>). It is accurate to a
//! couple of minutes outside the polar circles, which is plenty for lighting
//! automation, and it is deliberately not a general ephemeris.
//!
//! ## Units
//!
//! Every angle is carried in **radians** between pipeline stages. The published
//! formula constants are in degrees, so each stage converts its degree-valued
//! result with `to_radians()` before any trigonometric call consumes it. The
//! public [`SolarSnapshot`] reports degrees again for readability.
//!
//! ## Time
//!
//! Instants are `DateTime<Utc>`. Internally they become Julian dates
//! (days since -4712-01-01 12:00 UT) and a continuous day count relative to
//! J2000 with the 0.0008 day terrestrial-time correction applied.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::f64::consts::TAU;
use std::fmt;
use thiserror::Error;

use crate::constants::{
    EARTH_AXIAL_TILT, J2000, PERIHELION_ARGUMENT, SECONDS_PER_DAY, SUNRISE_ELEVATION,
    TERRESTRIAL_TIME_CORRECTION, UNIX_EPOCH_JULIAN_DATE,
};

/// Which way the sun misbehaves when there is no sunrise or sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolarCondition {
    /// The sun stays above the horizon for the whole day.
    PolarDay,
    /// The sun stays below the horizon for the whole day.
    PolarNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolarCondition::PolarDay => write!(f, "polar day"),
            PolarCondition::PolarNight => write!(f, "polar night"),
        }
    }
}

/// Errors raised by the solar calculation.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SolarError {
    #[error(
        "invalid coordinate ({latitude}, {longitude}): latitude must be within -90..=90 and longitude within -180..=180 degrees"
    )]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("no sunrise or sunset on this day ({condition}), solar noon at {transit}")]
    NoSunriseSunset {
        condition: PolarCondition,
        /// Solar noon still exists during polar day and night.
        transit: DateTime<Utc>,
        /// Declination of the sun in degrees.
        declination: f64,
    },

    #[error("julian date {0} is outside the representable time range")]
    OutOfRange(f64),
}

/// A validated geographic coordinate in degrees (longitude positive east).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SolarError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(SolarError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{ns}, {:.4}°{ew}",
            self.latitude.abs(),
            self.longitude.abs()
        )
    }
}

/// Everything the sunrise equation derives for one coordinate and day.
///
/// Angles are in degrees, instants in UTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarSnapshot {
    pub coordinate: GeoCoordinate,
    /// Continuous day count since J2000 (with the 0.0008 correction) of the query instant.
    pub julian_day: f64,
    /// Mean solar noon as a day count since J2000.
    pub mean_solar_noon: f64,
    pub mean_anomaly: f64,
    pub equation_of_center: f64,
    pub ecliptic_longitude: f64,
    pub declination: f64,
    pub hour_angle: f64,
    pub transit: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SolarSnapshot {
    /// Time between sunrise and sunset.
    pub fn day_length(&self) -> Duration {
        self.sunset - self.sunrise
    }
}

/// Julian date of an instant.
pub fn julian_date(instant: DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1e9;
    seconds / SECONDS_PER_DAY + UNIX_EPOCH_JULIAN_DATE
}

/// Instant of a Julian date, rounded to the nearest nanosecond.
pub fn from_julian_date(julian_date: f64) -> Result<DateTime<Utc>, SolarError> {
    let seconds = (julian_date - UNIX_EPOCH_JULIAN_DATE) * SECONDS_PER_DAY;
    if !seconds.is_finite() || seconds.abs() > i64::MAX as f64 / 2.0 {
        return Err(SolarError::OutOfRange(julian_date));
    }

    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos).ok_or(SolarError::OutOfRange(julian_date))
}

/// Continuous day count relative to J2000, including the terrestrial time correction.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    julian_date(instant) - J2000 + TERRESTRIAL_TIME_CORRECTION
}

/// Inverse of [`julian_day`].
pub fn from_julian_day(day: f64) -> Result<DateTime<Utc>, SolarError> {
    from_julian_date(day + J2000 - TERRESTRIAL_TIME_CORRECTION)
}

/// UTC instant of local mean noon on a calendar date at the given longitude.
///
/// Querying the solar calculation at this instant always selects that date's
/// solar day, whatever the longitude.
pub fn local_mean_noon(date: NaiveDate, longitude: f64) -> DateTime<Utc> {
    let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc();
    let offset_ms = (longitude / 360.0 * SECONDS_PER_DAY * 1000.0).round() as i64;
    noon - Duration::milliseconds(offset_ms)
}

/// Intermediate values of the sunrise equation for one solar day. Radians and Julian dates.
#[derive(Debug, Clone, Copy)]
struct SolarDay {
    julian_day: f64,
    mean_solar_noon: f64,
    mean_anomaly: f64,
    equation_of_center: f64,
    ecliptic_longitude: f64,
    declination: f64,
    transit: f64,
}

impl SolarDay {
    fn compute(coordinate: GeoCoordinate, instant: DateTime<Utc>) -> Self {
        let julian_day = julian_day(instant);
        let longitude = coordinate.longitude;

        // The solar day whose mean noon lies closest to the instant at this longitude
        let day = (julian_day + longitude / 360.0).round();
        let mean_solar_noon = day - longitude / 360.0;

        let mean_anomaly_deg = (357.5291 + 0.98560028 * mean_solar_noon).rem_euclid(360.0);
        let mean_anomaly = mean_anomaly_deg.to_radians();

        // The coefficients produce degrees, the sines consume the anomaly in radians
        let equation_of_center_deg = 1.9148 * mean_anomaly.sin()
            + 0.0200 * (2.0 * mean_anomaly).sin()
            + 0.0003 * (3.0 * mean_anomaly).sin();
        let equation_of_center = equation_of_center_deg.to_radians();

        let ecliptic_longitude_deg =
            (mean_anomaly_deg + equation_of_center_deg + 180.0 + PERIHELION_ARGUMENT)
                .rem_euclid(360.0);
        let ecliptic_longitude = ecliptic_longitude_deg.to_radians();

        let transit = J2000 + mean_solar_noon + 0.0053 * mean_anomaly.sin()
            - 0.0069 * (2.0 * ecliptic_longitude).sin();

        let declination =
            (ecliptic_longitude.sin() * EARTH_AXIAL_TILT.to_radians().sin()).asin();

        Self {
            julian_day,
            mean_solar_noon,
            mean_anomaly,
            equation_of_center,
            ecliptic_longitude,
            declination,
            transit,
        }
    }

    /// Hour angle of sunrise/sunset in radians, or the polar condition when
    /// the sun never crosses the horizon.
    fn hour_angle(&self, latitude: f64) -> Result<f64, PolarCondition> {
        let phi = latitude.to_radians();
        let numerator = SUNRISE_ELEVATION.to_radians().sin() - phi.sin() * self.declination.sin();
        let denominator = phi.cos() * self.declination.cos();

        // At the poles the denominator vanishes; the numerator's sign still
        // says whether the sun is up.
        if denominator.abs() < f64::EPSILON {
            return Err(if numerator < 0.0 {
                PolarCondition::PolarDay
            } else {
                PolarCondition::PolarNight
            });
        }

        let cos_hour_angle = numerator / denominator;
        if cos_hour_angle < -1.0 {
            Err(PolarCondition::PolarDay)
        } else if cos_hour_angle > 1.0 {
            Err(PolarCondition::PolarNight)
        } else {
            Ok(cos_hour_angle.acos())
        }
    }
}

/// Compute the solar snapshot for a coordinate at an instant.
///
/// The sunrise and sunset belong to the solar day (local mean midnight to
/// midnight) that contains `instant`.
pub fn solar_snapshot(
    coordinate: GeoCoordinate,
    instant: DateTime<Utc>,
) -> Result<SolarSnapshot, SolarError> {
    let day = SolarDay::compute(coordinate, instant);
    let transit = from_julian_date(day.transit)?;

    let hour_angle = day.hour_angle(coordinate.latitude).map_err(|condition| {
        SolarError::NoSunriseSunset {
            condition,
            transit,
            declination: day.declination.to_degrees(),
        }
    })?;

    let half_day = hour_angle / TAU;
    let sunrise = from_julian_date(day.transit - half_day)?;
    let sunset = from_julian_date(day.transit + half_day)?;

    Ok(SolarSnapshot {
        coordinate,
        julian_day: day.julian_day,
        mean_solar_noon: day.mean_solar_noon,
        mean_anomaly: day.mean_anomaly.to_degrees(),
        equation_of_center: day.equation_of_center.to_degrees(),
        ecliptic_longitude: day.ecliptic_longitude.to_degrees(),
        declination: day.declination.to_degrees(),
        hour_angle: hour_angle.to_degrees(),
        transit,
        sunrise,
        sunset,
    })
}

/// Validate raw degrees and compute the snapshot.
pub fn sun_times(
    latitude: f64,
    longitude: f64,
    instant: DateTime<Utc>,
) -> Result<SolarSnapshot, SolarError> {
    solar_snapshot(GeoCoordinate::new(latitude, longitude)?, instant)
}

/// Elevation of the sun above the horizon in degrees at an instant.
///
/// Uses the day's declination and measures the hour angle from the computed
/// solar transit, so it agrees with the sunrise/sunset instants above.
pub fn solar_elevation(coordinate: GeoCoordinate, instant: DateTime<Utc>) -> f64 {
    let day = SolarDay::compute(coordinate, instant);
    let hour_angle = TAU * (julian_date(instant) - day.transit);
    let phi = coordinate.latitude.to_radians();

    let sin_elevation =
        phi.sin() * day.declination.sin() + phi.cos() * day.declination.cos() * hour_angle.cos();
    sin_elevation.clamp(-1.0, 1.0).asin().to_degrees()
}
