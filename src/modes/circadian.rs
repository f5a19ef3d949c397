//! Circadian mode: bulb color temperature and brightness follow the sun.
//!
//! During the day the bulb runs at the day values, at night at the night
//! values. Around sunrise and sunset it blends between them over a window of
//! `transition` centred on the solar event, using a smoothstep curve so the
//! change starts and ends gently.
//!
//! Polar day and polar night have no sunrise or sunset. Polar day keeps the
//! day values all day, polar night keeps the night values.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use std::time::Duration as StdDuration;

use super::Mode;
use crate::bulb::{Bulb, BulbState};
use crate::geo::location::LocationProvider;
use crate::geo::solar::{GeoCoordinate, PolarCondition, SolarError, solar_snapshot};
use crate::time_source::TimeSource;

/// Day and night targets plus the blend window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircadianSettings {
    pub day_temp: u32,
    pub night_temp: u32,
    pub day_brightness: u8,
    pub night_brightness: u8,
    /// Length of the blend window around sunrise and sunset.
    pub transition: Duration,
}

/// How much daylight there is, from the bulb's point of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Daylight {
    /// Normal day with sunrise and sunset; 0.0 is night, 1.0 is day.
    Cycle(f64),
    /// No sunrise or sunset today.
    Polar(PolarCondition),
}

impl Daylight {
    pub fn factor(&self) -> f64 {
        match self {
            Daylight::Cycle(factor) => *factor,
            Daylight::Polar(PolarCondition::PolarDay) => 1.0,
            Daylight::Polar(PolarCondition::PolarNight) => 0.0,
        }
    }
}

/// Fill in missing coordinates from a location provider.
///
/// A coordinate given in full is only validated. If either half is missing,
/// the provider is consulted and only the missing half is taken from it.
pub fn resolve_coordinate(
    latitude: Option<f64>,
    longitude: Option<f64>,
    provider: &dyn LocationProvider,
) -> Result<GeoCoordinate> {
    if let (Some(lat), Some(lon)) = (latitude, longitude) {
        return Ok(GeoCoordinate::new(lat, lon)?);
    }

    let resolved = provider.resolve()?;
    let source = provider.describe();

    let lat = latitude.unwrap_or_else(|| {
        log_info!(
            "Latitude not supplied, using {:.4} from {source}",
            resolved.latitude()
        );
        resolved.latitude()
    });
    let lon = longitude.unwrap_or_else(|| {
        log_info!(
            "Longitude not supplied, using {:.4} from {source}",
            resolved.longitude()
        );
        resolved.longitude()
    });

    Ok(GeoCoordinate::new(lat, lon)?)
}

/// 0.0 before `start`, 1.0 after `end`, smoothstep in between.
fn ramp(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return if now >= start { 1.0 } else { 0.0 };
    }

    let t = ((now - start).num_milliseconds() as f64 / total as f64).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Daylight at a coordinate and instant for a given blend window.
pub fn daylight(
    coordinate: GeoCoordinate,
    now: DateTime<Utc>,
    transition: Duration,
) -> Result<Daylight, SolarError> {
    match solar_snapshot(coordinate, now) {
        Ok(snapshot) => {
            let half = transition / 2;
            let risen = ramp(now, snapshot.sunrise - half, snapshot.sunrise + half);
            let set = ramp(now, snapshot.sunset - half, snapshot.sunset + half);
            Ok(Daylight::Cycle(risen.min(1.0 - set)))
        }
        Err(SolarError::NoSunriseSunset { condition, .. }) => Ok(Daylight::Polar(condition)),
        Err(e) => Err(e),
    }
}

fn lerp(night: f64, day: f64, factor: f64) -> f64 {
    night + (day - night) * factor
}

pub struct CircadianMode {
    coordinate: GeoCoordinate,
    settings: CircadianSettings,
    interval: StdDuration,
    bulb: Box<dyn Bulb>,
    clock: Arc<dyn TimeSource>,
    last_polar: Option<PolarCondition>,
}

impl CircadianMode {
    pub fn new(
        coordinate: GeoCoordinate,
        settings: CircadianSettings,
        interval: StdDuration,
        bulb: Box<dyn Bulb>,
        clock: Arc<dyn TimeSource>,
    ) -> Self {
        Self {
            coordinate,
            settings,
            interval,
            bulb,
            clock,
            last_polar: None,
        }
    }

    /// Bulb state for a given amount of daylight.
    pub fn target_state(&self, daylight: Daylight) -> BulbState {
        let factor = daylight.factor();
        let s = &self.settings;
        let kelvin = lerp(f64::from(s.night_temp), f64::from(s.day_temp), factor).round();
        let brightness =
            lerp(f64::from(s.night_brightness), f64::from(s.day_brightness), factor).round();

        BulbState::white(brightness as u8, kelvin as u32)
    }
}

impl Mode for CircadianMode {
    fn label(&self) -> &'static str {
        "circadian"
    }

    fn tick_interval(&self) -> StdDuration {
        self.interval
    }

    fn perform_action(&mut self) -> Result<()> {
        let now = self.clock.now();
        let daylight = daylight(self.coordinate, now, self.settings.transition)
            .context("Solar calculation failed")?;

        let polar = match daylight {
            Daylight::Polar(condition) => Some(condition),
            Daylight::Cycle(_) => None,
        };
        if polar != self.last_polar {
            match polar {
                Some(condition) => {
                    log_info!("No sunrise or sunset today ({condition}) at {}", self.coordinate)
                }
                None if self.last_polar.is_some() => log_info!("Regular day/night cycle resumed"),
                None => {}
            }
            self.last_polar = polar;
        }

        let state = self.target_state(daylight);
        self.bulb
            .apply(&state)
            .with_context(|| format!("Failed to set {} to {state}", self.bulb.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bulb::MockBulb;
    use crate::time_source::SimulatedTimeSource;
    use chrono::TimeZone;

    fn greenwich() -> GeoCoordinate {
        GeoCoordinate::new(51.4779, 0.0).unwrap()
    }

    fn settings() -> CircadianSettings {
        CircadianSettings {
            day_temp: 6500,
            night_temp: 2700,
            day_brightness: 100,
            night_brightness: 30,
            transition: Duration::minutes(60),
        }
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    struct StubLocation(GeoCoordinate);

    impl LocationProvider for StubLocation {
        fn resolve(&self) -> Result<GeoCoordinate> {
            Ok(self.0)
        }

        fn describe(&self) -> String {
            "stub".to_string()
        }
    }

    struct FailingLocation;

    impl LocationProvider for FailingLocation {
        fn resolve(&self) -> Result<GeoCoordinate> {
            anyhow::bail!("no network")
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn test_resolve_coordinate_prefers_explicit_values() {
        let coord = resolve_coordinate(Some(10.0), Some(20.0), &FailingLocation).unwrap();
        assert_eq!(coord, GeoCoordinate::new(10.0, 20.0).unwrap());
    }

    #[test]
    fn test_resolve_coordinate_fills_missing_half() {
        let provider = StubLocation(GeoCoordinate::new(52.0, 21.0).unwrap());

        let coord = resolve_coordinate(Some(40.0), None, &provider).unwrap();
        assert_eq!(coord, GeoCoordinate::new(40.0, 21.0).unwrap());

        let coord = resolve_coordinate(None, Some(-3.0), &provider).unwrap();
        assert_eq!(coord, GeoCoordinate::new(52.0, -3.0).unwrap());

        let coord = resolve_coordinate(None, None, &provider).unwrap();
        assert_eq!(coord, GeoCoordinate::new(52.0, 21.0).unwrap());
    }

    #[test]
    fn test_resolve_coordinate_errors() {
        let err = resolve_coordinate(Some(95.0), Some(0.0), &FailingLocation).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SolarError>(),
            Some(SolarError::InvalidCoordinate { .. })
        ));

        let err = resolve_coordinate(None, Some(0.0), &FailingLocation).unwrap_err();
        assert!(err.to_string().contains("no network"));
    }

    #[test]
    fn test_daylight_through_a_summer_day() {
        // Greenwich 2024-06-20: sunrise ~03:43, sunset ~20:21 UTC
        let transition = Duration::minutes(60);
        let at = |h, m| daylight(greenwich(), utc(2024, 6, 20, h, m), transition).unwrap();

        assert_eq!(at(1, 0), Daylight::Cycle(0.0));
        assert_eq!(at(12, 0), Daylight::Cycle(1.0));
        assert_eq!(at(23, 0), Daylight::Cycle(0.0));

        let dawn = at(3, 43).factor();
        assert!((dawn - 0.5).abs() < 0.1, "factor at sunrise {dawn}");
        let dusk = at(20, 21).factor();
        assert!((dusk - 0.5).abs() < 0.1, "factor at sunset {dusk}");

        assert!(at(3, 30).factor() < at(3, 55).factor());
        assert!(at(20, 10).factor() > at(20, 35).factor());
    }

    #[test]
    fn test_daylight_polar_policy() {
        let svalbard = GeoCoordinate::new(78.2232, 15.6267).unwrap();
        let transition = Duration::minutes(60);

        let winter = daylight(svalbard, utc(2024, 12, 21, 12, 0), transition).unwrap();
        assert_eq!(winter, Daylight::Polar(PolarCondition::PolarNight));
        assert_eq!(winter.factor(), 0.0);

        let summer = daylight(svalbard, utc(2024, 6, 21, 0, 0), transition).unwrap();
        assert_eq!(summer, Daylight::Polar(PolarCondition::PolarDay));
        assert_eq!(summer.factor(), 1.0);
    }

    #[test]
    fn test_target_state_interpolates() {
        let clock = Arc::new(SimulatedTimeSource::new(utc(2024, 6, 20, 12, 0)));
        let mode = CircadianMode::new(
            greenwich(),
            settings(),
            StdDuration::from_secs(60),
            Box::new(MockBulb::new()),
            clock,
        );

        assert_eq!(
            mode.target_state(Daylight::Cycle(1.0)),
            BulbState::white(100, 6500)
        );
        assert_eq!(
            mode.target_state(Daylight::Cycle(0.0)),
            BulbState::white(30, 2700)
        );
        assert_eq!(
            mode.target_state(Daylight::Cycle(0.5)),
            BulbState::white(65, 4600)
        );
        assert_eq!(
            mode.target_state(Daylight::Polar(PolarCondition::PolarNight)),
            BulbState::white(30, 2700)
        );
    }

    #[test]
    fn test_action_applies_day_state_at_noon() {
        let clock = Arc::new(SimulatedTimeSource::new(utc(2024, 6, 20, 12, 0)));
        let mut bulb = MockBulb::new();
        bulb.expect_apply()
            .withf(|state| *state == BulbState::white(100, 6500))
            .times(1)
            .returning(|_| Ok(()));

        let mut mode = CircadianMode::new(
            greenwich(),
            settings(),
            StdDuration::from_secs(60),
            Box::new(bulb),
            clock,
        );

        assert_eq!(mode.label(), "circadian");
        assert_eq!(mode.tick_interval(), StdDuration::from_secs(60));
        mode.perform_action().unwrap();
    }

    #[test]
    fn test_action_follows_the_clock() {
        let clock = Arc::new(SimulatedTimeSource::new(utc(2024, 12, 21, 22, 0)));
        let mut bulb = MockBulb::new();
        let mut seq = mockall::Sequence::new();
        bulb.expect_apply()
            .withf(|state| *state == BulbState::white(30, 2700))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        bulb.expect_apply()
            .withf(|state| *state == BulbState::white(100, 6500))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut mode = CircadianMode::new(
            greenwich(),
            settings(),
            StdDuration::from_secs(60),
            Box::new(bulb),
            clock.clone(),
        );

        mode.perform_action().unwrap();
        clock.set(utc(2024, 12, 22, 12, 0));
        mode.perform_action().unwrap();
    }

    #[test]
    fn test_action_reports_bulb_failure() {
        let clock = Arc::new(SimulatedTimeSource::new(utc(2024, 6, 20, 12, 0)));
        let mut bulb = MockBulb::new();
        bulb.expect_apply()
            .returning(|_| Err(anyhow::anyhow!("connection refused")));
        bulb.expect_name().return_const("porch".to_string());

        let mut mode = CircadianMode::new(
            greenwich(),
            settings(),
            StdDuration::from_secs(60),
            Box::new(bulb),
            clock,
        );

        let err = mode.perform_action().unwrap_err();
        assert!(err.to_string().contains("Failed to set porch"));
        assert!(format!("{err:#}").contains("connection refused"));
    }
}
