//! Geographic location and sunrise/sunset calculations.
//!
//! ## Module Structure
//!
//! - [`solar`]: The sunrise equation, solar snapshot and elevation
//! - [`location`]: Coordinate providers (explicit or estimated from the system timezone)
//! - [`display`]: Logging of solar calculation details
//! - `zones`: Zone coordinate and link tables used by [`location`]
//!
//! Latitudes inside the polar circles can have days without sunrise or
//! sunset. The calculation reports those as
//! [`SolarError::NoSunriseSunset`] carrying a [`PolarCondition`]. Deciding
//! what the bulb should do then is left to the caller.

pub mod display;
pub mod location;
pub mod solar;
mod zones;

// Re-exports for public API
pub use display::log_solar_info;
pub use location::{FixedLocation, LocationProvider, TimezoneLocation};
pub use solar::{GeoCoordinate, PolarCondition, SolarError, SolarSnapshot, solar_snapshot};
