//! Time source abstraction for supporting both real-time and simulated time.
//!
//! Components that need the current time or need to wait receive an
//! `Arc<dyn TimeSource>` instead of reading the system clock directly. The
//! simulated source lets tests drive solar calculations and the scheduler
//! loop without waiting for real time to pass.

use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration as StdDuration;

use crate::constants::CHECK_INTERVAL_MS;

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;

    /// Sleep for the specified duration (or simulate it)
    fn sleep(&self, duration: StdDuration);

    /// Sleep in short slices, returning early once `running` is cleared.
    ///
    /// Returns `true` if the full duration elapsed while still running.
    fn sleep_while_running(&self, duration: StdDuration, running: &AtomicBool) -> bool {
        let slice = StdDuration::from_millis(CHECK_INTERVAL_MS);
        let mut remaining = duration;

        while !remaining.is_zero() {
            if !running.load(Ordering::SeqCst) {
                return false;
            }
            let step = remaining.min(slice);
            self.sleep(step);
            remaining -= step;
        }

        running.load(Ordering::SeqCst)
    }
}

/// Real-time implementation that uses actual system time
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }
}

/// Simulated time source where sleeping advances a virtual clock instantly.
pub struct SimulatedTimeSource {
    current: Mutex<DateTime<Utc>>,
    /// Total simulated time slept, used by tests to check cadence
    slept: Mutex<StdDuration>,
}

impl SimulatedTimeSource {
    /// Create a simulated clock starting at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
            slept: Mutex::new(StdDuration::ZERO),
        }
    }

    /// Move the clock forward without counting it as sleep
    pub fn advance(&self, duration: StdDuration) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current += chrono::Duration::from_std(duration).unwrap_or(chrono::Duration::zero());
    }

    /// Jump the clock to an absolute instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = instant;
    }

    /// Total simulated time spent in `sleep`
    pub fn total_slept(&self) -> StdDuration {
        *self.slept.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn sleep(&self, duration: StdDuration) {
        self.advance(duration);
        *self.slept.lock().unwrap_or_else(|e| e.into_inner()) += duration;
    }
}

/// Parse a date in the format "YYYY-MM-DD"
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid date format: {e}. Use YYYY-MM-DD"))
}
