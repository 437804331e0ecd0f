//! Time sources for stamping messages and checking operation deadlines.
//!
//! The clock is injected into the functions that need it instead of being
//! read from ambient middleware state, so the evaluation predicates stay
//! testable without any runtime initialization.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::msg::Time;

/// A wall-clock source.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current time as a message stamp.
    fn now(&self) -> Time;

    /// Current time in seconds since the clock's epoch.
    fn seconds(&self) -> f64;
}

/// The system wall clock, measured from the UNIX epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Time {
        Time::from_seconds(self.seconds())
    }

    fn seconds(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// A clock that only moves when told to.
///
/// Used by the demo binary and by tests that pin timeout and stamping
/// behavior to exact instants.
#[derive(Debug, Default)]
pub struct ManualClock {
    seconds: Mutex<f64>,
}

impl ManualClock {
    /// Creates a clock pinned at the given seconds value.
    pub fn starting_at(seconds: f64) -> Self {
        ManualClock {
            seconds: Mutex::new(seconds),
        }
    }

    /// Moves the clock forward by `delta` seconds.
    pub fn advance(&self, delta: f64) {
        *self.seconds.lock().unwrap() += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Time {
        Time::from_seconds(self.seconds())
    }

    fn seconds(&self) -> f64 {
        *self.seconds.lock().unwrap()
    }
}
