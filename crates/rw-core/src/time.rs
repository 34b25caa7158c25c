//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically non-decreasing scalar in **seconds** since
//! simulation start.  Timetables carry planned times on the same axis, so
//! wait-time arithmetic (`planned_departure - now`) is a plain subtraction;
//! the result is a signed duration that may legitimately be negative when the
//! simulation is running behind its timetable.
//!
//! The clock is advanced only by the host's event loop.  Movement code never
//! mutates it — walkers receive the current `SimTime` as an argument.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp, in seconds since simulation start.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub f64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0.0);

    /// The timestamp `secs` seconds after `self`.
    #[inline]
    pub fn offset(self, secs: f64) -> SimTime {
        SimTime(self.0 + secs)
    }

    /// Raw seconds since simulation start.
    #[inline]
    pub fn as_secs(self) -> f64 {
        self.0
    }
}

impl std::ops::Add<f64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: f64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::Sub for SimTime {
    /// Signed duration in seconds.  Negative when `rhs` is later than `self`.
    type Output = f64;
    #[inline]
    fn sub(self, rhs: SimTime) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.1}s", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The host-owned simulation clock.
///
/// Cheap to copy; movement code only ever reads `now()`.  Advancing backwards
/// is a host bug and trips a debug assertion.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    current: SimTime,
}

impl SimClock {
    pub fn new() -> Self {
        Self { current: SimTime::ZERO }
    }

    /// The current simulation timestamp.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.current
    }

    /// Advance the clock by `secs` seconds.
    ///
    /// # Panics
    /// Panics in debug mode if `secs` is negative.
    #[inline]
    pub fn advance(&mut self, secs: f64) {
        debug_assert!(secs >= 0.0, "clock moved backwards by {secs}s");
        self.current = self.current + secs;
    }

    /// Jump the clock directly to `time`.
    ///
    /// # Panics
    /// Panics in debug mode if `time` is earlier than the current time.
    #[inline]
    pub fn advance_to(&mut self, time: SimTime) {
        debug_assert!(time >= self.current, "clock moved backwards to {time}");
        self.current = time;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current)
    }
}
