//! Simulation time management
//!
//! The engine advances in fixed ticks of a tenth of a second. All timing
//! decisions inside a trial use integer [`Ticks`]; conversion to seconds only
//! happens at reporting boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Number of ticks in one simulated second.
pub const TICKS_PER_SECOND: u64 = 10;

/// Number of simulated seconds in one hour.
pub const SECONDS_PER_HOUR: u64 = 60 * 60;

/// Simulation time with tenth-of-a-second precision
///
/// `Ticks` is used both as a point in time (ticks since trial start) and as a
/// span (service duration, time spent in the system). Arithmetic saturates
/// rather than wrapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ticks(u64);

impl Ticks {
    /// Tick zero, the start of every trial
    pub const ZERO: Ticks = Ticks(0);

    pub const fn from_ticks(ticks: u64) -> Self {
        Ticks(ticks)
    }

    pub const fn from_secs(secs: u64) -> Self {
        Ticks(secs.saturating_mul(TICKS_PER_SECOND))
    }

    /// Length of a horizon expressed in whole hours
    pub const fn from_hours(hours: u64) -> Self {
        Self::from_secs(hours.saturating_mul(SECONDS_PER_HOUR))
    }

    /// Convert seconds to ticks, truncating toward zero.
    ///
    /// Negative and NaN inputs map to zero; values beyond `u64::MAX` ticks
    /// saturate.
    pub fn from_secs_f64_truncated(secs: f64) -> Self {
        Ticks((secs * TICKS_PER_SECOND as f64) as u64)
    }

    /// Convert seconds to ticks, rounding half away from zero.
    pub fn from_secs_f64_rounded(secs: f64) -> Self {
        Ticks((secs * TICKS_PER_SECOND as f64).round() as u64)
    }

    pub const fn as_ticks(&self) -> u64 {
        self.0
    }

    /// Span between `earlier` and `self`, zero if `earlier` is later.
    pub const fn since(&self, earlier: Ticks) -> Ticks {
        Ticks(self.0.saturating_sub(earlier.0))
    }
}

/// Convert a mean expressed in ticks to seconds.
pub fn ticks_to_secs(ticks: f64) -> f64 {
    ticks / TICKS_PER_SECOND as f64
}

impl Add for Ticks {
    type Output = Ticks;

    fn add(self, rhs: Ticks) -> Self::Output {
        Ticks(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Ticks {
    fn add_assign(&mut self, rhs: Ticks) {
        *self = *self + rhs;
    }
}

impl Sub for Ticks {
    type Output = Ticks;

    fn sub(self, rhs: Ticks) -> Self::Output {
        self.since(rhs)
    }
}

impl std::iter::Sum for Ticks {
    fn sum<I: Iterator<Item = Ticks>>(iter: I) -> Self {
        iter.fold(Ticks::ZERO, Add::add)
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / TICKS_PER_SECOND;
        let tenths = self.0 % TICKS_PER_SECOND;
        write!(f, "{whole}.{tenths}s")
    }
}
