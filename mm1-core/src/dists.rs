//! Arrival and service-time generators
//!
//! Both generators produce a bounded sequence of [`Ticks`] for one trial. The
//! sequences are generated up front and consumed once by the engine; every
//! trial draws a fresh pair.

use crate::error::SimError;
use crate::randomness::{sites, RandomProvider};
use crate::time::{Ticks, TICKS_PER_SECOND};
use std::collections::VecDeque;
use tracing::trace;

/// Safety margin added to the horizon when generating arrivals, so the engine
/// always has a pending arrival past the last simulated tick.
pub const ARRIVAL_OVERRUN_OFFSET: Ticks = Ticks::from_ticks(100);

/// Smallest accepted mean service time: one tick. Shorter means round almost
/// every draw to zero ticks, and the duration sequence would never fill its
/// capacity.
pub const MIN_MEAN_SERVICE_SECS: f64 = 1.0 / TICKS_PER_SECOND as f64;

fn check_positive(name: &str, value: f64) -> Result<(), SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimError::config(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

/// Poisson arrival process
///
/// Inter-arrival gaps are exponentially distributed with rate `lambda / 60`
/// per second, where `lambda` is the mean number of arrivals per minute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonArrivals {
    lambda_per_minute: f64,
}

impl PoissonArrivals {
    pub fn new(lambda_per_minute: f64) -> Result<Self, SimError> {
        check_positive("lambda", lambda_per_minute)?;
        Ok(Self { lambda_per_minute })
    }

    /// Arrival rate in customers per second
    pub fn rate(&self) -> f64 {
        self.lambda_per_minute / 60.0
    }

    /// Generate the arrival ticks for one trial.
    ///
    /// The running clock is kept in seconds and truncated to ticks. Every
    /// arrival below `horizon + ARRIVAL_OVERRUN_OFFSET` is kept, and so is the
    /// first one at or past that bound, which terminates the sequence. The
    /// result is non-decreasing and its last element is always beyond
    /// `horizon`.
    pub fn schedule(&self, mut provider: impl RandomProvider, horizon: Ticks) -> VecDeque<Ticks> {
        let bound = horizon + ARRIVAL_OVERRUN_OFFSET;
        let rate = self.rate();
        let site = sites::INTER_ARRIVAL;

        let mut arrivals = VecDeque::new();
        let mut clock_secs = 0.0;
        loop {
            clock_secs += provider.sample_exp_seconds(site, rate);
            let tick = Ticks::from_secs_f64_truncated(clock_secs);
            arrivals.push_back(tick);
            if tick >= bound {
                break;
            }
        }

        trace!(
            arrivals = arrivals.len(),
            horizon = horizon.as_ticks(),
            "Generated arrival schedule"
        );
        arrivals
    }
}

/// Exponential service-time distribution with a given mean in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialServiceTimes {
    mean_secs: f64,
}

impl ExponentialServiceTimes {
    pub fn new(mean_secs: f64) -> Result<Self, SimError> {
        check_positive("mean service time", mean_secs)?;
        if mean_secs < MIN_MEAN_SERVICE_SECS {
            return Err(SimError::config(format!(
                "mean service time must be at least {MIN_MEAN_SERVICE_SECS} s (one tick), got {mean_secs}"
            )));
        }
        Ok(Self { mean_secs })
    }

    /// Service rate in customers per second
    pub fn rate(&self) -> f64 {
        1.0 / self.mean_secs
    }

    /// Generate service durations until their cumulative length reaches
    /// `capacity`.
    ///
    /// Each duration is rounded to the nearest tick. The last element is the
    /// one that first brings the running sum to `capacity` or above, so
    /// dropping it leaves the sum short of `capacity`. An empty sequence is
    /// returned for a zero capacity.
    pub fn durations(&self, mut provider: impl RandomProvider, capacity: Ticks) -> VecDeque<Ticks> {
        let rate = self.rate();
        let site = sites::SERVICE_TIME;

        let mut durations = VecDeque::new();
        let mut total = Ticks::ZERO;
        while total < capacity {
            let duration = Ticks::from_secs_f64_rounded(provider.sample_exp_seconds(site, rate));
            durations.push_back(duration);
            total += duration;
        }

        trace!(
            durations = durations.len(),
            total = total.as_ticks(),
            "Generated service durations"
        );
        durations
    }
}
