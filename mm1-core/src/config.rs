//! Simulation parameters and their validation

use crate::dists::{ExponentialServiceTimes, PoissonArrivals};
use crate::error::SimError;
use crate::time::Ticks;
use serde::{Deserialize, Serialize};

/// Parameters of a multi-trial M/M/1 run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Horizon of each trial in hours
    pub hours: u32,
    /// Mean arrivals per minute
    pub lambda: f64,
    /// Mean service time in seconds
    pub mean_service_secs: f64,
    /// Number of independent trials
    pub trials: u32,
    /// Base seed; `None` draws every trial from OS entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hours: 5,
            lambda: 2.0,
            mean_service_secs: 24.0,
            trials: 100,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_hours(mut self, hours: u32) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn with_mean_service_secs(mut self, mean: f64) -> Self {
        self.mean_service_secs = mean;
        self
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Reject parameters that would make a trial meaningless or endless.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.hours == 0 {
            return Err(SimError::config("hours must be at least 1"));
        }
        if self.trials == 0 {
            return Err(SimError::config("trial count must be at least 1"));
        }
        self.arrivals()?;
        self.service_times()?;
        Ok(())
    }

    /// Number of ticks simulated per trial
    pub fn horizon(&self) -> Ticks {
        Ticks::from_hours(u64::from(self.hours))
    }

    pub fn arrivals(&self) -> Result<PoissonArrivals, SimError> {
        PoissonArrivals::new(self.lambda)
    }

    pub fn service_times(&self) -> Result<ExponentialServiceTimes, SimError> {
        ExponentialServiceTimes::new(self.mean_service_secs)
    }

    pub fn arrival_rate_per_sec(&self) -> f64 {
        self.lambda / 60.0
    }

    pub fn service_rate_per_sec(&self) -> f64 {
        1.0 / self.mean_service_secs
    }

    /// Offered load λ/μ; the queue is only stable below 1.
    pub fn utilization(&self) -> f64 {
        self.arrival_rate_per_sec() / self.service_rate_per_sec()
    }
}
