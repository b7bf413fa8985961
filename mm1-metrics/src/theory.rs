//! Closed-form steady-state values of the M/M/1 queue
//!
//! Used as a reference next to the simulated averages. The tick engine adds a
//! one-tick completion lag to every service and rounds service times to whole
//! ticks, so simulated values sit slightly above these.

use mm1_core::SimulationConfig;
use serde::Serialize;

/// Steady-state M/M/1 metrics; times in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Mm1Theory {
    pub utilization: f64,
    pub customers_in_system: f64,
    pub customers_in_queue: f64,
    pub time_in_system: f64,
    pub time_in_queue: f64,
}

impl Mm1Theory {
    /// Rates are per second. Returns `None` unless `0 < λ < μ`.
    pub fn new(lambda: f64, mu: f64) -> Option<Self> {
        if !(lambda.is_finite() && mu.is_finite()) || lambda <= 0.0 || lambda >= mu {
            return None;
        }
        let rho = lambda / mu;
        Some(Self {
            utilization: rho,
            customers_in_system: rho / (1.0 - rho),
            customers_in_queue: rho * rho / (1.0 - rho),
            time_in_system: 1.0 / (mu - lambda),
            time_in_queue: rho / (mu - lambda),
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Option<Self> {
        Self::new(config.arrival_rate_per_sec(), config.service_rate_per_sec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values_for_defaults() {
        let theory = Mm1Theory::from_config(&SimulationConfig::default()).unwrap();
        assert!((theory.utilization - 0.8).abs() < 1e-9);
        assert!((theory.customers_in_system - 4.0).abs() < 1e-9);
        assert!((theory.customers_in_queue - 3.2).abs() < 1e-9);
        assert!((theory.time_in_system - 120.0).abs() < 1e-9);
        assert!((theory.time_in_queue - 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_littles_law() {
        let (lambda, mu) = (0.3, 0.5);
        let theory = Mm1Theory::new(lambda, mu).unwrap();
        assert!((theory.customers_in_system - lambda * theory.time_in_system).abs() < 1e-12);
        assert!((theory.customers_in_queue - lambda * theory.time_in_queue).abs() < 1e-12);
    }

    #[test]
    fn test_unstable_queue_has_no_steady_state() {
        assert!(Mm1Theory::new(1.0, 1.0).is_none());
        assert!(Mm1Theory::new(2.0, 1.0).is_none());
        assert!(Mm1Theory::new(0.0, 1.0).is_none());
    }
}
