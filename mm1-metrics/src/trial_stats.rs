//! Reduction of one trial to four averages

use crate::error::MetricsError;
use mm1_core::TrialOutcome;
use serde::Serialize;

/// Averages of a single trial, in tick units
///
/// Occupancy averages are taken over every simulated tick. Time averages are
/// taken over the customers serviced within the horizon and are `None` when
/// there were none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialStatistics {
    pub avg_customers_in_system: f64,
    pub avg_customers_in_queue: f64,
    pub avg_time_in_system: Option<f64>,
    pub avg_time_in_queue: Option<f64>,
    pub serviced_customers: usize,
    pub unserved_customers: usize,
}

impl TrialStatistics {
    pub fn from_outcome(outcome: &TrialOutcome) -> Result<Self, MetricsError> {
        let samples = outcome.samples();
        if samples.is_empty() {
            return Err(MetricsError::EmptyTrial);
        }
        let ticks = samples.len() as f64;
        let in_system: u64 = samples.iter().map(|s| u64::from(s.in_system)).sum();
        let in_queue: u64 = samples.iter().map(|s| u64::from(s.in_queue)).sum();

        let serviced = outcome.serviced();
        let (avg_time_in_system, avg_time_in_queue) = if serviced.is_empty() {
            (None, None)
        } else {
            let count = serviced.len() as f64;
            let system: u64 = serviced.iter().map(|c| c.time_in_system().as_ticks()).sum();
            let queue: u64 = serviced.iter().map(|c| c.time_in_queue().as_ticks()).sum();
            (Some(system as f64 / count), Some(queue as f64 / count))
        };

        Ok(Self {
            avg_customers_in_system: in_system as f64 / ticks,
            avg_customers_in_queue: in_queue as f64 / ticks,
            avg_time_in_system,
            avg_time_in_queue,
            serviced_customers: serviced.len(),
            unserved_customers: outcome.unserved(),
        })
    }
}
