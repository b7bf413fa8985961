//! Fixed-tick M/M/1 queue simulation engine.
//!
//! This crate provides the building blocks of a single trial:
//! time management ([`Ticks`]), randomness ([`RandomProvider`]), the arrival and
//! service generators, the customer lifecycle and the tick-driven
//! [`QueueEngine`].
//!
//! # Basic Usage
//!
//! ```rust
//! use mm1_core::{QueueEngine, SimulationConfig, StdRandomProvider};
//!
//! let config = SimulationConfig::default().with_hours(1);
//! config.validate().unwrap();
//!
//! let engine = QueueEngine::new(config.horizon());
//! let outcome = engine
//!     .run_trial(&config, StdRandomProvider::seeded(7))
//!     .unwrap();
//!
//! assert_eq!(outcome.samples().len() as u64, config.horizon().as_ticks());
//! ```
//!
//! # Time Model
//!
//! One tick is a tenth of a simulated second. All scheduling decisions use
//! integer ticks; seconds only appear when results are reported.

pub mod config;
pub mod customer;
pub mod dists;
pub mod engine;
pub mod error;
pub mod logging;
pub mod randomness;
pub mod time;

pub use config::SimulationConfig;
pub use customer::{InServiceCustomer, ServicedCustomer, WaitingCustomer};
pub use dists::{
    ExponentialServiceTimes, PoissonArrivals, ARRIVAL_OVERRUN_OFFSET, MIN_MEAN_SERVICE_SECS,
};
pub use engine::{OccupancySample, QueueEngine, TrialOutcome};
pub use error::SimError;
pub use logging::{init_simulation_logging_with_level, simulation_span, trial_span};
pub use randomness::{derive_seed, DrawSite, RandomProvider, StdRandomProvider};
pub use time::{ticks_to_secs, Ticks, SECONDS_PER_HOUR, TICKS_PER_SECOND};
