//! Fixed-tick M/M/1 queue engine
//!
//! One trial advances a single server and a FIFO queue from tick zero up to,
//! but excluding, the horizon. Each tick runs four phases in a fixed order:
//!
//! 1. **Arrivals**: every arrival scheduled for this tick joins the tail of the
//!    queue, so simultaneous arrivals are all enqueued before the server moves.
//! 2. **Progress / completion**: a busy server with remaining work counts down
//!    one tick; a busy server with nothing left releases its customer. A
//!    service of `d` ticks therefore occupies the server for `d + 1` ticks, and
//!    a zero-length service completes on the tick after it started.
//! 3. **Dispatch**: an idle server takes the head of the queue and draws the
//!    next service duration.
//! 4. **Sampling**: the occupancy of the system and of the queue is recorded.
//!
//! Customers still waiting or in service when the horizon is reached are left
//! out of the serviced list.

use crate::config::SimulationConfig;
use crate::customer::{InServiceCustomer, ServicedCustomer, WaitingCustomer};
use crate::error::SimError;
use crate::randomness::RandomProvider;
use crate::time::Ticks;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Occupancy recorded at the end of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccupancySample {
    pub in_system: u32,
    pub in_queue: u32,
    pub server_busy: bool,
}

/// Raw output of one trial
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    horizon: Ticks,
    samples: Vec<OccupancySample>,
    serviced: Vec<ServicedCustomer>,
    arrivals: usize,
    unserved: usize,
}

impl TrialOutcome {
    pub fn horizon(&self) -> Ticks {
        self.horizon
    }

    /// One sample per simulated tick
    pub fn samples(&self) -> &[OccupancySample] {
        &self.samples
    }

    /// Customers whose service completed within the horizon, in completion order
    pub fn serviced(&self) -> &[ServicedCustomer] {
        &self.serviced
    }

    /// Number of customers that joined the queue
    pub fn arrivals(&self) -> usize {
        self.arrivals
    }

    /// Customers still queued or in service at the horizon
    pub fn unserved(&self) -> usize {
        self.unserved
    }
}

/// Server state carried across ticks
#[derive(Debug)]
enum Server {
    Idle,
    Busy {
        customer: InServiceCustomer,
        remaining: u64,
    },
}

/// Single-server queue simulated over a fixed horizon
#[derive(Debug, Clone, Copy)]
pub struct QueueEngine {
    horizon: Ticks,
}

impl QueueEngine {
    pub fn new(horizon: Ticks) -> Self {
        Self { horizon }
    }

    pub fn horizon(&self) -> Ticks {
        self.horizon
    }

    /// Generate both schedules from `config` and run one trial.
    ///
    /// Service durations are generated up to a cumulative length equal to the
    /// horizon. Every service occupies at least one tick, so the schedule
    /// cannot run dry before the horizon.
    pub fn run_trial(
        &self,
        config: &SimulationConfig,
        mut provider: impl RandomProvider,
    ) -> Result<TrialOutcome, SimError> {
        let services = config
            .service_times()?
            .durations(&mut provider, self.horizon);
        let arrivals = config.arrivals()?.schedule(&mut provider, self.horizon);
        self.simulate(arrivals, services)
    }

    /// Run one trial over pre-generated schedules.
    ///
    /// `arrivals` must be non-decreasing. Running out of arrivals simply stops
    /// new customers from entering; running out of service durations while a
    /// customer is waiting to be dispatched is an error.
    pub fn simulate(
        &self,
        arrivals: impl IntoIterator<Item = Ticks>,
        services: impl IntoIterator<Item = Ticks>,
    ) -> Result<TrialOutcome, SimError> {
        let mut arrivals = arrivals.into_iter();
        let mut services = services.into_iter();

        let horizon = self.horizon.as_ticks();
        let mut samples = Vec::with_capacity(usize::try_from(horizon).unwrap_or(0));
        let mut serviced = Vec::new();
        let mut queue: VecDeque<WaitingCustomer> = VecDeque::new();
        let mut server = Server::Idle;
        let mut arrived = 0usize;
        let mut next_arrival = arrivals.next();

        for raw in 0..horizon {
            let now = Ticks::from_ticks(raw);

            // Arrivals. `<=` only differs from `==` for out-of-order input.
            while let Some(at) = next_arrival.filter(|at| *at <= now) {
                trace!(tick = raw, scheduled = at.as_ticks(), "Customer arrived");
                queue.push_back(WaitingCustomer::arrive(now));
                arrived += 1;
                next_arrival = arrivals.next();
            }

            // Progress or completion.
            server = match server {
                Server::Busy {
                    customer,
                    remaining,
                } if remaining > 0 => Server::Busy {
                    customer,
                    remaining: remaining - 1,
                },
                Server::Busy { customer, .. } => {
                    let done = customer.complete(now);
                    trace!(
                        tick = raw,
                        arrival = done.arrival().as_ticks(),
                        "Customer serviced"
                    );
                    serviced.push(done);
                    Server::Idle
                }
                Server::Idle => Server::Idle,
            };

            // Dispatch.
            if matches!(server, Server::Idle) {
                if let Some(next) = queue.pop_front() {
                    let duration = services
                        .next()
                        .ok_or(SimError::ServiceScheduleExhausted { tick: now })?;
                    server = Server::Busy {
                        customer: next.start_service(now),
                        remaining: duration.as_ticks(),
                    };
                }
            }

            // Sampling.
            let server_busy = matches!(server, Server::Busy { .. });
            let in_queue = queue.len() as u32;
            samples.push(OccupancySample {
                in_system: in_queue + u32::from(server_busy),
                in_queue,
                server_busy,
            });
        }

        let unserved = queue.len() + usize::from(matches!(server, Server::Busy { .. }));
        debug!(
            horizon = horizon,
            arrivals = arrived,
            serviced = serviced.len(),
            unserved = unserved,
            "Trial finished"
        );

        Ok(TrialOutcome {
            horizon: self.horizon,
            samples,
            serviced,
            arrivals: arrived,
            unserved,
        })
    }
}
