//! Customer lifecycle
//!
//! A customer moves through three states, each a distinct type so that
//! timestamps can only be read once they have been set:
//! `WaitingCustomer` -> `InServiceCustomer` -> `ServicedCustomer`.

use crate::time::Ticks;
use serde::Serialize;

/// A customer waiting in the FIFO queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitingCustomer {
    arrival: Ticks,
}

impl WaitingCustomer {
    pub fn arrive(arrival: Ticks) -> Self {
        Self { arrival }
    }

    pub fn arrival(&self) -> Ticks {
        self.arrival
    }

    /// Hand the customer to the server at `tick`.
    pub fn start_service(self, tick: Ticks) -> InServiceCustomer {
        debug_assert!(tick >= self.arrival);
        InServiceCustomer {
            arrival: self.arrival,
            service_start: tick,
        }
    }
}

/// The customer currently held by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InServiceCustomer {
    arrival: Ticks,
    service_start: Ticks,
}

impl InServiceCustomer {
    pub fn arrival(&self) -> Ticks {
        self.arrival
    }

    pub fn service_start(&self) -> Ticks {
        self.service_start
    }

    /// Release the customer from the server at `tick`.
    pub fn complete(self, tick: Ticks) -> ServicedCustomer {
        debug_assert!(tick >= self.service_start);
        ServicedCustomer {
            arrival: self.arrival,
            service_start: self.service_start,
            service_end: tick,
        }
    }
}

/// A customer whose service finished within the horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServicedCustomer {
    arrival: Ticks,
    service_start: Ticks,
    service_end: Ticks,
}

impl ServicedCustomer {
    pub fn arrival(&self) -> Ticks {
        self.arrival
    }

    pub fn service_start(&self) -> Ticks {
        self.service_start
    }

    pub fn service_end(&self) -> Ticks {
        self.service_end
    }

    pub fn time_in_system(&self) -> Ticks {
        self.service_end - self.arrival
    }

    pub fn time_in_queue(&self) -> Ticks {
        self.service_start - self.arrival
    }
}
