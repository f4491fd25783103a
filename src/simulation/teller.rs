//! Teller logic for the bank simulation
//!
//! A teller serves one customer at a time and stays busy for a fixed
//! number of ticks before becoming available again.

use std::fmt;

use super::customer::SimCustomer;
use super::error::SimError;
use super::types::{normalize_name, CustomerId, TellerId, DEFAULT_SALARY};

/// A teller in the simulation
#[derive(Debug, Clone)]
pub struct SimTeller {
    pub id: TellerId,
    pub name: String,
    pub salary: f64,
    available: bool,
    /// The customer currently being served (if any)
    pub serving: Option<CustomerId>,
    /// Ticks each service keeps the teller busy
    pub service_ticks: u32,
    /// Ticks left in the current service
    pub remaining: u32,
}

impl SimTeller {
    pub fn new(name: &str) -> Result<Self, SimError> {
        Ok(Self {
            id: TellerId::next(),
            name: normalize_name(name)?,
            salary: DEFAULT_SALARY,
            available: true,
            serving: None,
            service_ticks: 1,
            remaining: 0,
        })
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = salary;
        self
    }

    pub fn with_service_ticks(mut self, service_ticks: u32) -> Self {
        self.service_ticks = service_ticks;
        self
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Serve a customer
    ///
    /// Fails with `Busy` if the teller is not available, leaving the customer
    /// untouched. On success the teller becomes unavailable and the customer
    /// is marked served.
    pub fn serve(&mut self, customer: &mut SimCustomer) -> Result<(), SimError> {
        if !self.is_available() {
            return Err(SimError::Busy(self.to_string()));
        }

        self.set_available(false);
        self.serving = Some(customer.id);
        self.remaining = self.service_ticks;
        customer.mark_served();
        Ok(())
    }

    /// Advance the current service by one tick
    ///
    /// Returns true if the teller was freed by this call.
    pub fn advance(&mut self) -> bool {
        if self.serving.is_none() {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.release();
            true
        } else {
            false
        }
    }

    /// End the current service and make the teller available
    pub fn release(&mut self) {
        self.serving = None;
        self.remaining = 0;
        self.set_available(true);
    }
}

impl fmt::Display for SimTeller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Teller {} '{}'", self.id.0, self.name)
    }
}
