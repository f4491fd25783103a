//! Customers visiting the bank
//!
//! Standalone value type tracking service state and accumulated wait time.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::error::SimError;
use super::types::{normalize_name, CustomerId, VisitPurpose};

/// A customer in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimCustomer {
    pub id: CustomerId,
    pub name: String,
    pub visit_purpose: VisitPurpose,
    served: bool,
    waited_ticks: u64,
}

impl SimCustomer {
    /// Create a customer visiting for an unspecified purpose
    pub fn new(name: &str) -> Result<Self, SimError> {
        Self::with_purpose(name, VisitPurpose::Other)
    }

    pub fn with_purpose(name: &str, visit_purpose: VisitPurpose) -> Result<Self, SimError> {
        Ok(Self {
            id: CustomerId::next(),
            name: normalize_name(name)?,
            visit_purpose,
            served: false,
            waited_ticks: 0,
        })
    }

    pub fn was_served(&self) -> bool {
        self.served
    }

    /// Total ticks spent in the waiting line
    pub fn waited_ticks(&self) -> u64 {
        self.waited_ticks
    }

    /// Mark this customer as served. One way only.
    pub(crate) fn mark_served(&mut self) {
        self.served = true;
    }

    /// Add `delta` ticks to the wait counter, saturating at `u64::MAX`
    ///
    /// Served customers stop accruing.
    pub fn accrue_wait(&mut self, delta: u64) {
        if !self.served {
            self.waited_ticks = self.waited_ticks.saturating_add(delta);
        }
    }
}

impl fmt::Display for SimCustomer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer {} '{}' ({}, served={}, waited={})",
            self.id.0, self.name, self.visit_purpose, self.served, self.waited_ticks
        )
    }
}

/// Build the customer population for a run
///
/// Customers are named by zero-padded index. Purposes are drawn at random,
/// reproducibly when a seed is given.
pub fn generate_customers(count: usize, seed: Option<u64>) -> Result<Vec<SimCustomer>, SimError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    (0..count)
        .map(|n| {
            let purpose = VisitPurpose::ALL
                .choose(&mut rng)
                .copied()
                .unwrap_or_default();
            SimCustomer::with_purpose(&format!("{:03}", n), purpose)
        })
        .collect()
}
