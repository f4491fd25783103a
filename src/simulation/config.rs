//! Run configuration for the bank simulation

use super::error::SimError;

/// Everything needed to set up a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of customers visiting over the run
    pub customer_count: usize,
    /// Number of tellers, fixed for the run
    pub teller_count: usize,
    /// Number of ticks the arrivals are spread over
    pub arrival_ticks: usize,
    /// Ticks a teller stays busy after taking a customer
    pub service_ticks: u32,
    /// Wait time added to each waiting customer per tick
    pub wait_delta: u64,
    /// Seed for visit purpose generation
    pub seed: Option<u64>,
    /// Step-by-step logging; never changes the outcome
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl SimConfig {
    /// One arrival per tick, one-tick services, unit wait increments
    pub fn new(customer_count: usize, teller_count: usize) -> Self {
        Self {
            customer_count,
            teller_count,
            arrival_ticks: customer_count.max(1),
            service_ticks: 1,
            wait_delta: 1,
            seed: None,
            verbose: false,
        }
    }

    /// Build from raw command line counts, clamping non-positive values to 1
    pub fn clamped(customers: i64, tellers: i64) -> Self {
        let clamp = |n: i64| usize::try_from(n.max(1)).unwrap_or(usize::MAX);
        Self::new(clamp(customers), clamp(tellers))
    }

    pub fn with_arrival_ticks(mut self, arrival_ticks: usize) -> Self {
        self.arrival_ticks = arrival_ticks;
        self
    }

    pub fn with_service_ticks(mut self, service_ticks: u32) -> Self {
        self.service_ticks = service_ticks;
        self
    }

    pub fn with_wait_delta(mut self, wait_delta: u64) -> Self {
        self.wait_delta = wait_delta;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.teller_count == 0 {
            return Err(SimError::InvalidArgument(
                "teller count must be positive".to_string(),
            ));
        }
        if self.arrival_ticks == 0 {
            return Err(SimError::InvalidArgument(
                "arrival tick count must be positive".to_string(),
            ));
        }
        if self.service_ticks == 0 {
            return Err(SimError::InvalidArgument(
                "service tick count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
