//! Main simulation bank that ties everything together
//!
//! The bank owns the tellers, the waiting line and the arrival plan, and
//! advances them one tick at a time. Nothing outside the bank mutates
//! them during a run.

use log::{debug, info};

use super::arrivals::ArrivalPlan;
use super::config::SimConfig;
use super::customer::{generate_customers, SimCustomer};
use super::error::SimError;
use super::stats::SimStats;
use super::teller::SimTeller;
use super::waiting_line::WaitingLine;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Index of the tick that just ran
    pub tick: usize,
    /// Customers admitted into the line
    pub admitted: usize,
    /// Customers handed to a teller
    pub served: usize,
    /// Customers still waiting afterwards
    pub waiting: usize,
}

/// Lifecycle of a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankState {
    /// Not yet opened
    Unopened,
    Open,
    /// Closed for the rest of the run
    Closed,
}

/// The main simulation bank
pub struct SimBank {
    /// All tellers, fixed for the run
    pub tellers: Vec<SimTeller>,

    /// Customers waiting to be served
    pub customers: WaitingLine,

    /// Customers that have been handed to a teller, in service order
    pub served: Vec<SimCustomer>,

    /// Whether the bank is accepting arrivals
    state: BankState,

    /// Customers submitted through `receive_customer` rather than the plan
    direct_receipts: usize,

    /// Current tick
    tick: usize,

    /// Wait added to each waiting customer per tick
    wait_delta: u64,

    arrivals: ArrivalPlan,

    stats: SimStats,
}

impl SimBank {
    fn new_internal(tellers: Vec<SimTeller>, wait_delta: u64) -> Self {
        let stats = SimStats::new(tellers.len());
        Self {
            tellers,
            customers: WaitingLine::new(),
            served: Vec::new(),
            state: BankState::Unopened,
            direct_receipts: 0,
            tick: 0,
            wait_delta,
            arrivals: ArrivalPlan::default(),
            stats,
        }
    }

    fn build_tellers(count: usize, service_ticks: u32) -> Result<Vec<SimTeller>, SimError> {
        if count == 0 {
            return Err(SimError::InvalidArgument(
                "teller count must be positive".to_string(),
            ));
        }
        (0..count)
            .map(|i| {
                SimTeller::new(&format!("{:03}", i))
                    .map(|teller| teller.with_service_ticks(service_ticks))
            })
            .collect()
    }

    /// Create a closed bank with `teller_count` tellers and no scheduled arrivals
    pub fn new(teller_count: usize) -> Result<Self, SimError> {
        Ok(Self::new_internal(Self::build_tellers(teller_count, 1)?, 1))
    }

    /// Create a closed bank with the configured tellers and generated population
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let tellers = Self::build_tellers(config.teller_count, config.service_ticks)?;
        let mut bank = Self::new_internal(tellers, config.wait_delta);
        let population = generate_customers(config.customer_count, config.seed)?;
        bank.schedule_arrivals(population, config.arrival_ticks)?;
        Ok(bank)
    }

    /// Spread `customers` over `ticks` ticks, replacing any previous plan
    pub fn schedule_arrivals(
        &mut self,
        customers: Vec<SimCustomer>,
        ticks: usize,
    ) -> Result<(), SimError> {
        self.arrivals = ArrivalPlan::new(customers, ticks)?;
        self.stats.total_customers = self.arrivals.total_customers() + self.direct_receipts;
        debug!("Arrival plan: {:?}", self.arrivals.batch_sizes());
        Ok(())
    }

    pub fn state(&self) -> BankState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == BankState::Open
    }

    /// Open the bank for business
    ///
    /// Has no effect once the bank has been closed.
    pub fn open(&mut self) {
        if self.state == BankState::Unopened {
            self.state = BankState::Open;
        }
    }

    /// Stop accepting arrivals for the rest of the run
    ///
    /// Leaves the waiting line and tellers as they are.
    pub fn close(&mut self) {
        self.state = BankState::Closed;
    }

    pub fn current_tick(&self) -> usize {
        self.tick
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Admit a customer into the waiting line
    ///
    /// The customer counts towards the submitted total used for the average wait.
    pub fn receive_customer(&mut self, customer: SimCustomer) -> Result<(), SimError> {
        self.admit(customer)?;
        self.direct_receipts += 1;
        self.stats.total_customers += 1;
        Ok(())
    }

    /// Put a customer in line; planned arrivals are already counted
    fn admit(&mut self, customer: SimCustomer) -> Result<(), SimError> {
        if !self.is_open() {
            return Err(SimError::ClosedBank);
        }
        self.customers.insert(customer)
    }

    /// Free every teller whose service has run its course
    fn update_tellers(&mut self) {
        for teller in &mut self.tellers {
            if teller.advance() {
                debug!("{} is available again", teller);
            }
        }
    }

    /// Hand waiting customers to available tellers in FIFO order
    fn assign_tellers(&mut self) -> Result<usize, SimError> {
        let available: Vec<usize> = self
            .tellers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_available())
            .map(|(i, _)| i)
            .collect();

        let mut served = 0;
        for index in available {
            if self.customers.is_empty() {
                break;
            }
            let mut customer = self.customers.remove_next()?;
            let teller = &mut self.tellers[index];
            teller.serve(&mut customer)?;
            debug!("{} is serving {}", teller, customer);

            self.stats
                .record_service(customer.waited_ticks(), customer.visit_purpose);
            self.served.push(customer);
            served += 1;
        }
        Ok(served)
    }

    /// Main simulation tick
    pub fn tick(&mut self) -> Result<TickOutcome, SimError> {
        if !self.is_open() {
            return Err(SimError::ClosedBank);
        }

        // Everyone still in line waited through this tick
        self.customers.accrue_wait(self.wait_delta);

        self.update_tellers();

        let visitors = self.arrivals.take_batch(self.tick);
        let admitted = visitors.len();
        for visitor in visitors {
            self.admit(visitor)?;
        }

        let served = self.assign_tellers()?;

        let outcome = TickOutcome {
            tick: self.tick,
            admitted,
            served,
            waiting: self.customers.len(),
        };
        info!(
            "[tick {:04}] arrivals: {}, served: {}, left to serve: {}",
            outcome.tick, outcome.admitted, outcome.served, outcome.waiting
        );

        self.tick += 1;
        self.stats.ticks_elapsed = self.tick;

        if self.arrivals.is_exhausted(self.tick) && self.customers.is_empty() {
            info!("All arrivals delivered and served, closing after {} ticks", self.tick);
            self.close();
        }

        Ok(outcome)
    }

    /// Open the bank and tick until it closes
    pub fn run(&mut self) -> Result<&SimStats, SimError> {
        self.open();
        while self.is_open() {
            self.tick()?;
        }
        Ok(&self.stats)
    }

    /// Print a summary of the bank state
    pub fn print_summary(&self) {
        println!("=== Bank Simulation Summary ===");
        println!("Tick: {}", self.tick);
        println!("State: {:?}", self.state);
        println!("Tellers: {}", self.tellers.len());
        println!(
            "Arrival plan: {} ticks, {} customers",
            self.arrivals.len(),
            self.arrivals.total_customers()
        );

        println!("--- Tellers ---");
        for teller in &self.tellers {
            match teller.serving {
                Some(customer) => println!(
                    "  {}: serving customer {} ({} ticks left)",
                    teller, customer.0, teller.remaining
                ),
                None if teller.is_available() => println!("  {}: available", teller),
                None => println!("  {}: unavailable", teller),
            }
        }

        print!("{}", self.customers);
    }
}
