//! Standalone bank queueing simulation
//!
//! This module contains the simulation core: the waiting line, the arrival
//! scheduler, tellers, customers, and the tick loop that drives them. It has
//! no dependency on the command line driver and can be exercised directly
//! from tests.

mod arrivals;
mod bank;
mod config;
mod customer;
mod error;
mod stats;
mod teller;
mod types;
mod waiting_line;

pub use arrivals::{distribute, ArrivalPlan};
pub use bank::{BankState, SimBank, TickOutcome};
pub use config::SimConfig;
pub use customer::{generate_customers, SimCustomer};
pub use error::SimError;
pub use stats::SimStats;
pub use teller::SimTeller;
pub use types::{
    normalize_name, CustomerId, TellerId, VisitPurpose, DEFAULT_SALARY, MAX_NAME_LEN,
    MIN_NAME_LEN,
};
pub use waiting_line::WaitingLine;
