//! Bank Simulation Library
//!
//! A discrete-time queueing simulation of customers waiting for bank tellers.

pub mod simulation;
