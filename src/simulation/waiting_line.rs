//! FIFO waiting line for the bank

use std::collections::VecDeque;
use std::fmt;

use super::customer::SimCustomer;
use super::error::SimError;

/// Customers waiting to be served, in arrival order
#[derive(Debug, Clone, Default)]
pub struct WaitingLine {
    customers: VecDeque<SimCustomer>,
}

impl WaitingLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a customer to the tail of the line
    pub fn insert(&mut self, customer: SimCustomer) -> Result<(), SimError> {
        if customer.was_served() {
            return Err(SimError::InvalidArgument(format!(
                "{} has already been served",
                customer
            )));
        }
        self.customers.push_back(customer);
        Ok(())
    }

    /// Remove and return the customer at the head of the line
    pub fn remove_next(&mut self) -> Result<SimCustomer, SimError> {
        self.customers.pop_front().ok_or(SimError::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Iterate over the waiting customers in insertion order
    ///
    /// The borrow keeps the line frozen while the iterator is alive; each call
    /// starts a fresh traversal from the head.
    pub fn iter(&self) -> impl Iterator<Item = &SimCustomer> + '_ {
        self.customers.iter()
    }

    /// Add `delta` ticks to every waiting customer
    pub(crate) fn accrue_wait(&mut self, delta: u64) {
        for customer in self.customers.iter_mut() {
            customer.accrue_wait(delta);
        }
    }
}

impl<'a> IntoIterator for &'a WaitingLine {
    type Item = &'a SimCustomer;
    type IntoIter = std::collections::vec_deque::Iter<'a, SimCustomer>;

    fn into_iter(self) -> Self::IntoIter {
        self.customers.iter()
    }
}

impl fmt::Display for WaitingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Waiting line ({}):", self.customers.len())?;
        for customer in &self.customers {
            writeln!(f, "  {}", customer)?;
        }
        Ok(())
    }
}
