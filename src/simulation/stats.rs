//! Run statistics for the bank simulation

use std::collections::HashMap;
use std::fmt;

use super::types::VisitPurpose;

/// Aggregated results of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimStats {
    pub total_tellers: usize,
    pub total_customers: usize,
    pub customers_served: usize,
    pub ticks_elapsed: usize,
    /// Sum of each served customer's wait at the moment of service
    pub total_wait: u64,
    pub served_by_purpose: HashMap<VisitPurpose, usize>,
}

impl SimStats {
    pub fn new(total_tellers: usize) -> Self {
        Self {
            total_tellers,
            ..Default::default()
        }
    }

    /// Record a customer leaving the line for a teller
    pub fn record_service(&mut self, waited_ticks: u64, purpose: VisitPurpose) {
        self.customers_served += 1;
        self.total_wait = self.total_wait.saturating_add(waited_ticks);
        *self.served_by_purpose.entry(purpose).or_insert(0) += 1;
    }

    /// Average wait per submitted customer
    ///
    /// Undefined (None) when no customers were submitted.
    pub fn average_wait(&self) -> Option<f64> {
        if self.total_customers == 0 {
            None
        } else {
            Some(self.total_wait as f64 / self.total_customers as f64)
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(64);
        writeln!(f, "{}", rule)?;
        writeln!(f, "[stats]")?;
        writeln!(f, "Total tellers: {}", self.total_tellers)?;
        writeln!(f, "Total customers: {}", self.total_customers)?;
        writeln!(f, "Customers served: {}", self.customers_served)?;
        writeln!(f, "Ticks elapsed: {}", self.ticks_elapsed)?;
        match self.average_wait() {
            Some(avg) => writeln!(f, "Average wait time: {:.3}", avg)?,
            None => writeln!(f, "Average wait time: n/a")?,
        }
        for purpose in VisitPurpose::ALL {
            let count = self.served_by_purpose.get(&purpose).copied().unwrap_or(0);
            writeln!(f, "  Served for {}: {}", purpose, count)?;
        }
        write!(f, "{}", rule)
    }
}
