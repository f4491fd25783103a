//! Error types for the bank simulation.

use thiserror::Error;

/// Contract violations raised by the simulation core.
///
/// None of these are recoverable within a run; the driver aborts on the
/// first one it sees.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Malformed input: a bad name, a zero count, or a served customer.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Removal attempted on an empty waiting line.
    #[error("The waiting line is empty")]
    EmptyQueue,

    /// Arrival or tick attempted while the bank is closed.
    #[error("Cannot visit a bank that is closed")]
    ClosedBank,

    /// Service attempted on a teller that is already busy.
    #[error("{0} is currently busy")]
    Busy(String),
}
