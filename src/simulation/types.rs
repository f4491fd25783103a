//! Core types for the bank simulation
//!
//! Identifiers, the visit purpose tag, and the name limits shared by
//! customers and tellers.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::SimError;

/// Shortest name a customer or teller may carry
pub const MIN_NAME_LEN: usize = 3;

/// Longer names are truncated to this many characters
pub const MAX_NAME_LEN: usize = 64;

/// Yearly salary given to tellers when none is specified
pub const DEFAULT_SALARY: f64 = 9600.0;

static NEXT_CUSTOMER_ID: AtomicUsize = AtomicUsize::new(0);
static NEXT_TELLER_ID: AtomicUsize = AtomicUsize::new(0);

/// A unique identifier for customers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerId(pub usize);

impl CustomerId {
    /// Generate a fresh id, unique for the lifetime of the process
    pub fn next() -> Self {
        Self(NEXT_CUSTOMER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A unique identifier for tellers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TellerId(pub usize);

impl TellerId {
    /// Generate a fresh id, unique for the lifetime of the process
    pub fn next() -> Self {
        Self(NEXT_TELLER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Why a customer came to the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisitPurpose {
    Deposit,
    Withdrawal,
    Inquiry,
    #[default]
    Other,
}

impl VisitPurpose {
    pub const ALL: [VisitPurpose; 4] = [
        VisitPurpose::Deposit,
        VisitPurpose::Withdrawal,
        VisitPurpose::Inquiry,
        VisitPurpose::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisitPurpose::Deposit => "deposit",
            VisitPurpose::Withdrawal => "withdrawal",
            VisitPurpose::Inquiry => "inquiry",
            VisitPurpose::Other => "other",
        }
    }
}

impl fmt::Display for VisitPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validate a display name and truncate it to `MAX_NAME_LEN` characters
pub fn normalize_name(name: &str) -> Result<String, SimError> {
    let len = name.chars().count();
    if len < MIN_NAME_LEN {
        return Err(SimError::InvalidArgument(format!(
            "name '{}' is shorter than {} characters",
            name, MIN_NAME_LEN
        )));
    }
    Ok(name.chars().take(MAX_NAME_LEN).collect())
}
