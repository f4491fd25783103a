//! Arrival scheduling
//!
//! Splits a known customer population into per-tick batches. Early ticks are
//! filled to `ceil(N / ticks)` and the remainder lands in the last non-empty
//! bucket, so arrival timing is reproducible without any randomness.

use super::customer::SimCustomer;
use super::error::SimError;

/// Partition `items` into exactly `ticks` ordered buckets
///
/// Concatenating the buckets in order gives back `items` unchanged.
pub fn distribute<T>(items: Vec<T>, ticks: usize) -> Result<Vec<Vec<T>>, SimError> {
    if ticks == 0 {
        return Err(SimError::InvalidArgument(
            "bucket count must be positive".to_string(),
        ));
    }

    let per_bucket = items.len().div_ceil(ticks);
    let mut buckets: Vec<Vec<T>> = Vec::with_capacity(ticks);
    let mut chunk = Vec::with_capacity(per_bucket);

    for item in items {
        chunk.push(item);
        if chunk.len() == per_bucket {
            buckets.push(std::mem::replace(
                &mut chunk,
                Vec::with_capacity(per_bucket),
            ));
        }
    }
    if !chunk.is_empty() {
        buckets.push(chunk);
    }

    buckets.resize_with(ticks, Vec::new);
    Ok(buckets)
}

/// Precomputed arrival batches, one per tick
#[derive(Debug, Clone, Default)]
pub struct ArrivalPlan {
    batches: Vec<Vec<SimCustomer>>,
    total: usize,
}

impl ArrivalPlan {
    pub fn new(customers: Vec<SimCustomer>, ticks: usize) -> Result<Self, SimError> {
        let total = customers.len();
        Ok(Self {
            batches: distribute(customers, ticks)?,
            total,
        })
    }

    /// Number of ticks the plan spans
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Customers submitted across all batches
    pub fn total_customers(&self) -> usize {
        self.total
    }

    /// Sizes of each batch, including ones already delivered
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches.iter().map(Vec::len).collect()
    }

    /// Hand over the batch for `tick`, leaving it empty behind
    pub fn take_batch(&mut self, tick: usize) -> Vec<SimCustomer> {
        self.batches
            .get_mut(tick)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// True once every batch up to `tick` has been delivered
    pub fn is_exhausted(&self, tick: usize) -> bool {
        tick >= self.batches.len()
    }
}
