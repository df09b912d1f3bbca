//! Repository seams for the payout schedule and payment history.
//!
//! The engine keeps state in memory. These traits are the seam where a real
//! datastore can be slotted in; the in-memory implementations back tests and
//! single-process deployments. Nothing here is synchronized, so callers own
//! any concurrency discipline.

mod memory;

pub use memory::InMemoryPayoutStore;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::history::HistoryRecord;
use crate::models::payout::{PayoutError, ScheduledPayout};

/// Errors from schedule store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("payout {0} already exists")]
    DuplicateId(String),

    #[error("payout {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Payout(#[from] PayoutError),
}

/// Repository of scheduled payouts keyed by id.
pub trait PayoutStore {
    /// Add a new scheduled payout. Fails on a duplicate id.
    fn insert(&mut self, payout: ScheduledPayout) -> Result<(), StoreError>;

    /// Look up a payout by id.
    fn get(&self, id: &str) -> Option<&ScheduledPayout>;

    /// Mark a payout paid at the given time.
    fn mark_paid(&mut self, id: &str, paid_at: NaiveDateTime) -> Result<(), StoreError>;

    /// All payouts still pending.
    fn pending(&self) -> Vec<&ScheduledPayout>;

    /// Sum of pending amounts (yen).
    fn total_pending(&self) -> i64;

    /// Number of payouts tracked.
    fn len(&self) -> usize;

    /// Check if the store is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Append-only sink of payment history records.
pub trait HistoryStore {
    /// Append a record.
    fn record(&mut self, record: HistoryRecord);

    /// All records, oldest first.
    fn records(&self) -> &[HistoryRecord];
}
