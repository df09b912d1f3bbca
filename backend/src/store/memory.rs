//! In-memory store implementations.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::history::{HistoryRecord, PaymentHistory};
use crate::models::payout::ScheduledPayout;

use super::{HistoryStore, PayoutStore, StoreError};

/// In-memory payout schedule, keyed by payout id.
///
/// Test stub and single-process default.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use payout_engine_core::{InMemoryPayoutStore, PayoutStore, ScheduledPayout};
///
/// let mut store = InMemoryPayoutStore::new();
/// let payout = ScheduledPayout::new(
///     83_170,
///     NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 15)
///         .unwrap()
///         .and_hms_opt(9, 0, 0)
///         .unwrap(),
/// );
/// let id = payout.id().to_string();
///
/// store.insert(payout).unwrap();
/// assert_eq!(store.total_pending(), 83_170);
/// assert!(store.get(&id).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryPayoutStore {
    payouts: HashMap<String, ScheduledPayout>,
}

impl InMemoryPayoutStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PayoutStore for InMemoryPayoutStore {
    fn insert(&mut self, payout: ScheduledPayout) -> Result<(), StoreError> {
        let id = payout.id().to_string();
        if self.payouts.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }

        debug!("scheduled payout {} due {}", id, payout.due_date());
        self.payouts.insert(id, payout);
        Ok(())
    }

    fn get(&self, id: &str) -> Option<&ScheduledPayout> {
        self.payouts.get(id)
    }

    fn mark_paid(&mut self, id: &str, paid_at: NaiveDateTime) -> Result<(), StoreError> {
        let payout = self
            .payouts
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        payout.mark_paid(paid_at)?;

        debug!("payout {} paid at {}", id, paid_at);
        Ok(())
    }

    fn pending(&self) -> Vec<&ScheduledPayout> {
        self.payouts.values().filter(|p| p.is_pending()).collect()
    }

    fn total_pending(&self) -> i64 {
        self.payouts
            .values()
            .filter(|p| p.is_pending())
            .map(|p| p.amount())
            .sum()
    }

    fn len(&self) -> usize {
        self.payouts.len()
    }
}

impl HistoryStore for PaymentHistory {
    fn record(&mut self, record: HistoryRecord) {
        self.log(record);
    }

    fn records(&self) -> &[HistoryRecord] {
        PaymentHistory::records(self)
    }
}
