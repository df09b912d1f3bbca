//! Payment history log.
//!
//! Append-only record of payment activity, backing the creator dashboard and
//! audits. Records are queryable by kind, status, payout id, and date range.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{PaymentKind, PaymentStatus};

/// One payment history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique record identifier (UUID)
    id: String,

    /// Schedule entry this record refers to, if any
    payout_id: Option<String>,

    /// Payment category
    kind: PaymentKind,

    /// Status at the time of recording
    status: PaymentStatus,

    /// Amount involved (i64 yen)
    amount: i64,

    /// When the record was written
    recorded_at: NaiveDateTime,
}

impl HistoryRecord {
    /// Create a new record.
    ///
    /// # Panics
    /// Panics if amount < 0
    pub fn new(
        kind: PaymentKind,
        status: PaymentStatus,
        amount: i64,
        recorded_at: NaiveDateTime,
    ) -> Self {
        assert!(amount >= 0, "amount must be non-negative");

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            payout_id: None,
            kind,
            status,
            amount,
            recorded_at,
        }
    }

    /// Link the record to a schedule entry (builder pattern)
    pub fn with_payout_id(mut self, payout_id: String) -> Self {
        self.payout_id = Some(payout_id);
        self
    }

    /// Get record ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get linked payout ID, if any
    pub fn payout_id(&self) -> Option<&str> {
        self.payout_id.as_deref()
    }

    /// Get payment kind
    pub fn kind(&self) -> PaymentKind {
        self.kind
    }

    /// Get recorded status
    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Get amount (i64 yen)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Get recording timestamp
    pub fn recorded_at(&self) -> NaiveDateTime {
        self.recorded_at
    }
}

/// Append-only payment history.
///
/// Thin wrapper around `Vec<HistoryRecord>` with query helpers. Records keep
/// insertion order; there is no removal.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use payout_engine_core::{HistoryRecord, PaymentHistory, PaymentKind, PaymentStatus};
///
/// let mut history = PaymentHistory::new();
/// let at = NaiveDate::from_ymd_opt(2025, 1, 15)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
///
/// history.log(HistoryRecord::new(
///     PaymentKind::Purchase,
///     PaymentStatus::Paid,
///     1200,
///     at,
/// ));
///
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.of_kind(PaymentKind::Purchase).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaymentHistory {
    records: Vec<HistoryRecord>,
}

impl PaymentHistory {
    /// Create a new empty history
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record to the history
    pub fn log(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get all records, oldest first
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Get records of a specific kind
    pub fn of_kind(&self, kind: PaymentKind) -> Vec<&HistoryRecord> {
        self.records.iter().filter(|r| r.kind() == kind).collect()
    }

    /// Get records with a specific status
    pub fn with_status(&self, status: PaymentStatus) -> Vec<&HistoryRecord> {
        self.records
            .iter()
            .filter(|r| r.status() == status)
            .collect()
    }

    /// Get records written between `from` and `to`, both inclusive
    pub fn between(&self, from: NaiveDate, to: NaiveDate) -> Vec<&HistoryRecord> {
        self.records
            .iter()
            .filter(|r| {
                let day = r.recorded_at().date();
                day >= from && day <= to
            })
            .collect()
    }

    /// Get records linked to a specific payout
    pub fn for_payout(&self, payout_id: &str) -> Vec<&HistoryRecord> {
        self.records
            .iter()
            .filter(|r| r.payout_id() == Some(payout_id))
            .collect()
    }
}
