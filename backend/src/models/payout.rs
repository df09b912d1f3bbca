//! Scheduled payout model.
//!
//! Represents one payout owed to a creator. Each entry has:
//! - Amount (i64 yen)
//! - Due date and kind tag
//! - Status (Pending, Paid with timestamp)
//! - Creation timestamp
//!
//! CRITICAL: All money values are i64 (yen)

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PaymentKind;

/// Payout lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoutStatus {
    /// Waiting for the settlement date
    Pending,

    /// Funds wired
    Paid {
        /// When the wire went out
        paid_at: NaiveDateTime,
    },
}

/// Errors that can occur during payout operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayoutError {
    #[error("payout already paid")]
    AlreadyPaid,
}

/// A payout scheduled for a creator.
///
/// Entries default to [`PaymentKind::Transfer`]; use
/// [`with_kind`](Self::with_kind) for expedited payouts.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use payout_engine_core::{PaymentKind, ScheduledPayout};
///
/// let due = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
/// let created = NaiveDate::from_ymd_opt(2025, 1, 15)
///     .unwrap()
///     .and_hms_opt(9, 30, 0)
///     .unwrap();
///
/// let payout = ScheduledPayout::new(83_170, due, created)
///     .with_kind(PaymentKind::Transfer);
/// assert!(payout.is_pending());
/// assert_eq!(payout.amount(), 83_170);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledPayout {
    /// Unique payout identifier (UUID)
    id: String,

    /// Net amount to wire (i64 yen)
    amount: i64,

    /// Date the wire is due
    due_date: NaiveDate,

    /// Settlement path this payout takes
    kind: PaymentKind,

    /// Current status
    status: PayoutStatus,

    /// When the payout was scheduled
    created_at: NaiveDateTime,
}

impl ScheduledPayout {
    /// Create a new pending payout.
    ///
    /// # Arguments
    /// * `amount` - Net amount in yen (must be positive)
    /// * `due_date` - Date the wire is due
    /// * `created_at` - When the payout was scheduled
    ///
    /// # Panics
    /// Panics if amount <= 0
    pub fn new(amount: i64, due_date: NaiveDate, created_at: NaiveDateTime) -> Self {
        assert!(amount > 0, "amount must be positive");

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            amount,
            due_date,
            kind: PaymentKind::Transfer,
            status: PayoutStatus::Pending,
            created_at,
        }
    }

    /// Set the payment kind (builder pattern)
    pub fn with_kind(mut self, kind: PaymentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Get payout ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get net amount (i64 yen)
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Get due date
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Get payment kind
    pub fn kind(&self) -> PaymentKind {
        self.kind
    }

    /// Get current status
    pub fn status(&self) -> &PayoutStatus {
        &self.status
    }

    /// Get creation timestamp
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Get payment timestamp, if paid
    pub fn paid_at(&self) -> Option<NaiveDateTime> {
        match self.status {
            PayoutStatus::Paid { paid_at } => Some(paid_at),
            PayoutStatus::Pending => None,
        }
    }

    /// Check if payout is pending
    pub fn is_pending(&self) -> bool {
        matches!(self.status, PayoutStatus::Pending)
    }

    /// Check if payout is paid
    pub fn is_paid(&self) -> bool {
        matches!(self.status, PayoutStatus::Paid { .. })
    }

    /// Mark the payout paid.
    ///
    /// # Arguments
    /// * `paid_at` - When the wire went out
    ///
    /// # Returns
    /// - Ok(()) on the first call
    /// - Err([`PayoutError::AlreadyPaid`]) if already paid
    pub fn mark_paid(&mut self, paid_at: NaiveDateTime) -> Result<(), PayoutError> {
        match self.status {
            PayoutStatus::Pending => {
                self.status = PayoutStatus::Paid { paid_at };
                Ok(())
            }
            PayoutStatus::Paid { .. } => Err(PayoutError::AlreadyPaid),
        }
    }
}
