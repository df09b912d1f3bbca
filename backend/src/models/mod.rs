//! Domain models for scheduled payouts and payment history.

use serde::{Deserialize, Serialize};

pub mod history;
pub mod payout;

// Re-exports
pub use history::{HistoryRecord, PaymentHistory};
pub use payout::{PayoutError, PayoutStatus, ScheduledPayout};

/// Category tag carried by schedule entries and history records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    /// One-off content purchase by a user
    Purchase,

    /// Recurring subscription charge
    Subscription,

    /// Creator payout on the regular settlement cycle
    Transfer,

    /// Expedited creator payout
    EarlyTransfer,
}

/// Flat status tag used by history records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Waiting for the settlement date
    Pending,

    /// Funds moved
    Paid,
}
