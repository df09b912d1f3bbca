//! Fee calculation and transfer validation.
//!
//! Every settlement path produces an immutable breakdown struct from a gross
//! amount:
//! - Purchase: what a user pays for a creator-priced item
//! - Creator payout: platform fee deductions on gross sales
//! - Normal transfer: payout deductions plus the fixed bank fee, wired on
//!   the regular cycle
//! - Early transfer: normal deductions plus the expedited surcharge, wired
//!   three business days out
//!
//! # Critical Invariants
//!
//! 1. Percentage components truncate independently; totals are sums of
//!    already-truncated parts
//! 2. Calculators never mutate state and never touch the clock; dates come
//!    in as arguments

use thiserror::Error;

pub mod payout;
pub mod purchase;
pub mod rates;
pub mod validation;

// Re-export public API
pub use payout::{
    calculate_creator_payout, calculate_early_transfer, calculate_transfer,
    EarlyTransferBreakdown, PayoutBreakdown, TransferBreakdown, TURNAROUND_BUSINESS_DAYS,
};
pub use purchase::{calculate_purchase, PurchaseBreakdown};
pub use rates::FeeRates;
pub use validation::{validate_transfer_request, ValidationError, ValidationResult};

/// Errors produced by the fee calculators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    #[error("amount must be non-negative, got {amount}")]
    NegativeAmount { amount: i64 },
}
