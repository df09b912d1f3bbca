//! Creator Payout Engine - Core
//!
//! Fee and payout calculation engine for a fan-subscription content platform.
//!
//! # Architecture
//!
//! - **core**: Settlement calendar helpers and currency formatting
//! - **fees**: Fee breakdown calculators and transfer validation
//! - **models**: Domain types (ScheduledPayout, PaymentHistory)
//! - **store**: Repository traits with in-memory implementations
//!
//! # Critical Invariants
//!
//! 1. All money values are i64 (yen, no fractional sub-units)
//! 2. Percentage fees truncate per component, never on a running sum
//! 3. Calculators are pure functions; only the stores mutate state

// Module declarations
pub mod core;
pub mod fees;
pub mod models;
pub mod store;

// Re-exports for convenience
pub use crate::core::calendar::{
    add_business_days, is_business_day, month_add, roll_forward_weekend, transfer_date_for,
};
pub use crate::core::money::format_jpy;
pub use fees::{
    calculate_creator_payout, calculate_early_transfer, calculate_purchase, calculate_transfer,
    validate_transfer_request, EarlyTransferBreakdown, FeeError, FeeRates, PayoutBreakdown,
    PurchaseBreakdown, TransferBreakdown, ValidationError, ValidationResult,
    TURNAROUND_BUSINESS_DAYS,
};
pub use models::{
    history::{HistoryRecord, PaymentHistory},
    payout::{PayoutError, PayoutStatus, ScheduledPayout},
    PaymentKind, PaymentStatus,
};
pub use store::{HistoryStore, InMemoryPayoutStore, PayoutStore, StoreError};
