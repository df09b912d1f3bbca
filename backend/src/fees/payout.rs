//! Creator payout and transfer calculators.
//!
//! Three settlement paths share the platform fee deduction:
//! - Plain payout: platform fee and the tax on that fee
//! - Normal transfer: payout deductions plus the fixed bank transfer fee,
//!   wired on the regular cycle (the 5th, two months after the sale month)
//! - Early transfer: normal deductions plus the expedited surcharge and its
//!   tax, wired three business days after the request
//!
//! Each percentage component is truncated independently before summing.
//! Net amounts can go negative for requests below the minimum transfer
//! amount, where the fixed bank fee dominates;
//! [`validate_transfer_request`](super::validate_transfer_request) screens
//! requests before money moves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::calendar::{add_business_days, transfer_date_for};

use super::rates::FeeRates;
use super::FeeError;

/// Business days between an expedited request and the wire.
pub const TURNAROUND_BUSINESS_DAYS: usize = 3;

/// Deductions for a plain creator payout.
///
/// # Example
/// ```
/// use payout_engine_core::{calculate_creator_payout, FeeRates};
///
/// let breakdown = calculate_creator_payout(100_000, &FeeRates::default()).unwrap();
/// assert_eq!(breakdown.platform_fee, 15_000);
/// assert_eq!(breakdown.fee_tax, 1_500);
/// assert_eq!(breakdown.net_amount, 83_500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutBreakdown {
    /// Gross sales amount (yen)
    pub gross_amount: i64,

    /// Platform share withheld (yen)
    pub platform_fee: i64,

    /// Consumption tax on the platform fee (yen)
    pub fee_tax: i64,

    /// Amount owed to the creator (yen)
    pub net_amount: i64,
}

impl PayoutBreakdown {
    /// Total withheld from the creator.
    pub fn total_deductions(&self) -> i64 {
        self.platform_fee + self.fee_tax
    }
}

/// Deductions and settlement date for a transfer on the regular cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBreakdown {
    /// Gross sales amount (yen)
    pub gross_amount: i64,

    /// Platform share withheld (yen)
    pub platform_fee: i64,

    /// Consumption tax on the platform fee (yen)
    pub fee_tax: i64,

    /// Fixed bank transfer fee (yen)
    pub transfer_fee: i64,

    /// Amount wired to the creator (yen)
    pub net_amount: i64,

    /// Date the funds are wired
    pub scheduled_date: NaiveDate,
}

impl TransferBreakdown {
    /// Total withheld from the creator.
    pub fn total_deductions(&self) -> i64 {
        self.platform_fee + self.fee_tax + self.transfer_fee
    }
}

/// Deductions and expected date for an expedited transfer.
///
/// Carries two fee pairs: the platform fee with its tax, and the expedited
/// surcharge with its tax, plus the fixed bank fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarlyTransferBreakdown {
    /// Amount the creator asked to withdraw (yen)
    pub requested_amount: i64,

    /// Platform share withheld (yen)
    pub platform_fee: i64,

    /// Consumption tax on the platform fee (yen)
    pub platform_fee_tax: i64,

    /// Expedited payout surcharge (yen)
    pub early_payment_fee: i64,

    /// Consumption tax on the surcharge (yen)
    pub early_payment_fee_tax: i64,

    /// Fixed bank transfer fee (yen)
    pub transfer_fee: i64,

    /// Amount wired to the creator (yen)
    pub net_amount: i64,

    /// Expected wire date, three business days after the request
    pub expected_date: NaiveDate,
}

impl EarlyTransferBreakdown {
    /// Total withheld from the creator across all five deductions.
    pub fn total_deductions(&self) -> i64 {
        self.platform_fee
            + self.platform_fee_tax
            + self.early_payment_fee
            + self.early_payment_fee_tax
            + self.transfer_fee
    }
}

/// Calculate the platform deductions on a creator's gross sales.
///
/// # Arguments
/// * `gross_amount` - Gross sales in yen (must be non-negative)
/// * `rates` - Platform fee schedule
pub fn calculate_creator_payout(
    gross_amount: i64,
    rates: &FeeRates,
) -> Result<PayoutBreakdown, FeeError> {
    if gross_amount < 0 {
        return Err(FeeError::NegativeAmount {
            amount: gross_amount,
        });
    }

    let platform_fee = rates.platform_fee(gross_amount);
    let fee_tax = rates.consumption_tax(platform_fee);

    Ok(PayoutBreakdown {
        gross_amount,
        platform_fee,
        fee_tax,
        net_amount: gross_amount - platform_fee - fee_tax,
    })
}

/// Calculate a transfer on the regular settlement cycle.
///
/// Deductions are the plain payout deductions plus the fixed bank fee. The
/// scheduled date follows the month-end cutoff rule: the 5th of the month
/// two months after `sale_date`, rolled forward off a weekend.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use payout_engine_core::{calculate_transfer, FeeRates};
///
/// let sale = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let breakdown = calculate_transfer(100_000, sale, &FeeRates::default()).unwrap();
/// assert_eq!(breakdown.net_amount, 83_170);
/// assert_eq!(
///     breakdown.scheduled_date,
///     NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
/// );
/// ```
pub fn calculate_transfer(
    gross_amount: i64,
    sale_date: NaiveDate,
    rates: &FeeRates,
) -> Result<TransferBreakdown, FeeError> {
    if gross_amount < 0 {
        return Err(FeeError::NegativeAmount {
            amount: gross_amount,
        });
    }

    let platform_fee = rates.platform_fee(gross_amount);
    let fee_tax = rates.consumption_tax(platform_fee);
    let transfer_fee = rates.transfer_fee;

    Ok(TransferBreakdown {
        gross_amount,
        platform_fee,
        fee_tax,
        transfer_fee,
        net_amount: gross_amount - platform_fee - fee_tax - transfer_fee,
        scheduled_date: transfer_date_for(sale_date),
    })
}

/// Calculate an expedited transfer.
///
/// Deductions are applied in order: platform fee, tax on the platform fee,
/// expedited surcharge, tax on the surcharge, fixed bank fee. The expected
/// wire date is [`TURNAROUND_BUSINESS_DAYS`] business days after
/// `requested_on`.
pub fn calculate_early_transfer(
    requested_amount: i64,
    requested_on: NaiveDate,
    rates: &FeeRates,
) -> Result<EarlyTransferBreakdown, FeeError> {
    if requested_amount < 0 {
        return Err(FeeError::NegativeAmount {
            amount: requested_amount,
        });
    }

    let platform_fee = rates.platform_fee(requested_amount);
    let platform_fee_tax = rates.consumption_tax(platform_fee);
    let early_payment_fee = rates.early_payment_fee(requested_amount);
    let early_payment_fee_tax = rates.consumption_tax(early_payment_fee);
    let transfer_fee = rates.transfer_fee;

    let net_amount = requested_amount
        - platform_fee
        - platform_fee_tax
        - early_payment_fee
        - early_payment_fee_tax
        - transfer_fee;

    Ok(EarlyTransferBreakdown {
        requested_amount,
        platform_fee,
        platform_fee_tax,
        early_payment_fee,
        early_payment_fee_tax,
        transfer_fee,
        net_amount,
        expected_date: add_business_days(requested_on, TURNAROUND_BUSINESS_DAYS),
    })
}
