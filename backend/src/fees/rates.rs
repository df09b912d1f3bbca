//! Platform fee schedule.
//!
//! Percentage rates are integer basis points so that truncating integer
//! division gives exactly the floor-per-component rounding the billing rules
//! require. No floating point is involved anywhere in money math.

use serde::{Deserialize, Serialize};

/// Basis points in a whole (100%).
const BPS_SCALE: i64 = 10_000;

/// Fee schedule for the platform.
///
/// All percentage rates are basis points (1 bp = 0.01%). Fixed amounts are
/// i64 yen. The `Default` instance carries the production schedule; tests
/// and deployments can override individual fields or deserialize a full
/// schedule from JSON.
///
/// # Example
/// ```
/// use payout_engine_core::FeeRates;
///
/// let rates = FeeRates::default();
/// assert_eq!(rates.consumption_tax_bps, 1000); // 10%
/// assert_eq!(rates.consumption_tax(1000), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRates {
    /// Consumption tax applied to purchases and to platform fees (bps)
    pub consumption_tax_bps: i64,

    /// Platform share of creator sales (bps)
    pub platform_fee_bps: i64,

    /// Purchase handling fee charged to the buying user (bps)
    pub purchase_fee_bps: i64,

    /// Expedited payout surcharge (bps)
    pub early_payment_fee_bps: i64,

    /// Fixed bank transfer fee (yen)
    pub transfer_fee: i64,

    /// Minimum amount a creator may request to transfer (yen)
    pub minimum_transfer: i64,
}

impl Default for FeeRates {
    fn default() -> Self {
        Self {
            consumption_tax_bps: 1_000,  // 10%
            platform_fee_bps: 1_500,     // 15%
            purchase_fee_bps: 1_000,     // 10%
            early_payment_fee_bps: 800,  // 8%
            transfer_fee: 330,
            minimum_transfer: 10_000,
        }
    }
}

impl FeeRates {
    /// Consumption tax on `amount`, truncated.
    pub fn consumption_tax(&self, amount: i64) -> i64 {
        apply_bps(amount, self.consumption_tax_bps)
    }

    /// Platform fee on `amount`, truncated.
    pub fn platform_fee(&self, amount: i64) -> i64 {
        apply_bps(amount, self.platform_fee_bps)
    }

    /// Purchase handling fee on `amount`, truncated.
    pub fn purchase_fee(&self, amount: i64) -> i64 {
        apply_bps(amount, self.purchase_fee_bps)
    }

    /// Expedited payout surcharge on `amount`, truncated.
    pub fn early_payment_fee(&self, amount: i64) -> i64 {
        apply_bps(amount, self.early_payment_fee_bps)
    }
}

/// Truncating basis-point multiply.
///
/// For non-negative `amount` and `bps` this is floor(amount * bps / 10000).
fn apply_bps(amount: i64, bps: i64) -> i64 {
    amount * bps / BPS_SCALE
}
