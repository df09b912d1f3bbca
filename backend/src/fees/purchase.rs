//! User purchase pricing.
//!
//! When a user buys content, the creator's base price is grossed up with
//! consumption tax and the purchase handling fee. Both components are
//! truncated independently before summing.

use serde::{Deserialize, Serialize};

use super::rates::FeeRates;
use super::FeeError;

/// Price breakdown for a single purchase.
///
/// # Example
/// ```
/// use payout_engine_core::{calculate_purchase, FeeRates};
///
/// let breakdown = calculate_purchase(1000, &FeeRates::default()).unwrap();
/// assert_eq!(breakdown.base_amount, 1000);
/// assert_eq!(breakdown.tax, 100);
/// assert_eq!(breakdown.purchase_fee, 100);
/// assert_eq!(breakdown.total_amount, 1200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseBreakdown {
    /// Creator-set base price (yen)
    pub base_amount: i64,

    /// Consumption tax on the base price (yen)
    pub tax: i64,

    /// Purchase handling fee (yen)
    pub purchase_fee: i64,

    /// Amount charged to the user (yen)
    pub total_amount: i64,
}

/// Calculate what a user pays for content with the given base price.
///
/// # Arguments
/// * `base_amount` - Creator-set price in yen (must be non-negative)
/// * `rates` - Platform fee schedule
///
/// # Returns
/// Breakdown with tax and handling fee truncated independently, or
/// [`FeeError::NegativeAmount`] for negative input.
pub fn calculate_purchase(
    base_amount: i64,
    rates: &FeeRates,
) -> Result<PurchaseBreakdown, FeeError> {
    if base_amount < 0 {
        return Err(FeeError::NegativeAmount {
            amount: base_amount,
        });
    }

    let tax = rates.consumption_tax(base_amount);
    let purchase_fee = rates.purchase_fee(base_amount);

    Ok(PurchaseBreakdown {
        base_amount,
        tax,
        purchase_fee,
        total_amount: base_amount + tax + purchase_fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_floor_independently() {
        let rates = FeeRates::default();
        let breakdown = calculate_purchase(999, &rates).unwrap();

        assert_eq!(breakdown.tax, 99);
        assert_eq!(breakdown.purchase_fee, 99);
        assert_eq!(breakdown.total_amount, 1_197);
    }

    #[test]
    fn test_negative_price_rejected() {
        let rates = FeeRates::default();
        let result = calculate_purchase(-1, &rates);

        assert_eq!(result, Err(FeeError::NegativeAmount { amount: -1 }));
    }

    #[test]
    fn test_free_content_stays_free() {
        let rates = FeeRates::default();
        let breakdown = calculate_purchase(0, &rates).unwrap();

        assert_eq!(breakdown.total_amount, 0);
    }
}
