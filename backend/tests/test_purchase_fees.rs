//! Tests for user purchase pricing.

use payout_engine_core::{calculate_purchase, FeeError, FeeRates};

#[test]
fn test_worked_example() {
    let rates = FeeRates::default();
    let breakdown = calculate_purchase(1_000, &rates).unwrap();

    assert_eq!(breakdown.base_amount, 1_000);
    assert_eq!(breakdown.tax, 100);
    assert_eq!(breakdown.purchase_fee, 100);
    assert_eq!(breakdown.total_amount, 1_200);
}

#[test]
fn test_floor_applies_per_component() {
    let rates = FeeRates::default();

    // 12345 * 10% = 1234.5, truncated on each component separately
    let breakdown = calculate_purchase(12_345, &rates).unwrap();
    assert_eq!(breakdown.tax, 1_234);
    assert_eq!(breakdown.purchase_fee, 1_234);
    assert_eq!(breakdown.total_amount, 14_813);
}

#[test]
fn test_small_amounts_round_to_zero_fees() {
    let rates = FeeRates::default();
    let breakdown = calculate_purchase(9, &rates).unwrap();

    assert_eq!(breakdown.tax, 0);
    assert_eq!(breakdown.purchase_fee, 0);
    assert_eq!(breakdown.total_amount, 9);
}

#[test]
fn test_zero_base() {
    let rates = FeeRates::default();
    let breakdown = calculate_purchase(0, &rates).unwrap();

    assert_eq!(breakdown.total_amount, 0);
}

#[test]
fn test_negative_base_rejected() {
    let rates = FeeRates::default();

    assert_eq!(
        calculate_purchase(-500, &rates),
        Err(FeeError::NegativeAmount { amount: -500 })
    );
}

#[test]
fn test_custom_rates() {
    let rates = FeeRates {
        consumption_tax_bps: 800, // 8%
        purchase_fee_bps: 500,    // 5%
        ..FeeRates::default()
    };
    let breakdown = calculate_purchase(1_000, &rates).unwrap();

    assert_eq!(breakdown.tax, 80);
    assert_eq!(breakdown.purchase_fee, 50);
    assert_eq!(breakdown.total_amount, 1_130);
}
