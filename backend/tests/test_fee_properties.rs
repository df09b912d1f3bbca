//! Property tests for the fee and calendar laws.

use chrono::{Datelike, Duration, NaiveDate};
use payout_engine_core::{
    add_business_days, calculate_creator_payout, calculate_early_transfer, calculate_purchase,
    is_business_day, month_add, transfer_date_for, FeeRates,
};
use proptest::prelude::*;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn purchase_components_floor_independently(base in 0i64..100_000_000) {
        let rates = FeeRates::default();
        let breakdown = calculate_purchase(base, &rates).unwrap();

        prop_assert_eq!(breakdown.tax, base * 1_000 / 10_000);
        prop_assert_eq!(breakdown.purchase_fee, base * 1_000 / 10_000);
        prop_assert_eq!(
            breakdown.total_amount,
            base + breakdown.tax + breakdown.purchase_fee
        );
    }

    #[test]
    fn payout_net_matches_formula(gross in 0i64..100_000_000) {
        let rates = FeeRates::default();
        let breakdown = calculate_creator_payout(gross, &rates).unwrap();

        let platform_fee = gross * 1_500 / 10_000;
        let fee_tax = platform_fee * 1_000 / 10_000;
        prop_assert_eq!(breakdown.net_amount, gross - platform_fee - fee_tax);
    }

    #[test]
    fn early_transfer_conserves_money(amount in 0i64..100_000_000) {
        let rates = FeeRates::default();
        let breakdown =
            calculate_early_transfer(amount, anchor(), &rates).unwrap();

        prop_assert_eq!(
            breakdown.net_amount + breakdown.total_deductions(),
            breakdown.requested_amount
        );
    }

    #[test]
    fn transfer_date_lands_on_weekday_in_month_plus_two(offset in 0i64..20_000) {
        let sale = anchor() + Duration::days(offset);
        let wired = transfer_date_for(sale);

        prop_assert!(is_business_day(wired));
        prop_assert!(wired.day() >= 5 && wired.day() <= 7);

        let (year, month) = month_add(sale.year(), sale.month(), 2);
        prop_assert_eq!((wired.year(), wired.month()), (year, month));
    }

    #[test]
    fn business_day_walk_counts_exactly(offset in 0i64..10_000, days in 0usize..15) {
        let start = anchor() + Duration::days(offset);
        let end = add_business_days(start, days);

        // Count the weekdays strictly after start, up to and including end
        let mut counted = 0;
        let mut cursor = start;
        while cursor < end {
            cursor += Duration::days(1);
            if is_business_day(cursor) {
                counted += 1;
            }
        }

        prop_assert_eq!(counted, days);
        if days > 0 {
            prop_assert!(is_business_day(end));
        }
    }
}
