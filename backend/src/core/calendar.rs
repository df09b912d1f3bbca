//! Settlement calendar helpers.
//!
//! Payouts follow the platform cutoff rule: sales recorded in a given month
//! are wired on the 5th two months later, shifted forward off weekends.
//! Expedited payouts run on a three business day turnaround instead.
//!
//! Business days are Monday through Friday. No national holiday table is
//! applied; weekends are the only non-business days.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Check whether a date falls on a business day (Mon-Fri).
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use payout_engine_core::is_business_day;
///
/// let friday = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();
/// assert!(is_business_day(friday));
/// assert!(!is_business_day(saturday));
/// ```
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance `days` business days from `start`.
///
/// Walks forward one calendar day at a time and counts Mon-Fri only, so a
/// Friday start plus 3 business days lands on the following Wednesday.
/// `days == 0` returns `start` unchanged, even on a weekend.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use payout_engine_core::add_business_days;
///
/// let friday = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let wednesday = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(add_business_days(friday, 3), wednesday);
/// ```
pub fn add_business_days(start: NaiveDate, days: usize) -> NaiveDate {
    let mut date = start;
    let mut remaining = days;
    while remaining > 0 {
        date += Duration::days(1);
        if is_business_day(date) {
            remaining -= 1;
        }
    }
    date
}

/// Shift a date landing on a weekend forward to the next Monday.
///
/// Saturday moves ahead two days and Sunday one day. Weekdays pass through
/// unchanged.
pub fn roll_forward_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Add `months` to a (year, month) pair, carrying into the year.
///
/// # Example
/// ```
/// use payout_engine_core::month_add;
///
/// assert_eq!(month_add(2025, 11, 2), (2026, 1));
/// assert_eq!(month_add(2025, 3, 2), (2025, 5));
/// ```
pub fn month_add(year: i32, month: u32, months: u32) -> (i32, u32) {
    debug_assert!((1..=12).contains(&month), "month must be 1-12");
    let zero_based = (month - 1) + months;
    (year + (zero_based / 12) as i32, zero_based % 12 + 1)
}

/// Settlement date for a sale under the regular payout cycle.
///
/// Sales close at month end and are wired on the 5th of the month two months
/// later. A 5th that lands on a weekend rolls forward to Monday.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use payout_engine_core::transfer_date_for;
///
/// // January sales pay out on March 5th
/// let sale = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// let wired = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
/// assert_eq!(transfer_date_for(sale), wired);
/// ```
pub fn transfer_date_for(sale_date: NaiveDate) -> NaiveDate {
    let (year, month) = month_add(sale_date.year(), sale_date.month(), 2);
    let fifth = NaiveDate::from_ymd_opt(year, month, 5).expect("day 5 exists in every month");
    roll_forward_weekend(fifth)
}
