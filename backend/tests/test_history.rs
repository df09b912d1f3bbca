//! Tests for the payment history log.

use chrono::{NaiveDate, NaiveDateTime};
use payout_engine_core::{
    HistoryRecord, HistoryStore, PaymentHistory, PaymentKind, PaymentStatus,
};

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

fn seeded() -> PaymentHistory {
    let mut history = PaymentHistory::new();
    history.log(HistoryRecord::new(
        PaymentKind::Purchase,
        PaymentStatus::Paid,
        1_200,
        at(2025, 1, 10),
    ));
    history.log(HistoryRecord::new(
        PaymentKind::Subscription,
        PaymentStatus::Paid,
        980,
        at(2025, 1, 15),
    ));
    history.log(HistoryRecord::new(
        PaymentKind::Transfer,
        PaymentStatus::Pending,
        83_170,
        at(2025, 1, 20),
    ));
    history.log(HistoryRecord::new(
        PaymentKind::EarlyTransfer,
        PaymentStatus::Paid,
        37_020,
        at(2025, 2, 3),
    ));
    history
}

#[test]
fn test_filter_by_kind() {
    let history = seeded();

    assert_eq!(history.of_kind(PaymentKind::Purchase).len(), 1);
    assert_eq!(history.of_kind(PaymentKind::Transfer).len(), 1);

    let early = history.of_kind(PaymentKind::EarlyTransfer);
    assert_eq!(early.len(), 1);
    assert_eq!(early[0].amount(), 37_020);
}

#[test]
fn test_filter_by_status() {
    let history = seeded();

    assert_eq!(history.with_status(PaymentStatus::Paid).len(), 3);
    assert_eq!(history.with_status(PaymentStatus::Pending).len(), 1);
}

#[test]
fn test_filter_by_date_range() {
    let history = seeded();

    let january = history.between(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    );
    assert_eq!(january.len(), 3);

    // Bounds are inclusive on both ends
    let exact = history.between(
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
    );
    assert_eq!(exact.len(), 2);
}

#[test]
fn test_payout_link() {
    let mut history = PaymentHistory::new();
    history.log(
        HistoryRecord::new(
            PaymentKind::Transfer,
            PaymentStatus::Pending,
            83_170,
            at(2025, 1, 20),
        )
        .with_payout_id("payout_42".to_string()),
    );
    history.log(
        HistoryRecord::new(
            PaymentKind::Transfer,
            PaymentStatus::Paid,
            83_170,
            at(2025, 3, 5),
        )
        .with_payout_id("payout_42".to_string()),
    );

    let linked = history.for_payout("payout_42");
    assert_eq!(linked.len(), 2);
    assert_eq!(linked[0].status(), PaymentStatus::Pending);
    assert_eq!(linked[1].status(), PaymentStatus::Paid);
}

#[test]
fn test_history_store_trait_appends() {
    let mut history = PaymentHistory::new();

    HistoryStore::record(
        &mut history,
        HistoryRecord::new(
            PaymentKind::Purchase,
            PaymentStatus::Paid,
            500,
            at(2025, 1, 1),
        ),
    );

    assert_eq!(HistoryStore::records(&history).len(), 1);
    assert_eq!(history.len(), 1);
}

#[test]
fn test_empty_history() {
    let history = PaymentHistory::new();

    assert!(history.is_empty());
    assert!(history.of_kind(PaymentKind::Purchase).is_empty());
    assert!(history
        .between(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        )
        .is_empty());
}
