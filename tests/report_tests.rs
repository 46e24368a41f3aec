// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::aggregate::aggregate;
use fintrack::error::TrackerError;
use fintrack::models::{Transaction, TransactionKind};
use fintrack::period::Period;
use fintrack::report::report;
use rust_decimal::Decimal;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(id: &str, d: NaiveDate, kind: TransactionKind, category: Option<&str>, amount: i64) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: d,
        kind,
        category_id: category.map(|c| c.to_string()),
        amount: Decimal::from(amount),
        description: None,
    }
}

#[test]
fn totals_and_balance() {
    let txs = vec![
        tx("a", date(2025, 8, 1), TransactionKind::Income, None, 2500),
        tx("b", date(2025, 8, 2), TransactionKind::Expense, None, 150),
        tx("c", date(2025, 8, 3), TransactionKind::Expense, None, 50),
    ];
    let rep = report(&txs, None).unwrap();
    assert_eq!(rep.total_income, Decimal::from(2500));
    assert_eq!(rep.total_expense, Decimal::from(200));
    assert_eq!(rep.net_balance, Decimal::from(2300));
}

#[test]
fn saving_kind_does_not_subtract_from_balance() {
    let txs = vec![
        tx("a", date(2025, 8, 1), TransactionKind::Income, None, 1000),
        tx("b", date(2025, 8, 2), TransactionKind::Expense, None, 300),
        tx("c", date(2025, 8, 3), TransactionKind::Saving, None, 200),
    ];
    let rep = report(&txs, None).unwrap();
    assert_eq!(rep.total_saving, Decimal::from(200));
    assert_eq!(rep.net_balance, Decimal::from(700));
}

#[test]
fn empty_input_yields_zero_report() {
    let rep = report(&[], None).unwrap();
    assert_eq!(rep.total_income, Decimal::ZERO);
    assert_eq!(rep.total_expense, Decimal::ZERO);
    assert_eq!(rep.total_saving, Decimal::ZERO);
    assert_eq!(rep.net_balance, Decimal::ZERO);
    assert!(rep.by_category.is_empty());
    assert!(rep.by_month.is_empty());
    assert!(rep.by_weekday.is_empty());
}

#[test]
fn month_keys_are_one_based_and_zero_padded() {
    let txs = vec![
        tx("a", date(2025, 8, 2), TransactionKind::Income, None, 10),
        tx("b", date(2025, 12, 2), TransactionKind::Income, None, 10),
    ];
    let rep = report(&txs, None).unwrap();
    let keys: Vec<&String> = rep.by_month.keys().collect();
    assert_eq!(keys, vec!["2025-08", "2025-12"]);
    assert_eq!(rep.by_month["2025-08"].income, Decimal::from(10));
}

#[test]
fn weekday_index_zero_is_sunday_and_counts_entries() {
    // 2025-08-03 is a Sunday
    let txs = vec![
        tx("a", date(2025, 8, 3), TransactionKind::Expense, None, 20),
        tx("b", date(2025, 8, 3), TransactionKind::Income, None, 5),
        tx("c", date(2025, 8, 4), TransactionKind::Expense, None, 7),
    ];
    let rep = report(&txs, None).unwrap();
    let sunday = &rep.by_weekday[&0];
    assert_eq!(sunday.expense, Decimal::from(20));
    assert_eq!(sunday.income, Decimal::from(5));
    assert_eq!(sunday.count, 2);
    assert_eq!(rep.by_weekday[&1].count, 1);
}

#[test]
fn range_filter_is_inclusive_on_both_ends() {
    let txs = vec![
        tx("a", date(2025, 8, 1), TransactionKind::Income, None, 1),
        tx("b", date(2025, 8, 31), TransactionKind::Income, None, 2),
        tx("c", date(2025, 9, 1), TransactionKind::Income, None, 4),
    ];
    let rep = report(&txs, Some((date(2025, 8, 1), date(2025, 8, 31)))).unwrap();
    assert_eq!(rep.total_income, Decimal::from(3));
}

#[test]
fn inverted_range_is_rejected_without_a_partial_report() {
    let txs = vec![tx("a", date(2025, 8, 15), TransactionKind::Income, None, 1)];
    let err = report(&txs, Some((date(2025, 9, 1), date(2025, 8, 1)))).unwrap_err();
    assert_eq!(
        err,
        TrackerError::InvalidRange {
            from: date(2025, 9, 1),
            to: date(2025, 8, 1),
        }
    );
}

#[test]
fn reporter_totals_match_bucketed_sums_over_the_same_range() {
    let from = date(2025, 8, 1);
    let to = date(2025, 8, 31);
    let txs = vec![
        tx("a", date(2025, 8, 3), TransactionKind::Income, None, 100),
        tx("b", date(2025, 8, 10), TransactionKind::Expense, None, 40),
        tx("c", date(2025, 8, 20), TransactionKind::Expense, None, 10),
        tx("d", date(2025, 7, 20), TransactionKind::Income, None, 999),
    ];
    let rep = report(&txs, Some((from, to))).unwrap();
    let buckets = Period::custom(from, to).unwrap().resolve(to).unwrap();
    let totals = aggregate(&txs, &buckets).unwrap();
    let bucket_income: Decimal = totals.iter().map(|t| t.income).sum();
    let bucket_expense: Decimal = totals.iter().map(|t| t.expense).sum();
    assert_eq!(rep.total_income, bucket_income);
    assert_eq!(rep.total_expense, bucket_expense);
}

#[test]
fn report_is_deterministic() {
    let txs = vec![
        tx("a", date(2025, 8, 3), TransactionKind::Income, Some("salario"), 100),
        tx("b", date(2025, 8, 10), TransactionKind::Expense, None, 40),
    ];
    assert_eq!(report(&txs, None).unwrap(), report(&txs, None).unwrap());
}
