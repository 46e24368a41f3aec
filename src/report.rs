// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{by_category, CategoryTotal};
use crate::error::TrackerError;
use crate::models::{Transaction, TransactionKind};

/// Per-month sums split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub saving: Decimal,
}

/// Per-weekday sums plus a transaction count for frequency reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeekdayTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub saving: Decimal,
    pub count: u32,
}

/// Aggregate statistics over the requested range. `net_balance` is the
/// derived income-minus-expense value; `total_saving` is the sum of
/// saving-kind transactions and never subtracts from the balance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub total_saving: Decimal,
    pub net_balance: Decimal,
    pub by_category: Vec<CategoryTotal>,
    /// Keyed `YYYY-MM`, one-based zero-padded month so lexical order is
    /// chronological.
    pub by_month: BTreeMap<String, MonthTotals>,
    /// Keyed by weekday index 0..=6, 0 = Sunday.
    pub by_weekday: BTreeMap<u32, WeekdayTotals>,
}

/// Builds the full statistics report over the transactions falling inside
/// the optional inclusive date range (all transactions when `None`). The
/// input list is never mutated; an empty input yields zero totals and empty
/// maps, not an error.
pub fn report(
    transactions: &[Transaction],
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<StatisticsReport, TrackerError> {
    if let Some((from, to)) = range {
        if from > to {
            return Err(TrackerError::InvalidRange { from, to });
        }
    }
    let in_range = |tx: &&Transaction| match range {
        Some((from, to)) => from <= tx.date && tx.date <= to,
        None => true,
    };

    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut total_saving = Decimal::ZERO;
    let mut by_month: BTreeMap<String, MonthTotals> = BTreeMap::new();
    let mut by_weekday: BTreeMap<u32, WeekdayTotals> = BTreeMap::new();
    let mut selected: Vec<Transaction> = Vec::new();

    for tx in transactions.iter().filter(in_range) {
        tx.validate()?;
        match tx.kind {
            TransactionKind::Income => total_income += tx.amount,
            TransactionKind::Expense => total_expense += tx.amount,
            TransactionKind::Saving => total_saving += tx.amount,
        }

        let month = by_month.entry(month_key(tx.date)).or_default();
        match tx.kind {
            TransactionKind::Income => month.income += tx.amount,
            TransactionKind::Expense => month.expense += tx.amount,
            TransactionKind::Saving => month.saving += tx.amount,
        }

        let weekday = by_weekday
            .entry(tx.date.weekday().num_days_from_sunday())
            .or_default();
        match tx.kind {
            TransactionKind::Income => weekday.income += tx.amount,
            TransactionKind::Expense => weekday.expense += tx.amount,
            TransactionKind::Saving => weekday.saving += tx.amount,
        }
        weekday.count += 1;

        selected.push(tx.clone());
    }

    Ok(StatisticsReport {
        total_income,
        total_expense,
        total_saving,
        net_balance: total_income - total_expense,
        by_category: by_category(&selected)?,
        by_month,
        by_weekday,
    })
}

fn month_key(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}
