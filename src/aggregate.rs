// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::TrackerError;
use crate::models::{Transaction, TransactionKind};
use crate::period::Bucket;

/// Key used for transactions without a (living) category reference.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Per-bucket sums split by kind. `saving` is the sum of saving-kind
/// transactions, not a derived net value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BucketTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub saving: Decimal,
}

impl BucketTotals {
    fn add(&mut self, kind: TransactionKind, amount: Decimal) {
        match kind {
            TransactionKind::Income => self.income += amount,
            TransactionKind::Expense => self.expense += amount,
            TransactionKind::Saving => self.saving += amount,
        }
    }
}

/// Accumulated total and count for one (kind, category) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub kind: TransactionKind,
    pub category_id: Option<String>,
    pub total: Decimal,
    pub count: u32,
}

impl CategoryTotal {
    /// Stable map key, e.g. `expense-alimentacion` or `expense-uncategorized`.
    pub fn key(&self) -> String {
        format!(
            "{}-{}",
            self.kind,
            self.category_id.as_deref().unwrap_or(UNCATEGORIZED)
        )
    }
}

/// Sums transactions into the bucket whose inclusive range contains their
/// date. Transactions outside every bucket are excluded from bucketed sums
/// (they still count toward the reporter's unbounded totals). The output
/// length always equals the bucket count; empty buckets keep zero sums.
pub fn aggregate(
    transactions: &[Transaction],
    buckets: &[Bucket],
) -> Result<Vec<BucketTotals>, TrackerError> {
    let mut totals = vec![BucketTotals::default(); buckets.len()];
    for tx in transactions {
        tx.validate()?;
        if let Some(i) = buckets.iter().position(|b| b.contains(tx.date)) {
            totals[i].add(tx.kind, tx.amount);
        }
    }
    Ok(totals)
}

/// Groups transactions by (kind, category), treating a missing category as a
/// distinguished uncategorized entry. Result order is first-occurrence
/// insertion order; presentation layers may re-sort.
pub fn by_category(transactions: &[Transaction]) -> Result<Vec<CategoryTotal>, TrackerError> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<(TransactionKind, Option<String>), usize> = HashMap::new();
    for tx in transactions {
        tx.validate()?;
        let key = (tx.kind, tx.category_id.clone());
        let i = *index.entry(key).or_insert_with(|| {
            totals.push(CategoryTotal {
                kind: tx.kind,
                category_id: tx.category_id.clone(),
                total: Decimal::ZERO,
                count: 0,
            });
            totals.len() - 1
        });
        totals[i].total += tx.amount;
        totals[i].count += 1;
    }
    Ok(totals)
}
