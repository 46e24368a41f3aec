// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{BucketTotals, CategoryTotal};
use crate::models::{Category, DEFAULT_CATEGORY_COLOR};
use crate::period::Bucket;

/// Label/series arrays for the time-series chart. All arrays have exactly
/// one entry per bucket. `net` is income minus expense per bucket, distinct
/// from the saving-kind sums in [`BucketTotals`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinanceSeries {
    pub labels: Vec<String>,
    pub income: Vec<Decimal>,
    pub expense: Vec<Decimal>,
    pub net: Vec<Decimal>,
}

/// Maps aggregation output into chart arrays. Missing totals never shrink
/// the arrays; they zero-fill so the chart keeps one point per bucket.
pub fn finance_series(buckets: &[Bucket], totals: &[BucketTotals]) -> FinanceSeries {
    let mut series = FinanceSeries {
        labels: Vec::with_capacity(buckets.len()),
        income: Vec::with_capacity(buckets.len()),
        expense: Vec::with_capacity(buckets.len()),
        net: Vec::with_capacity(buckets.len()),
    };
    for (i, bucket) in buckets.iter().enumerate() {
        let t = totals.get(i).cloned().unwrap_or_default();
        series.labels.push(bucket.label.clone());
        series.income.push(t.income);
        series.expense.push(t.expense);
        series.net.push(t.income - t.expense);
    }
    series
}

impl FinanceSeries {
    /// Cumulative net across buckets, oldest first.
    pub fn running_balance(&self) -> Vec<Decimal> {
        let mut acc = Decimal::ZERO;
        self.net
            .iter()
            .map(|n| {
                acc += *n;
                acc
            })
            .collect()
    }
}

/// Label/value/color arrays for the category distribution chart. Colors are
/// bound to categories by identity, so re-sorting keeps them aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
    pub colors: Vec<String>,
}

/// Builds the distribution series in the totals' insertion order, resolving
/// names and colors from the category snapshot. Totals whose category is
/// missing or deleted render as `(uncategorized)` with the default color
/// rather than being dropped, so values always sum to the report total.
pub fn category_series(totals: &[CategoryTotal], categories: &[Category]) -> CategorySeries {
    let mut series = CategorySeries {
        labels: Vec::with_capacity(totals.len()),
        values: Vec::with_capacity(totals.len()),
        colors: Vec::with_capacity(totals.len()),
    };
    for total in totals {
        let category = total
            .category_id
            .as_deref()
            .and_then(|id| categories.iter().find(|c| c.id == id));
        match category {
            Some(c) => {
                series.labels.push(c.name.clone());
                series.colors.push(c.color.clone());
            }
            None => {
                series.labels.push("(uncategorized)".to_string());
                series.colors.push(DEFAULT_CATEGORY_COLOR.to_string());
            }
        }
        series.values.push(total.total);
    }
    series
}

impl CategorySeries {
    /// Percent of the grand total per entry, rounded to one decimal place.
    /// A zero grand total yields all zeros.
    pub fn percentages(&self) -> Vec<Decimal> {
        let total: Decimal = self.values.iter().sum();
        if total.is_zero() {
            return vec![Decimal::ZERO; self.values.len()];
        }
        self.values
            .iter()
            .map(|v| (*v * Decimal::from(100) / total).round_dp(1))
            .collect()
    }

    pub fn sorted_by_value_desc(self) -> Self {
        self.sorted_by(|a, b| b.1.cmp(&a.1))
    }

    pub fn sorted_by_label(self) -> Self {
        self.sorted_by(|a, b| a.0.cmp(&b.0))
    }

    fn sorted_by<F>(self, mut cmp: F) -> Self
    where
        F: FnMut(
            &(String, Decimal, String),
            &(String, Decimal, String),
        ) -> std::cmp::Ordering,
    {
        let mut entries: Vec<(String, Decimal, String)> = self
            .labels
            .into_iter()
            .zip(self.values)
            .zip(self.colors)
            .map(|((label, value), color)| (label, value, color))
            .collect();
        entries.sort_by(&mut cmp);
        let mut sorted = CategorySeries {
            labels: Vec::with_capacity(entries.len()),
            values: Vec::with_capacity(entries.len()),
            colors: Vec::with_capacity(entries.len()),
        };
        for (label, value, color) in entries {
            sorted.labels.push(label);
            sorted.values.push(value);
            sorted.colors.push(color);
        }
        sorted
    }
}
