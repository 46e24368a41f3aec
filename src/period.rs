// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::TrackerError;

/// Symbolic period selector. `resolve` takes today's date as an argument so
/// the core stays clock-free and deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    /// 7 daily buckets ending today, oldest first.
    Week,
    /// 30 days ending today, grouped into 6 buckets of 5 consecutive days.
    Month,
    /// 12 calendar-month buckets for the current calendar year.
    Year,
    /// A single bucket spanning the inclusive [from, to] range.
    Custom { from: NaiveDate, to: NaiveDate },
}

/// A contiguous date sub-range used to group transactions for charting.
/// Both endpoints are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Bucket {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Period {
    /// Parses a symbolic period tag.
    pub fn from_tag(tag: &str) -> Result<Self, TrackerError> {
        match tag {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(TrackerError::InvalidPeriod(other.to_string())),
        }
    }

    /// Builds a custom period, rejecting inverted ranges up front.
    pub fn custom(from: NaiveDate, to: NaiveDate) -> Result<Self, TrackerError> {
        if from > to {
            return Err(TrackerError::InvalidRange { from, to });
        }
        Ok(Self::Custom { from, to })
    }

    /// Resolves the period into its full ordered bucket list. Buckets are
    /// contiguous, non-overlapping, and cover exactly the requested window;
    /// they are emitted regardless of whether any transaction falls inside.
    pub fn resolve(&self, today: NaiveDate) -> Result<Vec<Bucket>, TrackerError> {
        match *self {
            Period::Week => {
                let mut buckets = Vec::with_capacity(7);
                for i in 0..7 {
                    let day = today - Duration::days(6 - i);
                    buckets.push(Bucket {
                        label: day.format("%a").to_string(),
                        start: day,
                        end: day,
                    });
                }
                Ok(buckets)
            }
            Period::Month => {
                let window_start = today - Duration::days(29);
                let mut buckets = Vec::with_capacity(6);
                for group in 0..6 {
                    let start = window_start + Duration::days(group * 5);
                    let end = start + Duration::days(4);
                    buckets.push(Bucket {
                        label: start.day().to_string(),
                        start,
                        end,
                    });
                }
                Ok(buckets)
            }
            Period::Year => {
                let year = today.year();
                let mut buckets = Vec::with_capacity(12);
                for month in 1..=12 {
                    let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                    buckets.push(Bucket {
                        label: start.format("%b").to_string(),
                        start,
                        end: month_end(year, month),
                    });
                }
                Ok(buckets)
            }
            Period::Custom { from, to } => {
                if from > to {
                    return Err(TrackerError::InvalidRange { from, to });
                }
                Ok(vec![Bucket {
                    label: format!("{} to {}", from, to),
                    start: from,
                    end: to,
                }])
            }
        }
    }
}

/// Last calendar day of the given month, via first-of-next-month minus one.
fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    first_next - Duration::days(1)
}
