// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use thiserror::Error;

/// Failure modes of the aggregation core. All variants are raised
/// synchronously; the core never substitutes fabricated data for bad input.
#[derive(Debug, Error, PartialEq)]
pub enum TrackerError {
    #[error("Unknown period '{0}', expected week|month|year")]
    InvalidPeriod(String),
    #[error("Invalid date range: from {from} is after to {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },
    #[error("Malformed transaction: {0}")]
    MalformedTransaction(String),
}
