// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{Category, Config, Goal, Transaction, DEFAULT_CATEGORIES};

/// In-memory snapshot of the app's exported state. The aggregation core
/// treats this as a read-only input; all file I/O stays here at the CLI
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub goals: Vec<Goal>,
    pub config: Config,
    pub exported_at: Option<String>,
}

/// On-disk document shape shared by the app's export and this CLI's input.
/// Top-level field names follow the original export format.
#[derive(Serialize, Deserialize)]
struct SnapshotDoc {
    #[serde(rename = "transacciones", default)]
    transactions: Vec<serde_json::Value>,
    #[serde(rename = "categorias", default)]
    categories: Vec<Category>,
    #[serde(rename = "metas", default)]
    goals: Vec<Goal>,
    #[serde(rename = "configuracion", default)]
    config: Config,
    #[serde(rename = "fechaExportacion", default, skip_serializing_if = "Option::is_none")]
    exported_at: Option<String>,
}

/// Loads a snapshot document. Transaction records are decoded individually
/// so a missing field or non-numeric amount surfaces as a
/// [`TrackerError::MalformedTransaction`] naming the offending record, never
/// as silently substituted data. A snapshot without categories falls back to
/// the built-in set.
pub fn load(path: &Path) -> Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read snapshot '{}'", path.display()))?;
    let doc: SnapshotDoc = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid snapshot document '{}'", path.display()))?;

    let mut transactions = Vec::with_capacity(doc.transactions.len());
    for (i, value) in doc.transactions.into_iter().enumerate() {
        let tx: Transaction = serde_json::from_value(value)
            .map_err(|e| TrackerError::MalformedTransaction(format!("record #{}: {}", i, e)))?;
        tx.validate()?;
        transactions.push(tx);
    }

    let categories = if doc.categories.is_empty() {
        DEFAULT_CATEGORIES.clone()
    } else {
        doc.categories
    };

    Ok(Snapshot {
        transactions,
        categories,
        goals: doc.goals,
        config: doc.config,
        exported_at: doc.exported_at,
    })
}

/// Writes the snapshot back out as the export document, stamping the
/// caller-supplied export timestamp.
pub fn write(path: &Path, snapshot: &Snapshot, exported_at: &str) -> Result<()> {
    let doc = SnapshotDoc {
        transactions: snapshot
            .transactions
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()?,
        categories: snapshot.categories.clone(),
        goals: snapshot.goals.clone(),
        config: snapshot.config.clone(),
        exported_at: Some(exported_at.to_string()),
    };
    std::fs::write(path, serde_json::to_string_pretty(&doc)?)
        .with_context(|| format!("Cannot write snapshot '{}'", path.display()))?;
    Ok(())
}
