// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use crate::snapshot::{self, Snapshot};

pub fn handle(snap: &Snapshot, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("snapshot", sub)) => export_snapshot(snap, sub),
        Some(("transactions", sub)) => export_transactions(snap, sub),
        _ => Ok(()),
    }
}

fn export_snapshot(snap: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let exported_at = chrono::Utc::now().to_rfc3339();
    snapshot::write(Path::new(out), snap, &exported_at)?;
    println!("Exported snapshot to {}", out);
    Ok(())
}

fn export_transactions(snap: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let category_name = |id: Option<&str>| -> Option<String> {
        id.and_then(|id| snap.categories.iter().find(|c| c.id == id))
            .map(|c| c.name.clone())
    };

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "kind", "category", "amount", "description"])?;
            for tx in &snap.transactions {
                wtr.write_record([
                    tx.id.clone(),
                    tx.date.to_string(),
                    tx.kind.to_string(),
                    category_name(tx.category_id.as_deref()).unwrap_or_default(),
                    tx.amount.to_string(),
                    tx.description.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for tx in &snap.transactions {
                items.push(json!({
                    "id": tx.id,
                    "date": tx.date,
                    "kind": tx.kind,
                    "category": category_name(tx.category_id.as_deref()),
                    "amount": tx.amount,
                    "description": tx.description,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}
