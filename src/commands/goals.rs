// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::snapshot::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(snap: &Snapshot, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &snap.goals)? {
        return Ok(());
    }
    let ccy = &snap.config.currency;
    let data = snap
        .goals
        .iter()
        .map(|g| {
            vec![
                g.name.clone(),
                fmt_money(&g.current_amount, ccy),
                fmt_money(&g.target_amount, ccy),
                format!("{}%", g.progress_percent()),
                g.target_date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Goal", "Current", "Target", "Progress", "Target date"], data)
    );
    Ok(())
}
