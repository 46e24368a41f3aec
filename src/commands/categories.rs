// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::snapshot::Snapshot;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(snap: &Snapshot, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &snap.categories)? {
        return Ok(());
    }
    let data = snap
        .categories
        .iter()
        .map(|c| {
            vec![
                c.name.clone(),
                c.kind.to_string(),
                c.color.clone(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Kind", "Color"], data));
    Ok(())
}
