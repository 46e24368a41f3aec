// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::aggregate::{aggregate, by_category};
use crate::models::TransactionKind;
use crate::period::Period;
use crate::series::{category_series, finance_series};
use crate::snapshot::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};

pub fn handle(snap: &Snapshot, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("finance", sub)) => finance(snap, sub)?,
        Some(("categories", sub)) => categories(snap, sub)?,
        _ => {}
    }
    Ok(())
}

fn finance(snap: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let period = match (sub.get_one::<String>("from"), sub.get_one::<String>("to")) {
        (Some(f), Some(t)) => Period::custom(parse_date(f)?, parse_date(t)?)?,
        (None, None) => Period::from_tag(sub.get_one::<String>("period").unwrap())?,
        _ => anyhow::bail!("--from and --to must be given together"),
    };
    let today = chrono::Utc::now().date_naive();
    let buckets = period.resolve(today)?;
    let totals = aggregate(&snap.transactions, &buckets)?;
    let series = finance_series(&buckets, &totals);

    if maybe_print_json(json_flag, jsonl_flag, &series)? {
        return Ok(());
    }
    let ccy = &snap.config.currency;
    let mut data = Vec::with_capacity(series.labels.len());
    for (i, label) in series.labels.iter().enumerate() {
        data.push(vec![
            label.clone(),
            fmt_money(&series.income[i], ccy),
            fmt_money(&series.expense[i], ccy),
            fmt_money(&series.net[i], ccy),
        ]);
    }
    println!("{}", pretty_table(&["Bucket", "Income", "Expense", "Net"], data));
    Ok(())
}

fn categories(snap: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let kind_tag = sub.get_one::<String>("kind").unwrap();
    let kind = TransactionKind::from_tag(kind_tag)
        .ok_or_else(|| anyhow::anyhow!("Unknown kind '{}'", kind_tag))?;

    let filtered: Vec<_> = snap
        .transactions
        .iter()
        .filter(|tx| tx.kind == kind)
        .cloned()
        .collect();
    let totals = by_category(&filtered)?;
    let mut series = category_series(&totals, &snap.categories);
    match sub.get_one::<String>("sort").map(String::as_str) {
        Some("value") => series = series.sorted_by_value_desc(),
        Some("name") => series = series.sorted_by_label(),
        Some(other) => anyhow::bail!("Unknown sort '{}' (use value|name)", other),
        None => {}
    }

    if maybe_print_json(json_flag, jsonl_flag, &series)? {
        return Ok(());
    }
    let ccy = &snap.config.currency;
    let percentages = series.percentages();
    let mut data = Vec::with_capacity(series.labels.len());
    for (i, label) in series.labels.iter().enumerate() {
        data.push(vec![
            label.clone(),
            fmt_money(&series.values[i], ccy),
            format!("{}%", percentages[i]),
            series.colors[i].clone(),
        ]);
    }
    println!(
        "{}",
        pretty_table(&["Category", "Total", "Share", "Color"], data)
    );
    Ok(())
}
