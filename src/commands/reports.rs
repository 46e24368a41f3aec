// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::report;
use crate::snapshot::Snapshot;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn handle(snap: &Snapshot, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let range = match (m.get_one::<String>("from"), m.get_one::<String>("to")) {
        (Some(f), Some(t)) => Some((parse_date(f)?, parse_date(t)?)),
        (None, None) => None,
        _ => anyhow::bail!("--from and --to must be given together"),
    };

    let rep = report::report(&snap.transactions, range)?;
    if maybe_print_json(json_flag, jsonl_flag, &rep)? {
        return Ok(());
    }

    let ccy = &snap.config.currency;
    let summary = vec![
        vec!["Income".to_string(), fmt_money(&rep.total_income, ccy)],
        vec!["Expense".to_string(), fmt_money(&rep.total_expense, ccy)],
        vec!["Saving".to_string(), fmt_money(&rep.total_saving, ccy)],
        vec!["Balance".to_string(), fmt_money(&rep.net_balance, ccy)],
    ];
    println!("{}", pretty_table(&["Total", "Amount"], summary));

    let months = rep
        .by_month
        .iter()
        .map(|(key, t)| {
            vec![
                key.clone(),
                fmt_money(&t.income, ccy),
                fmt_money(&t.expense, ccy),
                fmt_money(&t.saving, ccy),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expense", "Saving"], months)
    );

    let weekdays = rep
        .by_weekday
        .iter()
        .map(|(day, t)| {
            vec![
                WEEKDAYS[*day as usize].to_string(),
                fmt_money(&t.income, ccy),
                fmt_money(&t.expense, ccy),
                fmt_money(&t.saving, ccy),
                t.count.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Weekday", "Income", "Expense", "Saving", "Count"], weekdays)
    );

    let categories = rep
        .by_category
        .iter()
        .map(|c| {
            let name = c
                .category_id
                .as_deref()
                .and_then(|id| snap.categories.iter().find(|cat| cat.id == id))
                .map(|cat| cat.name.clone())
                .unwrap_or_else(|| "(uncategorized)".to_string());
            vec![
                name,
                c.kind.to_string(),
                fmt_money(&c.total, ccy),
                c.count.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Kind", "Total", "Count"], categories)
    );
    Ok(())
}
