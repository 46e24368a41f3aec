// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

fn range_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Range start (inclusive)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("Range end (inclusive)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .version(crate_version!())
        .about("Personal finance aggregation, statistics, and chart series")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .global(true)
                .default_value("fintrack.json")
                .value_name("PATH")
                .help("Snapshot JSON document to read"),
        )
        .subcommand(json_flags(range_args(
            Command::new("report").about("Statistics report over an optional date range"),
        )))
        .subcommand(
            Command::new("chart")
                .about("Chart series derived from the snapshot")
                .subcommand(json_flags(range_args(
                    Command::new("finance")
                        .about("Income/expense/net time series for a period")
                        .arg(
                            Arg::new("period")
                                .long("period")
                                .default_value("month")
                                .value_name("week|month|year")
                                .help("Symbolic period (ignored when --from/--to are given)"),
                        ),
                )))
                .subcommand(json_flags(
                    Command::new("categories")
                        .about("Category distribution series")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .default_value("expense")
                                .value_name("income|expense|saving")
                                .help("Transaction kind to distribute"),
                        )
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_name("value|name")
                                .help("Sort entries (default: first-occurrence order)"),
                        ),
                )),
        )
        .subcommand(json_flags(
            Command::new("categories").about("List the snapshot's categories"),
        ))
        .subcommand(json_flags(
            Command::new("goals").about("Savings goals and their progress"),
        ))
        .subcommand(
            Command::new("export")
                .about("Export snapshot state to a file")
                .subcommand(
                    Command::new("snapshot")
                        .about("Write the full export document (JSON)")
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .required(true)
                                .value_name("PATH")
                                .help("Output file"),
                        ),
                )
                .subcommand(
                    Command::new("transactions")
                        .about("Dump transactions as csv or json")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .value_name("csv|json")
                                .help("Output format"),
                        )
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .required(true)
                                .value_name("PATH")
                                .help("Output file"),
                        ),
                ),
        )
}
