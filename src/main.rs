// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use fintrack::{cli, commands, snapshot};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let file = matches.get_one::<String>("file").unwrap();
    let snap = snapshot::load(Path::new(file))?;

    match matches.subcommand() {
        Some(("report", sub)) => commands::reports::handle(&snap, sub)?,
        Some(("chart", sub)) => commands::charts::handle(&snap, sub)?,
        Some(("categories", sub)) => commands::categories::handle(&snap, sub)?,
        Some(("goals", sub)) => commands::goals::handle(&snap, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&snap, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
