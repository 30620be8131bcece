// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};

use pocketbook::{cli, commands, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut store = Store::open_default()?;

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("stats", sub)) => commands::stats::handle(&store, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&mut store, sub)?,
        Some(("clear", sub)) => {
            if !sub.get_flag("yes") {
                bail!("Refusing to wipe the store without --yes");
            }
            store.replace_all(Vec::new())?;
            println!("Cleared all records ({})", store.path().display());
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
