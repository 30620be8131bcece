// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::categories::DEFAULT_CATEGORIES;
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => {
            let rows: Vec<Vec<String>> = DEFAULT_CATEGORIES
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        format!("{} {}", c.icon, c.name),
                        c.kind.label().to_string(),
                        c.color.to_string(),
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Id", "Name", "Type", "Color"], rows));
        }
        _ => {}
    }
    Ok(())
}
