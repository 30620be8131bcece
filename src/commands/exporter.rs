// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::Local;
use std::fs;

use crate::export;
use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();

    let content = match fmt.as_str() {
        "json" => export::to_json(store.list())?,
        "csv" => export::to_csv(store.list()),
        "txt" => export::to_txt(store.list(), Local::now().naive_local()),
        other => bail!("Unknown format: {} (use json|csv|txt)", other),
    };
    fs::write(out, content).with_context(|| format!("Write {}", out))?;
    println!("Exported {} records to {}", store.list().len(), out);
    Ok(())
}
