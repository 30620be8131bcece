// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::import::{self, ImportFormat};
use crate::store::Store;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    let path = Path::new(m.get_one::<String>("path").unwrap().trim());
    let format = ImportFormat::from_path(path)?;
    let text =
        fs::read_to_string(path).with_context(|| format!("Read {}", path.display()))?;

    let records = import::parse(&text, format)?;
    let added = store.merge(records)?;
    println!("Imported {} records from {}", added, path.display());
    Ok(())
}
