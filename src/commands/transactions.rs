// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::Local;

use crate::categories;
use crate::models::{NewTransaction, TransactionPatch, TransactionType};
use crate::stats;
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_amount, parse_date, parse_month, parse_type, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// The type/category contract is enforced here, at the caller: the store
/// itself accepts whatever it is given.
fn check_category(id: &str, kind: TransactionType) -> Result<()> {
    match categories::by_id(id) {
        Some(c) if c.kind == kind => Ok(()),
        Some(c) => bail!(
            "Category '{}' is an {} category, not usable for {} records",
            id,
            c.kind.label(),
            kind.label()
        ),
        None => bail!("Unknown category '{}', see `pocketbook categories list`", id),
    }
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let kind = parse_type(sub.get_one::<String>("type").unwrap())?;
    let category_id = sub.get_one::<String>("category").unwrap().clone();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let note = sub.get_one::<String>("note").cloned().unwrap_or_default();

    check_category(&category_id, kind)?;

    let tx = store.add(NewTransaction {
        r#type: kind,
        amount,
        category_id,
        note,
        date,
    })?;
    println!(
        "Recorded {} {:.2} on {} ({}) id={}",
        tx.r#type.label(),
        tx.amount,
        tx.date,
        categories::name_for(&tx.category_id),
        tx.id
    );
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if store.delete(id)? {
        println!("Removed {}", id);
    } else {
        println!("No record with id {}", id);
    }
    Ok(())
}

fn edit(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().clone();

    let mut patch = TransactionPatch::default();
    if let Some(date) = sub.get_one::<String>("date") {
        patch.date = Some(parse_date(date)?);
    }
    if let Some(kind) = sub.get_one::<String>("type") {
        patch.r#type = Some(parse_type(kind)?);
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        patch.amount = Some(parse_amount(amount)?);
    }
    if let Some(note) = sub.get_one::<String>("note") {
        patch.note = Some(note.clone());
    }
    if let Some(category_id) = sub.get_one::<String>("category") {
        // Validate against the record's (possibly updated) type.
        let kind = match patch.r#type {
            Some(kind) => kind,
            None => match store.get(&id) {
                Some(tx) => tx.r#type,
                None => {
                    println!("No record with id {}", id);
                    return Ok(());
                }
            },
        };
        check_category(category_id, kind)?;
        patch.category_id = Some(category_id.clone());
    }

    if store.update(&id, patch)? {
        println!("Updated {}", id);
    } else {
        println!("No record with id {}", id);
    }
    Ok(())
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let snapshot = match sub.get_one::<String>("month") {
        Some(month) => stats::month_transactions(store.list(), parse_month(month)?),
        None => store.list().to_vec(),
    };
    let sorted = stats::sort_recent_first(&snapshot);

    if !maybe_print_json(json_flag, jsonl_flag, &sorted)? {
        let rows: Vec<Vec<String>> = sorted
            .iter()
            .map(|t| {
                vec![
                    t.date.to_string(),
                    t.r#type.label().to_string(),
                    categories::name_for(&t.category_id).to_string(),
                    format!("{:.2}", t.amount),
                    t.note.clone(),
                    t.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
                    t.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Type", "Category", "Amount", "Note", "Recorded", "Id"], rows)
        );
    }
    Ok(())
}
