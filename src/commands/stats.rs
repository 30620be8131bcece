// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::stats;
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_month, parse_type, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(store, sub)?,
        Some(("categories", sub)) => categories(store, sub)?,
        Some(("trend", sub)) => trend(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn reference_date(sub: &clap::ArgMatches) -> Result<NaiveDate> {
    match sub.get_one::<String>("month") {
        Some(month) => parse_month(month),
        None => Ok(Local::now().date_naive()),
    }
}

fn summary(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let reference = reference_date(sub)?;

    let s = stats::month_summary(store.list(), reference);
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![vec![
            format!("{:.2}", s.income),
            format!("{:.2}", s.expense),
            format!("{:.2}", s.balance),
            s.count.to_string(),
        ]];
        println!(
            "{}",
            pretty_table(&["Income", "Expense", "Balance", "Count"], rows)
        );
    }
    Ok(())
}

fn categories(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = parse_type(sub.get_one::<String>("type").unwrap())?;
    let reference = reference_date(sub)?;

    let data = stats::category_stats(store.list(), kind, reference);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|s| {
                vec![
                    format!("{} {}", s.icon, s.category_name),
                    format!("{:.2}", s.amount),
                    format!("{:.1}%", s.percentage),
                    s.count.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Amount", "Share", "Count"], rows)
        );
    }
    Ok(())
}

fn trend(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let data = stats::monthly_trend(store.list(), Local::now().date_naive());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|p| {
                vec![
                    p.month.clone(),
                    format!("{:.2}", p.income),
                    format!("{:.2}", p.expense),
                    format!("{:.2}", p.balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expense", "Balance"], rows)
        );
    }
    Ok(())
}
