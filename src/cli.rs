// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print output as pretty JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print output as JSON lines")
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .help("Calendar month YYYY-MM (default: current month)")
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personal bookkeeping: record transactions, view stats, import/export data")
        .subcommand(
            Command::new("tx")
                .about("Record, edit, and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income or expense"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category id, see `pocketbook categories list`"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of an existing transaction")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, most recent first")
                        .arg(month_arg())
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Monthly summaries, category breakdowns, and trends")
                .subcommand(
                    Command::new("summary")
                        .about("Income/expense/balance for a month")
                        .arg(month_arg())
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("categories")
                        .about("Per-category breakdown for a month")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income or expense"),
                        )
                        .arg(month_arg())
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("trend")
                        .about("Six-month income/expense trend")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("Category reference data")
                .subcommand(Command::new("list").about("List the category table")),
        )
        .subcommand(
            Command::new("export")
                .about("Export all transactions to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .required(true)
                        .help("json, csv, or txt"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("import")
                .about("Import transactions from a .json or .csv file")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("clear")
                .about("Delete all records")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm wiping the store"),
                ),
        )
}
