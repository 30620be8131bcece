// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Export renderers over the full transaction list. All three emit records
//! in the canonical recent-first order and are deterministic given the same
//! list; only the TXT report stamps the wall-clock time it is handed.

use anyhow::Result;
use chrono::{Datelike, NaiveDateTime};
use std::fmt::Write;

use crate::categories;
use crate::models::{Transaction, TransactionType};
use crate::stats;

/// UTF-8 byte-order marker, prepended to CSV so spreadsheet apps pick the
/// right encoding for the localized labels.
pub const BOM: &str = "\u{feff}";

pub const CSV_HEADERS: [&str; 7] = ["日期", "星期", "类型", "分类", "金额(元)", "备注", "记录时间"];

const WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Full-fidelity JSON array, suitable for lossless round-trip import.
pub fn to_json(txs: &[Transaction]) -> Result<String> {
    let sorted = stats::sort_recent_first(txs);
    Ok(serde_json::to_string_pretty(&sorted)?)
}

/// Excel-friendly CSV: slash dates, localized weekday/type/category labels,
/// two-decimal amounts. Only the note is quoted; inner quotes are doubled.
pub fn to_csv(txs: &[Transaction]) -> String {
    let mut out = String::from(BOM);
    out.push_str(&CSV_HEADERS.join(","));
    for t in stats::sort_recent_first(txs) {
        let weekday = WEEKDAYS[t.date.weekday().num_days_from_sunday() as usize];
        let _ = write!(
            out,
            "\n{},星期{},{},{},{:.2},\"{}\",{}",
            t.date.format("%Y/%m/%d"),
            weekday,
            t.r#type.label(),
            categories::name_for(&t.category_id),
            t.amount,
            t.note.replace('"', "\"\""),
            t.created_at.format("%Y/%m/%d %H:%M"),
        );
    }
    out
}

/// Human-readable report: overview block, then one section per date in
/// descending order. Not machine-parsed.
pub fn to_txt(txs: &[Transaction], generated_at: NaiveDateTime) -> String {
    let total_income: f64 = sum_of(txs, TransactionType::Income);
    let total_expense: f64 = sum_of(txs, TransactionType::Expense);
    let balance = total_income - total_expense;

    let mut out = String::new();
    let _ = writeln!(out, "╔══════════════════════════════════════════════╗");
    let _ = writeln!(out, "║                记 账 报 表                   ║");
    let _ = writeln!(out, "║      导出时间: {}           ║", generated_at.format("%Y-%m-%d %H:%M"));
    let _ = writeln!(out, "╚══════════════════════════════════════════════╝");
    let _ = writeln!(out);
    let _ = writeln!(out, "──────────────── 数据概览 ────────────────");
    let _ = writeln!(out, "  📊 总记录数: {} 笔", txs.len());
    let _ = writeln!(out, "  💰 累计收入: ¥{total_income:.2}");
    let _ = writeln!(out, "  💸 累计支出: ¥{total_expense:.2}");
    let _ = writeln!(out, "  {} 累计结余: ¥{balance:.2}", if balance >= 0.0 { "📈" } else { "📉" });

    for (date, day) in stats::group_by_date(txs) {
        let day_income: f64 = sum_of(&day, TransactionType::Income);
        let day_expense: f64 = sum_of(&day, TransactionType::Expense);
        let _ = writeln!(out);
        let _ = writeln!(out, "── 📅 {date} ─────────────────────────");
        let _ = writeln!(out, "   收入: ¥{day_income:.2}    支出: ¥{day_expense:.2}");
        for t in &day {
            let sign = match t.r#type {
                TransactionType::Income => '+',
                TransactionType::Expense => '-',
            };
            let note: String = t.note.chars().take(20).collect();
            let _ = writeln!(
                out,
                "   {} {} {}¥{:.2}  {}",
                categories::icon_for(&t.category_id),
                categories::name_for(&t.category_id),
                sign,
                t.amount,
                note,
            );
        }
    }
    out
}

fn sum_of(txs: &[Transaction], kind: TransactionType) -> f64 {
    txs.iter()
        .filter(|t| t.r#type == kind)
        .map(|t| t.amount)
        .sum()
}
