// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Aggregation engine: pure functions over a snapshot of the transaction
//! list. Reference dates are passed in explicitly; nothing here reads the
//! wall clock.

use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashMap;

use crate::categories;
use crate::models::{CategoryStats, MonthSummary, MonthlyStats, Transaction, TransactionType};

/// Canonical "recent first" ordering: date descending, then created-at
/// descending. Stable, so true ties keep their input order.
pub fn sort_recent_first(txs: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = txs.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
    sorted
}

/// Partitions the canonically sorted list into per-date groups. Group keys
/// appear in first-seen order after sorting, so concatenating the groups
/// reproduces the sorted list exactly.
pub fn group_by_date(txs: &[Transaction]) -> Vec<(NaiveDate, Vec<Transaction>)> {
    let mut groups: Vec<(NaiveDate, Vec<Transaction>)> = Vec::new();
    for tx in sort_recent_first(txs) {
        match groups.last_mut() {
            Some((date, day)) if *date == tx.date => day.push(tx),
            _ => groups.push((tx.date, vec![tx])),
        }
    }
    groups
}

/// All transactions in the calendar month containing `reference`, both ends
/// inclusive.
pub fn month_transactions(txs: &[Transaction], reference: NaiveDate) -> Vec<Transaction> {
    txs.iter()
        .filter(|t| t.date.year() == reference.year() && t.date.month() == reference.month())
        .cloned()
        .collect()
}

pub fn month_summary(txs: &[Transaction], reference: NaiveDate) -> MonthSummary {
    let month = month_transactions(txs, reference);
    let income: f64 = month
        .iter()
        .filter(|t| t.r#type == TransactionType::Income)
        .map(|t| t.amount)
        .sum();
    let expense: f64 = month
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
        .map(|t| t.amount)
        .sum();
    MonthSummary {
        income,
        expense,
        balance: income - expense,
        count: month.len(),
    }
}

/// Per-category breakdown for one type in the month containing `reference`,
/// sorted by amount descending. Ids that do not resolve against the category
/// table are dropped from the breakdown (they still count in
/// `month_summary`) and do not contribute to the percentage base.
pub fn category_stats(
    txs: &[Transaction],
    kind: TransactionType,
    reference: NaiveDate,
) -> Vec<CategoryStats> {
    let month: Vec<Transaction> = month_transactions(txs, reference)
        .into_iter()
        .filter(|t| t.r#type == kind)
        .collect();

    let mut per_category: HashMap<&str, (f64, usize)> = HashMap::new();
    for tx in &month {
        let entry = per_category.entry(tx.category_id.as_str()).or_insert((0.0, 0));
        entry.0 += tx.amount;
        entry.1 += 1;
    }

    let mut stats: Vec<CategoryStats> = per_category
        .into_iter()
        .filter_map(|(category_id, (amount, count))| {
            let category = categories::by_id(category_id)?;
            Some(CategoryStats {
                category_id: category_id.to_string(),
                category_name: category.name.to_string(),
                icon: category.icon.to_string(),
                color: category.color.to_string(),
                amount,
                percentage: 0.0,
                count,
            })
        })
        .collect();

    let total: f64 = stats.iter().map(|s| s.amount).sum();
    if total > 0.0 {
        for s in &mut stats {
            s.percentage = s.amount / total * 100.0;
        }
    }
    stats.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    stats
}

/// Income/expense/balance for the six calendar months ending with the month
/// containing `today`, oldest first. Always exactly six points; empty months
/// are all zero.
pub fn monthly_trend(txs: &[Transaction], today: NaiveDate) -> Vec<MonthlyStats> {
    (0..6)
        .rev()
        .map(|back| {
            let reference = today
                .checked_sub_months(Months::new(back))
                .unwrap_or(today);
            let summary = month_summary(txs, reference);
            MonthlyStats {
                month: format!("{}月", reference.month()),
                income: summary.income,
                expense: summary.expense,
                balance: summary.balance,
            }
        })
        .collect()
}
