// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use pocketbook::models::{Transaction, TransactionType};
use pocketbook::stats;

fn tx(
    id: &str,
    kind: TransactionType,
    amount: f64,
    category: &str,
    date: &str,
    created: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        r#type: kind,
        amount,
        category_id: category.to_string(),
        note: String::new(),
        date: date.parse().unwrap(),
        created_at: created.parse::<DateTime<Utc>>().unwrap(),
    }
}

fn sample() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};
    vec![
        tx("t1", Expense, 35.5, "food", "2024-06-15", "2024-06-15T12:00:00Z"),
        tx("t2", Expense, 12.0, "transport", "2024-06-15", "2024-06-15T08:30:00Z"),
        tx("t3", Income, 8000.0, "salary", "2024-06-01", "2024-06-01T09:00:00Z"),
        tx("t4", Expense, 99.9, "food", "2024-06-02", "2024-06-02T19:00:00Z"),
        tx("t5", Expense, 50.0, "shopping", "2024-05-20", "2024-05-20T10:00:00Z"),
        tx("t6", Income, 200.0, "bonus", "2024-06-30", "2024-06-30T23:00:00Z"),
    ]
}

const JUNE: &str = "2024-06-15";

fn june() -> NaiveDate {
    JUNE.parse().unwrap()
}

#[test]
fn sort_is_date_desc_then_created_desc() {
    let sorted = stats::sort_recent_first(&sample());
    let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t6", "t1", "t2", "t4", "t3", "t5"]);

    for pair in sorted.windows(2) {
        assert!(pair[0].date >= pair[1].date);
        if pair[0].date == pair[1].date {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}

#[test]
fn grouping_flattens_back_to_sorted_order() {
    let txs = sample();
    let groups = stats::group_by_date(&txs);

    // Keys descend and appear once each.
    let keys: Vec<NaiveDate> = groups.iter().map(|(d, _)| *d).collect();
    let mut deduped = keys.clone();
    deduped.dedup();
    assert_eq!(keys, deduped);
    assert!(keys.windows(2).all(|w| w[0] > w[1]));

    let flattened: Vec<&str> = groups
        .iter()
        .flat_map(|(_, day)| day.iter().map(|t| t.id.as_str()))
        .collect();
    let sorted: Vec<String> = stats::sort_recent_first(&txs)
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(flattened, sorted.iter().map(String::as_str).collect::<Vec<_>>());

    for (date, day) in &groups {
        assert!(day.iter().all(|t| t.date == *date));
    }
}

#[test]
fn month_filter_is_inclusive_on_both_ends() {
    let txs = sample();
    let month = stats::month_transactions(&txs, june());
    let mut ids: Vec<&str> = month.iter().map(|t| t.id.as_str()).collect();
    ids.sort();
    // 2024-06-01 and 2024-06-30 are in; 2024-05-20 is out.
    assert_eq!(ids, ["t1", "t2", "t3", "t4", "t6"]);
}

#[test]
fn month_summary_balance_identity() {
    let s = stats::month_summary(&sample(), june());
    assert!((s.income - 8200.0).abs() < 1e-9);
    assert!((s.expense - 147.4).abs() < 1e-9);
    assert!((s.balance - (s.income - s.expense)).abs() < 1e-9);
    assert_eq!(s.count, 5);
}

#[test]
fn category_stats_sorted_with_percentages_summing_to_100() {
    let data = stats::category_stats(&sample(), TransactionType::Expense, june());

    assert_eq!(data.len(), 2);
    assert_eq!(data[0].category_id, "food");
    assert!((data[0].amount - 135.4).abs() < 1e-9);
    assert_eq!(data[0].count, 2);
    assert_eq!(data[1].category_id, "transport");

    assert!(data.windows(2).all(|w| w[0].amount >= w[1].amount));
    let total_pct: f64 = data.iter().map(|s| s.percentage).sum();
    assert!((total_pct - 100.0).abs() < 1e-9);
}

#[test]
fn unresolvable_category_is_dropped_from_breakdown_but_not_totals() {
    let mut txs = sample();
    txs.push(tx(
        "ghost",
        TransactionType::Expense,
        500.0,
        "discontinued",
        "2024-06-10",
        "2024-06-10T10:00:00Z",
    ));

    let breakdown = stats::category_stats(&txs, TransactionType::Expense, june());
    assert!(breakdown.iter().all(|s| s.category_id != "discontinued"));

    // The breakdown total excludes the ghost record...
    let breakdown_total: f64 = breakdown.iter().map(|s| s.amount).sum();
    assert!((breakdown_total - 147.4).abs() < 1e-9);

    // ...while the month summary still counts it.
    let summary = stats::month_summary(&txs, june());
    assert!((summary.expense - 647.4).abs() < 1e-9);
}

#[test]
fn zero_total_yields_zero_percentages() {
    let txs = vec![tx(
        "z",
        TransactionType::Expense,
        0.0,
        "food",
        "2024-06-10",
        "2024-06-10T10:00:00Z",
    )];
    let data = stats::category_stats(&txs, TransactionType::Expense, june());
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].percentage, 0.0);
}

#[test]
fn trend_is_six_points_ending_with_current_month() {
    let trend = stats::monthly_trend(&sample(), june());
    assert_eq!(trend.len(), 6);
    let labels: Vec<&str> = trend.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(labels, ["1月", "2月", "3月", "4月", "5月", "6月"]);

    let may = &trend[4];
    assert!((may.expense - 50.0).abs() < 1e-9);
    let june_point = &trend[5];
    assert!((june_point.income - 8200.0).abs() < 1e-9);
    assert!((june_point.balance - (june_point.income - june_point.expense)).abs() < 1e-9);
}

#[test]
fn trend_crosses_year_boundaries() {
    let trend = stats::monthly_trend(&[], "2024-02-10".parse().unwrap());
    let labels: Vec<&str> = trend.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(labels, ["9月", "10月", "11月", "12月", "1月", "2月"]);
}

#[test]
fn empty_list_yields_identity_aggregates() {
    let summary = stats::month_summary(&[], june());
    assert_eq!(summary.income, 0.0);
    assert_eq!(summary.expense, 0.0);
    assert_eq!(summary.balance, 0.0);
    assert_eq!(summary.count, 0);

    assert!(stats::group_by_date(&[]).is_empty());
    assert!(stats::category_stats(&[], TransactionType::Income, june()).is_empty());

    let trend = stats::monthly_trend(&[], june());
    assert_eq!(trend.len(), 6);
    assert!(trend.iter().all(|p| p.income == 0.0 && p.expense == 0.0 && p.balance == 0.0));
}
