// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Localized label used on the CSV/TXT wire formats.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "收入",
            TransactionType::Expense => "支出",
        }
    }

    /// Maps a localized type label back to a type. Substring match: anything
    /// that does not mention income is treated as an expense.
    pub fn from_label(s: &str) -> Self {
        if s.contains("收入") {
            TransactionType::Income
        } else {
            TransactionType::Expense
        }
    }
}

/// A single recorded income or expense event. JSON field names are camelCase
/// so exported payloads round-trip unchanged through import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub r#type: TransactionType,
    pub amount: f64,
    pub category_id: String,
    pub note: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new record; `id` and `created_at` are minted
/// by the store.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub r#type: TransactionType,
    pub amount: f64,
    pub category_id: String,
    pub note: String,
    pub date: NaiveDate,
}

/// Partial update applied to an existing record. `id` and `created_at` are
/// never touched.
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub r#type: Option<TransactionType>,
    pub amount: Option<f64>,
    pub category_id: Option<String>,
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category_id: String,
    pub category_name: String,
    pub icon: String,
    pub color: String,
    pub amount: f64,
    pub percentage: f64,
    pub count: usize,
}

/// One point of the six-month trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub month: String,
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}
