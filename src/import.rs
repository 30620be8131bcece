// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Import parsers. File-level problems (extension, shape, emptiness) abort
//! with a classified error; row-level damage in CSV degrades per field or
//! skips the row so a partially broken file still imports what it can.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use csv::ReaderBuilder;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

use crate::categories;
use crate::models::{Transaction, TransactionType};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file format '{0}': expected .json or .csv")]
    UnsupportedFormat(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),
    #[error("CSV contains no data rows")]
    EmptyData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Csv,
}

impl ImportFormat {
    pub fn from_path(path: &Path) -> Result<Self, ImportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "json" => Ok(ImportFormat::Json),
            "csv" => Ok(ImportFormat::Csv),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

pub fn parse(text: &str, format: ImportFormat) -> Result<Vec<Transaction>, ImportError> {
    match format {
        ImportFormat::Json => parse_json(text),
        ImportFormat::Csv => parse_csv(text),
    }
}

/// JSON payloads keep their ids and timestamps, so this is the only path
/// where the store's dedup-by-id can drop records.
pub fn parse_json(text: &str) -> Result<Vec<Transaction>, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ImportError::InvalidJson(e.to_string()))?;
    if !value.is_array() {
        return Err(ImportError::InvalidJson(
            "top-level value is not an array".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| ImportError::InvalidJson(e.to_string()))
}

/// Positional column indices for the two CSV layouts. The legacy layout
/// predates the weekday column and has six columns instead of seven.
struct Layout {
    date: usize,
    kind: usize,
    category: usize,
    amount: usize,
    note: usize,
    created_at: usize,
}

const CURRENT: Layout = Layout { date: 0, kind: 2, category: 3, amount: 4, note: 5, created_at: 6 };
const LEGACY: Layout = Layout { date: 0, kind: 1, category: 2, amount: 3, note: 4, created_at: 5 };

pub fn parse_csv(text: &str) -> Result<Vec<Transaction>, ImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let records: Vec<csv::StringRecord> = rdr
        .records()
        .flatten()
        .filter(|rec| rec.iter().any(|field| !field.trim().is_empty()))
        .collect();
    if records.len() < 2 {
        return Err(ImportError::EmptyData);
    }

    let header = &records[0];
    let layout = if header.iter().any(|h| h.trim() == "星期") {
        CURRENT
    } else {
        LEGACY
    };

    let mut imported = Vec::new();
    for rec in &records[1..] {
        // Rows missing any mandatory column are skipped, not reported.
        let (Some(date_raw), Some(kind_raw), Some(category_raw), Some(amount_raw)) = (
            rec.get(layout.date),
            rec.get(layout.kind),
            rec.get(layout.category),
            rec.get(layout.amount),
        ) else {
            continue;
        };

        let kind = TransactionType::from_label(kind_raw);
        let category_name = category_raw.trim().replace('"', "");
        let category_id = categories::by_name_and_kind(&category_name, kind)
            .map(|c| c.id)
            .unwrap_or_else(|| categories::fallback_id(kind));

        imported.push(Transaction {
            id: Uuid::new_v4().to_string(),
            r#type: kind,
            amount: amount_raw.trim().parse::<f64>().unwrap_or(0.0),
            category_id: category_id.to_string(),
            note: rec.get(layout.note).unwrap_or_default().trim().replace('"', ""),
            date: parse_row_date(date_raw).unwrap_or_else(|| Utc::now().date_naive()),
            created_at: parse_row_created_at(rec.get(layout.created_at).unwrap_or_default())
                .unwrap_or_else(Utc::now),
        });
    }
    Ok(imported)
}

fn parse_row_date(raw: &str) -> Option<NaiveDate> {
    let normalized = raw.trim().replace('/', "-");
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()
}

fn parse_row_created_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let normalized = raw.replace('/', "-");
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}
