// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::models::{NewTransaction, Transaction, TransactionPatch};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.pocketbook", "Pocketbook", "pocketbook"));

/// Fixed storage key: the whole transaction list lives in this one file.
pub const STORAGE_FILE: &str = "transactions.json";

pub fn data_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(STORAGE_FILE))
}

/// Exclusive owner of the transaction list. Loaded in full at open, rewritten
/// in full on every mutation. A missing or corrupt file reads as an empty
/// list rather than an error.
pub struct Store {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl Store {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let transactions = fs::read_to_string(&path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Store { path, transactions }
    }

    pub fn open_default() -> Result<Self> {
        Ok(Self::open(data_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw records, no ordering guarantee; ordering belongs to `stats`.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(&self.transactions)?;
        fs::write(&self.path, text)
            .with_context(|| format!("Write {}", self.path.display()))
    }

    /// Mints id and created-at, prepends the record, persists.
    pub fn add(&mut self, draft: NewTransaction) -> Result<Transaction> {
        let tx = Transaction {
            id: Uuid::new_v4().to_string(),
            r#type: draft.r#type,
            amount: draft.amount,
            category_id: draft.category_id,
            note: draft.note,
            date: draft.date,
            created_at: Utc::now(),
        };
        self.transactions.insert(0, tx.clone());
        self.save()?;
        Ok(tx)
    }

    /// Removes the record with the given id. Missing id is a silent no-op;
    /// the returned flag only feeds the CLI confirmation message.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Merges the patch into the record with the given id, preserving `id`
    /// and `created_at`. Missing id is a silent no-op.
    pub fn update(&mut self, id: &str, patch: TransactionPatch) -> Result<bool> {
        let Some(tx) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        if let Some(kind) = patch.r#type {
            tx.r#type = kind;
        }
        if let Some(amount) = patch.amount {
            tx.amount = amount;
        }
        if let Some(category_id) = patch.category_id {
            tx.category_id = category_id;
        }
        if let Some(note) = patch.note {
            tx.note = note;
        }
        if let Some(date) = patch.date {
            tx.date = date;
        }
        self.save()?;
        Ok(true)
    }

    /// Atomic whole-list swap, used by clear and by tests seeding state.
    pub fn replace_all(&mut self, records: Vec<Transaction>) -> Result<()> {
        self.transactions = records;
        self.save()
    }

    /// Import merge: records whose id already exists are dropped, the rest
    /// are appended after the existing records. Returns how many were added.
    pub fn merge(&mut self, imported: Vec<Transaction>) -> Result<usize> {
        let existing: HashSet<String> =
            self.transactions.iter().map(|t| t.id.clone()).collect();
        let fresh: Vec<Transaction> = imported
            .into_iter()
            .filter(|t| !existing.contains(&t.id))
            .collect();
        let added = fresh.len();
        self.transactions.extend(fresh);
        self.save()?;
        Ok(added)
    }
}
