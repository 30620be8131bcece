// Copyright (c) 2025 Pocketbook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionType;

/// A fixed classification tag with display metadata, scoped to either income
/// or expense. Reference data only, never user-mutable.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub kind: TransactionType,
    pub color: &'static str,
}

/// Display fallbacks for a `category_id` that no longer resolves.
pub const UNKNOWN_NAME: &str = "未知";
pub const UNKNOWN_ICON: &str = "❓";

use TransactionType::{Expense, Income};

pub const DEFAULT_CATEGORIES: &[Category] = &[
    // Expense
    Category { id: "food", name: "餐饮", icon: "🍜", kind: Expense, color: "#ef4444" },
    Category { id: "transport", name: "交通", icon: "🚗", kind: Expense, color: "#f97316" },
    Category { id: "shopping", name: "购物", icon: "🛒", kind: Expense, color: "#eab308" },
    Category { id: "entertainment", name: "娱乐", icon: "🎮", kind: Expense, color: "#84cc16" },
    Category { id: "living", name: "生活", icon: "🏠", kind: Expense, color: "#22c55e" },
    Category { id: "medical", name: "医疗", icon: "💊", kind: Expense, color: "#14b8a6" },
    Category { id: "education", name: "学习", icon: "📚", kind: Expense, color: "#06b6d4" },
    Category { id: "social", name: "社交", icon: "🎁", kind: Expense, color: "#3b82f6" },
    Category { id: "clothing", name: "服饰", icon: "👔", kind: Expense, color: "#8b5cf6" },
    Category { id: "digital", name: "数码", icon: "📱", kind: Expense, color: "#a855f7" },
    Category { id: "pet", name: "宠物", icon: "🐱", kind: Expense, color: "#ec4899" },
    Category { id: "other_expense", name: "其他", icon: "📦", kind: Expense, color: "#6b7280" },
    // Income
    Category { id: "salary", name: "工资", icon: "💰", kind: Income, color: "#22c55e" },
    Category { id: "bonus", name: "奖金", icon: "🎉", kind: Income, color: "#10b981" },
    Category { id: "investment", name: "理财", icon: "📈", kind: Income, color: "#14b8a6" },
    Category { id: "sideline", name: "副业", icon: "💼", kind: Income, color: "#06b6d4" },
    Category { id: "gift", name: "红包", icon: "🧧", kind: Income, color: "#ef4444" },
    Category { id: "refund", name: "退款", icon: "💸", kind: Income, color: "#f97316" },
    Category { id: "other_income", name: "其他", icon: "✨", kind: Income, color: "#6b7280" },
];

pub fn by_id(id: &str) -> Option<&'static Category> {
    DEFAULT_CATEGORIES.iter().find(|c| c.id == id)
}

/// Import-side resolution: display name and type must both match, since the
/// two type buckets reuse display names (e.g. `其他`).
pub fn by_name_and_kind(name: &str, kind: TransactionType) -> Option<&'static Category> {
    DEFAULT_CATEGORIES
        .iter()
        .find(|c| c.name == name && c.kind == kind)
}

/// The type-appropriate catch-all id used when import resolution misses.
pub fn fallback_id(kind: TransactionType) -> &'static str {
    match kind {
        TransactionType::Income => "other_income",
        TransactionType::Expense => "other_expense",
    }
}

pub fn name_for(id: &str) -> &'static str {
    by_id(id).map(|c| c.name).unwrap_or(UNKNOWN_NAME)
}

pub fn icon_for(id: &str) -> &'static str {
    by_id(id).map(|c| c.icon).unwrap_or(UNKNOWN_ICON)
}
