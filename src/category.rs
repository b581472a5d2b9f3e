// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::EngineError;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

/// Bucket for expenses with a missing or blank category label.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Closed budget-category vocabulary. Free-form labels from the write
/// path are folded into it via `normalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BudgetCategory {
    Housing,
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Shopping,
    HealthFitness,
    Travel,
    Education,
    Others,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 10] = [
        BudgetCategory::Housing,
        BudgetCategory::Food,
        BudgetCategory::Transportation,
        BudgetCategory::Entertainment,
        BudgetCategory::Utilities,
        BudgetCategory::Shopping,
        BudgetCategory::HealthFitness,
        BudgetCategory::Travel,
        BudgetCategory::Education,
        BudgetCategory::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetCategory::Housing => "Housing",
            BudgetCategory::Food => "Food",
            BudgetCategory::Transportation => "Transportation",
            BudgetCategory::Entertainment => "Entertainment",
            BudgetCategory::Utilities => "Utilities",
            BudgetCategory::Shopping => "Shopping",
            BudgetCategory::HealthFitness => "Health & Fitness",
            BudgetCategory::Travel => "Travel",
            BudgetCategory::Education => "Education",
            BudgetCategory::Others => "Others",
        }
    }
}

impl std::fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

static ALIASES: Lazy<HashMap<String, BudgetCategory>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for cat in BudgetCategory::ALL {
        m.insert(cat.label().to_lowercase(), cat);
    }
    m.insert("groceries".to_string(), BudgetCategory::Food);
    m
});

/// Fold a free-form label into the closed vocabulary, or fail with
/// `UnknownCategory`.
pub fn normalize(raw: &str) -> Result<BudgetCategory, EngineError> {
    ALIASES
        .get(&raw.trim().to_lowercase())
        .copied()
        .ok_or_else(|| EngineError::UnknownCategory(raw.trim().to_string()))
}

/// Category label for display/bucketing; blank or missing labels fall
/// back to the fixed sentinel.
pub fn display_label(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => UNCATEGORIZED.to_string(),
    }
}

/// Whether two labels name the same category. Labels inside the closed
/// vocabulary compare through it (so "groceries" matches "Food");
/// anything else compares case-insensitively on the raw text.
pub fn same_category(a: &str, b: &str) -> bool {
    let fa = a.trim().to_lowercase();
    let fb = b.trim().to_lowercase();
    match (ALIASES.get(&fa), ALIASES.get(&fb)) {
        (Some(x), Some(y)) => x == y,
        _ => fa == fb,
    }
}
