// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::category;
use crate::error::Result;
use crate::store::Ledger;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_SPENDING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingSummary {
    /// Summed expense amounts keyed by category label; blank or missing
    /// categories bucket under "Uncategorized". Unordered; render paths
    /// sort by amount.
    pub by_category: HashMap<String, Decimal>,
    /// Keys are exactly the classifications present in the data
    /// ("needs"/"wants"); unclassified spending is omitted, not coerced.
    pub needs_vs_wants: HashMap<String, Decimal>,
    pub total_spending: Decimal,
}

/// Bucket expenses over the trailing `days` window by category and by
/// needs/wants classification.
pub fn spending_summary(
    ledger: &Ledger,
    user_id: i64,
    today: NaiveDate,
    days: i64,
) -> Result<SpendingSummary> {
    ledger.require_user(user_id)?;

    let since = today - Duration::days(days);
    let expenses = ledger.expenses_for_user(user_id, Some(since))?;

    let mut by_category: HashMap<String, Decimal> = HashMap::new();
    let mut needs_vs_wants: HashMap<String, Decimal> = HashMap::new();
    let mut total = Decimal::ZERO;
    for exp in &expenses {
        let label = category::display_label(exp.category.as_deref());
        *by_category.entry(label).or_insert(Decimal::ZERO) += exp.amount;
        if let Some(kind) = exp.expense_type {
            *needs_vs_wants
                .entry(kind.as_str().to_string())
                .or_insert(Decimal::ZERO) += exp.amount;
        }
        total += exp.amount;
    }

    Ok(SpendingSummary {
        by_category,
        needs_vs_wants,
        total_spending: total,
    })
}
