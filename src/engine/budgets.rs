// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::category;
use crate::error::Result;
use crate::store::Ledger;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub budget_id: i64,
    pub name: String,
    pub category: String,
    pub limit_amount: Decimal,
    pub spent_amount: Decimal,
    pub percentage_used: Decimal,
    pub is_over_budget: bool,
    pub is_near_limit: bool,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub alert_threshold: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetsSection {
    pub active_count: usize,
    pub over_budget_count: usize,
    pub budgets: Vec<BudgetStatus>,
}

/// Evaluate budgets whose period contains `today`. Spend is summed over
/// the budget's own period, not any trailing window. Expired and future
/// budgets are excluded entirely.
pub fn budget_status(ledger: &Ledger, user_id: i64, today: NaiveDate) -> Result<BudgetsSection> {
    ledger.require_user(user_id)?;

    let budgets = ledger.budgets_for_user(user_id)?;
    let active: Vec<_> = budgets
        .into_iter()
        .filter(|b| b.period_start <= today && today <= b.period_end)
        .collect();

    // One fetch covering every active period.
    let earliest = active.iter().map(|b| b.period_start).min();
    let expenses = match earliest {
        Some(d) => ledger.expenses_for_user(user_id, Some(d))?,
        None => Vec::new(),
    };

    let mut out = Vec::with_capacity(active.len());
    let mut over_count = 0;
    for b in active {
        let spent: Decimal = expenses
            .iter()
            .filter(|e| e.date_spent >= b.period_start && e.date_spent <= b.period_end)
            .filter(|e| {
                e.category
                    .as_deref()
                    .is_some_and(|c| category::same_category(c, &b.category))
            })
            .map(|e| e.amount)
            .sum();
        // limit_amount > 0 by construction
        let pct = spent / b.limit_amount * Decimal::ONE_HUNDRED;
        let is_over_budget = pct >= Decimal::ONE_HUNDRED;
        let is_near_limit = !is_over_budget && pct >= b.alert_threshold;
        if is_over_budget {
            over_count += 1;
        }
        out.push(BudgetStatus {
            budget_id: b.id,
            name: b.name,
            category: b.category,
            limit_amount: b.limit_amount,
            spent_amount: spent,
            percentage_used: pct,
            is_over_budget,
            is_near_limit,
            period_start: b.period_start,
            period_end: b.period_end,
            alert_threshold: b.alert_threshold,
        });
    }

    Ok(BudgetsSection {
        active_count: out.len(),
        over_budget_count: over_count,
        budgets: out,
    })
}
