// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::store::Ledger;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalStatus {
    pub goal_id: i64,
    pub name: String,
    pub category: String,
    pub priority: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    /// Clamped to [0, 100]; a zero target yields 0.
    pub progress_percentage: Decimal,
    pub is_completed: bool,
    pub target_date: Option<NaiveDate>,
    pub days_remaining: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalsSection {
    pub total_count: usize,
    pub completed_count: usize,
    pub goals: Vec<GoalStatus>,
}

pub fn goal_status(ledger: &Ledger, user_id: i64, today: NaiveDate) -> Result<GoalsSection> {
    ledger.require_user(user_id)?;

    let goals = ledger.goals_for_user(user_id)?;
    let mut out = Vec::with_capacity(goals.len());
    let mut completed = 0;
    for g in goals {
        let progress = if g.target_amount.is_zero() {
            Decimal::ZERO
        } else {
            (g.current_amount / g.target_amount * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
        };
        let is_completed = g.current_amount >= g.target_amount;
        if is_completed {
            completed += 1;
        }
        let days_remaining = g.target_date.map(|d| (d - today).num_days().max(0));
        out.push(GoalStatus {
            goal_id: g.id,
            name: g.name,
            category: g.category,
            priority: g.priority,
            target_amount: g.target_amount,
            current_amount: g.current_amount,
            progress_percentage: progress,
            is_completed,
            target_date: g.target_date,
            days_remaining,
        });
    }

    Ok(GoalsSection {
        total_count: out.len(),
        completed_count: completed,
        goals: out,
    })
}
