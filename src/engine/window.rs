// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::models::{Expense, Income};
use crate::store::Ledger;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

pub const DEFAULT_WINDOW_DAYS: i64 = 90;
pub const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Clone, Serialize)]
pub struct RecentTransactions {
    pub income: Vec<Income>,
    pub expenses: Vec<Expense>,
}

/// Income and expenses within the trailing `days` window, newest first,
/// each sequence capped at `limit` independently. Empty results are
/// valid, not an error.
pub fn recent_transactions(
    ledger: &Ledger,
    user_id: i64,
    today: NaiveDate,
    days: i64,
    limit: usize,
) -> Result<RecentTransactions> {
    ledger.require_user(user_id)?;

    let since = today - Duration::days(days);
    let mut income = ledger.income_for_user(user_id, Some(since))?;
    let mut expenses = ledger.expenses_for_user(user_id, Some(since))?;
    income.truncate(limit);
    expenses.truncate(limit);

    Ok(RecentTransactions { income, expenses })
}
