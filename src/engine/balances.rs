// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::store::Ledger;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountBalance {
    pub account_id: i64,
    pub account_name: String,
    pub account_type: String,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountsSection {
    pub total_count: usize,
    pub total_balance: Decimal,
    pub accounts: Vec<AccountBalance>,
}

/// Derive each account's balance as latest snapshot plus the net of
/// income and expenses dated on or after the snapshot date (inclusive).
/// Accounts without a snapshot start from zero and sum all history.
/// Negative balances are valid output.
pub fn account_balances(ledger: &Ledger, user_id: i64) -> Result<AccountsSection> {
    ledger.require_user(user_id)?;

    let accounts = ledger.accounts_for_user(user_id)?;
    let income = ledger.income_for_user(user_id, None)?;
    let expenses = ledger.expenses_for_user(user_id, None)?;

    let mut out = Vec::with_capacity(accounts.len());
    let mut total = Decimal::ZERO;
    for acc in accounts {
        let (baseline, since) = match ledger.latest_snapshot(acc.id)? {
            Some(snap) => (snap.amount, Some(snap.as_of)),
            None => (Decimal::ZERO, None),
        };
        let mut balance = baseline;
        for inc in income.iter().filter(|i| i.account_id == acc.id) {
            if since.map_or(true, |d| inc.date_received >= d) {
                balance += inc.amount;
            }
        }
        for exp in expenses.iter().filter(|e| e.account_id == acc.id) {
            if since.map_or(true, |d| exp.date_spent >= d) {
                balance -= exp.amount;
            }
        }
        total += balance;
        out.push(AccountBalance {
            account_id: acc.id,
            account_name: acc.name,
            account_type: acc.r#type,
            balance,
        });
    }

    Ok(AccountsSection {
        total_count: out.len(),
        total_balance: total,
        accounts: out,
    })
}
