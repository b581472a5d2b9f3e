// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::balances::{self, AccountsSection};
use crate::engine::budgets::{self, BudgetsSection};
use crate::engine::cards::{self, CreditCardsSection};
use crate::engine::goals::{self, GoalsSection};
use crate::engine::spending::{self, SpendingSummary};
use crate::engine::window;
use crate::error::Result;
use crate::store::Ledger;
use chrono::{Duration, Local, NaiveDate};
use log::debug;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

/// Net cash flow always looks at a fixed 90-day window, independent of
/// the configurable listing/spending windows.
pub const NET_FLOW_WINDOW_DAYS: i64 = 90;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionsSection {
    pub recent_income: usize,
    pub recent_expenses: usize,
    pub net_flow_90d: Decimal,
}

/// The canonical aggregate record. Its key set is fixed: every section
/// is always populated, with empty collections and zero counts rather
/// than absent keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub accounts: AccountsSection,
    pub transactions: TransactionsSection,
    pub spending_summary: SpendingSummary,
    pub budgets: BudgetsSection,
    pub goals: GoalsSection,
    pub credit_cards: CreditCardsSection,
}

pub fn build(conn: &Connection, user_id: i64) -> Result<FinancialSummary> {
    build_as_of(conn, user_id, Local::now().date_naive())
}

/// Build the full summary as of a given calendar date. All reads run
/// inside one read transaction so a single build never mixes pre- and
/// post-write states; it is rolled back on drop (nothing to commit).
pub fn build_as_of(conn: &Connection, user_id: i64, today: NaiveDate) -> Result<FinancialSummary> {
    let tx = conn.unchecked_transaction()?;
    let ledger = Ledger::new(&tx);
    ledger.require_user(user_id)?;

    let accounts = balances::account_balances(&ledger, user_id)?;
    let recent = window::recent_transactions(
        &ledger,
        user_id,
        today,
        window::DEFAULT_WINDOW_DAYS,
        window::DEFAULT_LIMIT,
    )?;
    let spending_summary = spending::spending_summary(
        &ledger,
        user_id,
        today,
        spending::DEFAULT_SPENDING_WINDOW_DAYS,
    )?;
    let budgets = budgets::budget_status(&ledger, user_id, today)?;
    let goals = goals::goal_status(&ledger, user_id, today)?;
    let credit_cards = cards::card_status(&ledger, user_id)?;

    // Net flow over the full fixed window, not the capped listing.
    let since = today - Duration::days(NET_FLOW_WINDOW_DAYS);
    let income_total: Decimal = ledger
        .income_for_user(user_id, Some(since))?
        .iter()
        .map(|i| i.amount)
        .sum();
    let expense_total: Decimal = ledger
        .expenses_for_user(user_id, Some(since))?
        .iter()
        .map(|e| e.amount)
        .sum();

    let summary = FinancialSummary {
        accounts,
        transactions: TransactionsSection {
            recent_income: recent.income.len(),
            recent_expenses: recent.expenses.len(),
            net_flow_90d: income_total - expense_total,
        },
        spending_summary,
        budgets,
        goals,
        credit_cards,
    };
    debug!(
        "summary for user {}: {} accounts, {} active budgets, {} goals, {} cards",
        user_id,
        summary.accounts.total_count,
        summary.budgets.active_count,
        summary.goals.total_count,
        summary.credit_cards.total_count
    );
    Ok(summary)
}
