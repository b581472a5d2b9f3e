// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{EngineError, Result};
use crate::models::{Account, Budget, CreditCard, Expense, ExpenseType, Goal, Income, Snapshot};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

/// Active-only read view over the ledger tables. Every query is scoped
/// to one user and excludes soft-deleted rows, so the aggregation code
/// above never branches on deletion.
pub struct Ledger<'c> {
    conn: &'c Connection,
}

fn parse_amount(table: &'static str, s: &str) -> Result<Decimal> {
    s.parse::<Decimal>().map_err(|_| EngineError::InvalidAmount {
        table,
        value: s.to_string(),
    })
}

impl<'c> Ledger<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Ledger { conn }
    }

    pub fn user_exists(&self, user_id: i64) -> Result<bool> {
        let hit: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM users WHERE id=?1 AND is_deleted=0",
                params![user_id],
                |r| r.get(0),
            )
            .optional()?;
        Ok(hit.is_some())
    }

    pub fn require_user(&self, user_id: i64) -> Result<()> {
        if self.user_exists(user_id)? {
            Ok(())
        } else {
            Err(EngineError::UserNotFound(user_id))
        }
    }

    pub fn accounts_for_user(&self, user_id: i64) -> Result<Vec<Account>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, user_id, name, type, subtype, card_id FROM accounts
             WHERE user_id=?1 AND is_deleted=0 ORDER BY name, id",
        )?;
        let mut rows = stmt.query(params![user_id])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(Account {
                id: r.get(0)?,
                user_id: r.get(1)?,
                name: r.get(2)?,
                r#type: r.get(3)?,
                subtype: r.get(4)?,
                card_id: r.get(5)?,
            });
        }
        Ok(out)
    }

    pub fn latest_snapshot(&self, account_id: i64) -> Result<Option<Snapshot>> {
        let row: Option<(i64, i64, String, NaiveDate)> = self
            .conn
            .query_row(
                "SELECT id, account_id, amount, as_of FROM balance_snapshots
                 WHERE account_id=?1 AND is_deleted=0
                 ORDER BY as_of DESC, id DESC LIMIT 1",
                params![account_id],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .optional()?;
        match row {
            Some((id, account_id, amount, as_of)) => Ok(Some(Snapshot {
                id,
                account_id,
                amount: parse_amount("balance_snapshots", &amount)?,
                as_of,
            })),
            None => Ok(None),
        }
    }

    /// Income rows, newest first; optionally only those dated on or
    /// after `since`.
    pub fn income_for_user(&self, user_id: i64, since: Option<NaiveDate>) -> Result<Vec<Income>> {
        let mut sql = String::from(
            "SELECT id, account_id, amount, category, date_received, payer FROM income
             WHERE user_id=?1 AND is_deleted=0",
        );
        if since.is_some() {
            sql.push_str(" AND date_received>=?2");
        }
        sql.push_str(" ORDER BY date_received DESC, id DESC");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = match since {
            Some(d) => stmt.query(params![user_id, d])?,
            None => stmt.query(params![user_id])?,
        };
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(Income {
                id: r.get(0)?,
                account_id: r.get(1)?,
                amount: parse_amount("income", &r.get::<_, String>(2)?)?,
                category: r.get(3)?,
                date_received: r.get(4)?,
                payer: r.get(5)?,
            });
        }
        Ok(out)
    }

    /// Expense rows, newest first; optionally only those dated on or
    /// after `since`.
    pub fn expenses_for_user(&self, user_id: i64, since: Option<NaiveDate>) -> Result<Vec<Expense>> {
        let mut sql = String::from(
            "SELECT id, account_id, amount, category, expense_type, date_spent, seller FROM expenses
             WHERE user_id=?1 AND is_deleted=0",
        );
        if since.is_some() {
            sql.push_str(" AND date_spent>=?2");
        }
        sql.push_str(" ORDER BY date_spent DESC, id DESC");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = match since {
            Some(d) => stmt.query(params![user_id, d])?,
            None => stmt.query(params![user_id])?,
        };
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            let kind: Option<String> = r.get(4)?;
            out.push(Expense {
                id: r.get(0)?,
                account_id: r.get(1)?,
                amount: parse_amount("expenses", &r.get::<_, String>(2)?)?,
                category: r.get(3)?,
                expense_type: kind.as_deref().and_then(ExpenseType::parse),
                date_spent: r.get(5)?,
                seller: r.get(6)?,
            });
        }
        Ok(out)
    }

    pub fn budgets_for_user(&self, user_id: i64) -> Result<Vec<Budget>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, limit_amount, period_start, period_end, alert_threshold
             FROM budgets WHERE user_id=?1 AND is_deleted=0 ORDER BY period_start, name, id",
        )?;
        let mut rows = stmt.query(params![user_id])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(Budget {
                id: r.get(0)?,
                name: r.get(1)?,
                category: r.get(2)?,
                limit_amount: parse_amount("budgets", &r.get::<_, String>(3)?)?,
                period_start: r.get(4)?,
                period_end: r.get(5)?,
                alert_threshold: parse_amount("budgets", &r.get::<_, String>(6)?)?,
            });
        }
        Ok(out)
    }

    pub fn goals_for_user(&self, user_id: i64) -> Result<Vec<Goal>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, category, priority, target_amount, current_amount, target_date
             FROM goals WHERE user_id=?1 AND is_deleted=0 ORDER BY name, id",
        )?;
        let mut rows = stmt.query(params![user_id])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            out.push(Goal {
                id: r.get(0)?,
                name: r.get(1)?,
                category: r.get(2)?,
                priority: r.get(3)?,
                target_amount: parse_amount("goals", &r.get::<_, String>(4)?)?,
                current_amount: parse_amount("goals", &r.get::<_, String>(5)?)?,
                target_date: r.get(6)?,
            });
        }
        Ok(out)
    }

    pub fn credit_cards_for_user(&self, user_id: i64) -> Result<Vec<CreditCard>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, card_name, bank_name, credit_limit, current_balance,
                    next_payment_amount, next_payment_date
             FROM credit_cards WHERE user_id=?1 AND is_deleted=0 ORDER BY card_name, id",
        )?;
        let mut rows = stmt.query(params![user_id])?;
        let mut out = Vec::new();
        while let Some(r) = rows.next()? {
            let next_amount: Option<String> = r.get(5)?;
            out.push(CreditCard {
                id: r.get(0)?,
                card_name: r.get(1)?,
                bank_name: r.get(2)?,
                credit_limit: parse_amount("credit_cards", &r.get::<_, String>(3)?)?,
                current_balance: parse_amount("credit_cards", &r.get::<_, String>(4)?)?,
                next_payment_amount: match next_amount {
                    Some(s) => Some(parse_amount("credit_cards", &s)?),
                    None => None,
                },
                next_payment_date: r.get(6)?,
            });
        }
        Ok(out)
    }
}
