// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub r#type: String,
    pub subtype: Option<String>,
    /// Backing credit card, when this account fronts one.
    pub card_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub id: i64,
    pub account_id: i64,
    pub amount: Decimal,
    pub as_of: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub account_id: i64,
    pub amount: Decimal,
    pub category: Option<String>,
    pub date_received: NaiveDate,
    pub payer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub account_id: i64,
    pub amount: Decimal,
    pub category: Option<String>,
    pub expense_type: Option<ExpenseType>,
    pub date_spent: NaiveDate,
    pub seller: String,
}

/// Needs/wants classification on an expense. Absent or unrecognized
/// labels are read as unclassified, never coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    Needs,
    Wants,
}

impl ExpenseType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseType::Needs => "needs",
            ExpenseType::Wants => "wants",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "needs" => Some(ExpenseType::Needs),
            "wants" => Some(ExpenseType::Wants),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub limit_amount: Decimal, // > 0 by construction
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub alert_threshold: Decimal, // 0..=100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub priority: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: i64,
    pub card_name: String,
    pub bank_name: String,
    pub credit_limit: Decimal,
    pub current_balance: Decimal,
    pub next_payment_amount: Option<Decimal>,
    pub next_payment_date: Option<NaiveDate>,
}
