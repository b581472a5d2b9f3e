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
pub struct CardStatus {
    pub card_id: i64,
    pub card_name: String,
    pub bank_name: String,
    pub credit_limit: Decimal,
    pub current_balance: Decimal,
    /// 0 when the card has no limit set.
    pub utilization_percentage: Decimal,
    pub next_payment_amount: Option<Decimal>,
    pub next_payment_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditCardsSection {
    pub total_count: usize,
    /// Aggregate utilization over cards with a nonzero limit; 0 when
    /// none qualify.
    pub total_utilization: Decimal,
    pub cards: Vec<CardStatus>,
}

pub fn card_status(ledger: &Ledger, user_id: i64) -> Result<CreditCardsSection> {
    ledger.require_user(user_id)?;

    let cards = ledger.credit_cards_for_user(user_id)?;
    let mut out = Vec::with_capacity(cards.len());
    let mut balance_sum = Decimal::ZERO;
    let mut limit_sum = Decimal::ZERO;
    for c in cards {
        let utilization = if c.credit_limit.is_zero() {
            Decimal::ZERO
        } else {
            balance_sum += c.current_balance;
            limit_sum += c.credit_limit;
            c.current_balance / c.credit_limit * Decimal::ONE_HUNDRED
        };
        out.push(CardStatus {
            card_id: c.id,
            card_name: c.card_name,
            bank_name: c.bank_name,
            credit_limit: c.credit_limit,
            current_balance: c.current_balance,
            utilization_percentage: utilization,
            next_payment_amount: c.next_payment_amount,
            next_payment_date: c.next_payment_date,
        });
    }
    let total_utilization = if limit_sum.is_zero() {
        Decimal::ZERO
    } else {
        balance_sum / limit_sum * Decimal::ONE_HUNDRED
    };

    Ok(CreditCardsSection {
        total_count: out.len(),
        total_utilization,
        cards: out,
    })
}
