// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finsight::engine::{context, summary};
use finsight::error::EngineError;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = finsight::db::open_in_memory().unwrap();
    seed_user(&conn);
    conn
}

fn seed_user(conn: &Connection) {
    conn.execute(
        "INSERT INTO users(id, email, display_name) VALUES (1, 'jo@example.com', 'Jo')",
        [],
    )
    .unwrap();
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
}

fn add_income(conn: &Connection, amount: &str, date: &str) {
    conn.execute(
        "INSERT INTO income(user_id, account_id, amount, date_received, payer)
         VALUES (1, 1, ?1, ?2, 'Payer')",
        params![amount, date],
    )
    .unwrap();
}

fn add_expense(conn: &Connection, amount: &str, category: &str, date: &str) {
    conn.execute(
        "INSERT INTO expenses(user_id, account_id, amount, category, date_spent, seller)
         VALUES (1, 1, ?1, ?2, ?3, 'Seller')",
        params![amount, category, date],
    )
    .unwrap();
}

fn seed_ledger(conn: &Connection) {
    conn.execute(
        "INSERT INTO accounts(id, user_id, name, type) VALUES (1, 1, 'Main', 'savings')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO balance_snapshots(account_id, amount, as_of) VALUES (1, '1000.00', '2025-08-01')",
        [],
    )
    .unwrap();
    add_income(conn, "5500.00", "2025-08-10");
    add_expense(conn, "45.00", "Food & Dining", "2025-08-14");
    conn.execute(
        "INSERT INTO budgets(user_id, name, category, limit_amount, period_start, period_end, alert_threshold)
         VALUES (1, 'Dining', 'Food & Dining', '500.00', '2025-08-01', '2025-08-31', '80')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO goals(user_id, name, category, priority, target_amount, current_amount)
         VALUES (1, 'Emergency Fund', 'Savings', 'High', '30000.00', '15000.00')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO credit_cards(user_id, card_name, bank_name, credit_limit, current_balance)
         VALUES (1, 'Visa', 'Bank', '50000.00', '12500.00')",
        [],
    )
    .unwrap();
}

#[test]
fn empty_user_yields_empty_sections_not_errors() {
    let conn = setup();
    let s = summary::build_as_of(&conn, 1, today()).unwrap();

    assert_eq!(s.accounts.total_count, 0);
    assert_eq!(s.accounts.total_balance, Decimal::ZERO);
    assert_eq!(s.transactions.recent_income, 0);
    assert_eq!(s.transactions.net_flow_90d, Decimal::ZERO);
    assert!(s.spending_summary.by_category.is_empty());
    assert_eq!(s.budgets.active_count, 0);
    assert_eq!(s.goals.total_count, 0);
    assert_eq!(s.credit_cards.total_count, 0);
    assert_eq!(context::format_context(&s), "");
}

#[test]
fn summary_record_has_the_fixed_key_set() {
    let conn = setup();
    let s = summary::build_as_of(&conn, 1, today()).unwrap();
    let value = serde_json::to_value(&s).unwrap();
    let obj = value.as_object().unwrap();
    for key in [
        "accounts",
        "transactions",
        "spending_summary",
        "budgets",
        "goals",
        "credit_cards",
    ] {
        assert!(obj.contains_key(key), "missing key {}", key);
    }
    // Empty sub-collections are present, never absent.
    assert!(value["accounts"]["accounts"].as_array().unwrap().is_empty());
}

#[test]
fn net_flow_uses_the_fixed_ninety_day_window() {
    let conn = setup();
    conn.execute(
        "INSERT INTO accounts(id, user_id, name, type) VALUES (1, 1, 'Main', 'savings')",
        [],
    )
    .unwrap();
    add_income(&conn, "5500.00", "2025-08-10");
    add_expense(&conn, "45.00", "Food & Dining", "2025-08-14");
    // 120 days back: outside the net-flow window.
    add_income(&conn, "100.00", "2025-04-17");

    let s = summary::build_as_of(&conn, 1, today()).unwrap();
    assert_eq!(s.transactions.recent_income, 1);
    assert_eq!(s.transactions.recent_expenses, 1);
    assert_eq!(s.transactions.net_flow_90d, Decimal::from(5455));
}

#[test]
fn building_twice_is_idempotent() {
    let conn = setup();
    seed_ledger(&conn);

    let first = summary::build_as_of(&conn, 1, today()).unwrap();
    let second = summary::build_as_of(&conn, 1, today()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        context::format_context(&first),
        context::format_context(&second)
    );
}

#[test]
fn unknown_user_aborts_the_build() {
    let conn = setup();
    let err = summary::build_as_of(&conn, 42, today()).unwrap_err();
    assert!(matches!(err, EngineError::UserNotFound(42)));
}

#[test]
fn file_backed_store_behaves_like_memory() {
    let dir = tempfile::tempdir().unwrap();
    let conn = finsight::db::open(&dir.path().join("ledger.sqlite")).unwrap();
    seed_user(&conn);
    seed_ledger(&conn);

    let s = summary::build_as_of(&conn, 1, today()).unwrap();
    // 1000 snapshot + 5500 income - 45 expense
    assert_eq!(s.accounts.total_balance, Decimal::from(6455));
    assert_eq!(s.budgets.active_count, 1);
    assert_eq!(s.credit_cards.total_utilization, Decimal::from(25));
}
