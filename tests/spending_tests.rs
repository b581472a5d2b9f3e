// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finsight::engine::spending;
use finsight::store::Ledger;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

fn setup() -> Connection {
    let conn = finsight::db::open_in_memory().unwrap();
    conn.execute(
        "INSERT INTO users(id, email, display_name) VALUES (1, 'jo@example.com', 'Jo')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO accounts(id, user_id, name, type) VALUES (1, 1, 'Main', 'savings')",
        [],
    )
    .unwrap();
    conn
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
}

fn add_expense(conn: &Connection, amount: &str, category: Option<&str>, kind: Option<&str>, date: &str) {
    conn.execute(
        "INSERT INTO expenses(user_id, account_id, amount, category, expense_type, date_spent, seller)
         VALUES (1, 1, ?1, ?2, ?3, ?4, 'Seller')",
        params![amount, category, kind, date],
    )
    .unwrap();
}

#[test]
fn single_expense_lands_in_its_category() {
    let conn = setup();
    add_expense(&conn, "45.00", Some("Food & Dining"), Some("needs"), "2025-08-15");

    let s = spending::spending_summary(&Ledger::new(&conn), 1, today(), 30).unwrap();
    assert_eq!(s.by_category["Food & Dining"], Decimal::from(45));
    assert_eq!(s.total_spending, Decimal::from(45));
}

#[test]
fn category_sums_match_total_spending() {
    let conn = setup();
    add_expense(&conn, "45.00", Some("Food & Dining"), Some("needs"), "2025-08-15");
    add_expense(&conn, "30.00", Some("Food & Dining"), Some("needs"), "2025-08-10");
    add_expense(&conn, "120.00", Some("Shopping"), Some("wants"), "2025-08-12");
    add_expense(&conn, "15.00", None, None, "2025-08-14");
    add_expense(&conn, "5.00", Some(""), None, "2025-08-13");

    let s = spending::spending_summary(&Ledger::new(&conn), 1, today(), 30).unwrap();
    let by_cat_sum: Decimal = s.by_category.values().copied().sum();
    assert_eq!(by_cat_sum, s.total_spending);
    assert_eq!(s.total_spending, Decimal::from(215));
    // Blank and missing categories share the sentinel bucket.
    assert_eq!(s.by_category["Uncategorized"], Decimal::from(20));
}

#[test]
fn needs_vs_wants_carries_only_present_keys() {
    let conn = setup();
    add_expense(&conn, "45.00", Some("Food & Dining"), Some("needs"), "2025-08-15");
    add_expense(&conn, "15.00", Some("Shopping"), None, "2025-08-14");

    let s = spending::spending_summary(&Ledger::new(&conn), 1, today(), 30).unwrap();
    assert_eq!(s.needs_vs_wants.len(), 1);
    assert_eq!(s.needs_vs_wants["needs"], Decimal::from(45));
    // Unclassified spend still counts toward the total.
    assert_eq!(s.total_spending, Decimal::from(60));
}

#[test]
fn window_excludes_older_expenses() {
    let conn = setup();
    add_expense(&conn, "45.00", Some("Food & Dining"), None, "2025-08-15");
    add_expense(&conn, "500.00", Some("Travel"), None, "2025-06-01");

    let s = spending::spending_summary(&Ledger::new(&conn), 1, today(), 30).unwrap();
    assert_eq!(s.total_spending, Decimal::from(45));
    assert!(!s.by_category.contains_key("Travel"));
}
