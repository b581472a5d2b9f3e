// Copyright (c) Finsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::summary::FinancialSummary;
use rust_decimal::Decimal;

/// Currency label used throughout the digest.
pub const CURRENCY: &str = "RM";

fn money(d: Decimal) -> String {
    format!("{} {:.2}", CURRENCY, d)
}

fn pct(d: Decimal) -> String {
    format!("{:.1}%", d)
}

/// Render the aggregate record into the fixed-section text digest fed
/// to the assistant. Pure and deterministic: identical input yields
/// byte-identical output. Sections with no underlying data are omitted.
pub fn format_context(summary: &FinancialSummary) -> String {
    let mut blocks: Vec<String> = Vec::new();

    let acc = &summary.accounts;
    if !acc.accounts.is_empty() {
        let mut lines = vec![
            "ACCOUNTS".to_string(),
            format!(
                "Total balance across {} accounts: {}",
                acc.total_count,
                money(acc.total_balance)
            ),
        ];
        for a in &acc.accounts {
            lines.push(format!(
                "- {} ({}): {}",
                a.account_name,
                a.account_type,
                money(a.balance)
            ));
        }
        blocks.push(lines.join("\n"));
    }

    let tx = &summary.transactions;
    if tx.recent_income + tx.recent_expenses > 0 {
        blocks.push(
            [
                "TRANSACTIONS".to_string(),
                format!(
                    "Last 90 days: {} income, {} expense transactions",
                    tx.recent_income, tx.recent_expenses
                ),
                format!("Net cash flow (90 days): {}", money(tx.net_flow_90d)),
            ]
            .join("\n"),
        );
    }

    let sp = &summary.spending_summary;
    if !sp.by_category.is_empty() {
        let mut lines = vec![
            "SPENDING".to_string(),
            format!(
                "Total spending (last 30 days): {}",
                money(sp.total_spending)
            ),
        ];
        let mut cats: Vec<(&String, &Decimal)> = sp.by_category.iter().collect();
        cats.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (cat, amount) in cats {
            lines.push(format!("- {}: {}", cat, money(*amount)));
        }
        if !sp.needs_vs_wants.is_empty() {
            lines.push("Needs vs wants:".to_string());
            for key in ["needs", "wants"] {
                if let Some(amount) = sp.needs_vs_wants.get(key) {
                    lines.push(format!("- {}: {}", key, money(*amount)));
                }
            }
        }
        blocks.push(lines.join("\n"));
    }

    let bg = &summary.budgets;
    if !bg.budgets.is_empty() {
        let mut lines = vec![
            "BUDGETS".to_string(),
            format!(
                "{} active, {} over budget",
                bg.active_count, bg.over_budget_count
            ),
        ];
        for b in &bg.budgets {
            let status = if b.is_over_budget {
                "OVER BUDGET"
            } else if b.is_near_limit {
                "NEAR LIMIT"
            } else {
                "OK"
            };
            lines.push(format!(
                "- {} ({}): {} / {} ({} used) - {}",
                b.name,
                b.category,
                money(b.spent_amount),
                money(b.limit_amount),
                pct(b.percentage_used),
                status
            ));
        }
        blocks.push(lines.join("\n"));
    }

    let gl = &summary.goals;
    if !gl.goals.is_empty() {
        let mut lines = vec![
            "GOALS".to_string(),
            format!("{} total, {} completed", gl.total_count, gl.completed_count),
        ];
        for g in &gl.goals {
            let status = if g.is_completed {
                "COMPLETED"
            } else {
                "IN PROGRESS"
            };
            lines.push(format!(
                "- {} ({}, {} priority): {} / {} ({}) - {}",
                g.name,
                g.category,
                g.priority,
                money(g.current_amount),
                money(g.target_amount),
                pct(g.progress_percentage),
                status
            ));
            if let (Some(date), Some(days)) = (g.target_date, g.days_remaining) {
                lines.push(format!("  Target {}, {} days remaining", date, days));
            }
        }
        blocks.push(lines.join("\n"));
    }

    let cc = &summary.credit_cards;
    if !cc.cards.is_empty() {
        let mut lines = vec![
            "CREDIT CARDS".to_string(),
            format!(
                "{} cards, {} total utilization",
                cc.total_count,
                pct(cc.total_utilization)
            ),
        ];
        for c in &cc.cards {
            lines.push(format!(
                "- {} ({}): {} / {} ({} utilization)",
                c.card_name,
                c.bank_name,
                money(c.current_balance),
                money(c.credit_limit),
                pct(c.utilization_percentage)
            ));
            if let Some(date) = c.next_payment_date {
                match c.next_payment_amount {
                    Some(amount) => {
                        lines.push(format!("  Next payment {} on {}", money(amount), date))
                    }
                    None => lines.push(format!("  Next payment due {}", date)),
                }
            }
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}
