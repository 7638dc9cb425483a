//! Reusable income/expense/balance card row.

use leptos::prelude::*;

use crate::net::types::TransactionSummary;

/// Three summary cards: total income, total expense, net balance.
#[component]
pub fn SummaryCards(summary: TransactionSummary) -> impl IntoView {
    let balance_class = if summary.balance >= 0.0 {
        "summary-card__value summary-card__value--positive"
    } else {
        "summary-card__value summary-card__value--negative"
    };

    view! {
        <div class="summary-cards">
            <div class="summary-card">
                <h2>"Total Income"</h2>
                <p class="summary-card__value summary-card__value--income">
                    {format!("{:.2}", summary.income)}
                </p>
            </div>
            <div class="summary-card">
                <h2>"Total Expense"</h2>
                <p class="summary-card__value summary-card__value--expense">
                    {format!("{:.2}", summary.expense)}
                </p>
            </div>
            <div class="summary-card">
                <h2>"Net Balance"</h2>
                <p class=balance_class>{format!("{:.2}", summary.balance)}</p>
            </div>
        </div>
    }
}
