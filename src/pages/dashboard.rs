//! Dashboard page: overall totals plus this month's most recent activity.

use leptos::prelude::*;

use crate::components::summary_cards::SummaryCards;
use crate::net::types::{Transaction, newest_first};
use crate::state::session::Session;
use crate::util::dates;

/// Default landing view after login.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    // Summary and recent transactions load as one all-or-nothing batch.
    let data = LocalResource::new(move || {
        let token = session.get().token().map(str::to_owned);
        async move {
            let token = token?;
            let (start, end) = dates::current_month_so_far();
            let (summary, txns) =
                crate::net::api::fetch_dashboard(&token, &start, &end).await?;
            let recent: Vec<Transaction> =
                newest_first(txns).into_iter().take(5).collect();
            Some((summary, recent))
        }
    });

    view! {
        <div class="page">
            <h1>"Dashboard"</h1>
            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    data.get()
                        .map(|loaded| match loaded {
                            Some((summary, recent)) => view! {
                                <SummaryCards summary=summary/>
                                <RecentTransactions transactions=recent/>
                            }
                                .into_any(),
                            None => view! {
                                <p class="page__error">"Failed to load dashboard data."</p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

/// Table of the five most recent transactions this month.
#[component]
fn RecentTransactions(transactions: Vec<Transaction>) -> impl IntoView {
    view! {
        <div class="panel">
            <h2>"Recent Transactions"</h2>
            {if transactions.is_empty() {
                view! { <p>"No recent transactions found."</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Description"</th>
                                <th>"Category"</th>
                                <th>"Amount"</th>
                                <th>"Type"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {transactions
                                .into_iter()
                                .map(|t| {
                                    let amount_class = match t.kind {
                                        crate::net::types::TxnKind::Credit => "amount--credit",
                                        crate::net::types::TxnKind::Debit => "amount--debit",
                                    };
                                    view! {
                                        <tr>
                                            <td>{t.date.clone()}</td>
                                            <td>
                                                {t.description.clone().unwrap_or_else(|| "-".to_owned())}
                                            </td>
                                            <td>
                                                {t.category
                                                    .as_ref()
                                                    .map_or_else(|| "-".to_owned(), |c| c.name.clone())}
                                            </td>
                                            <td class=amount_class>{format!("{:.2}", t.amount)}</td>
                                            <td>{t.kind.label()}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                    .into_any()
            }}
        </div>
    }
}
