//! Monthly summary page with month-over-month comparison.

use leptos::prelude::*;

use crate::net::types::TransactionSummary;
use crate::state::session::Session;
use crate::util::dates;

/// Income/expense/balance for a chosen month, computed client-side from the
/// month's transactions, with percent change against the month before.
#[component]
pub fn SummaryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let month = RwSignal::new(dates::current_month_key());

    // Refetches whenever the selected month changes.
    let data = LocalResource::new(move || {
        let key = month.get();
        let token = session.get().token().map(str::to_owned);
        async move {
            let token = token?;
            let (year, m) = dates::parse_month_key(&key)?;
            let (start, end) = dates::month_bounds(year, m);
            let (prev_year, prev_month) = dates::previous_month(year, m);
            let (prev_start, prev_end) = dates::month_bounds(prev_year, prev_month);
            let (current, previous) = crate::net::api::fetch_month_comparison(
                &token,
                (&start, &end),
                (&prev_start, &prev_end),
            )
            .await?;
            Some((
                TransactionSummary::of(&current),
                TransactionSummary::of(&previous),
            ))
        }
    });

    view! {
        <div class="page">
            <h1>"Monthly Financial Summary"</h1>

            <label class="month-picker">
                "Select Month:"
                <input
                    type="month"
                    prop:value=move || month.get()
                    on:input=move |ev| month.set(event_target_value(&ev))
                />
            </label>

            <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                {move || {
                    data.get()
                        .map(|loaded| match loaded {
                            Some((current, previous)) => view! {
                                <div class="summary-cards">
                                    <ComparisonCard
                                        title="Income"
                                        value_class="summary-card__value--income"
                                        current=current.income
                                        previous=previous.income
                                        positive_is_good=true
                                    />
                                    <ComparisonCard
                                        title="Expense"
                                        value_class="summary-card__value--expense"
                                        current=current.expense
                                        previous=previous.expense
                                        positive_is_good=false
                                    />
                                    <ComparisonCard
                                        title="Balance"
                                        value_class="summary-card__value--balance"
                                        current=current.balance
                                        previous=previous.balance
                                        positive_is_good=true
                                    />
                                </div>
                            }
                                .into_any(),
                            None => view! {
                                <p class="page__error">"Failed to load summary data."</p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One card with the month's value and its change versus the prior month.
#[component]
fn ComparisonCard(
    title: &'static str,
    value_class: &'static str,
    current: f64,
    previous: f64,
    positive_is_good: bool,
) -> impl IntoView {
    let change = dates::percent_change(current, previous);
    let change_class = if change == 0.0 {
        "summary-card__change"
    } else if (change > 0.0) == positive_is_good {
        "summary-card__change summary-card__change--good"
    } else {
        "summary-card__change summary-card__change--bad"
    };
    let arrow = if change >= 0.0 { "\u{2191}" } else { "\u{2193}" };

    view! {
        <div class="summary-card">
            <h2>{title}</h2>
            <p class=format!("summary-card__value {value_class}")>
                {format!("{current:.2}")}
            </p>
            <p class=change_class>
                {format!("{arrow} {:.1}% vs last month", change.abs())}
            </p>
        </div>
    }
}
