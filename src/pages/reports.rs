//! Reports page: category and monthly expense breakdowns.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::net::types::{category_totals_sorted, monthly_totals_sorted};
use crate::state::session::Session;

/// Expense breakdowns fetched on mount, plus an on-demand category
/// breakdown for an arbitrary date range.
#[component]
pub fn ReportsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let reports = LocalResource::new(move || {
        let token = session.get().token().map(str::to_owned);
        async move {
            let token = token?;
            crate::net::api::fetch_reports(&token).await
        }
    });

    let range_start = RwSignal::new(String::new());
    let range_end = RwSignal::new(String::new());
    let range_loading = RwSignal::new(false);
    let range_totals = RwSignal::new(Option::<HashMap<String, f64>>::None);
    let error = RwSignal::new(String::new());

    let fetch_range = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let start = range_start.get();
        let end = range_end.get();
        if start.is_empty() || end.is_empty() {
            error.set("Please choose both start and end dates.".to_owned());
            return;
        }
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            range_loading.set(true);
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().token().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::fetch_range_category_summary(&token, &start, &end).await
                {
                    Some(totals) => range_totals.set(Some(totals)),
                    None => {
                        error.set("Failed to fetch range data.".to_owned());
                        range_totals.set(None);
                    }
                }
                range_loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (start, end);
        }
    };

    view! {
        <div class="page">
            <h1>"Reports"</h1>

            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading reports..."</p> }>
                {move || {
                    reports
                        .get()
                        .map(|loaded| match loaded {
                            Some((by_category, by_month)) => view! {
                                <div class="reports-grid">
                                    <TotalsPanel
                                        title="Spending by Category"
                                        entries=category_totals_sorted(&by_category)
                                    />
                                    <TotalsPanel
                                        title="Monthly Expense Totals"
                                        entries=monthly_totals_sorted(&by_month)
                                    />
                                </div>
                            }
                                .into_any(),
                            None => view! {
                                <p class="page__error">
                                    "Failed to load reports. Check backend connection."
                                </p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>

            <div class="panel">
                <h2>"Category Breakdown for a Range"</h2>
                <form class="filter-form" on:submit=fetch_range>
                    <label>
                        "Start"
                        <input
                            type="date"
                            prop:value=move || range_start.get()
                            on:input=move |ev| range_start.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "End"
                        <input
                            type="date"
                            prop:value=move || range_end.get()
                            on:input=move |ev| range_end.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Fetch"
                    </button>
                </form>
                {move || {
                    if range_loading.get() {
                        view! { <p>"Loading range data..."</p> }.into_any()
                    } else {
                        match range_totals.get() {
                            Some(totals) => view! {
                                <TotalsPanel
                                    title="Spending in Range"
                                    entries=category_totals_sorted(&totals)
                                />
                            }
                                .into_any(),
                            None => ().into_any(),
                        }
                    }
                }}
            </div>
        </div>
    }
}

/// Simple name/amount table for one breakdown.
#[component]
fn TotalsPanel(
    #[prop(into)] title: String,
    entries: Vec<(String, f64)>,
) -> impl IntoView {
    view! {
        <div class="panel">
            <h2>{title}</h2>
            {if entries.is_empty() {
                view! { <p>"No data"</p> }.into_any()
            } else {
                view! {
                    <table class="data-table">
                        <tbody>
                            {entries
                                .into_iter()
                                .map(|(name, total)| {
                                    view! {
                                        <tr>
                                            <td>{name}</td>
                                            <td class="amount--debit">
                                                {format!("{total:.2}")}
                                            </td>
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
