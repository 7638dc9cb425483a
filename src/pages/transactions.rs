//! Transactions page: add form, date-range filter, listing, delete.

use leptos::prelude::*;

use crate::net::types::{Category, NewTransaction, Transaction, TxnKind, newest_first};
use crate::state::session::Session;

/// Income/expense transaction CRUD over `/transactions`.
///
/// The listing only loads once a full date-range filter is applied, matching
/// the backend's range query. Mutations refetch the current range.
#[component]
pub fn TransactionsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let categories = LocalResource::new(move || {
        let token = session.get().token().map(str::to_owned);
        async move {
            match token {
                Some(t) => crate::net::api::fetch_categories(&t).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    // Add form fields.
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let kind = RwSignal::new("debit".to_owned());
    let category_id = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());

    // Filter and listing state.
    let filter_start = RwSignal::new(String::new());
    let filter_end = RwSignal::new(String::new());
    let filter_applied = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let transactions = RwSignal::new(Vec::<Transaction>::new());

    // Fetch the given range into the listing. A partial range is a no-op, so
    // refetch-after-mutation does nothing until a filter has been applied.
    let load = move |start: String, end: String| {
        #[cfg(feature = "hydrate")]
        {
            if start.is_empty() || end.is_empty() {
                return;
            }
            let Some(token) = session.get_untracked().token().map(str::to_owned) else {
                return;
            };
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_transactions(&token, &start, &end).await {
                    Some(list) => {
                        transactions.set(newest_first(list));
                        filter_applied.set(true);
                    }
                    None => error.set("Failed to fetch transactions.".to_owned()),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (start, end);
        }
    };

    let apply_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let start = filter_start.get();
        let end = filter_end.get();
        if start.is_empty() || end.is_empty() {
            error.set("Please select both start and end dates.".to_owned());
            return;
        }
        error.set(String::new());
        load(start, end);
    };

    let clear_filter = move |_| {
        filter_start.set(String::new());
        filter_end.set(String::new());
        transactions.set(Vec::new());
        filter_applied.set(false);
        error.set(String::new());
    };

    let add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let desc = description.get().trim().to_owned();
        let raw_amount = amount.get();
        let when = date.get();
        if desc.is_empty() || raw_amount.is_empty() || when.is_empty() {
            error.set("Please fill description, amount, and date.".to_owned());
            return;
        }
        let Ok(parsed) = raw_amount.parse::<f64>() else {
            error.set("Amount must be a number.".to_owned());
            return;
        };
        let body = NewTransaction {
            description: desc,
            amount: parsed,
            kind: if kind.get() == "credit" {
                TxnKind::Credit
            } else {
                TxnKind::Debit
            },
            date: when,
        };
        let category = category_id.get().parse::<i64>().ok();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = session.get_untracked().token().map(str::to_owned) else {
                return;
            };
            match crate::net::api::add_transaction(&token, &body, category).await {
                Ok(()) => {
                    description.set(String::new());
                    amount.set(String::new());
                    kind.set("debit".to_owned());
                    category_id.set(String::new());
                    date.set(String::new());
                    error.set(String::new());
                    load(filter_start.get_untracked(), filter_end.get_untracked());
                }
                Err(msg) => error.set(msg),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, category);
        }
    };

    let delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Are you sure you want to delete this transaction?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                let Some(token) = session.get_untracked().token().map(str::to_owned) else {
                    return;
                };
                match crate::net::api::delete_transaction(&token, id).await {
                    Ok(()) => load(filter_start.get_untracked(), filter_end.get_untracked()),
                    Err(msg) => error.set(msg),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="page">
            <h1>"My Transactions"</h1>

            <form class="record-form" on:submit=add>
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || kind.get()
                    on:change=move |ev| kind.set(event_target_value(&ev))
                >
                    <option value="debit">"Expense"</option>
                    <option value="credit">"Income"</option>
                </select>
                <select
                    prop:value=move || category_id.get()
                    on:change=move |ev| category_id.set(event_target_value(&ev))
                >
                    <option value="">"Select Category"</option>
                    {move || {
                        categories
                            .get()
                            .map(|cats| {
                                cats.into_iter()
                                    .map(|c: Category| {
                                        view! {
                                            <option value=c.id.to_string()>{c.name}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>
                <input
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Add Transaction"
                </button>
            </form>

            <form class="filter-form" on:submit=apply_filter>
                <label>
                    "Start"
                    <input
                        type="date"
                        prop:value=move || filter_start.get()
                        on:input=move |ev| filter_start.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "End"
                    <input
                        type="date"
                        prop:value=move || filter_end.get()
                        on:input=move |ev| filter_end.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit">
                    "Apply"
                </button>
                <button class="btn" type="button" on:click=clear_filter>
                    "Clear"
                </button>
            </form>

            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>

            {move || {
                if !filter_applied.get() {
                    view! { <p class="page__hint">"Use the filter to view transactions."</p> }
                        .into_any()
                } else if loading.get() {
                    view! { <p>"Loading transactions..."</p> }.into_any()
                } else if transactions.get().is_empty() {
                    view! { <p>"No transactions found in this range."</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Description"</th>
                                    <th>"Amount"</th>
                                    <th>"Type"</th>
                                    <th>"Category"</th>
                                    <th>"Date"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {transactions
                                    .get()
                                    .into_iter()
                                    .map(|t| {
                                        let id = t.id;
                                        let amount_class = match t.kind {
                                            TxnKind::Credit => "amount--credit",
                                            TxnKind::Debit => "amount--debit",
                                        };
                                        view! {
                                            <tr>
                                                <td>
                                                    {t.description
                                                        .clone()
                                                        .unwrap_or_else(|| "-".to_owned())}
                                                </td>
                                                <td class=amount_class>
                                                    {format!("{:.2}", t.amount)}
                                                </td>
                                                <td>{t.kind.label()}</td>
                                                <td>
                                                    {t.category
                                                        .as_ref()
                                                        .map_or_else(
                                                            || "N/A".to_owned(),
                                                            |c| c.name.clone(),
                                                        )}
                                                </td>
                                                <td>{t.date.clone()}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| delete(id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
