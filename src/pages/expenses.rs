//! Expenses page: add form, date-range filter, listing, delete.

use leptos::prelude::*;

use crate::net::types::{Category, Expense, NewExpense, newest_first};
use crate::state::session::Session;

/// Categorized expense CRUD over `/expenses`.
#[component]
pub fn ExpensesPage() -> impl IntoView {
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

    // Add form fields. Expenses carry the category as a plain name.
    let title = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());

    let filter_start = RwSignal::new(String::new());
    let filter_end = RwSignal::new(String::new());
    let filter_applied = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let expenses = RwSignal::new(Vec::<Expense>::new());

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
                match crate::net::api::fetch_expenses(&token, &start, &end).await {
                    Some(list) => {
                        expenses.set(newest_first(list));
                        filter_applied.set(true);
                    }
                    None => error.set("Failed to fetch expenses.".to_owned()),
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
        expenses.set(Vec::new());
        filter_applied.set(false);
        error.set(String::new());
    };

    let add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = title.get().trim().to_owned();
        let raw_amount = amount.get();
        let when = date.get();
        if name.is_empty() || raw_amount.is_empty() || when.is_empty() {
            error.set("Please fill title, amount, and date.".to_owned());
            return;
        }
        let Ok(parsed) = raw_amount.parse::<f64>() else {
            error.set("Amount must be a number.".to_owned());
            return;
        };
        let body = NewExpense {
            title: name,
            amount: parsed,
            category: category.get(),
            date: when,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = session.get_untracked().token().map(str::to_owned) else {
                return;
            };
            match crate::net::api::add_expense(&token, &body).await {
                Ok(()) => {
                    title.set(String::new());
                    amount.set(String::new());
                    category.set(String::new());
                    date.set(String::new());
                    error.set(String::new());
                    load(filter_start.get_untracked(), filter_end.get_untracked());
                }
                Err(msg) => error.set(msg),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
        }
    };

    let delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Are you sure you want to delete this expense?")
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
                match crate::net::api::delete_expense(&token, id).await {
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
            <h1>"My Expenses"</h1>

            <form class="record-form" on:submit=add>
                <input
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"Select Category"</option>
                    {move || {
                        categories
                            .get()
                            .map(|cats| {
                                cats.into_iter()
                                    .map(|c: Category| {
                                        let name = c.name;
                                        view! {
                                            <option value=name.clone()>{name.clone()}</option>
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
                    "Add Expense"
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
                    view! { <p class="page__hint">"Use the filter to view expenses."</p> }
                        .into_any()
                } else if loading.get() {
                    view! { <p>"Loading expenses..."</p> }.into_any()
                } else if expenses.get().is_empty() {
                    view! { <p>"No expenses found in this range."</p> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Amount"</th>
                                    <th>"Category"</th>
                                    <th>"Date"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {expenses
                                    .get()
                                    .into_iter()
                                    .map(|e| {
                                        let id = e.id;
                                        view! {
                                            <tr>
                                                <td>{e.title.clone()}</td>
                                                <td class="amount--debit">
                                                    {format!("{:.2}", e.amount)}
                                                </td>
                                                <td>
                                                    {e.category
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_owned())}
                                                </td>
                                                <td>{e.date.clone()}</td>
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
