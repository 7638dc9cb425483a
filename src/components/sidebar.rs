//! Navigation sidebar for the authenticated area.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Sidebar with links to each page and a logout button.
///
/// Logout clears the session first, then navigates; the state mutation never
/// depends on the navigation going through.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.update(Session::logout);
        navigate(
            "/login",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <aside class="sidebar">
            <h1 class="sidebar__title">"Finance Tracker"</h1>
            <nav class="sidebar__nav">
                <a href="/dashboard">"Dashboard"</a>
                <a href="/expenses">"Expenses"</a>
                <a href="/transactions">"Transactions"</a>
                <a href="/reports">"Reports"</a>
                <a href="/summary">"Summary"</a>
                <a href="/profile">"Profile"</a>
            </nav>
            <button class="btn sidebar__logout" on:click=on_logout>
                "Logout"
            </button>
        </aside>
    }
}
