//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::protected::ProtectedLayout;
use crate::pages::{
    dashboard::DashboardPage, expenses::ExpensesPage, login::LoginPage, profile::ProfilePage,
    register::RegisterPage, reports::ReportsPage, summary::SummaryPage,
    transactions::TransactionsPage,
};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, kicks off the one-time token restoration,
/// and sets up client-side routing. Everything under the parent route is
/// gated by [`ProtectedLayout`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    // One-time restoration of the persisted token. Effects only run in the
    // browser, so this happens after hydration, where localStorage exists.
    Effect::new(move || {
        session.update(Session::restore);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/fintrack.css"/>
        <Title text="Finance Tracker"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path="/dashboard"/> }
                    />
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("expenses") view=ExpensesPage/>
                    <Route path=StaticSegment("transactions") view=TransactionsPage/>
                    <Route path=StaticSegment("reports") view=ReportsPage/>
                    <Route path=StaticSegment("summary") view=SummaryPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
