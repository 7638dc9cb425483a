//! Route guard for authenticated-only views.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::Sidebar;
use crate::state::session::Session;

/// Outcome of the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Restoration has not finished; show the interstitial, never navigate.
    Checking,
    /// Restored with no token; send the visitor to the login view.
    RedirectToLogin,
    /// Restored and holding a credential; render the requested view.
    Allow,
}

/// Decide the guard outcome for the current session state.
///
/// Pure function of the session; the guard itself holds no state. Redirects
/// are only ever emitted after restoration, so a returning authenticated
/// user is never flashed through the login page.
pub fn gate(session: &Session) -> Gate {
    if !session.ready() {
        Gate::Checking
    } else if session.is_authenticated() {
        Gate::Allow
    } else {
        Gate::RedirectToLogin
    }
}

/// Layout for the authenticated area: sidebar plus routed outlet, gated on
/// session state. The login redirect replaces history so the back button
/// cannot land inside the gated area.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if gate(&session.get()) == Gate::RedirectToLogin {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match gate(&session.get()) {
        Gate::Checking => {
            view! { <div class="interstitial">"Checking authentication..."</div> }.into_any()
        }
        Gate::RedirectToLogin => ().into_any(),
        Gate::Allow => view! {
            <div class="app-shell">
                <Sidebar/>
                <main class="app-shell__content">
                    <Outlet/>
                </main>
            </div>
        }
        .into_any(),
    }
}
