//! Login page with credential form and already-authenticated forwarding.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Login page.
///
/// A successful exchange hands the token to the session; the forwarding
/// effect then navigates to the dashboard. The same effect keeps an
/// already-authenticated visitor from ever seeing the form.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    // Inverse of the route guard: a logged-in visitor is sent forward to the
    // default landing view, replacing history.
    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate(
                "/dashboard",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        let user = username.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            error.set("Username and password are required.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&user, &pass).await {
                Ok(token) => {
                    session.update(|s| s.login(&token));
                    // Best-effort; login already succeeded.
                    if crate::net::api::fetch_profile(&token).await.is_none() {
                        log::warn!("profile fetch after login failed");
                    }
                }
                Err(msg) => error.set(msg),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass);
        }
    };

    view! {
        <div class="auth-page">
            {move || {
                let state = session.get();
                if !state.ready() {
                    view! { <div class="interstitial">"Checking authentication..."</div> }
                        .into_any()
                } else if state.is_authenticated() {
                    // The forwarding effect is about to navigate.
                    ().into_any()
                } else {
                    view! {
                        <div class="auth-card">
                            <h1>"Finance Tracker"</h1>
                            <p class="auth-card__subtitle">"Login to your account"</p>
                            <Show when=move || !error.get().is_empty()>
                                <div class="auth-card__error">{move || error.get()}</div>
                            </Show>
                            <form class="auth-card__form" on:submit=submit>
                                <label class="auth-card__label">
                                    "Username"
                                    <input
                                        type="text"
                                        placeholder="Enter your username"
                                        prop:value=move || username.get()
                                        on:input=move |ev| username.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="auth-card__label">
                                    "Password"
                                    <input
                                        type="password"
                                        placeholder="Enter your password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                    />
                                </label>
                                <button class="btn btn--primary" type="submit">
                                    "Sign In"
                                </button>
                            </form>
                            <p class="auth-card__footer">
                                "Don't have an account? "
                                <a href="/register">"Register here"</a>
                            </p>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
