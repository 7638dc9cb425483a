//! Registration page.

use leptos::prelude::*;

use crate::net::types::RegisterRequest;

/// Account creation form. On success shows a confirmation, then moves on to
/// the login page; backend validation messages surface inline.
#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());
        success.set(String::new());

        let body = RegisterRequest {
            username: username.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        if body.username.is_empty() || body.email.is_empty() || body.password.is_empty() {
            error.set("All fields are required.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&body).await {
                    Ok(()) => {
                        success.set(
                            "Registration successful! Redirecting to login...".to_owned(),
                        );
                        // Leave the confirmation on screen briefly.
                        gloo_timers::future::TimeoutFuture::new(1_500).await;
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(msg) => error.set(msg),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an Account"</h1>
                <Show when=move || !error.get().is_empty()>
                    <div class="auth-card__error">{move || error.get()}</div>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <div class="auth-card__success">{move || success.get()}</div>
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
                        "Email"
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Password"
                        <input
                            type="password"
                            placeholder="Create a strong password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Register"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
