//! Profile page: account record, overall totals, recent activity count.

use leptos::prelude::*;

use crate::components::summary_cards::SummaryCards;
use crate::state::session::Session;
use crate::util::dates;

/// The user's profile plus a 30-day activity snapshot, loaded as one batch.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let data = LocalResource::new(move || {
        let token = session.get().token().map(str::to_owned);
        async move {
            let token = token?;
            let (start, end) = dates::last_30_days();
            let (profile, summary, recent) =
                crate::net::api::fetch_profile_page(&token, &start, &end).await?;
            Some((profile, summary, recent.len()))
        }
    });

    view! {
        <div class="page">
            <h1>"My Profile"</h1>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    data.get()
                        .map(|loaded| match loaded {
                            Some((profile, summary, txn_count)) => view! {
                                <div class="panel profile-card">
                                    <h2>{profile.username.clone()}</h2>
                                    <p class="profile-card__email">{profile.email.clone()}</p>
                                    <p class="profile-card__meta">
                                        {format!("User #{}", profile.id)}
                                    </p>
                                </div>
                                <SummaryCards summary=summary/>
                                <div class="panel">
                                    <h2>"Recent Activity"</h2>
                                    <p>
                                        {format!(
                                            "{txn_count} transactions in the last 30 days"
                                        )}
                                    </p>
                                </div>
                            }
                                .into_any(),
                            None => view! {
                                <p class="page__error">
                                    "Failed to load profile. Please check your connection."
                                </p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
