//! REST API helpers for the finance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! AUTH
//! ====
//! The bearer token is attached per request: every authenticated helper
//! takes the token as an argument and sets the `Authorization` header on the
//! request it builds. Shared client configuration is never mutated, so
//! requests already in flight across a login/logout transition keep the
//! credential they were built with.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Fetch helpers
//! collapse every failure to `None`; mutation helpers return a
//! human-readable message suitable for inline display.

#![allow(clippy::unused_async)]

use std::collections::HashMap;

use super::types::{
    Category, Expense, LoginRequest, NewExpense, NewTransaction, Profile, RegisterRequest,
    Transaction, TransactionSummary,
};
#[cfg(feature = "hydrate")]
use super::types::{ApiMessage, LoginResponse};

/// Mount point of the backend API as seen from the browser.
#[cfg(feature = "hydrate")]
const API_BASE: &str = "/api";

#[cfg(feature = "hydrate")]
const UNREACHABLE: &str = "Server unreachable. Please check your connection.";

#[cfg(feature = "hydrate")]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Attach the bearer credential to an outgoing request.
#[cfg(feature = "hydrate")]
fn bearer(
    req: gloo_net::http::RequestBuilder,
    token: &str,
) -> gloo_net::http::RequestBuilder {
    req.header("Authorization", &format!("Bearer {token}"))
}

/// Pull a display message out of a failed response body.
#[cfg(feature = "hydrate")]
async fn error_message(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    if let Ok(body) = serde_json::from_str::<ApiMessage>(&text) {
        body.message
    } else if !text.is_empty() {
        text
    } else {
        format!("Request failed with status {status}.")
    }
}

/// Exchange credentials for a bearer token via `POST /users/login`.
///
/// # Errors
///
/// Returns a display message on bad credentials or an unreachable backend.
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    let body = LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/users/login"))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| UNREACHABLE.to_owned())?;
        if !resp.ok() {
            return Err(match resp.status() {
                401 | 403 => "Invalid username or password.".to_owned(),
                _ => error_message(resp).await,
            });
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /users/register`.
///
/// # Errors
///
/// Returns the backend's `message` when it provides one (duplicate username
/// and similar), otherwise a generic display message.
pub async fn register(body: &RegisterRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/users/register"))
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| UNREACHABLE.to_owned())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated user's profile from `GET /users/profile`.
pub async fn fetch_profile(token: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(gloo_net::http::Request::get(&url("/users/profile")), token)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch the category list from `GET /categories`.
pub async fn fetch_categories(token: &str) -> Option<Vec<Category>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(gloo_net::http::Request::get(&url("/categories")), token)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Category>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch transactions in a date range from `GET /transactions/my`.
pub async fn fetch_transactions(
    token: &str,
    start: &str,
    end: &str,
) -> Option<Vec<Transaction>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::get(&url("/transactions/my"))
                .query([("start", start), ("end", end)]),
            token,
        )
        .send()
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Transaction>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, start, end);
        None
    }
}

/// Record a transaction via `POST /transactions/add?categoryId=`.
///
/// # Errors
///
/// Returns a display message if the backend rejects the record.
pub async fn add_transaction(
    token: &str,
    body: &NewTransaction,
    category_id: Option<i64>,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let category = category_id.map(|id| id.to_string()).unwrap_or_default();
        let resp = bearer(
            gloo_net::http::Request::post(&url("/transactions/add"))
                .query([("categoryId", category.as_str())]),
            token,
        )
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|_| UNREACHABLE.to_owned())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, body, category_id);
        Err("not available on server".to_owned())
    }
}

/// Delete a transaction via `DELETE /transactions/{id}`.
///
/// # Errors
///
/// Returns a display message if the delete is rejected.
pub async fn delete_transaction(token: &str, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::delete(&url(&format!("/transactions/{id}"))),
            token,
        )
        .send()
        .await
        .map_err(|_| UNREACHABLE.to_owned())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch expenses in a date range from `GET /expenses/my`.
pub async fn fetch_expenses(token: &str, start: &str, end: &str) -> Option<Vec<Expense>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::get(&url("/expenses/my"))
                .query([("start", start), ("end", end)]),
            token,
        )
        .send()
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Expense>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, start, end);
        None
    }
}

/// Record an expense via `POST /expenses/add`.
///
/// # Errors
///
/// Returns a display message if the backend rejects the record.
pub async fn add_expense(token: &str, body: &NewExpense) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(gloo_net::http::Request::post(&url("/expenses/add")), token)
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| UNREACHABLE.to_owned())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, body);
        Err("not available on server".to_owned())
    }
}

/// Delete an expense via `DELETE /expenses/delete/{id}`.
///
/// # Errors
///
/// Returns a display message if the delete is rejected.
pub async fn delete_expense(token: &str, id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::delete(&url(&format!("/expenses/delete/{id}"))),
            token,
        )
        .send()
        .await
        .map_err(|_| UNREACHABLE.to_owned())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err("not available on server".to_owned())
    }
}

/// Fetch overall income/expense/balance from `GET /transactions/summary/my`.
pub async fn fetch_transaction_summary(token: &str) -> Option<TransactionSummary> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::get(&url("/transactions/summary/my")),
            token,
        )
        .send()
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<TransactionSummary>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch per-category expense totals from `GET /expenses/summary/category`.
pub async fn fetch_category_summary(token: &str) -> Option<HashMap<String, f64>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::get(&url("/expenses/summary/category")),
            token,
        )
        .send()
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<HashMap<String, f64>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch per-month expense totals from `GET /expenses/summary/monthly`.
pub async fn fetch_monthly_summary(token: &str) -> Option<HashMap<String, f64>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::get(&url("/expenses/summary/monthly")),
            token,
        )
        .send()
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<HashMap<String, f64>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Fetch per-category totals for a date range from
/// `GET /expenses/summary/range/category`.
pub async fn fetch_range_category_summary(
    token: &str,
    start: &str,
    end: &str,
) -> Option<HashMap<String, f64>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer(
            gloo_net::http::Request::get(&url("/expenses/summary/range/category"))
                .query([("start", start), ("end", end)]),
            token,
        )
        .send()
        .await
        .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<HashMap<String, f64>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, start, end);
        None
    }
}

// Joined batches below mirror how the views load: each screen issues its
// request set as one all-or-nothing fetch and awaits everything before
// touching view state.

/// Overall summary plus this month's transactions, for the dashboard.
pub async fn fetch_dashboard(
    token: &str,
    start: &str,
    end: &str,
) -> Option<(TransactionSummary, Vec<Transaction>)> {
    #[cfg(feature = "hydrate")]
    {
        let (summary, recent) = futures::join!(
            fetch_transaction_summary(token),
            fetch_transactions(token, start, end),
        );
        Some((summary?, recent?))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, start, end);
        None
    }
}

/// Category and monthly expense breakdowns, for the reports page.
pub async fn fetch_reports(
    token: &str,
) -> Option<(HashMap<String, f64>, HashMap<String, f64>)> {
    #[cfg(feature = "hydrate")]
    {
        let (by_category, by_month) =
            futures::join!(fetch_category_summary(token), fetch_monthly_summary(token));
        Some((by_category?, by_month?))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Transactions for two month ranges, for the monthly summary comparison.
pub async fn fetch_month_comparison(
    token: &str,
    current: (&str, &str),
    previous: (&str, &str),
) -> Option<(Vec<Transaction>, Vec<Transaction>)> {
    #[cfg(feature = "hydrate")]
    {
        let (curr, prev) = futures::join!(
            fetch_transactions(token, current.0, current.1),
            fetch_transactions(token, previous.0, previous.1),
        );
        Some((curr?, prev?))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, current, previous);
        None
    }
}

/// Profile record, overall summary, and recent activity, for the profile page.
pub async fn fetch_profile_page(
    token: &str,
    start: &str,
    end: &str,
) -> Option<(Profile, TransactionSummary, Vec<Transaction>)> {
    #[cfg(feature = "hydrate")]
    {
        let (profile, summary, recent) = futures::join!(
            fetch_profile(token),
            fetch_transaction_summary(token),
            fetch_transactions(token, start, end),
        );
        Some((profile?, summary?, recent?))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, start, end);
        None
    }
}
