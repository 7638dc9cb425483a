//! Serde types mirroring the backend JSON, plus the pure list/summary
//! shaping the views apply to fetched data.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Credentials posted to `/users/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login body.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Body posted to `/users/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Error body shape the backend uses for registration and similar failures.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// The authenticated user's profile record.
#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// An expense/income category.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Transaction direction. The backend serializes these lowercase.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    Credit,
    #[default]
    Debit,
}

impl TxnKind {
    /// The backend's lowercase wire label, also used for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

/// A recorded income or expense transaction.
#[derive(Clone, Debug, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub date: String,
    #[serde(default)]
    pub category: Option<Category>,
}

/// Body posted to `/transactions/add` (category goes in the query string).
#[derive(Clone, Debug, Serialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub date: String,
}

/// A categorized expense record.
#[derive(Clone, Debug, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    pub date: String,
}

/// Body posted to `/expenses/add`.
#[derive(Clone, Debug, Serialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

/// Income/expense/balance totals, either fetched from
/// `/transactions/summary/my` or computed client-side for one month.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq)]
pub struct TransactionSummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl TransactionSummary {
    /// Total a transaction list: credits as income, debits as expense.
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut income = 0.0;
        let mut expense = 0.0;
        for t in transactions {
            match t.kind {
                TxnKind::Credit => income += t.amount,
                TxnKind::Debit => expense += t.amount,
            }
        }
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// A record carrying a date and an id, orderable newest-first.
pub trait Dated {
    fn date(&self) -> &str;
    fn id(&self) -> i64;
}

impl Dated for Transaction {
    fn date(&self) -> &str {
        &self.date
    }
    fn id(&self) -> i64 {
        self.id
    }
}

impl Dated for Expense {
    fn date(&self) -> &str {
        &self.date
    }
    fn id(&self) -> i64 {
        self.id
    }
}

/// Sort a record list newest-first. ISO dates order lexicographically, so
/// this is a plain string sort with id as the tiebreaker.
pub fn newest_first<T: Dated>(mut records: Vec<T>) -> Vec<T> {
    records.sort_by(|a, b| b.date().cmp(a.date()).then(b.id().cmp(&a.id())));
    records
}

/// Category totals as a list sorted by descending amount, name as tiebreaker.
pub fn category_totals_sorted(totals: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> =
        totals.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Monthly totals as a list sorted chronologically by `YYYY-MM` key.
pub fn monthly_totals_sorted(totals: &HashMap<String, f64>) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> =
        totals.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}
