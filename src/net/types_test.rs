use std::collections::HashMap;

use super::*;

fn txn(id: i64, kind: TxnKind, amount: f64, date: &str) -> Transaction {
    Transaction {
        id,
        description: None,
        amount,
        kind,
        date: date.to_owned(),
        category: None,
    }
}

// =============================================================
// Wire-format deserialization
// =============================================================

#[test]
fn transaction_deserializes_backend_shape() {
    let json = serde_json::json!({
        "id": 7,
        "description": "Groceries",
        "amount": 45.5,
        "type": "debit",
        "date": "2025-08-12",
        "category": {"id": 2, "name": "Food"}
    });
    let t: Transaction = serde_json::from_value(json).expect("transaction");
    assert_eq!(t.id, 7);
    assert_eq!(t.kind, TxnKind::Debit);
    assert_eq!(t.category.as_ref().map(|c| c.name.as_str()), Some("Food"));
}

#[test]
fn transaction_tolerates_missing_optional_fields() {
    let json = serde_json::json!({
        "id": 1,
        "amount": 10.0,
        "type": "credit",
        "date": "2025-08-01"
    });
    let t: Transaction = serde_json::from_value(json).expect("transaction");
    assert!(t.description.is_none());
    assert!(t.category.is_none());
    assert_eq!(t.kind, TxnKind::Credit);
}

#[test]
fn new_transaction_serializes_type_field() {
    let body = NewTransaction {
        description: "Salary".to_owned(),
        amount: 1000.0,
        kind: TxnKind::Credit,
        date: "2025-08-01".to_owned(),
    };
    let value = serde_json::to_value(&body).expect("serialize");
    assert_eq!(value["type"], "credit");
}

#[test]
fn expense_deserializes_with_plain_category() {
    let json = serde_json::json!({
        "id": 3,
        "title": "Bus pass",
        "amount": 20.0,
        "category": "Travel",
        "date": "2025-08-05"
    });
    let e: Expense = serde_json::from_value(json).expect("expense");
    assert_eq!(e.category.as_deref(), Some("Travel"));
}

#[test]
fn summary_deserializes_backend_shape() {
    let json = serde_json::json!({"income": 100.0, "expense": 40.0, "balance": 60.0});
    let s: TransactionSummary = serde_json::from_value(json).expect("summary");
    assert!((s.balance - 60.0).abs() < f64::EPSILON);
}

// =============================================================
// Client-side summary computation
// =============================================================

#[test]
fn summary_of_empty_list_is_zero() {
    assert_eq!(TransactionSummary::of(&[]), TransactionSummary::default());
}

#[test]
fn summary_of_splits_credits_and_debits() {
    let txns = vec![
        txn(1, TxnKind::Credit, 1000.0, "2025-08-01"),
        txn(2, TxnKind::Debit, 300.0, "2025-08-02"),
        txn(3, TxnKind::Debit, 200.0, "2025-08-03"),
    ];
    let s = TransactionSummary::of(&txns);
    assert!((s.income - 1000.0).abs() < f64::EPSILON);
    assert!((s.expense - 500.0).abs() < f64::EPSILON);
    assert!((s.balance - 500.0).abs() < f64::EPSILON);
}

// =============================================================
// List shaping
// =============================================================

fn expense(id: i64, date: &str) -> Expense {
    Expense {
        id,
        title: "expense".to_owned(),
        amount: 5.0,
        category: None,
        date: date.to_owned(),
    }
}

#[test]
fn newest_first_orders_by_date_then_id() {
    let txns = vec![
        txn(1, TxnKind::Debit, 5.0, "2025-08-01"),
        txn(2, TxnKind::Debit, 5.0, "2025-08-15"),
        txn(3, TxnKind::Debit, 5.0, "2025-08-15"),
    ];
    let sorted = newest_first(txns);
    let ids: Vec<i64> = sorted.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn newest_first_orders_expenses_the_same_way() {
    let list = vec![
        expense(1, "2025-08-01"),
        expense(2, "2025-08-15"),
        expense(3, "2025-08-15"),
    ];
    let sorted = newest_first(list);
    let ids: Vec<i64> = sorted.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn category_totals_sorted_descends_by_amount() {
    let mut totals = HashMap::new();
    totals.insert("Food".to_owned(), 120.0);
    totals.insert("Rent".to_owned(), 800.0);
    totals.insert("Travel".to_owned(), 120.0);
    let sorted = category_totals_sorted(&totals);
    let names: Vec<&str> = sorted.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Rent", "Food", "Travel"]);
}

#[test]
fn monthly_totals_sorted_is_chronological() {
    let mut totals = HashMap::new();
    totals.insert("2025-03".to_owned(), 10.0);
    totals.insert("2024-12".to_owned(), 20.0);
    totals.insert("2025-01".to_owned(), 30.0);
    let sorted = monthly_totals_sorted(&totals);
    let keys: Vec<&str> = sorted.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["2024-12", "2025-01", "2025-03"]);
}
