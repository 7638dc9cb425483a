use super::*;

// =============================================================
// Leap years and month lengths
// =============================================================

#[test]
fn leap_year_rules() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2025));
}

#[test]
fn february_length_follows_leap_year() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2025, 2), 28);
}

#[test]
fn thirty_and_thirty_one_day_months() {
    assert_eq!(days_in_month(2025, 1), 31);
    assert_eq!(days_in_month(2025, 4), 30);
    assert_eq!(days_in_month(2025, 12), 31);
}

#[test]
fn invalid_month_has_zero_days() {
    assert_eq!(days_in_month(2025, 0), 0);
    assert_eq!(days_in_month(2025, 13), 0);
}

// =============================================================
// Formatting and parsing
// =============================================================

#[test]
fn date_string_zero_pads() {
    assert_eq!(date_string(2025, 3, 7), "2025-03-07");
}

#[test]
fn month_key_round_trips() {
    let key = month_key(2025, 8);
    assert_eq!(key, "2025-08");
    assert_eq!(parse_month_key(&key), Some((2025, 8)));
}

#[test]
fn parse_month_key_rejects_garbage() {
    assert_eq!(parse_month_key("2025"), None);
    assert_eq!(parse_month_key("2025-13"), None);
    assert_eq!(parse_month_key("2025-00"), None);
    assert_eq!(parse_month_key("abcd-ef"), None);
}

#[test]
fn month_bounds_cover_full_month() {
    assert_eq!(
        month_bounds(2025, 2),
        ("2025-02-01".to_owned(), "2025-02-28".to_owned())
    );
    assert_eq!(
        month_bounds(2024, 2),
        ("2024-02-01".to_owned(), "2024-02-29".to_owned())
    );
}

// =============================================================
// Month stepping
// =============================================================

#[test]
fn previous_month_wraps_january() {
    assert_eq!(previous_month(2025, 1), (2024, 12));
    assert_eq!(previous_month(2025, 6), (2025, 5));
}

#[test]
fn days_before_within_month() {
    assert_eq!(days_before(2025, 8, 29, 7), (2025, 8, 22));
}

#[test]
fn days_before_crosses_month_and_year() {
    assert_eq!(days_before(2025, 3, 1, 1), (2025, 2, 28));
    assert_eq!(days_before(2024, 3, 1, 1), (2024, 2, 29));
    assert_eq!(days_before(2025, 1, 5, 10), (2024, 12, 26));
}

// =============================================================
// Percent change
// =============================================================

#[test]
fn percent_change_against_nonzero_baseline() {
    assert!((percent_change(150.0, 100.0) - 50.0).abs() < f64::EPSILON);
    assert!((percent_change(50.0, 100.0) + 50.0).abs() < f64::EPSILON);
}

#[test]
fn percent_change_zero_baseline() {
    assert!((percent_change(0.0, 0.0)).abs() < f64::EPSILON);
    assert!((percent_change(10.0, 0.0) - 100.0).abs() < f64::EPSILON);
}
