//! Calendar arithmetic for date-range queries and monthly summaries.
//!
//! The backend speaks `YYYY-MM-DD` date strings and `YYYY-MM` month keys, so
//! everything here works on those plus plain `(year, month, day)` tuples.
//! Reading the current date needs a browser clock and is hydrate-gated; the
//! arithmetic itself is pure.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Gregorian leap year test.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (1-based). Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Format a `YYYY-MM-DD` date string.
pub fn date_string(year: i32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Format a `YYYY-MM` month key.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Parse a `YYYY-MM` month key. Rejects months outside 1..=12.
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (y, m) = key.split_once('-')?;
    let year = y.parse::<i32>().ok()?;
    let month = m.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// First and last day of a month as `YYYY-MM-DD` strings.
pub fn month_bounds(year: i32, month: u32) -> (String, String) {
    (
        date_string(year, month, 1),
        date_string(year, month, days_in_month(year, month)),
    )
}

/// The month before the given one, wrapping across year boundaries.
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Walk a date back by `n` days.
pub fn days_before(year: i32, month: u32, day: u32, n: u32) -> (i32, u32, u32) {
    let (mut y, mut m, mut d) = (year, month, day);
    for _ in 0..n {
        if d > 1 {
            d -= 1;
        } else {
            let (py, pm) = previous_month(y, m);
            y = py;
            m = pm;
            d = days_in_month(py, pm);
        }
    }
    (y, m, d)
}

/// Percentage change from `previous` to `current`.
///
/// A zero baseline reports 0% for no movement and 100% otherwise, matching
/// how the summary view labels a month with no prior data.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current == 0.0 { 0.0 } else { 100.0 }
    } else {
        (current - previous) / previous * 100.0
    }
}

/// Today's date from the browser clock as `(year, month, day)`, 1-based.
///
/// Outside the browser (SSR) this returns the epoch date; callers only use it
/// after hydration.
pub fn today() -> (i32, u32, u32) {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_wrap)]
        let year = now.get_full_year() as i32;
        (year, now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (1970, 1, 1)
    }
}

/// `YYYY-MM` key for the current month.
pub fn current_month_key() -> String {
    let (year, month, _) = today();
    month_key(year, month)
}

/// Range from the first of the current month through today.
pub fn current_month_so_far() -> (String, String) {
    let (year, month, day) = today();
    (date_string(year, month, 1), date_string(year, month, day))
}

/// Range covering the 30 days up to and including today.
pub fn last_30_days() -> (String, String) {
    let (year, month, day) = today();
    let (sy, sm, sd) = days_before(year, month, day, 30);
    (date_string(sy, sm, sd), date_string(year, month, day))
}
