//! Calendar-window predicates and month-partition naming helpers.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

/// "YYYYMM" filename prefix of the partition covering the given instant.
pub fn month_prefix(date: &DateTime<Local>) -> String {
    date.format("%Y%m").to_string()
}

/// Parses a 6-character "YYYYMM" filename prefix into the first day of that
/// month. Returns `None` for names that do not start with a valid prefix.
pub fn parse_month_prefix(name: &str) -> Option<NaiveDate> {
    let year: i32 = name.get(..4)?.parse().ok()?;
    let month: u32 = name.get(4..6)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// True when `t` falls on the same calendar day as `now`.
pub fn is_today(t: &DateTime<Local>, now: &DateTime<Local>) -> bool {
    t.date_naive() == now.date_naive()
}

/// True when `t` falls in the current calendar week. Weeks run Sunday
/// through Saturday to match the log views.
pub fn is_this_week(t: &DateTime<Local>, now: &DateTime<Local>) -> bool {
    let offset = now.weekday().num_days_from_sunday() as i64;
    let week_start = now.date_naive() - Duration::days(offset);
    let week_end = week_start + Duration::days(6);
    let day = t.date_naive();
    day >= week_start && day <= week_end
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// First day of the month before the one containing `date`.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    month_start(month_start(date) - Duration::days(1))
}

/// True when both dates fall in the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
