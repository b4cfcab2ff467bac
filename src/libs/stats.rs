//! Pure aggregation over completed session entries.
//!
//! Everything in this module operates on an in-memory slice of [`LogEntry`]
//! and performs no I/O, so every number the log, insights, and dashboard
//! views print is reproducible from the same inputs.

use super::session::LogEntry;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashMap;

/// Aggregated totals for a single tag.
#[derive(Debug, Clone)]
pub struct ActivityStat {
    pub tag: String,
    pub duration: Duration,
    pub count: usize,
    /// Share of the grand total, truncated to a whole percent.
    pub percent: i64,
}

/// Summary statistics over a set of entries.
#[derive(Debug, Clone)]
pub struct LogStats {
    pub total_time: Duration,
    pub total_sessions: usize,
    pub average_time: Duration,
    pub top_activities: Vec<ActivityStat>,
    pub date_range: String,
}

/// Work-pattern analysis over a (typically larger) set of entries.
#[derive(Debug, Clone)]
pub struct InsightReport {
    pub total_sessions: usize,
    pub total_time: Duration,
    pub avg_session_length: Duration,
    pub busiest_day: Weekday,
    pub busiest_day_avg: Duration,
    pub other_days_avg: Duration,
    pub top_activities: Vec<ActivityStat>,
}

/// Fixed weekday order used for deterministic aggregation.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

fn share_percent(duration: Duration, total: Duration) -> i64 {
    if total.is_zero() {
        return 0;
    }
    ((duration.num_seconds() as f64 / total.num_seconds() as f64) * 100.0) as i64
}

/// Per-tag totals sorted by duration descending, truncated to `top_n`.
/// Ties break on the tag so the ordering is stable across runs.
fn top_activities(entries: &[LogEntry], total_time: Duration, top_n: usize) -> Vec<ActivityStat> {
    let mut tag_times: HashMap<&str, (Duration, usize)> = HashMap::new();
    for entry in entries {
        let slot = tag_times.entry(&entry.tag).or_insert((Duration::zero(), 0));
        slot.0 = slot.0 + entry.duration;
        slot.1 += 1;
    }

    let mut activities: Vec<ActivityStat> = tag_times
        .into_iter()
        .map(|(tag, (duration, count))| ActivityStat {
            tag: tag.to_string(),
            duration,
            count,
            percent: share_percent(duration, total_time),
        })
        .collect();

    activities.sort_by(|a, b| b.duration.cmp(&a.duration).then_with(|| a.tag.cmp(&b.tag)));
    activities.truncate(top_n);
    activities
}

/// Computes summary statistics from log entries.
///
/// An empty slice yields zero totals and an empty activity list rather than
/// an error; the average is only defined when at least one entry exists.
pub fn calculate_stats(entries: &[LogEntry], top_n: usize) -> LogStats {
    if entries.is_empty() {
        return LogStats {
            total_time: Duration::zero(),
            total_sessions: 0,
            average_time: Duration::zero(),
            top_activities: Vec::new(),
            date_range: String::new(),
        };
    }

    let total_time = entries.iter().fold(Duration::zero(), |acc, e| acc + e.duration);
    let total_sessions = entries.len();
    let average_time = total_time / total_sessions as i32;

    let mut earliest = entries[0].end_time;
    let mut latest = entries[0].end_time;
    for entry in entries {
        if entry.end_time < earliest {
            earliest = entry.end_time;
        }
        if entry.end_time > latest {
            latest = entry.end_time;
        }
    }

    let date_range = if earliest.date_naive() == latest.date_naive() {
        earliest.format("%b %-d, %Y").to_string()
    } else {
        format!("{} - {}", earliest.format("%b %-d"), latest.format("%b %-d, %Y"))
    };

    LogStats {
        total_time,
        total_sessions,
        average_time,
        top_activities: top_activities(entries, total_time, top_n),
        date_range,
    }
}

/// Analyzes work patterns: busiest weekday, its average session length
/// against the other days, and the top three activities by time.
pub fn calculate_insights(entries: &[LogEntry]) -> InsightReport {
    let mut report = InsightReport {
        total_sessions: entries.len(),
        total_time: Duration::zero(),
        avg_session_length: Duration::zero(),
        busiest_day: Weekday::Sun,
        busiest_day_avg: Duration::zero(),
        other_days_avg: Duration::zero(),
        top_activities: Vec::new(),
    };
    if entries.is_empty() {
        return report;
    }

    let mut daily_totals = [Duration::zero(); 7];
    let mut daily_counts = [0usize; 7];
    for entry in entries {
        report.total_time = report.total_time + entry.duration;
        let day = entry.end_time.weekday().num_days_from_sunday() as usize;
        daily_totals[day] = daily_totals[day] + entry.duration;
        daily_counts[day] += 1;
    }

    report.avg_session_length = report.total_time / entries.len() as i32;

    let mut busiest = 0;
    for (index, total) in daily_totals.iter().enumerate() {
        if *total > daily_totals[busiest] {
            busiest = index;
        }
    }
    report.busiest_day = WEEKDAYS[busiest];

    if daily_counts[busiest] > 0 {
        report.busiest_day_avg = daily_totals[busiest] / daily_counts[busiest] as i32;
    }

    let other_total = report.total_time - daily_totals[busiest];
    let other_count = entries.len() - daily_counts[busiest];
    if other_count > 0 {
        report.other_days_avg = other_total / other_count as i32;
    }

    report.top_activities = top_activities(entries, report.total_time, 3);
    report
}

/// Sums active time per calendar day of `end_time`, dropping entries that
/// ended on or before `since`.
pub fn daily_totals(entries: &[LogEntry], since: NaiveDate) -> HashMap<NaiveDate, Duration> {
    let mut totals: HashMap<NaiveDate, Duration> = HashMap::new();
    for entry in entries {
        let day = entry.end_time.date_naive();
        if day <= since {
            continue;
        }
        let slot = totals.entry(day).or_insert_with(Duration::zero);
        *slot = *slot + entry.duration;
    }
    totals
}

/// Number of consecutive days with recorded focus time, counting backwards
/// from `today`. Any day with no activity breaks the streak.
pub fn current_streak(totals: &HashMap<NaiveDate, Duration>, today: NaiveDate) -> usize {
    let mut streak = 0;
    let mut day = today;
    while totals.get(&day).map_or(false, |total| *total > Duration::zero()) {
        streak += 1;
        day = match day.pred_opt() {
            Some(previous) => previous,
            None => break,
        };
    }
    streak
}
