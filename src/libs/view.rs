use super::formatter::format_duration;
use super::session::LogEntry;
use super::stats::{self, InsightReport, LogStats};
use crate::libs::messages::Message;
use crate::msg_print;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, Weekday};
use prettytable::{row, Table};
use std::collections::HashMap;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// Contribution graph scale, lightest to darkest, plus the empty cell.
const CELL_EMPTY: &str = "\x1b[38;5;238m";
const CELL_LOW: &str = "\x1b[38;5;153m";
const CELL_MID: &str = "\x1b[38;5;111m";
const CELL_HIGH: &str = "\x1b[38;5;69m";
const CELL_MAX: &str = "\x1b[38;5;27m";

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

pub struct View {}

impl View {
    /// Session list for the log command.
    pub fn entries(entries: &[LogEntry], period: &str) {
        msg_print!(Message::LogHeader(period.to_string()), true);

        let mut table = Table::new();
        table.add_row(row!["DATE", "TIME", "DURATION", "TAG"]);
        for entry in entries {
            table.add_row(row![
                entry.end_time.format("%b %-d"),
                format!("{}-{}", entry.start_time.format("%H:%M"), entry.end_time.format("%H:%M")),
                format_duration(&entry.duration),
                entry.tag
            ]);
        }
        table.printstd();

        let total = entries.iter().fold(Duration::zero(), |acc, e| acc + e.duration);
        let summary = Message::LogTotal {
            total: format_duration(&total),
            count: entries.len(),
        };
        println!("\n{}{}{}", DIM, summary, RESET);
    }

    /// Compact list of today's completed sessions.
    pub fn recent(entries: &[LogEntry]) {
        msg_print!(Message::RecentHeader, true);

        let mut total = Duration::zero();
        for entry in entries {
            println!("  - {} ({})", entry.tag, format_duration(&entry.duration));
            total = total + entry.duration;
        }
        println!();
        msg_print!(Message::TotalFocusToday(format_duration(&total)));
    }

    /// Statistical summary for the log command's stats mode.
    pub fn stats(stats: &LogStats, period: &str) {
        msg_print!(Message::StatsHeader(period.to_string()), true);
        println!("Total time:     {}", format_duration(&stats.total_time));
        println!("Sessions:       {}", stats.total_sessions);
        println!("Average:        {} per session", format_duration(&stats.average_time));
        if !stats.date_range.is_empty() {
            println!("Date range:     {}", stats.date_range);
        }

        if stats.top_activities.len() > 1 {
            println!("\nTop activities:");
            for (index, activity) in stats.top_activities.iter().enumerate() {
                println!(
                    "  {}. {} ({} sessions, {}, {}%)",
                    index + 1,
                    activity.tag,
                    activity.count,
                    format_duration(&activity.duration),
                    activity.percent
                );
            }
        }
    }

    /// Work-pattern report for the insights command.
    pub fn insights(report: &InsightReport) {
        msg_print!(Message::InsightsHeader(report.total_sessions));
        println!("----------------------------------------------------");
        println!("Total Time Focused:     {}", format_duration(&report.total_time));
        println!("Average Session Length: {}\n", format_duration(&report.avg_session_length));
        let busiest = weekday_name(report.busiest_day);
        println!("Busiest Day:            {}", busiest);
        println!("  - You focus an average of {} on {}s.", format_duration(&report.busiest_day_avg), busiest);
        println!("  - Your average on other days is {}.\n", format_duration(&report.other_days_avg));

        if !report.top_activities.is_empty() {
            println!("Top Activities (by time):");
            for activity in &report.top_activities {
                println!(
                    "  - {:<20} {:<10} ({}%)",
                    activity.tag,
                    format_duration(&activity.duration),
                    activity.percent
                );
            }
        }
        println!("----------------------------------------------------");
    }

    /// Yearly contribution graph plus summary numbers.
    pub fn dashboard(totals: &HashMap<NaiveDate, Duration>, now: DateTime<Local>) {
        let today = now.date_naive();
        let offset = today.weekday().num_days_from_sunday() as i64;
        let last_sunday = today - Duration::days(offset);
        let graph_start = last_sunday - Duration::days(51 * 7);

        println!("\n{}{}{}", BOLD, Message::DashboardHeader, RESET);
        Self::render_month_labels(graph_start);
        Self::render_grid(totals, graph_start);
        Self::render_legend();
        Self::render_yearly_stats(totals, today);
    }

    /// Month labels aligned over their week columns. The buffer is 52
    /// weeks wide at two characters per week.
    fn render_month_labels(graph_start: NaiveDate) {
        let mut header = vec![' '; 104];
        let mut last_month = 0;
        for week in 0..52i64 {
            let representative = graph_start + Duration::days(week * 7 + 3);
            let month = representative.month();
            if month != last_month {
                let label = representative.format("%b").to_string();
                let position = (week * 2) as usize;
                for (i, ch) in label.chars().enumerate() {
                    if position + i < header.len() {
                        header[position + i] = ch;
                    }
                }
                last_month = month;
            }
        }
        println!("     {}", header.iter().collect::<String>());
    }

    fn render_grid(totals: &HashMap<NaiveDate, Duration>, graph_start: NaiveDate) {
        let day_labels = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        for day_of_week in 0..7i64 {
            if day_of_week % 2 != 0 {
                print!("{:<3}  ", day_labels[day_of_week as usize]);
            } else {
                print!("{:<3}  ", " ");
            }

            for week in 0..52i64 {
                let day = graph_start + Duration::days(week * 7 + day_of_week);
                let total = totals.get(&day).copied().unwrap_or_else(Duration::zero);
                let color = match total {
                    t if t >= Duration::hours(6) => CELL_MAX,
                    t if t >= Duration::hours(4) => CELL_HIGH,
                    t if t >= Duration::hours(2) => CELL_MID,
                    t if t > Duration::zero() => CELL_LOW,
                    _ => CELL_EMPTY,
                };
                print!("{}■ {}", color, RESET);
            }
            println!();
        }
    }

    fn render_legend() {
        println!(
            "\n  Less {}■{} {}■{} {}■{} {}■{} {}■{} More\n",
            CELL_EMPTY, RESET, CELL_LOW, RESET, CELL_MID, RESET, CELL_HIGH, RESET, CELL_MAX, RESET
        );
    }

    fn render_yearly_stats(totals: &HashMap<NaiveDate, Duration>, today: NaiveDate) {
        let total_time = totals.values().fold(Duration::zero(), |acc, d| acc + *d);
        let avg_daily = if total_time > Duration::zero() {
            total_time / 365
        } else {
            Duration::zero()
        };
        let streak = stats::current_streak(totals, today);

        println!("{}{}{}", BOLD, Message::YearlyStatsHeader, RESET);
        println!("  Total Focus Time: {}", format_duration(&total_time));
        println!("  Daily Average:    {}", format_duration(&avg_daily));
        println!("  Current Streak:   {} days", streak);
        println!();
    }
}
