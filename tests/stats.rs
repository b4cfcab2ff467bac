#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Weekday};
    use std::collections::HashMap;
    use tide::libs::session::LogEntry;
    use tide::libs::stats::{calculate_insights, calculate_stats, current_streak, daily_totals};

    fn entry(tag: &str, end: DateTime<Local>, minutes: i64) -> LogEntry {
        LogEntry {
            tag: tag.to_string(),
            start_time: end - Duration::minutes(minutes),
            end_time: end,
            duration: Duration::minutes(minutes),
            total_paused: Duration::zero(),
        }
    }

    fn july(day: u32, hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 7, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_stats_on_empty_input() {
        let stats = calculate_stats(&[], 10);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.total_time, Duration::zero());
        assert_eq!(stats.average_time, Duration::zero());
        assert!(stats.top_activities.is_empty());
        assert!(stats.date_range.is_empty());
    }

    #[test]
    fn test_stats_totals_average_and_top_activity() {
        let entries = vec![
            entry("A", july(1, 10), 30),
            entry("A", july(2, 10), 30),
            entry("B", july(3, 10), 30),
        ];
        let stats = calculate_stats(&entries, 10);

        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.total_time, Duration::minutes(90));
        assert_eq!(stats.average_time, Duration::minutes(30));

        let top = &stats.top_activities[0];
        assert_eq!(top.tag, "A");
        assert_eq!(top.duration, Duration::minutes(60));
        assert_eq!(top.count, 2);
        assert_eq!(top.percent, 66);
    }

    #[test]
    fn test_top_activities_truncated_to_n() {
        let entries = vec![
            entry("a", july(1, 10), 50),
            entry("b", july(1, 11), 40),
            entry("c", july(1, 12), 30),
            entry("d", july(1, 13), 20),
            entry("e", july(1, 14), 10),
        ];
        let stats = calculate_stats(&entries, 3);
        let tags: Vec<&str> = stats.top_activities.iter().map(|a| a.tag.as_str()).collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_percentages_are_zero_for_zero_total() {
        let entries = vec![entry("A", july(1, 10), 0), entry("B", july(2, 10), 0)];
        let stats = calculate_stats(&entries, 10);
        assert!(stats.top_activities.iter().all(|a| a.percent == 0));
    }

    #[test]
    fn test_date_range_single_day_and_span() {
        let single = calculate_stats(&[entry("A", july(3, 9), 30), entry("B", july(3, 18), 30)], 10);
        assert_eq!(single.date_range, "Jul 3, 2025");

        let span = calculate_stats(&[entry("A", july(3, 9), 30), entry("B", july(9, 9), 30)], 10);
        assert_eq!(span.date_range, "Jul 3 - Jul 9, 2025");
    }

    #[test]
    fn test_insights_busiest_day_and_other_days_average() {
        // July 2025: the 7th is a Monday, the 8th a Tuesday.
        let entries = vec![
            entry("A", july(7, 10), 120),
            entry("A", july(7, 14), 60),
            entry("B", july(8, 10), 60),
        ];
        let report = calculate_insights(&entries);

        assert_eq!(report.total_sessions, 3);
        assert_eq!(report.total_time, Duration::minutes(240));
        assert_eq!(report.avg_session_length, Duration::minutes(80));
        assert_eq!(report.busiest_day, Weekday::Mon);
        assert_eq!(report.busiest_day_avg, Duration::minutes(90));
        assert_eq!(report.other_days_avg, Duration::minutes(60));
    }

    #[test]
    fn test_insights_top_three_activities_with_percent() {
        let entries = vec![
            entry("a", july(1, 10), 40),
            entry("b", july(2, 10), 30),
            entry("c", july(3, 10), 20),
            entry("d", july(4, 10), 10),
        ];
        let report = calculate_insights(&entries);

        assert_eq!(report.top_activities.len(), 3);
        assert_eq!(report.top_activities[0].tag, "a");
        assert_eq!(report.top_activities[0].percent, 40);
        assert_eq!(report.top_activities[2].tag, "c");
    }

    #[test]
    fn test_insights_on_empty_input() {
        let report = calculate_insights(&[]);
        assert_eq!(report.total_sessions, 0);
        assert_eq!(report.total_time, Duration::zero());
        assert!(report.top_activities.is_empty());
    }

    #[test]
    fn test_daily_totals_group_by_end_day() {
        let entries = vec![
            entry("A", july(3, 9), 60),
            entry("B", july(3, 15), 30),
            entry("C", july(4, 9), 45),
        ];
        let since = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        let totals = daily_totals(&entries, since);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&NaiveDate::from_ymd_opt(2025, 7, 3).unwrap()], Duration::minutes(90));
        assert_eq!(totals[&NaiveDate::from_ymd_opt(2025, 7, 4).unwrap()], Duration::minutes(45));
    }

    #[test]
    fn test_daily_totals_drop_entries_before_cutoff() {
        let entries = vec![entry("old", july(3, 9), 60)];
        let since = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        assert!(daily_totals(&entries, since).is_empty());
    }

    #[test]
    fn test_current_streak_counts_consecutive_days() {
        let mut totals: HashMap<NaiveDate, Duration> = HashMap::new();
        let today = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
        for back in 0..3 {
            totals.insert(today - Duration::days(back), Duration::hours(1));
        }
        // A gap on the 6th, activity again on the 5th.
        totals.insert(NaiveDate::from_ymd_opt(2025, 7, 5).unwrap(), Duration::hours(1));

        assert_eq!(current_streak(&totals, today), 3);
    }

    #[test]
    fn test_streak_is_zero_without_activity_today() {
        let mut totals: HashMap<NaiveDate, Duration> = HashMap::new();
        let today = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
        totals.insert(today - Duration::days(1), Duration::hours(1));
        assert_eq!(current_streak(&totals, today), 0);
    }
}
