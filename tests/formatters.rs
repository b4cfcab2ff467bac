#[cfg(test)]
mod tests {
    use chrono::Duration;
    use tide::libs::formatter::{format_duration, format_minutes};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(&Duration::minutes(30)), "00:30");
        assert_eq!(format_duration(&Duration::minutes(59)), "00:59");
        assert_eq!(format_duration(&Duration::minutes(1)), "00:01");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::hours(1)), "01:00");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(45))), "08:45");
        assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(5))), "02:05");
    }

    #[test]
    fn test_format_duration_large_hours() {
        assert_eq!(format_duration(&Duration::hours(24)), "24:00");
        assert_eq!(format_duration(&Duration::hours(100)), "100:00");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
        assert_eq!(format_duration(&Duration::hours(-5)), "00:00");
    }

    #[test]
    fn test_format_duration_seconds_rounded_down() {
        assert_eq!(format_duration(&(Duration::minutes(30) + Duration::seconds(59))), "00:30");
        assert_eq!(format_duration(&(Duration::minutes(30) + Duration::seconds(60))), "00:31");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(90), "01:30");
        assert_eq!(format_minutes(480), "08:00");
    }
}
