#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone};
    use tempfile::TempDir;
    use tide::libs::export::{ExportFormat, Exporter};
    use tide::libs::session::LogEntry;

    fn entries() -> Vec<LogEntry> {
        let start: DateTime<Local> = Local.with_ymd_and_hms(2025, 7, 3, 9, 0, 0).unwrap();
        vec![
            LogEntry {
                tag: "writing".to_string(),
                start_time: start,
                end_time: start + Duration::minutes(90),
                duration: Duration::minutes(75),
                total_paused: Duration::minutes(15),
            },
            LogEntry {
                tag: "review, notes".to_string(),
                start_time: start + Duration::hours(3),
                end_time: start + Duration::hours(4),
                duration: Duration::hours(1),
                total_paused: Duration::zero(),
            },
        ]
    }

    #[test]
    fn test_csv_export_writes_header_and_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sessions.csv");

        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&entries()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "tag,start_time,end_time,duration_seconds,total_paused_seconds,duration_formatted,total_paused_formatted"
        );
        assert!(lines[1].starts_with("writing,"));
        assert!(lines[1].contains("4500"));
        assert!(lines[1].contains("01:15"));
        // A tag containing a comma must be quoted.
        assert!(lines[2].starts_with("\"review, notes\","));
    }

    #[test]
    fn test_json_export_roundtrips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sessions.json");

        let original = entries();
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&original).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<LogEntry> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, original);
    }
}
