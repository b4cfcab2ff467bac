#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone};
    use tempfile::TempDir;
    use tide::libs::error::TideError;
    use tide::libs::session::{Session, SessionStore, ABANDONED_SUFFIX};

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 7, 3, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_new_session_is_active() {
        let session = Session::new("writing", Duration::zero(), at(9, 0));
        assert!(!session.is_paused);
        assert!(session.paused_at.is_none());
        assert_eq!(session.total_paused, Duration::zero());
        assert_eq!(session.elapsed(at(9, 30)), Duration::minutes(30));
    }

    #[test]
    fn test_pause_resume_cycles_accumulate_total_paused() {
        let mut session = Session::new("writing", Duration::zero(), at(9, 0));

        assert!(session.pause(at(9, 30)));
        assert!(session.resume(at(9, 40))); // 10 minutes paused
        assert!(session.pause(at(10, 0)));
        assert!(session.resume(at(10, 5))); // 5 minutes paused
        assert!(session.pause(at(11, 0)));
        assert!(session.resume(at(11, 30))); // 30 minutes paused

        assert_eq!(session.total_paused, Duration::minutes(45));
        // Three hours of wall clock minus 45 minutes of pauses.
        assert_eq!(session.elapsed(at(12, 0)), Duration::minutes(135));
    }

    #[test]
    fn test_pause_is_noop_when_already_paused() {
        let mut session = Session::new("", Duration::zero(), at(9, 0));
        assert!(session.pause(at(9, 30)));
        assert!(!session.pause(at(10, 0)));
        assert_eq!(session.paused_at, Some(at(9, 30)));
    }

    #[test]
    fn test_resume_is_noop_when_already_active() {
        let mut session = Session::new("", Duration::zero(), at(9, 0));
        assert!(!session.resume(at(9, 30)));
        assert_eq!(session.total_paused, Duration::zero());
    }

    #[test]
    fn test_elapsed_while_paused_uses_pause_point() {
        let mut session = Session::new("", Duration::zero(), at(9, 0));
        session.pause(at(9, 45));

        // The working-time clock froze at the pause point, no matter how
        // much later we look.
        assert_eq!(session.elapsed(at(10, 0)), Duration::minutes(45));
        assert_eq!(session.elapsed(at(14, 0)), Duration::minutes(45));

        // Time spent paused is a different number and keeps growing.
        assert_eq!(session.paused_for(at(10, 0)), Duration::minutes(15));
        assert_eq!(session.paused_for(at(14, 0)), Duration::hours(4) + Duration::minutes(15));
    }

    #[test]
    fn test_ending_paused_session_uses_pause_point() {
        let mut session = Session::new("reading", Duration::zero(), at(9, 0));
        session.pause(at(10, 0));

        let entry = session.to_entry(at(13, 0));
        assert_eq!(entry.end_time, at(10, 0));
        assert_eq!(entry.duration, Duration::hours(1));
    }

    #[test]
    fn test_entry_duration_excludes_pause_time() {
        let mut session = Session::new("reading", Duration::zero(), at(9, 0));
        session.pause(at(10, 0));
        session.resume(at(10, 30));

        let entry = session.to_entry(at(12, 0));
        assert_eq!(entry.end_time, at(12, 0));
        assert_eq!(entry.duration, Duration::hours(2) + Duration::minutes(30));
        assert_eq!(entry.total_paused, Duration::minutes(30));
    }

    #[test]
    fn test_staleness_boundary_is_strict() {
        let session = Session::new("", Duration::zero(), at(9, 0));
        let threshold = Duration::hours(1);

        // Exactly at the threshold is not yet stale.
        assert!(!session.is_stale(threshold, at(10, 0)));
        assert!(session.is_stale(threshold, at(10, 0) + Duration::seconds(1)));
    }

    #[test]
    fn test_staleness_of_paused_session_uses_pause_point() {
        let mut session = Session::new("", Duration::zero(), at(9, 0));
        session.pause(at(9, 30));
        let threshold = Duration::hours(1);

        // Measured from the pause, not from the start.
        assert!(!session.is_stale(threshold, at(10, 15)));
        assert!(session.is_stale(threshold, at(10, 31)));
    }

    #[test]
    fn test_abandoned_entry_marks_tag() {
        let session = Session::new("forgotten", Duration::zero(), at(9, 0));
        let entry = session.to_abandoned_entry(at(18, 0));
        assert_eq!(entry.tag, format!("forgotten{}", ABANDONED_SUFFIX));
        assert_eq!(entry.duration, Duration::hours(9));
    }

    #[test]
    fn test_store_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::with_path(temp_dir.path().join("session.json"));
        assert!(!store.exists());

        let mut session = Session::new("deep work", Duration::minutes(90), at(9, 0));
        session.pause(at(9, 30));
        store.save(&session).unwrap();
        assert!(store.exists());

        let loaded = store.load().unwrap();
        assert_eq!(loaded.tag, "deep work");
        assert_eq!(loaded.start_time, session.start_time);
        assert_eq!(loaded.target_duration, Duration::minutes(90));
        assert!(loaded.is_paused);
        assert_eq!(loaded.paused_at, Some(at(9, 30)));

        store.delete().unwrap();
        assert!(!store.exists());
    }

    #[test]
    fn test_store_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::with_path(temp_dir.path().join("nested").join("dir").join("session.json"));
        store.save(&Session::new("", Duration::zero(), at(9, 0))).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_load_missing_session_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::with_path(temp_dir.path().join("session.json"));
        assert!(matches!(store.load(), Err(TideError::SessionNotFound)));
    }

    #[test]
    fn test_load_corrupted_session_is_hard_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::with_path(path);
        assert!(matches!(store.load(), Err(TideError::SessionDecode { .. })));
    }

    #[test]
    fn test_session_file_is_single_json_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");
        let store = SessionStore::with_path(path.clone());
        store.save(&Session::new("focus", Duration::zero(), at(9, 0))).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["tag"], "focus");
        assert_eq!(value["is_paused"], false);
        // An unpaused session serializes no pause point and no target.
        assert!(value.get("paused_at").is_none());
        assert!(value.get("target_duration").is_none());
    }
}
