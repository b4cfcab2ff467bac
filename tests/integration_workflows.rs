#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone};
    use tempfile::TempDir;
    use tide::libs::log_reader::LogReader;
    use tide::libs::log_store::LogStore;
    use tide::libs::session::{Session, SessionStore, ABANDONED_SUFFIX};

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 7, 3, hour, minute, 0).unwrap()
    }

    struct Workspace {
        _temp_dir: TempDir,
        sessions: SessionStore,
        log: LogStore,
        reader: LogReader,
    }

    impl Workspace {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let sessions = SessionStore::with_path(temp_dir.path().join("session.json"));
            let log = LogStore::with_dir(temp_dir.path().join("logs"));
            let reader = LogReader::with_dir(temp_dir.path().join("logs"));
            Workspace {
                _temp_dir: temp_dir,
                sessions,
                log,
                reader,
            }
        }
    }

    #[test]
    fn test_full_session_lifecycle_lands_in_history() {
        let ws = Workspace::new();

        // Start.
        ws.sessions.save(&Session::new("deep work", Duration::zero(), at(9, 0))).unwrap();
        assert!(ws.sessions.exists());

        // Pause over lunch, resume after.
        let mut session = ws.sessions.load().unwrap();
        assert!(session.pause(at(12, 0)));
        ws.sessions.save(&session).unwrap();

        let mut session = ws.sessions.load().unwrap();
        assert!(session.resume(at(12, 45)));
        ws.sessions.save(&session).unwrap();

        // End; the entry is logged before the slot is freed.
        let session = ws.sessions.load().unwrap();
        let entry = session.to_entry(at(17, 0));
        ws.log.append(&entry).unwrap();
        ws.sessions.delete().unwrap();
        assert!(!ws.sessions.exists());

        let history = ws.reader.read_all().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].tag, "deep work");
        // Eight hours at the desk minus the 45 minute pause.
        assert_eq!(history[0].duration, Duration::hours(7) + Duration::minutes(15));
        assert_eq!(history[0].total_paused, Duration::minutes(45));
    }

    #[test]
    fn test_stale_session_abandonment_frees_the_slot() {
        let ws = Workspace::new();

        let session = Session::new("forgotten", Duration::zero(), at(6, 0));
        ws.sessions.save(&session).unwrap();

        // Ten hours later the session is past an eight hour threshold.
        let now = at(16, 30);
        let threshold = Duration::hours(8);
        let session = ws.sessions.load().unwrap();
        assert!(session.is_stale(threshold, now));

        ws.log.append(&session.to_abandoned_entry(now)).unwrap();
        ws.sessions.delete().unwrap();

        // The slot is free for a fresh session.
        assert!(!ws.sessions.exists());
        ws.sessions.save(&Session::new("fresh", Duration::zero(), now)).unwrap();

        let history = ws.reader.read_all().unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].tag.ends_with(ABANDONED_SUFFIX));
    }

    #[test]
    fn test_delete_shrinks_visible_history() {
        let ws = Workspace::new();

        for (tag, hour) in [("keep", 9), ("drop", 11), ("also keep", 13)] {
            let session = Session::new(tag, Duration::zero(), at(hour, 0));
            ws.log.append(&session.to_entry(at(hour, 50))).unwrap();
        }
        assert_eq!(ws.reader.read_all().unwrap().len(), 3);

        let target = ws
            .reader
            .read_all()
            .unwrap()
            .into_iter()
            .find(|e| e.tag == "drop")
            .unwrap();
        ws.log.delete_entry(&target).unwrap();

        let remaining = ws.reader.read_all().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|e| e.tag != "drop"));
    }
}
