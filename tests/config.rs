#[cfg(test)]
mod tests {
    use chrono::Duration;
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use tempfile::TempDir;
    use tide::libs::config::{Config, SessionConfig, WatchConfig};

    // Config resolves its path from environment variables, so tests that
    // touch the environment must not interleave.
    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(|e| e.into_inner())
    }

    fn isolate_storage(temp_dir: &TempDir) {
        std::env::set_var("HOME", temp_dir.path());
        std::env::set_var("XDG_DATA_HOME", temp_dir.path());
        std::env::set_var("LOCALAPPDATA", temp_dir.path());
    }

    #[test]
    fn test_read_without_file_returns_defaults() {
        let _guard = env_lock();
        let temp_dir = TempDir::new().unwrap();
        isolate_storage(&temp_dir);

        let config = Config::read().unwrap();
        assert!(config.session.is_none());
        assert!(config.watch.is_none());
        assert!(config.daily_goal.is_none());
    }

    #[test]
    fn test_save_and_read_roundtrip() {
        let _guard = env_lock();
        let temp_dir = TempDir::new().unwrap();
        isolate_storage(&temp_dir);

        let config = Config {
            session: Some(SessionConfig { stale_threshold: 360 }),
            watch: Some(WatchConfig {
                poll_interval: 30,
                remind_after_idle: 15,
                remind_after_active: 90,
                remind_after_pause: 20,
            }),
            daily_goal: Some(240),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.session, Some(SessionConfig { stale_threshold: 360 }));
        assert_eq!(read_config.watch.as_ref().unwrap().poll_interval, 30);
        assert_eq!(read_config.watch.as_ref().unwrap().remind_after_active, 90);
        assert_eq!(read_config.daily_goal, Some(240));
    }

    #[test]
    fn test_default_session_config() {
        let session = SessionConfig::default();
        assert_eq!(session.stale_threshold, 480);
        assert_eq!(session.stale_duration(), Duration::hours(8));
    }

    #[test]
    fn test_default_watch_config() {
        let watch = WatchConfig::default();
        assert_eq!(watch.poll_interval, 60);
        assert_eq!(watch.remind_after_idle, 30);
        assert_eq!(watch.remind_after_active, 120);
        assert_eq!(watch.remind_after_pause, 30);
        assert_eq!(watch.idle_threshold(), Duration::minutes(30));
        assert_eq!(watch.active_threshold(), Duration::hours(2));
        assert_eq!(watch.pause_threshold(), Duration::minutes(30));
        assert_eq!(watch.poll_duration(), std::time::Duration::from_secs(60));
    }

    #[test]
    fn test_effective_values_honor_missing_sections() {
        let config = Config::default();
        assert_eq!(config.stale_threshold(), Duration::hours(8));
        assert_eq!(config.watch_config(), WatchConfig::default());
    }

    #[test]
    fn test_effective_values_honor_overrides() {
        let config = Config {
            session: Some(SessionConfig { stale_threshold: 60 }),
            watch: Some(WatchConfig {
                poll_interval: 5,
                remind_after_idle: 1,
                remind_after_active: 2,
                remind_after_pause: 3,
            }),
            daily_goal: None,
        };
        assert_eq!(config.stale_threshold(), Duration::hours(1));
        assert_eq!(config.watch_config().poll_interval, 5);
    }
}
