//! Debounced session reminders for the watch loop.
//!
//! Each reminder condition owns an independent timer, so one condition
//! firing never suppresses another. A nudge for a condition is held back
//! until that condition's configured interval has fully elapsed since its
//! own last firing, and leaving a state resets the timers that no longer
//! apply.

use super::config::WatchConfig;
use super::session::Session;
use chrono::{DateTime, Duration, Local};

/// A reminder the watch loop should surface to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Nudge {
    /// No session has existed for longer than the idle threshold.
    Idle(Duration),
    /// An active session has been running past the break threshold.
    ActiveTooLong(Duration),
    /// A paused session has sat past the resume threshold.
    PausedTooLong(Duration),
}

#[derive(Debug, Default)]
pub struct Watcher {
    no_session_since: Option<DateTime<Local>>,
    last_active_nudge: Option<DateTime<Local>>,
    last_paused_nudge: Option<DateTime<Local>>,
}

impl Watcher {
    pub fn new() -> Self {
        Watcher::default()
    }

    /// Evaluates the current session state and returns at most one nudge.
    pub fn tick(&mut self, session: Option<&Session>, cfg: &WatchConfig, now: DateTime<Local>) -> Option<Nudge> {
        match session {
            Some(session) => {
                // A session exists again; the idle timer no longer applies.
                self.no_session_since = None;
                if session.is_paused {
                    self.check_paused(session, cfg, now)
                } else {
                    self.check_active(session, cfg, now)
                }
            }
            None => {
                self.last_active_nudge = None;
                self.last_paused_nudge = None;
                self.check_idle(cfg, now)
            }
        }
    }

    fn check_active(&mut self, session: &Session, cfg: &WatchConfig, now: DateTime<Local>) -> Option<Nudge> {
        let threshold = cfg.active_threshold();
        if now - session.start_time <= threshold {
            return None;
        }
        if let Some(last) = self.last_active_nudge {
            if now - last <= threshold {
                return None;
            }
        }
        self.last_active_nudge = Some(now);
        Some(Nudge::ActiveTooLong(threshold))
    }

    fn check_paused(&mut self, session: &Session, cfg: &WatchConfig, now: DateTime<Local>) -> Option<Nudge> {
        let paused_at = session.paused_at?;
        let threshold = cfg.pause_threshold();
        if now - paused_at <= threshold {
            return None;
        }
        if let Some(last) = self.last_paused_nudge {
            if now - last <= threshold {
                return None;
            }
        }
        self.last_paused_nudge = Some(now);
        Some(Nudge::PausedTooLong(threshold))
    }

    fn check_idle(&mut self, cfg: &WatchConfig, now: DateTime<Local>) -> Option<Nudge> {
        let since = match self.no_session_since {
            Some(since) => since,
            None => {
                self.no_session_since = Some(now);
                return None;
            }
        };
        let threshold = cfg.idle_threshold();
        if now - since > threshold {
            // Restart the countdown after nudging.
            self.no_session_since = Some(now);
            return Some(Nudge::Idle(threshold));
        }
        None
    }
}
