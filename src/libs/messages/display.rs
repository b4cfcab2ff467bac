//! Display implementation for tide application messages.
//!
//! This module provides the `Display` trait implementation for the `Message`
//! enum, converting structured message data into the text shown to the user.
//! All user-facing wording lives here, in one place, so commands never embed
//! literal strings and the tone stays consistent across the application.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === SESSION LIFECYCLE MESSAGES ===
            Message::SessionStarted(tag) => format!("🌊 Starting deep work: {}", tag),
            Message::SessionStartHint => "Use 'tide status' to check, 'tide end' to complete.".to_string(),
            Message::SessionAlreadyActive { tag, elapsed } => {
                format!("🌊 Already in deep work: {}\nWorking for {}. Use 'tide end' to complete.", tag, elapsed)
            }
            Message::SessionPausedOnStart(tag) => {
                format!("🌊 You have a paused session: {}\nUse 'tide resume' to continue or 'tide end' to finish.", tag)
            }
            Message::OneThingAtATime => "One thing at a time.".to_string(),
            Message::NoSessionToPause => "🌊 No active session to pause.".to_string(),
            Message::NoSessionToResume => "🌊 No session to resume.".to_string(),
            Message::NoSessionToEnd => "🌊 No active session to end.".to_string(),
            Message::NoActiveSession => "🌊 No active session.\nUse 'tide start' to begin deep work.".to_string(),
            Message::SessionPaused { tag, worked } => {
                format!("⏸️  Paused: {}\nWorked for {}. Use 'tide resume' when ready.", tag, worked)
            }
            Message::SessionAlreadyPaused(tag) => format!("⏸️  Session already paused: {}", tag),
            Message::SessionResumed(tag) => format!("🌊 Resumed: {}\nContinue your deep work.", tag),
            Message::SessionAlreadyRunning(tag) => format!("🌊 Session already active: {}", tag),
            Message::SessionComplete { tag, total } => {
                format!("✨ Session complete: {}\nTotal focus time: {}", tag, total)
            }
            Message::CarryFocusForward => "Carry this focus forward.".to_string(),
            Message::StatusActive { tag, elapsed } => format!("🌊 Deep work: {}\nActive for {}.", tag, elapsed),
            Message::StatusPaused { tag, paused } => {
                format!("⏸️  Session paused: {}\nPaused for {}. Use 'tide resume' to continue.", tag, paused)
            }
            Message::StatusTarget { target, percent } => format!("Target: {} ({}%)", target, percent),
            Message::StaleSessionAbandoned(tag) => format!("Abandoned stale session: {}", tag),
            Message::SessionLogFailed(err) => format!("Failed to log session: {}", err),
            Message::SessionFileRemoveFailed(err) => format!("Could not remove session file: {}", err),

            // === LOG MESSAGES ===
            Message::LogHeader(period) => format!("🌊 {}:", period),
            Message::NoSessionsLogged => "No sessions logged for the selected period. Use 'tide start' to begin.".to_string(),
            Message::NoSessionsToday => "No sessions completed today. Keep up the focus!".to_string(),
            Message::RecentHeader => "✨ Today's Completed Sessions ✨".to_string(),
            Message::TotalFocusToday(total) => format!("Total focus time today: {}", total),
            Message::LogTotal { total, count } => format!("Total: {} across {} sessions", total, count),
            Message::LargeDatasetDetected { lines, files } => {
                format!(
                    "Large dataset detected ({} lines across {} files). Consider using more specific filters.",
                    lines, files
                )
            }
            Message::LogFileReadFailed { path, error } => format!("Error reading {}: {}", path, error),
            Message::InvalidMonthFormat(input) => format!("Invalid month format '{}'. Please use YYYY-MM.", input),

            // === STATS AND INSIGHTS MESSAGES ===
            Message::StatsHeader(period) => format!("🌊 Deep Work Statistics ({}):", period),
            Message::InsightsNotEnoughData(count) => {
                format!(
                    "You have logged {} sessions. At least 10 are needed for meaningful insights. Keep up the great work!",
                    count
                )
            }
            Message::InsightsHeader(count) => format!("📊 Your Focus Insights (based on {} sessions)", count),

            // === DASHBOARD MESSAGES ===
            Message::DashboardHeader => "Your Deep Work History (Last Year)".to_string(),
            Message::YearlyStatsHeader => "Yearly Stats".to_string(),

            // === DELETE MESSAGES ===
            Message::NoSessionsToDelete => "No sessions to delete.".to_string(),
            Message::PromptSelectSessionToDelete => "Select a session to delete".to_string(),
            Message::PromptConfirmDelete => "Are you sure you want to delete this session?".to_string(),
            Message::SessionDeleted => "Session deleted.".to_string(),
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::LogEntryNotFound => "Log entry not found.".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted { path, count } => format!("Exported {} entries to {}", count, path),
            Message::NoEntriesToExport => "No log entries found for the selected period.".to_string(),

            // === GOAL MESSAGES ===
            Message::GoalSet(goal) => format!("Daily focus goal set to: {}", goal),
            Message::GoalNotSet => "No daily goal set. Use 'tide goal --set <minutes>' to set one.".to_string(),
            Message::GoalProgress { done, goal, percent } => {
                format!("🎯 Daily goal: {} / {} ({}%)", done, goal, percent)
            }

            // === WATCHER MESSAGES ===
            Message::WatcherStarted(interval) => format!("🌊 Tide watcher started. Checking every {}.", interval),
            Message::NudgeIdle(threshold) => format!("💡 No active session for over {}. Ready to start one?", threshold),
            Message::NudgeActiveTooLong(threshold) => format!("🏃 Session active for over {}. Time for a break?", threshold),
            Message::NudgePausedTooLong(threshold) => format!("🤔 Session paused for over {}. Ready to resume?", threshold),
            Message::ConfigLoadFailed(err) => format!("Could not load config file: {}", err),

            // === HOOK MESSAGES ===
            Message::HookFailed { event, error } => format!("Hook '{}' failed to run: {}", event, error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleSession => "Session settings:".to_string(),
            Message::ConfigModuleWatch => "Watcher settings:".to_string(),
            Message::ConfigModuleGoal => "Goal settings:".to_string(),
            Message::PromptStaleThreshold => "Stale session threshold (minutes)".to_string(),
            Message::PromptPollInterval => "Poll interval (seconds)".to_string(),
            Message::PromptRemindAfterIdle => "Remind after idle (minutes)".to_string(),
            Message::PromptRemindAfterActive => "Remind after active (minutes)".to_string(),
            Message::PromptRemindAfterPause => "Remind after pause (minutes)".to_string(),
            Message::PromptDailyGoal => "Daily focus goal (minutes)".to_string(),

            // === DOCTOR MESSAGES ===
            Message::DoctorRunning => "🩺 Running diagnostics...".to_string(),
            Message::DoctorConfigDefaults => "Config file: OK (no config file found, using defaults)".to_string(),
            Message::DoctorConfigOk(path) => format!("Config file: OK (loaded successfully from {})", path),
            Message::DoctorConfigParseFailed { path, error } => {
                format!("Config file: found at {}, but could not parse: {}", path, error)
            }
            Message::DoctorSessionOk(path) => format!("Session file: OK (readable at {})", path),
            Message::DoctorSessionNone => "Session file: OK (no active session)".to_string(),
            Message::DoctorSessionCorrupted { path, error } => {
                format!("Session file: corrupted or unreadable at {}: {}", path, error)
            }
            Message::DoctorSessionStale(tag) => {
                format!("Session '{}' looks stale. It will be abandoned on the next 'tide start'.", tag)
            }
            Message::DoctorLogDirOk(path) => format!("Log directory: OK (exists at {})", path),
            Message::DoctorLogDirWillCreate(path) => format!("Log directory: OK (will be created at {})", path),
            Message::DoctorLogDirInvalid(path) => format!("Log directory: path at {} is not a valid directory", path),
            Message::DoctorAllGood => "✨ Your tide setup looks healthy! ✨".to_string(),
            Message::DoctorIssuesFound => "Found issues with your setup. Please review the messages above.".to_string(),
        };
        write!(f, "{}", message)
    }
}
