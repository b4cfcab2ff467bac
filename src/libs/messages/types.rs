#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION LIFECYCLE MESSAGES ===
    SessionStarted(String),
    SessionStartHint,
    SessionAlreadyActive { tag: String, elapsed: String },
    SessionPausedOnStart(String),
    OneThingAtATime,
    NoSessionToPause,
    NoSessionToResume,
    NoSessionToEnd,
    NoActiveSession,
    SessionPaused { tag: String, worked: String },
    SessionAlreadyPaused(String),
    SessionResumed(String),
    SessionAlreadyRunning(String),
    SessionComplete { tag: String, total: String },
    CarryFocusForward,
    StatusActive { tag: String, elapsed: String },
    StatusPaused { tag: String, paused: String },
    StatusTarget { target: String, percent: i64 },
    StaleSessionAbandoned(String),
    SessionLogFailed(String),
    SessionFileRemoveFailed(String),

    // === LOG MESSAGES ===
    LogHeader(String),
    NoSessionsLogged,
    NoSessionsToday,
    RecentHeader,
    TotalFocusToday(String),
    LogTotal { total: String, count: usize },
    LargeDatasetDetected { lines: usize, files: usize },
    LogFileReadFailed { path: String, error: String },
    InvalidMonthFormat(String),

    // === STATS AND INSIGHTS MESSAGES ===
    StatsHeader(String),
    InsightsNotEnoughData(usize),
    InsightsHeader(usize),

    // === DASHBOARD MESSAGES ===
    DashboardHeader,
    YearlyStatsHeader,

    // === DELETE MESSAGES ===
    NoSessionsToDelete,
    PromptSelectSessionToDelete,
    PromptConfirmDelete,
    SessionDeleted,
    OperationCancelled,
    LogEntryNotFound,

    // === EXPORT MESSAGES ===
    ExportCompleted { path: String, count: usize },
    NoEntriesToExport,

    // === GOAL MESSAGES ===
    GoalSet(String),
    GoalNotSet,
    GoalProgress { done: String, goal: String, percent: i64 },

    // === WATCHER MESSAGES ===
    WatcherStarted(String),
    NudgeIdle(String),
    NudgeActiveTooLong(String),
    NudgePausedTooLong(String),
    ConfigLoadFailed(String),

    // === HOOK MESSAGES ===
    HookFailed { event: String, error: String },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptSelectModules,
    ConfigModuleSession,
    ConfigModuleWatch,
    ConfigModuleGoal,
    PromptStaleThreshold,
    PromptPollInterval,
    PromptRemindAfterIdle,
    PromptRemindAfterActive,
    PromptRemindAfterPause,
    PromptDailyGoal,

    // === DOCTOR MESSAGES ===
    DoctorRunning,
    DoctorConfigDefaults,
    DoctorConfigOk(String),
    DoctorConfigParseFailed { path: String, error: String },
    DoctorSessionOk(String),
    DoctorSessionNone,
    DoctorSessionCorrupted { path: String, error: String },
    DoctorSessionStale(String),
    DoctorLogDirOk(String),
    DoctorLogDirWillCreate(String),
    DoctorLogDirInvalid(String),
    DoctorAllGood,
    DoctorIssuesFound,
}
