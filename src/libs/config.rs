//! Configuration management for the tide application.
//!
//! Settings are stored as a single JSON file in the platform data directory
//! resolved by [`DataStorage`]. Every section is optional: a missing file or
//! a missing section means the built-in defaults apply, so the application
//! runs with zero setup.
//!
//! ## Configuration Structure
//!
//! - **Session**: staleness threshold for forgotten sessions
//! - **Watch**: poll interval and the three reminder thresholds
//! - **Daily goal**: target focus minutes per day
//!
//! An interactive setup wizard ([`Config::init`]) walks the user through
//! the sections they want to change, pre-filling current values.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Session lifecycle settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Minutes an active or paused session may sit before it counts as
    /// stale. A stale session is abandoned on the next `start`.
    pub stale_threshold: u64,
}

impl Default for SessionConfig {
    /// Defaults to 8 hours, long enough for any realistic workday.
    fn default() -> Self {
        SessionConfig { stale_threshold: 480 }
    }
}

/// Watch-loop reminder settings.
///
/// Each threshold drives its own independently debounced reminder, so
/// tuning one condition never changes how often another fires.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WatchConfig {
    /// Seconds between watch-loop polls.
    pub poll_interval: u64,
    /// Minutes without any session before an idle reminder.
    pub remind_after_idle: u64,
    /// Minutes a session may run before a break reminder.
    pub remind_after_active: u64,
    /// Minutes a session may stay paused before a resume reminder.
    pub remind_after_pause: u64,
}

impl Default for WatchConfig {
    /// Default values:
    /// - 60 second poll interval
    /// - 30 minutes idle before a start reminder
    /// - 2 hours active before a break reminder
    /// - 30 minutes paused before a resume reminder
    fn default() -> Self {
        WatchConfig {
            poll_interval: 60,
            remind_after_idle: 30,
            remind_after_active: 120,
            remind_after_pause: 30,
        }
    }
}

impl SessionConfig {
    pub fn stale_duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.stale_threshold as i64)
    }
}

impl WatchConfig {
    pub fn poll_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval)
    }

    pub fn idle_threshold(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.remind_after_idle as i64)
    }

    pub fn active_threshold(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.remind_after_active as i64)
    }

    pub fn pause_threshold(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.remind_after_pause as i64)
    }
}

/// Main configuration container for the entire application.
///
/// Unconfigured sections are omitted from the JSON output to keep the file
/// clean and readable for manual editing.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Session lifecycle settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionConfig>,

    /// Watch-loop reminder settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch: Option<WatchConfig>,

    /// Daily focus goal in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_goal: Option<u64>,
}

impl Config {
    /// Reads configuration from the filesystem, falling back to defaults
    /// when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The effective staleness threshold, honoring defaults.
    pub fn stale_threshold(&self) -> chrono::Duration {
        self.session.clone().unwrap_or_default().stale_duration()
    }

    /// The effective watch settings, honoring defaults.
    pub fn watch_config(&self) -> WatchConfig {
        self.watch.clone().unwrap_or_default()
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Presents a multi-select of configurable sections, prompts for each
    /// selected one with current values as defaults, and returns the
    /// updated configuration for saving.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Session", "Watch", "Goal"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Session" => {
                    let default = config.session.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSession);
                    config.session = Some(SessionConfig {
                        stale_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStaleThreshold.to_string())
                            .default(default.stale_threshold)
                            .interact_text()?,
                    });
                }
                "Watch" => {
                    let default = config.watch.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleWatch);
                    config.watch = Some(WatchConfig {
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,

                        remind_after_idle: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRemindAfterIdle.to_string())
                            .default(default.remind_after_idle)
                            .interact_text()?,

                        remind_after_active: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRemindAfterActive.to_string())
                            .default(default.remind_after_active)
                            .interact_text()?,

                        remind_after_pause: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptRemindAfterPause.to_string())
                            .default(default.remind_after_pause)
                            .interact_text()?,
                    });
                }
                "Goal" => {
                    msg_print!(Message::ConfigModuleGoal);
                    config.daily_goal = Some(
                        Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDailyGoal.to_string())
                            .default(config.daily_goal.unwrap_or(240))
                            .interact_text()?,
                    );
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
