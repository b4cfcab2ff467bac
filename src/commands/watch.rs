//! Foreground watch loop with gentle reminders.
//!
//! Periodically checks the session state and nudges the user to start,
//! resume, or wrap up. Designed to run in a separate, dedicated terminal
//! tab. Nudges are timestamped and written to stderr so the loop can be
//! left running without polluting piped output.

use crate::libs::config::Config;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::libs::watcher::{Nudge, Watcher};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::thread;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Run a single check and exit (used by tests)
    #[arg(long, hide = true)]
    run_once: bool,
}

pub fn cmd(args: WatchArgs) -> Result<()> {
    let config = match Config::read() {
        Ok(config) => config,
        Err(e) => {
            msg_warning!(Message::ConfigLoadFailed(e.to_string()));
            Config::default()
        }
    };
    let watch_config = config.watch_config();
    let store = SessionStore::new()?;

    msg_print!(Message::WatcherStarted(format!("{}s", watch_config.poll_interval)));

    let mut watcher = Watcher::new();
    loop {
        let now = Local::now();
        // For watching purposes an unreadable session is the same as none;
        // the lifecycle commands are where corruption gets surfaced.
        let session = store.load().ok();

        if let Some(nudge) = watcher.tick(session.as_ref(), &watch_config, now) {
            let message = match nudge {
                Nudge::Idle(threshold) => Message::NudgeIdle(format_duration(&threshold)),
                Nudge::ActiveTooLong(threshold) => Message::NudgeActiveTooLong(format_duration(&threshold)),
                Nudge::PausedTooLong(threshold) => Message::NudgePausedTooLong(format_duration(&threshold)),
            };
            eprintln!("[{}] {}", now.format("%I:%M %p"), message);
        }

        if args.run_once {
            break;
        }
        thread::sleep(watch_config.poll_duration());
    }
    Ok(())
}
