//! Begin a new deep work session.
//!
//! Starting is a no-op with a status message when a session already exists;
//! one thing at a time. The exception is a stale session left over from a
//! forgotten day: it is logged as abandoned and its slot freed before the
//! new session begins.

use crate::libs::config::Config;
use crate::libs::formatter::format_duration;
use crate::libs::hooks;
use crate::libs::log_store::LogStore;
use crate::libs::messages::Message;
use crate::libs::session::{Session, SessionStore};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// A description of the work session
    #[arg(long, short, default_value = "Deep Work")]
    tag: String,

    /// Planned session length in minutes (0 = no target)
    #[arg(long, short = 'd', default_value_t = 0)]
    duration: u64,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let store = SessionStore::new()?;
    let now = Local::now();

    if store.exists() {
        let session = store.load()?;
        let config = Config::read()?;

        if session.is_stale(config.stale_threshold(), now) {
            // Convert the forgotten session into an abandoned log entry
            // before freeing the single-session slot.
            LogStore::new()?.append(&session.to_abandoned_entry(now))?;
            store.delete()?;
            msg_warning!(Message::StaleSessionAbandoned(session.tag));
        } else if session.is_paused {
            msg_print!(Message::SessionPausedOnStart(session.tag));
            msg_print!(Message::OneThingAtATime, true);
            return Ok(());
        } else {
            msg_print!(Message::SessionAlreadyActive {
                tag: session.tag.clone(),
                elapsed: format_duration(&session.elapsed(now)),
            });
            msg_print!(Message::OneThingAtATime, true);
            return Ok(());
        }
    }

    let session = Session::new(&args.tag, Duration::minutes(args.duration as i64), now);
    store.save(&session)?;

    msg_print!(Message::SessionStarted(args.tag.clone()), true);
    msg_print!(Message::SessionStartHint);
    hooks::run(hooks::ON_START, &args.tag);
    Ok(())
}
