use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Output only the session tag for scripting
    #[arg(long)]
    raw: bool,
}

/// Shows the current session state: tag, elapsed focus time, pause length,
/// and progress toward the planned length when one was set.
pub fn cmd(args: StatusArgs) -> Result<()> {
    let store = SessionStore::new()?;

    if args.raw {
        // Scripting mode: print the bare tag, or nothing at all.
        if store.exists() {
            if let Ok(session) = store.load() {
                print!("{}", session.tag);
            }
        }
        return Ok(());
    }

    if !store.exists() {
        msg_print!(Message::NoActiveSession);
        return Ok(());
    }

    let session = store.load()?;
    let now = Local::now();

    if session.is_paused {
        msg_print!(Message::StatusPaused {
            tag: session.tag.clone(),
            paused: format_duration(&session.paused_for(now)),
        });
    } else {
        msg_print!(Message::StatusActive {
            tag: session.tag.clone(),
            elapsed: format_duration(&session.elapsed(now)),
        });
    }

    if !session.target_duration.is_zero() {
        let elapsed = session.elapsed(now).num_seconds();
        let target = session.target_duration.num_seconds();
        let percent = if target > 0 { elapsed * 100 / target } else { 0 };
        msg_print!(Message::StatusTarget {
            target: format_duration(&session.target_duration),
            percent,
        });
    }

    Ok(())
}
