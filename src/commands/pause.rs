use crate::libs::formatter::format_duration;
use crate::libs::hooks;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;

/// Pauses the active session, freezing the focus timer.
pub fn cmd() -> Result<()> {
    let store = SessionStore::new()?;
    if !store.exists() {
        msg_print!(Message::NoSessionToPause);
        return Ok(());
    }

    let mut session = store.load()?;
    let now = Local::now();

    if !session.pause(now) {
        msg_print!(Message::SessionAlreadyPaused(session.tag));
        return Ok(());
    }
    store.save(&session)?;

    msg_print!(Message::SessionPaused {
        tag: session.tag.clone(),
        worked: format_duration(&session.elapsed(now)),
    });
    hooks::run(hooks::ON_PAUSE, &session.tag);
    Ok(())
}
