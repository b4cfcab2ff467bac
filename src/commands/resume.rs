use crate::libs::hooks;
use crate::libs::messages::Message;
use crate::libs::session::SessionStore;
use crate::msg_print;
use anyhow::Result;
use chrono::Local;

/// Resumes a paused session, folding the pause into the total.
pub fn cmd() -> Result<()> {
    let store = SessionStore::new()?;
    if !store.exists() {
        msg_print!(Message::NoSessionToResume);
        return Ok(());
    }

    let mut session = store.load()?;
    let now = Local::now();

    if !session.resume(now) {
        msg_print!(Message::SessionAlreadyRunning(session.tag));
        return Ok(());
    }
    store.save(&session)?;

    msg_print!(Message::SessionResumed(session.tag.clone()));
    hooks::run(hooks::ON_RESUME, &session.tag);
    Ok(())
}
