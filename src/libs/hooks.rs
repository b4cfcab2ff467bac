//! Best-effort execution of user lifecycle hook scripts.
//!
//! A hook is an executable placed in the `hooks/` directory under the data
//! path, named after a lifecycle event. It receives the session tag as its
//! only argument. Hooks are a power-user feature: every failure here is
//! swallowed so a broken script can never break the session lifecycle.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_debug;
use std::process::Command;

pub const ON_START: &str = "on_start";
pub const ON_PAUSE: &str = "on_pause";
pub const ON_RESUME: &str = "on_resume";
pub const ON_END: &str = "on_end";

/// Runs the user hook script for `event`, passing the session tag.
pub fn run(event: &str, tag: &str) {
    let path = DataStorage::new().hook_path(event);

    let meta = match std::fs::metadata(&path) {
        Ok(meta) => meta,
        Err(_) => return,
    };
    if !meta.is_file() {
        return;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if meta.permissions().mode() & 0o111 == 0 {
            return;
        }
    }

    if let Err(e) = Command::new(&path).arg(tag).status() {
        msg_debug!(Message::HookFailed {
            event: event.to_string(),
            error: e.to_string(),
        });
    }
}
