//! CLI Commands

pub mod emulator;
pub mod init;
pub mod session;

use taas_core::{FileIdentityStore, HttpEmulatorApi, SessionController};

/// The controller the CLI drives: real HTTP client, real on-disk store.
pub type PortalSession = SessionController<HttpEmulatorApi, FileIdentityStore>;

/// Commands that talk to the hub need a logged-in identity.
pub fn require_identity(session: &PortalSession) -> anyhow::Result<()> {
    if session.identity().is_empty() {
        anyhow::bail!("not logged in, run `taas login <nickname>` first");
    }
    Ok(())
}
