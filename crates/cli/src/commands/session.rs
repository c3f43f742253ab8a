//! `taas login` / `taas logout` / `taas whoami`

use crate::commands::PortalSession;
use crate::output::{print_list, print_message, print_success, print_warning, OutputFormat};

pub async fn login(
    session: &mut PortalSession,
    nickname: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let nickname = nickname.trim();
    if nickname.is_empty() {
        anyhow::bail!("nickname must not be empty");
    }

    // The identity is set and persisted even when the first listing fails;
    // a later `taas emulator list` will retry.
    let listing = session.submit_identity(nickname).await;
    print_success(&format!("Logged in as {}", session.identity()));

    match listing {
        Ok(()) => print_list(session.resources(), format),
        Err(e) => print_warning(&format!("could not list your pods: {}", e)),
    }
    Ok(())
}

pub fn logout(session: &mut PortalSession) -> anyhow::Result<()> {
    if session.identity().is_empty() {
        print_message("Not logged in.", OutputFormat::Plain);
        return Ok(());
    }
    let previous = session.identity().to_string();
    session.clear_identity();
    print_success(&format!("Logged out {}", previous));
    Ok(())
}

pub fn whoami(session: &PortalSession, format: OutputFormat) -> anyhow::Result<()> {
    if session.identity().is_empty() {
        print_message("anonymous (not logged in)", format);
    } else {
        print_message(session.identity(), format);
    }
    Ok(())
}
