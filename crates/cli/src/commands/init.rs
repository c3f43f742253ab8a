//! `taas init` - write the portal config file

use clap::Args;

use taas_core::config::{default_config_dir, CONFIG_FILE};
use taas_core::PortalConfig;

use crate::output::print_success;

#[derive(Args)]
pub struct InitArgs {
    /// Device-hub base URL to record
    #[arg(long)]
    server: Option<String>,

    /// Host the emulator viewer and adb ports are reachable on
    #[arg(long)]
    viewer_host: Option<String>,

    /// Shared viewer credential embedded into viewer links
    #[arg(long)]
    viewer_password: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    force: bool,
}

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    let path = default_config_dir().join(CONFIG_FILE);
    if path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (pass --force to overwrite)",
            path.display()
        );
    }

    let mut config = PortalConfig::default();
    if let Some(server) = args.server {
        config.hub_url = server;
    }
    if let Some(host) = args.viewer_host {
        config.viewer_host = host;
    }
    if let Some(password) = args.viewer_password {
        config.viewer_password = password;
    }

    config.save(&path)?;
    print_success(&format!("Wrote {}", path.display()));
    Ok(())
}
