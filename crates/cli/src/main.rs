//! TaaS CLI - Main Entry Point
//!
//! Terminal client for the TaaS portal: log in with a nickname, then list,
//! create, delete and view emulator pods on the device hub.

use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{emulator, init, session};
use taas_core::{FileIdentityStore, HttpEmulatorApi, PortalConfig, SessionController};

/// TaaS CLI - shared QA lab emulator portal
#[derive(Parser)]
#[command(name = "taas")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Device-hub base URL (overrides the config file)
    #[arg(long, global = true, env = "TAAS_HUB_URL")]
    hub_url: Option<String>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the portal config file under ~/.taas
    Init(init::InitArgs),

    /// Log in with a nickname
    Login {
        /// Nickname the hub tracks your pods under
        nickname: String,
    },

    /// Log out and forget the persisted nickname
    Logout,

    /// Show the current identity
    Whoami,

    /// Manage emulator pods
    #[command(subcommand)]
    Emulator(emulator::EmulatorCommands),

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Init(args) => init::execute(args)?,
        Commands::Version => {
            println!("TaaS CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Shared QA lab emulator portal");
        }
        command => {
            let mut config = PortalConfig::load_default()?;
            if let Some(hub_url) = cli.hub_url {
                config.hub_url = hub_url;
            }

            let api = HttpEmulatorApi::new(&config.hub_url);
            let store = FileIdentityStore::default_location();
            let mut portal = SessionController::new(api, store, &config);

            // Pick up a persisted nickname; a failed first listing is logged
            // by the controller and must not block the command.
            let _ = portal.restore_identity().await;

            match command {
                Commands::Login { nickname } => {
                    session::login(&mut portal, &nickname, cli.format).await?
                }
                Commands::Logout => session::logout(&mut portal)?,
                Commands::Whoami => session::whoami(&portal, cli.format)?,
                Commands::Emulator(cmd) => {
                    emulator::execute(cmd, &mut portal, cli.format).await?
                }
                Commands::Init(_) | Commands::Version => unreachable!(),
            }
        }
    }

    Ok(())
}
