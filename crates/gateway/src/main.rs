use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

use taas_gateway::server::{serve, GatewayConfig};
use taas_gateway::tls::TlsPaths;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let addr: SocketAddr = std::env::var("TAAS_GATEWAY_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    let static_dir = PathBuf::from(
        std::env::var("TAAS_STATIC_DIR").unwrap_or_else(|_| "build".to_string()),
    );
    if !static_dir.is_dir() {
        anyhow::bail!(
            "bundle directory {} does not exist (set TAAS_STATIC_DIR)",
            static_dir.display()
        );
    }

    // Both must be present for TLS; otherwise serve plain HTTP.
    let tls = match (
        std::env::var("TAAS_TLS_CERT").ok(),
        std::env::var("TAAS_TLS_KEY").ok(),
    ) {
        (Some(cert), Some(key)) => Some(TlsPaths::new(cert, key)),
        (None, None) => {
            warn!("TAAS_TLS_CERT/TAAS_TLS_KEY not set, serving without TLS");
            None
        }
        _ => anyhow::bail!("TAAS_TLS_CERT and TAAS_TLS_KEY must be set together"),
    };

    serve(addr, GatewayConfig { static_dir, tls }).await
}
