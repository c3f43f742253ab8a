//! TLS material loading
//!
//! The certificate and key arrive as PEM files mounted from the deployment
//! environment (e.g. a Kubernetes secret); the gateway only reads them.

use std::path::PathBuf;

use axum_server::tls_rustls::RustlsConfig;

/// Externally supplied certificate/key pair.
#[derive(Clone, Debug)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

impl TlsPaths {
    pub fn new(cert: impl Into<PathBuf>, key: impl Into<PathBuf>) -> Self {
        Self {
            cert: cert.into(),
            key: key.into(),
        }
    }

    /// Load the pair into a rustls server config.
    pub async fn load(&self) -> anyhow::Result<RustlsConfig> {
        RustlsConfig::from_pem_file(&self.cert, &self.key)
            .await
            .map_err(|e| {
                anyhow::anyhow!(
                    "failed to load TLS pair ({}, {}): {}",
                    self.cert.display(),
                    self.key.display(),
                    e
                )
            })
    }
}
