//! TaaS portal gateway
//!
//! Serves the compiled frontend bundle over TLS with SPA fallback routing.
//! The bundle directory and the certificate/key pair are supplied
//! externally; everything here is generic static-file plumbing.

pub mod server;
pub mod tls;

/// Gateway version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
