//! TaaS Portal Core
//!
//! Session/resource controller for shared QA lab infrastructure, plus the
//! typed client for the device-hub emulator API, the injected identity
//! store, and portal configuration.

pub mod api;
pub mod config;
pub mod error;
pub mod resource;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use api::{EmulatorApi, HttpEmulatorApi};
pub use config::PortalConfig;
pub use error::{Error, Result};
pub use resource::{CreateRequest, DeleteRequest, ListResponse, Resource};
pub use session::SessionController;
pub use store::{FileIdentityStore, IdentityStore, MemoryIdentityStore};

/// Portal version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
