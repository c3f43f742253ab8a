//! Persisted identity storage
//!
//! The portal keeps exactly one persisted value: the user's nickname under a
//! fixed key. The store is injected so tests can fake it instead of touching
//! the real home directory.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Result;

/// Fixed key under which the nickname is persisted.
pub const NICKNAME_KEY: &str = "nickname";

/// Key-value store holding the persisted identity.
pub trait IdentityStore: Send + Sync {
    /// Read the persisted nickname. `None` is the normal logged-out state.
    fn load(&self) -> Result<Option<String>>;

    /// Persist the nickname, replacing any previous value.
    fn save(&self, nickname: &str) -> Result<()>;

    /// Remove the persisted nickname. Idempotent.
    fn clear(&self) -> Result<()>;
}

/// File-backed store under the portal config directory.
///
/// The value lives in `<dir>/nickname` as plain text, next to the
/// `taas.conf` the CLI writes.
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    /// Store rooted at an explicit directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(NICKNAME_KEY),
        }
    }

    /// Store rooted at the default `~/.taas` directory.
    pub fn default_location() -> Self {
        Self::new(crate::config::default_config_dir())
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed.to_string()))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, nickname: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, nickname)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryIdentityStore {
    value: Mutex<Option<String>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(nickname: &str) -> Self {
        Self {
            value: Mutex::new(Some(nickname.to_string())),
        }
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.lock().unwrap().clone())
    }

    fn save(&self, nickname: &str) -> Result<()> {
        *self.value.lock().unwrap() = Some(nickname.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.value.lock().unwrap() = None;
        Ok(())
    }
}
