//! Portal configuration
//!
//! A small YAML file under `~/.taas/taas.conf` carries the device-hub
//! address and viewer settings; environment variables override it. Missing
//! file means defaults, matching how the CLI has always behaved.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Config file name inside the portal directory.
pub const CONFIG_FILE: &str = "taas.conf";

/// Default device-hub endpoint used when nothing is configured.
pub const DEFAULT_HUB_URL: &str = "http://127.0.0.1:8000";

/// Default host carrying the noVNC viewer and the adb endpoints.
pub const DEFAULT_VIEWER_HOST: &str = "127.0.0.1";

/// Portal-wide settings shared by the CLI and any other presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Device-hub base URL, e.g. `http://10.160.83.213:8000`.
    #[serde(default = "default_hub_url")]
    pub hub_url: String,

    /// Host the emulator viewer and adb ports are reachable on.
    #[serde(default = "default_viewer_host")]
    pub viewer_host: String,

    /// Shared viewer credential embedded into composed viewer links.
    #[serde(default)]
    pub viewer_password: String,

    /// Whether `submit_identity` persists the nickname. The portal has
    /// always persisted unconditionally; the flag makes the non-persisting
    /// mode an explicit choice instead of dead code.
    #[serde(default = "default_true")]
    pub remember_identity: bool,
}

fn default_hub_url() -> String {
    DEFAULT_HUB_URL.to_string()
}

fn default_viewer_host() -> String {
    DEFAULT_VIEWER_HOST.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            hub_url: default_hub_url(),
            viewer_host: default_viewer_host(),
            viewer_password: String::new(),
            remember_identity: true,
        }
    }
}

impl PortalConfig {
    /// Load from a config file, falling back to defaults when it is absent,
    /// then apply environment overrides (`TAAS_HUB_URL`, `TAAS_VIEWER_HOST`,
    /// `TAAS_VIEWER_PASSWORD`, `TAAS_REMEMBER_IDENTITY`).
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&raw)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from the default `~/.taas/taas.conf` location.
    pub fn load_default() -> Result<Self> {
        Self::load(&default_config_dir().join(CONFIG_FILE))
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env("TAAS_HUB_URL") {
            self.hub_url = url;
        }
        if let Some(host) = non_empty_env("TAAS_VIEWER_HOST") {
            self.viewer_host = host;
        }
        if let Some(password) = non_empty_env("TAAS_VIEWER_PASSWORD") {
            self.viewer_password = password;
        }
        if let Some(flag) = non_empty_env("TAAS_REMEMBER_IDENTITY") {
            self.remember_identity = flag != "0" && !flag.eq_ignore_ascii_case("false");
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Default portal directory, `~/.taas`.
pub fn default_config_dir() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".taas")
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PortalConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.hub_url, DEFAULT_HUB_URL);
        assert!(config.remember_identity);
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let config = PortalConfig {
            hub_url: "http://10.160.83.213:8000".into(),
            viewer_host: "10.160.83.213".into(),
            viewer_password: "lab".into(),
            remember_identity: false,
        };
        config.save(&path).unwrap();

        let loaded = PortalConfig::load(&path).unwrap();
        assert_eq!(loaded.hub_url, "http://10.160.83.213:8000");
        assert_eq!(loaded.viewer_host, "10.160.83.213");
        assert_eq!(loaded.viewer_password, "lab");
        assert!(!loaded.remember_identity);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "hub_url: http://hub:8000\n").unwrap();

        let loaded = PortalConfig::load(&path).unwrap();
        assert_eq!(loaded.hub_url, "http://hub:8000");
        assert_eq!(loaded.viewer_host, DEFAULT_VIEWER_HOST);
        assert!(loaded.remember_identity);
    }
}
