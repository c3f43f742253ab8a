//! Session/resource controller
//!
//! Owns the user identity, the emulator pod collection, and the
//! request/response cycle against the device hub. The presentation layer
//! (CLI, web UI) only reads snapshots and calls the operations here; nothing
//! else mutates this state.
//!
//! Failure handling is deliberately quiet: a failed network operation is
//! logged, the collection keeps its pre-call value, and the loading signal
//! is cleared. Each operation also returns a typed `Result` so a caller that
//! wants to surface the failure can.

use tracing::warn;

use crate::api::EmulatorApi;
use crate::config::PortalConfig;
use crate::error::Result;
use crate::resource::{CreateRequest, DeleteRequest, Resource};
use crate::store::IdentityStore;

pub struct SessionController<A, S> {
    api: A,
    store: S,
    identity: String,
    resources: Vec<Resource>,
    /// Count of in-flight network operations. A count instead of a boolean
    /// keeps the loading signal correct when a mutation and its relist share
    /// one bracket. Operations take `&mut self` and run to completion, so
    /// other callers can only ever observe the signal after it has dropped
    /// back to zero.
    in_flight: u32,
    remember_identity: bool,
    viewer_host: String,
    viewer_password: String,
}

impl<A: EmulatorApi, S: IdentityStore> SessionController<A, S> {
    pub fn new(api: A, store: S, config: &PortalConfig) -> Self {
        Self {
            api,
            store,
            identity: String::new(),
            resources: Vec::new(),
            in_flight: 0,
            remember_identity: config.remember_identity,
            viewer_host: config.viewer_host.clone(),
            viewer_password: config.viewer_password.clone(),
        }
    }

    /// Current identity; empty means anonymous.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Snapshot of the pod collection, in server order.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Whether any network operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Restore a persisted identity once at startup. A present, non-empty
    /// value sets the identity and triggers a relist; an absent value is the
    /// normal logged-out state and is not an error.
    pub async fn restore_identity(&mut self) -> Result<()> {
        match self.store.load() {
            Ok(Some(nickname)) if !nickname.is_empty() => {
                self.identity = nickname;
                self.list_resources().await
            }
            Ok(_) => Ok(()),
            Err(e) => {
                warn!(error = %e, "failed to read persisted nickname");
                Ok(())
            }
        }
    }

    /// Set the identity and relist. With the remember flag on, the name is
    /// persisted; with it off, any previously persisted name is removed so a
    /// later startup cannot resurrect it. The name is taken as-is;
    /// validation is the caller's job. Store failures are logged, never
    /// propagated.
    pub async fn submit_identity(&mut self, name: &str) -> Result<()> {
        self.identity = name.to_string();
        if self.remember_identity {
            if let Err(e) = self.store.save(name) {
                warn!(error = %e, "failed to persist nickname");
            }
        } else if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear persisted nickname");
        }
        self.list_resources().await
    }

    /// Log out: remove the persisted value and reset the identity. The pod
    /// collection is intentionally left as-is. No network call.
    pub fn clear_identity(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear persisted nickname");
        }
        self.identity.clear();
    }

    /// Replace-all refresh of the pod collection, keyed by the current
    /// identity. On failure the collection keeps its pre-call value.
    pub async fn list_resources(&mut self) -> Result<()> {
        self.in_flight += 1;
        let outcome = self.relist().await;
        self.in_flight -= 1;
        outcome
    }

    /// Request a new pod, then relist. The relist happens inside the same
    /// loading bracket, so the signal stays up for the whole sequence.
    pub async fn create_resource(&mut self, os: &str, version: &str) -> Result<()> {
        let request = CreateRequest {
            os: os.to_string(),
            version: version.to_string(),
            creator: self.identity.clone(),
        };

        self.in_flight += 1;
        let outcome = match self.api.create(&request).await {
            Ok(()) => self.relist().await,
            Err(e) => {
                warn!(error = %e, os, version, "failed to create emulator pod");
                Err(e)
            }
        };
        self.in_flight -= 1;
        outcome
    }

    /// Request deletion of a pod by name, then relist.
    pub async fn delete_resource(&mut self, name: &str) -> Result<()> {
        let request = DeleteRequest {
            pod_name: name.to_string(),
            creator: self.identity.clone(),
        };

        self.in_flight += 1;
        let outcome = match self.api.delete(&request).await {
            Ok(()) => self.relist().await,
            Err(e) => {
                warn!(error = %e, pod = name, "failed to delete emulator pod");
                Err(e)
            }
        };
        self.in_flight -= 1;
        outcome
    }

    /// Local status patch for out-of-band updates (e.g. a push
    /// notification). No-op when `name` is not in the collection; never
    /// touches the network.
    pub fn patch_resource_status(&mut self, name: &str, status: &str) {
        if let Some(resource) = self.resources.iter_mut().find(|r| r.name == name) {
            resource.status = status.to_string();
        }
    }

    /// Compose the remote viewer link for a pod's VNC port. Opening it is
    /// the presentation layer's business.
    pub fn remote_viewer_url(&self, vnc_port: u16) -> String {
        if self.viewer_password.is_empty() {
            format!(
                "http://{}:{}/vnc.html?autoconnect=true",
                self.viewer_host, vnc_port
            )
        } else {
            format!(
                "http://{}:{}/vnc.html?autoconnect=true&password={}",
                self.viewer_host, vnc_port, self.viewer_password
            )
        }
    }

    /// `host:port` target for `adb connect`.
    pub fn adb_target(&self, adb_port: u16) -> String {
        format!("{}:{}", self.viewer_host, adb_port)
    }

    async fn relist(&mut self) -> Result<()> {
        match self.api.list(&self.identity).await {
            Ok(results) => {
                self.resources = results;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, identity = %self.identity, "failed to list emulator pods");
                Err(e)
            }
        }
    }
}
