//! Client for the external device-hub emulator API

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};
use crate::resource::{CreateRequest, DeleteRequest, ListResponse, Resource};

/// The device-hub operations the session controller depends on.
///
/// The production implementation is [`HttpEmulatorApi`]; tests substitute
/// an in-memory fake behind this seam.
#[async_trait]
pub trait EmulatorApi: Send + Sync {
    /// Fetch the full pod collection for `identity`, in server order.
    async fn list(&self, identity: &str) -> Result<Vec<Resource>>;

    /// Request a new emulator pod.
    async fn create(&self, request: &CreateRequest) -> Result<()>;

    /// Request deletion of an existing pod.
    async fn delete(&self, request: &DeleteRequest) -> Result<()>;
}

/// HTTP client for the device hub.
pub struct HttpEmulatorApi {
    client: Client,
    base: String,
}

impl HttpEmulatorApi {
    /// Build a client against the hub base URL, e.g. `http://10.0.0.1:8000`.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait]
impl EmulatorApi for HttpEmulatorApi {
    async fn list(&self, identity: &str) -> Result<Vec<Resource>> {
        let url = self.url(&format!("/dhub/emulator/list/{identity}"));
        debug!(%url, "listing emulator pods");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status {
                operation: "list",
                status: response.status().as_u16(),
            });
        }

        // Decode failures are kept distinct from transport failures, so the
        // body is read as text and parsed separately.
        let body = response.text().await?;
        let decoded: ListResponse = serde_json::from_str(&body)?;
        Ok(decoded.results)
    }

    async fn create(&self, request: &CreateRequest) -> Result<()> {
        let url = self.url("/dhub/emulator/create");
        debug!(%url, os = %request.os, version = %request.version, "creating emulator pod");

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status {
                operation: "create",
                status: response.status().as_u16(),
            });
        }
        // Success bodies carry no information the portal consumes.
        Ok(())
    }

    async fn delete(&self, request: &DeleteRequest) -> Result<()> {
        let url = self.url("/dhub/emulator/delete");
        debug!(%url, pod = %request.pod_name, "deleting emulator pod");

        let response = self.client.post(&url).json(request).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status {
                operation: "delete",
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpEmulatorApi::new("http://hub:8000/");
        assert_eq!(
            api.url("/dhub/emulator/list/qa1"),
            "http://hub:8000/dhub/emulator/list/qa1"
        );
    }
}
