//! Wire types for the device-hub emulator API

use serde::{Deserialize, Serialize};

/// One provisioned emulator pod as reported by the device hub.
///
/// `name` uniquely identifies a pod within a collection snapshot. The two
/// ports are only used to compose externally opened links (noVNC viewer,
/// `adb connect`); the portal never dials them itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub available: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub adb_port: u16,
    #[serde(default)]
    pub vnc_port: u16,
}

/// Response envelope of `GET /dhub/emulator/list/{identity}`.
///
/// An absent `results` field decodes as an empty collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub results: Vec<Resource>,
}

/// Body of `POST /dhub/emulator/create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequest {
    pub os: String,
    pub version: String,
    pub creator: String,
}

/// Body of `POST /dhub/emulator/delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub pod_name: String,
    pub creator: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_preserves_server_order() {
        let body = r#"{"results": [
            {"name":"pod-2","status":"booting","available":"false","version":"13","adb_port":5557,"vnc_port":5902},
            {"name":"pod-1","status":"ready","available":"true","version":"11","adb_port":5555,"vnc_port":5901}
        ]}"#;
        let resp: ListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].name, "pod-2");
        assert_eq!(resp.results[1].name, "pod-1");
    }

    #[test]
    fn absent_results_decodes_to_empty() {
        let resp: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.results.is_empty());
    }

    #[test]
    fn resource_decodes_full_shape() {
        let body = r#"{"name":"pod-1","status":"ready","available":"true","version":"11","adb_port":5555,"vnc_port":5901}"#;
        let r: Resource = serde_json::from_str(body).unwrap();
        assert_eq!(
            r,
            Resource {
                name: "pod-1".into(),
                status: "ready".into(),
                available: "true".into(),
                version: "11".into(),
                adb_port: 5555,
                vnc_port: 5901,
            }
        );
    }

    #[test]
    fn create_request_serializes_expected_body() {
        let req = CreateRequest {
            os: "android".into(),
            version: "11".into(),
            creator: "qa1".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"os": "android", "version": "11", "creator": "qa1"})
        );
    }
}
