//! Static asset serving with SPA fallback

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::tls::TlsPaths;

/// Gateway configuration.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Directory holding the prebuilt frontend bundle.
    pub static_dir: PathBuf,
    /// Certificate/key pair. `None` serves plain HTTP (local dev, tests).
    pub tls: Option<TlsPaths>,
}

/// The asset directory being served.
struct StaticSite {
    dir: PathBuf,
}

impl StaticSite {
    /// Serve `rel` from the bundle directory. An empty path means the entry
    /// document. Requests resolving outside the directory are refused.
    async fn serve(&self, rel: &str) -> Response {
        let rel = rel.trim_start_matches('/');
        if rel.is_empty() {
            return self.serve_file("index.html").await;
        }
        self.serve_file(rel).await
    }

    async fn serve_file(&self, rel: &str) -> Response {
        let requested = self.dir.join(rel);

        // Canonicalize both sides and ensure the request stays inside the
        // bundle directory.
        let Ok(canon_dir) = self.dir.canonicalize() else {
            return (StatusCode::INTERNAL_SERVER_ERROR, "Bad asset dir").into_response();
        };
        let Ok(canon_req) = requested.canonicalize() else {
            return (StatusCode::NOT_FOUND, "Not found").into_response();
        };
        if !canon_req.starts_with(&canon_dir) {
            return (StatusCode::FORBIDDEN, "Forbidden").into_response();
        }

        match tokio::fs::read(&canon_req).await {
            Ok(bytes) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, guess_content_type(rel))],
                bytes,
            )
                .into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    }
}

fn guess_content_type(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "text/html"
    } else if path.ends_with(".js") {
        "application/javascript"
    } else if path.ends_with(".css") {
        "text/css"
    } else if path.ends_with(".json") {
        "application/json"
    } else if path.ends_with(".svg") {
        "image/svg+xml"
    } else if path.ends_with(".png") {
        "image/png"
    } else if path.ends_with(".ico") {
        "image/x-icon"
    } else if path.ends_with(".woff2") {
        "font/woff2"
    } else {
        "application/octet-stream"
    }
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true, "version": crate::VERSION }))
}

/// Catch-all: serve the requested file, or fall back to the entry document
/// for client-side routes.
async fn spa_handler(State(site): State<Arc<StaticSite>>, uri: Uri) -> Response {
    let response = site.serve(uri.path()).await;
    if response.status() != StatusCode::NOT_FOUND {
        return response;
    }
    // SPA fallback: unknown routes map to index.html
    site.serve("index.html").await
}

/// Build the gateway router for a bundle directory.
pub fn router(static_dir: PathBuf) -> Router {
    let site = Arc::new(StaticSite { dir: static_dir });
    Router::new()
        .route("/healthz", get(health_handler))
        .fallback(spa_handler)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(site)
}

/// Start the gateway on `addr`, with TLS when a cert/key pair is configured.
pub async fn serve(addr: SocketAddr, config: GatewayConfig) -> anyhow::Result<()> {
    let app = router(config.static_dir.clone());

    match config.tls {
        Some(tls) => {
            info!("gateway listening on https://{} (bundle: {})", addr, config.static_dir.display());
            let rustls = tls.load().await?;
            axum_server::bind_rustls(addr, rustls)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            info!("gateway listening on http://{} (bundle: {}, TLS disabled)", addr, config.static_dir.display());
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn bundle_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>portal</html>").unwrap();
        std::fs::create_dir(dir.path().join("static")).unwrap();
        std::fs::write(dir.path().join("static/app.js"), "console.log('taas');").unwrap();
        dir
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let dir = bundle_dir();
        let app = router(dir.path().to_path_buf());

        let response = app
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("\"ok\":true"));
    }

    #[tokio::test]
    async fn root_serves_entry_document() {
        let dir = bundle_dir();
        let app = router(dir.path().to_path_buf());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html"
        );
        assert_eq!(body_text(response).await, "<html>portal</html>");
    }

    #[tokio::test]
    async fn static_asset_gets_matching_content_type() {
        let dir = bundle_dir();
        let app = router(dir.path().to_path_buf());

        let response = app
            .oneshot(Request::get("/static/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/javascript"
        );
        assert_eq!(body_text(response).await, "console.log('taas');");
    }

    #[tokio::test]
    async fn unknown_route_falls_back_to_entry_document() {
        let dir = bundle_dir();
        let app = router(dir.path().to_path_buf());

        let response = app
            .oneshot(
                Request::get("/emulator-cloud/pod-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<html>portal</html>");
    }

    #[tokio::test]
    async fn traversal_outside_bundle_is_refused() {
        let parent = tempfile::tempdir().unwrap();
        std::fs::write(parent.path().join("secret.txt"), "top secret").unwrap();
        let bundle = parent.path().join("build");
        std::fs::create_dir(&bundle).unwrap();
        std::fs::write(bundle.join("index.html"), "<html>portal</html>").unwrap();

        let app = router(bundle);

        let response = app
            .oneshot(
                Request::get("/../secret.txt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn content_type_covers_bundle_extensions() {
        assert_eq!(guess_content_type("index.html"), "text/html");
        assert_eq!(guess_content_type("main.css"), "text/css");
        assert_eq!(guess_content_type("logo.svg"), "image/svg+xml");
        assert_eq!(guess_content_type("font.woff2"), "font/woff2");
        assert_eq!(guess_content_type("blob.bin"), "application/octet-stream");
    }
}
