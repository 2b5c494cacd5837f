use axum::http::StatusCode;
use axum::{middleware, routing::any, routing::get, Router};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::seo::{self, SiteState};
use crate::system;

/// All application routes.
///
/// Everything not matched here is served from `static_dir`; unknown paths
/// get `index.html` so the client router can resolve deep links.
pub fn configure_routes(base_url: &str, static_dir: &Path) -> Router {
    let site = SiteState {
        base_url: base_url.into(),
    };
    let index = static_dir.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/robots.txt", get(seo::robots))
        .route("/sitemap.xml", get(seo::sitemap))
        // no API yet; keep /api/ out of the SPA fallback
        .route("/api/*rest", any(|| async { StatusCode::NOT_FOUND }))
        .with_state(site)
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(system::middleware::request_logger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::path::PathBuf;
    use tower::ServiceExt;

    const INDEX_MARKER: &str = "<!-- bpfeedback index -->";

    fn static_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bpfeedback-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), INDEX_MARKER).unwrap();
        dir
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = configure_routes("https://example.com", &static_dir("health"));
        assert_eq!(get_body(app, "/health").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_robots_uses_configured_base_url() {
        let app = configure_routes("https://example.com", &static_dir("robots"));
        let (status, body) = get_body(app, "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sitemap: https://example.com/sitemap.xml"));
        assert!(body.contains("Disallow: /backoffice"));
    }

    #[tokio::test]
    async fn test_sitemap() {
        let app = configure_routes("https://example.com", &static_dir("sitemap"));
        let (status, body) = get_body(app, "/sitemap.xml").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<loc>https://example.com/platform/reports</loc>"));
    }

    #[tokio::test]
    async fn test_deep_links_fall_back_to_index() {
        let dir = static_dir("fallback");
        for uri in ["/", "/login", "/platform/reports", "/backoffice"] {
            let app = configure_routes("https://example.com", &dir);
            let (status, body) = get_body(app, uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, INDEX_MARKER, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_api_paths_are_not_spa_routes() {
        let app = configure_routes("https://example.com", &static_dir("api"));
        let (status, _) = get_body(app, "/api/anything").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
