//! Endpoint tests driving the router directly, no socket bound

use std::io::Write;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use version_gate::config::ServerConfig;
use version_gate::gate::store::FileVersionStore;
use version_gate::server::routes::{AppState, router};

const HOMEPAGE: &str = "https://example.com/";

/// Router backed by a store file with the given content, or by a missing
/// file when `content` is `None`.
fn app(dir: &TempDir, content: Option<&str>) -> Router {
    let path = dir.path().join("version.txt");
    if let Some(content) = content {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    let config = ServerConfig {
        version_file: path.clone(),
        redirect_url: HOMEPAGE.to_string(),
        ..ServerConfig::default()
    };
    let state = Arc::new(AppState {
        config,
        store: Box::new(FileVersionStore::new(path)),
    });
    router(state)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn missing_version_parameter_redirects_to_homepage() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir, Some("1.2.3.4\n"))
        .oneshot(Request::get("/check-update").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], HOMEPAGE);
}

#[tokio::test]
async fn current_version_renders_up_to_date_page() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir, Some("1.2.3.4\n"))
        .oneshot(
            Request::get("/check-update?version=1.2.3.4")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Your version is up to date"));
}

#[tokio::test]
async fn stale_version_renders_upgrade_page() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir, Some("1.2.3.4\n"))
        .oneshot(
            Request::get("/check-update?version=1.2.3.3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("Your version is 1.2.3.3"));
    assert!(body.contains("The last version is 1.2.3.4"));
    assert!(body.contains("Upgrade"));
}

#[tokio::test]
async fn malformed_version_is_evaluated_as_all_zero() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir, Some("1.2.3.4\n"))
        .oneshot(
            Request::get("/check-update?version=not-a-version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("Your version is 0.0.0.0"));
}

#[tokio::test]
async fn higher_major_with_lower_minor_is_reported_stale() {
    // End-to-end reproduction of the documented comparison defect.
    let dir = TempDir::new().unwrap();
    let response = app(&dir, Some("1.9.0.0\n"))
        .oneshot(
            Request::get("/check-update?version=2.0.0.0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("Upgrade"));
}

#[tokio::test]
async fn unreadable_store_treats_reference_as_all_zero() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir, None)
        .oneshot(
            Request::get("/check-update?version=0.0.0.0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = body_string(response).await;
    assert!(body.contains("Your version is up to date"));
}

#[tokio::test]
async fn badge_returns_a_jpeg() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir, Some("1.2.3.4\n"))
        .oneshot(Request::get("/version.jpg").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(&[0xFF, 0xD8]));
}

#[tokio::test]
async fn badge_with_missing_store_still_returns_a_valid_jpeg() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir, None)
        .oneshot(Request::get("/version.jpg").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.starts_with(&[0xFF, 0xD8]));
}

#[tokio::test]
async fn health_reports_ok() {
    let dir = TempDir::new().unwrap();
    let response = app(&dir, Some("1.2.3.4\n"))
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "version-gate");
}
