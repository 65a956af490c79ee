use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use codr_domain::config::SiteConfig;
use codr_domain::constants::{BACKGROUND_ID, BACKGROUND_SRC, NOT_FOUND_CLASS};
use codr_domain::features::FeatureFlags;
use codr_server::Server;
use scraper::{Html, Selector};
use std::path::PathBuf;
use tower::ServiceExt;

const PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../public");

fn app(flags: FeatureFlags) -> Router {
    let mut cfg = SiteConfig::default();
    cfg.storage.static_dir = PathBuf::from(PUBLIC_DIR);
    Server::builder().config(cfg).features(flags).build().expect("server builds").router()
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn count(html: &str, selector: &str) -> usize {
    let selector = Selector::parse(selector).expect("selector");
    Html::parse_document(html).select(&selector).count()
}

#[tokio::test]
async fn home_renders_full_document() {
    let (status, body) = get(app(FeatureFlags::empty()), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert_eq!(count(&body, &format!("img#{BACKGROUND_ID}")), 1);
    assert_eq!(count(&body, "header"), 1);
    assert_eq!(count(&body, "footer"), 1);
}

#[tokio::test]
async fn home_has_no_nav_links_when_flag_is_off() {
    let (_, body) = get(app(FeatureFlags::empty()), "/").await;
    assert_eq!(count(&body, "header nav a"), 1);
}

#[tokio::test]
async fn home_lists_section_links_when_flag_is_on() {
    let (_, body) = get(app(FeatureFlags::SHOW_HEADER_LINKS), "/").await;
    assert_eq!(count(&body, "header nav a[href='/projects']"), 1);
    assert_eq!(count(&body, "header nav a[href='/blog']"), 1);
}

#[tokio::test]
async fn section_routes_follow_the_flag() {
    for path in ["/projects", "/blog"] {
        let (status, body) = get(app(FeatureFlags::empty()), path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path} should be hidden");
        assert_eq!(count(&body, &format!(".{NOT_FOUND_CLASS}")), 1);

        let (status, body) = get(app(FeatureFlags::SHOW_HEADER_LINKS), path).await;
        assert_eq!(status, StatusCode::OK, "{path} should be served");
        assert_eq!(count(&body, &format!(".{NOT_FOUND_CLASS}")), 0);
    }
}

#[tokio::test]
async fn unknown_path_gets_not_found_page() {
    let (status, body) = get(app(FeatureFlags::ALL), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(count(&body, &format!("section.{NOT_FOUND_CLASS}")), 1);
    assert!(body.contains("/nope"));
}

#[tokio::test]
async fn background_asset_is_served() {
    let response = app(FeatureFlags::empty())
        .oneshot(Request::builder().uri(BACKGROUND_SRC).body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let (status, _) = get(app(FeatureFlags::empty()), "/assets/missing.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_up() {
    let (status, body) = get(app(FeatureFlags::empty()), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"status\":\"up\""));
}

#[test]
fn tls_without_cert_files_fails_to_build() {
    let mut cfg = SiteConfig::default();
    cfg.server.ssl = Some(codr_domain::config::SslConfig {
        cert: PathBuf::from("/nonexistent/cert.pem"),
        key: PathBuf::from("/nonexistent/key.pem"),
    });

    assert!(Server::builder().config(cfg).build().is_err());
}
