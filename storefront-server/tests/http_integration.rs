//! HTTP integration tests for the storefront router.
//!
//! Every request goes through `build_router` via `oneshot`, backed by the
//! in-memory chat store, so no database is needed. The contact endpoint is
//! a wiremock server.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use storefront_core::{MemoryChatStore, StorefrontConfig};
use storefront_server::http::{build_router, HttpState};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> StorefrontConfig {
    let mut config = StorefrontConfig::default();
    config.chat.whatsapp_phone = "9779800000000".to_string();
    config.sitemap.output_path = std::env::temp_dir()
        .join(format!("storefront-http-test-{}.xml", std::process::id()))
        .to_string_lossy()
        .into_owned();
    config
}

fn app_with(config: StorefrontConfig) -> Router {
    let state = HttpState::new(config, Arc::new(MemoryChatStore::new())).unwrap();
    build_router(Arc::new(state))
}

fn app() -> Router {
    app_with(test_config())
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

async fn post_chat(app: &Router, text: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat/messages")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::json!({ "text": text }).to_string()))
        .unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_version_endpoint() {
    let (status, json) = get_json(&app(), "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["protocol"], "storefront/1");
}

#[tokio::test]
async fn test_health_reports_memory_store() {
    let (status, json) = get_json(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["store"], "memory");
    assert_eq!(json["messages"], 0);
}

#[tokio::test]
async fn test_home_page_renders() {
    let (status, body) = get(&app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("id=\"featured\""));
    assert!(body.contains("data-scroll-policy=\"ping-pong\""));
    assert!(body.contains("Netflix"));
    assert!(body.contains("data-refresh-seconds=\"60\""));
}

#[tokio::test]
async fn test_category_without_items_has_no_listing() {
    let (status, body) = get(&app(), "/category/gaming").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("class=\"listing\""));
    assert!(body.contains("empty-note"));

    let (_, body) = get(&app(), "/category/MUSIC").await;
    assert!(body.contains("class=\"listing\""));
    assert!(body.contains("Spotify"));
    assert!(!body.contains("card--red"));
}

#[tokio::test]
async fn test_unknown_product_is_404_page() {
    let (status, body) = get(&app(), "/productinfo/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<html"));

    let (status, _) = get(&app(), "/brand/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(&app(), "/no/such/route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_and_brand_pages() {
    let (status, body) = get(&app(), "/productinfo/spotify-premium-individual").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Spotify"));
    assert!(body.contains("wa.me"));

    let (status, body) = get(&app(), "/brand/netflix").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Netflix"));
}

#[tokio::test]
async fn test_catalog_api_filters() {
    let (status, json) = get_json(&app(), "/api/catalog?category=music").await;
    assert_eq!(status, StatusCode::OK);
    let items = json["items"].as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items
        .iter()
        .all(|i| i["category"].as_str().unwrap().eq_ignore_ascii_case("music")));
    assert_eq!(json["count"], items.len());

    let (_, json) = get_json(&app(), "/api/catalog?category=gaming").await;
    assert_eq!(json["count"], 0);

    let (_, json) = get_json(&app(), "/api/catalog").await;
    assert_eq!(
        json["count"].as_u64().unwrap() as usize,
        storefront_core::data::CATALOG.len()
    );
}

#[tokio::test]
async fn test_chat_round_trip_and_clear() {
    let app = app();

    let (status, json) = post_chat(&app, "How much is Spotify?").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["persisted"], true);
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages[0]["sender"], "user");
    assert_eq!(messages[1]["sender"], "bot");
    assert!(messages[1]["text"].as_str().unwrap().contains("Spotify"));

    let (_, history) = get_json(&app, "/api/chat/messages").await;
    assert_eq!(history["count"], 2);
    assert_eq!(history["messages"][0]["text"], "How much is Spotify?");

    let req = Request::builder()
        .method("DELETE")
        .uri("/api/chat/messages")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let cleared: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(cleared["cleared"], 2);

    let (_, history) = get_json(&app, "/api/chat/messages").await;
    assert_eq!(history["count"], 0);
}

#[tokio::test]
async fn test_blank_chat_message_rejected() {
    let app = app();
    let (status, json) = post_chat(&app, "   ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");

    let (_, history) = get_json(&app, "/api/chat/messages").await;
    assert_eq!(history["count"], 0);
}

fn contact_form(email: &str) -> Request<Body> {
    let body = format!(
        "name=Aarav&email={}&phone=9800000000&service=Netflix&message=Need+a+screen",
        email
    );
    Request::builder()
        .method("POST")
        .uri("/Contactus")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_contact_form_forwards_to_endpoint() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ajax/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": "true" })))
        .expect(1)
        .mount(&mock)
        .await;

    let mut config = test_config();
    config.contact.endpoint = format!("{}/ajax/orders", mock.uri());
    let app = app_with(config);

    let (status, body) = send(&app, contact_form("aarav%40example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("status--ok"));
}

#[tokio::test]
async fn test_contact_form_failure_keeps_input() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock)
        .await;

    let mut config = test_config();
    config.contact.endpoint = format!("{}/ajax/orders", mock.uri());
    let app = app_with(config);

    let (status, body) = send(&app, contact_form("aarav%40example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("status--error"));
    assert!(body.contains("Need a screen"));
}

#[tokio::test]
async fn test_contact_form_invalid_email_never_sent() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let mut config = test_config();
    config.contact.endpoint = format!("{}/ajax/orders", mock.uri());
    let app = app_with(config);

    let (_, body) = send(&app, contact_form("not-an-email")).await;
    assert!(body.contains("status--error"));
    assert!(body.contains("email address is not valid"));
}

#[tokio::test]
async fn test_contact_form_missing_field_shows_failure_page() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let mut config = test_config();
    config.contact.endpoint = format!("{}/ajax/orders", mock.uri());
    let app = app_with(config);

    let req = Request::builder()
        .method("POST")
        .uri("/Contactus")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("name=Sita&email=sita%40example.com&phone=98&message=hi"))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("status--error"));
    assert!(body.contains("service is required"));
    assert!(body.contains("value=\"Sita\""));
}

#[tokio::test]
async fn test_sitemap_missing_then_served() {
    let config = test_config();
    let sitemap_path = config.sitemap.output_path.clone();
    let app = app_with(config);

    let (status, _) = get(&app, "/sitemap.xml").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    std::fs::write(&sitemap_path, "<urlset></urlset>").unwrap();
    let req = Request::builder().uri("/sitemap.xml").body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    std::fs::remove_file(&sitemap_path).ok();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/xml");
}

#[tokio::test]
async fn test_static_assets_served() {
    let (status, body) = get(&app(), "/static/js/storefront.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("data-autoscroll"));
    assert!(body.contains("refreshSeconds"));
}
