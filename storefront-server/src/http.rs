//! Storefront HTTP server
//!
//! Axum server for the rendered pages, the chat widget JSON API and the
//! contact form.
//!
//! Architecture: each endpoint has a thin axum handler that delegates to a pure
//! inner function. The inner functions are directly testable without axum
//! dispatch machinery.
//!
//! Endpoints:
//! - GET  /, /subscription, /allproduct, /category/:id, /productinfo/:slug, /brand/:slug
//! - GET  /Contactus, POST /Contactus  contact form
//! - GET  /sitemap.xml                 pre-generated sitemap file
//! - GET  /health, /version
//! - GET  /api/catalog?category=...
//! - GET|POST|DELETE /api/chat/messages

use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Deserialize;
use storefront_core::data::CATALOG;
use storefront_core::models::ContactSubmission;
use storefront_core::{
    filter_by_category, ChatBot, ChatStore, ContactClient, ContactError, StorefrontConfig,
    StorefrontError,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::pages::{ContactStatus, PageRenderer};
use crate::subsystems::chat;

/// Shared state for all HTTP handlers
pub struct HttpState {
    pub config: StorefrontConfig,
    pub store: Arc<dyn ChatStore>,
    pub bot: ChatBot,
    pub contact: ContactClient,
    pub pages: PageRenderer,
}

impl HttpState {
    pub fn new(config: StorefrontConfig, store: Arc<dyn ChatStore>) -> Result<Self> {
        let bot = ChatBot::new(&config.chat.whatsapp_phone);
        let contact = ContactClient::new(&config.contact)?;
        let pages = PageRenderer::new(&config)?;
        Ok(Self {
            config,
            store,
            bot,
            contact,
            pages,
        })
    }
}

/// Build the Axum router with all endpoints
pub fn build_router(state: Arc<HttpState>) -> Router {
    let static_dir = state.config.http.static_dir.clone();

    Router::new()
        .route("/", get(home_handler))
        .route("/subscription", get(subscription_handler))
        .route("/allproduct", get(all_products_handler))
        .route("/category/:id", get(category_handler))
        .route("/productinfo/:slug", get(product_handler))
        .route("/brand/:slug", get(brand_handler))
        .route("/Contactus", get(contact_page_handler).post(contact_submit_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .route("/api/catalog", get(catalog_handler))
        .route(
            "/api/chat/messages",
            get(chat_history_handler)
                .post(chat_send_handler)
                .delete(chat_clear_handler),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server on the configured address.
/// Gracefully shuts down when the broadcast shutdown signal fires.
pub async fn start_http_server(
    state: Arc<HttpState>,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<()> {
    let addr = format!("{}:{}", state.config.http.host, state.config.http.port);

    let app = build_router(state);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Storefront listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            tracing::info!("HTTP server shutting down...");
        })
        .await?;

    Ok(())
}

// ============================================================================
// Request DTOs
// ============================================================================

#[derive(Debug, Deserialize, Default)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatSendRequest {
    pub text: Option<String>,
}

// ============================================================================
// Inner (directly testable) business logic functions
// ============================================================================

/// Inner health check: probes the chat store and returns (status_code, json_body).
pub async fn health_inner(store: &dyn ChatStore) -> (StatusCode, serde_json::Value) {
    match store.list().await {
        Ok(messages) => (
            StatusCode::OK,
            serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "store": store.name(),
                "messages": messages.len(),
            }),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            serde_json::json!({
                "status": "unhealthy",
                "store": store.name(),
                "error": e.to_string(),
            }),
        ),
    }
}

/// Inner version: returns version info (pure, no IO).
pub fn version_inner() -> serde_json::Value {
    serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "protocol": "storefront/1",
    })
}

/// Inner catalog: filtered items in catalog order. An empty match is an
/// empty list, not an error.
pub fn catalog_inner(query: CatalogQuery) -> (StatusCode, serde_json::Value) {
    let items = filter_by_category(CATALOG, query.category.as_deref());
    (
        StatusCode::OK,
        serde_json::json!({
            "count": items.len(),
            "items": items,
        }),
    )
}

pub async fn chat_history_inner(store: &dyn ChatStore) -> (StatusCode, serde_json::Value) {
    let messages = chat::history(store).await;
    (
        StatusCode::OK,
        serde_json::json!({
            "count": messages.len(),
            "messages": messages,
        }),
    )
}

pub async fn chat_send_inner(
    store: &dyn ChatStore,
    bot: &ChatBot,
    req: ChatSendRequest,
) -> (StatusCode, serde_json::Value) {
    let text = req.text.unwrap_or_default();
    match chat::send_message(store, bot, &text).await {
        Ok(exchange) => (
            StatusCode::OK,
            serde_json::json!({
                "messages": [exchange.user, exchange.bot],
                "persisted": exchange.persisted,
            }),
        ),
        Err(StorefrontError::InvalidMessage(msg)) => (
            StatusCode::BAD_REQUEST,
            serde_json::json!({
                "error": msg,
                "status": "error",
            }),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({
                "error": e.to_string(),
                "status": "error",
            }),
        ),
    }
}

pub async fn chat_clear_inner(store: &dyn ChatStore) -> (StatusCode, serde_json::Value) {
    match store.clear().await {
        Ok(cleared) => (StatusCode::OK, serde_json::json!({ "cleared": cleared })),
        Err(e) => {
            tracing::warn!(store = store.name(), error = %e, "Failed to clear chat history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": e.to_string(),
                    "status": "error",
                }),
            )
        }
    }
}

/// Inner contact submit: forwards the form and reports the UI status.
pub async fn contact_submit_inner(
    client: &ContactClient,
    submission: &ContactSubmission,
) -> ContactStatus {
    match client.submit(submission).await {
        Ok(()) => ContactStatus::Sent,
        Err(e) => {
            tracing::warn!(error = %e, "Contact submission failed");
            ContactStatus::Failed {
                reason: public_reason(&e),
            }
        }
    }
}

fn public_reason(e: &ContactError) -> String {
    match e {
        ContactError::Invalid(msg) => msg.clone(),
        _ => "the message service is unavailable".to_string(),
    }
}

/// Inner sitemap: reads the pre-generated file, never builds it per request.
pub async fn sitemap_inner(path: &FsPath) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(xml) => Some(xml),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Sitemap not available");
            None
        }
    }
}

// ============================================================================
// Axum handler wrappers (thin: delegate to inner functions)
// ============================================================================

fn html_page(status: StatusCode, rendered: Result<String, minijinja::Error>) -> Response {
    match rendered {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!("Template render failed: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
        }
    }
}

fn not_found(state: &HttpState) -> Response {
    html_page(StatusCode::NOT_FOUND, state.pages.not_found())
}

/// Page that may not exist for the requested slug.
fn optional_page(state: &HttpState, rendered: Result<Option<String>, minijinja::Error>) -> Response {
    match rendered {
        Ok(Some(body)) => Html(body).into_response(),
        Ok(None) => not_found(state),
        Err(e) => html_page(StatusCode::INTERNAL_SERVER_ERROR, Err(e)),
    }
}

pub async fn home_handler(State(state): State<Arc<HttpState>>) -> Response {
    html_page(StatusCode::OK, state.pages.home())
}

pub async fn subscription_handler(State(state): State<Arc<HttpState>>) -> Response {
    html_page(StatusCode::OK, state.pages.subscription())
}

pub async fn all_products_handler(State(state): State<Arc<HttpState>>) -> Response {
    html_page(StatusCode::OK, state.pages.all_products())
}

pub async fn category_handler(
    State(state): State<Arc<HttpState>>,
    Path(id): Path<String>,
) -> Response {
    html_page(StatusCode::OK, state.pages.category(&id))
}

pub async fn product_handler(
    State(state): State<Arc<HttpState>>,
    Path(slug): Path<String>,
) -> Response {
    optional_page(&state, state.pages.product(&slug))
}

pub async fn brand_handler(
    State(state): State<Arc<HttpState>>,
    Path(slug): Path<String>,
) -> Response {
    optional_page(&state, state.pages.brand(&slug))
}

pub async fn contact_page_handler(State(state): State<Arc<HttpState>>) -> Response {
    html_page(
        StatusCode::OK,
        state
            .pages
            .contact(&ContactStatus::Idle, &ContactSubmission::default()),
    )
}

pub async fn contact_submit_handler(
    State(state): State<Arc<HttpState>>,
    Form(submission): Form<ContactSubmission>,
) -> Response {
    let status = contact_submit_inner(&state.contact, &submission).await;
    // Keep what the customer typed when they need to retry.
    let form = match status {
        ContactStatus::Sent => ContactSubmission::default(),
        _ => submission,
    };
    html_page(StatusCode::OK, state.pages.contact(&status, &form))
}

pub async fn sitemap_handler(State(state): State<Arc<HttpState>>) -> Response {
    let path = PathBuf::from(&state.config.sitemap.output_path);
    match sitemap_inner(&path).await {
        Some(xml) => ([(header::CONTENT_TYPE, "application/xml")], xml).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn not_found_handler(State(state): State<Arc<HttpState>>) -> Response {
    not_found(&state)
}

pub async fn health_handler(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let (status, body) = health_inner(state.store.as_ref()).await;
    (status, Json(body))
}

pub async fn version_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(version_inner()))
}

pub async fn catalog_handler(Query(query): Query<CatalogQuery>) -> impl IntoResponse {
    let (status, body) = catalog_inner(query);
    (status, Json(body))
}

pub async fn chat_history_handler(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let (status, body) = chat_history_inner(state.store.as_ref()).await;
    (status, Json(body))
}

pub async fn chat_send_handler(
    State(state): State<Arc<HttpState>>,
    Json(req): Json<ChatSendRequest>,
) -> impl IntoResponse {
    let (status, body) = chat_send_inner(state.store.as_ref(), &state.bot, req).await;
    (status, Json(body))
}

pub async fn chat_clear_handler(State(state): State<Arc<HttpState>>) -> impl IntoResponse {
    let (status, body) = chat_clear_inner(state.store.as_ref()).await;
    (status, Json(body))
}

// ============================================================================
// Unit Tests: call inner functions directly
// ============================================================================
