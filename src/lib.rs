pub mod config;
pub mod error;
pub mod middleware;
pub mod notion;
pub mod routes;
pub mod state;
pub mod submission;

use std::sync::Arc;

use axum::http::request::Parts;
use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::Config;
use crate::notion::{NotionClient, PropertyMap};
use crate::state::{AppState, SharedState};
use crate::submission::origin;

pub fn build_app(config: Config) -> Router {
    let notion = NotionClient::new(&config.notion_token, &config.notion_api_base);

    // CORS mirrors the allow-list: any scheme or port on a listed hostname.
    // Requests without an Origin header bypass CORS but still hit the
    // origin guard on the submit routes.
    let allowed_domains = config.allowed_domains.clone();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |value: &HeaderValue, _parts: &Parts| {
                value
                    .to_str()
                    .ok()
                    .and_then(origin::hostname)
                    .is_some_and(|host| origin::is_allowed(&host, &allowed_domains))
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        notion,
        properties: PropertyMap::default(),
        config,
    });

    Router::new()
        .merge(routes::submit_routes(state.clone()))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(RequestBodyLimitLayer::new(max_body_size))
                .layer(cors),
        )
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "Server is running" }))
}
