//! API routes for riad-server

pub mod admin;
pub mod auth;
pub mod content;
pub mod health;
pub mod requests;

use axum::routing::{get, post};
use axum::{Router, middleware};
use http::Uri;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::error::{AppError, ErrorCode};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::rate_limit::login_rate_limit;
use crate::auth::{require_admin_api, require_admin_page};
use crate::error::ServiceResult;
use crate::state::AppState;

type ApiResult<T> = ServiceResult<axum::Json<T>>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let admin_guard = || middleware::from_fn_with_state(state.clone(), require_admin_api);

    // Login is public but rate limited; the session check needs a session
    let auth_routes = Router::new()
        .route(
            "/api/auth/login",
            post(auth::login).route_layer(middleware::from_fn_with_state(
                state.clone(),
                login_rate_limit,
            )),
        )
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/auth/session",
            get(auth::session).route_layer(admin_guard()),
        );

    // Site content: public read, admin write
    let content_routes = Router::new().route(
        "/api/content",
        get(content::list).merge(post(content::upsert).route_layer(admin_guard())),
    );

    let dashboard = Router::new()
        .route("/api/admin/stats", get(admin::stats))
        .route_layer(admin_guard());

    // Static admin pages, login page excepted. ServeDir sees the full
    // `/admin/...` path so its trailing-slash redirects stay under `/admin`.
    let bundle = ServeDir::new(&state.admin_dir).append_index_html_on_directories(true);
    let admin_pages = Router::new()
        .route_service("/admin", bundle.clone())
        .route_service("/admin/", bundle.clone())
        .route_service("/admin/{*path}", bundle)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_page,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(requests::routes(&state))
        .merge(auth_routes)
        .merge(content_routes)
        .merge(dashboard)
        .merge(admin_pages)
        .fallback(unknown_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// JSON 404 for paths no route claims
async fn unknown_route(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Decode a JSON request body, answering 400 JSON on malformed input
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::with_message(ErrorCode::InvalidFormat, format!("Invalid JSON body: {e}"))
    })
}

/// Decode a request body that must be a JSON object
fn json_object(body: &[u8]) -> Result<Map<String, Value>, AppError> {
    match parse_json::<Value>(body)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::invalid_request(
            "Request body must be a JSON object",
        )),
    }
}
