#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use riad_server::{AppState, Config, api};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@riadconnect.ma";
pub const ADMIN_PASSWORD: &str = "atlas-mountains";
pub const SECRET: &str = "integration-secret";

pub fn config(admin_password_hash: String) -> Config {
    Config {
        environment: "development".into(),
        database_url: "sqlite::memory:".into(),
        db_max_connections: 1,
        http_port: 0,
        admin_email: ADMIN_EMAIL.into(),
        admin_password_hash,
        session_secret: SECRET.into(),
        session_ttl_hours: 24,
        trusted_proxy: false,
        admin_dir: "does-not-exist".into(),
    }
}

/// Router over a fresh in-memory database
pub async fn app() -> Router {
    app_with(|_| {}).await
}

/// Like [`app`], with configuration overrides
pub async fn app_with(configure: impl FnOnce(&mut Config)) -> Router {
    // one connection that never expires keeps the in-memory database alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let hash = riad_server::util::hash_password(ADMIN_PASSWORD).unwrap();
    let mut config = config(hash);
    configure(&mut config);
    let state = AppState::with_pool(pool, &config).await.unwrap();
    api::create_router(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }

    /// `session=<token>` from the Set-Cookie header, if any
    pub fn session_cookie(&self) -> Option<String> {
        self.set_cookie()
            .and_then(|c| c.split(';').next().map(str::to_owned))
    }

    pub fn set_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("session="))
            .map(str::to_owned)
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    dispatch(app, request).await
}

/// Run a prepared request through the router
pub async fn dispatch(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, Method::POST, uri, Some(body), None).await
}

/// Log in as the admin and return the `session=<token>` cookie pair
pub async fn login(app: &Router) -> String {
    let response = post(
        app,
        "/api/auth/login",
        serde_json::json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    response.session_cookie().unwrap()
}

/// GET a kind's listing with the given session
pub async fn list(app: &Router, base: &str, cookie: &str) -> Vec<Value> {
    let response = send(app, Method::GET, base, None, Some(cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json().as_array().cloned().unwrap()
}
