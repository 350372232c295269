mod common;

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use common::{ADMIN_EMAIL, ADMIN_PASSWORD, SECRET, dispatch, login, post, send};
use http::{Method, Request, StatusCode, header};
use riad_server::auth::session::{LOGIN_PAGE, create_token_at};
use serde_json::json;
use tempfile::TempDir;

/// Exported site with a login page and one guarded page
fn admin_bundle() -> TempDir {
    let dir = TempDir::new().unwrap();
    for (page, html) in [("login", "<h1>Sign in</h1>"), ("bookings", "<h1>Bookings</h1>")] {
        let page_dir = dir.path().join("admin").join(page);
        std::fs::create_dir_all(&page_dir).unwrap();
        std::fs::write(page_dir.join("index.html"), html).unwrap();
    }
    dir
}

/// Wrong-password login arriving from `peer` with a forwarded-for header
fn login_attempt(peer: [u8; 4], forwarded: &str) -> Request<Body> {
    let body = json!({"email": ADMIN_EMAIL, "password": "guess"});
    let mut request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", forwarded)
        .body(Body::from(body.to_string()))
        .unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from((peer, 51000))));
    request
}

#[tokio::test]
async fn admin_api_requires_a_session() {
    let app = common::app().await;

    for (method, uri) in [
        (Method::GET, "/api/booking"),
        (Method::PATCH, "/api/contact"),
        (Method::DELETE, "/api/waitlist?id=1"),
        (Method::GET, "/api/admin/stats"),
        (Method::GET, "/api/admin/export/tours"),
        (Method::GET, "/api/auth/session"),
    ] {
        let response = send(&app, method.clone(), uri, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert!(response.json()["error"].is_string());
        assert!(response.set_cookie().is_none());
    }
}

#[tokio::test]
async fn submissions_stay_public() {
    let app = common::app().await;
    let response = post(
        &app,
        "/api/waitlist",
        json!({"name": "Leila", "email": "leila@riad.ma"}),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn wrong_credentials_are_rejected_alike() {
    let app = common::app().await;

    for body in [
        json!({"email": ADMIN_EMAIL, "password": "wrong"}),
        json!({"email": "someone@else.ma", "password": ADMIN_PASSWORD}),
        json!({"email": ADMIN_EMAIL}),
    ] {
        let response = post(&app, "/api/auth/login", body).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json()["error"], "Invalid credentials");
        assert!(response.set_cookie().is_none());
    }
}

#[tokio::test]
async fn login_sets_an_http_only_session_cookie() {
    let app = common::app().await;
    let response = post(
        &app,
        "/api/auth/login",
        json!({"email": "  Admin@RiadConnect.MA ", "password": ADMIN_PASSWORD}),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"success": true}));

    let cookie = response.set_cookie().unwrap();
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=86400"));
}

#[tokio::test]
async fn session_endpoint_reports_the_admin_and_slides_the_cookie() {
    let app = common::app().await;
    let cookie = login(&app).await;

    let response = send(&app, Method::GET, "/api/auth/session", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["email"], ADMIN_EMAIL);
    assert!(body["expiresAt"].as_i64().unwrap() > shared::util::now_millis());

    let refreshed = response.set_cookie().unwrap();
    assert!(refreshed.contains("Max-Age=86400"));
}

#[tokio::test]
async fn forged_and_expired_tokens_are_rejected() {
    let app = common::app().await;
    let now = chrono::Utc::now().timestamp();

    let forged = create_token_at(ADMIN_EMAIL, "another-secret", now, 3600).unwrap();
    let expired = create_token_at(ADMIN_EMAIL, SECRET, now - 7200, 3600).unwrap();
    let stranger = create_token_at("intruder@riad.ma", SECRET, now, 3600).unwrap();

    for token in [forged, expired, stranger, "not-a-jwt".to_string()] {
        let cookie = format!("session={token}");
        let response = send(&app, Method::GET, "/api/booking", None, Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    let valid = format!("session={}", create_token_at(ADMIN_EMAIL, SECRET, now, 3600).unwrap());
    let response = send(&app, Method::GET, "/api/booking", None, Some(&valid)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn admin_pages_redirect_to_login() {
    let app = common::app().await;

    for uri in ["/admin", "/admin/", "/admin/bookings", "/admin/contact?tab=1"] {
        let response = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(response.headers[header::LOCATION], LOGIN_PAGE);
    }

    // the login page itself is never redirected
    let response = send(&app, Method::GET, "/admin/login", None, None).await;
    assert_ne!(response.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn login_page_is_served_from_the_bundle() {
    let bundle = admin_bundle();
    let root = bundle.path().to_string_lossy().into_owned();
    let app = common::app_with(|config| config.admin_dir = root).await;

    let response = send(&app, Method::GET, LOGIN_PAGE, None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("Sign in"));

    // directory redirect stays inside the admin section
    let response = send(&app, Method::GET, "/admin/login", None, None).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers[header::LOCATION], LOGIN_PAGE);

    let response = send(&app, Method::GET, "/admin/bookings/", None, None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.headers[header::LOCATION], LOGIN_PAGE);

    let cookie = login(&app).await;
    let response = send(&app, Method::GET, "/admin/bookings/", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("Bookings"));
}

#[tokio::test]
async fn admin_pages_pass_with_a_session() {
    let app = common::app().await;
    let cookie = login(&app).await;

    let response = send(&app, Method::GET, "/admin/bookings", None, Some(&cookie)).await;
    assert_ne!(response.status, StatusCode::SEE_OTHER);
    assert!(response.set_cookie().is_some());
}

#[tokio::test]
async fn logout_clears_the_cookie() {
    let app = common::app().await;
    let cookie = login(&app).await;

    let response = send(&app, Method::POST, "/api/auth/logout", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);
    let cleared = response.set_cookie().unwrap();
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn login_is_rate_limited() {
    let app = common::app().await;
    let body = json!({"email": ADMIN_EMAIL, "password": "guess"});

    for _ in 0..5 {
        let response = post(&app, "/api/auth/login", body.clone()).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
    let response = post(&app, "/api/auth/login", body).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn rotating_forwarded_for_does_not_escape_the_limit() {
    let app = common::app().await;

    for n in 0..5 {
        let response = dispatch(&app, login_attempt([203, 0, 113, 9], &format!("198.51.100.{n}"))).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
    let response = dispatch(&app, login_attempt([203, 0, 113, 9], "198.51.100.99")).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);

    // another peer has its own budget
    let response = dispatch(&app, login_attempt([203, 0, 113, 10], "198.51.100.1")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn trusted_proxy_limits_per_forwarded_client() {
    let app = common::app_with(|config| config.trusted_proxy = true).await;

    for _ in 0..5 {
        let response = dispatch(&app, login_attempt([10, 0, 0, 2], "198.51.100.1")).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
    let response = dispatch(&app, login_attempt([10, 0, 0, 2], "198.51.100.1")).await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);

    // same proxy, different client
    let response = dispatch(&app, login_attempt([10, 0, 0, 2], "198.51.100.2")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
