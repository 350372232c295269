//! Admin session: an HS256 JWT carried in an HttpOnly cookie
//!
//! Every authenticated request re-issues the cookie with a fresh expiry
//! (sliding window). Pages redirect to the login page when the session is
//! missing or invalid; API routes answer 401 JSON instead.

use axum::{
    extract::{OriginalUri, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session";
/// Served as `admin/login/index.html` of the static bundle
pub const LOGIN_PAGE: &str = "/admin/login/";

/// Admin paths reachable without a session (login page and its assets)
const PUBLIC_ADMIN_PREFIXES: &[&str] = &["/admin/login", "/admin/assets/"];

/// JWT claims of an admin session
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Admin email
    pub sub: String,
    /// Issued at (Unix timestamp seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp seconds)
    pub exp: i64,
}

/// Authenticated admin, inserted into request extensions by the guards
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
    /// Expiry of the refreshed cookie, unix millis
    pub expires_at: i64,
}

/// Sign a session token issued at `issued_at` (seconds) valid for `ttl_secs`
pub fn create_token_at(
    email: &str,
    secret: &str,
    issued_at: i64,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = SessionClaims {
        sub: email.to_string(),
        iat: issued_at,
        exp: issued_at + ttl_secs,
    };

    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Sign a session token starting now
pub fn create_token(
    email: &str,
    secret: &str,
    ttl_hours: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    create_token_at(
        email,
        secret,
        chrono::Utc::now().timestamp(),
        ttl_hours * 3600,
    )
}

/// Verify signature and expiry of a session token
pub fn verify_token(token: &str, secret: &str) -> Result<SessionClaims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    jsonwebtoken::decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::new(ErrorCode::TokenExpired),
        _ => {
            tracing::debug!("Session token rejected: {e}");
            AppError::new(ErrorCode::TokenInvalid)
        }
    })
}

/// The `session` cookie holding `token`
pub fn session_cookie(token: String, ttl_hours: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::hours(ttl_hours))
        .build()
}

/// Cookie that, once removed from a jar, clears the session in the browser
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// Issue a fresh session for `email`
pub fn issue_session(
    state: &AppState,
    email: &str,
) -> Result<(AdminSession, Cookie<'static>), AppError> {
    let token = create_token(email, &state.session_secret, state.session_ttl_hours).map_err(
        |e| {
            tracing::error!("Session token creation failed: {e}");
            AppError::new(ErrorCode::InternalError)
        },
    )?;
    let session = AdminSession {
        email: email.to_string(),
        expires_at: shared::util::now_millis() + state.session_ttl_hours * 3_600_000,
    };
    Ok((session, session_cookie(token, state.session_ttl_hours)))
}

/// Validate the session cookie and re-issue it with a fresh expiry
fn authenticate(
    state: &AppState,
    jar: &CookieJar,
) -> Result<(AdminSession, Cookie<'static>), AppError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(AppError::not_authenticated)?;

    let claims = verify_token(&token, &state.session_secret)?;
    if !claims.sub.eq_ignore_ascii_case(&state.admin_email) {
        tracing::debug!(sub = %claims.sub, "Session subject is not the admin");
        return Err(AppError::new(ErrorCode::TokenInvalid));
    }

    issue_session(state, &state.admin_email)
}

fn is_public_admin_path(path: &str) -> bool {
    PUBLIC_ADMIN_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Guard for admin API routes: 401 JSON without a valid session
pub async fn require_admin_api(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let (session, cookie) = match authenticate(&state, &jar) {
        Ok(ok) => ok,
        Err(e) => {
            tracing::debug!(path = %request.uri().path(), code = %e.code, "Admin API rejected");
            return e.into_response();
        }
    };

    request.extensions_mut().insert(session);
    let response = next.run(request).await;
    (jar.add(cookie), response).into_response()
}

/// Guard for admin pages: redirect to the login page without a valid session
pub async fn require_admin_page(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.0.path().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    if is_public_admin_path(&path) {
        return next.run(request).await;
    }

    match authenticate(&state, &jar) {
        Ok((session, cookie)) => {
            request.extensions_mut().insert(session);
            let response = next.run(request).await;
            (jar.add(cookie), response).into_response()
        }
        Err(e) => {
            tracing::debug!(path = %path, code = %e.code, "Admin page redirected to login");
            Redirect::to(LOGIN_PAGE).into_response()
        }
    }
}
