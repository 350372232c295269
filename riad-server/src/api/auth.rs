//! Authentication endpoints: login, logout, session

use axum::body::Bytes;
use axum::extract::State;
use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use shared::error::AppError;
use shared::response::{Ack, LoginRequest, SessionInfo};

use super::{ApiResult, parse_json};
use crate::auth::AdminSession;
use crate::auth::session::{issue_session, removal_cookie};
use crate::state::AppState;
use crate::util::verify_password;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<Ack>), AppError> {
    let req: LoginRequest = parse_json(&body)?;
    let email = req.email.trim().to_lowercase();

    // Always verify so a wrong email costs the same as a wrong password
    let password_ok = verify_password(&req.password, &state.admin_password_hash);
    if email != state.admin_email || !password_ok {
        tracing::debug!(email = %email, "Admin login failed");
        return Err(AppError::invalid_credentials());
    }

    let (session, cookie) = issue_session(&state, &state.admin_email)?;
    tracing::info!(email = %session.email, "Admin logged in");

    Ok((jar.add(cookie), Json(Ack::ok())))
}

/// POST /api/auth/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Ack>) {
    (jar.remove(removal_cookie()), Json(Ack::ok()))
}

/// GET /api/auth/session
pub async fn session(Extension(session): Extension<AdminSession>) -> ApiResult<SessionInfo> {
    Ok(Json(SessionInfo {
        email: session.email,
        expires_at: session.expires_at,
    }))
}
