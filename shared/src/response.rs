//! API response types
//!
//! Mutations answer with a bare acknowledgement:
//! ```json
//! { "success": true }
//! ```
//! Failures use [`crate::error::ErrorBody`].

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by submission, patch and delete endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

/// Current admin session, as reported by `GET /api/auth/session`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub email: String,
    /// Expiry of the (refreshed) session, unix millis
    pub expires_at: i64,
}

/// Login payload for `POST /api/auth/login`; absent fields never match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_serializes_as_success_flag() {
        assert_eq!(
            serde_json::to_string(&Ack::ok()).unwrap(),
            r#"{"success":true}"#
        );
    }
}
