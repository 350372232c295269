//! Shared types for RiadConnect
//!
//! Request-kind models, the status enum, error types, response structures
//! and the triage helpers used by both the server and the admin client.

pub mod error;
pub mod models;
pub mod response;
pub mod triage;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Kind, RequestPatch, RequestStatus, ServiceRecord};
