//! Riad Client - HTTP client for the RiadConnect back office
//!
//! Wraps the admin API behind a cookie-carrying [`HttpClient`] and drives
//! the per-kind admin list pages through [`triage::TriageView`].

pub mod config;
pub mod error;
pub mod http;
pub mod triage;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use triage::{Confirmation, TriageBackend, TriageOutcome, TriageView, ViewState};

// Re-export shared types for convenience
pub use shared::models::{Kind, KindStats, RequestPatch, RequestStatus, ServiceRecord};
pub use shared::response::SessionInfo;
pub use shared::triage::StatusFilter;
