//! Columns shared by every service-request table and the record trait

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::kind::Kind;
use super::status::RequestStatus;

/// Identity, requester and triage columns present on every kind.
///
/// Flattened into each record so the JSON shape stays
/// `{id, name, email, ..., status, priority, notes, createdAt, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RequestMeta {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub priority: Option<bool>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Unix millis, set once at insert
    pub created_at: i64,
    /// Unix millis, bumped on every patch
    pub updated_at: i64,
}

/// A persisted request of one [`Kind`].
///
/// Implemented once per kind; everything generic (listing, filtering,
/// export) is written against this trait.
pub trait ServiceRecord:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    const KIND: Kind;

    fn meta(&self) -> &RequestMeta;

    fn meta_mut(&mut self) -> &mut RequestMeta;

    /// Kind-specific fields searched in addition to name and email
    fn search_extras(&self) -> Vec<&str> {
        Vec::new()
    }

    /// CSV columns between `Email` and `Status`
    fn csv_extra_header() -> &'static [&'static str] {
        &[]
    }

    fn csv_extra_values(&self) -> Vec<String> {
        Vec::new()
    }

    /// Header of the trailing date column
    fn csv_date_header() -> &'static str {
        "Created"
    }

    fn id(&self) -> i64 {
        self.meta().id
    }

    fn effective_status(&self) -> RequestStatus {
        RequestStatus::effective(self.meta().status)
    }
}

/// Render an optional column for CSV, `N/A` when empty
pub(crate) fn or_na(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}
