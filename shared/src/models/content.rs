//! Editable site content (key/value pairs grouped by section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SiteContent {
    pub key: String,
    pub value: String,
    pub section: Option<String>,
    pub updated_at: i64,
}

/// Upsert payload for `POST /api/content`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentUpdate {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}
