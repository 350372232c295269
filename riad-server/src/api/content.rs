//! Editable site content

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use shared::error::AppError;
use shared::models::ContentUpdate;
use shared::response::Ack;
use shared::util::now_millis;
use std::collections::BTreeMap;

use super::{ApiResult, parse_json};
use crate::db;
use crate::state::AppState;

/// GET /api/content: `{key: value}` of every entry
pub async fn list(State(state): State<AppState>) -> ApiResult<BTreeMap<String, String>> {
    let entries = db::content::list(&state.pool).await?;
    Ok(Json(
        entries.into_iter().map(|c| (c.key, c.value)).collect(),
    ))
}

/// POST /api/content: upsert one entry
pub async fn upsert(State(state): State<AppState>, body: Bytes) -> ApiResult<Ack> {
    let update: ContentUpdate = parse_json(&body)?;

    let key = update.key.as_deref().map(str::trim).filter(|k| !k.is_empty());
    let (Some(key), Some(value)) = (key, update.value.as_deref()) else {
        let mut missing = Vec::new();
        if key.is_none() {
            missing.push("key");
        }
        if update.value.is_none() {
            missing.push("value");
        }
        return Err(AppError::missing_fields(&missing).into());
    };

    db::content::upsert(&state.pool, key, value, update.section.as_deref(), now_millis()).await?;
    tracing::info!(key = %key, "Site content updated");

    Ok(Json(Ack::ok()))
}
