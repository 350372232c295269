//! Dashboard counters and CSV export

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::models::{Kind, KindStats};
use shared::triage::{export_filename, to_csv};
use shared::util::now_millis;
use std::collections::BTreeMap;

use super::ApiResult;
use crate::db::requests::{self as store, StoredRecord};
use crate::error::ServiceResult;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn stats(State(state): State<AppState>) -> ApiResult<BTreeMap<&'static str, KindStats>> {
    let mut counts = BTreeMap::new();
    for kind in Kind::ALL {
        counts.insert(kind.slug(), store::stats(&state.pool, kind).await?);
    }
    Ok(Json(counts))
}

/// GET /api/admin/export/<kind>: every record as a CSV attachment
pub async fn export<R: StoredRecord>(State(state): State<AppState>) -> ServiceResult<Response> {
    let records = store::list::<R>(&state.pool).await?;
    let csv = to_csv(&records)?;
    let filename = export_filename(R::KIND, now_millis());

    tracing::info!(kind = %R::KIND, rows = records.len(), "CSV export");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
