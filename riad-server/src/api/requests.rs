//! Submission, listing and triage endpoints, instantiated once per kind
//!
//! `POST <base>` is public; `GET`, `PATCH` and `DELETE` on the same path
//! sit behind the admin session.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router, middleware};
use serde::Deserialize;
use shared::error::AppError;
use shared::models::{
    BookingRequest, BusinessCollaboration, ContactMessage, FoodExperience, GeneralServiceRequest,
    RequestPatch, SurveyResponse, TourBooking, TransportRequest, WaitlistEntry, WellnessRequest,
    parse_submission,
};
use shared::response::Ack;
use shared::util::now_millis;

use super::{ApiResult, admin, json_object};
use crate::auth::require_admin_api;
use crate::db::requests::{self as store, StoredRecord};
use crate::error::ServiceResult;
use crate::state::AppState;

/// Routes of every kind
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(kind_routes::<BookingRequest>(state))
        .merge(kind_routes::<TourBooking>(state))
        .merge(kind_routes::<TransportRequest>(state))
        .merge(kind_routes::<FoodExperience>(state))
        .merge(kind_routes::<WellnessRequest>(state))
        .merge(kind_routes::<BusinessCollaboration>(state))
        .merge(kind_routes::<GeneralServiceRequest>(state))
        .merge(kind_routes::<ContactMessage>(state))
        .merge(kind_routes::<SurveyResponse>(state))
        .merge(kind_routes::<WaitlistEntry>(state))
}

fn kind_routes<R: StoredRecord>(state: &AppState) -> Router<AppState> {
    let guard = middleware::from_fn_with_state(state.clone(), require_admin_api);

    Router::new()
        .route(
            &R::KIND.base_path(),
            post(submit::<R>).merge(
                get(list::<R>)
                    .patch(patch::<R>)
                    .delete(delete::<R>)
                    .route_layer(guard.clone()),
            ),
        )
        .route(
            &format!("/api/admin/export/{}", R::KIND.slug()),
            get(admin::export::<R>).route_layer(guard),
        )
}

/// POST <base>: validate and store a new request
pub async fn submit<R: StoredRecord>(
    State(state): State<AppState>,
    body: Bytes,
) -> ServiceResult<(StatusCode, Json<Ack>)> {
    let body = json_object(&body)?;
    let columns = parse_submission(R::KIND.fields(), &body)?;

    let id = store::insert(&state.pool, R::KIND, &columns, now_millis()).await?;
    tracing::info!(kind = %R::KIND, id, "New {} received", R::KIND.label());

    Ok((StatusCode::CREATED, Json(Ack::ok())))
}

/// GET <base>: every record of the kind, newest first
pub async fn list<R: StoredRecord>(State(state): State<AppState>) -> ApiResult<Vec<R>> {
    let records = store::list::<R>(&state.pool).await?;
    Ok(Json(records))
}

/// PATCH <base>: update status, priority and notes
pub async fn patch<R: StoredRecord>(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Ack> {
    let body = json_object(&body)?;
    let patch = RequestPatch::from_body(R::KIND, &body)?;

    let touched = store::patch(&state.pool, R::KIND, &patch, now_millis()).await?;
    if touched == 0 {
        tracing::debug!(kind = %R::KIND, id = patch.id, "Patch matched no record");
    } else {
        tracing::info!(kind = %R::KIND, id = patch.id, "Updated {}", R::KIND.label());
    }

    Ok(Json(Ack::ok()))
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<String>,
}

/// DELETE <base>?id=: hard delete, idempotent
pub async fn delete<R: StoredRecord>(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<Ack> {
    let raw = query
        .id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::missing_fields(&["id"]))?;
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::validation("Invalid id").with_detail("field", "id"))?;

    let removed = store::delete(&state.pool, R::KIND, id).await?;
    tracing::info!(kind = %R::KIND, id, removed, "Deleted {}", R::KIND.label());

    Ok(Json(Ack::ok()))
}
