use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use workplan_core::{
    errors::PlanError,
    models::schedule::{
        DeleteScheduleEntryQuery, UpsertScheduleEntryRequest, UpsertScheduleEntryResponse,
    },
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn upsert_schedule_entry(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertScheduleEntryRequest>,
) -> Result<Json<UpsertScheduleEntryResponse>, AppError> {
    // Clearing a status is a DELETE; an empty code never reaches storage.
    if payload.status.trim().is_empty() {
        return Err(AppError(PlanError::Validation(
            "Status must not be empty; delete the entry to clear it".to_string(),
        )));
    }

    workplan_db::repositories::employee::get_employee_by_id(&state.db_pool, id)
        .await
        .map_err(PlanError::Database)?
        .ok_or_else(|| PlanError::NotFound(format!("Employee with ID {} not found", id)))?;

    let db_entry = workplan_db::repositories::schedule_entry::upsert_entry(
        &state.db_pool,
        id,
        payload.date,
        payload.period.as_str(),
        &payload.status,
        payload.project_code.as_deref(),
        payload.is_highlighted,
        payload.note.as_deref(),
    )
    .await
    .map_err(PlanError::Database)?;

    // Cached months for this employee are stale now.
    state.stats_cache.invalidate_employee(id);

    let response = UpsertScheduleEntryResponse {
        employee_id: id,
        entry: db_entry.into_entry()?,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn delete_schedule_entry(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteScheduleEntryQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = workplan_db::repositories::schedule_entry::delete_entry(
        &state.db_pool,
        id,
        params.date,
        params.period.as_str(),
    )
    .await
    .map_err(PlanError::Database)?;

    if !deleted {
        return Err(AppError(PlanError::NotFound(format!(
            "No schedule entry for employee {} on {} ({})",
            id, params.date, params.period
        ))));
    }

    state.stats_cache.invalidate_employee(id);

    Ok(Json(serde_json::json!({ "deleted": true })))
}
