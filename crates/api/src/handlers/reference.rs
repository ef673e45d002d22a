use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use workplan_core::{
    errors::PlanError,
    models::{
        project::{CreateProjectRequest, ListProjectsResponse, Project},
        status::{CreateStatusCodeRequest, ListStatusCodesResponse, StatusCode},
    },
};

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_project(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    if payload.code.trim().is_empty() {
        return Err(AppError(PlanError::Validation(
            "Project code must not be empty".to_string(),
        )));
    }

    let existing =
        workplan_db::repositories::project::get_project_by_code(&state.db_pool, &payload.code)
            .await
            .map_err(PlanError::Database)?;
    if existing.is_some() {
        return Err(AppError(PlanError::Conflict(format!(
            "Project with code {} already exists",
            payload.code
        ))));
    }

    let db_project = workplan_db::repositories::project::create_project(
        &state.db_pool,
        &payload.code,
        &payload.name,
    )
    .await
    .map_err(PlanError::Database)?;

    Ok(Json(db_project.into()))
}

#[axum::debug_handler]
pub async fn list_projects(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListProjectsResponse>, AppError> {
    let projects = workplan_db::repositories::project::list_projects(&state.db_pool)
        .await
        .map_err(PlanError::Database)?
        .into_iter()
        .map(Project::from)
        .collect();

    Ok(Json(ListProjectsResponse { projects }))
}

#[axum::debug_handler]
pub async fn delete_project(
    State(state): State<Arc<ApiState>>,
    Path(code): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = workplan_db::repositories::project::delete_project(&state.db_pool, &code)
        .await
        .map_err(PlanError::Database)?;

    if !deleted {
        return Err(AppError(PlanError::NotFound(format!(
            "Project with code {} not found",
            code
        ))));
    }

    Ok(Json(serde_json::json!({ "deleted": true })))
}

#[axum::debug_handler]
pub async fn create_status_code(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateStatusCodeRequest>,
) -> Result<Json<StatusCode>, AppError> {
    if payload.code.trim().is_empty() {
        return Err(AppError(PlanError::Validation(
            "Status code must not be empty".to_string(),
        )));
    }

    let existing =
        workplan_db::repositories::status_code::get_status_code(&state.db_pool, &payload.code)
            .await
            .map_err(PlanError::Database)?;
    if existing.is_some() {
        return Err(AppError(PlanError::Conflict(format!(
            "Status code {} already exists",
            payload.code
        ))));
    }

    let db_status = workplan_db::repositories::status_code::create_status_code(
        &state.db_pool,
        &payload.code,
        &payload.label,
    )
    .await
    .map_err(PlanError::Database)?;

    // The recognized status set changed; every cached summary is suspect.
    state.stats_cache.invalidate_all();

    Ok(Json(db_status.into()))
}

#[axum::debug_handler]
pub async fn list_status_codes(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListStatusCodesResponse>, AppError> {
    let statuses = workplan_db::repositories::status_code::list_status_codes(&state.db_pool)
        .await
        .map_err(PlanError::Database)?
        .into_iter()
        .map(StatusCode::from)
        .collect();

    Ok(Json(ListStatusCodesResponse { statuses }))
}

#[axum::debug_handler]
pub async fn delete_status_code(
    State(state): State<Arc<ApiState>>,
    Path(code): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = workplan_db::repositories::status_code::delete_status_code(&state.db_pool, &code)
        .await
        .map_err(PlanError::Database)?;

    if !deleted {
        return Err(AppError(PlanError::NotFound(format!(
            "Status code {} not found",
            code
        ))));
    }

    state.stats_cache.invalidate_all();

    Ok(Json(serde_json::json!({ "deleted": true })))
}
