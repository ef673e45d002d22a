use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use workplan_core::{
    errors::PlanError,
    models::employee::{
        CreateEmployeeRequest, CreateEmployeeResponse, GetEmployeeResponse, ListEmployeesResponse,
        UpdateEmployeeRequest, UpdateEmployeeResponse,
    },
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_employee(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateEmployeeRequest>,
) -> Result<Json<CreateEmployeeResponse>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(PlanError::Validation(
            "Employee name must not be empty".to_string(),
        )));
    }

    let db_employee = workplan_db::repositories::employee::create_employee(
        &state.db_pool,
        &payload.name,
        payload.department.as_deref(),
        payload.position.as_deref(),
        payload.role.as_str(),
    )
    .await
    .map_err(PlanError::Database)?;

    let role = db_employee.role()?;
    let response = CreateEmployeeResponse {
        id: db_employee.id,
        name: db_employee.name,
        role,
        created_at: db_employee.created_at,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn get_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetEmployeeResponse>, AppError> {
    let db_employee = workplan_db::repositories::employee::get_employee_by_id(&state.db_pool, id)
        .await
        .map_err(PlanError::Database)?
        .ok_or_else(|| PlanError::NotFound(format!("Employee with ID {} not found", id)))?;

    let entries =
        workplan_db::repositories::schedule_entry::get_entries_by_employee(&state.db_pool, id)
            .await
            .map_err(PlanError::Database)?;

    let role = db_employee.role()?;
    let schedule = entries
        .into_iter()
        .map(|row| row.into_entry())
        .collect::<Result<Vec<_>, _>>()?;

    let response = GetEmployeeResponse {
        id: db_employee.id,
        name: db_employee.name,
        department: db_employee.department,
        position: db_employee.position,
        role,
        schedule,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn list_employees(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ListEmployeesResponse>, AppError> {
    let db_employees = workplan_db::repositories::employee::list_employees(&state.db_pool)
        .await
        .map_err(PlanError::Database)?;

    let employees = db_employees
        .into_iter()
        .map(|row| row.into_summary())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(ListEmployeesResponse { employees }))
}

#[axum::debug_handler]
pub async fn update_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeeRequest>,
) -> Result<Json<UpdateEmployeeResponse>, AppError> {
    // Confirm existence first for a clean 404.
    workplan_db::repositories::employee::get_employee_by_id(&state.db_pool, id)
        .await
        .map_err(PlanError::Database)?
        .ok_or_else(|| PlanError::NotFound(format!("Employee with ID {} not found", id)))?;

    workplan_db::repositories::employee::update_employee(
        &state.db_pool,
        id,
        payload.name.as_deref(),
        payload.department.as_deref(),
        payload.position.as_deref(),
        payload.role.map(|r| r.as_str()),
    )
    .await
    .map_err(PlanError::Database)?;

    // Name changes surface in cached summaries and chart rows.
    state.stats_cache.invalidate_employee(id);

    let response = UpdateEmployeeResponse {
        id,
        updated_at: Utc::now(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn delete_employee(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = workplan_db::repositories::employee::delete_employee(&state.db_pool, id)
        .await
        .map_err(PlanError::Database)?;

    if !deleted {
        return Err(AppError(PlanError::NotFound(format!(
            "Employee with ID {} not found",
            id
        ))));
    }

    state.stats_cache.invalidate_employee(id);

    Ok(Json(serde_json::json!({ "deleted": true })))
}
