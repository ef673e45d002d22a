//! # Statistics Handlers
//!
//! This module exposes the monthly attendance summaries computed by
//! `workplan_core::stats`. It loads schedule entries for the requested
//! month, runs the pure aggregation, and memoizes the result in the shared
//! [`StatsCache`](workplan_core::cache::StatsCache) keyed by
//! (employee, year, month).
//!
//! ## Caching Policy
//!
//! A cache hit skips both the schedule query and the aggregation. Entries
//! are dropped per employee when their schedule or record changes, and
//! wholesale when the status-code reference data changes or a client posts
//! an explicit refresh. The cache never affects results, only latency:
//! recomputation is idempotent.
//!
//! Month lookups outside the calendar (month 13, absurd years) are not
//! errors: the aggregator degrades to an empty month with all-zero counts,
//! so a batch run over the whole roster never aborts on one bad input.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use workplan_core::{
    cache::CachedStats,
    errors::PlanError,
    stats::{calculate_stats, ChartRow, MonthSpan, SummaryStats},
};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters selecting the month to aggregate over.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    /// Calendar year
    pub year: i32,
    /// 1-based month
    pub month: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsOverviewResponse {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<ChartRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshStatsResponse {
    pub invalidated: usize,
}

/// Computes (or recalls) one employee's summary for the month.
async fn summary_for_employee(
    state: &ApiState,
    employee_id: Uuid,
    name: &str,
    year: i32,
    month: u32,
) -> Result<CachedStats, AppError> {
    if let Some(cached) = state.stats_cache.get(employee_id, year, month) {
        return Ok(cached);
    }

    // Only the month's rows feed the aggregation; an invalid month has no
    // rows to fetch and produces the all-zero summary.
    let schedule = match MonthSpan::new(year, month) {
        Some(span) => {
            let rows = workplan_db::repositories::schedule_entry::get_entries_in_range(
                &state.db_pool,
                employee_id,
                span.first_day,
                span.last_day,
            )
            .await
            .map_err(PlanError::Database)?;
            rows.into_iter()
                .map(|row| row.into_entry())
                .collect::<Result<Vec<_>, _>>()?
        }
        None => Vec::new(),
    };

    let summary = calculate_stats(name, &schedule, year, month);
    Ok(state.stats_cache.insert(employee_id, year, month, summary))
}

#[axum::debug_handler]
pub async fn get_employee_stats(
    State(state): State<Arc<ApiState>>,
    Path(employee_id): Path<Uuid>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<SummaryStats>, AppError> {
    let employee =
        workplan_db::repositories::employee::get_employee_by_id(&state.db_pool, employee_id)
            .await
            .map_err(PlanError::Database)?
            .ok_or_else(|| {
                PlanError::NotFound(format!("Employee with ID {} not found", employee_id))
            })?;

    let cached = summary_for_employee(
        &state,
        employee_id,
        &employee.name,
        params.year,
        params.month,
    )
    .await?;

    Ok(Json(cached.summary))
}

#[axum::debug_handler]
pub async fn list_stats(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatsOverviewResponse>, AppError> {
    let employees = workplan_db::repositories::employee::list_employees(&state.db_pool)
        .await
        .map_err(PlanError::Database)?;

    let mut rows = Vec::with_capacity(employees.len());
    for employee in &employees {
        let cached = summary_for_employee(
            &state,
            employee.id,
            &employee.name,
            params.year,
            params.month,
        )
        .await?;
        rows.push(cached.chart_row);
    }

    Ok(Json(StatsOverviewResponse {
        year: params.year,
        month: params.month,
        rows,
    }))
}

#[axum::debug_handler]
pub async fn refresh_stats(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<RefreshStatsResponse>, AppError> {
    let invalidated = state.stats_cache.invalidate_all();
    tracing::debug!("Stats cache refreshed: {} entries dropped", invalidated);

    Ok(Json(RefreshStatsResponse { invalidated }))
}
