use axum::Json;
use chrono::NaiveDate;
use mockall::predicate;
use uuid::Uuid;
use workplan_core::{
    errors::PlanError,
    models::schedule::{Period, UpsertScheduleEntryRequest, UpsertScheduleEntryResponse},
};

use crate::test_utils::{db_employee, db_entry, TestContext};
use workplan_api::middleware::error_handling::AppError;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

// Test wrapper that mirrors the upsert handler against mock repositories
async fn test_upsert_entry_wrapper(
    ctx: &mut TestContext,
    employee_id: Uuid,
    request: UpsertScheduleEntryRequest,
) -> Result<Json<UpsertScheduleEntryResponse>, AppError> {
    // Clearing a status is a DELETE; an empty code never reaches storage.
    if request.status.trim().is_empty() {
        return Err(AppError(PlanError::Validation(
            "Status must not be empty; delete the entry to clear it".to_string(),
        )));
    }

    let employee = ctx.employee_repo.get_employee_by_id(employee_id).await?;
    if employee.is_none() {
        return Err(AppError(PlanError::NotFound(format!(
            "Employee with ID {} not found",
            employee_id
        ))));
    }

    // Mockall needs 'static strs for reference arguments
    let period: &'static str = Box::leak(request.period.as_str().to_string().into_boxed_str());
    let status: &'static str = Box::leak(request.status.clone().into_boxed_str());

    let db_entry = ctx
        .schedule_entry_repo
        .upsert_entry(
            employee_id,
            request.date,
            period,
            status,
            None,
            request.is_highlighted,
            None,
        )
        .await?;

    ctx.stats_cache.invalidate_employee(employee_id);

    Ok(Json(UpsertScheduleEntryResponse {
        employee_id,
        entry: db_entry.into_entry()?,
    }))
}

// Test wrapper mirroring the delete handler
async fn test_delete_entry_wrapper(
    ctx: &mut TestContext,
    employee_id: Uuid,
    entry_date: NaiveDate,
    period: Period,
) -> Result<bool, AppError> {
    let period: &'static str = Box::leak(period.as_str().to_string().into_boxed_str());
    let deleted = ctx
        .schedule_entry_repo
        .delete_entry(employee_id, entry_date, period)
        .await?;

    if !deleted {
        return Err(AppError(PlanError::NotFound(format!(
            "No schedule entry for employee {} on {}",
            employee_id, entry_date
        ))));
    }

    ctx.stats_cache.invalidate_employee(employee_id);
    Ok(true)
}

fn upsert_request(date_str: &str, period: Period, status: &str) -> UpsertScheduleEntryRequest {
    UpsertScheduleEntryRequest {
        date: date(date_str),
        period,
        status: status.to_string(),
        project_code: None,
        is_highlighted: false,
        note: None,
    }
}

#[tokio::test]
async fn test_upsert_entry_success() {
    let mut ctx = TestContext::new();
    let employee = db_employee("Alice");
    let employee_id = employee.id;

    ctx.employee_repo
        .expect_get_employee_by_id()
        .with(predicate::eq(employee_id))
        .returning(move |_| Ok(Some(employee.clone())));

    ctx.schedule_entry_repo
        .expect_upsert_entry()
        .returning(move |id, d, p, s, _, _, _| {
            let mut row = db_entry(id, "2024-03-05", p, s);
            row.entry_date = d;
            Ok(row)
        });

    let response = test_upsert_entry_wrapper(
        &mut ctx,
        employee_id,
        upsert_request("2024-03-05", Period::Full, "assistance"),
    )
    .await
    .expect("upsert should succeed");

    assert_eq!(response.0.employee_id, employee_id);
    assert_eq!(response.0.entry.date, date("2024-03-05"));
    assert_eq!(response.0.entry.period, Period::Full);
    assert_eq!(response.0.entry.status, "assistance");
}

#[tokio::test]
async fn test_upsert_entry_rejects_empty_status() {
    let mut ctx = TestContext::new();
    let employee_id = Uuid::new_v4();

    let result = test_upsert_entry_wrapper(
        &mut ctx,
        employee_id,
        upsert_request("2024-03-05", Period::Am, "  "),
    )
    .await;

    match result {
        Err(AppError(PlanError::Validation(_))) => {}
        other => panic!("Expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_upsert_entry_unknown_employee() {
    let mut ctx = TestContext::new();
    let employee_id = Uuid::new_v4();

    ctx.employee_repo
        .expect_get_employee_by_id()
        .with(predicate::eq(employee_id))
        .returning(|_| Ok(None));

    let result = test_upsert_entry_wrapper(
        &mut ctx,
        employee_id,
        upsert_request("2024-03-05", Period::Full, "conges"),
    )
    .await;

    match result {
        Err(AppError(PlanError::NotFound(_))) => {}
        other => panic!("Expected not found error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_upsert_entry_invalidates_cached_months() {
    let mut ctx = TestContext::new();
    let employee = db_employee("Alice");
    let employee_id = employee.id;

    // Seed the cache as if stats had been served already
    ctx.stats_cache.insert(
        employee_id,
        2024,
        3,
        workplan_core::stats::SummaryStats::empty("Alice"),
    );
    assert!(ctx.stats_cache.get(employee_id, 2024, 3).is_some());

    ctx.employee_repo
        .expect_get_employee_by_id()
        .returning(move |_| Ok(Some(employee.clone())));
    ctx.schedule_entry_repo
        .expect_upsert_entry()
        .returning(move |id, d, p, s, _, _, _| {
            let mut row = db_entry(id, "2024-03-05", p, s);
            row.entry_date = d;
            Ok(row)
        });

    test_upsert_entry_wrapper(
        &mut ctx,
        employee_id,
        upsert_request("2024-03-05", Period::Pm, "conges"),
    )
    .await
    .expect("upsert should succeed");

    assert!(ctx.stats_cache.get(employee_id, 2024, 3).is_none());
}

#[tokio::test]
async fn test_delete_entry_success() {
    let mut ctx = TestContext::new();
    let employee_id = Uuid::new_v4();

    ctx.schedule_entry_repo
        .expect_delete_entry()
        .returning(|_, _, _| Ok(true));

    let deleted = test_delete_entry_wrapper(&mut ctx, employee_id, date("2024-03-05"), Period::Am)
        .await
        .expect("delete should succeed");
    assert!(deleted);
}

#[tokio::test]
async fn test_delete_entry_not_found() {
    let mut ctx = TestContext::new();
    let employee_id = Uuid::new_v4();

    ctx.schedule_entry_repo
        .expect_delete_entry()
        .returning(|_, _, _| Ok(false));

    let result =
        test_delete_entry_wrapper(&mut ctx, employee_id, date("2024-03-05"), Period::Am).await;

    match result {
        Err(AppError(PlanError::NotFound(_))) => {}
        other => panic!("Expected not found error, got {:?}", other.map(|_| ())),
    }
}
