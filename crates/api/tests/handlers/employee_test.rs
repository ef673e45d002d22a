use axum::Json;
use mockall::predicate;
use uuid::Uuid;
use workplan_core::{
    errors::PlanError,
    models::employee::{GetEmployeeResponse, Role},
};

use crate::test_utils::{db_employee, db_entry, TestContext};
use workplan_api::middleware::error_handling::AppError;

// Test wrapper mirroring the get_employee handler against mocks
async fn test_get_employee_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
) -> Result<Json<GetEmployeeResponse>, AppError> {
    let db_employee = ctx.employee_repo.get_employee_by_id(id).await?;
    let Some(db_employee) = db_employee else {
        return Err(AppError(PlanError::NotFound(format!(
            "Employee with ID {} not found",
            id
        ))));
    };

    let entries = ctx
        .schedule_entry_repo
        .get_entries_by_employee(id)
        .await
        .unwrap_or_default();

    let role = db_employee.role()?;
    let schedule = entries
        .into_iter()
        .map(|row| row.into_entry())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(GetEmployeeResponse {
        id: db_employee.id,
        name: db_employee.name,
        department: db_employee.department,
        position: db_employee.position,
        role,
        schedule,
    }))
}

#[tokio::test]
async fn test_get_employee_with_schedule() {
    let mut ctx = TestContext::new();
    let employee = db_employee("Alice");
    let employee_id = employee.id;

    ctx.employee_repo
        .expect_get_employee_by_id()
        .with(predicate::eq(employee_id))
        .returning(move |_| Ok(Some(employee.clone())));

    ctx.schedule_entry_repo
        .expect_get_entries_by_employee()
        .with(predicate::eq(employee_id))
        .returning(move |id| {
            Ok(vec![
                db_entry(id, "2024-03-05", "FULL", "assistance"),
                db_entry(id, "2024-03-06", "AM", "conges"),
            ])
        });

    let response = test_get_employee_wrapper(&mut ctx, employee_id)
        .await
        .expect("employee should be found");

    assert_eq!(response.0.id, employee_id);
    assert_eq!(response.0.name, "Alice");
    assert_eq!(response.0.role, Role::Employee);
    assert_eq!(response.0.schedule.len(), 2);
    assert_eq!(response.0.schedule[0].status, "assistance");
    assert_eq!(
        response.0.schedule[1].period,
        workplan_core::models::schedule::Period::Am
    );
}

#[tokio::test]
async fn test_get_employee_not_found() {
    let mut ctx = TestContext::new();
    let missing_id = Uuid::new_v4();

    ctx.employee_repo
        .expect_get_employee_by_id()
        .with(predicate::eq(missing_id))
        .returning(|_| Ok(None));

    let result = test_get_employee_wrapper(&mut ctx, missing_id).await;

    match result {
        Err(AppError(PlanError::NotFound(message))) => {
            assert!(message.contains(&missing_id.to_string()));
        }
        other => panic!("Expected not found error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_get_employee_database_error() {
    let mut ctx = TestContext::new();
    let employee_id = Uuid::new_v4();

    ctx.employee_repo
        .expect_get_employee_by_id()
        .returning(|_| Err(eyre::eyre!("connection refused")));

    let result = test_get_employee_wrapper(&mut ctx, employee_id).await;

    match result {
        Err(AppError(PlanError::Database(_))) => {}
        other => panic!("Expected database error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_list_employees_as_summaries() {
    let mut ctx = TestContext::new();

    ctx.employee_repo.expect_list_employees().returning(|| {
        let mut admin = db_employee("Alice");
        admin.role = "admin".to_string();
        Ok(vec![admin, db_employee("Bob")])
    });

    let rows = ctx.employee_repo.list_employees().await.expect("roster");
    let summaries: Vec<_> = rows
        .into_iter()
        .map(|row| row.into_summary().expect("valid role"))
        .collect();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].role, Role::Admin);
    assert_eq!(summaries[1].role, Role::Employee);
}

#[tokio::test]
async fn test_invalid_stored_role_is_internal_error() {
    let mut corrupted = db_employee("Mallory");
    corrupted.role = "superuser".to_string();

    let result = corrupted.role();
    match result {
        Err(PlanError::Internal(_)) => {}
        other => panic!("Expected internal error, got {:?}", other.map(|_| ())),
    }
}
