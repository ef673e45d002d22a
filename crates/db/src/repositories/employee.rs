use crate::models::DbEmployee;
use chrono::Utc;
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_employee(
    pool: &Pool<Postgres>,
    name: &str,
    department: Option<&str>,
    position: Option<&str>,
    role: &str,
) -> Result<DbEmployee> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating employee: id={}, name={}, role={}",
        id,
        name,
        role
    );

    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        INSERT INTO employees (id, name, department, position, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, name, department, position, role, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(department)
    .bind(position)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Employee created successfully: id={}", id);
    Ok(employee)
}

pub async fn get_employee_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbEmployee>> {
    tracing::debug!("Getting employee by id: {}", id);

    let employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, name, department, position, role, created_at
        FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if let Some(e) = &employee {
        tracing::debug!("Employee found: id={}, name={}", e.id, e.name);
    } else {
        tracing::debug!("Employee not found: id={}", id);
    }

    Ok(employee)
}

pub async fn list_employees(pool: &Pool<Postgres>) -> Result<Vec<DbEmployee>> {
    let employees = sqlx::query_as::<_, DbEmployee>(
        r#"
        SELECT id, name, department, position, role, created_at
        FROM employees
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

pub async fn update_employee(
    pool: &Pool<Postgres>,
    id: Uuid,
    name: Option<&str>,
    department: Option<&str>,
    position: Option<&str>,
    role: Option<&str>,
) -> Result<DbEmployee> {
    let employee = get_employee_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Employee not found"))?;

    let name = name.unwrap_or(&employee.name);
    let department = department.or(employee.department.as_deref());
    let position = position.or(employee.position.as_deref());
    let role = role.unwrap_or(&employee.role);

    let updated_employee = sqlx::query_as::<_, DbEmployee>(
        r#"
        UPDATE employees
        SET name = $2, department = $3, position = $4, role = $5
        WHERE id = $1
        RETURNING id, name, department, position, role, created_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(department)
    .bind(position)
    .bind(role)
    .fetch_one(pool)
    .await?;

    Ok(updated_employee)
}

pub async fn delete_employee(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting employee: id={}", id);

    // Schedule entries go with the employee via ON DELETE CASCADE.
    let result = sqlx::query(
        r#"
        DELETE FROM employees
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
