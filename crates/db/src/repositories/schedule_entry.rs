use crate::models::DbScheduleEntry;
use chrono::{NaiveDate, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Creates or replaces the entry at (employee, date, period). The status
/// editor always writes whole half-days, so an upsert is the natural shape
/// of both "assign" and "change".
pub async fn upsert_entry(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
    entry_date: NaiveDate,
    period: &str,
    status: &str,
    project_code: Option<&str>,
    is_highlighted: bool,
    note: Option<&str>,
) -> Result<DbScheduleEntry> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Upserting schedule entry: employee_id={}, date={}, period={}, status={}",
        employee_id,
        entry_date,
        period,
        status
    );

    let entry = sqlx::query_as::<_, DbScheduleEntry>(
        r#"
        INSERT INTO schedule_entries
            (id, employee_id, entry_date, period, status, project_code, is_highlighted, note, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (employee_id, entry_date, period) DO UPDATE
        SET status = EXCLUDED.status,
            project_code = EXCLUDED.project_code,
            is_highlighted = EXCLUDED.is_highlighted,
            note = EXCLUDED.note
        RETURNING id, employee_id, entry_date, period, status, project_code, is_highlighted, note, created_at
        "#,
    )
    .bind(id)
    .bind(employee_id)
    .bind(entry_date)
    .bind(period)
    .bind(status)
    .bind(project_code)
    .bind(is_highlighted)
    .bind(note)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

pub async fn get_entries_by_employee(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
) -> Result<Vec<DbScheduleEntry>> {
    let entries = sqlx::query_as::<_, DbScheduleEntry>(
        r#"
        SELECT id, employee_id, entry_date, period, status, project_code, is_highlighted, note, created_at
        FROM schedule_entries
        WHERE employee_id = $1
        ORDER BY entry_date ASC, period ASC
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Month loader for the statistics views: both bounds inclusive.
pub async fn get_entries_in_range(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<DbScheduleEntry>> {
    let entries = sqlx::query_as::<_, DbScheduleEntry>(
        r#"
        SELECT id, employee_id, entry_date, period, status, project_code, is_highlighted, note, created_at
        FROM schedule_entries
        WHERE employee_id = $1 AND entry_date >= $2 AND entry_date <= $3
        ORDER BY entry_date ASC, period ASC
        "#,
    )
    .bind(employee_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

/// Removes one half-day assignment; clearing a status deletes the row
/// instead of storing an empty code.
pub async fn delete_entry(
    pool: &Pool<Postgres>,
    employee_id: Uuid,
    entry_date: NaiveDate,
    period: &str,
) -> Result<bool> {
    tracing::debug!(
        "Deleting schedule entry: employee_id={}, date={}, period={}",
        employee_id,
        entry_date,
        period
    );

    let result = sqlx::query(
        r#"
        DELETE FROM schedule_entries
        WHERE employee_id = $1 AND entry_date = $2 AND period = $3
        "#,
    )
    .bind(employee_id)
    .bind(entry_date)
    .bind(period)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_entries_by_employee(pool: &Pool<Postgres>, employee_id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM schedule_entries
        WHERE employee_id = $1
        "#,
    )
    .bind(employee_id)
    .execute(pool)
    .await?;

    Ok(())
}
