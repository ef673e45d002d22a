use crate::models::DbStatusCode;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};

pub async fn create_status_code(
    pool: &Pool<Postgres>,
    code: &str,
    label: &str,
) -> Result<DbStatusCode> {
    let now = Utc::now();

    tracing::debug!("Creating status code: code={}", code);

    let status = sqlx::query_as::<_, DbStatusCode>(
        r#"
        INSERT INTO status_codes (code, label, created_at)
        VALUES ($1, $2, $3)
        RETURNING code, label, created_at
        "#,
    )
    .bind(code)
    .bind(label)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(status)
}

pub async fn get_status_code(pool: &Pool<Postgres>, code: &str) -> Result<Option<DbStatusCode>> {
    let status = sqlx::query_as::<_, DbStatusCode>(
        r#"
        SELECT code, label, created_at
        FROM status_codes
        WHERE code = $1
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(status)
}

pub async fn list_status_codes(pool: &Pool<Postgres>) -> Result<Vec<DbStatusCode>> {
    let statuses = sqlx::query_as::<_, DbStatusCode>(
        r#"
        SELECT code, label, created_at
        FROM status_codes
        ORDER BY code ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(statuses)
}

pub async fn delete_status_code(pool: &Pool<Postgres>, code: &str) -> Result<bool> {
    tracing::debug!("Deleting status code: code={}", code);

    let result = sqlx::query(
        r#"
        DELETE FROM status_codes
        WHERE code = $1
        "#,
    )
    .bind(code)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
