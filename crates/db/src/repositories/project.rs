use crate::models::DbProject;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_project(pool: &Pool<Postgres>, code: &str, name: &str) -> Result<DbProject> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating project: id={}, code={}", id, code);

    let project = sqlx::query_as::<_, DbProject>(
        r#"
        INSERT INTO projects (id, code, name, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, code, name, created_at
        "#,
    )
    .bind(id)
    .bind(code)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(project)
}

pub async fn get_project_by_code(pool: &Pool<Postgres>, code: &str) -> Result<Option<DbProject>> {
    let project = sqlx::query_as::<_, DbProject>(
        r#"
        SELECT id, code, name, created_at
        FROM projects
        WHERE code = $1
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(project)
}

pub async fn list_projects(pool: &Pool<Postgres>) -> Result<Vec<DbProject>> {
    let projects = sqlx::query_as::<_, DbProject>(
        r#"
        SELECT id, code, name, created_at
        FROM projects
        ORDER BY code ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(projects)
}

pub async fn delete_project(pool: &Pool<Postgres>, code: &str) -> Result<bool> {
    tracing::debug!("Deleting project: code={}", code);

    let result = sqlx::query(
        r#"
        DELETE FROM projects
        WHERE code = $1
        "#,
    )
    .bind(code)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
