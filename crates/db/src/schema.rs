use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create employees table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            department VARCHAR(255) NULL,
            position VARCHAR(255) NULL,
            role VARCHAR(32) NOT NULL DEFAULT 'employee',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_role CHECK (role IN ('admin', 'employee'))
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create schedule_entries table, one row per half-day assignment
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schedule_entries (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            employee_id UUID NOT NULL REFERENCES employees(id) ON DELETE CASCADE,
            entry_date DATE NOT NULL,
            period VARCHAR(4) NOT NULL,
            status VARCHAR(64) NOT NULL,
            project_code VARCHAR(64) NULL,
            is_highlighted BOOLEAN NOT NULL DEFAULT FALSE,
            note TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_period CHECK (period IN ('AM', 'PM', 'FULL')),
            CONSTRAINT non_empty_status CHECK (status <> ''),
            CONSTRAINT unique_half_day UNIQUE (employee_id, entry_date, period)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create projects table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            code VARCHAR(64) NOT NULL UNIQUE,
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create status_codes table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS status_codes (
            code VARCHAR(64) PRIMARY KEY,
            label VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_schedule_entries_employee_id ON schedule_entries(employee_id);
        CREATE INDEX IF NOT EXISTS idx_schedule_entries_entry_date ON schedule_entries(entry_date);
        CREATE INDEX IF NOT EXISTS idx_schedule_entries_employee_date ON schedule_entries(employee_id, entry_date);
        CREATE INDEX IF NOT EXISTS idx_projects_code ON projects(code);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
