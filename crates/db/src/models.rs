use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use workplan_core::errors::{PlanError, PlanResult};
use workplan_core::models::employee::{EmployeeSummary, Role};
use workplan_core::models::project::Project;
use workplan_core::models::schedule::ScheduleEntry;
use workplan_core::models::status::StatusCode;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbEmployee {
    pub id: Uuid,
    pub name: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl DbEmployee {
    /// Parses the stored role; the CHECK constraint keeps rows valid, so a
    /// mismatch means the schema drifted.
    pub fn role(&self) -> PlanResult<Role> {
        self.role
            .parse()
            .map_err(|e: workplan_core::models::employee::ParseRoleError| {
                PlanError::Internal(Box::new(e))
            })
    }

    pub fn into_summary(self) -> PlanResult<EmployeeSummary> {
        let role = self.role()?;
        Ok(EmployeeSummary {
            id: self.id,
            name: self.name,
            department: self.department,
            position: self.position,
            role,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScheduleEntry {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub entry_date: NaiveDate,
    pub period: String,
    pub status: String,
    pub project_code: Option<String>,
    pub is_highlighted: bool,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbScheduleEntry {
    pub fn into_entry(self) -> PlanResult<ScheduleEntry> {
        let period = self
            .period
            .parse()
            .map_err(|e: workplan_core::models::schedule::ParsePeriodError| {
                PlanError::Internal(Box::new(e))
            })?;
        Ok(ScheduleEntry {
            date: self.entry_date,
            period,
            status: self.status,
            project_code: self.project_code,
            is_highlighted: self.is_highlighted,
            note: self.note,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProject {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbProject> for Project {
    fn from(row: DbProject) -> Self {
        Project {
            id: row.id,
            code: row.code,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStatusCode {
    pub code: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbStatusCode> for StatusCode {
    fn from(row: DbStatusCode) -> Self {
        StatusCode {
            code: row.code,
            label: row.label,
            created_at: row.created_at,
        }
    }
}
