use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::status::StatusKind;

/// Granularity of a schedule entry: a morning, an afternoon, or a whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
    Full,
}

impl Period {
    /// Day weight of an entry at this granularity: 1.0 for a whole day,
    /// 0.5 for a half day.
    pub fn weight(self) -> f64 {
        match self {
            Period::Full => 1.0,
            Period::Am | Period::Pm => 0.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
            Period::Full => "FULL",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePeriodError(pub String);

impl fmt::Display for ParsePeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid period: {}", self.0)
    }
}

impl std::error::Error for ParsePeriodError {}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AM" => Ok(Period::Am),
            "PM" => Ok(Period::Pm),
            "FULL" => Ok(Period::Full),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}

/// One half-day (or full-day) assignment for one employee, identified by
/// (employee, date, period). A cleared status is deleted from storage rather
/// than stored as an empty string, so `status` is always non-empty here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub date: NaiveDate,
    pub period: Period,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_code: Option<String>,
    #[serde(default)]
    pub is_highlighted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ScheduleEntry {
    /// The recognized status kind of this entry, or `None` for codes the
    /// aggregator does not know about.
    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertScheduleEntryRequest {
    pub date: NaiveDate,
    pub period: Period,
    pub status: String,
    #[serde(default)]
    pub project_code: Option<String>,
    #[serde(default)]
    pub is_highlighted: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertScheduleEntryResponse {
    pub employee_id: Uuid,
    pub entry: ScheduleEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteScheduleEntryQuery {
    pub date: NaiveDate,
    pub period: Period,
}
