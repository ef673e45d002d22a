use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of status codes the attendance aggregator recognizes.
///
/// Status codes themselves are admin-managed reference data (arbitrary
/// strings); this enum covers the ones with counting semantics. Codes outside
/// this set parse to an error and are ignored by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Assistance,
    Vigi,
    Formation,
    Projet,
    Management,
    Coordinateur,
    Regisseur,
    Demenagement,
    Permanence,
    Parc,
    Conges,
    Tp,
    Absence,
}

/// A counter of [`crate::stats::SummaryStats`] that a status kind feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Present,
    Absent,
    Vacation,
    Training,
    Management,
    Project,
    Vigi,
    Tp,
    Coordinator,
    OtherAbsence,
    Regisseur,
    Demenagement,
    Permanence,
    Parc,
}

impl StatusKind {
    /// Counters this kind contributes to. Adding a status is a data change
    /// here, not a new dispatch arm in the aggregator.
    pub fn counters(self) -> &'static [Counter] {
        use Counter::*;
        match self {
            StatusKind::Assistance => &[Present],
            StatusKind::Vigi => &[Present, Vigi],
            StatusKind::Formation => &[Present, Training],
            StatusKind::Projet => &[Present, Project],
            StatusKind::Management => &[Present, Management],
            StatusKind::Coordinateur => &[Present, Coordinator],
            StatusKind::Regisseur => &[Present, Regisseur],
            StatusKind::Demenagement => &[Present, Demenagement],
            StatusKind::Permanence => &[Present, Permanence],
            StatusKind::Parc => &[Present, Parc],
            StatusKind::Conges => &[Vacation],
            StatusKind::Tp => &[Tp],
            StatusKind::Absence => &[Absent, OtherAbsence],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Assistance => "assistance",
            StatusKind::Vigi => "vigi",
            StatusKind::Formation => "formation",
            StatusKind::Projet => "projet",
            StatusKind::Management => "management",
            StatusKind::Coordinateur => "coordinateur",
            StatusKind::Regisseur => "regisseur",
            StatusKind::Demenagement => "demenagement",
            StatusKind::Permanence => "permanence",
            StatusKind::Parc => "parc",
            StatusKind::Conges => "conges",
            StatusKind::Tp => "tp",
            StatusKind::Absence => "absence",
        }
    }

    /// All recognized kinds, in display order.
    pub fn all() -> &'static [StatusKind] {
        &[
            StatusKind::Assistance,
            StatusKind::Vigi,
            StatusKind::Formation,
            StatusKind::Projet,
            StatusKind::Management,
            StatusKind::Coordinateur,
            StatusKind::Regisseur,
            StatusKind::Demenagement,
            StatusKind::Permanence,
            StatusKind::Parc,
            StatusKind::Conges,
            StatusKind::Tp,
            StatusKind::Absence,
        ]
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatusError(pub String);

impl fmt::Display for UnknownStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown status code: {}", self.0)
    }
}

impl std::error::Error for UnknownStatusError {}

impl FromStr for StatusKind {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownStatusError(s.to_string()))
    }
}

/// Admin-managed status-code reference data, as surfaced to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCode {
    pub code: String,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStatusCodeRequest {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListStatusCodesResponse {
    pub statuses: Vec<StatusCode>,
}
