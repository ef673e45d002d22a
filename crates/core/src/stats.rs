//! # Monthly Attendance Aggregation
//!
//! Rolls one employee's schedule entries up into per-category day counts for
//! a single month. Each entry weighs 1.0 for a `FULL` period and 0.5 for
//! `AM`/`PM`, and lands in exactly one category, except that a highlighted
//! (on-call) day always counts as permanence + presence, whatever its status
//! says. Status codes the system does not recognize are ignored.
//!
//! The aggregation is pure and total: malformed `(year, month)` inputs
//! degrade to an empty month and all-zero counts instead of failing, so one
//! bad input never aborts a batch run over the whole roster.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::employee::Employee;
use crate::models::schedule::ScheduleEntry;
use crate::models::status::{Counter, StatusKind};

/// Per-employee, per-month day counts by category.
///
/// `total_days` is the number of calendar days in the month, not an
/// attendance figure; every other counter is a sum of entry weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub employee_name: String,
    pub total_days: u32,
    pub present_days: f64,
    pub absent_days: f64,
    pub vacation_days: f64,
    pub training_days: f64,
    pub management_days: f64,
    pub project_days: f64,
    pub vigi_days: f64,
    pub tp_days: f64,
    pub coordinator_days: f64,
    pub other_absence_days: f64,
    pub regisseur_days: f64,
    pub demenagement_days: f64,
    pub permanence_days: f64,
    pub parc_days: f64,
    pub project_stats: HashMap<String, f64>,
}

impl SummaryStats {
    pub fn empty(employee_name: &str) -> Self {
        SummaryStats {
            employee_name: employee_name.to_string(),
            ..SummaryStats::default()
        }
    }

    /// Adds `weight` to one category counter.
    pub fn add(&mut self, counter: Counter, weight: f64) {
        let slot = match counter {
            Counter::Present => &mut self.present_days,
            Counter::Absent => &mut self.absent_days,
            Counter::Vacation => &mut self.vacation_days,
            Counter::Training => &mut self.training_days,
            Counter::Management => &mut self.management_days,
            Counter::Project => &mut self.project_days,
            Counter::Vigi => &mut self.vigi_days,
            Counter::Tp => &mut self.tp_days,
            Counter::Coordinator => &mut self.coordinator_days,
            Counter::OtherAbsence => &mut self.other_absence_days,
            Counter::Regisseur => &mut self.regisseur_days,
            Counter::Demenagement => &mut self.demenagement_days,
            Counter::Permanence => &mut self.permanence_days,
            Counter::Parc => &mut self.parc_days,
        };
        *slot += weight;
    }
}

/// Calendar span of one month, date-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl MonthSpan {
    /// Builds the span for a 1-based month, or `None` when the year/month
    /// pair does not name a real calendar month.
    pub fn new(year: i32, month: u32) -> Option<MonthSpan> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last_day = next_month.checked_sub_days(Days::new(1))?;
        Some(MonthSpan {
            first_day,
            last_day,
        })
    }

    pub fn day_count(&self) -> u32 {
        self.last_day.day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }
}

/// Computes the monthly summary for one schedule list.
///
/// `month` is 1-based. Entries dated outside the month are skipped; entries
/// whose status code is not a recognized [`StatusKind`] leave every counter
/// untouched.
pub fn calculate_stats(
    employee_name: &str,
    schedule: &[ScheduleEntry],
    year: i32,
    month: u32,
) -> SummaryStats {
    let mut stats = SummaryStats::empty(employee_name);

    // Degrade to an empty month rather than erroring on bad input.
    let Some(span) = MonthSpan::new(year, month) else {
        return stats;
    };
    stats.total_days = span.day_count();

    for entry in schedule.iter().filter(|e| span.contains(e.date)) {
        let weight = entry.period.weight();
        let kind = entry.status_kind();

        // Per-project totals accumulate before the highlight check.
        if kind == Some(StatusKind::Projet) {
            if let Some(code) = &entry.project_code {
                *stats.project_stats.entry(code.clone()).or_insert(0.0) += weight;
            }
        }

        // Business rule: an on-call day overrides status categorization.
        if entry.is_highlighted {
            stats.add(Counter::Permanence, weight);
            stats.add(Counter::Present, weight);
            continue;
        }

        let Some(kind) = kind else {
            continue;
        };
        for &counter in kind.counters() {
            stats.add(counter, weight);
        }
    }

    stats
}

/// Convenience wrapper over [`calculate_stats`] for a full employee record.
pub fn calculate_employee_stats(employee: &Employee, year: i32, month: u32) -> SummaryStats {
    calculate_stats(&employee.name, &employee.schedule, year, month)
}

/// One per-employee row for the statistics table and bar/pie charts: the
/// summary counters flattened, without the per-project breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub name: String,
    pub present: f64,
    pub absent: f64,
    pub vacation: f64,
    pub training: f64,
    pub management: f64,
    pub project: f64,
    pub vigi: f64,
    pub tp: f64,
    pub coordinator: f64,
    pub other_absence: f64,
    pub regisseur: f64,
    pub demenagement: f64,
    pub permanence: f64,
    pub parc: f64,
}

impl ChartRow {
    pub fn from_summary(summary: &SummaryStats) -> ChartRow {
        ChartRow {
            name: summary.employee_name.clone(),
            present: summary.present_days,
            absent: summary.absent_days,
            vacation: summary.vacation_days,
            training: summary.training_days,
            management: summary.management_days,
            project: summary.project_days,
            vigi: summary.vigi_days,
            tp: summary.tp_days,
            coordinator: summary.coordinator_days,
            other_absence: summary.other_absence_days,
            regisseur: summary.regisseur_days,
            demenagement: summary.demenagement_days,
            permanence: summary.permanence_days,
            parc: summary.parc_days,
        }
    }
}
