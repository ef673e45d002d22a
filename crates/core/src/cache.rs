//! Memoizing cache for monthly summaries, keyed by (employee, year, month).
//!
//! Purely a latency optimization: recomputation is idempotent, so the only
//! guarantee the cache needs is per-key last-write-wins, which a single
//! mutex around the map provides. Invalidation is wholesale — triggered by
//! a status-code reference-data change or an explicit refresh — plus a
//! per-employee drop when that employee's schedule is edited.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::stats::{ChartRow, SummaryStats};

pub type StatsKey = (Uuid, i32, u32);

/// A computed summary and its derived chart row.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedStats {
    pub summary: SummaryStats,
    pub chart_row: ChartRow,
}

#[derive(Debug, Default)]
pub struct StatsCache {
    entries: Mutex<HashMap<StatsKey, CachedStats>>,
}

impl StatsCache {
    pub fn new() -> Self {
        StatsCache::default()
    }

    pub fn get(&self, employee_id: Uuid, year: i32, month: u32) -> Option<CachedStats> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(&(employee_id, year, month)).cloned()
    }

    /// Stores a freshly computed summary and returns it with its chart row.
    pub fn insert(
        &self,
        employee_id: Uuid,
        year: i32,
        month: u32,
        summary: SummaryStats,
    ) -> CachedStats {
        let cached = CachedStats {
            chart_row: ChartRow::from_summary(&summary),
            summary,
        };
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert((employee_id, year, month), cached.clone());
        cached
    }

    /// Drops every cached month for one employee, after a schedule edit.
    pub fn invalidate_employee(&self, employee_id: Uuid) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|(id, _, _), _| *id != employee_id);
    }

    /// Drops everything. Returns the number of entries removed.
    pub fn invalidate_all(&self) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let count = entries.len();
        entries.clear();
        count
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
