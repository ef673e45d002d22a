use std::sync::atomic::{AtomicUsize, Ordering};

use mockall::predicate;
use uuid::Uuid;
use workplan_core::{
    cache::{CachedStats, StatsCache},
    stats::{calculate_stats, MonthSpan},
};

use crate::test_utils::{db_employee, db_entry, TestContext};

// Mirrors the handler's cache-then-compute path: on a miss, load the month's
// rows from the (mock) repository, aggregate, and memoize.
async fn test_stats_wrapper(
    ctx: &mut TestContext,
    employee_id: Uuid,
    name: &str,
    year: i32,
    month: u32,
    computations: &AtomicUsize,
) -> CachedStats {
    if let Some(cached) = ctx.stats_cache.get(employee_id, year, month) {
        return cached;
    }

    let schedule = match MonthSpan::new(year, month) {
        Some(span) => {
            let rows = ctx
                .schedule_entry_repo
                .get_entries_in_range(employee_id, span.first_day, span.last_day)
                .await
                .expect("mock repository");
            rows.into_iter()
                .map(|row| row.into_entry().expect("valid row"))
                .collect()
        }
        None => Vec::new(),
    };

    computations.fetch_add(1, Ordering::SeqCst);
    let summary = calculate_stats(name, &schedule, year, month);
    ctx.stats_cache.insert(employee_id, year, month, summary)
}

#[tokio::test]
async fn test_stats_computed_once_then_served_from_cache() {
    let mut ctx = TestContext::new();
    let employee_id = db_employee("Alice").id;
    let computations = AtomicUsize::new(0);

    // The repository must be hit exactly once; the second call is a cache hit.
    ctx.schedule_entry_repo
        .expect_get_entries_in_range()
        .with(
            predicate::eq(employee_id),
            predicate::always(),
            predicate::always(),
        )
        .times(1)
        .returning(|id, _, _| {
            Ok(vec![
                db_entry(id, "2024-03-05", "FULL", "assistance"),
                db_entry(id, "2024-03-06", "AM", "conges"),
            ])
        });

    let first = test_stats_wrapper(&mut ctx, employee_id, "Alice", 2024, 3, &computations).await;
    let second = test_stats_wrapper(&mut ctx, employee_id, "Alice", 2024, 3, &computations).await;

    assert_eq!(computations.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
    assert_eq!(first.summary.present_days, 1.0);
    assert_eq!(first.summary.vacation_days, 0.5);
    assert_eq!(first.chart_row.name, "Alice");
}

#[tokio::test]
async fn test_stats_recomputed_after_refresh() {
    let mut ctx = TestContext::new();
    let employee_id = db_employee("Alice").id;
    let computations = AtomicUsize::new(0);

    ctx.schedule_entry_repo
        .expect_get_entries_in_range()
        .times(2)
        .returning(|id, _, _| Ok(vec![db_entry(id, "2024-03-05", "FULL", "assistance")]));

    test_stats_wrapper(&mut ctx, employee_id, "Alice", 2024, 3, &computations).await;

    // Explicit refresh drops everything, so the next call recomputes.
    let invalidated = ctx.stats_cache.invalidate_all();
    assert_eq!(invalidated, 1);

    test_stats_wrapper(&mut ctx, employee_id, "Alice", 2024, 3, &computations).await;
    assert_eq!(computations.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_stats_invalid_month_degrades_without_repository_call() {
    let mut ctx = TestContext::new();
    let employee_id = Uuid::new_v4();
    let computations = AtomicUsize::new(0);

    // No expectation set on the repository: calling it would panic the mock.
    let cached = test_stats_wrapper(&mut ctx, employee_id, "Alice", 2024, 13, &computations).await;

    assert_eq!(cached.summary.total_days, 0);
    assert_eq!(cached.summary.present_days, 0.0);
    assert!(cached.summary.project_stats.is_empty());
}

#[tokio::test]
async fn test_stats_cached_separately_per_month() {
    let mut ctx = TestContext::new();
    let employee_id = db_employee("Alice").id;
    let computations = AtomicUsize::new(0);

    ctx.schedule_entry_repo
        .expect_get_entries_in_range()
        .times(2)
        .returning(|id, from, _| {
            if from.to_string().starts_with("2024-03") {
                Ok(vec![db_entry(id, "2024-03-05", "FULL", "assistance")])
            } else {
                Ok(vec![])
            }
        });

    let march = test_stats_wrapper(&mut ctx, employee_id, "Alice", 2024, 3, &computations).await;
    let april = test_stats_wrapper(&mut ctx, employee_id, "Alice", 2024, 4, &computations).await;

    assert_eq!(march.summary.present_days, 1.0);
    assert_eq!(april.summary.present_days, 0.0);
    assert_eq!(april.summary.total_days, 30);
}

#[test]
fn test_status_set_change_invalidates_wholesale() {
    let cache = StatsCache::new();
    cache.insert(
        Uuid::new_v4(),
        2024,
        3,
        calculate_stats("Alice", &[], 2024, 3),
    );
    cache.insert(
        Uuid::new_v4(),
        2024,
        3,
        calculate_stats("Bob", &[], 2024, 3),
    );

    // Reference-data mutations drop the whole cache, not a date range.
    let removed = cache.invalidate_all();
    assert_eq!(removed, 2);
    assert!(cache.is_empty());
}
