//! Load-cycle orchestration: failure isolation and overlapping loads.

use crate::helpers::{FakePosts, FakeSynced, post_record, synced_record, unavailable};
use gnomon_test::service::planner::CalendarPlanner;

#[test_log::test(tokio::test)]
async fn sync_failure_leaves_post_events_untouched() {
    let mut planner = CalendarPlanner::new(
        FakePosts::always(vec![post_record("1", "2024-06-01T10:00:00Z")]),
        FakeSynced::scripted(vec![
            Ok(vec![synced_record(
                "ev",
                "Team Meeting",
                "2024-06-03T09:00:00Z",
                "2024-06-03T10:00:00Z",
            )]),
            Err(unavailable("sync down")),
        ]),
        chrono_tz::UTC,
        50,
    );

    planner.refresh().await;
    assert_eq!(planner.event_count(), 2);

    // second refresh: sync fails, synced portion clears, posts survive
    planner.refresh().await;
    let ids: Vec<_> = planner.events().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, ["post-1"]);
}

#[test_log::test(tokio::test)]
async fn post_failure_then_recovery_accumulates_once() {
    let mut planner = CalendarPlanner::new(
        FakePosts::scripted(vec![
            Err(unavailable("posts down")),
            Ok(vec![post_record("1", "2024-06-01T10:00:00Z")]),
            Ok(vec![post_record("1", "2024-06-01T10:00:00Z")]),
        ]),
        FakeSynced::always(vec![]),
        chrono_tz::UTC,
        50,
    );

    planner.refresh().await;
    assert_eq!(planner.event_count(), 0);

    planner.refresh().await;
    assert_eq!(planner.event_count(), 1);

    // identical payload on a later load never duplicates
    planner.refresh().await;
    assert_eq!(planner.event_count(), 1);
}

#[test_log::test(tokio::test)]
async fn successful_sync_replaces_the_previous_sync_wholesale() {
    let mut planner = CalendarPlanner::new(
        FakePosts::always(vec![]),
        FakeSynced::scripted(vec![
            Ok(vec![
                synced_record("a", "One", "2024-06-01T09:00:00Z", "2024-06-01T10:00:00Z"),
                synced_record("b", "Two", "2024-06-02T09:00:00Z", "2024-06-02T10:00:00Z"),
            ]),
            Ok(vec![synced_record(
                "c",
                "Three",
                "2024-06-03T09:00:00Z",
                "2024-06-03T10:00:00Z",
            )]),
        ]),
        chrono_tz::UTC,
        50,
    );

    planner.refresh().await;
    assert_eq!(planner.event_count(), 2);

    planner.refresh().await;
    let ids: Vec<_> = planner.events().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, ["c"]);
}

#[test]
fn overlapping_loads_resolve_newest_wins() {
    let mut planner = CalendarPlanner::new(
        FakePosts::always(vec![]),
        FakeSynced::always(vec![]),
        chrono_tz::UTC,
        50,
    );

    let first = planner.begin_load();
    let second = planner.begin_load();

    // the newer load lands first
    assert!(planner.apply_posts(second, Ok(vec![post_record("new", "2024-06-02T10:00:00Z")])));
    // the superseded load lands late and is discarded
    assert!(!planner.apply_posts(first, Ok(vec![post_record("old", "2024-06-01T10:00:00Z")])));

    let ids: Vec<_> = planner.events().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, ["post-new"]);
}
