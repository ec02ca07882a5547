//! The TTL-caching source decorator.

use std::sync::Arc;
use std::time::Duration;

use crate::helpers::{FakePosts, FakeSynced, post_record, synced_record, unavailable};
use gnomon_test::client::cache::CachedSource;
use gnomon_test::client::source::{PostSource, SyncedEventSource};

#[test_log::test(tokio::test)]
async fn repeated_post_fetches_hit_the_cache() {
    let inner = Arc::new(FakePosts::always(vec![post_record(
        "1",
        "2024-06-01T10:00:00Z",
    )]));
    let cached = CachedSource::new(Arc::clone(&inner), Duration::from_secs(300));

    let first = cached.list_posts(50).await.unwrap();
    let second = cached.list_posts(50).await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(inner.call_count(), 1);
}

#[test_log::test(tokio::test)]
async fn different_limits_are_distinct_cache_keys() {
    let inner = Arc::new(FakePosts::always(vec![post_record(
        "1",
        "2024-06-01T10:00:00Z",
    )]));
    let cached = CachedSource::new(Arc::clone(&inner), Duration::from_secs(300));

    let _ = cached.list_posts(10).await.unwrap();
    let _ = cached.list_posts(20).await.unwrap();
    let _ = cached.list_posts(10).await.unwrap();
    assert_eq!(inner.call_count(), 2);
}

#[test_log::test(tokio::test)]
async fn errors_pass_through_uncached() {
    let inner = Arc::new(FakeSynced::scripted(vec![
        Err(unavailable("down")),
        Ok(vec![synced_record(
            "ev",
            "Team Meeting",
            "2024-06-03T09:00:00Z",
            "2024-06-03T10:00:00Z",
        )]),
    ]));
    let cached = CachedSource::new(Arc::clone(&inner), Duration::from_secs(300));

    assert!(cached.list_synced_events().await.is_err());
    // the failure was not cached; the retry reaches upstream and succeeds
    let events = cached.list_synced_events().await.unwrap();
    assert_eq!(events.len(), 1);
    // the success is cached from here on
    let again = cached.list_synced_events().await.unwrap();
    assert_eq!(again.len(), 1);
    assert_eq!(inner.call_count(), 2);
}

#[test_log::test(tokio::test)]
async fn clear_forces_a_refetch() {
    let inner = Arc::new(FakeSynced::always(vec![synced_record(
        "ev",
        "Team Meeting",
        "2024-06-03T09:00:00Z",
        "2024-06-03T10:00:00Z",
    )]));
    let cached = CachedSource::new(Arc::clone(&inner), Duration::from_secs(300));

    let _ = cached.list_synced_events().await.unwrap();
    cached.clear().await;
    let _ = cached.list_synced_events().await.unwrap();
    assert_eq!(inner.call_count(), 2);
}

#[test_log::test(tokio::test)]
async fn shared_clones_share_one_cache() {
    let inner = Arc::new(FakePosts::always(vec![post_record(
        "1",
        "2024-06-01T10:00:00Z",
    )]));
    let cached = CachedSource::new(Arc::clone(&inner), Duration::from_secs(300));
    let sibling = cached.clone();

    let _ = cached.list_posts(50).await.unwrap();
    let _ = sibling.list_posts(50).await.unwrap();
    assert_eq!(inner.call_count(), 1);
}
