//! Explicit TTL cache and the source-caching decorator.
//!
//! The cache is an injected object owned by the calling layer, never a
//! module-level singleton. Entries expire exactly `ttl` after `set`,
//! expired entries are never returned, and a re-`set` re-arms the TTL.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use gnomon_calendar::records::{PostRecord, SyncedEventRecord};
use tokio::sync::Mutex;

use crate::error::ClientResult;
use crate::source::{PostSource, SyncedEventSource};

struct Entry<V> {
    value: V,
    /// `None` means the deadline overflowed; such entries never expire.
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// In-memory cache with per-entry time-to-live and lazy expiry.
pub struct TtlCache<K, V> {
    entries: HashMap<K, Entry<V>>,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the live value for `key`, dropping it first if expired.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        self.get_at(key, Instant::now())
    }

    /// Stores `value` under `key`, expiring `ttl` from now.
    pub fn set(&mut self, key: K, value: V, ttl: Duration) {
        self.set_at(key, value, ttl, Instant::now());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Eagerly drops every expired entry.
    pub fn purge_expired(&mut self) {
        self.purge_expired_at(Instant::now());
    }

    /// Number of stored entries, expired-but-unpurged ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clock-injected variant of [`Self::get`].
    pub fn get_at(&mut self, key: &K, now: Instant) -> Option<&V> {
        if self.entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            self.entries.remove(key);
        }
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Clock-injected variant of [`Self::set`].
    pub fn set_at(&mut self, key: K, value: V, ttl: Duration, now: Instant) {
        self.entries.insert(
            key,
            Entry {
                value,
                expires_at: now.checked_add(ttl),
            },
        );
    }

    /// Clock-injected variant of [`Self::purge_expired`].
    pub fn purge_expired_at(&mut self, now: Instant) {
        self.entries.retain(|_, entry| !entry.is_expired(now));
    }
}

impl<K: Eq + Hash, V> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Key for one cached upstream fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Posts { limit: u32 },
    SyncedEvents,
}

#[derive(Debug, Clone)]
enum CachedPayload {
    Posts(Vec<PostRecord>),
    Synced(Vec<SyncedEventRecord>),
}

/// Decorator caching raw fetch results over any inner source pair.
///
/// Only successful fetches are cached; errors pass through uncached.
/// Clones share one cache, so a single decorated client can serve as
/// both sources.
#[derive(Clone)]
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    cache: Arc<Mutex<TtlCache<CacheKey, CachedPayload>>>,
}

impl<S> CachedSource<S> {
    #[must_use]
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: Arc::new(Mutex::new(TtlCache::new())),
        }
    }

    pub async fn clear(&self) {
        self.cache.lock().await.clear();
    }
}

impl<S: PostSource> PostSource for CachedSource<S> {
    async fn list_posts(&self, limit: u32) -> ClientResult<Vec<PostRecord>> {
        let key = CacheKey::Posts { limit };
        {
            let mut cache = self.cache.lock().await;
            if let Some(CachedPayload::Posts(records)) = cache.get(&key) {
                tracing::debug!(limit, "Post fetch served from cache");
                return Ok(records.clone());
            }
        }
        let records = self.inner.list_posts(limit).await?;
        self.cache
            .lock()
            .await
            .set(key, CachedPayload::Posts(records.clone()), self.ttl);
        Ok(records)
    }
}

impl<S: SyncedEventSource> SyncedEventSource for CachedSource<S> {
    async fn list_synced_events(&self) -> ClientResult<Vec<SyncedEventRecord>> {
        let key = CacheKey::SyncedEvents;
        {
            let mut cache = self.cache.lock().await;
            if let Some(CachedPayload::Synced(records)) = cache.get(&key) {
                tracing::debug!("Synced event fetch served from cache");
                return Ok(records.clone());
            }
        }
        let records = self.inner.list_synced_events().await?;
        self.cache
            .lock()
            .await
            .set(key, CachedPayload::Synced(records.clone()), self.ttl);
        Ok(records)
    }
}
