use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;
use tubegate_domain::{SearchCacheKey, SearchPage, VideoItem};

/// Default freshness window: one hour.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(3600);

/// A cached upstream response and the instant it was fetched.
///
/// Entries are never mutated; a refresh replaces the whole entry. Cache
/// hits share the payload through an `Arc`.
#[derive(Debug)]
pub struct CacheEntry<T> {
    payload: Arc<T>,
    fetched_at: Instant,
}

impl<T> Clone for CacheEntry<T> {
    fn clone(&self) -> Self {
        Self {
            payload: Arc::clone(&self.payload),
            fetched_at: self.fetched_at,
        }
    }
}

impl<T> CacheEntry<T> {
    /// Creates an entry stamped with the current instant.
    pub fn new(payload: T) -> Self {
        Self::with_timestamp(payload, Instant::now())
    }

    pub fn with_timestamp(payload: T, fetched_at: Instant) -> Self {
        Self {
            payload: Arc::new(payload),
            fetched_at,
        }
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn shared(&self) -> Arc<T> {
        Arc::clone(&self.payload)
    }

    pub fn timestamp(&self) -> Instant {
        self.fetched_at
    }

    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.fetched_at)
    }

    /// `now - fetched_at < window`. An entry exactly `window` old is stale.
    pub fn is_fresh_at(&self, now: Instant, window: Duration) -> bool {
        self.age_at(now) < window
    }
}

/// Number of entries dropped by a full clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearedEntries {
    pub trending: usize,
    pub search: usize,
}

impl ClearedEntries {
    pub fn total(&self) -> usize {
        self.trending + self.search
    }
}

/// Point-in-time view of what the cache holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub trending_cached: bool,
    pub search_entries: usize,
}

#[derive(Default)]
struct CacheState {
    trending: Option<CacheEntry<Vec<VideoItem>>>,
    search: HashMap<SearchCacheKey, CacheEntry<SearchPage>>,
}

/// In-memory store for the trending slot and the search page map.
///
/// Both live behind one lock so `clear_all` is observed either entirely
/// before or entirely after any read or write. The map has no size bound;
/// the cache janitor wipes it periodically.
pub struct VideoCache {
    state: RwLock<CacheState>,
    freshness: Duration,
}

impl VideoCache {
    pub fn new(freshness: Duration) -> Self {
        Self {
            state: RwLock::new(CacheState::default()),
            freshness,
        }
    }

    pub async fn read_trending(&self) -> Option<CacheEntry<Vec<VideoItem>>> {
        self.state.read().await.trending.clone()
    }

    /// The trending entry, if present and still fresh.
    pub async fn fresh_trending(&self) -> Option<CacheEntry<Vec<VideoItem>>> {
        let now = Instant::now();
        self.read_trending()
            .await
            .filter(|entry| entry.is_fresh_at(now, self.freshness))
    }

    pub async fn write_trending(&self, entry: CacheEntry<Vec<VideoItem>>) {
        self.state.write().await.trending = Some(entry);
    }

    pub async fn read_search(&self, key: &SearchCacheKey) -> Option<CacheEntry<SearchPage>> {
        self.state.read().await.search.get(key).cloned()
    }

    /// The search entry at `key`, if present and still fresh.
    pub async fn fresh_search(&self, key: &SearchCacheKey) -> Option<CacheEntry<SearchPage>> {
        let now = Instant::now();
        self.read_search(key)
            .await
            .filter(|entry| entry.is_fresh_at(now, self.freshness))
    }

    pub async fn write_search(&self, key: SearchCacheKey, entry: CacheEntry<SearchPage>) {
        self.state.write().await.search.insert(key, entry);
    }

    /// Drops the trending slot and every search page in one step.
    pub async fn clear_all(&self) -> ClearedEntries {
        let mut state = self.state.write().await;
        let cleared = ClearedEntries {
            trending: usize::from(state.trending.take().is_some()),
            search: state.search.len(),
        };
        state.search.clear();
        drop(state);

        debug!(
            trending = cleared.trending,
            search = cleared.search,
            "Video cache cleared"
        );
        cleared
    }

    pub async fn stats(&self) -> CacheStats {
        let state = self.state.read().await;
        CacheStats {
            trending_cached: state.trending.is_some(),
            search_entries: state.search.len(),
        }
    }

    pub async fn len(&self) -> usize {
        let state = self.state.read().await;
        usize::from(state.trending.is_some()) + state.search.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for VideoCache {
    fn default() -> Self {
        Self::new(DEFAULT_FRESHNESS)
    }
}
