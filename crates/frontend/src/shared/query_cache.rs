//! Keyed response cache with prefix invalidation.
//!
//! Keys are ordered segments, collection first (`feed-categories/list/1/20/`).
//! Mutations invalidate by prefix so unrelated collections are never touched.
//! The cache is handed to components through context as [`SharedQueryCache`].

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

/// Default staleness window.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(60);
/// Static option lists never go stale within a session.
pub const FOREVER: Duration = Duration::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(collection: &str) -> Self {
        Self(vec![collection.to_string()])
    }

    pub fn with(mut self, segment: impl ToString) -> Self {
        self.0.push(segment.to_string());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Segment-wise prefix test: `feed-category` is not a prefix of `feed-categories`.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        prefix.0.len() <= self.0.len() && self.0.iter().zip(&prefix.0).all(|(a, b)| a == b)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

pub type CachedValue = Arc<dyn Any + Send + Sync>;

pub trait QueryCache: Send + Sync {
    /// Fresh entry for `key`; expired entries are treated as absent.
    fn get(&self, key: &QueryKey) -> Option<CachedValue>;
    fn set(&self, key: QueryKey, value: CachedValue, ttl: Duration);
    /// Drops every entry under `prefix`, returning how many were removed.
    fn invalidate(&self, prefix: &QueryKey) -> usize;
}

pub type SharedQueryCache = Arc<dyn QueryCache>;

type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

struct Entry {
    value: CachedValue,
    /// `None` never expires.
    expires_at: Option<DateTime<Utc>>,
}

pub struct MemoryQueryCache {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    clock: Clock,
}

impl Default for MemoryQueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryQueryCache {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock: Box::new(clock),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QueryCache for MemoryQueryCache {
    fn get(&self, key: &QueryKey) -> Option<CachedValue> {
        let now = (self.clock)();
        let mut entries = self.entries();
        let fresh = match entries.get(key) {
            None => return None,
            Some(entry) => entry.expires_at.map_or(true, |at| now < at),
        };
        if fresh {
            entries.get(key).map(|entry| entry.value.clone())
        } else {
            entries.remove(key);
            None
        }
    }

    fn set(&self, key: QueryKey, value: CachedValue, ttl: Duration) {
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| (self.clock)().checked_add_signed(ttl));
        self.entries().insert(key, Entry { value, expires_at });
    }

    fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();
        log::debug!("cache invalidate {} ({} entries)", prefix, removed);
        removed
    }
}

/// Typed read.
pub fn read<T: Clone + 'static>(cache: &dyn QueryCache, key: &QueryKey) -> Option<T> {
    cache.get(key).and_then(|value| value.downcast_ref::<T>().cloned())
}

/// Typed write.
pub fn write<T: Send + Sync + 'static>(cache: &dyn QueryCache, key: QueryKey, value: T, ttl: Duration) {
    cache.set(key, Arc::new(value), ttl);
}

/// Returns the fresh cached value for `key` or runs `fetch` and caches a success.
pub async fn cached<T, E, F, Fut>(
    cache: &dyn QueryCache,
    key: QueryKey,
    ttl: Duration,
    fetch: F,
) -> Result<T, E>
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(hit) = read::<T>(cache, &key) {
        return Ok(hit);
    }
    let value = fetch().await?;
    write(cache, key, value.clone(), ttl);
    Ok(value)
}

pub fn use_query_cache() -> SharedQueryCache {
    use_context::<SharedQueryCache>().expect("QueryCache not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    fn list_key(collection: &str, page: usize) -> QueryKey {
        QueryKey::new(collection).with("list").with(page)
    }

    fn cache_with_manual_clock() -> (MemoryQueryCache, Arc<AtomicI64>) {
        let offset = Arc::new(AtomicI64::new(0));
        let start = DateTime::parse_from_rfc3339("2024-05-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let seconds = offset.clone();
        let cache = MemoryQueryCache::with_clock(move || {
            start + chrono::Duration::seconds(seconds.load(Ordering::SeqCst))
        });
        (cache, offset)
    }

    #[test]
    fn test_key_prefix_is_segment_wise() {
        let key = list_key("feed-categories", 2);
        assert!(key.starts_with(&QueryKey::new("feed-categories")));
        assert!(key.starts_with(&QueryKey::new("feed-categories").with("list")));
        assert!(!key.starts_with(&QueryKey::new("feed-category")));
        assert!(!QueryKey::new("feed-categories").starts_with(&key));
        assert_eq!(key.to_string(), "feed-categories/list/2");
    }

    #[test]
    fn test_invalidate_only_touches_prefix() {
        let cache = MemoryQueryCache::new();
        write(&cache, list_key("feed-categories", 1), vec![1u32], DEFAULT_STALE_TIME);
        write(&cache, list_key("feed-categories", 2), vec![2u32], DEFAULT_STALE_TIME);
        write(&cache, list_key("feed-types", 1), vec![3u32], DEFAULT_STALE_TIME);

        assert_eq!(cache.invalidate(&QueryKey::new("feed-categories")), 2);
        assert_eq!(read::<Vec<u32>>(&cache, &list_key("feed-categories", 1)), None);
        assert_eq!(read::<Vec<u32>>(&cache, &list_key("feed-types", 1)), Some(vec![3]));
    }

    #[test]
    fn test_entries_expire_after_ttl() {
        let (cache, clock) = cache_with_manual_clock();
        let key = list_key("families", 1);
        write(&cache, key.clone(), "fresh".to_string(), DEFAULT_STALE_TIME);

        clock.store(59, Ordering::SeqCst);
        assert_eq!(read::<String>(&cache, &key).as_deref(), Some("fresh"));

        clock.store(60, Ordering::SeqCst);
        assert_eq!(read::<String>(&cache, &key), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_forever_never_expires() {
        let (cache, clock) = cache_with_manual_clock();
        let key = QueryKey::new("options").with("animal-gender");
        write(&cache, key.clone(), 7u8, FOREVER);
        clock.store(10 * 365 * 24 * 3600, Ordering::SeqCst);
        assert_eq!(read::<u8>(&cache, &key), Some(7));
    }

    #[test]
    fn test_read_with_wrong_type_misses() {
        let cache = MemoryQueryCache::new();
        let key = QueryKey::new("animals");
        write(&cache, key.clone(), 1u32, DEFAULT_STALE_TIME);
        assert_eq!(read::<String>(&cache, &key), None);
        assert_eq!(read::<u32>(&cache, &key), Some(1));
    }
}
