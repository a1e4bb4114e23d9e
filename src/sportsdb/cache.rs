//! In-memory response cache with per-entry expiry.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

/// A cached response body and its expiry window.
#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    fetched_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_fresh(&self) -> bool {
        self.fetched_at.elapsed() < self.ttl
    }
}

/// Response cache keyed by endpoint path.
///
/// Each instance is independent state owned by whoever constructs it; there
/// is no shared or process-wide cache. Entries carry their own time-to-live,
/// so one cache can hold slow-moving team data next to fast-moving scores.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<String, CacheEntry>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a fresh body for an endpoint. A stale entry is evicted and
    /// reads as a miss.
    pub fn get(&mut self, endpoint: &str) -> Option<String> {
        match self.entries.get(endpoint) {
            Some(entry) if entry.is_fresh() => {
                debug!("Serving {} from cache", endpoint);
                Some(entry.body.clone())
            }
            Some(_) => {
                self.entries.remove(endpoint);
                debug!("Cache expired for {}", endpoint);
                None
            }
            None => None,
        }
    }

    /// Store a response body under an endpoint key.
    pub fn insert(&mut self, endpoint: impl Into<String>, body: impl Into<String>, ttl: Duration) {
        self.entries.insert(
            endpoint.into(),
            CacheEntry {
                body: body.into(),
                fetched_at: Instant::now(),
                ttl,
            },
        );
    }

    /// Drop every expired entry, returning how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_fresh());
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(86400);

    #[test]
    fn test_fresh_entry_is_served() {
        let mut cache = ResponseCache::new();
        cache.insert("lookupteam.php?id=1", r#"{"teams":[]}"#, DAY);

        assert_eq!(
            cache.get("lookupteam.php?id=1").as_deref(),
            Some(r#"{"teams":[]}"#)
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss_on_unknown_endpoint() {
        let mut cache = ResponseCache::new();
        assert_eq!(cache.get("lookupteam.php?id=1"), None);
    }

    #[test]
    fn test_zero_ttl_entry_reads_as_stale_and_is_evicted() {
        let mut cache = ResponseCache::new();
        cache.insert("eventslast.php?id=1", "{}", Duration::ZERO);

        assert_eq!(cache.get("eventslast.php?id=1"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_replaces_previous_body() {
        let mut cache = ResponseCache::new();
        cache.insert("search_all_teams.php?l=NBA", "old", DAY);
        cache.insert("search_all_teams.php?l=NBA", "new", DAY);

        assert_eq!(cache.get("search_all_teams.php?l=NBA").as_deref(), Some("new"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_purge_expired_keeps_fresh_entries() {
        let mut cache = ResponseCache::new();
        cache.insert("a", "1", Duration::ZERO);
        cache.insert("b", "2", Duration::ZERO);
        cache.insert("c", "3", DAY);

        assert_eq!(cache.purge_expired(), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("c").as_deref(), Some("3"));
    }

    #[test]
    fn test_entries_are_keyed_per_endpoint() {
        let mut cache = ResponseCache::new();
        cache.insert("eventslast.php?id=1", "one", DAY);
        cache.insert("eventslast.php?id=2", "two", DAY);

        assert_eq!(cache.get("eventslast.php?id=1").as_deref(), Some("one"));
        assert_eq!(cache.get("eventslast.php?id=2").as_deref(), Some("two"));
    }
}
