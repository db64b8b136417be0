use dashmap::DashMap;
use tokio::time::{Duration, Instant};

pub const DEFAULT_MAX_ENTRIES: usize = 256;

/// Internal cache entry with its expiry instant
struct Entry<T> {
    payload: T,
    expires_at: Instant,
}

/// Bounded key/value cache where every entry carries a time-to-live.
///
/// Staleness up to the ttl is acceptable: entries are a latency/cost
/// optimization over upstream reads, never a correctness mechanism.
/// Concurrent misses on one key may both fetch and overwrite — tolerated
/// for the same reason. The map itself is safe for concurrent use.
pub struct TtlCache<T> {
    entries: DashMap<String, Entry<T>>,
    max_entries: usize,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
        }
    }

    /// Live payload for `key`, if any. An expired entry counts as absent
    /// and is dropped on the way out.
    pub fn get(&self, key: &str) -> Option<T> {
        let now = Instant::now();
        let expired = match self.entries.get(key) {
            Some(entry) => {
                if now < entry.expires_at {
                    return Some(entry.payload.clone());
                }
                true
            }
            None => false,
        };

        if expired {
            self.entries.remove_if(key, |_, e| now >= e.expires_at);
        }
        None
    }

    /// Store `payload` under `key` until now + `ttl`, overwriting any
    /// prior entry.
    pub fn insert(&self, key: String, payload: T, ttl: Duration) {
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            self.evict_one();
        }
        self.entries.insert(
            key,
            Entry {
                payload,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Drop expired entries; if that frees nothing, drop the entry
    /// closest to expiry so the map never outgrows `max_entries`.
    fn evict_one(&self) {
        let now = Instant::now();
        self.entries.retain(|_, e| now < e.expires_at);
        if self.entries.len() < self.max_entries {
            return;
        }

        let closest = self
            .entries
            .iter()
            .min_by_key(|e| e.value().expires_at)
            .map(|e| e.key().clone());
        if let Some(key) = closest {
            self.entries.remove(&key);
        }
    }

    /// Reset to empty. Defined teardown for tests and process shutdown.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
