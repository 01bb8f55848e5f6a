use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::model::PriceSnapshot;

struct CacheEntry {
    snapshot: PriceSnapshot,
    fetched_at: Instant,
}

/// Last-good snapshots keyed by upstream endpoint pair.
///
/// Staleness policy: an entry is fresh for one poll interval after it was
/// stored, and while fresh it short-circuits the next poll's refetch. Once
/// stale it is served at most once, as explicitly-marked fallback data when
/// a poll fails, and is then evicted via `invalidate` so the following poll
/// refetches unconditionally.
pub struct SnapshotCache {
    ttl: Duration,
    entries: HashMap<String, CacheEntry>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// The cached snapshot, only while younger than the ttl.
    pub fn fresh(&self, key: &str) -> Option<&PriceSnapshot> {
        let entry = self.entries.get(key)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(&entry.snapshot)
        } else {
            None
        }
    }

    /// The cached snapshot regardless of age, with its age.
    pub fn last_good(&self, key: &str) -> Option<(&PriceSnapshot, Duration)> {
        let entry = self.entries.get(key)?;
        Some((&entry.snapshot, entry.fetched_at.elapsed()))
    }

    pub fn insert(&mut self, key: String, snapshot: PriceSnapshot) {
        self.entries.insert(
            key,
            CacheEntry {
                snapshot,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
