//! Query cache for fetched notes data.
//!
//! An explicit key -> (data, timestamp) map with caller-supplied
//! invalidation. One entry per list page, one per note id. Entries stay
//! usable after they go stale; freshness only decides whether a read
//! must be followed by a refetch.
//!
//! `dehydrate`/`hydrate` turn the cache into a serializable snapshot so
//! prefetched entries survive a handoff across process boundaries.

use chrono::{DateTime, Duration, Utc};
use jotter_core::{ListKey, Note, NoteId, NotePage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryKey {
    List(ListKey),
    Note(NoteId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CachedValue {
    Page(NotePage),
    Note(Note),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub value: CachedValue,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>, max_age_secs: u64) -> bool {
        now.signed_duration_since(self.fetched_at) <= Duration::seconds(max_age_secs as i64)
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Read an entry only if it is still within the freshness window.
    pub fn get_fresh(
        &self,
        key: &QueryKey,
        now: DateTime<Utc>,
        max_age_secs: u64,
    ) -> Option<&CacheEntry> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, max_age_secs))
    }

    pub fn insert_page(&mut self, key: ListKey, page: NotePage, now: DateTime<Utc>) {
        self.entries.insert(
            QueryKey::List(key),
            CacheEntry {
                value: CachedValue::Page(page),
                fetched_at: now,
            },
        );
    }

    pub fn insert_note(&mut self, note: Note, now: DateTime<Utc>) {
        self.entries.insert(
            QueryKey::Note(note.id),
            CacheEntry {
                value: CachedValue::Note(note),
                fetched_at: now,
            },
        );
    }

    pub fn remove(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    /// Drop every list entry regardless of key. Note entries survive.
    /// Called after a successful creation so the next list read
    /// refetches.
    pub fn invalidate_lists(&mut self) {
        self.entries
            .retain(|key, _| !matches!(key, QueryKey::List(_)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the cache into a portable snapshot.
    pub fn dehydrate(&self) -> CacheSnapshot {
        CacheSnapshot {
            entries: self
                .entries
                .iter()
                .map(|(key, entry)| (key.clone(), entry.clone()))
                .collect(),
        }
    }

    /// Rebuild a cache from a snapshot.
    pub fn hydrate(snapshot: CacheSnapshot) -> Self {
        Self {
            entries: snapshot.entries.into_iter().collect(),
        }
    }
}

/// Portable form of the cache. Entries are a pair list rather than a
/// map so the snapshot serializes to JSON (structured keys cannot be
/// JSON object keys).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheSnapshot {
    pub entries: Vec<(QueryKey, CacheEntry)>,
}
