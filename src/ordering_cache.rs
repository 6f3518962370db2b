use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::direction::SortDirection;
use crate::error::SortError;
use crate::ordering::{build_ordering, OrderingFn};

struct CacheInner<T> {
    entries: HashMap<(String, SortDirection), OrderingFn<T>>,
    builds: usize,
}

/// Memoizes ordering functions by (field name, direction) for one record
/// type. Entries are built lazily on first use and never evicted.
///
/// Cloning the cache produces a handle onto the same entries, so several
/// lists over the same record type can share the functions they build:
///
/// ```ignore
/// let cache = OrderingCache::new();
/// let mut recent = SortableList::with_cache(recent_tracks, cache.clone());
/// let mut starred = SortableList::with_cache(starred_tracks, cache);
/// ```
pub struct OrderingCache<T> {
    inner: Arc<RwLock<CacheInner<T>>>,
}

impl<T> Clone for OrderingCache<T> {
    fn clone(&self) -> Self {
        OrderingCache {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> OrderingCache<T>
where
    T: Serialize + Clone + 'static,
{
    pub fn new() -> Self {
        OrderingCache {
            inner: Arc::new(RwLock::new(CacheInner {
                entries: HashMap::new(),
                builds: 0,
            })),
        }
    }

    /// Return the ordering function for (field, direction), building and
    /// memoizing it on first request.
    pub fn get_or_build(
        &self,
        field: &str,
        direction: SortDirection,
    ) -> Result<OrderingFn<T>, SortError> {
        {
            let inner = self
                .inner
                .read()
                .map_err(|_| SortError::LockPoisoned("read"))?;
            if let Some(ordering) = inner.entries.get(&(field.to_string(), direction)) {
                return Ok(Arc::clone(ordering));
            }
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| SortError::LockPoisoned("write"))?;

        // Another handle may have built the entry between the two locks.
        if let Some(ordering) = inner.entries.get(&(field.to_string(), direction)) {
            return Ok(Arc::clone(ordering));
        }

        let ordering = build_ordering(field, direction);
        inner.builds += 1;
        inner
            .entries
            .insert((field.to_string(), direction), Arc::clone(&ordering));
        Ok(ordering)
    }

    /// Number of (field, direction) entries built so far.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times an ordering function was actually constructed. Stays
    /// flat across cache hits.
    pub fn builds(&self) -> usize {
        self.inner.read().map(|inner| inner.builds).unwrap_or(0)
    }
}

impl<T> Default for OrderingCache<T>
where
    T: Serialize + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Clone, Serialize)]
    struct Track {
        title: String,
    }

    #[test]
    fn new() {
        let cache: OrderingCache<Track> = OrderingCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.builds(), 0);
    }

    #[test]
    fn builds_once_per_key() {
        let cache: OrderingCache<Track> = OrderingCache::new();

        let first = cache
            .get_or_build("title", SortDirection::Ascending)
            .unwrap();
        let second = cache
            .get_or_build("title", SortDirection::Ascending)
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.builds(), 1);
    }

    #[test]
    fn directions_are_distinct_entries() {
        let cache: OrderingCache<Track> = OrderingCache::new();

        cache
            .get_or_build("title", SortDirection::Ascending)
            .unwrap();
        cache
            .get_or_build("title", SortDirection::Descending)
            .unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.builds(), 2);
    }

    #[test]
    fn clones_share_entries() {
        let cache: OrderingCache<Track> = OrderingCache::new();
        let shared = cache.clone();

        cache
            .get_or_build("title", SortDirection::Ascending)
            .unwrap();
        shared
            .get_or_build("title", SortDirection::Ascending)
            .unwrap();

        assert_eq!(cache.builds(), 1);
        assert_eq!(shared.len(), 1);
    }
}
