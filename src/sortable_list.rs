use std::fmt;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};

use crate::direction::SortDirection;
use crate::error::SortError;
use crate::ordering::apply_ordering;
use crate::ordering_cache::OrderingCache;
use crate::sort_key::sort_key_of;
use crate::sort_state::SortState;

/// Event emitted after every visible-contents replacement (a sort or a
/// clear), carrying a JSON-encoded [`SortDescriptor`] payload.
pub const RESET_EVENT: &str = "reset";

/// The sort applied to a list right now: which field, which direction, or no
/// field at all when the list shows its original order. This is also the
/// payload of [`RESET_EVENT`] notifications.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDescriptor {
    pub field: Option<String>,
    pub direction: SortDirection,
}

/// An observable, sortable collection of records.
///
/// The list keeps two orderings of the same records: the visible contents,
/// and the original snapshot as last reported by the host. Sorting by a
/// field name reorders the visible contents from the snapshot; repeating the
/// same field toggles the direction; clearing the sort restores the snapshot
/// order. Ordering functions are memoized per (field, direction) so repeated
/// sorts pay the construction cost once.
///
/// # Example
///
/// ```ignore
/// use serde::Serialize;
/// use sortable_rust::SortableList;
///
/// #[derive(Clone, Serialize)]
/// struct Track { title: String, plays: u32 }
///
/// let mut list = SortableList::from_vec(tracks);
///
/// list.on("reset", |payload| {
///     println!("refresh the view: {}", payload);
/// });
///
/// list.sort_by("plays")?; // ascending
/// list.sort_by("plays")?; // descending
/// list.clear_sort();      // original order again
/// ```
pub struct SortableList<T> {
    items: Vec<T>,
    original: Vec<T>,
    state: SortState,
    cache: OrderingCache<T>,
    #[cfg(feature = "emitter")]
    event_emitter: EventEmitter,
}

impl<T> SortableList<T>
where
    T: Serialize + Clone + 'static,
{
    pub fn new() -> Self {
        Self::with_cache(Vec::new(), OrderingCache::new())
    }

    /// Seed the list with records; the snapshot and the visible contents
    /// start equal.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::with_cache(items, OrderingCache::new())
    }

    /// Seed the list with records and a shared ordering cache, so several
    /// lists over the same record type reuse each other's built orderings.
    pub fn with_cache(items: Vec<T>, cache: OrderingCache<T>) -> Self {
        SortableList {
            original: items.clone(),
            items,
            state: SortState::new(),
            cache,
            #[cfg(feature = "emitter")]
            event_emitter: EventEmitter::new(),
        }
    }

    /// The visible contents, in their current order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The field the list is currently sorted by, if any.
    pub fn sort_field(&self) -> Option<&str> {
        self.state.field()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.state.direction()
    }

    pub fn is_sorted(&self) -> bool {
        self.state.field().is_some()
    }

    pub fn supports_sorting(&self) -> bool {
        true
    }

    pub fn descriptor(&self) -> SortDescriptor {
        SortDescriptor {
            field: self.state.field().map(str::to_string),
            direction: self.state.direction(),
        }
    }

    pub fn cache(&self) -> &OrderingCache<T> {
        &self.cache
    }

    /// Sort the visible contents by `field`.
    ///
    /// The first request for a field sorts ascending; repeating the same
    /// field toggles the direction; switching to a different field restarts
    /// at ascending. Returns the direction that was used. On error nothing
    /// changes: not the contents, not the snapshot, not the sort state.
    pub fn sort_by(&mut self, field: &str) -> Result<SortDirection, SortError> {
        let direction = self.state.next_direction(field);
        self.sort_by_direction(field, direction)
    }

    /// Sort the visible contents by `field` in an explicit direction,
    /// bypassing the toggle. The next `sort_by` on the same field toggles
    /// from the direction used here.
    pub fn sort_by_direction(
        &mut self,
        field: &str,
        direction: SortDirection,
    ) -> Result<SortDirection, SortError> {
        if field.is_empty() {
            return Err(SortError::FieldNotFound(String::new()));
        }

        // Resolve the field accessor against a live record before touching
        // the cache or the state, so a bad name aborts with nothing changed.
        // An empty list has nothing to resolve against and sorts trivially.
        if let Some(first) = self.original.first() {
            sort_key_of(first, field)?;
        }

        let ordering = self.cache.get_or_build(field, direction)?;
        let sorted = apply_ordering(&ordering, &self.original)?;

        self.items = sorted;
        self.state.set(field, direction);
        self.emit_reset();

        Ok(direction)
    }

    /// Restore the visible contents to the snapshot order and forget the
    /// active sort.
    pub fn clear_sort(&mut self) {
        self.state.clear();
        self.items = self.original.clone();
        self.emit_reset();
    }

    /// Tell the list its contents were edited by the host.
    ///
    /// The current visible contents become the new snapshot, whatever sort
    /// produced them. The sort state is left alone: the next request for the
    /// same field keeps toggling from the direction last used.
    pub fn on_host_mutation(&mut self) {
        self.original = self.items.clone();
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.on_host_mutation();
    }

    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
        self.on_host_mutation();
    }

    pub fn remove(&mut self, index: usize) -> T {
        let item = self.items.remove(index);
        self.on_host_mutation();
        item
    }

    /// Replace the contents wholesale; the new records become both the
    /// visible contents and the snapshot.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.on_host_mutation();
    }

    /// Register a host listener. After every sort or clear the list emits
    /// [`RESET_EVENT`] with a JSON [`SortDescriptor`] payload.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    #[cfg(feature = "emitter")]
    fn emit_reset(&mut self) {
        let payload =
            serde_json::to_string(&self.descriptor()).unwrap_or_else(|_| String::from("{}"));
        self.event_emitter.emit(RESET_EVENT, payload);
    }

    #[cfg(not(feature = "emitter"))]
    fn emit_reset(&mut self) {}
}

impl<T> Default for SortableList<T>
where
    T: Serialize + Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SortableList<T>
where
    T: Serialize + Clone + 'static,
{
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for SortableList<T>
where
    T: Serialize + Clone + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Clone for SortableList<T>
where
    T: Serialize + Clone + 'static,
{
    fn clone(&self) -> Self {
        SortableList {
            items: self.items.clone(),
            original: self.original.clone(),
            state: self.state.clone(),
            // The built orderings are shared; listeners are not transferable,
            // so the clone starts with a fresh emitter.
            cache: self.cache.clone(),
            #[cfg(feature = "emitter")]
            event_emitter: EventEmitter::new(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableList")
            .field("items", &self.items)
            .field("original", &self.original)
            .field("state", &self.state)
            .finish()
    }
}
