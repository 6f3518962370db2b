mod direction;
mod error;
mod ordering;
mod ordering_cache;
mod sort_key;
mod sort_state;
mod sortable_list;

pub use direction::SortDirection;
pub use error::SortError;
pub use ordering::{apply_ordering, build_ordering, OrderingFn};
pub use ordering_cache::OrderingCache;
pub use sort_key::{sort_key_of, SortKey};
pub use sort_state::SortState;
pub use sortable_list::{SortDescriptor, SortableList, RESET_EVENT};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
