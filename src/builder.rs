//! Builder for [`UniqueIndexedList`].
//!
//! Collects the construction knobs (initial capacity, hasher) in one place.
//!
//! ## Example
//!
//! ```rust
//! use std::hash::RandomState;
//!
//! use unique_deque::builder::UniqueListBuilder;
//!
//! let mut list = UniqueListBuilder::new()
//!     .capacity(128)
//!     .hasher(RandomState::new())
//!     .build::<u64>();
//! list.add_last(1);
//! assert!(list.capacity() >= 128);
//! ```

use rustc_hash::FxBuildHasher;

use crate::ds::UniqueIndexedList;

/// Configures and creates a [`UniqueIndexedList`].
#[derive(Debug, Clone)]
pub struct UniqueListBuilder<S = FxBuildHasher> {
    capacity: usize,
    hasher: S,
}

impl UniqueListBuilder {
    /// Starts from zero capacity and the default hasher.
    pub fn new() -> Self {
        Self {
            capacity: 0,
            hasher: FxBuildHasher,
        }
    }
}

impl Default for UniqueListBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> UniqueListBuilder<S> {
    /// Number of entries to allocate up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replaces the hasher used by the value index.
    pub fn hasher<S2>(self, hasher: S2) -> UniqueListBuilder<S2> {
        UniqueListBuilder {
            capacity: self.capacity,
            hasher,
        }
    }

    pub fn build<T>(self) -> UniqueIndexedList<T, S> {
        UniqueIndexedList::with_capacity_and_hasher(self.capacity, self.hasher)
    }
}
