//! unique-deque: a doubly linked list of distinct values with an O(1) index.
//!
//! [`UniqueIndexedList`](ds::UniqueIndexedList) supports insertion and removal
//! at both ends, membership lookup, removal by value and O(1)
//! move-to-front/move-to-tail. It is a building block for recency-ordered
//! structures such as an LRU core; it enforces no capacity and evicts nothing.
//!
//! ```
//! use unique_deque::prelude::*;
//!
//! let mut recency: UniqueIndexedList<&str> = UniqueListBuilder::new().capacity(3).build();
//! recency.add_first("a");
//! recency.add_first("b");
//! recency.add_first("c");
//!
//! // "a" was used again
//! recency.move_to_front(&"a");
//! assert_eq!(recency.remove_last(), Some("b"));
//! ```

pub mod builder;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
