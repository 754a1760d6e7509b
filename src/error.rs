//! Error types for the unique-deque library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned by
//!   [`UniqueIndexedList::check_invariants`](crate::ds::UniqueIndexedList::check_invariants)
//!   when the chain and the index disagree.
//! - [`DuplicateValue`]: Returned by the strict insertion methods
//!   ([`try_add_first`](crate::ds::UniqueIndexedList::try_add_first),
//!   [`try_add_last`](crate::ds::UniqueIndexedList::try_add_last)) and carries
//!   the rejected value back to the caller.
//!
//! ## Example Usage
//!
//! ```
//! use unique_deque::ds::UniqueIndexedList;
//!
//! let mut list = UniqueIndexedList::new();
//! list.add_last("a");
//!
//! let err = list.try_add_first("a").unwrap_err();
//! assert_eq!(err.into_inner(), "a");
//! assert_eq!(list.len(), 1);
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when the list's chain and index are out of sync.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// DuplicateValue
// ---------------------------------------------------------------------------

/// Error returned when a strict insertion finds an equal value already linked.
///
/// The list is left untouched; the rejected value is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateValue<T>(pub T);

impl<T> DuplicateValue<T> {
    /// Returns the value that was rejected.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for DuplicateValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value is already present in the list")
    }
}

impl<T: fmt::Debug> std::error::Error for DuplicateValue<T> {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index length mismatch");
        assert_eq!(err.to_string(), "index length mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn invariant_clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- DuplicateValue ---------------------------------------------------

    #[test]
    fn duplicate_display_is_fixed() {
        let err = DuplicateValue(42);
        assert_eq!(err.to_string(), "value is already present in the list");
    }

    #[test]
    fn duplicate_returns_value() {
        let err = DuplicateValue(String::from("k"));
        assert_eq!(err.into_inner(), "k");
    }

    #[test]
    fn duplicate_debug_includes_value() {
        let dbg = format!("{:?}", DuplicateValue("payload"));
        assert!(dbg.contains("payload"));
    }

    #[test]
    fn duplicate_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<DuplicateValue<u32>>();
    }
}
