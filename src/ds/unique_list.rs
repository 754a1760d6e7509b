//! Doubly linked list of distinct values with an O(1) value index.
//!
//! Entries live in a [`SlotArena`] and link to each other by [`SlotId`]; a
//! hash index maps every linked value to the id of its entry. Both views are
//! updated inside the same method call, so the chain and the index never
//! disagree once a public method returns.
//!
//! ## Architecture
//!
//! ```text
//!   index: HashMap<T, SlotId>          arena: SlotArena<Entry<T>>
//!   ┌─────────┬─────────┐              ┌────────┬──────────────────────────────┐
//!   │  "a"    │  id_0   │              │ id_0   │ { "a", prev: None, next: 2 } │
//!   │  "b"    │  id_2   │              │ id_1   │ (free)                       │
//!   │  "c"    │  id_3   │              │ id_2   │ { "b", prev: 0, next: 3 }    │
//!   └─────────┴─────────┘              │ id_3   │ { "c", prev: 2, next: None } │
//!                                      └────────┴──────────────────────────────┘
//!
//!   head ─► [a] ◄──► [b] ◄──► [c] ◄── tail
//! ```
//!
//! ## Operations
//! - `add_first` / `add_last`: link a new entry at an end; an equal value
//!   already present is relinked to that end instead of duplicated
//! - `try_add_first` / `try_add_last`: same, but refuse equal values
//! - `remove_first` / `remove_last` / `remove`: unlink, free the slot and drop
//!   the index mapping
//! - `move_to_front` / `move_to_tail`: detach + attach at the requested end
//!
//! ## Performance
//! - `add_*` / `remove_*` / `move_to_*` / `contains`: O(1) average
//! - `iter`: O(n)
//! - `clear`: O(n) drop, O(1) observable
//!
//! ## Example
//!
//! ```
//! use unique_deque::ds::UniqueIndexedList;
//!
//! let mut list = UniqueIndexedList::new();
//! for v in 1..=4 {
//!     list.add_last(v);
//! }
//! list.move_to_front(&3);
//! list.move_to_tail(&1);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [3, 2, 4, 1]);
//!
//! assert_eq!(list.remove_last(), Some(1));
//! assert!(!list.contains(&1));
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use rustc_hash::FxBuildHasher;

use crate::ds::entry::Entry;
use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::{DuplicateValue, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::UniqueListMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::UniqueListMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    MetricsReset, MetricsSnapshotProvider, UniqueListMetricsReadRecorder,
    UniqueListMetricsRecorder,
};

/// Linked list that keeps each value at most once and finds it in O(1).
///
/// `T` is stored twice: in its entry and as the index key, hence the
/// `Clone` bound on mutating methods. Lookups accept any borrowed form of
/// `T`, so a `UniqueIndexedList<String>` can be queried with `&str`.
///
/// The list performs no locking. Share it across threads only behind the
/// caller's own lock.
pub struct UniqueIndexedList<T, S = FxBuildHasher> {
    arena: SlotArena<Entry<T>>,
    index: HashMap<T, SlotId, S>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    #[cfg(feature = "metrics")]
    metrics: UniqueListMetrics,
}

impl<T> UniqueIndexedList<T> {
    /// Creates an empty list using the default hasher.
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, FxBuildHasher)
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, FxBuildHasher)
    }
}

impl<T, S> UniqueIndexedList<T, S> {
    /// Creates an empty list that hashes values with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty list with room for `capacity` entries, hashing values
    /// with `hasher`.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
            head: None,
            tail: None,
            #[cfg(feature = "metrics")]
            metrics: UniqueListMetrics::default(),
        }
    }

    /// Returns the number of linked values.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if no value is linked.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns how many entries fit without reallocating the entry store.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns the value at the head, or `None` if the list is empty.
    pub fn first(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id).map(|entry| &entry.value))
    }

    /// Returns the value at the tail, or `None` if the list is empty.
    pub fn last(&self) -> Option<&T> {
        self.tail
            .and_then(|id| self.arena.get(id).map(|entry| &entry.value))
    }

    /// Returns an iterator from head to tail. Use `.rev()` for tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.arena.len(),
        }
    }

    /// Drops every entry and index mapping.
    ///
    /// The list is immediately reusable; its allocations are kept.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
        self.arena.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }

    /// Returns a copy of the operation counters.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> UniqueListMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.capacity())
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let entry = self.arena.get(id)?;
            (entry.prev, entry.next)
        };

        if let Some(prev_id) = prev {
            if let Some(prev_entry) = self.arena.get_mut(prev_id) {
                prev_entry.next = next;
            }
        } else {
            self.head = next;
        }

        if let Some(next_id) = next {
            if let Some(next_entry) = self.arena.get_mut(next_id) {
                next_entry.prev = prev;
            }
        } else {
            self.tail = prev;
        }

        if let Some(entry) = self.arena.get_mut(id) {
            entry.unlink();
        }

        Some(())
    }

    fn attach_front(&mut self, id: SlotId) -> Option<()> {
        let old_head = self.head;
        let entry = self.arena.get_mut(id)?;
        entry.prev = None;
        entry.next = old_head;

        if let Some(old_head) = old_head {
            if let Some(head_entry) = self.arena.get_mut(old_head) {
                head_entry.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        Some(())
    }

    fn attach_back(&mut self, id: SlotId) -> Option<()> {
        let old_tail = self.tail;
        let entry = self.arena.get_mut(id)?;
        entry.next = None;
        entry.prev = old_tail;

        if let Some(old_tail) = old_tail {
            if let Some(tail_entry) = self.arena.get_mut(old_tail) {
                tail_entry.next = Some(id);
            }
        } else {
            self.head = Some(id);
        }
        self.tail = Some(id);
        Some(())
    }

    /// Returns `false` if `id` already was the head.
    fn relink_front(&mut self, id: SlotId) -> bool {
        if self.head == Some(id) {
            return false;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Returns `false` if `id` already was the tail.
    fn relink_back(&mut self, id: SlotId) -> bool {
        if self.tail == Some(id) {
            return false;
        }
        self.detach(id);
        self.attach_back(id);
        true
    }
}

impl<T, S> UniqueIndexedList<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Returns `true` if a value equal to `value` is linked.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_contains_call();
        let found = self.index.contains_key(value);
        #[cfg(feature = "metrics")]
        if found {
            (&self.metrics).record_contains_hit();
        }
        found
    }

    /// Links `value` at the head.
    ///
    /// Returns `true` if a new entry was created. If an equal value is
    /// already linked, its entry is moved to the head and takes `value`,
    /// the length is unchanged and `false` is returned.
    pub fn add_first(&mut self, value: T) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_add_call();
        if let Some(&id) = self.index.get(&value) {
            #[cfg(feature = "metrics")]
            self.metrics.record_add_relinked();
            self.relink_front(id);
            self.replace_value(id, value);
            return false;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_add_new();
        self.link_new_front(value);
        true
    }

    /// Links `value` at the tail.
    ///
    /// Mirror of [`add_first`](Self::add_first).
    pub fn add_last(&mut self, value: T) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_add_call();
        if let Some(&id) = self.index.get(&value) {
            #[cfg(feature = "metrics")]
            self.metrics.record_add_relinked();
            self.relink_back(id);
            self.replace_value(id, value);
            return false;
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_add_new();
        self.link_new_back(value);
        true
    }

    /// Links `value` at the head unless an equal value is already linked, in
    /// which case the list is untouched and `value` is handed back.
    pub fn try_add_first(&mut self, value: T) -> Result<(), DuplicateValue<T>> {
        #[cfg(feature = "metrics")]
        self.metrics.record_add_call();
        if self.index.contains_key(&value) {
            #[cfg(feature = "metrics")]
            self.metrics.record_add_rejected();
            return Err(DuplicateValue(value));
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_add_new();
        self.link_new_front(value);
        Ok(())
    }

    /// Links `value` at the tail unless an equal value is already linked.
    pub fn try_add_last(&mut self, value: T) -> Result<(), DuplicateValue<T>> {
        #[cfg(feature = "metrics")]
        self.metrics.record_add_call();
        if self.index.contains_key(&value) {
            #[cfg(feature = "metrics")]
            self.metrics.record_add_rejected();
            return Err(DuplicateValue(value));
        }
        #[cfg(feature = "metrics")]
        self.metrics.record_add_new();
        self.link_new_back(value);
        Ok(())
    }

    /// Removes and returns the head value; `None` on an empty list.
    pub fn remove_first(&mut self) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();
        let id = self.head?;
        let value = self.unlink(id)?;
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        Some(value)
    }

    /// Removes and returns the tail value; `None` on an empty list.
    pub fn remove_last(&mut self) -> Option<T> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();
        let id = self.tail?;
        let value = self.unlink(id)?;
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        Some(value)
    }

    /// Removes the entry holding `value` wherever it sits in the chain.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();
        let id = *self.index.get(value)?;
        let removed = self.unlink(id)?;
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();
        Some(removed)
    }

    /// Moves the entry holding `value` to the head.
    ///
    /// Returns `true` if `value` is linked, whether or not it moved. An absent
    /// value or an entry already at the head leaves the list untouched.
    pub fn move_to_front<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_move_call();
        let Some(&id) = self.index.get(value) else {
            return false;
        };
        let moved = self.relink_front(id);
        #[cfg(feature = "metrics")]
        self.record_move(moved);
        #[cfg(not(feature = "metrics"))]
        let _ = moved;
        true
    }

    /// Moves the entry holding `value` to the tail.
    ///
    /// Mirror of [`move_to_front`](Self::move_to_front).
    pub fn move_to_tail<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_move_call();
        let Some(&id) = self.index.get(value) else {
            return false;
        };
        let moved = self.relink_back(id);
        #[cfg(feature = "metrics")]
        self.record_move(moved);
        #[cfg(not(feature = "metrics"))]
        let _ = moved;
        true
    }

    /// Reserves room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.arena.reserve(additional);
        self.index.reserve(additional);
    }

    /// Releases storage not needed by the linked values.
    pub fn shrink_to_fit(&mut self) {
        self.arena.shrink_to_fit();
        self.index.shrink_to_fit();
    }

    /// Walks the chain and the index and reports the first inconsistency.
    ///
    /// Checks that head, tail and length agree, that `prev`/`next` handles
    /// mirror each other, that the chain is acyclic and covers every entry,
    /// and that the index maps each linked value to its own entry and
    /// nothing else.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let len = self.arena.len();

        if self.head.is_none() != self.tail.is_none() {
            return Err(InvariantError::new(format!(
                "head {:?} and tail {:?} disagree on emptiness",
                self.head, self.tail
            )));
        }
        if self.head.is_none() != (len == 0) {
            return Err(InvariantError::new(format!(
                "head {:?} inconsistent with length {}",
                self.head, len
            )));
        }
        if self.index.len() != len {
            return Err(InvariantError::new(format!(
                "index holds {} values but {} entries are stored",
                self.index.len(),
                len
            )));
        }

        let mut count = 0usize;
        let mut prev: Option<SlotId> = None;
        let mut current = self.head;
        while let Some(id) = current {
            count += 1;
            if count > len {
                return Err(InvariantError::new(format!(
                    "chain longer than {} entries; cycle through {:?}",
                    len, id
                )));
            }
            let entry = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("chain reaches free slot {:?}", id)))?;
            if entry.prev != prev {
                return Err(InvariantError::new(format!(
                    "entry {:?} has prev {:?}, expected {:?}",
                    id, entry.prev, prev
                )));
            }
            if self.index.get(&entry.value) != Some(&id) {
                return Err(InvariantError::new(format!(
                    "index does not map the value of entry {:?} back to it",
                    id
                )));
            }
            prev = Some(id);
            current = entry.next;
        }

        if count != len {
            return Err(InvariantError::new(format!(
                "chain visits {} entries but {} are stored",
                count, len
            )));
        }
        if prev != self.tail {
            return Err(InvariantError::new(format!(
                "chain ends at {:?} but tail is {:?}",
                prev, self.tail
            )));
        }
        Ok(())
    }

    fn link_new_front(&mut self, value: T) {
        let id = self
            .arena
            .insert(Entry::new(value.clone(), None, self.head));
        if let Some(old_head) = self.head {
            if let Some(entry) = self.arena.get_mut(old_head) {
                entry.prev = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
        self.index.insert(value, id);
    }

    fn link_new_back(&mut self, value: T) {
        let id = self
            .arena
            .insert(Entry::new(value.clone(), self.tail, None));
        if let Some(old_tail) = self.tail {
            if let Some(entry) = self.arena.get_mut(old_tail) {
                entry.next = Some(id);
            }
        } else {
            self.head = Some(id);
        }
        self.tail = Some(id);
        self.index.insert(value, id);
    }

    #[cfg(feature = "metrics")]
    fn record_move(&mut self, moved: bool) {
        if moved {
            self.metrics.record_move_relinked();
        } else {
            self.metrics.record_move_at_end();
        }
    }

    fn replace_value(&mut self, id: SlotId, value: T) {
        if let Some(entry) = self.arena.get_mut(id) {
            entry.value = value;
        }
    }

    /// Detaches `id`, frees its slot and drops its index mapping.
    fn unlink(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        let value = self.arena.remove(id)?.into_value();
        self.index.remove(&value);
        Some(value)
    }
}

impl<T> Default for UniqueIndexedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, S: Clone> Clone for UniqueIndexedList<T, S> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            index: self.index.clone(),
            head: self.head,
            tail: self.tail,
            #[cfg(feature = "metrics")]
            metrics: UniqueListMetrics::default(),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for UniqueIndexedList<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, S> PartialEq for UniqueIndexedList<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S> Eq for UniqueIndexedList<T, S> {}

impl<T, S> Extend<T> for UniqueIndexedList<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    /// Appends each value with [`add_last`](UniqueIndexedList::add_last)
    /// semantics.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T, S> FromIterator<T> for UniqueIndexedList<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        list.extend(iter);
        list
    }
}

impl<'a, T, S> IntoIterator for &'a UniqueIndexedList<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for UniqueIndexedList<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = T;
    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

#[cfg(feature = "metrics")]
impl<T, S> MetricsSnapshotProvider<UniqueListMetricsSnapshot> for UniqueIndexedList<T, S> {
    fn snapshot(&self) -> UniqueListMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl<T, S> MetricsReset for UniqueIndexedList<T, S> {
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

/// Borrowing iterator over a [`UniqueIndexedList`], head to tail.
pub struct Iter<'a, T> {
    arena: &'a SlotArena<Entry<T>>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        let entry = self.arena.get(id)?;
        self.front = entry.next;
        self.remaining -= 1;
        Some(&entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        let entry = self.arena.get(id)?;
        self.back = entry.prev;
        self.remaining -= 1;
        Some(&entry.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator over a [`UniqueIndexedList`], head to tail.
pub struct IntoIter<T, S = FxBuildHasher> {
    list: UniqueIndexedList<T, S>,
}

impl<T, S> Iterator for IntoIter<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, S> DoubleEndedIterator for IntoIter<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
    fn next_back(&mut self) -> Option<T> {
        self.list.remove_last()
    }
}

impl<T, S> ExactSizeIterator for IntoIter<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher,
{
}
