//! Slot store with stable integer handles.
//!
//! Entries of the linked list live here instead of behind owning/back
//! references. A [`SlotId`] stays valid until its slot is removed; freed slots
//! are recycled through a LIFO free list, so a stale id may later address a
//! different entry. Callers that hold ids must drop them on removal.
//!
//! ```text
//!   slots:     [ Some(a) | None | Some(c) | Some(d) ]
//!   free_list: [ 1 ]
//!   insert(e) ─► reuses slot 1
//! ```

/// Opaque handle to an occupied slot of a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its handle, reusing a freed slot if any.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(value);
            idx
        } else {
            self.slots.push(Some(value));
            self.slots.len() - 1
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Frees the slot and returns its value; `None` if it was not occupied.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        let value = slot.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.slots
            .get(id.0)
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Reserves room for `additional` more occupied slots.
    pub fn reserve(&mut self, additional: usize) {
        let recycled = self.free_list.len();
        self.slots.reserve(additional.saturating_sub(recycled));
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.len = 0;
    }

    /// Releases unused trailing storage. Free slots in the middle stay put
    /// since live ids may point past them.
    pub fn shrink_to_fit(&mut self) {
        while matches!(self.slots.last(), Some(None)) {
            self.slots.pop();
        }
        let end = self.slots.len();
        self.free_list.retain(|&idx| idx < end);
        self.slots.shrink_to_fit();
        self.free_list.shrink_to_fit();
    }

    /// Iterates occupied slots in slot order (not list order).
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|value| (SlotId(idx), value)))
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_arena_insert_remove_reuse() {
        let mut arena = SlotArena::new();
        let id1 = arena.insert("a");
        let id2 = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id1), Some(&"a"));
        assert_eq!(arena.get(id2), Some(&"b"));

        assert_eq!(arena.remove(id1), Some("a"));
        assert_eq!(arena.len(), 1);

        let id3 = arena.insert("c");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(id3), Some(&"c"));
        assert_eq!(id1.index(), id3.index());
    }

    #[test]
    fn slot_arena_remove_twice_and_out_of_range() {
        let mut arena = SlotArena::new();
        let id = arena.insert(1);
        assert_eq!(arena.remove(id), Some(1));
        assert_eq!(arena.remove(id), None);
        assert_eq!(arena.remove(SlotId(99)), None);
        assert!(!arena.contains(id));
        assert!(arena.is_empty());
    }

    #[test]
    fn slot_arena_get_mut_and_iter() {
        let mut arena = SlotArena::new();
        let a = arena.insert(10);
        let b = arena.insert(20);
        let c = arena.insert(30);
        arena.remove(b);

        if let Some(value) = arena.get_mut(a) {
            *value += 1;
        }

        let items: Vec<_> = arena.iter().map(|(id, v)| (id, *v)).collect();
        assert_eq!(items, vec![(a, 11), (c, 30)]);
    }

    #[test]
    fn slot_arena_clear_resets_free_list() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        arena.insert(2);
        arena.remove(a);
        arena.clear();

        assert!(arena.is_empty());
        let fresh = arena.insert(3);
        assert_eq!(fresh.index(), 0);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn slot_arena_shrink_drops_trailing_free_slots() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        let b = arena.insert(2);
        let c = arena.insert(3);
        arena.remove(b);
        arena.remove(c);
        arena.shrink_to_fit();

        assert_eq!(arena.get(a), Some(&1));
        assert_eq!(arena.len(), 1);
        // Freed slots past the end are forgotten, so the next insert appends.
        let d = arena.insert(4);
        assert_eq!(d.index(), 1);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn slot_arena_reserve_grows_capacity() {
        let mut arena: SlotArena<u64> = SlotArena::new();
        arena.reserve(32);
        assert!(arena.capacity() >= 32);
        assert!(arena.is_empty());
    }
}
