//! Chain node stored in the list's [`SlotArena`](crate::ds::SlotArena).

use crate::ds::slot_arena::SlotId;

/// One element plus the handles of its neighbours.
///
/// `prev` is `None` only at the head, `next` is `None` only at the tail.
/// Entries never leave the owning list; only their values do.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<SlotId>,
    pub(crate) next: Option<SlotId>,
}

impl<T> Entry<T> {
    pub(crate) fn new(value: T, prev: Option<SlotId>, next: Option<SlotId>) -> Self {
        Self { value, prev, next }
    }

    pub(crate) fn unlink(&mut self) {
        self.prev = None;
        self.next = None;
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }
}
