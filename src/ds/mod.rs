mod entry;
pub mod slot_arena;
pub mod stack;
pub mod unique_list;

pub use slot_arena::{SlotArena, SlotId};
pub use stack::Stack;
pub use unique_list::{IntoIter, Iter, UniqueIndexedList};
