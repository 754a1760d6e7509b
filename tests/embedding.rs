// ==============================================
// EMBEDDING TESTS (integration)
// ==============================================
//
// The list is meant to sit inside larger structures. These tests build the
// two shapes it is usually embedded in and check it stays consistent there.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};
use std::thread;

use unique_deque::prelude::*;

// ==============================================
// LRU core on top of the list
// ==============================================

struct TinyLru<K, V> {
    capacity: usize,
    order: UniqueIndexedList<K>,
    values: HashMap<K, V>,
}

impl<K: Eq + Hash + Clone, V> TinyLru<K, V> {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: UniqueListBuilder::new().capacity(capacity).build(),
            values: HashMap::with_capacity(capacity),
        }
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        if self.order.move_to_front(key) {
            self.values.get(key)
        } else {
            None
        }
    }

    fn put(&mut self, key: K, value: V) -> Option<K> {
        let mut evicted = None;
        if !self.order.contains(&key) && self.order.len() == self.capacity {
            if let Some(old) = self.order.remove_last() {
                self.values.remove(&old);
                evicted = Some(old);
            }
        }
        self.order.add_first(key.clone());
        self.values.insert(key, value);
        evicted
    }
}

mod lru_core {
    use super::*;

    #[test]
    fn evicts_least_recently_used() {
        let mut lru = TinyLru::new(2);
        assert_eq!(lru.put("a", 1), None);
        assert_eq!(lru.put("b", 2), None);
        assert_eq!(lru.get(&"a"), Some(&1));
        assert_eq!(lru.put("c", 3), Some("b"));

        assert_eq!(lru.get(&"b"), None);
        assert_eq!(lru.get(&"a"), Some(&1));
        assert_eq!(lru.get(&"c"), Some(&3));
        lru.order.check_invariants().unwrap();
    }

    #[test]
    fn update_does_not_evict() {
        let mut lru = TinyLru::new(2);
        lru.put(1, "one");
        lru.put(2, "two");
        assert_eq!(lru.put(1, "uno"), None);
        assert_eq!(lru.order.len(), 2);
        assert_eq!(lru.order.first(), Some(&1));
        assert_eq!(lru.get(&1), Some(&"uno"));
    }

    #[test]
    fn long_run_keeps_order_and_values_in_sync() {
        let mut lru = TinyLru::new(16);
        for i in 0u64..5_000 {
            let key = (i * 7919) % 40;
            if lru.get(&key).is_none() {
                lru.put(key, i);
            }
            assert_eq!(lru.order.len(), lru.values.len());
        }
        lru.order.check_invariants().unwrap();
        for key in lru.order.iter() {
            assert!(lru.values.contains_key(key));
        }
    }
}

// ==============================================
// FIFO staging buffer
// ==============================================

mod fifo_staging {
    use super::*;

    #[test]
    fn drains_in_arrival_order_and_skips_requeued() {
        let mut staging: UniqueIndexedList<u32> = UniqueIndexedList::new();
        for job in [10, 20, 30, 40] {
            staging.try_add_last(job).unwrap();
        }
        // A re-submitted job is refused rather than queued twice.
        assert!(staging.try_add_last(20).is_err());
        // Cancel one job in the middle.
        assert_eq!(staging.remove(&30), Some(30));

        let drained: Vec<u32> = staging.into_iter().collect();
        assert_eq!(drained, vec![10, 20, 40]);
    }
}

// ==============================================
// External locking
// ==============================================
//
// The list has no internal synchronisation; callers wrap it.

mod external_lock {
    use super::*;

    #[test]
    fn mutex_wrapped_list_stays_consistent() {
        let shared = Arc::new(Mutex::new(UniqueIndexedList::<u32>::new()));
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..250u32 {
                        let value = t * 1_000 + i;
                        let mut list = shared.lock().unwrap();
                        list.add_first(value);
                        if i % 3 == 0 {
                            list.move_to_tail(&value);
                        }
                        if i % 5 == 0 {
                            list.remove_last();
                        }
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let list = shared.lock().unwrap();
        list.check_invariants().unwrap();
        assert_eq!(list.len(), 4 * (250 - 50));
    }
}

// ==============================================
// Stack alongside the list
// ==============================================

mod undo_stack {
    use super::*;

    #[test]
    fn stack_records_moves_for_undo() {
        let mut list: UniqueIndexedList<char> = "abcd".chars().collect();
        let mut undo: Stack<(char, bool)> = Stack::new();

        for c in ['c', 'a'] {
            let was_first = list.first() == Some(&c);
            list.move_to_front(&c);
            undo.push((c, was_first));
        }
        assert_eq!(list.iter().collect::<String>(), "acbd");
        assert_eq!(undo.len(), 2);
        assert_eq!(undo.peek(), Some(&('a', false)));

        while let Some((c, _)) = undo.pop() {
            list.move_to_tail(&c);
        }
        assert!(undo.is_empty());
        assert_eq!(list.iter().collect::<String>(), "bdac");
    }
}
