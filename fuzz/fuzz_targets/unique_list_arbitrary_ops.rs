#![no_main]

use libfuzzer_sys::fuzz_target;
use unique_deque::ds::UniqueIndexedList;

// Fuzz arbitrary operation sequences on UniqueIndexedList
//
// Tests random sequences of add_first, add_last, try_add_*, remove_first,
// remove_last, remove, move_to_front, move_to_tail, contains and clear,
// validating the chain against the index after every step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut list: UniqueIndexedList<u8> = UniqueIndexedList::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 11;
        // Small value range so duplicates and hits are frequent.
        let value = data[idx + 1] % 32;

        match op {
            0 => {
                // add_first
                let existed = list.contains(&value);
                let old_len = list.len();
                assert_eq!(list.add_first(value), !existed);
                assert_eq!(list.first(), Some(&value));
                assert_eq!(list.len(), old_len + usize::from(!existed));
            }
            1 => {
                // add_last
                let existed = list.contains(&value);
                let old_len = list.len();
                assert_eq!(list.add_last(value), !existed);
                assert_eq!(list.last(), Some(&value));
                assert_eq!(list.len(), old_len + usize::from(!existed));
            }
            2 => {
                // try_add_first
                let existed = list.contains(&value);
                let old_first = list.first().copied();
                match list.try_add_first(value) {
                    Ok(()) => assert!(!existed),
                    Err(err) => {
                        assert!(existed);
                        assert_eq!(err.into_inner(), value);
                        assert_eq!(list.first().copied(), old_first);
                    }
                }
            }
            3 => {
                // try_add_last
                let existed = list.contains(&value);
                let result = list.try_add_last(value);
                assert_eq!(result.is_err(), existed);
            }
            4 => {
                // remove_first
                let old_len = list.len();
                let expected = list.first().copied();
                let removed = list.remove_first();
                assert_eq!(removed, expected);
                if let Some(v) = removed {
                    assert_eq!(list.len(), old_len - 1);
                    assert!(!list.contains(&v));
                } else {
                    assert_eq!(old_len, 0);
                }
            }
            5 => {
                // remove_last
                let old_len = list.len();
                let expected = list.last().copied();
                let removed = list.remove_last();
                assert_eq!(removed, expected);
                if let Some(v) = removed {
                    assert_eq!(list.len(), old_len - 1);
                    assert!(!list.contains(&v));
                } else {
                    assert_eq!(old_len, 0);
                }
            }
            6 => {
                // remove by value
                let existed = list.contains(&value);
                let old_len = list.len();
                let removed = list.remove(&value);
                assert_eq!(removed.is_some(), existed);
                assert!(!list.contains(&value));
                assert_eq!(list.len(), old_len - usize::from(existed));
            }
            7 => {
                // move_to_front
                let old_len = list.len();
                if list.move_to_front(&value) {
                    assert_eq!(list.first(), Some(&value));
                }
                assert_eq!(list.len(), old_len);
            }
            8 => {
                // move_to_tail
                let old_len = list.len();
                if list.move_to_tail(&value) {
                    assert_eq!(list.last(), Some(&value));
                }
                assert_eq!(list.len(), old_len);
            }
            9 => {
                // Check is_empty consistency
                if list.is_empty() {
                    assert_eq!(list.len(), 0);
                    assert_eq!(list.first(), None);
                    assert_eq!(list.last(), None);
                } else {
                    assert!(list.first().is_some());
                    assert!(list.last().is_some());
                }
                assert_eq!(list.iter().count(), list.len());
            }
            10 => {
                // clear
                list.clear();
                assert!(list.is_empty());
                assert!(!list.contains(&value));
            }
            _ => unreachable!(),
        }

        if let Err(err) = list.check_invariants() {
            panic!("invariant violated after op {}: {}", op, err);
        }

        idx += 2;
    }
});
