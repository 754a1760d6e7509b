#![no_main]

use libfuzzer_sys::fuzz_target;
use unique_deque::ds::Stack;

// Fuzz arbitrary push/pop/peek/clear sequences on Stack against a Vec model.
fuzz_target!(|data: &[u8]| {
    let mut stack: Stack<u8> = Stack::new();
    let mut model: Vec<u8> = Vec::new();

    for pair in data.chunks_exact(2) {
        let (op, value) = (pair[0] % 4, pair[1]);
        match op {
            0 => {
                stack.push(value);
                model.push(value);
            }
            1 => assert_eq!(stack.pop(), model.pop()),
            2 => assert_eq!(stack.peek(), model.last()),
            3 => {
                stack.clear();
                model.clear();
            }
            _ => unreachable!(),
        }
        assert_eq!(stack.as_slice(), model.as_slice());
        assert_eq!(stack.is_empty(), model.is_empty());
    }
});
