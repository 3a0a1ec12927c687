use crate::priority_queue::{Priority, PriorityQueue};

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Checks the heap order over the queue's array layout, independently of the
/// queue's own internal check.
pub fn assert_heap_order<T>(q: &PriorityQueue<T>) {
    let priorities: Vec<Priority> = q.iter().map(|(_, p)| p).collect();
    for i in 1..priorities.len() {
        let parent = (i - 1) / 2;
        assert!(
            priorities[parent] >= priorities[i],
            "parent {} ({}) < child {} ({}), heap: {:?}",
            parent,
            priorities[parent],
            i,
            priorities[i],
            q
        );
    }
}

/// Small deterministic generator for randomized operation sequences.
pub struct XorShift {
    state: u64,
}

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}
