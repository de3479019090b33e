use std::{cmp::Reverse, collections::BinaryHeap};

/// Vacated slot numbers, popped lowest first.
///
/// `BinaryHeap` is a max-heap so the numbers are stored reversed.
#[derive(Clone, Debug, Default)]
pub struct FreeSlotQueue {
    heap: BinaryHeap<Reverse<usize>>,
}

impl FreeSlotQueue {
    pub fn new() -> FreeSlotQueue {
        FreeSlotQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, slot_number: usize) {
        self.heap.push(Reverse(slot_number));
    }

    pub fn pop_min(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(n)| n)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Slot numbers in ascending order. Used by debug logging and tests.
    pub fn to_sorted_vec(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self.heap.iter().map(|Reverse(n)| *n).collect();
        v.sort_unstable();
        v
    }
}
