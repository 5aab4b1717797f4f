use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use wayfarer_core::Point;

/// Heap entry ordered so `BinaryHeap` (a max-heap) pops the lowest cost
/// first, and among equal costs the earliest push.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    cost: i32,
    seq: u64,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set of a label-correcting search.
///
/// Lowering a point's cost pushes a fresh heap entry; the superseded entry
/// stays in the heap and is skipped when it surfaces.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    open: HashMap<Point, i32>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn push(&mut self, pos: Point, cost: i32) {
        self.open.insert(pos, cost);
        self.heap.push(Entry {
            cost,
            seq: self.seq,
            pos,
        });
        self.seq += 1;
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Remove and return the open point with the lowest cost.
    ///
    /// # Panics
    ///
    /// Panics when the frontier is empty.
    pub(crate) fn pop(&mut self) -> (Point, i32) {
        assert!(!self.open.is_empty(), "pop from an empty frontier");
        while let Some(e) = self.heap.pop() {
            if self.open.get(&e.pos) == Some(&e.cost) {
                self.open.remove(&e.pos);
                return (e.pos, e.cost);
            }
        }
        log::error!("frontier heap exhausted with {} open points", self.open.len());
        panic!("frontier heap exhausted with open points left");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_by_cost_then_insertion() {
        let mut f = Frontier::default();
        let (a, b, c) = (Point::new(0, 0), Point::new(1, 0), Point::new(2, 0));
        f.push(a, 200);
        f.push(b, 100);
        f.push(c, 100);
        assert_eq!(f.pop(), (b, 100));
        assert_eq!(f.pop(), (c, 100));
        assert_eq!(f.pop(), (a, 200));
        assert!(f.is_empty());
    }

    #[test]
    fn lowered_costs_supersede_old_entries() {
        let mut f = Frontier::default();
        let (a, b) = (Point::new(0, 0), Point::new(1, 0));
        f.push(a, 300);
        f.push(b, 200);
        f.push(a, 100);
        assert_eq!(f.pop(), (a, 100));
        assert_eq!(f.pop(), (b, 200));
        assert!(f.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty frontier")]
    fn popping_empty_frontier_panics() {
        Frontier::default().pop();
    }
}
