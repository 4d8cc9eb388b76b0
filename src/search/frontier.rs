use super::Labels;
use crate::{Cost, NodeID, NodeIDMap};
use ordered_float::OrderedFloat;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier entry: the Node, its distance when pushed and the sequence number of its first
/// insertion. Ordered so that the [`BinaryHeap`] pops the smallest distance, then the oldest.
#[derive(PartialEq, Eq)]
pub(crate) struct Element(pub NodeID, pub OrderedFloat<Cost>, pub u64);
impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1).then_with(|| rhs.2.cmp(&self.2))
    }
}

/// The Nodes that were reached but not finalized yet.
///
/// Lowering the distance of a Node that is already on the frontier pushes a second entry with the
/// same sequence number; the outdated entry is skipped when it comes up.
pub(crate) struct Frontier {
    heap: BinaryHeap<Element>,
    order: NodeIDMap<u64>,
    next_seq: u64,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Frontier {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            order: NodeIDMap::with_capacity_and_hasher(capacity, Default::default()),
            next_seq: 0,
        }
    }

    /// Adds a Node that was seen for the first time
    pub fn insert(&mut self, id: NodeID, distance: Cost) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(id, seq);
        self.heap.push(Element(id, OrderedFloat(distance), seq));
    }

    /// Moves a Node that is already on the frontier to its new, lower distance
    pub fn decrease(&mut self, id: NodeID, distance: Cost) {
        match self.order.get(&id) {
            Some(&seq) => self.heap.push(Element(id, OrderedFloat(distance), seq)),
            None => self.insert(id, distance),
        }
    }

    /// Removes and returns the unvisited Node with the smallest distance
    pub fn pop<L: Labels>(&mut self, labels: &L) -> Option<NodeID> {
        while let Some(Element(id, distance, _)) = self.heap.pop() {
            if labels.is_visited(id) || distance > OrderedFloat(labels.distance(id)) {
                continue;
            }
            return Some(id);
        }
        None
    }
}
