use super::Labels;
use crate::{graph::Node, Cost, NodeID, NodeIDMap};

/// Search state kept in the Nodes themselves.
pub(crate) struct InPlace<'a, M>(pub &'a mut slab::Slab<Node<M>>);

impl<M> Labels for InPlace<'_, M> {
    fn distance(&self, id: NodeID) -> Cost {
        self.0[id].distance
    }
    fn is_visited(&self, id: NodeID) -> bool {
        self.0[id].visited
    }
    fn predecessor(&self, id: NodeID) -> Option<NodeID> {
        self.0[id].predecessor
    }
    fn improve(&mut self, id: NodeID, distance: Cost, predecessor: Option<NodeID>) {
        let node = &mut self.0[id];
        node.distance = distance;
        node.predecessor = predecessor;
    }
    fn finalize(&mut self, id: NodeID) {
        self.0[id].visited = true;
    }
    fn edges(&self, id: NodeID, out: &mut Vec<(NodeID, Cost)>) {
        out.extend(self.0[id].edges.iter().map(|edge| (edge.target, edge.cost)));
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Label {
    distance: Cost,
    visited: bool,
    predecessor: Option<NodeID>,
}

impl Label {
    const UNREACHED: Label = Label {
        distance: Cost::INFINITY,
        visited: false,
        predecessor: None,
    };
}

/// Search state kept in a map owned by a single search. The Nodes are only read.
pub(crate) struct Detached<'a, M> {
    nodes: &'a slab::Slab<Node<M>>,
    labels: NodeIDMap<Label>,
}

impl<'a, M> Detached<'a, M> {
    pub fn new(nodes: &'a slab::Slab<Node<M>>, size_hint: usize) -> Self {
        Detached {
            nodes,
            labels: NodeIDMap::with_capacity_and_hasher(size_hint, Default::default()),
        }
    }

    fn label(&self, id: NodeID) -> Label {
        self.labels.get(&id).copied().unwrap_or(Label::UNREACHED)
    }
}

impl<M> Labels for Detached<'_, M> {
    fn distance(&self, id: NodeID) -> Cost {
        self.label(id).distance
    }
    fn is_visited(&self, id: NodeID) -> bool {
        self.label(id).visited
    }
    fn predecessor(&self, id: NodeID) -> Option<NodeID> {
        self.label(id).predecessor
    }
    fn improve(&mut self, id: NodeID, distance: Cost, predecessor: Option<NodeID>) {
        let label = self.labels.entry(id).or_insert(Label::UNREACHED);
        label.distance = distance;
        label.predecessor = predecessor;
    }
    fn finalize(&mut self, id: NodeID) {
        self.labels.entry(id).or_insert(Label::UNREACHED).visited = true;
    }
    fn edges(&self, id: NodeID, out: &mut Vec<(NodeID, Cost)>) {
        out.extend(self.nodes[id].edges.iter().map(|edge| (edge.target, edge.cost)));
    }
}
