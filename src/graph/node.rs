use super::Edge;
use crate::{Cost, NodeID};

/// A vertex of the [`Graph`](crate::Graph) together with the state of the current search.
///
/// The search state (`distance`, `visited`, `predecessor`) is written by
/// [`Graph::search`](crate::Graph::search) and only cleared by
/// [`Graph::reset_search_state`](crate::Graph::reset_search_state).
#[derive(Clone, Debug)]
pub struct Node<M = ()> {
    pub(crate) identifier: String,
    pub(crate) edges: Vec<Edge<M>>,
    pub(crate) distance: Cost,
    pub(crate) visited: bool,
    pub(crate) predecessor: Option<NodeID>,
}

impl<M> Node<M> {
    pub(crate) fn new(identifier: String) -> Node<M> {
        Node {
            identifier,
            edges: Vec::new(),
            distance: Cost::INFINITY,
            visited: false,
            predecessor: None,
        }
    }

    /// The label given to [`Graph::add_node`](crate::Graph::add_node)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// All outgoing Edges, in no particular order
    pub fn edges(&self) -> &[Edge<M>] {
        &self.edges
    }

    /// The outgoing Edge to `target`, if there is one
    pub fn edge_to(&self, target: NodeID) -> Option<&Edge<M>> {
        self.edges.iter().find(|edge| edge.target == target)
    }

    /// The tentative distance from the start of the last search. Infinite if never reached.
    pub fn distance(&self) -> Cost {
        self.distance
    }

    /// `true` once the Node was finalized, i.e. its distance can no longer change
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// `true` if the last search found any Path to this Node
    pub fn is_reached(&self) -> bool {
        self.distance.is_finite()
    }

    /// The Node that the current best distance was reached from
    pub fn predecessor(&self) -> Option<NodeID> {
        self.predecessor
    }

    /// `true` if any of the search state differs from a fresh Node
    pub(crate) fn has_search_state(&self) -> bool {
        self.visited || self.distance != Cost::INFINITY || self.predecessor.is_some()
    }

    pub(crate) fn insert_edge(&mut self, edge: Edge<M>) {
        if let Some(existing) = self.edges.iter().position(|e| e.target == edge.target) {
            self.edges.remove(existing);
        }
        self.edges.push(edge);
    }

    pub(crate) fn reset(&mut self) {
        self.distance = Cost::INFINITY;
        self.visited = false;
        self.predecessor = None;
    }
}
