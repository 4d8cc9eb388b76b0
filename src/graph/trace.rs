use super::Graph;
use crate::{Cost, NodeID};
use std::fmt;

/// A printable trace of a Path in the form `(A, 0) -> (B, 1) -> (C, 3) -> x`.
///
/// Each step shows the identifier of the Node and the summed cost of the Edges leading up to it,
/// so the trace reads the same for in-place and detached searches. A step without an Edge from
/// the previous Node shows an infinite distance.
///
/// ## Examples
/// ```
/// # use weighted_paths::prelude::*;
/// let mut graph: Graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// graph.add_directed_edge(a, b, 2.5, None)?;
///
/// let path = graph.find_path(a, b)?.into_nodes();
/// assert_eq!(graph.trace(&path).to_string(), "(A, 0) -> (B, 2.5) -> x");
/// assert_eq!(graph.trace(&[]).to_string(), "x");
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug)]
pub struct PathTrace<'a, M> {
    graph: &'a Graph<M>,
    path: &'a [NodeID],
}

impl<M> Clone for PathTrace<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<M> Copy for PathTrace<'_, M> {}

impl<'a, M> PathTrace<'a, M> {
    pub(crate) fn new(graph: &'a Graph<M>, path: &'a [NodeID]) -> Self {
        PathTrace { graph, path }
    }
}

impl<M> fmt::Display for PathTrace<'_, M> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut distance: Cost = 0.0;
        let mut prev: Option<NodeID> = None;
        for &id in self.path {
            if let Some(prev) = prev {
                distance += self
                    .graph
                    .edge(prev, id)
                    .map_or(Cost::INFINITY, |edge| edge.cost);
            }
            match self.graph.get(id) {
                Some(node) => write!(fmt, "({}, {}) -> ", node.identifier, distance)?,
                None => write!(fmt, "(#{}, {}) -> ", id, distance)?,
            }
            prev = Some(id);
        }
        write!(fmt, "x")
    }
}
