use crate::{Cost, NodeID};
use thiserror::Error;

/// The errors reported by [`Graph`](crate::Graph) operations.
///
/// Not finding a Path is not an error: see [`SearchOutcome`](crate::SearchOutcome) for the
/// `Unreachable` and `Trivial` results.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GraphError {
    /// An Edge cost was NaN, infinite, or negative while negative costs are rejected.
    #[error("invalid edge weight {cost}")]
    InvalidEdgeWeight {
        /// the rejected cost
        cost: Cost,
    },
    /// The id does not name a Node of the Graph.
    #[error("no node with id {0}")]
    UnknownNode(NodeID),
    /// A Node still holds the state of an earlier search.
    #[error("node {node} holds state from a previous search, reset the graph first")]
    StaleSearchState {
        /// the first Node found with leftover state
        node: NodeID,
    },
}

#[cfg(test)]
mod tests {
    use super::GraphError;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::InvalidEdgeWeight { cost: -1.5 }.to_string(),
            "invalid edge weight -1.5"
        );
        assert_eq!(GraphError::UnknownNode(7).to_string(), "no node with id 7");
        assert_eq!(
            GraphError::StaleSearchState { node: 2 }.to_string(),
            "node 2 holds state from a previous search, reset the graph first"
        );
    }
}
