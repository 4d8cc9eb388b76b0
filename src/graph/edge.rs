use crate::{Cost, NodeID};

/// A weighted connection from one Node to another.
///
/// The `metadata` is carried along for the caller and never looked at by the search.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<M = ()> {
    pub(crate) target: NodeID,
    pub(crate) cost: Cost,
    pub(crate) metadata: Option<M>,
}

impl<M> Edge<M> {
    pub(crate) fn new(target: NodeID, cost: Cost, metadata: Option<M>) -> Edge<M> {
        Edge {
            target,
            cost,
            metadata,
        }
    }

    /// The Node this Edge leads to
    pub fn target(&self) -> NodeID {
        self.target
    }

    /// The cost of walking along this Edge
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The metadata attached when the Edge was added, if any
    pub fn metadata(&self) -> Option<&M> {
        self.metadata.as_ref()
    }
}
