use crate::{Cost, NodeID};

/// The cheapest Path between two Nodes
///
/// Stores the sequence of Nodes from start to end in `nodes` and the total Cost of walking the
/// Edges between them in `cost`.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// the Nodes, start and end included
    pub nodes: Vec<NodeID>,
    /// the total Cost of the Path
    pub cost: Cost,
}

impl Path {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use weighted_paths::Path;
    /// let path = Path::new(vec![0, 4, 2], 4.5);
    ///
    /// assert_eq!(path.nodes, vec![0, 4, 2]);
    /// assert_eq!(path.cost, 4.5);
    /// assert_eq!(path.len(), 3);
    /// ```
    pub fn new(nodes: Vec<NodeID>, cost: Cost) -> Path {
        Path { nodes, cost }
    }

    /// The first Node of the Path
    pub fn start(&self) -> Option<NodeID> {
        self.nodes.first().copied()
    }

    /// The last Node of the Path
    pub fn end(&self) -> Option<NodeID> {
        self.nodes.last().copied()
    }
}

use std::ops::Deref;

/// Gives slice access to the Nodes, e.g. `path[0]` or `path.windows(2)`
impl Deref for Path {
    type Target = [NodeID];
    fn deref(&self) -> &[NodeID] {
        &self.nodes
    }
}

use std::cmp::Ordering;

/// Cheaper Paths come first. Paths of equal cost are ordered by their Nodes, so that only equal
/// Paths compare as equal.
impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Path) -> Option<Ordering> {
        match self.cost.partial_cmp(&other.cost)? {
            Ordering::Equal => Some(self.nodes.cmp(&other.nodes)),
            ord => Some(ord),
        }
    }
}

use std::fmt;
/// Formats as `[0 -> 4 -> 2] (cost 4.5)`, used when logging search results
impl fmt::Display for Path {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("[")?;
        for (i, id) in self.nodes.iter().enumerate() {
            if i > 0 {
                fmt.write_str(" -> ")?;
            }
            write!(fmt, "{}", id)?;
        }
        write!(fmt, "] (cost {})", self.cost)
    }
}
