#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Path between two Nodes of a weighted, directed Graph.
//!
//! ## Introduction
//! The Graph owns all of its Nodes in an arena and hands out a [`NodeID`] for each of them.
//! Edges and the predecessor links used for rebuilding a Path refer to other Nodes by that id,
//! so neither of them owns the Node it points at.
//!
//! Every Node carries the state of the current search: its tentative distance from the start,
//! whether it has been finalized and the Node that its best distance came from. A search with
//! [`Graph::search`] writes that state in place, which means a Graph can only be searched once
//! before [`Graph::reset_search_state`] has to be called. [`Graph::find_path`] runs the same
//! algorithm with a separate set of labels and leaves the Nodes untouched, so it can be called
//! any number of times (and from several threads at once, see [`Graph::find_paths`]).
//!
//! Edge costs have to be non-negative for the results to be the cheapest Paths. By default,
//! negative costs are rejected when the Edge is added. See [`SearchConfig`] for the options.
//!
//! ## Examples
//! Building a Graph and searching it:
//! ```
//! use weighted_paths::prelude::*;
//!
//! // A --1--> B --2--> C
//! //  \________5_______/^
//! let mut graph: Graph = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//!
//! graph.add_directed_edge(a, b, 1.0, None)?;
//! graph.add_directed_edge(b, c, 2.0, None)?;
//! graph.add_directed_edge(a, c, 5.0, None)?;
//!
//! let outcome = graph.search(a, c)?;
//! let path = outcome.path().unwrap();
//! assert_eq!(path.nodes, vec![a, b, c]);
//! assert_eq!(path.cost, 3.0);
//! assert_eq!(graph[c].distance(), 3.0);
//!
//! assert_eq!(graph.trace(path).to_string(), "(A, 0) -> (B, 1) -> (C, 3) -> x");
//! # Ok::<(), GraphError>(())
//! ```
//!
//! Searching again requires a reset, or a detached search:
//! ```
//! # use weighted_paths::prelude::*;
//! # let mut graph: Graph = Graph::new();
//! # let a = graph.add_node("A");
//! # let b = graph.add_node("B");
//! # graph.add_undirected_edge(a, b, 4.0)?;
//! graph.search(a, b)?;
//! assert!(matches!(graph.search(b, a), Err(GraphError::StaleSearchState { .. })));
//!
//! graph.reset_search_state();
//! assert_eq!(graph.search(b, a)?.path().map(|p| p.cost), Some(4.0));
//!
//! // detached searches never look at the state stored in the Nodes
//! assert_eq!(graph.find_path(a, b)?.path().map(|p| p.cost), Some(4.0));
//! # Ok::<(), GraphError>(())
//! ```

/// The Type used to reference a Node in the Graph
pub type NodeID = usize;

/// The Type used for Edge costs and distances
pub type Cost = f64;

mod node_id;
pub use node_id::{NodeIDHasher, NodeIDMap, NodeIDSet};

mod config;
pub use config::SearchConfig;

mod error;
pub use error::GraphError;

mod graph;
pub use graph::{Edge, Graph, Node, PathTrace};

mod path;
pub use path::Path;

mod search;
pub use search::{Relaxation, SearchOutcome};

/// The most commonly used types of this crate
pub mod prelude {
    pub use crate::{Cost, Graph, GraphError, NodeID, Path, SearchConfig, SearchOutcome};
}
