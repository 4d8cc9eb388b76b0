mod edge;
pub use edge::Edge;

mod node;
pub use node::Node;

mod trace;
pub use trace::PathTrace;

use crate::search::{self, Detached, InPlace, Relaxation, SearchOutcome};
use crate::{Cost, GraphError, NodeID, SearchConfig};

/// A weighted, directed Graph that owns its Nodes.
///
/// Nodes are stored in a [`Slab`](slab::Slab), so a [`NodeID`] stays valid until that Node is
/// removed. The id of a removed Node is handed out again by the next [`Graph::add_node`], after
/// which the old id names the new Node. `M` is the type of the optional metadata attached to Edges.
#[derive(Clone, Debug)]
pub struct Graph<M = ()> {
    nodes: slab::Slab<Node<M>>,
    config: SearchConfig,
}

impl<M> Default for Graph<M> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<M> Graph<M> {
    /// Creates an empty Graph with the default [`SearchConfig`]
    pub fn new() -> Self {
        Graph::with_config(SearchConfig::default())
    }

    /// Creates an empty Graph with the given options
    ///
    /// ## Examples
    /// ```
    /// # use weighted_paths::prelude::*;
    /// let mut graph: Graph = Graph::with_config(SearchConfig::PERMISSIVE);
    /// let a = graph.add_node("A");
    /// let b = graph.add_node("B");
    ///
    /// // accepted, but the search makes no promises about negative costs
    /// assert!(graph.add_directed_edge(a, b, -2.0, None).is_ok());
    /// ```
    pub fn with_config(config: SearchConfig) -> Self {
        Graph {
            nodes: slab::Slab::new(),
            config,
        }
    }

    /// The options this Graph was created with
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// The number of Nodes in the Graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph has no Nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if `id` names a Node of this Graph
    pub fn contains(&self, id: NodeID) -> bool {
        self.nodes.contains(id)
    }

    /// Returns the Node with the given id, if there is one
    pub fn get(&self, id: NodeID) -> Option<&Node<M>> {
        self.nodes.get(id)
    }

    /// Iterates over all Nodes and their ids
    pub fn iter(&self) -> impl Iterator<Item = (NodeID, &Node<M>)> + '_ {
        self.nodes.iter()
    }

    /// Finds the first Node with the given identifier
    pub fn find_id(&self, identifier: &str) -> Option<NodeID> {
        self.iter()
            .find(|(_, node)| node.identifier == identifier)
            .map(|(id, _)| id)
    }

    /// Adds a new Node without any Edges
    pub fn add_node(&mut self, identifier: impl Into<String>) -> NodeID {
        self.nodes.insert(Node::new(identifier.into()))
    }

    /// Removes a Node, all Edges leading to it and any predecessor link pointing at it
    pub fn remove_node(&mut self, id: NodeID) -> Result<Node<M>, GraphError> {
        let node = self.nodes.try_remove(id).ok_or(GraphError::UnknownNode(id))?;
        for (_, other) in self.nodes.iter_mut() {
            other.edges.retain(|edge| edge.target != id);
            if other.predecessor == Some(id) {
                other.predecessor = None;
            }
        }
        Ok(node)
    }

    /// Adds an Edge from `src` to `target`, replacing any existing Edge between the two.
    ///
    /// ## Examples
    /// ```
    /// # use weighted_paths::prelude::*;
    /// let mut graph: Graph<&str> = Graph::new();
    /// let a = graph.add_node("A");
    /// let b = graph.add_node("B");
    ///
    /// graph.add_directed_edge(a, b, 3.0, Some("old road"))?;
    /// graph.add_directed_edge(a, b, 2.0, Some("new road"))?;
    ///
    /// assert_eq!(graph[a].edges().len(), 1);
    /// assert_eq!(graph.edge(a, b).and_then(|e| e.metadata()), Some(&"new road"));
    /// assert_eq!(
    ///     graph.add_directed_edge(a, b, -1.0, None),
    ///     Err(GraphError::InvalidEdgeWeight { cost: -1.0 })
    /// );
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn add_directed_edge(
        &mut self,
        src: NodeID,
        target: NodeID,
        cost: Cost,
        metadata: Option<M>,
    ) -> Result<(), GraphError> {
        self.check_node(target)?;
        self.check_cost(cost)?;
        let src_node = self
            .nodes
            .get_mut(src)
            .ok_or(GraphError::UnknownNode(src))?;
        src_node.insert_edge(Edge::new(target, cost, metadata));
        Ok(())
    }

    /// Adds an Edge in both directions with the same cost and no metadata.
    ///
    /// Existing Edges between the two Nodes are replaced, including their metadata.
    pub fn add_undirected_edge(&mut self, a: NodeID, b: NodeID, cost: Cost) -> Result<(), GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;
        self.check_cost(cost)?;
        self.add_directed_edge(a, b, cost, None)?;
        self.add_directed_edge(b, a, cost, None)
    }

    /// The Edge from `src` to `target`, if there is one
    pub fn edge(&self, src: NodeID, target: NodeID) -> Option<&Edge<M>> {
        self.nodes.get(src)?.edge_to(target)
    }

    /// Offers every unvisited neighbor of `id` the distance through `id`.
    ///
    /// Meant for a Node that was just finalized. Neighbors whose distance drops get `id` as
    /// their predecessor. The returned [`Relaxation`] tells apart neighbors that were reached for
    /// the first time from those that already had a distance.
    pub fn relax(&mut self, id: NodeID) -> Result<Relaxation, GraphError> {
        self.check_node(id)?;
        Ok(search::relax(&mut InPlace(&mut self.nodes), id, &mut vec![]))
    }

    /// Clears distance, visited flag and predecessor of every Node
    pub fn reset_search_state(&mut self) {
        for (_, node) in self.nodes.iter_mut() {
            node.reset();
        }
    }

    /// Searches the cheapest Path from `start` to `end`, storing the search state in the Nodes.
    ///
    /// Every Node has to be in its initial state, see [`Graph::reset_search_state`]. Afterwards,
    /// each finalized Node holds its final distance and predecessor.
    ///
    /// ## Errors
    /// - [`GraphError::UnknownNode`] if `start` or `end` is not in the Graph
    /// - [`GraphError::StaleSearchState`] if a Node was left over from an earlier search and
    ///   [`SearchConfig::check_stale_state`] is set
    pub fn search(&mut self, start: NodeID, end: NodeID) -> Result<SearchOutcome, GraphError> {
        self.check_node(start)?;
        self.check_node(end)?;
        if start == end {
            return Ok(SearchOutcome::Trivial);
        }
        if self.config.check_stale_state {
            if let Some((stale, _)) = self.nodes.iter().find(|(_, n)| n.has_search_state()) {
                return Err(GraphError::StaleSearchState { node: stale });
            }
        }
        log::debug!("searching from node {} to node {} in place", start, end);
        let size_hint = self.config.frontier_capacity;
        Ok(search::dijkstra_search(
            &mut InPlace(&mut self.nodes),
            start,
            end,
            size_hint,
        ))
    }

    /// Same as [`Graph::search`], but returns only the Nodes of the Path.
    ///
    /// The result is empty if `end` is unreachable, but also if `start == end`.
    pub fn shortest_path(&mut self, start: NodeID, end: NodeID) -> Result<Vec<NodeID>, GraphError> {
        self.search(start, end).map(SearchOutcome::into_nodes)
    }

    /// Searches the cheapest Path from `start` to `end` without touching the Nodes' search state.
    ///
    /// ## Examples
    /// ```
    /// # use weighted_paths::prelude::*;
    /// let mut graph: Graph = Graph::new();
    /// let a = graph.add_node("A");
    /// let b = graph.add_node("B");
    /// let c = graph.add_node("C");
    /// graph.add_directed_edge(a, b, 1.5, None)?;
    ///
    /// assert_eq!(graph.find_path(a, b)?.into_nodes(), vec![a, b]);
    /// assert!(graph.find_path(a, c)?.is_unreachable());
    /// assert!(graph.find_path(c, c)?.is_trivial());
    /// // nothing was written to the Nodes
    /// assert!(!graph[b].is_reached());
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn find_path(&self, start: NodeID, end: NodeID) -> Result<SearchOutcome, GraphError> {
        self.check_node(start)?;
        self.check_node(end)?;
        let size_hint = self.config.frontier_capacity;
        Ok(search::dijkstra_search(
            &mut Detached::new(&self.nodes, size_hint),
            start,
            end,
            size_hint,
        ))
    }

    /// Runs [`Graph::find_path`] for every `(start, end)` pair.
    ///
    /// The results are in the same order as `queries`. With the `parallel` feature, the searches
    /// are spread over the rayon thread pool.
    pub fn find_paths(&self, queries: &[(NodeID, NodeID)]) -> Vec<Result<SearchOutcome, GraphError>>
    where
        M: Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|&(start, end)| self.find_path(start, end))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|&(start, end)| self.find_path(start, end))
                .collect()
        }
    }

    /// Prepares a human-readable trace of `path`, see [`PathTrace`]
    pub fn trace<'a>(&'a self, path: &'a [NodeID]) -> PathTrace<'a, M> {
        PathTrace::new(self, path)
    }

    /// Logs the trace of `path` at info level
    pub fn print_path(&self, path: &[NodeID]) {
        log::info!("{}", self.trace(path));
    }

    fn check_node(&self, id: NodeID) -> Result<(), GraphError> {
        if self.nodes.contains(id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }

    fn check_cost(&self, cost: Cost) -> Result<(), GraphError> {
        if !cost.is_finite() || (self.config.reject_negative_costs && cost < 0.0) {
            Err(GraphError::InvalidEdgeWeight { cost })
        } else {
            Ok(())
        }
    }
}

use std::ops::Index;
impl<M> Index<NodeID> for Graph<M> {
    type Output = Node<M>;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node<M> {
        &self.nodes[index]
    }
}
