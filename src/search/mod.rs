mod frontier;
use self::frontier::Frontier;

mod labels;
pub(crate) use self::labels::{Detached, InPlace};

use crate::{Cost, NodeID, Path};

/// Read and write access to the per-Node state of one search.
///
/// Implemented once for state stored in the Nodes and once for state stored next to them, so
/// that both kinds of search share the same driver.
pub(crate) trait Labels {
    fn distance(&self, id: NodeID) -> Cost;
    fn is_visited(&self, id: NodeID) -> bool;
    fn predecessor(&self, id: NodeID) -> Option<NodeID>;
    /// Sets a new best distance and the Node it was reached from
    fn improve(&mut self, id: NodeID, distance: Cost, predecessor: Option<NodeID>);
    fn finalize(&mut self, id: NodeID);
    /// Appends `(target, cost)` of every outgoing Edge of `id` to `out`
    fn edges(&self, id: NodeID, out: &mut Vec<(NodeID, Cost)>);
}

/// The result of a search between two Nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Start and end are the same Node. No search was performed.
    Trivial,
    /// The cheapest Path from start to end.
    Found(Path),
    /// The end cannot be reached from the start.
    ///
    /// Also reported when every Path to the end sums to more than `f64::MAX`, since such a
    /// distance overflows to infinity.
    Unreachable,
}

impl SearchOutcome {
    /// The Path, if one was found
    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Turns the outcome into the Path, if one was found
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// The Nodes of the Path from start to end.
    ///
    /// Empty both for [`Trivial`](SearchOutcome::Trivial) and
    /// [`Unreachable`](SearchOutcome::Unreachable).
    pub fn into_nodes(self) -> Vec<NodeID> {
        self.into_path().map(|path| path.nodes).unwrap_or_default()
    }

    /// `true` if a Path was found
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// `true` if start and end are the same Node
    pub fn is_trivial(&self) -> bool {
        matches!(self, SearchOutcome::Trivial)
    }

    /// `true` if the end cannot be reached
    pub fn is_unreachable(&self) -> bool {
        matches!(self, SearchOutcome::Unreachable)
    }
}

/// The neighbors touched by [`Graph::relax`](crate::Graph::relax).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relaxation {
    /// Neighbors that had an infinite distance before the call, whether or not it was lowered.
    ///
    /// Those that now have a finite distance have to be added to the frontier.
    pub discovered: Vec<NodeID>,
    /// Neighbors that were already on the frontier and now have a lower distance.
    pub improved: Vec<NodeID>,
}

/// Offers every unvisited neighbor of `current` the distance through `current`.
pub(crate) fn relax<L: Labels>(
    labels: &mut L,
    current: NodeID,
    neighbors: &mut Vec<(NodeID, Cost)>,
) -> Relaxation {
    let mut relaxation = Relaxation::default();
    let current_cost = labels.distance(current);

    neighbors.clear();
    labels.edges(current, neighbors);
    for &(other_id, cost) in neighbors.iter() {
        if labels.is_visited(other_id) {
            continue;
        }
        let prev_cost = labels.distance(other_id);
        let first_touch = prev_cost == Cost::INFINITY;
        if first_touch {
            relaxation.discovered.push(other_id);
        }
        let other_cost = current_cost + cost;
        if other_cost < prev_cost {
            labels.improve(other_id, other_cost, Some(current));
            if !first_touch {
                relaxation.improved.push(other_id);
            }
        }
    }
    relaxation
}

/// Runs the label-setting search from `start` until `end` is finalized.
///
/// `start` and `end` must both be valid ids.
pub(crate) fn dijkstra_search<L: Labels>(
    labels: &mut L,
    start: NodeID,
    end: NodeID,
    size_hint: usize,
) -> SearchOutcome {
    if start == end {
        return SearchOutcome::Trivial;
    }
    let mut next = Frontier::with_capacity(size_hint);
    labels.improve(start, 0.0, None);
    next.insert(start, 0.0);

    let mut neighbors = vec![];
    let mut finalized = 0usize;

    while let Some(current_id) = next.pop(labels) {
        labels.finalize(current_id);
        finalized += 1;
        log::trace!(
            "finalized node {} at distance {}",
            current_id,
            labels.distance(current_id)
        );

        if current_id == end {
            let path = generate_path(labels, end);
            log::debug!("finalized {} nodes, found {}", finalized, path);
            return SearchOutcome::Found(path);
        }

        let relaxation = relax(labels, current_id, &mut neighbors);
        for other_id in relaxation.discovered {
            // an infinite sum leaves the neighbor unreached
            let distance = labels.distance(other_id);
            if distance.is_finite() {
                next.insert(other_id, distance);
            }
        }
        for other_id in relaxation.improved {
            next.decrease(other_id, labels.distance(other_id));
        }
    }

    log::debug!(
        "node {} is unreachable from node {}, finalized {} nodes",
        end,
        start,
        finalized
    );
    SearchOutcome::Unreachable
}

/// Follows the predecessors from `end` back to the Node that has none.
fn generate_path<L: Labels>(labels: &L, end: NodeID) -> Path {
    let steps = {
        let mut steps = vec![end];
        let mut current = end;

        while let Some(prev) = labels.predecessor(current) {
            steps.push(prev);
            current = prev;
        }
        steps.reverse();
        steps
    };
    Path::new(steps, labels.distance(end))
}
