/// Options for configuring a [`Graph`](crate::Graph)
///
/// Default options:
/// ```
/// # use weighted_paths::SearchConfig;
/// assert_eq!(
///     SearchConfig {
///         reject_negative_costs: true,
///         check_stale_state: true,
///         frontier_capacity: 16,
///     },
///     Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// `true` (default): adding an Edge with a negative cost fails with
    /// [`GraphError::InvalidEdgeWeight`](crate::GraphError::InvalidEdgeWeight).
    ///
    /// `false`: negative costs are stored. Finalized Nodes are never revisited, so a search over
    /// negative Edges may return a Path that is not the cheapest one.
    ///
    /// NaN and infinite costs are rejected either way. Finite costs are not bounded, so a Path
    /// whose sum exceeds `f64::MAX` overflows to infinity and counts as unreachable.
    pub reject_negative_costs: bool,
    /// `true` (default): [`Graph::search`](crate::Graph::search) fails with
    /// [`GraphError::StaleSearchState`](crate::GraphError::StaleSearchState) if any Node still
    /// holds a distance or visited flag from an earlier search.
    ///
    /// `false`: the leftover state is used as is, and the result is likely wrong.
    pub check_stale_state: bool,
    /// The number of frontier entries to allocate up front for every search (defaults to `16`)
    pub frontier_capacity: usize,
}

impl SearchConfig {
    /// The default options: everything is validated.
    ///
    /// Values:
    /// ```
    /// # use weighted_paths::SearchConfig;
    /// assert_eq!(SearchConfig::STRICT, SearchConfig::default());
    /// ```
    pub const STRICT: SearchConfig = SearchConfig {
        reject_negative_costs: true,
        check_stale_state: true,
        frontier_capacity: 16,
    };
    /// Options that accept any numeric cost and trust the caller to reset the Graph.
    ///
    /// Values:
    /// ```
    /// # use weighted_paths::SearchConfig;
    /// assert_eq!(
    ///     SearchConfig {
    ///         reject_negative_costs: false,
    ///         check_stale_state: false,
    ///         frontier_capacity: 16,
    ///     },
    ///     SearchConfig::PERMISSIVE
    /// );
    /// ```
    pub const PERMISSIVE: SearchConfig = SearchConfig {
        reject_negative_costs: false,
        check_stale_state: false,
        frontier_capacity: 16,
    };
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig::STRICT
    }
}
