/// Which search routine `Planner::find_path` should run.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// Unweighted breadth-first search. Minimizes edge count, not geometric
    /// length, under 8-connectivity.
    Bfs,
    /// Uniform-cost search. Always optimal. Implemented as the A*-like
    /// engine with `heuristic = Zero` and `weight = 0`.
    Dijkstra,
    /// Canonical A*. Optimal when `heuristic` is admissible and `weight ==
    /// 1.0`.
    AStar,
    /// Weighted A*. Trades optimality (bound `weight * optimal`) for speed.
    WAStar,
}

/// Which heuristic the A*-like engine evaluates against the goal.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Always `0`. Turns the A*-like engine into plain Dijkstra.
    Zero,
    /// `dx + dy`. Admissible only under 4-connectivity.
    Manhattan,
    /// `sqrt(dx^2 + dy^2)`. Admissible under 4- and 8-connectivity.
    Euclidean,
    /// Exact remaining cost on an unobstructed 8-connected grid with edge
    /// costs `{1, sqrt(2)}`. Admissible.
    Octile,
}

/// Grid connectivity: orthogonal moves only, or orthogonal plus diagonal.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Four,
    Eight,
}

impl Connectivity {
    #[inline]
    #[must_use]
    pub(crate) fn allows_diagonals(self) -> bool {
        matches!(self, Connectivity::Eight)
    }
}

/// The uniform result record returned by `Planner::find_path`.
///
/// Every failure mode described in spec.md section 7 (out-of-bounds
/// endpoint, blocked endpoint, unreachable goal) is surfaced through this
/// record rather than a panic or `Result::Err`: `found` is `false`, `path`
/// is empty, and `path_length` is `0.0`. `expanded_nodes` still reflects the
/// work actually done (zero for a rejected endpoint, the full exhaustive
/// count for an unreachable goal).
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Cell coordinates from `start` to `goal`, inclusive. Empty when
    /// `found` is `false`.
    pub path: Vec<(usize, usize)>,
    pub found: bool,
    pub expanded_nodes: u64,
    /// Sum of edge costs along `path`. `0.0` when `found` is `false`.
    pub path_length: f64,
    /// Wall-clock duration of the search, in seconds.
    pub execution_time: f64,
}

impl SearchResult {
    pub(crate) fn not_found() -> Self {
        Self {
            path: Vec::new(),
            found: false,
            expanded_nodes: 0,
            path_length: 0.0,
            execution_time: 0.0,
        }
    }
}
