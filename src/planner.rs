use crate::grid::Grid;
use crate::neighbors::NeighborBuffer;
use crate::scratch::Scratch;
use crate::search::{run_astar_like, run_bfs, run_cost_to_go};
use crate::types::{AlgorithmKind, Connectivity, Heuristic, SearchResult};

/// A stateful planner bound to one grid.
///
/// `Planner` owns its grid and its scratch state for its whole lifetime
/// (spec.md section 3/5): searches never deallocate, and repeated calls
/// amortize reuse of the `dist`/`pred`/`epoch` arrays rather than
/// re-initializing `width * height` memory on every call. A caller running
/// several planners concurrently must give each its own instance — the
/// scratch state is exclusive to one planner and must not be shared across
/// in-flight searches.
#[derive(Debug)]
pub struct Planner {
    grid: Grid,
    scratch: Scratch,
    neighbor_buf: NeighborBuffer,
}

impl Planner {
    /// Build a planner over a `width * height` row-major occupancy buffer
    /// (`0` = free, nonzero = blocked).
    ///
    /// # Panics
    ///
    /// Panics if `width`/`height` is zero or `grid.len() != width *
    /// height` — see [`Grid::new`].
    #[must_use]
    pub fn new(width: usize, height: usize, grid: Vec<u8>) -> Self {
        let grid = Grid::new(width, height, grid);
        let scratch = Scratch::new(grid.len());
        Self {
            grid,
            scratch,
            neighbor_buf: NeighborBuffer::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Find a path from `(start_x, start_y)` to `(goal_x, goal_y)` using
    /// `algo`. Every runtime failure mode (out-of-bounds endpoint, blocked
    /// endpoint, unreachable goal) is reported through the returned
    /// [`SearchResult`] rather than a panic — see spec.md section 7. The
    /// instance remains fully reusable after any such result.
    ///
    /// Endpoints are validated before any cell id is computed from them
    /// (fixing an ordering bug present in the source this core was
    /// distilled from, see DESIGN.md): an out-of-range coordinate never
    /// reaches `Grid::to_index`.
    #[allow(clippy::too_many_arguments)]
    pub fn find_path(
        &mut self,
        start_x: usize,
        start_y: usize,
        goal_x: usize,
        goal_y: usize,
        algo: AlgorithmKind,
        heuristic: Heuristic,
        weight: f64,
        connectivity: Connectivity,
    ) -> SearchResult {
        if !self.grid.in_bounds(start_x, start_y) || !self.grid.in_bounds(goal_x, goal_y) {
            return SearchResult::not_found();
        }

        let start_id = self.grid.to_index(start_x, start_y);
        let goal_id = self.grid.to_index(goal_x, goal_y);

        if !self.grid.is_free(start_id) || !self.grid.is_free(goal_id) {
            return SearchResult::not_found();
        }

        match algo {
            AlgorithmKind::Bfs => run_bfs(
                &self.grid,
                &mut self.scratch,
                &mut self.neighbor_buf,
                start_id,
                goal_id,
                connectivity,
            ),
            AlgorithmKind::Dijkstra => run_astar_like(
                &self.grid,
                &mut self.scratch,
                &mut self.neighbor_buf,
                start_id,
                goal_id,
                Heuristic::Zero,
                0.0,
                connectivity,
            ),
            AlgorithmKind::AStar | AlgorithmKind::WAStar => run_astar_like(
                &self.grid,
                &mut self.scratch,
                &mut self.neighbor_buf,
                start_id,
                goal_id,
                heuristic,
                weight,
                connectivity,
            ),
        }
    }

    /// [`Planner::find_path`] with the defaults spec.md section 6 gives
    /// for `heuristic` (`Manhattan`), `weight` (`1.0`), and `connectivity`
    /// (`Four`).
    pub fn find_path_default(
        &mut self,
        start_x: usize,
        start_y: usize,
        goal_x: usize,
        goal_y: usize,
        algo: AlgorithmKind,
    ) -> SearchResult {
        self.find_path(
            start_x,
            start_y,
            goal_x,
            goal_y,
            algo,
            Heuristic::Manhattan,
            1.0,
            Connectivity::Four,
        )
    }

    /// Fill a `(2r+1) x (2r+1)` window of true shortest-path costs from
    /// every in-window cell to `(goal_x, goal_y)`, via a single reverse
    /// Dijkstra (spec.md section 4.7). Row-major, outer index is the
    /// y-offset from `agent_y - radius`. A cell that is out-of-bounds,
    /// blocked, or unreachable holds `-1.0`.
    #[allow(clippy::too_many_arguments)]
    pub fn get_cost2go_window(
        &mut self,
        agent_x: usize,
        agent_y: usize,
        goal_x: usize,
        goal_y: usize,
        radius: usize,
        connectivity: Connectivity,
        fast_break: bool,
    ) -> Vec<Vec<f64>> {
        run_cost_to_go(
            &self.grid,
            &mut self.scratch,
            &mut self.neighbor_buf,
            (agent_x, agent_y),
            (goal_x, goal_y),
            radius,
            connectivity,
            fast_break,
        )
    }
}
