mod astar_like;
mod bfs;
mod cost_to_go;

pub(crate) use astar_like::run_astar_like;
pub(crate) use bfs::run_bfs;
pub(crate) use cost_to_go::run_cost_to_go;

use crate::grid::Grid;
use crate::heuristic::SQRT_2;
use crate::scratch::Scratch;

/// Walk predecessors from `goal` back to the search's root, reversing so
/// the result runs root-first, goal-last. Returns an empty vector if
/// `goal` was never touched.
pub(crate) fn reconstruct_path(grid: &Grid, scratch: &Scratch, goal: usize) -> Vec<(usize, usize)> {
    if !scratch.touched(goal) {
        return Vec::new();
    }
    let mut rev = vec![goal];
    let mut current = goal;
    while let Some(p) = scratch.get_pred(current) {
        rev.push(p);
        current = p;
    }
    rev.reverse();
    rev.into_iter().map(|id| grid.to_coord(id)).collect()
}

/// Sum the geometric edge cost (1.0 orthogonal, sqrt(2) diagonal) of each
/// consecutive step in `path`. Used by BFS to report a length comparable
/// to the weighted engines even though BFS itself minimizes edge count.
pub(crate) fn geometric_length(path: &[(usize, usize)]) -> f64 {
    path.windows(2)
        .map(|w| {
            let (x1, y1) = w[0];
            let (x2, y2) = w[1];
            if x1 != x2 && y1 != y2 {
                SQRT_2
            } else {
                1.0
            }
        })
        .sum()
}
