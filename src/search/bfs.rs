use std::collections::VecDeque;
use std::time::Instant;

use crate::grid::Grid;
use crate::neighbors::NeighborBuffer;
use crate::scratch::Scratch;
use crate::search::{geometric_length, reconstruct_path};
use crate::types::{Connectivity, SearchResult};

/// Unweighted breadth-first search. Minimizes edge count; `path_length` is
/// then recomputed as the true geometric cost of the returned path (spec.md
/// section 4.5) so the field stays comparable across engines, even though
/// the BFS path itself need not be the geometrically shortest one under
/// 8-connectivity. This is deliberate: do not "fix" BFS to return the
/// geometrically optimal path, that would just replicate Dijkstra.
pub(crate) fn run_bfs(
    grid: &Grid,
    scratch: &mut Scratch,
    neighbor_buf: &mut NeighborBuffer,
    start: usize,
    goal: usize,
    connectivity: Connectivity,
) -> SearchResult {
    let start_time = Instant::now();
    scratch.begin();

    let mut queue = VecDeque::new();
    scratch.set_root(start);
    queue.push_back(start);

    let mut expanded_nodes: u64 = 0;
    let mut found = false;

    while let Some(current) = queue.pop_front() {
        expanded_nodes += 1;

        if current == goal {
            found = true;
            break;
        }

        neighbor_buf.generate(grid, current, connectivity);
        for (next, _cost) in neighbor_buf.iter() {
            if !scratch.touched(next) {
                scratch.set_pred(next, current);
                queue.push_back(next);
            }
        }
    }

    let execution_time = start_time.elapsed().as_secs_f64();

    if !found {
        let mut result = SearchResult::not_found();
        result.expanded_nodes = expanded_nodes;
        result.execution_time = execution_time;
        return result;
    }

    let path = reconstruct_path(grid, scratch, goal);
    let path_length = geometric_length(&path);

    SearchResult {
        path,
        found: true,
        expanded_nodes,
        path_length,
        execution_time,
    }
}
