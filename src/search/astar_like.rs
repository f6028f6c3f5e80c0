use std::collections::BinaryHeap;
use std::time::Instant;

use crate::grid::Grid;
use crate::neighbors::NeighborBuffer;
use crate::node::Node;
use crate::scratch::Scratch;
use crate::search::reconstruct_path;
use crate::types::{Connectivity, Heuristic, SearchResult};

/// Tolerance used to detect and skip stale heap entries left behind by
/// lazy deletion (spec.md section 4.6/7).
const EPS: f64 = 1e-9;

/// The single engine covering Dijkstra (`weight == 0` or `heuristic ==
/// Zero`), canonical A* (`weight == 1`), and weighted A* (`weight > 1`).
/// Parameterizing on `heuristic`/`weight` rather than branching per
/// algorithm keeps one lazy-deletion discipline and one scratch-state
/// contract shared by every variant.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_astar_like(
    grid: &Grid,
    scratch: &mut Scratch,
    neighbor_buf: &mut NeighborBuffer,
    start: usize,
    goal: usize,
    heuristic: Heuristic,
    weight: f64,
    connectivity: Connectivity,
) -> SearchResult {
    let start_time = Instant::now();
    scratch.begin();

    let start_coord = grid.to_coord(start);
    let goal_coord = grid.to_coord(goal);

    let mut open_set = BinaryHeap::new();
    let mut seq: u64 = 0;

    scratch.set_root(start);
    open_set.push(Node {
        id: start,
        f: weight * heuristic.estimate(start_coord, goal_coord),
        g: 0.0,
        seq,
    });
    seq += 1;

    let mut expanded_nodes: u64 = 0;
    let mut found = false;

    while let Some(current) = open_set.pop() {
        if current.g > scratch.get_dist(current.id) + EPS {
            continue;
        }

        if current.id == goal {
            found = true;
            break;
        }

        expanded_nodes += 1;

        neighbor_buf.generate(grid, current.id, connectivity);
        for (next, edge_cost) in neighbor_buf.iter() {
            let new_g = scratch.get_dist(current.id) + edge_cost;
            if new_g < scratch.get_dist(next) {
                scratch.set_dist(next, new_g);
                scratch.set_pred(next, current.id);
                let h = weight * heuristic.estimate(grid.to_coord(next), goal_coord);
                open_set.push(Node {
                    id: next,
                    f: new_g + h,
                    g: new_g,
                    seq,
                });
                seq += 1;
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
    let path_length = scratch.get_dist(goal);

    SearchResult {
        path,
        found: true,
        expanded_nodes,
        path_length,
        execution_time,
    }
}
