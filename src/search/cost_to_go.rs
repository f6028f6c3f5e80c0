use std::collections::BinaryHeap;

use crate::grid::Grid;
use crate::neighbors::NeighborBuffer;
use crate::node::Node;
use crate::scratch::Scratch;
use crate::types::Connectivity;

const EPS: f64 = 1e-9;

/// Sentinel written for a window cell that is out-of-bounds, blocked, or
/// unreachable from the goal.
pub(crate) const UNREACHABLE: f64 = -1.0;

/// Fill a `(2r+1) x (2r+1)` window of true shortest-path costs *to* `goal`
/// by running a single reverse Dijkstra from the goal (spec.md section
/// 4.7). The window is purely a reporting mask: cells outside it are still
/// expanded freely when a path to an in-window cell detours through them.
#[allow(clippy::too_many_arguments)]
pub(crate) fn run_cost_to_go(
    grid: &Grid,
    scratch: &mut Scratch,
    neighbor_buf: &mut NeighborBuffer,
    agent: (usize, usize),
    goal: (usize, usize),
    radius: usize,
    connectivity: Connectivity,
    fast_break: bool,
) -> Vec<Vec<f64>> {
    let size = 2 * radius + 1;
    let mut window = vec![vec![UNREACHABLE; size]; size];

    if !grid.in_bounds(goal.0, goal.1) {
        return window;
    }
    let goal_id = grid.to_index(goal.0, goal.1);
    if !grid.is_free(goal_id) {
        return window;
    }

    let top_left_x = agent.0 as isize - radius as isize;
    let top_left_y = agent.1 as isize - radius as isize;

    let valid_targets = count_valid_targets(grid, top_left_x, top_left_y, size);
    if valid_targets == 0 {
        return window;
    }

    scratch.begin();
    scratch.set_root(goal_id);

    let mut open_set = BinaryHeap::new();
    let mut seq: u64 = 0;
    open_set.push(Node {
        id: goal_id,
        f: 0.0,
        g: 0.0,
        seq,
    });
    seq += 1;

    let mut found_in_window: u32 = 0;

    while let Some(current) = open_set.pop() {
        if current.g > scratch.get_dist(current.id) + EPS {
            continue;
        }

        let (x, y) = grid.to_coord(current.id);
        if let Some((lx, ly)) = window_coord(top_left_x, top_left_y, size, x, y) {
            if window[ly][lx] < 0.0 {
                window[ly][lx] = current.g;
                found_in_window += 1;
            }
        }

        if fast_break && found_in_window >= valid_targets {
            break;
        }

        neighbor_buf.generate(grid, current.id, connectivity);
        for (next, edge_cost) in neighbor_buf.iter() {
            let new_g = scratch.get_dist(current.id) + edge_cost;
            if new_g < scratch.get_dist(next) {
                scratch.set_dist(next, new_g);
                open_set.push(Node {
                    id: next,
                    f: new_g,
                    g: new_g,
                    seq,
                });
                seq += 1;
            }
        }
    }

    window
}

fn count_valid_targets(grid: &Grid, top_left_x: isize, top_left_y: isize, size: usize) -> u32 {
    let mut count = 0;
    for ly in 0..size {
        for lx in 0..size {
            let gx = top_left_x + lx as isize;
            let gy = top_left_y + ly as isize;
            if gx < 0 || gy < 0 {
                continue;
            }
            let (gx, gy) = (gx as usize, gy as usize);
            if grid.in_bounds(gx, gy) && grid.is_free(grid.to_index(gx, gy)) {
                count += 1;
            }
        }
    }
    count
}

fn window_coord(
    top_left_x: isize,
    top_left_y: isize,
    size: usize,
    x: usize,
    y: usize,
) -> Option<(usize, usize)> {
    let lx = x as isize - top_left_x;
    let ly = y as isize - top_left_y;
    if lx >= 0 && ly >= 0 && (lx as usize) < size && (ly as usize) < size {
        Some((lx as usize, ly as usize))
    } else {
        None
    }
}
