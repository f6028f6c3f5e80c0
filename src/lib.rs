//! grid_planner
//! ============
//!
//! A grid-based path-planning core. Given a static 2D occupancy grid and a
//! pair of cells, [`Planner`] computes either a shortest/weighted path
//! between them (BFS, Dijkstra, A*, or weighted A*) or a local "cost-to-go"
//! window of true shortest distances from every reachable cell in the
//! window to a fixed goal.
//!
//! The planner is stateful: it owns its grid and a scratch state sized
//! `width * height` for its whole lifetime, and every search amortizes
//! reuse of that scratch state via an epoch counter rather than
//! re-allocating or re-zeroing memory. It does not mutate the grid, does
//! not replan dynamically, and only understands unit/diagonal edge costs
//! (`1.0` / `sqrt(2)`) under 4- or 8-connectivity.

mod grid;
mod heuristic;
mod neighbors;
mod node;
mod planner;
mod scratch;
mod search;
mod types;

pub use self::{
    grid::Grid,
    heuristic::SQRT_2,
    planner::Planner,
    types::{AlgorithmKind, Connectivity, Heuristic, SearchResult},
};
