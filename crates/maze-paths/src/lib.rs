//! Shortest-path search over binary maze grids.
//!
//! Two algorithms operate on a [`MazeGrid`](maze_core::MazeGrid):
//!
//! - **A\*** shortest-path search ([`PathSearcher::astar_path`], or the
//!   one-shot [`find_path`]) — 4-connected movement, unit step cost,
//!   Manhattan heuristic.
//! - **BFS** unweighted distance maps ([`PathSearcher::bfs_map`]).
//!
//! All queries go through [`PathSearcher`], which owns and reuses internal
//! caches so that repeated solves incur zero allocations after warm-up.
//! Every call is nevertheless independent: stale state from a previous
//! search is invalidated by generation counters, never reused.

mod astar;
mod bfs;
mod distance;
mod searcher;

pub use astar::find_path;
pub use distance::manhattan;
pub use searcher::{PathCell, PathSearcher, UNREACHABLE};
