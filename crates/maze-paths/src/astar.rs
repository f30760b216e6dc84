use std::collections::BinaryHeap;

use maze_core::{MazeGrid, Point};

use crate::PathSearcher;
use crate::distance::manhattan;
use crate::searcher::HeapEntry;

impl PathSearcher {
    /// Compute a shortest path from `from` to `to` using A*.
    ///
    /// Movement is 4-connected with unit step cost; the heuristic is
    /// Manhattan distance. Returns the full path including both endpoints,
    /// or `None` if no path exists — an unreachable goal is a normal
    /// result, not an error. A blocked or out-of-bounds endpoint likewise
    /// yields `None`.
    ///
    /// The frontier uses lazy deletion: every improvement pushes a fresh
    /// heap entry, and pops whose node is no longer open (or belongs to a
    /// previous search generation) are discarded. Ties on `f` resolve by
    /// heap structure, which is deterministic for fixed inputs, so repeated
    /// calls return identical paths.
    pub fn astar_path(&mut self, grid: &MazeGrid, from: Point, to: Point) -> Option<Vec<Point>> {
        self.fit_to(grid);

        if !grid.passable(from) || !grid.passable(to) {
            return None;
        }
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        open.push(HeapEntry {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            for np in current_point.neighbors_4() {
                if !grid.passable(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered this search.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, to);
                n.parent = ci;
                n.open = true;

                open.push(HeapEntry { idx: ni, f: n.f });
            }
        };

        if !found {
            return None;
        }

        // Reconstruct path by following parent links, then reverse.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

/// One-shot shortest-path query on a grid.
///
/// Convenience wrapper that builds a throwaway [`PathSearcher`]; callers
/// solving many grids of similar size should keep a searcher around and use
/// [`PathSearcher::astar_path`] directly.
pub fn find_path(grid: &MazeGrid, from: Point, to: Point) -> Option<Vec<Point>> {
    PathSearcher::new(grid).astar_path(grid, from, to)
}
