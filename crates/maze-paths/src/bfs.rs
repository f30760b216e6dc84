use maze_core::{MazeGrid, Point};

use crate::PathSearcher;
use crate::searcher::{PathCell, UNREACHABLE};

impl PathSearcher {
    /// Compute a breadth-first distance map from `source`.
    ///
    /// Each step has cost 1, so the recorded distance at a cell is the true
    /// shortest-path length from the source. Returns a slice of all reached
    /// cells in discovery order; query individual cells afterwards with
    /// [`distance_at`](Self::distance_at).
    pub fn bfs_map(&mut self, grid: &MazeGrid, source: Point) -> &[PathCell] {
        self.fit_to(grid);

        for v in self.bfs_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.bfs_results.clear();
        self.bfs_queue.clear();

        if !grid.passable(source) {
            return &self.bfs_results;
        }
        let Some(si) = self.idx(source) else {
            return &self.bfs_results;
        };
        self.bfs_map[si] = 0;
        self.bfs_queue.push_back(si);
        self.bfs_results.push(PathCell {
            pos: source,
            dist: 0,
        });

        while let Some(ci) = self.bfs_queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            let cp = self.point(ci);

            for np in cp.neighbors_4() {
                if !grid.passable(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[ni] = current_dist + 1;
                self.bfs_queue.push_back(ni);
                self.bfs_results.push(PathCell {
                    pos: np,
                    dist: current_dist + 1,
                });
            }
        }

        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is out of bounds or was not
    /// reached by the last [`bfs_map`](Self::bfs_map) call.
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_in_open_room() {
        let g = MazeGrid::parse(
            "\
...
...
...",
        )
        .unwrap();
        let mut ps = PathSearcher::new(&g);
        let reached = ps.bfs_map(&g, Point::new(0, 0));
        assert_eq!(reached.len(), 9);
        assert_eq!(ps.distance_at(Point::new(0, 0)), 0);
        assert_eq!(ps.distance_at(Point::new(2, 2)), 4);
        assert_eq!(ps.distance_at(Point::new(1, 2)), 3);
    }

    #[test]
    fn walls_are_unreachable() {
        let g = MazeGrid::parse(
            "\
.#.
.#.",
        )
        .unwrap();
        let mut ps = PathSearcher::new(&g);
        ps.bfs_map(&g, Point::new(0, 0));
        assert_eq!(ps.distance_at(Point::new(0, 1)), 1);
        assert_eq!(ps.distance_at(Point::new(1, 0)), UNREACHABLE);
        assert_eq!(ps.distance_at(Point::new(2, 1)), UNREACHABLE);
        assert_eq!(ps.distance_at(Point::new(9, 9)), UNREACHABLE);
    }

    #[test]
    fn blocked_source_reaches_nothing() {
        let g = MazeGrid::parse("#.").unwrap();
        let mut ps = PathSearcher::new(&g);
        assert!(ps.bfs_map(&g, Point::new(0, 0)).is_empty());
        assert_eq!(ps.distance_at(Point::new(1, 0)), UNREACHABLE);
    }
}
