use std::collections::VecDeque;

use maze_core::{MazeGrid, Point};

/// A position with an associated distance, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCell {
    pub pos: Point,
    pub dist: i32,
}

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in BFS distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathSearcher
// ---------------------------------------------------------------------------

/// Central coordinator for searches on a maze grid.
///
/// `PathSearcher` owns all internal caches (the A* node array, the BFS
/// distance map and queue) so that repeated solves incur no allocations
/// after the first use. Searches leave no semantic state behind: A* nodes
/// are lazily invalidated by a generation counter and the BFS map is reset
/// on every call, so each query is a pure function of its arguments.
pub struct PathSearcher {
    pub(crate) width: usize,
    pub(crate) height: usize,
    // A* caches
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_queue: VecDeque<usize>,
    pub(crate) bfs_results: Vec<PathCell>,
}

impl PathSearcher {
    /// Create a searcher sized for `grid`.
    pub fn new(grid: &MazeGrid) -> Self {
        let len = grid.len();
        Self {
            width: grid.width() as usize,
            height: grid.height() as usize,
            nodes: vec![Node::default(); len],
            generation: 0,
            bfs_map: vec![UNREACHABLE; len],
            bfs_queue: VecDeque::new(),
            bfs_results: Vec::new(),
        }
    }

    /// Retarget the searcher at `grid`, reallocating caches only if the
    /// grid is larger than anything seen before.
    ///
    /// When the new grid fits within existing capacity the caches are kept
    /// and the A* generation is bumped so stale entries are ignored.
    pub fn fit_to(&mut self, grid: &MazeGrid) {
        let new_len = grid.len();
        self.width = grid.width() as usize;
        self.height = grid.height() as usize;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            self.bfs_results.clear();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;

        self.bfs_map.clear();
        self.bfs_map.resize(new_len, UNREACHABLE);
        self.bfs_queue.clear();
        self.bfs_results.clear();
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_to_smaller_preserves_capacity() {
        let big = MazeGrid::from_fn(20, 20, |_| true);
        let mut ps = PathSearcher::new(&big);
        let original_cap = ps.nodes.len(); // 400

        let small = MazeGrid::from_fn(5, 5, |_| true);
        ps.fit_to(&small);
        assert_eq!(ps.nodes.len(), original_cap); // still 400
        assert_eq!(ps.width, 5);
        assert_eq!(ps.height, 5);
        // Generation bumped so stale entries are ignored.
        assert!(ps.generation > 0);
    }

    #[test]
    fn fit_to_larger_reallocates() {
        let small = MazeGrid::from_fn(5, 5, |_| true);
        let mut ps = PathSearcher::new(&small);
        let old_cap = ps.nodes.len(); // 25

        let big = MazeGrid::from_fn(20, 20, |_| true);
        ps.fit_to(&big);
        assert!(ps.nodes.len() > old_cap);
        assert_eq!(ps.nodes.len(), 400);
        assert_eq!(ps.bfs_map.len(), 400);
    }

    #[test]
    fn index_round_trip() {
        let grid = MazeGrid::from_fn(7, 3, |_| true);
        let ps = PathSearcher::new(&grid);
        for y in 0..3 {
            for x in 0..7 {
                let p = Point::new(x, y);
                let i = ps.idx(p).unwrap();
                assert_eq!(ps.point(i), p);
            }
        }
        assert_eq!(ps.idx(Point::new(7, 0)), None);
        assert_eq!(ps.idx(Point::new(0, 3)), None);
        assert_eq!(ps.idx(Point::new(-1, 0)), None);
    }

    #[test]
    fn heap_entry_orders_by_smallest_f() {
        let mut heap = std::collections::BinaryHeap::new();
        heap.push(HeapEntry { idx: 0, f: 9 });
        heap.push(HeapEntry { idx: 1, f: 2 });
        heap.push(HeapEntry { idx: 2, f: 5 });
        assert_eq!(heap.pop().unwrap().f, 2);
        assert_eq!(heap.pop().unwrap().f, 5);
        assert_eq!(heap.pop().unwrap().f, 9);
    }
}
