use maze_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the A* heuristic: admissible and consistent for 4-connected
/// movement with unit step cost.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, 4)), 7);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
        assert_eq!(manhattan(Point::new(-1, 0), Point::new(1, 0)), 2);
    }
}
