//! The binary traversability grid.

use std::fmt;

use crate::geom::Point;

/// A rectangular grid of boolean traversability flags.
///
/// `true` means passable. The grid is immutable once constructed: a solve
/// consumes exactly the grid it was handed, and callers wanting a different
/// maze build a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGrid {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl MazeGrid {
    /// Build a grid by evaluating `f` at every cell, in row-major order.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> bool) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        let mut cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(Point::new(x, y)));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub(crate) fn from_parts(width: i32, height: i32, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Parse an ASCII map: `.` is passable, `#` is a wall.
    ///
    /// All lines must have the same width. Intended for tests and demos.
    pub fn parse(map: &str) -> Result<Self, GridParseError> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0i32;
        for line in map.lines() {
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    return Err(GridParseError::InconsistentWidth(map.to_string()));
                }
                Some(_) => {}
            }
            for (x, ch) in line.chars().enumerate() {
                match ch {
                    '.' => cells.push(true),
                    '#' => cells.push(false),
                    _ => {
                        return Err(GridParseError::InvalidRune {
                            ch,
                            pos: Point::new(x as i32, height),
                        });
                    }
                }
            }
            height += 1;
        }
        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(GridParseError::Empty);
        }
        Ok(Self::from_parts(width as i32, height, cells))
    }

    /// Width of the grid, in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid, in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies within the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// Whether the cell at `p` is passable. Out-of-bounds points are not.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.contains(p) && self.cells[(p.y * self.width + p.x) as usize]
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Point::new(i as i32 % w, i as i32 / w), v))
    }
}

/// Errors from [`MazeGrid::parse`].
#[derive(Debug, Clone)]
pub enum GridParseError {
    /// Lines have inconsistent widths.
    InconsistentWidth(String),
    /// A character other than `.` or `#` was found.
    InvalidRune { ch: char, pos: Point },
    /// The map has no cells.
    Empty,
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth(s) => write!(f, "grid map has inconsistent line widths:\n{s}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid map contains invalid rune {ch:?} at {pos}")
            }
            Self::Empty => write!(f, "grid map is empty"),
        }
    }
}

impl std::error::Error for GridParseError {}
