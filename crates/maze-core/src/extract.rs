//! Pixel-buffer extraction: raw image data to a traversability grid.
//!
//! The rule is the one the solver's users rely on when preparing maze
//! images: a cell is passable iff its **red** channel is at full intensity
//! (255). Green, blue, and alpha are ignored, so white strokes and colored
//! path overlays from a previous solve both read as passable, while black
//! walls and anything with a dimmed red component read as blocked.

use std::fmt;

use crate::geom::Point;
use crate::grid::MazeGrid;

/// Errors from [`extract_grid`]. Both are input errors; neither is
/// retryable without a different buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The buffer has zero width/height, fewer than 3 channels, or its
    /// length does not cover `width * height * channels` samples.
    InvalidShape {
        width: usize,
        height: usize,
        channels: usize,
        len: usize,
    },
    /// No passable cell exists anywhere in the image.
    NoTraversableCells,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape {
                width,
                height,
                channels,
                len,
            } => write!(
                f,
                "invalid image shape: {width}x{height} with {channels} channel(s), {len} samples"
            ),
            Self::NoTraversableCells => write!(f, "image contains no traversable cells"),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Extract a traversability grid and start/goal cells from raw pixel data.
///
/// `data` holds `channels` interleaved samples per pixel in row-major order;
/// at least 3 channels (RGB-first) are required. A pixel is passable iff its
/// first (red) sample equals 255.
///
/// The start cell is the first passable cell in row-major scan order and the
/// goal is the last; they coincide when exactly one passable cell exists.
///
/// Pure function of the buffer; the caller keeps ownership of `data`.
pub fn extract_grid(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<(MazeGrid, Point, Point), ExtractError> {
    if width == 0 || height == 0 || channels < 3 || data.len() != width * height * channels {
        return Err(ExtractError::InvalidShape {
            width,
            height,
            channels,
            len: data.len(),
        });
    }

    let mut cells = Vec::with_capacity(width * height);
    let mut start: Option<Point> = None;
    let mut goal: Option<Point> = None;

    for y in 0..height {
        for x in 0..width {
            let red = data[(y * width + x) * channels];
            let open = red == u8::MAX;
            cells.push(open);
            if open {
                let p = Point::new(x as i32, y as i32);
                if start.is_none() {
                    start = Some(p);
                }
                goal = Some(p);
            }
        }
    }

    match (start, goal) {
        (Some(s), Some(g)) => Ok((MazeGrid::from_parts(width as i32, height as i32, cells), s, g)),
        _ => Err(ExtractError::NoTraversableCells),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Build an RGB buffer from per-pixel red values, green/blue zeroed.
    fn rgb(reds: &[u8]) -> Vec<u8> {
        reds.iter().flat_map(|&r| [r, 0, 0]).collect()
    }

    #[test]
    fn three_by_one_corridor() {
        let data = rgb(&[255, 0, 255]);
        let (grid, start, goal) = extract_grid(&data, 3, 1, 3).unwrap();
        assert_eq!(start, Point::new(0, 0));
        assert_eq!(goal, Point::new(2, 0));
        let flags: Vec<bool> = grid.iter().map(|(_, v)| v).collect();
        assert_eq!(flags, vec![true, false, true]);
    }

    #[test]
    fn all_black_has_no_traversable_cells() {
        for (w, h) in [(1, 1), (3, 3), (17, 5)] {
            let data = rgb(&vec![0u8; w * h]);
            assert_eq!(
                extract_grid(&data, w, h, 3),
                Err(ExtractError::NoTraversableCells)
            );
        }
    }

    #[test]
    fn red_channel_is_the_sole_criterion() {
        // Green/blue may be anything; a colored overlay with full red still
        // reads as passable, and near-white (red 254) does not.
        let data = [255, 7, 200, 254, 255, 255, 255, 180, 148];
        let (grid, start, goal) = extract_grid(&data, 3, 1, 3).unwrap();
        assert!(grid.passable(Point::new(0, 0)));
        assert!(!grid.passable(Point::new(1, 0)));
        assert!(grid.passable(Point::new(2, 0)));
        assert_eq!(start, Point::new(0, 0));
        assert_eq!(goal, Point::new(2, 0));
    }

    #[test]
    fn alpha_channel_is_ignored() {
        let data = [255, 0, 0, 0, 0, 0, 0, 255];
        let (grid, start, goal) = extract_grid(&data, 2, 1, 4).unwrap();
        assert!(grid.passable(Point::new(0, 0)));
        assert!(!grid.passable(Point::new(1, 0)));
        assert_eq!(start, goal);
    }

    #[test]
    fn single_passable_cell_is_both_start_and_goal() {
        let data = rgb(&[0, 0, 255, 0]);
        let (_, start, goal) = extract_grid(&data, 2, 2, 3).unwrap();
        assert_eq!(start, Point::new(0, 1));
        assert_eq!(goal, start);
    }

    #[test]
    fn goal_is_last_in_row_major_order() {
        let data = rgb(&[0, 255, 255, 0]);
        let (_, start, goal) = extract_grid(&data, 2, 2, 3).unwrap();
        assert_eq!(start, Point::new(1, 0));
        assert_eq!(goal, Point::new(0, 1));
    }

    #[test]
    fn rejects_malformed_shapes() {
        let data = rgb(&[255, 255]);
        assert!(matches!(
            extract_grid(&data, 2, 1, 2),
            Err(ExtractError::InvalidShape { channels: 2, .. })
        ));
        assert!(matches!(
            extract_grid(&data, 0, 1, 3),
            Err(ExtractError::InvalidShape { width: 0, .. })
        ));
        assert!(matches!(
            extract_grid(&data, 2, 0, 3),
            Err(ExtractError::InvalidShape { height: 0, .. })
        ));
        // Length mismatch: buffer too short for the declared shape.
        assert!(matches!(
            extract_grid(&data, 4, 1, 3),
            Err(ExtractError::InvalidShape { .. })
        ));
    }
}
