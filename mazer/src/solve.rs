//! The extract → search → overlay pipeline.

use image::{Rgb, RgbImage};
use maze_core::{ExtractError, Point, extract_grid};
use maze_paths::PathSearcher;

/// Tuning for the solve pipeline, passed explicitly at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Color painted over path cells in the output image.
    pub path_color: [u8; 3],
    /// Brush radius for freehand drawing, in pixels.
    pub brush_radius: u32,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            path_color: [33, 180, 148],
            brush_radius: 10,
        }
    }
}

/// Outcome of a solve: where the scan placed the endpoints, the path if one
/// exists, and the overlaid output image. `path: None` means the goal is
/// unreachable — a normal result, distinct from the extraction errors, and
/// `solved` is `None` with it.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub start: Point,
    pub goal: Point,
    pub path: Option<Vec<Point>>,
    /// A copy of the input with the path painted in the configured color.
    pub solved: Option<RgbImage>,
}

impl SolveReport {
    /// Path length in steps (edges), if a path was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

/// Solve the maze encoded in `img`: extract, search, overlay.
///
/// The image is read through the red-channel rule of [`extract_grid`]; the
/// start and goal are the first and last passable pixels in row-major
/// order. When a path exists the report carries a copy of the input with
/// the path recolored per `config.path_color`, pixel for pixel. The input
/// image is left untouched.
pub fn solve_image(img: &RgbImage, config: &SolveConfig) -> Result<SolveReport, ExtractError> {
    let (width, height) = img.dimensions();
    let (grid, start, goal) = extract_grid(img.as_raw(), width as usize, height as usize, 3)?;
    log::debug!("extracted {width}x{height} grid, start {start}, goal {goal}");

    let path = PathSearcher::new(&grid).astar_path(&grid, start, goal);
    let solved = path.as_ref().map(|p| {
        let mut out = img.clone();
        overlay_path(&mut out, p, config.path_color, 0);
        out
    });
    match &path {
        Some(p) => log::info!("path found: {} steps", p.len() - 1),
        None => log::info!("no path from {start} to {goal}"),
    }
    Ok(SolveReport {
        start,
        goal,
        path,
        solved,
    })
}

/// Paint the path cells of `img` with `color`, leaving every other pixel
/// untouched.
///
/// Each path cell is stamped as a square of side `2 * half_width + 1`,
/// clipped at the image border. The loaded-image flow uses `half_width`
/// 0 (one pixel per cell); hand-drawn mazes read better with 2, which
/// matches the 5×5 stamp of the original drawing surface.
pub fn overlay_path(img: &mut RgbImage, path: &[Point], color: [u8; 3], half_width: u32) {
    let (width, height) = img.dimensions();
    let h = (half_width as i64).min(width.max(height) as i64);
    for p in path {
        for dy in -h..=h {
            for dx in -h..=h {
                let x = p.x as i64 + dx;
                let y = p.y as i64 + dy;
                if x >= 0 && y >= 0 && x < width as i64 && y < height as i64 {
                    img.put_pixel(x as u32, y as u32, Rgb(color));
                }
            }
        }
    }
}
