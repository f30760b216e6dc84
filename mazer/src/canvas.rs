//! Freehand maze drawing on an RGB raster.

use image::{Rgb, RgbImage};
use maze_core::Point;

use crate::solve::SolveConfig;

/// Brush ink: white draws passable corridor, black erases back to wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Draw,
    Erase,
}

impl Ink {
    fn color(self) -> Rgb<u8> {
        match self {
            Ink::Draw => Rgb([255, 255, 255]),
            Ink::Erase => Rgb([0, 0, 0]),
        }
    }
}

/// A drawing surface for hand-made mazes.
///
/// Starts out all black (all walls). Strokes stamp a filled disc of the
/// chosen ink, so dragging a sequence of stroke centers along a pointer
/// trail carves a corridor of twice the brush radius. The finished raster
/// feeds the same extraction pipeline as a loaded image.
pub struct Canvas {
    img: RgbImage,
    brush_radius: u32,
}

impl Canvas {
    /// Create an all-wall canvas of the given pixel dimensions, with the
    /// brush radius taken from `config`.
    pub fn new(width: u32, height: u32, config: &SolveConfig) -> Self {
        Self {
            img: RgbImage::new(width, height),
            brush_radius: config.brush_radius,
        }
    }

    /// The current brush radius, in pixels.
    pub fn brush_radius(&self) -> u32 {
        self.brush_radius
    }

    /// Change the brush radius for subsequent strokes.
    pub fn set_brush_radius(&mut self, radius: u32) {
        self.brush_radius = radius;
    }

    /// Stamp a filled disc of `ink` centered at `center`.
    ///
    /// Parts of the disc outside the canvas are clipped. The radius is
    /// capped at the larger canvas dimension, which also keeps the disc
    /// arithmetic within `i64`.
    pub fn stroke(&mut self, center: Point, ink: Ink) {
        let color = ink.color();
        let (width, height) = self.img.dimensions();
        let r = (self.brush_radius as i64).min(width.max(height) as i64);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let x = center.x as i64 + dx;
                let y = center.y as i64 + dy;
                if x >= 0 && y >= 0 && x < width as i64 && y < height as i64 {
                    self.img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Reset the whole canvas to walls.
    pub fn clear(&mut self) {
        for p in self.img.pixels_mut() {
            *p = Rgb([0, 0, 0]);
        }
    }

    /// The current raster.
    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    /// Consume the canvas, yielding the raster.
    pub fn into_image(self) -> RgbImage {
        self.img
    }
}
