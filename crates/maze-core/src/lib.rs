//! **maze-core** — Core types for raster maze solving.
//!
//! This crate provides the foundational pieces shared across the *maze-rs*
//! workspace: the [`Point`] geometry primitive, the binary traversability
//! [`MazeGrid`], and the pixel-buffer extractor ([`extract_grid`]) that turns
//! raw image data into a grid plus canonical start/goal cells.

pub mod extract;
pub mod geom;
pub mod grid;

pub use extract::{ExtractError, extract_grid};
pub use geom::Point;
pub use grid::{GridParseError, MazeGrid};
