//! Mazer — image-facing layer of the maze solver.
//!
//! The core crates know nothing about images beyond raw pixel buffers;
//! this crate supplies the collaborator side: a freehand drawing
//! [`Canvas`], the solve pipeline ([`solve_image`]), and the path-color
//! overlay ([`overlay_path`]).

mod canvas;
mod solve;

pub use canvas::{Canvas, Ink};
pub use solve::{SolveConfig, SolveReport, overlay_path, solve_image};
