//! Tile library, grids and materialised patterns
//!
//! This module contains the data side of kolam generation:
//! - The fixed tile library and its stub geometry
//! - Symmetry tables and grid transforms
//! - The immutable tile grid
//! - Patterns built from a grid for rendering

/// Square grid of placed tile ids
pub mod grid;
/// Absolute-coordinate curves, dots and patterns
pub mod pattern;
/// Symmetry permutation tables and grid transforms
pub mod symmetry;
/// Tile definitions and the standard library
pub mod tiles;

pub use grid::Grid;
pub use pattern::Pattern;
