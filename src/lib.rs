//! Procedural kolam patterns on a square dot grid
//!
//! A grid is filled with tiles from a fixed sixteen-tile library so that every
//! horizontally and vertically adjacent pair is compatible, optionally under a
//! mirror or rotational symmetry. The filled grid becomes a pattern of dots
//! and smooth curves that renders to static or self-drawing SVG markup, or to
//! a PNG raster.

#![forbid(unsafe_code)]

/// Tile compatibility, candidate selection and backtracking generation
pub mod algorithm;
/// Command line, configuration, errors and file export
pub mod io;
/// Points, number formatting and curve smoothing
pub mod math;
/// SVG rendering with animation and embedding
pub mod render;
/// Tiles, symmetry tables, grids and patterns
pub mod spatial;

pub use algorithm::executor::{GeneratorConfig, KolamGenerator, generate, generate_seeded};
pub use io::error::{KolamError, Result};
pub use render::{RenderMode, RenderOptions, RenderRequest, render};
pub use spatial::{Grid, Pattern};
