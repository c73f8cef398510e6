//! Materialised patterns: absolute-coordinate curves and dots
//!
//! A `Pattern` is the only input the renderer needs. It is built in one step
//! from a complete grid and never shares state with other patterns.

use crate::io::error::{Result, invalid_parameter};
use crate::math::geometry::Point;
use crate::math::smoothing::path_length;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileLibrary;

/// Output size of a pattern before padding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

/// Visual marker at one point of the dot grid
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    /// Centre of the dot
    pub center: Point,
    /// Radius of the dot
    pub radius: f64,
    /// Fill override; the renderer's dot colour is used when absent
    pub color: Option<String>,
}

/// One curve segment of the pattern
///
/// Curves with fewer than two `curve_points` are drawn as a straight segment
/// from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// First point of the curve
    pub start: Point,
    /// Last point of the curve
    pub end: Point,
    /// Ordered samples the curve passes through (may be empty)
    pub curve_points: Vec<Point>,
}

impl Curve {
    /// Straight segment without samples
    pub const fn straight(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            curve_points: Vec::new(),
        }
    }

    /// Curve through `points`; `None` when there are no points
    pub fn through(points: Vec<Point>) -> Option<Self> {
        let start = *points.first()?;
        let end = *points.last()?;
        Some(Self {
            start,
            end,
            curve_points: points,
        })
    }

    /// True when the curve is drawn as a smoothed path
    pub fn is_smooth(&self) -> bool {
        self.curve_points.len() >= 2
    }

    /// Drawn length: smoothed path length, or the straight distance
    pub fn length(&self) -> f64 {
        if self.is_smooth() {
            path_length(&self.curve_points)
        } else {
            self.start.distance(self.end)
        }
    }
}

/// A generated kolam ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    /// Human-readable title
    pub name: String,
    /// Tile assignment the geometry was built from
    pub grid: Grid,
    /// Dot markers, one per cell centre, row-major
    pub dots: Vec<Dot>,
    /// Curves, one per non-blank cell, row-major
    pub curves: Vec<Curve>,
    /// Size of the drawing area
    pub dimensions: Dimensions,
}

impl Pattern {
    /// Translate every cell's tile curve into absolute coordinates
    ///
    /// Tile points are scaled by `cell_size` and offset by
    /// `(col * cell_size, row * cell_size)`. Every cell also receives a dot
    /// at its centre. Blank tiles contribute a dot but no curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` or `dot_radius` is not a positive
    /// finite number, or a cell holds an id missing from `library`.
    pub fn materialize(
        name: impl Into<String>,
        grid: Grid,
        library: &TileLibrary,
        cell_size: f64,
        dot_radius: f64,
    ) -> Result<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be a positive finite number",
            ));
        }
        if !(dot_radius.is_finite() && dot_radius >= 0.0) {
            return Err(invalid_parameter(
                "dot_radius",
                &dot_radius,
                &"must be a non-negative finite number",
            ));
        }

        let mut dots = Vec::with_capacity(grid.size() * grid.size());
        let mut curves = Vec::with_capacity(grid.size() * grid.size());

        for ([row, col], tile_id) in grid.iter() {
            let tile = library.tile(tile_id)?;
            let offset_x = col as f64 * cell_size;
            let offset_y = row as f64 * cell_size;

            dots.push(Dot {
                center: Point::new(offset_x + cell_size / 2.0, offset_y + cell_size / 2.0),
                radius: dot_radius,
                color: None,
            });

            let points = tile
                .points
                .iter()
                .map(|point| point.scale(cell_size).translate(offset_x, offset_y))
                .collect();
            if let Some(curve) = Curve::through(points) {
                curves.push(curve);
            }
        }

        let extent = grid.size() as f64 * cell_size;
        Ok(Self {
            name: name.into(),
            grid,
            dots,
            curves,
            dimensions: Dimensions {
                width: extent,
                height: extent,
            },
        })
    }
}
