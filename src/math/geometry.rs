//! Planar points and byte-stable number formatting for markup

use crate::io::configuration::COORDINATE_PRECISION;

/// Real-valued planar coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing to the right
    pub x: f64,
    /// Vertical coordinate, growing downward
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Offset the point by `(dx, dy)`
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Multiply both coordinates by `factor`
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Linear interpolation towards `other` (`t = 0` is `self`, `t = 1` is `other`)
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            t.mul_add(other.x - self.x, self.x),
            t.mul_add(other.y - self.y, self.y),
        )
    }

    /// Coordinate-wise equality within `1e-9`
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < 1e-9 && (self.y - other.y).abs() < 1e-9
    }

    /// True when both coordinates are finite
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Format a number for markup output
///
/// Rounds to [`COORDINATE_PRECISION`] decimals and prints the shortest
/// representation, so `1200.0` becomes `1200` and `12.3456` becomes `12.35`.
pub fn format_number(value: f64) -> String {
    let factor = 10_f64.powi(COORDINATE_PRECISION);
    // Adding zero turns a rounded negative zero into positive zero
    let rounded = (value * factor).round() / factor + 0.0;
    format!("{rounded}")
}

/// Format a number at full precision for document sizes and offsets
///
/// Prints the shortest string that reads back as the same `f64`, with
/// negative zero shown as `0`.
pub fn format_exact(value: f64) -> String {
    format!("{}", value + 0.0)
}
