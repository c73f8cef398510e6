//! Geometry helpers for tile curves and markup output

/// Planar points and markup number formatting
pub mod geometry;
/// Catmull-Rom path smoothing and path length
pub mod smoothing;
