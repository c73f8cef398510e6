//! Catmull-Rom path smoothing
//!
//! Converts an ordered run of sample points into cubic Bézier segments that
//! pass through every point with a continuous tangent at interior points.
//! Sequences whose first and last points coincide are treated as closed
//! loops, so the tangent is also continuous where the loop meets itself.

use crate::io::configuration::LENGTH_SUBDIVISIONS;
use crate::io::error::{Result, render_error};
use crate::math::geometry::{Point, format_number};
use std::fmt::Write;

/// One cubic Bézier piece of a smoothed path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Point the segment starts from (a supplied sample)
    pub start: Point,
    /// First control point
    pub control1: Point,
    /// Second control point
    pub control2: Point,
    /// Point the segment ends at (the next supplied sample)
    pub end: Point,
}

impl CubicSegment {
    /// Straight segment expressed as a cubic with controls at the thirds
    pub fn straight(start: Point, end: Point) -> Self {
        Self {
            start,
            control1: start.lerp(end, 1.0 / 3.0),
            control2: start.lerp(end, 2.0 / 3.0),
            end,
        }
    }

    /// Evaluate the segment at parameter `t` in `[0, 1]`
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point::new(
            b3.mul_add(
                self.end.x,
                b2.mul_add(self.control2.x, b0.mul_add(self.start.x, b1 * self.control1.x)),
            ),
            b3.mul_add(
                self.end.y,
                b2.mul_add(self.control2.y, b0.mul_add(self.start.y, b1 * self.control1.y)),
            ),
        )
    }

    /// Approximate arc length by summing `pieces` chords
    pub fn length(&self, pieces: usize) -> f64 {
        let pieces = pieces.max(1);
        let mut previous = self.start;
        let mut total = 0.0;
        for step in 1..=pieces {
            let current = self.point_at(step as f64 / pieces as f64);
            total += previous.distance(current);
            previous = current;
        }
        total
    }
}

/// A run of at least four points whose ends coincide
fn is_closed(points: &[Point]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => points.len() >= 4 && first.approx_eq(*last),
        _ => false,
    }
}

/// Fit uniform Catmull-Rom cubic segments through `points`
///
/// Two points yield one straight segment; fewer yield nothing.
pub fn cubic_segments(points: &[Point]) -> Vec<CubicSegment> {
    match points {
        [] | [_] => Vec::new(),
        [start, end] => vec![CubicSegment::straight(*start, *end)],
        _ => {
            let closed = is_closed(points);
            let last = points.len() - 1;

            points
                .windows(2)
                .enumerate()
                .filter_map(|(i, pair)| {
                    let [current, next] = pair else {
                        return None;
                    };

                    // Open ends reuse the endpoint; closed ends wrap past the seam
                    let before = if i == 0 {
                        if closed { points.get(last - 1) } else { Some(current) }
                    } else {
                        points.get(i - 1)
                    }?;
                    let after = if i + 1 == last {
                        if closed { points.get(1) } else { Some(next) }
                    } else {
                        points.get(i + 2)
                    }?;

                    Some(CubicSegment {
                        start: *current,
                        control1: Point::new(
                            current.x + (next.x - before.x) / 6.0,
                            current.y + (next.y - before.y) / 6.0,
                        ),
                        control2: Point::new(
                            next.x - (after.x - current.x) / 6.0,
                            next.y - (after.y - current.y) / 6.0,
                        ),
                        end: *next,
                    })
                })
                .collect()
        }
    }
}

/// Encode `points` as a single smooth path command string
///
/// Starts with an absolute move to the first point. Exactly two points give
/// a straight `L` segment; longer runs give one `C` segment per gap.
///
/// # Errors
///
/// Returns a render error if fewer than two points are supplied or any
/// coordinate is not finite.
pub fn to_path_command(points: &[Point]) -> Result<String> {
    if points.len() < 2 {
        return Err(render_error(
            "path smoothing",
            &format!("need at least 2 points, got {}", points.len()),
        ));
    }
    if let Some(bad) = points.iter().find(|point| !point.is_finite()) {
        return Err(render_error(
            "path smoothing",
            &format!("non-finite point ({}, {})", bad.x, bad.y),
        ));
    }

    let mut command = String::new();
    if let [start, end] = points {
        write!(
            command,
            "M {} {} L {} {}",
            format_number(start.x),
            format_number(start.y),
            format_number(end.x),
            format_number(end.y)
        )?;
        return Ok(command);
    }

    let segments = cubic_segments(points);
    if let Some(first) = segments.first() {
        write!(
            command,
            "M {} {}",
            format_number(first.start.x),
            format_number(first.start.y)
        )?;
    }
    for segment in &segments {
        write!(
            command,
            " C {} {}, {} {}, {} {}",
            format_number(segment.control1.x),
            format_number(segment.control1.y),
            format_number(segment.control2.x),
            format_number(segment.control2.y),
            format_number(segment.end.x),
            format_number(segment.end.y)
        )?;
    }

    Ok(command)
}

/// Length of the smoothed path through `points`
pub fn path_length(points: &[Point]) -> f64 {
    cubic_segments(points)
        .iter()
        .map(|segment| segment.length(LENGTH_SUBDIVISIONS))
        .sum()
}
