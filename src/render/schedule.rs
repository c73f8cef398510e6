//! Reveal schedules for animated output
//!
//! Curve `i` of `n` begins at `i * (D / n)` and runs for
//! `max(MIN_CURVE_STEP_MS, D / n)`, so the whole reveal fits inside `D`
//! unless the floor kicks in. Dots follow their own even spread over `D`.

use crate::io::configuration::{DOT_FADE_MS, MIN_CURVE_STEP_MS};
use crate::io::error::{Result, render_error};

/// Timing of one element's reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStep {
    /// Position of the element in drawing order
    pub index: usize,
    /// Delay before the reveal starts
    pub begin_ms: f64,
    /// Length of the reveal
    pub duration_ms: f64,
}

impl RevealStep {
    /// Time at which the element is fully shown
    pub fn end_ms(&self) -> f64 {
        self.begin_ms + self.duration_ms
    }
}

/// Check a caller-supplied total duration
///
/// # Errors
///
/// Returns a render error if `duration_ms` is negative or not finite.
pub fn checked_duration(duration_ms: f64) -> Result<f64> {
    if duration_ms.is_finite() && duration_ms >= 0.0 {
        Ok(duration_ms)
    } else {
        Err(render_error(
            "schedule",
            &format!("duration must be a non-negative finite number, got {duration_ms}"),
        ))
    }
}

/// Per-curve reveal duration for `count` curves over `duration_ms`
pub fn curve_step_ms(count: usize, duration_ms: f64) -> f64 {
    MIN_CURVE_STEP_MS.max(duration_ms / count.max(1) as f64)
}

/// Reveal timing for `count` curves spread over `duration_ms`
///
/// # Errors
///
/// Returns a render error for an invalid duration.
pub fn curve_schedule(count: usize, duration_ms: f64) -> Result<Vec<RevealStep>> {
    let duration_ms = checked_duration(duration_ms)?;
    let spacing = duration_ms / count.max(1) as f64;
    let step = curve_step_ms(count, duration_ms);

    Ok((0..count)
        .map(|index| RevealStep {
            index,
            begin_ms: index as f64 * spacing,
            duration_ms: step,
        })
        .collect())
}

/// Fade-in timing for `count` dots spread evenly over `duration_ms`
///
/// # Errors
///
/// Returns a render error for an invalid duration.
pub fn dot_schedule(count: usize, duration_ms: f64) -> Result<Vec<RevealStep>> {
    let duration_ms = checked_duration(duration_ms)?;
    let spacing = duration_ms / count.max(1) as f64;

    Ok((0..count)
        .map(|index| RevealStep {
            index,
            begin_ms: index as f64 * spacing,
            duration_ms: DOT_FADE_MS,
        })
        .collect())
}
