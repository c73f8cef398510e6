//! SVG markup for static and animated patterns
//!
//! Both renderers emit the same document skeleton: an XML prolog, a root
//! element sized to the padded pattern with a matching view box, a style
//! block defining the curve and dot classes, an optional background
//! rectangle and one group translated by the padding holding dots first and
//! curves after them. Output depends only on the pattern and options.

use std::fmt::Write;

use crate::io::configuration::CURVE_FADE_MS;
use crate::io::error::{Result, render_error};
use crate::math::geometry::{format_exact, format_number};
use crate::math::smoothing::to_path_command;
use crate::render::options::{RenderOptions, ValidatedOptions, checked_color};
use crate::render::schedule::{RevealStep, checked_duration, curve_schedule, dot_schedule};
use crate::spatial::pattern::{Curve, Dimensions, Dot, Pattern};

/// Padded document size for `pattern`
pub fn document_size(dimensions: Dimensions, padding: f64) -> (f64, f64) {
    (
        2.0f64.mul_add(padding, dimensions.width),
        2.0f64.mul_add(padding, dimensions.height),
    )
}

/// Render `pattern` as a static SVG document
///
/// # Errors
///
/// Returns a render error if the options are invalid or the pattern has
/// non-positive dimensions or non-finite geometry.
pub fn render_static(pattern: &Pattern, options: &RenderOptions) -> Result<String> {
    render_static_validated(pattern, &options.validate()?)
}

/// Render `pattern` as an SVG document that draws itself over `duration_ms`
///
/// # Errors
///
/// Returns a render error if the options or duration are invalid, the
/// pattern is malformed, or it has no curves to reveal.
pub fn render_animated(
    pattern: &Pattern,
    duration_ms: f64,
    options: &RenderOptions,
) -> Result<String> {
    render_animated_validated(pattern, duration_ms, &options.validate()?)
}

/// Static render with options that were already validated
///
/// # Errors
///
/// Returns a render error if the pattern is malformed.
pub fn render_static_validated(pattern: &Pattern, options: &ValidatedOptions) -> Result<String> {
    check_pattern(pattern)?;

    let mut svg = String::new();
    write_document_start(&mut svg, pattern, options)?;

    if options.show_dots() {
        for dot in &pattern.dots {
            write_dot(&mut svg, dot, None)?;
        }
    }
    for curve in &pattern.curves {
        write_curve(&mut svg, curve, None)?;
    }

    write_document_end(&mut svg)?;
    Ok(svg)
}

/// Animated render with options that were already validated
///
/// # Errors
///
/// Returns a render error if the duration is invalid, the pattern is
/// malformed, or it has no curves to reveal.
pub fn render_animated_validated(
    pattern: &Pattern,
    duration_ms: f64,
    options: &ValidatedOptions,
) -> Result<String> {
    let duration_ms = checked_duration(duration_ms)?;
    check_pattern(pattern)?;
    if pattern.curves.is_empty() {
        return Err(render_error("animation", &"pattern has no curves to reveal"));
    }

    let mut svg = String::new();
    write_document_start(&mut svg, pattern, options)?;

    if options.show_dots() {
        let schedule = dot_schedule(pattern.dots.len(), duration_ms)?;
        for (dot, step) in pattern.dots.iter().zip(schedule) {
            write_dot(&mut svg, dot, Some(step))?;
        }
    }

    let schedule = curve_schedule(pattern.curves.len(), duration_ms)?;
    for (curve, step) in pattern.curves.iter().zip(schedule) {
        write_curve(&mut svg, curve, Some(step))?;
    }

    write_document_end(&mut svg)?;
    Ok(svg)
}

fn check_pattern(pattern: &Pattern) -> Result<()> {
    let Dimensions { width, height } = pattern.dimensions;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(render_error(
            "pattern",
            &format!("dimensions must be positive, got {width}x{height}"),
        ));
    }
    if let Some(dot) = pattern
        .dots
        .iter()
        .find(|dot| !dot.center.is_finite() || !(dot.radius.is_finite() && dot.radius >= 0.0))
    {
        return Err(render_error(
            "pattern",
            &format!("malformed dot at ({}, {})", dot.center.x, dot.center.y),
        ));
    }
    if let Some(index) = pattern.curves.iter().position(|curve| {
        !curve.start.is_finite()
            || !curve.end.is_finite()
            || curve.curve_points.iter().any(|point| !point.is_finite())
    }) {
        return Err(render_error(
            "pattern",
            &format!("curve {index} has non-finite coordinates"),
        ));
    }
    Ok(())
}

fn write_document_start(
    svg: &mut String,
    pattern: &Pattern,
    options: &ValidatedOptions,
) -> Result<()> {
    let (width, height) = document_size(pattern.dimensions, options.padding());
    let width = format_exact(width);
    let height = format_exact(height);
    let padding = format_exact(options.padding());

    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        svg,
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
    )?;
    writeln!(svg, "  <defs>")?;
    writeln!(svg, "    <style>")?;
    writeln!(
        svg,
        "      .kolam-curve {{ fill: none; stroke: {}; stroke-width: {}; stroke-linecap: round; stroke-linejoin: round; }}",
        options.stroke_color(),
        format_number(options.stroke_width())
    )?;
    writeln!(svg, "      .kolam-dot {{ fill: {}; }}", options.dot_color())?;
    writeln!(svg, "    </style>")?;
    writeln!(svg, "  </defs>")?;
    if let Some(background) = options.background() {
        writeln!(
            svg,
            r#"  <rect width="{width}" height="{height}" fill="{background}"/>"#
        )?;
    }
    writeln!(svg, r#"  <g transform="translate({padding}, {padding})">"#)?;
    Ok(())
}

fn write_document_end(svg: &mut String) -> Result<()> {
    writeln!(svg, "  </g>")?;
    write!(svg, "</svg>")?;
    Ok(())
}

fn write_dot(svg: &mut String, dot: &Dot, reveal: Option<RevealStep>) -> Result<()> {
    write!(
        svg,
        r#"    <circle class="kolam-dot" cx="{}" cy="{}" r="{}""#,
        format_number(dot.center.x),
        format_number(dot.center.y),
        format_number(dot.radius)
    )?;
    if let Some(color) = &dot.color {
        let color = checked_color("dot.color", color)?;
        write!(svg, r#" fill="{color}""#)?;
    }

    match reveal {
        None => writeln!(svg, "/>")?,
        Some(step) => {
            writeln!(svg, r#" opacity="0">"#)?;
            write_animate(svg, "opacity", "0;1", step.duration_ms, step.begin_ms)?;
            writeln!(svg, "    </circle>")?;
        }
    }
    Ok(())
}

fn write_curve(svg: &mut String, curve: &Curve, reveal: Option<RevealStep>) -> Result<()> {
    let element = if curve.is_smooth() {
        let path = to_path_command(&curve.curve_points)?;
        write!(svg, r#"    <path class="kolam-curve" d="{path}""#)?;
        "path"
    } else {
        write!(
            svg,
            r#"    <line class="kolam-curve" x1="{}" y1="{}" x2="{}" y2="{}""#,
            format_number(curve.start.x),
            format_number(curve.start.y),
            format_number(curve.end.x),
            format_number(curve.end.y)
        )?;
        "line"
    };

    match reveal {
        None => writeln!(svg, "/>")?,
        Some(step) => {
            let length = format_number(curve.length());
            writeln!(
                svg,
                r#" stroke-dasharray="{length}" stroke-dashoffset="{length}" opacity="0">"#
            )?;
            write_animate(
                svg,
                "stroke-dashoffset",
                &format!("{length};0"),
                step.duration_ms,
                step.begin_ms,
            )?;
            write_animate(svg, "opacity", "0;1", CURVE_FADE_MS, step.begin_ms)?;
            writeln!(svg, "    </{element}>")?;
        }
    }
    Ok(())
}

fn write_animate(
    svg: &mut String,
    attribute: &str,
    values: &str,
    duration_ms: f64,
    begin_ms: f64,
) -> Result<()> {
    writeln!(
        svg,
        r#"      <animate attributeName="{attribute}" values="{values}" dur="{}ms" begin="{}ms" fill="freeze"/>"#,
        format_number(duration_ms),
        format_number(begin_ms)
    )?;
    Ok(())
}
