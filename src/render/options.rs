//! Brush and layout options for markup rendering
//!
//! Options are validated once into [`ValidatedOptions`]; every render path
//! (static, animated, and the static fallback) consumes the validated form,
//! so a fallback can never see different values than the failed attempt.

use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, TRANSPARENT_BACKGROUND,
};
use crate::io::error::{Result, render_error};

/// Fill behind the pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// No background rectangle is emitted
    Transparent,
    /// Rectangle filled with a colour
    Solid(String),
}

impl Background {
    /// Interpret a colour string, mapping `"transparent"` to [`Background::Transparent`]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case(TRANSPARENT_BACKGROUND) {
            Self::Transparent
        } else {
            Self::Solid(value.trim().to_string())
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid(DEFAULT_BACKGROUND.to_string())
    }
}

/// Caller-facing render options
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Background fill
    pub background: Background,
    /// Draw the dot grid
    pub show_dots: bool,
    /// Curve stroke colour
    pub stroke_color: String,
    /// Curve stroke width
    pub stroke_width: f64,
    /// Dot fill colour; the stroke colour when absent
    pub dot_color: Option<String>,
    /// Empty border added on every side
    pub padding: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: Background::default(),
            show_dots: true,
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            dot_color: None,
            padding: 0.0,
        }
    }
}

/// Options checked for markup safety and numeric sanity
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOptions {
    background: Option<String>,
    show_dots: bool,
    stroke_color: String,
    stroke_width: f64,
    dot_color: String,
    padding: f64,
}

impl ValidatedOptions {
    /// Background colour, `None` when transparent
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Whether dots are drawn
    pub const fn show_dots(&self) -> bool {
        self.show_dots
    }

    /// Curve stroke colour
    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    /// Curve stroke width
    pub const fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Default dot fill colour
    pub fn dot_color(&self) -> &str {
        &self.dot_color
    }

    /// Border added on every side
    pub const fn padding(&self) -> f64 {
        self.padding
    }
}

impl RenderOptions {
    /// Check every field once
    ///
    /// # Errors
    ///
    /// Returns a render error if a colour is empty or contains characters
    /// that would break the markup, or if the stroke width or padding is
    /// negative or not finite.
    pub fn validate(&self) -> Result<ValidatedOptions> {
        let background = match &self.background {
            Background::Transparent => None,
            Background::Solid(color) => Some(checked_color("background", color)?),
        };
        let stroke_color = checked_color("stroke_color", &self.stroke_color)?;
        let dot_color = match &self.dot_color {
            Some(color) => checked_color("dot_color", color)?,
            None => stroke_color.clone(),
        };

        Ok(ValidatedOptions {
            background,
            show_dots: self.show_dots,
            stroke_width: checked_length("stroke_width", self.stroke_width)?,
            padding: checked_length("padding", self.padding)?,
            stroke_color,
            dot_color,
        })
    }
}

/// Accept colour strings made of characters CSS colour syntax uses
///
/// # Errors
///
/// Returns a render error for an empty colour or one containing quotes,
/// angle brackets, braces, semicolons or other markup-breaking characters.
pub fn checked_color(field: &'static str, color: &str) -> Result<String> {
    let color = color.trim();
    if color.is_empty() {
        return Err(render_error("options", &format!("{field} is empty")));
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || "#(),.% -".contains(c);
    if let Some(bad) = color.chars().find(|&c| !allowed(c)) {
        return Err(render_error(
            "options",
            &format!("{field} '{color}' contains '{bad}'"),
        ));
    }
    Ok(color.to_string())
}

fn checked_length(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(render_error(
            "options",
            &format!("{field} must be a non-negative finite number, got {value}"),
        ))
    }
}
