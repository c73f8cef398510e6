//! Render with automatic recovery to static output
//!
//! Options are validated exactly once. When the animated renderer fails the
//! same validated options drive a static render, and the result keeps both
//! the mode actually produced and the error that triggered the fallback.

use crate::io::configuration::DEFAULT_DURATION_MS;
use crate::io::error::{KolamError, Result};
use crate::render::markup::{render_animated_validated, render_static_validated};
use crate::render::options::RenderOptions;
use crate::spatial::pattern::Pattern;

/// Kind of document requested from the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderMode {
    /// Fully drawn document
    Static,
    /// Document revealing its curves over time
    Animated {
        /// Total reveal time in milliseconds
        duration_ms: f64,
    },
}

impl RenderMode {
    /// Animated mode with the default duration
    pub const fn animated() -> Self {
        Self::Animated {
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

/// Mode plus options for one render call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Requested document kind
    pub mode: RenderMode,
    /// Brush and layout options
    pub options: RenderOptions,
}

impl RenderRequest {
    /// Static request with default options
    pub fn static_default() -> Self {
        Self {
            mode: RenderMode::Static,
            options: RenderOptions::default(),
        }
    }
}

/// Outcome of [`render`]
#[derive(Debug)]
pub struct Rendered {
    /// The SVG document
    pub markup: String,
    /// Mode that produced `markup`
    pub mode: RenderMode,
    /// Error from the animated attempt when the static fallback was used
    pub recovered: Option<KolamError>,
}

impl Rendered {
    /// Whether the requested animation was replaced by static output
    pub const fn fell_back(&self) -> bool {
        self.recovered.is_some()
    }
}

/// Render `pattern` as requested, falling back to static on animation failure
///
/// # Errors
///
/// Returns a render error if the options are invalid or the static render
/// itself fails. Animated failures are recovered, not returned.
pub fn render(pattern: &Pattern, request: &RenderRequest) -> Result<Rendered> {
    let options = request.options.validate()?;

    match request.mode {
        RenderMode::Static => Ok(Rendered {
            markup: render_static_validated(pattern, &options)?,
            mode: RenderMode::Static,
            recovered: None,
        }),
        RenderMode::Animated { duration_ms } => {
            match render_animated_validated(pattern, duration_ms, &options) {
                Ok(markup) => Ok(Rendered {
                    markup,
                    mode: request.mode,
                    recovered: None,
                }),
                Err(error) => Ok(Rendered {
                    markup: render_static_validated(pattern, &options)?,
                    mode: RenderMode::Static,
                    recovered: Some(error),
                }),
            }
        }
    }
}
