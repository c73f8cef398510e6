//! SVG rendering of materialised patterns

/// Data-URL `<img>` embedding
pub mod embed;
/// Render requests with static fallback
pub mod fallback;
/// Static and animated SVG documents
pub mod markup;
/// Render options and their validation
pub mod options;
/// Reveal timing for animated output
pub mod schedule;

pub use fallback::{RenderMode, RenderRequest, Rendered, render};
pub use options::{Background, RenderOptions};
