//! Self-contained `<img>` snippets carrying the markup as a data URL

use std::fmt::Write;

use crate::io::error::Result;
use crate::math::geometry::format_exact;
use crate::render::fallback::{RenderRequest, render};
use crate::render::markup::document_size;
use crate::spatial::pattern::Pattern;

const DATA_URL_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";

/// Percent-encode `text` leaving only `A-Z a-z 0-9 - _ . ! ~ * ' ( )` intact
pub fn percent_encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        let unreserved = byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte);
        if unreserved {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "%{byte:02X}");
        }
    }
    encoded
}

/// `<img>` tag embedding the rendered `pattern`
///
/// The tag is sized to the padded document. Animated requests that cannot be
/// animated embed the static document instead.
///
/// # Errors
///
/// Returns a render error if the options are invalid or the static render
/// fails.
pub fn embed_code(pattern: &Pattern, request: &RenderRequest) -> Result<String> {
    let rendered = render(pattern, request)?;
    let (width, height) = document_size(pattern.dimensions, request.options.padding);

    Ok(format!(
        r#"<img src="{DATA_URL_PREFIX}{}" width="{}" height="{}" alt="Kolam Pattern" />"#,
        percent_encode(&rendered.markup),
        format_exact(width),
        format_exact(height)
    ))
}
