//! PNG export by rasterising the static SVG document

use std::path::Path;

use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::io::error::{KolamError, Result, invalid_parameter, render_error};
use crate::render::markup::{document_size, render_static};
use crate::render::options::RenderOptions;
use crate::spatial::pattern::Pattern;

/// Rasterise the static markup of `pattern` at `scale` pixels per output unit
///
/// The document is parsed with `usvg` and drawn by `resvg`, so the raster
/// matches the SVG (antialiasing, round caps and joins, CSS colours). The
/// buffer is `round((dimensions + 2 * padding) * scale)` pixels on each side.
///
/// # Errors
///
/// Returns an error if `scale` is zero, the options are invalid, or the
/// markup cannot be parsed or drawn.
pub fn rasterize(pattern: &Pattern, options: &RenderOptions, scale: u32) -> Result<RgbaImage> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"scale must be at least 1"));
    }
    let markup = render_static(pattern, options)?;
    let tree = Tree::from_str(&markup, &Options::default())
        .map_err(|e| render_error("raster", &e))?;

    let factor = f64::from(scale);
    let (width, height) = document_size(pattern.dimensions, options.padding);
    let pixels = |extent: f64| ((extent * factor).round() as u32).max(1);
    let (width, height) = (pixels(width), pixels(height));

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        render_error("raster", &format!("cannot allocate a {width}x{height} pixmap"))
    })?;
    let zoom = scale as f32;
    resvg::render(&tree, Transform::from_scale(zoom, zoom), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; PNG wants straight alpha
    let straight: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    RgbaImage::from_raw(width, height, straight)
        .ok_or_else(|| render_error("raster", &"pixel buffer does not match the image size"))
}

/// Rasterise `pattern` and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The options are invalid, or `scale` is zero
/// - The markup cannot be rasterised
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_pattern_as_png(
    pattern: &Pattern,
    options: &RenderOptions,
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    let img = rasterize(pattern, options, scale)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| KolamError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| KolamError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
