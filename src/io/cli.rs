//! Command-line interface for generating and rendering kolam patterns

use crate::algorithm::executor::{GeneratorConfig, KolamGenerator};
use crate::algorithm::selection::SelectionPolicy;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_DURATION_MS, DEFAULT_GRID_SIZE, DEFAULT_PNG_SCALE,
    DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, OUTPUT_STEM,
};
use crate::io::error::{KolamError, Result, invalid_parameter};
use crate::io::image::export_pattern_as_png;
use crate::io::progress::ProgressManager;
use crate::render::embed::embed_code;
use crate::render::fallback::{RenderMode, RenderRequest, render};
use crate::render::options::{Background, RenderOptions};
use crate::spatial::symmetry::Symmetry;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "kolam")]
#[command(author, version, about = "Generate kolam dot-grid patterns as SVG")]
/// Command-line arguments for the kolam generator
// Rendering switches are independent boolean flags
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Side length of the dot grid
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Random seed for reproducible output (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Symmetry the generated grid must have
    #[arg(long, value_enum, default_value_t = Symmetry::None)]
    pub symmetry: Symmetry,

    /// Candidate ordering used while filling the grid
    #[arg(long, value_enum, default_value_t = SelectionPolicy::Seeded)]
    pub policy: SelectionPolicy,

    /// Emit an animated SVG that draws itself
    #[arg(long)]
    pub animate: bool,

    /// Total animation time in milliseconds
    #[arg(long, default_value_t = DEFAULT_DURATION_MS)]
    pub duration: f64,

    /// Empty border around the pattern
    #[arg(long, default_value_t = 0.0)]
    pub padding: f64,

    /// Background colour, or "transparent"
    #[arg(long, default_value = DEFAULT_BACKGROUND)]
    pub background: String,

    /// Curve stroke colour
    #[arg(long, default_value = DEFAULT_STROKE_COLOR)]
    pub stroke_color: String,

    /// Curve stroke width
    #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: f64,

    /// Dot colour (defaults to the stroke colour)
    #[arg(long)]
    pub dot_color: Option<String>,

    /// Leave out the dot grid
    #[arg(long)]
    pub no_dots: bool,

    /// Output SVG path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write a PNG next to each SVG
    #[arg(long)]
    pub png: bool,

    /// Pixels per output unit for PNG export
    #[arg(long, default_value_t = DEFAULT_PNG_SCALE)]
    pub scale: u32,

    /// Also write an HTML snippet embedding each SVG as a data URL
    #[arg(long)]
    pub embed: bool,

    /// Number of patterns to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// Suppress progress output and notices
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check numeric arguments before any generation starts
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the size, count or scale is zero.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &"grid size must be at least 1",
            ));
        }
        if self.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"at least one pattern must be requested",
            ));
        }
        if self.png && self.scale == 0 {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &"scale must be at least 1",
            ));
        }
        Ok(())
    }

    /// Generator settings selected by the flags
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            symmetry: self.symmetry,
            selection: self.policy,
            ..GeneratorConfig::default()
        }
    }

    /// Render options selected by the flags
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            background: Background::parse(&self.background),
            show_dots: !self.no_dots,
            stroke_color: self.stroke_color.clone(),
            stroke_width: self.stroke_width,
            dot_color: self.dot_color.clone(),
            padding: self.padding,
        }
    }

    /// Render request selected by the flags
    pub fn render_request(&self) -> RenderRequest {
        let mode = if self.animate {
            RenderMode::Animated {
                duration_ms: self.duration,
            }
        } else {
            RenderMode::Static
        };
        RenderRequest {
            mode,
            options: self.render_options(),
        }
    }

    /// Seed for the pattern at `index` in the batch
    pub fn seed_for(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }

    /// Output path for the pattern at `index` with the given extension
    ///
    /// Batches of more than one pattern get a one-based numeric suffix.
    pub fn output_path(&self, index: usize, extension: &str) -> PathBuf {
        let base = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{OUTPUT_STEM}.svg")));
        let stem = base
            .file_stem()
            .map_or_else(|| OUTPUT_STEM.to_string(), |s| s.to_string_lossy().to_string());
        let name = if self.count > 1 {
            format!("{stem}_{}.{extension}", index + 1)
        } else {
            format!("{stem}.{extension}")
        };
        base.with_file_name(name)
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Generates, renders and writes every pattern the CLI asks for
pub struct PatternProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PatternProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.count));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and write all requested patterns
    ///
    /// Returns every file written, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is invalid, generation or rendering
    /// fails, or an output file cannot be written.
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        self.cli.validate()?;

        let mut written = Vec::new();
        for index in 0..self.cli.count {
            written.extend(self.process_pattern(index)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    // Allow print for user feedback when animation falls back to static
    #[allow(clippy::print_stderr)]
    fn process_pattern(&mut self, index: usize) -> Result<Vec<PathBuf>> {
        let mut generator =
            KolamGenerator::new(self.cli.generator_config(), self.cli.seed_for(index));
        let pattern = generator.generate(self.cli.size)?;

        if let Some(ref pm) = self.progress_manager {
            pm.start_pattern(&pattern.name);
        }

        let request = self.cli.render_request();
        let rendered = render(&pattern, &request)?;
        if let Some(ref error) = rendered.recovered {
            if !self.cli.quiet {
                eprintln!("Animation unavailable ({error}); wrote a static SVG instead");
            }
        }

        let mut written = Vec::new();

        let svg_path = self.cli.output_path(index, "svg");
        write_text(&svg_path, &rendered.markup)?;
        written.push(svg_path);

        if self.cli.png {
            let png_path = self.cli.output_path(index, "png");
            export_pattern_as_png(&pattern, &request.options, self.cli.scale, &png_path)?;
            written.push(png_path);
        }

        if self.cli.embed {
            let html_path = self.cli.output_path(index, "html");
            write_text(&html_path, &embed_code(&pattern, &request)?)?;
            written.push(html_path);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_pattern();
        }

        Ok(written)
    }
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| KolamError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    std::fs::write(path, contents).map_err(|e| KolamError::FileSystem {
        path: path.to_path_buf(),
        operation: "write file",
        source: e,
    })
}
