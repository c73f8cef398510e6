//! Generation constants and rendering defaults

// Grid and tile geometry
/// Default side length of the dot grid
pub const DEFAULT_GRID_SIZE: usize = 7;
/// Side length of one grid cell in output units
pub const DEFAULT_CELL_SIZE: f64 = 40.0;
/// Radius of the dot drawn at each cell centre
pub const DEFAULT_DOT_RADIUS: f64 = 3.0;
/// Number of tiles in the standard library
pub const TILE_COUNT: usize = 16;
/// Id of the blank tile (no stubs, compatible with every connecting tile)
pub const BLANK_TILE: usize = 1;

// Tile curve sampling
/// Distance from the cell centre to a stub (edge midpoint) in unit-cell space
pub const STUB_RADIUS: f64 = 0.5;
/// Closest approach of a tile curve to its centre dot in unit-cell space
pub const LOOP_RADIUS: f64 = 0.3;
/// Samples taken along a tile curve per quarter turn around the dot
pub const SAMPLES_PER_QUARTER_TURN: usize = 4;

// Animation timing
/// Default total reveal duration for animated output
pub const DEFAULT_DURATION_MS: f64 = 3000.0;
/// Floor for the per-curve reveal duration
pub const MIN_CURVE_STEP_MS: f64 = 20.0;
/// Opacity fade applied at the start of each curve reveal
pub const CURVE_FADE_MS: f64 = 50.0;
/// Opacity fade applied to each dot
pub const DOT_FADE_MS: f64 = 200.0;

// Default brush
/// Background colour used when none is requested
pub const DEFAULT_BACKGROUND: &str = "#fef3c7";
/// Sentinel that disables the background rectangle
pub const TRANSPARENT_BACKGROUND: &str = "transparent";
/// Stroke colour used for curves (and dots without their own colour)
pub const DEFAULT_STROKE_COLOR: &str = "#92400e";
/// Stroke width used for curves
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

// Markup number formatting
/// Decimal places kept for coordinates, lengths and times
pub const COORDINATE_PRECISION: i32 = 2;
/// Line pieces used per Bézier segment when measuring path length
pub const LENGTH_SUBDIVISIONS: usize = 16;

// Output settings
/// File stem used when no output path is given
pub const OUTPUT_STEM: &str = "kolam";
/// Default raster scale factor for PNG export
pub const DEFAULT_PNG_SCALE: u32 = 2;

// Progress bar display settings
/// Pattern count above which a progress bar is shown
pub const PROGRESS_THRESHOLD: usize = 1;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
