//! Error types shared by generation, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all kolam operations
#[derive(Debug)]
pub enum KolamError {
    /// A caller-supplied value failed validation
    ///
    /// Covers non-positive grid sizes as well as malformed CLI or render
    /// parameters. Raised before any grid or markup is allocated.
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The search ran out of candidates for the first cell
    ///
    /// Only reachable when the connectivity table is inconsistent; treated as
    /// a fatal configuration error and never retried.
    UnsatisfiablePlacement {
        /// Row of the cell that could not be filled
        row: usize,
        /// Column of the cell that could not be filled
        col: usize,
        /// Side length of the grid being generated
        grid_size: usize,
    },

    /// Tile id outside the library range
    InvalidTileIndex {
        /// The invalid tile id
        index: usize,
        /// Largest valid tile id
        max_tiles: usize,
    },

    /// Markup construction failed for the supplied pattern or options
    Render {
        /// Render stage that failed
        stage: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save a rasterised pattern
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnsatisfiablePlacement {
                row,
                col,
                grid_size,
            } => {
                write!(
                    f,
                    "No compatible tile for cell ({row}, {col}) of a {grid_size}x{grid_size} grid; \
                     the connectivity table is inconsistent"
                )
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile id {index} is out of bounds (max: {max_tiles})")
            }
            Self::Render { stage, reason } => {
                write!(f, "Render error in {stage}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for KolamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for kolam results
pub type Result<T> = std::result::Result<T, KolamError>;

impl From<fmt::Error> for KolamError {
    fn from(_: fmt::Error) -> Self {
        Self::Render {
            stage: "markup",
            reason: "formatter rejected output".to_string(),
        }
    }
}

impl From<std::io::Error> for KolamError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KolamError {
    KolamError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a render error
pub fn render_error(stage: &'static str, reason: &impl ToString) -> KolamError {
    KolamError::Render {
        stage,
        reason: reason.to_string(),
    }
}
