/// Command-line arguments and the batch processor
pub mod cli;
/// Generation constants and rendering defaults
pub mod configuration;
/// Error type shared by the crate
pub mod error;
/// PNG rasterisation and export
pub mod image;
/// Batch progress display
pub mod progress;
