//! Error types for gobo generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for gobo operations
pub type Result<T> = std::result::Result<T, GoboError>;

/// Errors that can occur while generating or saving gobos
#[derive(Error, Debug)]
pub enum GoboError {
    /// A flower needs at least three lobes to form a simple polygon
    #[error("a flower needs at least 3 points, got {0}")]
    TooFewPoints(u32),

    /// Canvas side length of zero
    #[error("canvas size must be positive")]
    EmptyCanvas,

    /// Outline resolution too low to enclose an area
    #[error("sample count must be at least 3, got {0}")]
    TooFewSamples(usize),

    /// Radius fractions outside their allowed ranges
    #[error("invalid radius fractions: outer {outer} (0, 0.5], inner {inner} (0, 1]")]
    InvalidRadii { outer: f64, inner: f64 },

    /// Consecutive ids would run past `u32::MAX`
    #[error("{count} gobos starting at id {first_id} overflow the id range")]
    IdOverflow { first_id: u32, count: usize },

    /// Output directory could not be created
    #[error("cannot create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image could not be encoded or written
    #[error("cannot write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
