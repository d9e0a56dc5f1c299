//! Error types for the blueprint pipeline.

use thiserror::Error;
use vessel_ir::ValidationError;

use crate::export::ExportFormat;

/// Errors that can occur while building, recomputing or exporting a blueprint.
#[derive(Error, Debug)]
pub enum VesselError {
    /// A document field is outside its declared range.
    #[error("invalid document: {0}")]
    Validation(#[from] ValidationError),

    /// The requested export format is not one of the known formats.
    #[error("unsupported export format '{format}' (expected one of: {})", ExportFormat::names().join(", "))]
    UnsupportedFormat {
        /// The rejected selector, as supplied.
        format: String,
    },

    /// Cup count outside `[1, 12]`.
    #[error("cup count {0} must lie in [1, 12]")]
    InvalidCups(f64),

    /// Document (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading settings or writing an artifact failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed.
    #[error("invalid settings: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for blueprint operations.
pub type Result<T> = std::result::Result<T, VesselError>;
