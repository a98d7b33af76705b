//! Error handling for bulletin parsing and processing operations.
//!
//! Provides error types with context for document structure failures,
//! timestamp and coordinate normalization, area geometry validation,
//! and the file-level failures raised by the batch driver.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BulletinError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {source}")]
    Xml {
        #[from]
        source: quick_xml::Error,
    },

    #[error("Malformed bulletin: {field} - {reason}")]
    MalformedBulletin { field: String, reason: String },

    #[error("Invalid timestamp '{input}' (expected {expected})")]
    TimestampFormat {
        input: String,
        expected: &'static str,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Could not retrieve latitude and longitude from '{text}'")]
    LatLonFormat { text: String },

    #[error("Area '{area_type}' has {found} jmx_eb:Axis elements, expected 1 or 2")]
    AxisCount { area_type: String, found: usize },

    #[error("circle_short_direction must be empty, but is actually: {direction}")]
    ShortAxisNotEmpty { direction: String },

    #[error("Input directory not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Invalid bulletin file name: {path} - {reason}")]
    InvalidFileName { path: PathBuf, reason: String },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Processing failed for file: {path} - {reason}")]
    ProcessingFailed { path: PathBuf, reason: String },

    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl BulletinError {
    /// Create a malformed bulletin error for a missing or unusable field
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedBulletin {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::malformed(field, "required element not found")
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True for errors raised by the bulletin content itself rather than the driver
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Self::Xml { .. }
                | Self::MalformedBulletin { .. }
                | Self::TimestampFormat { .. }
                | Self::LatLonFormat { .. }
                | Self::AxisCount { .. }
                | Self::ShortAxisNotEmpty { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BulletinError>;
