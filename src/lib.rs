//! Typhoon Bulletin Processor Library
//!
//! Converts Japan Meteorological Agency typhoon analysis and forecast XML
//! bulletins into structured JSON records.
//!
//! This library provides tools for:
//! - Parsing bulletins into a [`Bulletin`] summary plus per-time-point observations
//! - Normalizing bulletin timestamps and center coordinates
//! - Validating warning-area and forecast-circle axis geometry
//! - Wrapping each bulletin in a metadata envelope for downstream loaders
//! - Batch processing a directory into consolidated JSON or JSON-Lines output

pub mod cli;
pub mod config;
pub mod constants;
pub mod document;
pub mod envelope;
pub mod error;
pub mod models;
pub mod parser;
pub mod processor;
pub mod schema;
pub mod timestamp;

// Re-export commonly used types
pub use config::ProcessorConfig;
pub use envelope::Envelope;
pub use error::{BulletinError, Result};
pub use models::{Area, AreaType, Bulletin, BulletinSummary, Observation, ProcessingStats};
pub use parser::{parse_bulletin, parse_bulletin_str};
pub use processor::BulletinProcessor;
pub use schema::OutputShape;
