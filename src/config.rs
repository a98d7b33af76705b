//! Configuration management and validation.
//!
//! Provides the processing configuration: envelope identifiers, output
//! shape and concurrency settings. Values are layered as defaults, then an
//! optional JSON config file, then command-line overrides.

use crate::constants::envelope;
use crate::error::{BulletinError, Result};
use crate::schema::OutputShape;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Global configuration for bulletin processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Environment tag written to every envelope
    pub env: String,

    /// Risk type identifier
    pub risk_type: String,

    /// Risk source identifier
    pub risk_source: String,

    /// Output schema version
    pub version: String,

    /// Storage bucket used to build `source_path`
    pub bucket_name: String,

    /// Output framing
    pub output_shape: OutputShape,

    /// Maximum files parsed concurrently
    pub max_concurrent_files: usize,

    /// Abort the run on the first failed file instead of skipping it
    pub fail_fast: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            env: envelope::DEFAULT_ENV.to_string(),
            risk_type: envelope::RISK_TYPE.to_string(),
            risk_source: envelope::RISK_SOURCE.to_string(),
            version: envelope::SCHEMA_VERSION.to_string(),
            bucket_name: envelope::DEFAULT_BUCKET.to_string(),
            output_shape: OutputShape::default(),
            max_concurrent_files: num_cpus::get(),
            fail_fast: false,
        }
    }
}

impl ProcessorConfig {
    /// Load configuration from a JSON file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            BulletinError::configuration(format!(
                "invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check values that would otherwise produce unusable output
    pub fn validate(&self) -> Result<()> {
        if self.max_concurrent_files == 0 {
            return Err(BulletinError::configuration(
                "max_concurrent_files must be at least 1",
            ));
        }
        for (name, value) in [
            ("env", &self.env),
            ("risk_type", &self.risk_type),
            ("risk_source", &self.risk_source),
            ("version", &self.version),
            ("bucket_name", &self.bucket_name),
        ] {
            if value.trim().is_empty() {
                return Err(BulletinError::configuration(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Set the environment tag
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    /// Set the storage bucket name
    pub fn with_bucket_name(mut self, bucket_name: impl Into<String>) -> Self {
        self.bucket_name = bucket_name.into();
        self
    }

    /// Select the output framing
    pub fn with_output_shape(mut self, shape: OutputShape) -> Self {
        self.output_shape = shape;
        self
    }

    /// Set maximum concurrent files
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.max_concurrent_files = max_files;
        self
    }

    /// Abort on the first failed file
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProcessorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_shape, OutputShape::Consolidated);
        assert!(config.max_concurrent_files >= 1);
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = ProcessorConfig::default().with_max_concurrent_files(0);
        assert!(matches!(
            config.validate(),
            Err(BulletinError::Configuration { .. })
        ));
    }

    #[test]
    fn test_empty_env_rejected() {
        let config = ProcessorConfig::default().with_env("  ");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("env"));
    }

    #[test]
    fn test_partial_config_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"env": "staging", "output_shape": "detailed", "fail_fast": true}}"#
        )
        .unwrap();

        let config = ProcessorConfig::from_file(file.path()).unwrap();

        assert_eq!(config.env, "staging");
        assert_eq!(config.output_shape, OutputShape::Detailed);
        assert!(config.fail_fast);
        assert_eq!(config.risk_source, "jma");
        assert_eq!(config.version, "2022-11-01");
    }

    #[test]
    fn test_invalid_config_file_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "env = staging").unwrap();
        let err = ProcessorConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, BulletinError::Configuration { .. }));
    }
}
