//! Command-line interface components.

use crate::config::ProcessorConfig;
use crate::error::Result;
use crate::schema::OutputShape;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "typhoon-processor")]
#[command(about = "Convert JMA typhoon forecast XML bulletins to JSON records")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory holding the bulletin XML files
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output directory (consolidated) or JSON-Lines file (detailed)
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// Output framing
    #[arg(long, value_enum)]
    pub shape: Option<OutputShape>,

    /// Environment tag written to every record
    #[arg(long)]
    pub env: Option<String>,

    /// Storage bucket name used in source paths
    #[arg(long)]
    pub bucket: Option<String>,

    /// JSON configuration file; command-line flags take precedence
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maximum bulletins parsed concurrently
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Stop at the first bulletin that fails to process
    #[arg(long)]
    pub fail_fast: bool,

    /// Enable verbose logging (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors; hides progress output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get the log level string based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the configuration: defaults, then the config file, then flags
    pub fn load_config(&self) -> Result<ProcessorConfig> {
        let mut config = match &self.config {
            Some(path) => ProcessorConfig::from_file(path)?,
            None => ProcessorConfig::default(),
        };

        if let Some(shape) = self.shape {
            config = config.with_output_shape(shape);
        }
        if let Some(env) = &self.env {
            config = config.with_env(env.clone());
        }
        if let Some(bucket) = &self.bucket {
            config = config.with_bucket_name(bucket.clone());
        }
        if let Some(jobs) = self.jobs {
            config = config.with_max_concurrent_files(jobs);
        }
        if self.fail_fast {
            config = config.with_fail_fast();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["typhoon-processor", "xml"]);
        assert_eq!(args.input_dir, PathBuf::from("xml"));
        assert_eq!(args.get_log_level(), "warn");

        let config = args.load_config().unwrap();
        assert_eq!(config, ProcessorConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"env": "staging", "bucket_name": "from-file"}}"#).unwrap();
        let config_path = file.path().to_string_lossy().to_string();

        let args = Args::parse_from([
            "typhoon-processor",
            "xml",
            "--config",
            &config_path,
            "--bucket",
            "from-flag",
            "--shape",
            "detailed",
            "--jobs",
            "2",
            "--fail-fast",
        ]);
        let config = args.load_config().unwrap();

        assert_eq!(config.env, "staging");
        assert_eq!(config.bucket_name, "from-flag");
        assert_eq!(config.output_shape, OutputShape::Detailed);
        assert_eq!(config.max_concurrent_files, 2);
        assert!(config.fail_fast);
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let args = Args::parse_from(["typhoon-processor", "xml", "--jobs", "0"]);
        assert!(args.load_config().is_err());
    }

    #[test]
    fn test_log_levels() {
        let args = Args::parse_from(["typhoon-processor", "xml", "-vv"]);
        assert_eq!(args.get_log_level(), "debug");

        let args = Args::parse_from(["typhoon-processor", "xml", "-q"]);
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["typhoon-processor", "xml", "-q", "-v"]).is_err());
    }
}
