//! Batch driver for bulletin directories.
//!
//! Discovers bulletin files, parses them concurrently, wraps each result in
//! its metadata envelope and writes the selected output shape. Results are
//! consumed in input order so detailed output lines follow file order.

pub mod discovery;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{discovery::discover_bulletin_files, writer::OutputWriter};

use crate::config::ProcessorConfig;
use crate::constants::{CONSOLIDATED_OUTPUT_DIR, DETAILED_OUTPUT_FILE};
use crate::envelope::Envelope;
use crate::error::{BulletinError, Result};
use crate::models::{Bulletin, ProcessingStats};
use crate::parser::parse_bulletin_str;
use crate::schema::OutputShape;

use chrono::Utc;
use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::pin::pin;
use std::time::Instant;
use tokio::fs;
use tokio::task;
use tracing::{debug, error, info};

/// Main processor for bulletin directories
#[derive(Debug)]
pub struct BulletinProcessor {
    input_dir: PathBuf,
    output_path: Option<PathBuf>,
    config: ProcessorConfig,
    show_progress: bool,
}

impl BulletinProcessor {
    /// Create a new processor; the output path defaults per output shape
    pub fn new(input_dir: PathBuf, output_path: Option<PathBuf>) -> Result<Self> {
        if !input_dir.is_dir() {
            return Err(BulletinError::InputNotFound { path: input_dir });
        }

        Ok(Self {
            input_dir,
            output_path,
            config: ProcessorConfig::default(),
            show_progress: true,
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    /// Hide the progress bar and summary
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Resolved output location: a directory for consolidated output,
    /// a file for detailed output
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.output_path {
            return path.clone();
        }

        let base = self
            .input_dir
            .parent()
            .unwrap_or_else(|| Path::new("."));
        match self.config.output_shape {
            OutputShape::Consolidated => base.join(CONSOLIDATED_OUTPUT_DIR),
            OutputShape::Detailed => base.join(DETAILED_OUTPUT_FILE),
        }
    }

    /// Main processing entry point
    pub async fn process(&mut self) -> Result<ProcessingStats> {
        self.config.validate()?;

        let start_time = Instant::now();
        let output_path = self.output_path();

        if self.show_progress {
            println!(
                "{}",
                "Starting typhoon bulletin processing".bright_green().bold()
            );
            println!(
                "  {} {}",
                "Input:".bright_cyan(),
                self.input_dir.display()
            );
            println!("  {} {}", "Output:".bright_cyan(), output_path.display());
            println!(
                "  {} {:?}",
                "Shape:".bright_cyan(),
                self.config.output_shape
            );
        }

        let files = discover_bulletin_files(&self.input_dir)?;
        info!("Discovered {} bulletin files", files.len());

        if files.is_empty() {
            return Ok(ProcessingStats {
                processing_time_ms: start_time.elapsed().as_millis(),
                ..ProcessingStats::default()
            });
        }

        let mut output = OutputWriter::create(self.config.output_shape, &output_path).await?;
        let mut stats = match self.process_files(&files, &mut output).await {
            Ok(stats) => {
                output.finish().await?;
                stats
            }
            Err(e) => {
                output.abort().await;
                return Err(e);
            }
        };

        stats.processing_time_ms = start_time.elapsed().as_millis();
        if self.show_progress {
            print_summary(&stats);
        }
        Ok(stats)
    }

    async fn process_files(
        &self,
        files: &[PathBuf],
        output: &mut OutputWriter,
    ) -> Result<ProcessingStats> {
        let pb = if self.show_progress {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                    .map_err(|e| BulletinError::configuration(e.to_string()))?
                    .progress_chars("#>-"),
            );
            pb.set_message("Processing bulletins");
            pb
        } else {
            ProgressBar::hidden()
        };

        let concurrent_limit = self.config.max_concurrent_files.min(files.len()).max(1);
        debug!("Processing with concurrency {}", concurrent_limit);

        let mut results = pin!(stream::iter(files)
            .map(|path| {
                let pb = pb.clone();
                let config = &self.config;
                async move {
                    if let Some(file_name) = path.file_name() {
                        pb.set_message(format!("Processing: {}", file_name.to_string_lossy()));
                    }
                    let result = load_bulletin(path, config).await;
                    pb.inc(1);
                    (path, result)
                }
            })
            .buffered(concurrent_limit));

        let mut stats = ProcessingStats::default();
        while let Some((path, result)) = results.next().await {
            match result {
                Ok((meta, bulletin)) => {
                    stats.files_processed += 1;
                    stats.observations += bulletin.observations.len();
                    stats.areas += bulletin
                        .observations
                        .iter()
                        .map(|o| o.warning_areas.len())
                        .sum::<usize>();

                    let written = output.write(path, meta, bulletin).await?;
                    if !stats.output_paths.contains(&written) {
                        stats.output_paths.push(written);
                    }
                }
                Err(e) if self.config.fail_fast => {
                    pb.abandon_with_message("Aborted");
                    return Err(BulletinError::ProcessingFailed {
                        path: path.clone(),
                        reason: format!("{:#}", e),
                    });
                }
                Err(e) => {
                    error!("Failed to process {}: {:#}", path.display(), e);
                    stats.files_failed += 1;
                }
            }
        }

        pb.finish_with_message("All bulletins processed");
        Ok(stats)
    }
}

/// Read, parse and wrap one bulletin file
pub async fn load_bulletin(path: &Path, config: &ProcessorConfig) -> Result<(Envelope, Bulletin)> {
    let meta = Envelope::for_file(path, config, Utc::now())?;
    let content = fs::read_to_string(path).await?;

    let bulletin = task::spawn_blocking(move || parse_bulletin_str(&content))
        .await
        .map_err(|e| BulletinError::ProcessingFailed {
            path: path.to_path_buf(),
            reason: format!("parser task failed: {}", e),
        })??;

    debug!(
        "Parsed {} observations from {}",
        bulletin.observations.len(),
        path.display()
    );
    Ok((meta, bulletin))
}

fn print_summary(stats: &ProcessingStats) {
    println!("\n{}", "Processing Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time_ms.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files processed:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    if stats.files_failed > 0 {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
    }
    println!(
        "  {} {}",
        "Observations:".bright_cyan(),
        stats.observations.to_string().bright_white().bold()
    );
    println!(
        "  {} {}",
        "Areas:".bright_cyan(),
        stats.areas.to_string().bright_white().bold()
    );
}
