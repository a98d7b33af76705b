//! Output writing for processed bulletins
//!
//! Consolidated output writes one pretty-printed JSON array of observations
//! per bulletin into a directory. Detailed output appends one JSON line per
//! bulletin to a single file, in input order. Detailed lines go to a sibling
//! `.tmp` file that only replaces the target once the run finishes, so an
//! aborted run never leaves a truncated record behind.

use crate::envelope::Envelope;
use crate::error::Result;
use crate::models::Bulletin;
use crate::schema::{DetailedRecord, OutputShape};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, warn};

/// Writer for one run's output
#[derive(Debug)]
pub enum OutputWriter {
    Consolidated {
        output_dir: PathBuf,
    },
    Detailed {
        path: PathBuf,
        temp_path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl OutputWriter {
    /// Prepare the output location for `shape`
    pub async fn create(shape: OutputShape, output_path: &Path) -> Result<Self> {
        match shape {
            OutputShape::Consolidated => {
                fs::create_dir_all(output_path).await?;
                Ok(Self::Consolidated {
                    output_dir: output_path.to_path_buf(),
                })
            }
            OutputShape::Detailed => {
                if let Some(parent) = output_path.parent() {
                    fs::create_dir_all(parent).await?;
                }
                let temp_path = temp_path_for(output_path);
                let file = File::create(&temp_path).await?;
                Ok(Self::Detailed {
                    path: output_path.to_path_buf(),
                    temp_path,
                    writer: BufWriter::new(file),
                })
            }
        }
    }

    /// Write one bulletin, returning the path it lands in
    pub async fn write(
        &mut self,
        source: &Path,
        meta: Envelope,
        bulletin: Bulletin,
    ) -> Result<PathBuf> {
        match self {
            Self::Consolidated { output_dir } => {
                let stem = source
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default();
                let path = output_dir.join(format!("{}.json", stem));

                let json = serde_json::to_string_pretty(&bulletin.observations)?;
                fs::write(&path, json).await?;

                debug!("Wrote {}", path.display());
                Ok(path)
            }
            Self::Detailed {
                path,
                temp_path,
                writer,
            } => {
                let record = DetailedRecord::new(meta, &bulletin);
                let mut line = serde_json::to_vec(&record)?;
                line.push(b'\n');
                writer.write_all(&line).await?;

                debug!(
                    "Appended {} rows from {} to {}",
                    record.row_count(),
                    source.display(),
                    temp_path.display()
                );
                Ok(path.clone())
            }
        }
    }

    /// Flush buffered output and move it into place
    pub async fn finish(self) -> Result<()> {
        if let Self::Detailed {
            path,
            temp_path,
            mut writer,
        } = self
        {
            writer.flush().await?;
            drop(writer);
            fs::rename(&temp_path, &path).await?;
            debug!("Moved {} to {}", temp_path.display(), path.display());
        }
        Ok(())
    }

    /// Discard partial output after a failed run
    pub async fn abort(self) {
        if let Self::Detailed {
            temp_path,
            mut writer,
            ..
        } = self
        {
            if let Err(e) = writer.flush().await {
                warn!("Could not flush {}: {}", temp_path.display(), e);
            }
            drop(writer);
            if let Err(e) = fs::remove_file(&temp_path).await {
                warn!("Could not remove {}: {}", temp_path.display(), e);
            }
        }
    }
}

/// `output.jsonl` -> `output.jsonl.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_path_keeps_extension() {
        assert_eq!(
            temp_path_for(Path::new("out/output.jsonl")),
            PathBuf::from("out/output.jsonl.tmp")
        );
    }
}
