//! Metadata envelope wrapped around each bulletin payload.
//!
//! The envelope records where a bulletin came from and when it was fetched.
//! The fetch time is encoded in the first 14 characters of the bulletin's
//! file name as a compact UTC stamp.

use crate::config::ProcessorConfig;
use crate::constants::timestamps::FILE_NAME_STAMP_LEN;
use crate::error::{BulletinError, Result};
use crate::timestamp::{convert_type_b, format_envelope};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub subscription_name: String,
    pub message_id: String,
    pub publish_time: String,
    pub attributes: BTreeMap<String, String>,
    pub env: String,
    pub risk_type: String,
    pub risk_source: String,
    pub version: String,
    pub source_fetch_timestamp: String,
    pub source_path: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Envelope {
    /// Build the envelope for one bulletin file, stamped with `now`
    pub fn for_file(path: &Path, config: &ProcessorConfig, now: DateTime<Utc>) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| BulletinError::InvalidFileName {
                path: path.to_path_buf(),
                reason: "file name is not valid UTF-8".to_string(),
            })?;

        let stamp = file_name
            .get(..FILE_NAME_STAMP_LEN)
            .ok_or_else(|| BulletinError::InvalidFileName {
                path: path.to_path_buf(),
                reason: format!(
                    "expected a {}-character YYYYMMDDHHMMSS prefix",
                    FILE_NAME_STAMP_LEN
                ),
            })?;

        let source_fetch_timestamp =
            convert_type_b(stamp).map_err(|e| BulletinError::InvalidFileName {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let now_str = format_envelope(&now);

        Ok(Self {
            subscription_name: String::new(),
            message_id: String::new(),
            publish_time: now_str.clone(),
            attributes: BTreeMap::new(),
            env: config.env.clone(),
            risk_type: config.risk_type.clone(),
            risk_source: config.risk_source.clone(),
            version: config.version.clone(),
            source_fetch_timestamp,
            source_path: format!("/{}/{}", config.bucket_name, file_name),
            created_at: now_str.clone(),
            updated_at: now_str,
        })
    }
}
