use std::fmt::Write as _;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::CacheError;

/// One cached pipeline result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Output text of the cached stage.
    pub output: String,
    /// Position map produced alongside `output`, if any.
    #[serde(default)]
    pub position_map: Option<Value>,
    /// Creation time, milliseconds since the Unix epoch.
    pub created_at: u64,
    /// The options the entry was keyed with.
    #[serde(default)]
    pub options: Value,
}

impl CacheEntry {
    pub(crate) fn new(output: String, position_map: Option<Value>, options: Value) -> Self {
        Self {
            output,
            position_map,
            created_at: now_millis(),
            options,
        }
    }

    /// Age in milliseconds relative to `now`, zero for future timestamps.
    pub(crate) fn age_millis(&self, now: u64) -> u64 {
        now.saturating_sub(self.created_at)
    }
}

/// Lower-case hex SHA-256 of the JSON object `{"code": source, "options": options}`.
///
/// `serde_json` writes object keys in sorted order, so equal option values
/// always hash the same regardless of how they were built.
pub fn content_hash(source: &str, options: &Value) -> String {
    let key = serde_json::json!({ "code": source, "options": options });
    let digest = Sha256::digest(key.to_string().as_bytes());
    let mut hex = String::with_capacity(64);
    for byte in digest.iter() {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}

pub(crate) fn options_value<O: Serialize + ?Sized>(options: &O) -> Result<Value, CacheError> {
    serde_json::to_value(options).map_err(CacheError::Options)
}

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
