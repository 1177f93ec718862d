// ABOUTME: Typed read-only views over opaque PDC image records
// ABOUTME: Used for text rendering; JSON output always uses the raw record

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// The fields needed for one line of `image list`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageSummary {
    pub file_name: String,
    #[serde(default)]
    pub sha256: String,
}

/// The fields shown by `image info`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageDetails {
    pub file_name: String,
    pub image_type: Option<String>,
    pub image_format: Option<String>,
    pub arch: Option<String>,
    pub disc_number: u32,
    pub disc_count: u32,
    /// Seconds since the epoch, integral or fractional.
    pub mtime: Number,
    pub size: u64,
    #[serde(default, deserialize_with = "truthy")]
    pub bootable: bool,
    pub volume_id: Option<String>,
    pub implant_md5: Option<String>,
    pub subvariant: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    #[serde(default)]
    pub composes: Option<Vec<String>>,
}

impl ImageDetails {
    pub fn from_record(record: &Value) -> serde_json::Result<Self> {
        Self::deserialize(record)
    }

    pub fn composes(&self) -> &[String] {
        self.composes.as_deref().unwrap_or_default()
    }

    /// `mtime` truncated to whole seconds.
    pub fn mtime_seconds(&self) -> Option<i64> {
        self.mtime
            .as_i64()
            .or_else(|| self.mtime.as_f64().map(|secs| secs.floor() as i64))
    }
}

impl ImageSummary {
    pub fn from_record(record: &Value) -> serde_json::Result<Self> {
        Self::deserialize(record)
    }
}

// Any JSON value: null, false, 0, "" and empty containers are false.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}
