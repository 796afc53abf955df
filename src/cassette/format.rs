//! On-disk cassette format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session: every port interaction in call order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Cassette name, usually `<timestamp>-<ports>`.
    pub name: String,
    /// When the recording finished.
    pub recorded_at: DateTime<Utc>,
    /// Git commit the recording was made from.
    pub commit: String,
    /// Recorded interactions.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

/// One call through a port.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Global sequence number within the cassette.
    pub seq: u64,
    /// Port name (e.g., `"image_service"`).
    pub port: String,
    /// Method name (e.g., `"request_image"`).
    pub method: String,
    /// Serialized input.
    pub input: serde_json::Value,
    /// Serialized `{"Ok": ...}` or `{"Err": "..."}` output.
    pub output: serde_json::Value,
}
