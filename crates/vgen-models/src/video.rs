//! Assembled video descriptor.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata attached to an assembled video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoResultMetadata {
    /// Number of clips stitched into the video
    pub clips_count: u32,

    /// Additional backend-provided fields, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Descriptor of the assembled video, as returned by the backend.
///
/// Persistence of the actual video is the backend's responsibility; the
/// client only hands this descriptor to a preview surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoResult {
    /// Where the assembled video can be fetched
    pub url: String,

    /// Final video duration in seconds
    pub duration_seconds: f64,

    /// Assembly metadata
    pub metadata: VideoResultMetadata,
}

impl VideoResult {
    /// Encode the descriptor for use as a URL query parameter value, the
    /// form in which it is handed to the preview screen.
    pub fn to_query_value(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(urlencoding::encode(&json).into_owned())
    }
}
