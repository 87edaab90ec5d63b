//! Synthesized narration audio.

use base64::Engine;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::VoiceId;
use crate::segment::AudioSegment;

/// Narration returned by audio synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AudioTrack {
    /// Base64-encoded audio payload
    pub payload_base64: String,

    /// Suggested filename for the payload
    pub filename: String,

    /// Actual synthesized duration in seconds.
    ///
    /// Clip selection aligns against this value, never against the
    /// pre-synthesis estimate.
    pub duration_seconds: f64,

    /// Voice the narration was rendered with
    pub voice_id: VoiceId,

    /// Per-segment timing, in narrative order
    pub segments: Vec<AudioSegment>,
}

impl AudioTrack {
    /// Decode the base64 payload into raw audio bytes.
    pub fn decode_payload(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(&self.payload_base64)
    }

    /// Approximate payload size in bytes without decoding.
    pub fn payload_size_bytes(&self) -> usize {
        self.payload_base64.len() / 4 * 3
    }
}
