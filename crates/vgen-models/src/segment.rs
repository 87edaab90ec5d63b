//! Script segment models and the spoken-duration estimator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrative role of a segment within the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Opening hook that earns attention
    Hook,
    /// Main body content
    Content,
    /// Call to action
    Cta,
    /// Kinds introduced server-side that this client does not know yet
    #[serde(other)]
    Other,
}

impl SegmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Hook => "hook",
            SegmentKind::Content => "content",
            SegmentKind::Cta => "cta",
            SegmentKind::Other => "other",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sub-unit of the enhanced script, in narrative order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScriptSegment {
    /// Segment text
    pub text: String,

    /// Estimated speaking duration in seconds
    pub duration_seconds: f64,

    /// Narrative role
    pub kind: SegmentKind,
}

impl ScriptSegment {
    /// Create a segment with its duration estimated from the text.
    pub fn with_estimated_duration(text: impl Into<String>, kind: SegmentKind) -> Self {
        let text = text.into();
        let duration_seconds = estimate_spoken_seconds(&text);
        Self {
            text,
            duration_seconds,
            kind,
        }
    }
}

/// Per-segment timing as returned by audio synthesis.
///
/// Unlike [`ScriptSegment`], durations here are measured from the actual
/// synthesized waveform, not estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AudioSegment {
    /// Segment text
    pub text: String,

    /// Narrative role
    pub kind: SegmentKind,

    /// Emotion the voice was rendered with
    pub emotion: String,

    /// Actual spoken duration in seconds
    pub duration_seconds: f64,

    /// Playback speed factor applied
    pub speed: f64,
}

/// Minimum number of words a script must have before the wizard advances
/// past the first step.
pub const MIN_SCRIPT_WORDS: usize = 5;

/// Average speaking rate used for duration estimates (150 words per minute).
pub const WORDS_PER_SECOND: f64 = 2.5;

/// Count whitespace-separated words in a script.
pub fn word_count(script: &str) -> usize {
    script.split_whitespace().count()
}

/// Estimate how many seconds a script takes to narrate at the standard rate.
pub fn estimate_spoken_seconds(script: &str) -> f64 {
    word_count(script) as f64 / WORDS_PER_SECOND
}
