//! Clip matching models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stock clip matched to a script segment, scored by the backend.
///
/// Read-only on the client; the list order is the backend's ranking by
/// `final_score` descending and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipMatch {
    /// Backend clip identifier
    pub clip_id: String,

    /// Clip filename in the backend library
    pub filename: String,

    /// Clip duration in seconds
    pub duration_seconds: f64,

    /// Text of the script segment this clip was matched against
    pub source_segment_text: String,

    /// Semantic similarity to the source segment (0-1)
    pub similarity_score: f64,

    /// Combined ranking score (0-1)
    pub final_score: f64,

    /// Intrinsic visual quality (0-1)
    pub quality_score: f64,

    /// Amount of motion in the clip (0-1)
    pub motion_intensity: f64,

    /// Concepts detected in the clip
    pub concept_tags: Vec<String>,

    /// Emotions detected in the clip
    pub emotion_tags: Vec<String>,
}

/// Result of clip selection for a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipSelection {
    /// Selected clips, ranked by the backend
    pub selected_clips: Vec<ClipMatch>,

    /// Combined duration of the selected clips in seconds
    pub total_duration_seconds: f64,

    /// Predicted audience engagement (0-1)
    pub estimated_engagement: f64,

    /// Visual consistency across the selected clips (0-1)
    pub visual_coherence: f64,

    /// How well clip durations cover the narration (0-1)
    pub duration_compatibility: f64,

    /// Non-fatal notes from selection (e.g. fewer matches than requested)
    pub warnings: Vec<String>,
}

impl ClipSelection {
    /// Whether the clips arrived in the backend's ranked order.
    pub fn is_ranked(&self) -> bool {
        self.selected_clips
            .windows(2)
            .all(|pair| pair[0].final_score >= pair[1].final_score)
    }

    /// Highest-ranked clip, if any were selected.
    pub fn top_clip(&self) -> Option<&ClipMatch> {
        self.selected_clips.first()
    }
}
