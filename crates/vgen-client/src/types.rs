//! Backend request/response types.
//!
//! The backend speaks Spanish for its top-level field names; the serde
//! renames below keep the wire contract intact while the Rust structs use
//! the model vocabulary.

use serde::{Deserialize, Serialize};
use validator::Validate;

use vgen_models::{
    AudioSegment, AudioTrack, Category, ClipMatch, ClipSelection, Draft, EnhanceOutcome,
    Enhancement, ScriptDraft, ScriptSegment, SegmentKind, VideoId, VideoResult,
    VideoResultMetadata, VoiceId, VoiceSelection,
};

/// Clips requested from selection unless the caller overrides it.
pub const DEFAULT_TARGET_CLIPS: u32 = 3;

/// Emotion applied to segments that do not specify one.
pub const DEFAULT_EMOTION: &str = "neutral";

/// Pause inserted after each narrated segment, in seconds.
pub const DEFAULT_PAUSE_AFTER_SECS: f64 = 0.5;

/// Request for `POST /script/enhance`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnhanceRequest {
    /// Raw user script
    #[validate(length(min = 1, message = "script must not be empty"))]
    pub script: String,
    /// Content category
    pub category: String,
}

impl EnhanceRequest {
    pub fn new(draft: &ScriptDraft) -> Self {
        Self {
            script: draft.raw_script.clone(),
            category: draft.category.to_string(),
        }
    }
}

/// Response from `POST /script/enhance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhanceResponse {
    #[serde(rename = "script_mejorado")]
    pub enhanced_script: String,

    #[serde(rename = "duracion_estimada")]
    pub estimated_duration_seconds: f64,

    #[serde(rename = "segmentos")]
    pub segments: Vec<ScriptSegment>,

    #[serde(rename = "palabras_clave", default)]
    pub keywords: Vec<String>,

    #[serde(rename = "tono", default)]
    pub tone: String,

    #[serde(rename = "mejoras_aplicadas", default)]
    pub improvements: Vec<String>,
}

impl EnhanceResponse {
    pub fn into_enhancement(self) -> Enhancement {
        Enhancement {
            script: self.enhanced_script,
            estimated_duration_seconds: self.estimated_duration_seconds,
            segments: self.segments,
            keywords: self.keywords,
            tone: self.tone,
            improvements: self.improvements,
            outcome: EnhanceOutcome::Enhanced,
        }
    }
}

/// One segment of an audio synthesis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioRequestSegment {
    pub text: String,
    pub kind: SegmentKind,
    pub emotion: String,
    pub pause_after: f64,
    pub speed: f64,
}

/// Segment list wrapper as the audio endpoint expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioScriptPayload {
    #[serde(rename = "segmentos")]
    pub segments: Vec<AudioRequestSegment>,
}

/// Request for `POST /audio/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioRequest {
    /// Full script text
    pub script: String,
    /// Narration voice
    pub voice_id: VoiceId,
    /// Correlation token for this generation run
    pub video_id: VideoId,
    /// Segments to synthesize, in narrative order
    pub enhanced_script: AudioScriptPayload,
}

impl AudioRequest {
    /// Build a synthesis request from an enhancement and voice selection.
    ///
    /// Segments inherit the selected speed; emotion and pauses use the
    /// backend defaults until per-segment direction exists.
    pub fn new(enhancement: &Enhancement, voice: &VoiceSelection, video_id: VideoId) -> Self {
        let segments = enhancement
            .segments
            .iter()
            .map(|segment| AudioRequestSegment {
                text: segment.text.clone(),
                kind: segment.kind,
                emotion: DEFAULT_EMOTION.to_string(),
                pause_after: DEFAULT_PAUSE_AFTER_SECS,
                speed: voice.speed.as_f64(),
            })
            .collect();

        Self {
            script: enhancement.script.clone(),
            voice_id: voice.voice_id.clone(),
            video_id,
            enhanced_script: AudioScriptPayload { segments },
        }
    }
}

/// Response from `POST /audio/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioResponse {
    pub audio_base64: String,
    pub filename: String,
    pub duration: f64,
    pub voice_id: VoiceId,
    #[serde(default)]
    pub segments: Vec<AudioSegment>,
}

impl AudioResponse {
    pub fn into_track(self) -> AudioTrack {
        AudioTrack {
            payload_base64: self.audio_base64,
            filename: self.filename,
            duration_seconds: self.duration,
            voice_id: self.voice_id,
            segments: self.segments,
        }
    }
}

/// Enhancement-shaped payload the clip endpoint matches against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedScriptPayload {
    #[serde(rename = "segmentos")]
    pub segments: Vec<ScriptSegment>,
}

/// Request for `POST /clips/select`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipsRequest {
    /// Segments to match clips against
    pub enhanced_script: EnhancedScriptPayload,

    #[serde(rename = "categoria")]
    pub category: String,

    /// Actual synthesized narration duration in seconds.
    ///
    /// Selection time-aligns against this, so it must come from an audio
    /// response, never from the pre-synthesis estimate.
    pub audio_duration: f64,

    /// How many clips to select
    pub target_clips_count: u32,
}

impl ClipsRequest {
    pub fn new(enhancement: &Enhancement, category: Category, audio_duration: f64) -> Self {
        Self {
            enhanced_script: EnhancedScriptPayload {
                segments: enhancement.segments.clone(),
            },
            category: category.to_string(),
            audio_duration,
            target_clips_count: DEFAULT_TARGET_CLIPS,
        }
    }

    pub fn with_target_clips(mut self, count: u32) -> Self {
        self.target_clips_count = count;
        self
    }
}

/// Response from `POST /clips/select`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipsResponse {
    pub success: bool,
    pub selected_clips: Vec<ClipMatch>,
    pub total_clips_duration: f64,
    pub duration_compatibility: f64,
    pub visual_coherence_score: f64,
    pub estimated_engagement: f64,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ClipsResponse {
    pub fn into_selection(self) -> ClipSelection {
        ClipSelection {
            selected_clips: self.selected_clips,
            total_duration_seconds: self.total_clips_duration,
            estimated_engagement: self.estimated_engagement,
            visual_coherence: self.visual_coherence_score,
            duration_compatibility: self.duration_compatibility,
            warnings: self.warnings,
        }
    }
}

/// Request for `POST /video/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembleRequest {
    /// Whole draft, serialized for the assembler
    pub script_metadata: serde_json::Value,
    /// Authenticated owner of the video
    pub user_id: String,
    /// Generated video title
    pub title: String,
}

impl AssembleRequest {
    pub fn new(
        draft: &Draft,
        user_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            script_metadata: serde_json::to_value(draft)?,
            user_id: user_id.into(),
            title: title.into(),
        })
    }
}

/// Response from `POST /video/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssembleResponse {
    pub url: String,
    pub duration: f64,
    pub metadata: VideoResultMetadata,
}

impl AssembleResponse {
    pub fn into_result(self) -> VideoResult {
        VideoResult {
            url: self.url,
            duration_seconds: self.duration,
            metadata: self.metadata,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}
