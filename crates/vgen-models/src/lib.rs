//! Shared data models for the VidGen wizard core.
//!
//! This crate provides Serde-serializable types for:
//! - The phase-typed video draft and its transitions
//! - Script segments and the spoken-duration estimator
//! - Categories, voices and playback speeds
//! - Clip matches and the final video descriptor

pub mod audio;
pub mod category;
pub mod clip;
pub mod draft;
pub mod enhancement;
pub mod ids;
pub mod segment;
pub mod video;
pub mod voice;

// Re-export common types
pub use audio::AudioTrack;
pub use category::{Category, CategoryParseError};
pub use clip::{ClipMatch, ClipSelection};
pub use draft::{
    AssembledDraft, AudioDraft, ClipsDraft, Draft, DraftPhase, EnhancedDraft, PhaseError,
    ScriptDraft,
};
pub use enhancement::{EnhanceOutcome, Enhancement, FALLBACK_IMPROVEMENT};
pub use ids::{DraftId, VideoId, VoiceId};
pub use segment::{
    estimate_spoken_seconds, word_count, AudioSegment, ScriptSegment, SegmentKind,
    MIN_SCRIPT_WORDS, WORDS_PER_SECOND,
};
pub use video::{VideoResult, VideoResultMetadata};
pub use voice::{PlaybackSpeed, SpeedParseError, VoiceSelection};
