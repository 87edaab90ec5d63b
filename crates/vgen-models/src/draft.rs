//! The phase-typed video draft.
//!
//! A draft moves through five phases as the pipeline runs:
//!
//! ```text
//! Script -> Enhanced -> Audio -> Clips -> Assembled
//! ```
//!
//! Each phase embeds the previous phase's data, so downstream data can
//! never exist without the data it derives from. Transitions are by-value
//! and forward-only; the single backward edge is [`Draft::reset_to_script`],
//! used when the user regenerates the script.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::audio::AudioTrack;
use crate::category::Category;
use crate::clip::ClipSelection;
use crate::enhancement::Enhancement;
use crate::ids::DraftId;
use crate::segment::{word_count, MIN_SCRIPT_WORDS};
use crate::video::VideoResult;
use crate::voice::VoiceSelection;

pub type PhaseResult<T> = Result<T, PhaseError>;

#[derive(Debug, Error)]
pub enum PhaseError {
    #[error("Script must contain at least {MIN_SCRIPT_WORDS} words, got {0}")]
    ScriptTooShort(usize),

    #[error("Script enhancement is required before audio generation")]
    MissingEnhancement,

    #[error("A synthesized audio track is required before clip selection")]
    MissingAudio,

    #[error("Clip selection is required before final assembly")]
    MissingClips,
}

/// First-phase draft: the user's script and category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScriptDraft {
    /// Unique draft ID
    pub id: DraftId,

    /// User-entered script, immutable once the draft exists
    pub raw_script: String,

    /// Content category
    pub category: Category,

    /// When the draft was created
    pub created_at: DateTime<Utc>,
}

impl ScriptDraft {
    /// Create a draft from a validated script.
    pub fn new(raw_script: impl Into<String>, category: Category) -> PhaseResult<Self> {
        let raw_script = raw_script.into();
        let words = word_count(&raw_script);
        if words < MIN_SCRIPT_WORDS {
            return Err(PhaseError::ScriptTooShort(words));
        }

        Ok(Self {
            id: DraftId::new(),
            raw_script,
            category,
            created_at: Utc::now(),
        })
    }
}

/// Draft after script enhancement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EnhancedDraft {
    pub script: ScriptDraft,
    pub enhancement: Enhancement,
}

impl EnhancedDraft {
    /// Attach a synthesized audio track.
    pub fn with_audio(self, voice: VoiceSelection, track: AudioTrack) -> AudioDraft {
        AudioDraft {
            enhanced: self,
            voice,
            track,
        }
    }
}

/// Draft after audio synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AudioDraft {
    pub enhanced: EnhancedDraft,
    pub voice: VoiceSelection,
    pub track: AudioTrack,
}

/// Draft after clip selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipsDraft {
    pub audio: AudioDraft,
    pub selection: ClipSelection,
}

/// Terminal phase: the assembled video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssembledDraft {
    pub clips: ClipsDraft,
    pub video: VideoResult,
}

/// Phase discriminant, for display and progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    Script,
    Enhanced,
    Audio,
    Clips,
    Assembled,
}

impl DraftPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftPhase::Script => "script",
            DraftPhase::Enhanced => "enhanced",
            DraftPhase::Audio => "audio",
            DraftPhase::Clips => "clips",
            DraftPhase::Assembled => "assembled",
        }
    }
}

impl fmt::Display for DraftPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A draft in any phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Draft {
    Script(ScriptDraft),
    Enhanced(EnhancedDraft),
    Audio(AudioDraft),
    Clips(ClipsDraft),
    Assembled(AssembledDraft),
}

impl Draft {
    pub fn new(script: ScriptDraft) -> Self {
        Draft::Script(script)
    }

    pub fn phase(&self) -> DraftPhase {
        match self {
            Draft::Script(_) => DraftPhase::Script,
            Draft::Enhanced(_) => DraftPhase::Enhanced,
            Draft::Audio(_) => DraftPhase::Audio,
            Draft::Clips(_) => DraftPhase::Clips,
            Draft::Assembled(_) => DraftPhase::Assembled,
        }
    }

    /// The script data, available in every phase.
    pub fn script(&self) -> &ScriptDraft {
        match self {
            Draft::Script(s) => s,
            Draft::Enhanced(e) => &e.script,
            Draft::Audio(a) => &a.enhanced.script,
            Draft::Clips(c) => &c.audio.enhanced.script,
            Draft::Assembled(x) => &x.clips.audio.enhanced.script,
        }
    }

    pub fn enhancement(&self) -> Option<&Enhancement> {
        match self {
            Draft::Script(_) => None,
            Draft::Enhanced(e) => Some(&e.enhancement),
            Draft::Audio(a) => Some(&a.enhanced.enhancement),
            Draft::Clips(c) => Some(&c.audio.enhanced.enhancement),
            Draft::Assembled(x) => Some(&x.clips.audio.enhanced.enhancement),
        }
    }

    pub fn voice(&self) -> Option<&VoiceSelection> {
        match self {
            Draft::Script(_) | Draft::Enhanced(_) => None,
            Draft::Audio(a) => Some(&a.voice),
            Draft::Clips(c) => Some(&c.audio.voice),
            Draft::Assembled(x) => Some(&x.clips.audio.voice),
        }
    }

    pub fn audio(&self) -> Option<&AudioTrack> {
        match self {
            Draft::Script(_) | Draft::Enhanced(_) => None,
            Draft::Audio(a) => Some(&a.track),
            Draft::Clips(c) => Some(&c.audio.track),
            Draft::Assembled(x) => Some(&x.clips.audio.track),
        }
    }

    pub fn clips(&self) -> Option<&ClipSelection> {
        match self {
            Draft::Script(_) | Draft::Enhanced(_) | Draft::Audio(_) => None,
            Draft::Clips(c) => Some(&c.selection),
            Draft::Assembled(x) => Some(&x.clips.selection),
        }
    }

    pub fn video(&self) -> Option<&VideoResult> {
        match self {
            Draft::Assembled(x) => Some(&x.video),
            _ => None,
        }
    }

    /// Replace the enhancement wholesale.
    ///
    /// Audio, clips and any assembled video derive from the previous script
    /// content, so they are discarded.
    pub fn with_enhancement(self, enhancement: Enhancement) -> Draft {
        Draft::Enhanced(EnhancedDraft {
            script: self.into_script(),
            enhancement,
        })
    }

    /// Merge a synthesized audio track.
    ///
    /// This is a partial update: an existing clip selection survives the
    /// merge. Any assembled video is dropped since it was stitched against
    /// the previous narration.
    pub fn with_audio(self, voice: VoiceSelection, track: AudioTrack) -> PhaseResult<Draft> {
        match self {
            Draft::Script(_) => Err(PhaseError::MissingEnhancement),
            Draft::Enhanced(e) => Ok(Draft::Audio(e.with_audio(voice, track))),
            Draft::Audio(a) => Ok(Draft::Audio(a.enhanced.with_audio(voice, track))),
            Draft::Clips(c) => Ok(Draft::Clips(ClipsDraft {
                audio: c.audio.enhanced.with_audio(voice, track),
                selection: c.selection,
            })),
            Draft::Assembled(x) => Ok(Draft::Clips(ClipsDraft {
                audio: x.clips.audio.enhanced.with_audio(voice, track),
                selection: x.clips.selection,
            })),
        }
    }

    /// Replace the clip selection wholesale.
    pub fn with_clips(self, selection: ClipSelection) -> PhaseResult<Draft> {
        match self {
            Draft::Script(_) | Draft::Enhanced(_) => Err(PhaseError::MissingAudio),
            Draft::Audio(a) => Ok(Draft::Clips(ClipsDraft {
                audio: a,
                selection,
            })),
            Draft::Clips(c) => Ok(Draft::Clips(ClipsDraft {
                audio: c.audio,
                selection,
            })),
            Draft::Assembled(x) => Ok(Draft::Clips(ClipsDraft {
                audio: x.clips.audio,
                selection,
            })),
        }
    }

    /// Attach the assembled video.
    pub fn with_video(self, video: VideoResult) -> PhaseResult<Draft> {
        match self {
            Draft::Script(_) | Draft::Enhanced(_) => Err(PhaseError::MissingAudio),
            Draft::Audio(_) => Err(PhaseError::MissingClips),
            Draft::Clips(c) => Ok(Draft::Assembled(AssembledDraft { clips: c, video })),
            Draft::Assembled(x) => Ok(Draft::Assembled(AssembledDraft {
                clips: x.clips,
                video,
            })),
        }
    }

    /// Drop everything derived from the script, keeping the script itself.
    pub fn reset_to_script(self) -> Draft {
        Draft::Script(self.into_script())
    }

    fn into_script(self) -> ScriptDraft {
        match self {
            Draft::Script(s) => s,
            Draft::Enhanced(e) => e.script,
            Draft::Audio(a) => a.enhanced.script,
            Draft::Clips(c) => c.audio.enhanced.script,
            Draft::Assembled(x) => x.clips.audio.enhanced.script,
        }
    }
}
