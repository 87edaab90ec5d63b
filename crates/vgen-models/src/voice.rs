//! Narration voice and playback speed selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::ids::VoiceId;

/// Narration playback speed.
///
/// The selector offers exactly four speeds; there is no continuous range.
/// Serialized as the numeric factor (`0.75`, `1.0`, `1.25`, `1.5`) and any
/// other number fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(try_from = "f64", into = "f64")]
pub enum PlaybackSpeed {
    /// 0.75x
    Slow,
    /// 1.0x
    #[default]
    Normal,
    /// 1.25x
    Fast,
    /// 1.5x
    Faster,
}

impl PlaybackSpeed {
    /// All selectable speeds, in selector order.
    pub const ALL: &'static [PlaybackSpeed] = &[
        PlaybackSpeed::Slow,
        PlaybackSpeed::Normal,
        PlaybackSpeed::Fast,
        PlaybackSpeed::Faster,
    ];

    /// Returns the speed as the numeric factor sent on the wire.
    pub fn as_f64(&self) -> f64 {
        match self {
            PlaybackSpeed::Slow => 0.75,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::Fast => 1.25,
            PlaybackSpeed::Faster => 1.5,
        }
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.as_f64())
    }
}

impl From<PlaybackSpeed> for f64 {
    fn from(speed: PlaybackSpeed) -> f64 {
        speed.as_f64()
    }
}

impl TryFrom<f64> for PlaybackSpeed {
    type Error = SpeedParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // The four legal factors are exactly representable, so direct
        // comparison is safe here.
        if value == 0.75 {
            Ok(PlaybackSpeed::Slow)
        } else if value == 1.0 {
            Ok(PlaybackSpeed::Normal)
        } else if value == 1.25 {
            Ok(PlaybackSpeed::Fast)
        } else if value == 1.5 {
            Ok(PlaybackSpeed::Faster)
        } else {
            Err(SpeedParseError(value))
        }
    }
}

#[derive(Debug, Error)]
#[error("Unsupported playback speed: {0}, expected one of 0.75, 1.0, 1.25, 1.5")]
pub struct SpeedParseError(f64);

/// Voice chosen in the voice step, together with its playback speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VoiceSelection {
    /// Voice from the backend catalog
    pub voice_id: VoiceId,

    /// Narration speed
    pub speed: PlaybackSpeed,
}

impl VoiceSelection {
    pub fn new(voice_id: impl Into<VoiceId>, speed: PlaybackSpeed) -> Self {
        Self {
            voice_id: voice_id.into(),
            speed,
        }
    }
}
