//! Script enhancement results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::segment::{estimate_spoken_seconds, ScriptSegment, SegmentKind};

/// Improvement marker recorded when the original script is substituted for
/// a failed enhancement.
pub const FALLBACK_IMPROVEMENT: &str = "uso del script original";

/// How the enhancement was obtained.
///
/// The flow proceeds in either case, but hosts can tell an AI-enhanced
/// script from a fallback and surface that to the user instead of
/// pretending the enhancement succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EnhanceOutcome {
    /// The backend enhanced the script.
    Enhanced,
    /// The backend was unavailable; the raw script was substituted.
    Fallback { reason: String },
}

impl EnhanceOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, EnhanceOutcome::Fallback { .. })
    }
}

/// Enhanced script together with its descriptive metadata.
///
/// Keywords, tone and the improvement list are display-only; segments drive
/// audio synthesis and clip selection downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Enhancement {
    /// Enhanced (or substituted) script text
    pub script: String,

    /// Backend-estimated narration duration in seconds
    pub estimated_duration_seconds: f64,

    /// Segments in narrative order
    pub segments: Vec<ScriptSegment>,

    /// Keywords extracted from the script
    pub keywords: Vec<String>,

    /// Overall tone label
    pub tone: String,

    /// Improvements the backend applied
    pub improvements: Vec<String>,

    /// Whether this is a real enhancement or a local substitute
    pub outcome: EnhanceOutcome,
}

impl Enhancement {
    /// Build the local substitute used when the enhancement call fails.
    ///
    /// The raw script becomes a single content segment so the rest of the
    /// pipeline sees the same shape as a real enhancement.
    pub fn fallback(raw_script: &str, reason: impl Into<String>) -> Self {
        Self {
            script: raw_script.to_string(),
            estimated_duration_seconds: estimate_spoken_seconds(raw_script),
            segments: vec![ScriptSegment::with_estimated_duration(
                raw_script,
                SegmentKind::Content,
            )],
            keywords: Vec::new(),
            tone: "original".to_string(),
            improvements: vec![FALLBACK_IMPROVEMENT.to_string()],
            outcome: EnhanceOutcome::Fallback {
                reason: reason.into(),
            },
        }
    }
}
