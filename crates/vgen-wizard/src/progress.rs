//! Pipeline progress reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the summary-screen generation pipeline.
///
/// Published over a watch channel so hosts can render a determinate
/// indicator: 0% idle, 33% once audio starts, 66% once clip selection
/// starts, 100% when both are done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelinePhase {
    Idle,
    GeneratingAudio,
    SelectingClips,
    Complete,
}

impl PipelinePhase {
    /// Progress percentage shown for this phase.
    pub fn percent(&self) -> u8 {
        match self {
            PipelinePhase::Idle => 0,
            PipelinePhase::GeneratingAudio => 33,
            PipelinePhase::SelectingClips => 66,
            PipelinePhase::Complete => 100,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelinePhase::Idle => "idle",
            PipelinePhase::GeneratingAudio => "generating_audio",
            PipelinePhase::SelectingClips => "selecting_clips",
            PipelinePhase::Complete => "complete",
        }
    }
}

impl fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of invoking the auto-run pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Audio and clips are merged into the draft; any non-fatal clip
    /// warnings are carried for display.
    Completed { warnings: Vec<String> },
    /// A previous invocation already ran (or is running); nothing was done.
    AlreadyStarted,
}

impl PipelineOutcome {
    pub fn already_started(&self) -> bool {
        matches!(self, PipelineOutcome::AlreadyStarted)
    }
}
