//! Wizard step definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four wizard steps, in order.
///
/// The chain is strictly linear; the only backward jump besides
/// [`prev`](WizardStep::prev) is the regenerate-script action, which
/// returns to `Enhance` with downstream data cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Script text and category entry
    Script,
    /// Script enhancement review
    Enhance,
    /// Voice and speed selection
    Voice,
    /// Summary and generation
    Summary,
}

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Script;
    pub const LAST: WizardStep = WizardStep::Summary;

    /// All steps in wizard order.
    pub const ALL: &'static [WizardStep] = &[
        WizardStep::Script,
        WizardStep::Enhance,
        WizardStep::Voice,
        WizardStep::Summary,
    ];

    /// 1-based step number for display.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Script => 1,
            WizardStep::Enhance => 2,
            WizardStep::Voice => 3,
            WizardStep::Summary => 4,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Script => Some(WizardStep::Enhance),
            WizardStep::Enhance => Some(WizardStep::Voice),
            WizardStep::Voice => Some(WizardStep::Summary),
            WizardStep::Summary => None,
        }
    }

    pub fn prev(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Script => None,
            WizardStep::Enhance => Some(WizardStep::Script),
            WizardStep::Voice => Some(WizardStep::Enhance),
            WizardStep::Summary => Some(WizardStep::Voice),
        }
    }

    pub fn is_first(&self) -> bool {
        *self == Self::FIRST
    }

    pub fn is_last(&self) -> bool {
        *self == Self::LAST
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WizardStep::Script => "script",
            WizardStep::Enhance => "enhance",
            WizardStep::Voice => "voice",
            WizardStep::Summary => "summary",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
