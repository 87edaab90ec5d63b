//! Step state machine and pipeline orchestrator for the VidGen wizard.
//!
//! A [`WizardSession`] owns one draft for its whole lifetime and walks it
//! through the four wizard steps, issuing the backend calls in pipeline
//! order (enhancement, audio, clips, assembly). Rendering is the host's
//! job; the session only exposes state, transitions and progress.

pub mod error;
pub mod logging;
pub mod progress;
pub mod session;
pub mod step;

pub use error::{Notice, WizardError, WizardResult};
pub use progress::{PipelineOutcome, PipelinePhase};
pub use session::{CancelToken, WizardSession};
pub use step::WizardStep;
