//! Wizard error types.

use thiserror::Error;

use vgen_client::BackendError;
use vgen_models::PhaseError;

pub type WizardResult<T> = Result<T, WizardError>;

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("The script step has not been completed")]
    MissingDraft,

    #[error("Script enhancement has not run yet")]
    MissingEnhancement,

    #[error("No narration voice selected")]
    MissingVoice,

    #[error("Audio generation has not completed")]
    MissingAudio,

    #[error("Clip selection has not completed")]
    MissingClips,

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Audio generation failed: {0}")]
    AudioFailed(#[source] BackendError),

    #[error("Clip selection failed: {0}")]
    ClipsFailed(#[source] BackendError),

    #[error("Video assembly failed: {0}")]
    AssemblyFailed(#[source] BackendError),

    #[error("Phase error: {0}")]
    Phase(#[from] PhaseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-facing notification content for a failed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub detail: String,
}

impl WizardError {
    /// Toast content shown to the user for this error.
    pub fn notice(&self) -> Notice {
        let title = match self {
            WizardError::AudioFailed(_) => "Error al generar el audio",
            WizardError::ClipsFailed(_) => "Error al seleccionar los clips",
            WizardError::AssemblyFailed(_) => "Error al generar el video",
            WizardError::Cancelled => "Generación cancelada",
            _ => "Faltan datos para continuar",
        };

        Notice {
            title,
            detail: self.to_string(),
        }
    }
}
