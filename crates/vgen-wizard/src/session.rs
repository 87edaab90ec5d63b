//! The wizard session: one draft, four steps, one pipeline.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, warn};

use vgen_client::{
    AssembleRequest, AudioRequest, BackendClient, ClipsRequest, EnhanceRequest,
};
use vgen_models::{
    word_count, Category, Draft, EnhanceOutcome, Enhancement, PlaybackSpeed, ScriptDraft,
    VideoId, VideoResult, VoiceId, VoiceSelection, MIN_SCRIPT_WORDS,
};
use vgen_store::{DraftSnapshot, SnapshotStore};

use crate::error::{WizardError, WizardResult};
use crate::logging::SessionLogger;
use crate::progress::{PipelineOutcome, PipelinePhase};
use crate::step::WizardStep;

/// Cloneable handle that cancels a session's in-flight backend calls.
///
/// Cancelling does not abort the HTTP request on the backend; it makes the
/// session observe the cancellation at its next suspension point and drop
/// the response, so a call resolving after the user left the wizard can
/// never mutate the draft.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

/// One user's pass through the create-video wizard.
///
/// The session owns the draft exclusively; hosts mutate it only through
/// these methods, which keep the draft's phase, the current step and the
/// pipeline latch consistent with each other.
pub struct WizardSession {
    step: WizardStep,
    script_input: String,
    category: Option<Category>,
    template: Option<String>,
    voice: Option<VoiceSelection>,
    draft: Option<Draft>,
    pipeline_started: bool,
    progress_tx: watch::Sender<PipelinePhase>,
    cancel: CancelToken,
}

impl WizardSession {
    pub fn new() -> Self {
        let (progress_tx, _) = watch::channel(PipelinePhase::Idle);
        Self {
            step: WizardStep::FIRST,
            script_input: String::new(),
            category: None,
            template: None,
            voice: None,
            draft: None,
            pipeline_started: false,
            progress_tx,
            cancel: CancelToken::new(),
        }
    }

    /// Rebuild a session from an autosaved snapshot.
    ///
    /// Only the resumable inputs come back; the user re-runs the steps, so
    /// no draft phase data is restored.
    pub fn restore(snapshot: DraftSnapshot) -> Self {
        let mut session = Self::new();
        session.script_input = snapshot.raw_script;
        session.category = snapshot.category;
        session.template = snapshot.template;
        if let Some(voice_id) = snapshot.voice_id {
            session.voice = Some(VoiceSelection::new(
                voice_id,
                snapshot.speed.unwrap_or(PlaybackSpeed::Normal),
            ));
        }
        session
    }

    // ----- state accessors -----

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn script_input(&self) -> &str {
        &self.script_input
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn voice(&self) -> Option<&VoiceSelection> {
        self.voice.as_ref()
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Watch the pipeline progress indicator.
    pub fn progress(&self) -> watch::Receiver<PipelinePhase> {
        self.progress_tx.subscribe()
    }

    /// Handle for cancelling this session's in-flight calls.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Both pipeline outputs are merged; the create-video action is ready.
    pub fn is_pipeline_complete(&self) -> bool {
        self.draft
            .as_ref()
            .map(|d| d.audio().is_some() && d.clips().is_some())
            .unwrap_or(false)
    }

    // ----- step 1 inputs -----

    /// Set the script text. Ignored once the draft exists: the raw script
    /// is immutable after step 1, and regeneration is the only path that
    /// re-derives from it.
    pub fn set_script(&mut self, script: impl Into<String>) -> bool {
        if self.draft.is_some() {
            return false;
        }
        self.script_input = script.into();
        true
    }

    pub fn set_category(&mut self, category: Category) -> bool {
        if self.draft.is_some() {
            return false;
        }
        self.category = Some(category);
        true
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = Some(template.into());
    }

    /// Select the narration voice and speed (voice step).
    pub fn select_voice(&mut self, voice_id: impl Into<VoiceId>, speed: PlaybackSpeed) {
        self.voice = Some(VoiceSelection::new(voice_id, speed));
    }

    // ----- step transitions -----

    /// Advance to the next step if the current step's required fields are
    /// set. Returns whether the step changed; an invalid advance is a
    /// no-op (hosts disable the continue control instead of surfacing an
    /// error).
    pub fn advance(&mut self) -> bool {
        match self.step {
            WizardStep::Script => {
                let Some(category) = self.category else {
                    return false;
                };
                if word_count(&self.script_input) < MIN_SCRIPT_WORDS {
                    return false;
                }
                if self.draft.is_none() {
                    match ScriptDraft::new(self.script_input.clone(), category) {
                        Ok(script) => self.draft = Some(Draft::new(script)),
                        Err(_) => return false,
                    }
                }
                self.step = WizardStep::Enhance;
                true
            }
            WizardStep::Enhance => {
                if self.draft.as_ref().and_then(|d| d.enhancement()).is_none() {
                    return false;
                }
                self.step = WizardStep::Voice;
                true
            }
            WizardStep::Voice => {
                if self.voice.is_none() {
                    return false;
                }
                self.step = WizardStep::Summary;
                true
            }
            WizardStep::Summary => false,
        }
    }

    /// Go back one step. Never validates, never clears data.
    pub fn retreat(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    // ----- remote operations -----

    /// Run script enhancement for the current draft.
    ///
    /// A backend failure does not stop the flow: the raw script is
    /// substituted as a single-segment enhancement and the outcome records
    /// the fallback. Re-invoking replaces the previous enhancement and
    /// drops audio/clips derived from it.
    pub async fn enhance(&mut self, client: &BackendClient) -> WizardResult<EnhanceOutcome> {
        let (request, draft_id, raw_script) = {
            let draft = self.draft.as_ref().ok_or(WizardError::MissingDraft)?;
            let script = draft.script();
            (
                EnhanceRequest::new(script),
                script.id.clone(),
                script.raw_script.clone(),
            )
        };

        let logger = SessionLogger::new(&draft_id, "enhance");
        logger.start("enhancing script");

        if self.cancel.is_cancelled() {
            return Err(WizardError::Cancelled);
        }
        let mut cancelled = self.cancel.subscribe();

        let enhancement = tokio::select! {
            _ = cancelled.changed() => return Err(WizardError::Cancelled),
            result = client.enhance_script(&request) => match result {
                Ok(response) => response.into_enhancement(),
                Err(e) => {
                    logger.warning(&format!(
                        "enhancement failed, substituting original script: {e}"
                    ));
                    Enhancement::fallback(&raw_script, e.to_string())
                }
            },
        };

        let outcome = enhancement.outcome.clone();
        let Some(draft) = self.draft.take() else {
            return Err(WizardError::MissingDraft);
        };
        self.draft = Some(draft.with_enhancement(enhancement));

        // Downstream data is gone; the pipeline may run again.
        self.pipeline_started = false;
        self.progress_tx.send_replace(PipelinePhase::Idle);

        logger.done("script ready");
        Ok(outcome)
    }

    /// Regenerate the script: clear the enhancement and everything derived
    /// from it, return to the enhance step, and re-run enhancement.
    pub async fn regenerate(&mut self, client: &BackendClient) -> WizardResult<EnhanceOutcome> {
        let Some(draft) = self.draft.take() else {
            return Err(WizardError::MissingDraft);
        };
        self.draft = Some(draft.reset_to_script());
        self.step = WizardStep::Enhance;
        self.enhance(client).await
    }

    /// Auto-run audio generation then clip selection, exactly once.
    ///
    /// The latch is set before the first await, so re-invocations (the
    /// host mounting the summary screen twice) are no-ops. On failure the
    /// latch reopens: retrying is a deliberate user action, not automatic.
    pub async fn run_pipeline(&mut self, client: &BackendClient) -> WizardResult<PipelineOutcome> {
        if self.pipeline_started {
            debug!("pipeline already started for this session, ignoring");
            return Ok(PipelineOutcome::AlreadyStarted);
        }
        self.pipeline_started = true;

        match self.drive_pipeline(client).await {
            Ok(warnings) => Ok(PipelineOutcome::Completed { warnings }),
            Err(e) => {
                self.pipeline_started = false;
                Err(e)
            }
        }
    }

    async fn drive_pipeline(&mut self, client: &BackendClient) -> WizardResult<Vec<String>> {
        let (enhancement, voice, draft_id, category) = {
            let draft = self.draft.as_ref().ok_or(WizardError::MissingDraft)?;
            let enhancement = draft
                .enhancement()
                .ok_or(WizardError::MissingEnhancement)?
                .clone();
            let voice = self.voice.clone().ok_or(WizardError::MissingVoice)?;
            let script = draft.script();
            (enhancement, voice, script.id.clone(), script.category)
        };

        let logger = SessionLogger::new(&draft_id, "pipeline");
        logger.start("generating narration and selecting clips");

        if self.cancel.is_cancelled() {
            return Err(WizardError::Cancelled);
        }
        let mut cancelled = self.cancel.subscribe();

        let video_id = VideoId::new();

        // Phase 1: narration.
        self.progress_tx.send_replace(PipelinePhase::GeneratingAudio);
        let audio_request = AudioRequest::new(&enhancement, &voice, video_id);
        let audio_response = tokio::select! {
            _ = cancelled.changed() => return Err(WizardError::Cancelled),
            result = client.generate_audio(&audio_request) => {
                result.map_err(WizardError::AudioFailed)?
            }
        };

        let track = audio_response.into_track();
        let audio_duration = track.duration_seconds;

        let Some(draft) = self.draft.take() else {
            return Err(WizardError::MissingDraft);
        };
        self.draft = Some(draft.with_audio(voice, track)?);
        logger.progress("narration synthesized");

        // Phase 2: clips, aligned to the narration we actually got.
        self.progress_tx.send_replace(PipelinePhase::SelectingClips);
        let clips_request = ClipsRequest::new(&enhancement, category, audio_duration);
        let clips_response = tokio::select! {
            _ = cancelled.changed() => return Err(WizardError::Cancelled),
            result = client.select_clips(&clips_request) => {
                result.map_err(WizardError::ClipsFailed)?
            }
        };

        let selection = clips_response.into_selection();
        let warnings = selection.warnings.clone();
        for warning in &warnings {
            logger.warning(warning);
        }

        let Some(draft) = self.draft.take() else {
            return Err(WizardError::MissingDraft);
        };
        self.draft = Some(draft.with_clips(selection)?);

        self.progress_tx.send_replace(PipelinePhase::Complete);
        logger.done("pipeline complete");
        Ok(warnings)
    }

    /// Assemble the final video from the whole draft.
    ///
    /// Checks its own preconditions even though the host should have kept
    /// the action disabled until [`is_pipeline_complete`] returned true.
    /// On failure the draft is left intact so the user can retry.
    pub async fn assemble(
        &mut self,
        client: &BackendClient,
        user_id: &str,
    ) -> WizardResult<VideoResult> {
        let (request, draft_id) = {
            let draft = self.draft.as_ref().ok_or(WizardError::MissingDraft)?;
            if draft.audio().is_none() {
                return Err(WizardError::MissingAudio);
            }
            if draft.clips().is_none() {
                return Err(WizardError::MissingClips);
            }

            let title = format!(
                "{} - {}",
                draft.script().category.display_name(),
                Utc::now().format("%Y-%m-%d")
            );
            (
                AssembleRequest::new(draft, user_id, title)?,
                draft.script().id.clone(),
            )
        };

        let logger = SessionLogger::new(&draft_id, "assemble");
        logger.start("assembling final video");

        if self.cancel.is_cancelled() {
            return Err(WizardError::Cancelled);
        }
        let mut cancelled = self.cancel.subscribe();

        let response = tokio::select! {
            _ = cancelled.changed() => return Err(WizardError::Cancelled),
            result = client.assemble_video(&request) => {
                result.map_err(WizardError::AssemblyFailed)?
            }
        };

        let video = response.into_result();
        let Some(draft) = self.draft.take() else {
            return Err(WizardError::MissingDraft);
        };
        self.draft = Some(draft.with_video(video.clone())?);

        logger.done("video assembled");
        Ok(video)
    }

    // ----- persistence -----

    /// Resumable subset of the session state.
    pub fn snapshot(&self) -> DraftSnapshot {
        let raw_script = self
            .draft
            .as_ref()
            .map(|d| d.script().raw_script.clone())
            .unwrap_or_else(|| self.script_input.clone());

        DraftSnapshot {
            raw_script,
            category: self.category,
            voice_id: self.voice.as_ref().map(|v| v.voice_id.clone()),
            speed: self.voice.as_ref().map(|v| v.speed),
            template: self.template.clone(),
            saved_at: Utc::now(),
        }
    }

    /// Best-effort autosave; a store failure is logged and swallowed.
    pub async fn autosave(&self, store: &SnapshotStore) {
        if let Err(e) = store.save(&self.snapshot()).await {
            warn!(error = %e, "draft autosave failed");
        }
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
