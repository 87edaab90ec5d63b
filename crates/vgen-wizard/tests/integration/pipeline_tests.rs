//! Full pipeline flow tests against a fake backend.

use std::time::Duration;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vgen_models::{DraftPhase, EnhanceOutcome};
use vgen_wizard::{PipelineOutcome, PipelinePhase, WizardError, WizardStep};

use super::helpers::*;

#[tokio::test]
async fn test_end_to_end_flow() -> anyhow::Result<()> {
    init_tracing();

    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;
    mount_audio_ok(&server).await;
    mount_clips_ok(&server).await;
    mount_assemble_ok(&server).await;

    let client = client_for(&server);
    let mut session = session_at_enhance();

    let outcome = session.enhance(&client).await?;
    assert_eq!(outcome, EnhanceOutcome::Enhanced);
    assert!(session.advance());

    session.select_voice("alloy", vgen_models::PlaybackSpeed::Normal);
    assert!(session.advance());
    assert_eq!(session.step(), WizardStep::Summary);

    let progress = session.progress();
    assert_eq!(*progress.borrow(), PipelinePhase::Idle);

    let outcome = session.run_pipeline(&client).await?;
    assert_eq!(outcome, PipelineOutcome::Completed { warnings: vec![] });
    assert!(session.is_pipeline_complete());
    assert_eq!(*progress.borrow(), PipelinePhase::Complete);
    assert_eq!(progress.borrow().percent(), 100);

    let draft = session.draft().expect("draft exists");
    assert_eq!(draft.phase(), DraftPhase::Clips);
    assert_eq!(draft.audio().unwrap().duration_seconds, AUDIO_DURATION);
    let clips = draft.clips().unwrap();
    assert_eq!(clips.selected_clips.len(), 3);
    assert_eq!(clips.estimated_engagement, 0.82);
    assert!(clips.is_ranked());

    let video = session.assemble(&client, "user-42").await?;
    assert_eq!(video.duration_seconds, AUDIO_DURATION);
    assert_eq!(video.metadata.clips_count, 3);
    assert_eq!(
        session.draft().unwrap().phase(),
        DraftPhase::Assembled
    );

    // The descriptor survives the URL-parameter round trip the preview
    // screen relies on.
    let encoded = video.to_query_value()?;
    let decoded: vgen_models::VideoResult =
        serde_json::from_str(&urlencoding::decode(&encoded)?)?;
    assert_eq!(decoded, video);

    Ok(())
}

#[tokio::test]
async fn test_clip_selection_uses_actual_audio_duration() {
    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;
    mount_audio_ok(&server).await;

    // The clip endpoint only answers when the request carries the real
    // synthesized duration, not the 42.0 estimate from enhancement.
    Mock::given(method("POST"))
        .and(path("/clips/select"))
        .and(body_partial_json(serde_json::json!({
            "audio_duration": AUDIO_DURATION,
            "categoria": "tech",
            "target_clips_count": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(clips_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = session_at_summary(&client).await;

    session.run_pipeline(&client).await.expect("pipeline runs");
    assert!(session.is_pipeline_complete());
}

#[tokio::test]
async fn test_pipeline_runs_exactly_once() {
    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;
    mount_clips_ok(&server).await;

    Mock::given(method("POST"))
        .and(path("/audio/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(audio_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = session_at_summary(&client).await;

    let first = session.run_pipeline(&client).await.expect("first run");
    assert!(!first.already_started());

    let second = session.run_pipeline(&client).await.expect("second run");
    assert!(second.already_started());

    server.verify().await;
}

#[tokio::test]
async fn test_audio_failure_keeps_draft_and_step_then_retry_succeeds() {
    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;
    mount_clips_ok(&server).await;

    // First synthesis attempt fails, the retry succeeds.
    Mock::given(method("POST"))
        .and(path("/audio/generate"))
        .respond_with(ResponseTemplate::new(503).set_body_string("synthesis overloaded"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/audio/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(audio_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = session_at_summary(&client).await;

    let err = session.run_pipeline(&client).await.unwrap_err();
    assert!(matches!(err, WizardError::AudioFailed(_)));
    assert_eq!(err.notice().title, "Error al generar el audio");

    // Nothing advanced, nothing was merged.
    assert_eq!(session.step(), WizardStep::Summary);
    assert!(session.draft().unwrap().audio().is_none());
    assert!(!session.is_pipeline_complete());

    // The latch reopened: a user-triggered retry works.
    let outcome = session.run_pipeline(&client).await.expect("retry");
    assert!(!outcome.already_started());
    assert!(session.is_pipeline_complete());
}

#[tokio::test]
async fn test_clip_failure_preserves_merged_audio() {
    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;
    mount_audio_ok(&server).await;

    Mock::given(method("POST"))
        .and(path("/clips/select"))
        .respond_with(ResponseTemplate::new(500).set_body_string("matcher down"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = session_at_summary(&client).await;

    let err = session.run_pipeline(&client).await.unwrap_err();
    assert!(matches!(err, WizardError::ClipsFailed(_)));

    // Audio survived the failed clip step; only clips are missing.
    let draft = session.draft().unwrap();
    assert!(draft.audio().is_some());
    assert!(draft.clips().is_none());
}

#[tokio::test]
async fn test_clip_warnings_are_non_fatal() {
    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;
    mount_audio_ok(&server).await;

    let mut body = clips_body();
    body["selected_clips"] = serde_json::json!([clip_json("clip-001", 0.91)]);
    body["warnings"] = serde_json::json!(["solo 1 de 3 clips encontrados"]);
    Mock::given(method("POST"))
        .and(path("/clips/select"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = session_at_summary(&client).await;

    let outcome = session.run_pipeline(&client).await.expect("pipeline runs");
    match outcome {
        PipelineOutcome::Completed { warnings } => {
            assert_eq!(warnings, vec!["solo 1 de 3 clips encontrados".to_string()]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(session.is_pipeline_complete());
}

#[tokio::test]
async fn test_regenerate_discards_downstream_and_returns_to_enhance() {
    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;
    mount_audio_ok(&server).await;
    mount_clips_ok(&server).await;

    let client = client_for(&server);
    let mut session = session_at_summary(&client).await;
    session.run_pipeline(&client).await.expect("pipeline runs");
    assert!(session.is_pipeline_complete());

    session.regenerate(&client).await.expect("regenerate");

    assert_eq!(session.step(), WizardStep::Enhance);
    let draft = session.draft().unwrap();
    assert_eq!(draft.phase(), DraftPhase::Enhanced);
    assert!(draft.audio().is_none());
    assert!(draft.clips().is_none());

    // And the pipeline may run again for the new script.
    let outcome = session.run_pipeline(&client).await.expect("rerun");
    assert!(!outcome.already_started());
}

#[tokio::test]
async fn test_assemble_fails_fast_without_pipeline() {
    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;

    let client = client_for(&server);
    let mut session = session_at_summary(&client).await;

    let err = session.assemble(&client, "user-42").await.unwrap_err();
    assert!(matches!(err, WizardError::MissingAudio));
}

#[tokio::test]
async fn test_cancellation_discards_late_response() {
    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;
    mount_clips_ok(&server).await;

    Mock::given(method("POST"))
        .and(path("/audio/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(audio_body())
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = session_at_summary(&client).await;

    let token = session.cancel_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let err = session.run_pipeline(&client).await.unwrap_err();
    assert!(matches!(err, WizardError::Cancelled));
    assert!(session.draft().unwrap().audio().is_none());
}
