//! Enhancement fallback and autosave behavior.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vgen_models::{EnhanceOutcome, FALLBACK_IMPROVEMENT};
use vgen_store::SnapshotStore;
use vgen_wizard::WizardStep;

use super::helpers::*;

#[tokio::test]
async fn test_enhancement_failure_substitutes_original_script() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/script/enhance"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = session_at_enhance();

    let outcome = session.enhance(&client).await.expect("fallback, not error");
    assert!(outcome.is_fallback());

    let enhancement = session.draft().unwrap().enhancement().unwrap();
    assert_eq!(enhancement.script, SCRIPT);
    assert_eq!(enhancement.segments.len(), 1);
    assert_eq!(
        enhancement.improvements,
        vec![FALLBACK_IMPROVEMENT.to_string()]
    );
    match &enhancement.outcome {
        EnhanceOutcome::Fallback { reason } => assert!(reason.contains("500")),
        other => panic!("unexpected outcome: {other:?}"),
    }

    // The wizard still advances to the voice step.
    assert!(session.advance());
    assert_eq!(session.step(), WizardStep::Voice);
}

#[tokio::test]
async fn test_unreachable_backend_also_falls_back() {
    // Point at a closed port: connection refused rather than an HTTP error.
    let client = vgen_client::BackendClient::new(vgen_client::BackendConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: std::time::Duration::from_secs(1),
    })
    .expect("client builds");

    let mut session = session_at_enhance();
    let outcome = session.enhance(&client).await.expect("fallback, not error");
    assert!(outcome.is_fallback());
    assert_eq!(
        session.draft().unwrap().enhancement().unwrap().script,
        SCRIPT
    );
}

#[tokio::test]
async fn test_reenhancement_replaces_wholesale() {
    let server = MockServer::start().await;
    mount_enhance_ok(&server).await;

    let client = client_for(&server);
    let mut session = session_at_enhance();

    let first = session.enhance(&client).await.expect("first enhance");
    assert_eq!(first, EnhanceOutcome::Enhanced);
    let segments_before = session
        .draft()
        .unwrap()
        .enhancement()
        .unwrap()
        .segments
        .len();

    let second = session.enhance(&client).await.expect("second enhance");
    assert_eq!(second, EnhanceOutcome::Enhanced);
    let enhancement = session.draft().unwrap().enhancement().unwrap();
    assert_eq!(enhancement.segments.len(), segments_before);
    assert_eq!(enhancement.outcome, EnhanceOutcome::Enhanced);
}

#[tokio::test]
async fn test_autosave_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = SnapshotStore::new(dir.path());

    let mut session = session_at_enhance();
    session.select_voice("alloy", vgen_models::PlaybackSpeed::Faster);
    session.autosave(&store).await;

    let snapshot = store
        .load()
        .await
        .expect("load works")
        .expect("snapshot present");
    assert_eq!(snapshot.raw_script, SCRIPT);
    assert_eq!(snapshot.category, Some(vgen_models::Category::Tech));
    assert_eq!(snapshot.voice_id, Some(vgen_models::VoiceId::from("alloy")));

    let restored = vgen_wizard::WizardSession::restore(snapshot);
    assert_eq!(restored.script_input(), SCRIPT);
    assert_eq!(restored.step(), WizardStep::Script);
}

#[tokio::test]
async fn test_autosave_swallows_store_errors() {
    // A directory path that cannot be created: parent is a file.
    let file = tempfile::NamedTempFile::new().expect("tempfile");
    let store = SnapshotStore::new(file.path().join("nested"));

    let session = session_at_enhance();
    // Must not panic or error.
    session.autosave(&store).await;
}
