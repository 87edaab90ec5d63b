//! Shared fixtures for wizard integration tests.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vgen_client::{BackendClient, BackendConfig};
use vgen_models::Category;
use vgen_wizard::WizardSession;

pub const SCRIPT: &str = "Explica cómo crear una API REST con Node.js";

/// Install a test subscriber so `RUST_LOG` works under `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Actual narration duration returned by the fake audio endpoint; the
/// enhancement estimate is deliberately different (42.0) so tests can
/// verify which of the two reaches clip selection.
pub const AUDIO_DURATION: f64 = 40.5;

pub fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(BackendConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    })
    .expect("client builds")
}

/// Session with the script step already completed.
pub fn session_at_enhance() -> WizardSession {
    let mut session = WizardSession::new();
    session.set_script(SCRIPT);
    session.set_category(Category::Tech);
    assert!(session.advance());
    session
}

pub fn enhance_body() -> serde_json::Value {
    serde_json::json!({
        "script_mejorado": "¿Sabías que puedes crear una API REST en minutos? Primero instala Node.js y Express. Sígueme para más consejos.",
        "duracion_estimada": 42.0,
        "segmentos": [
            {"text": "¿Sabías que puedes crear una API REST en minutos?", "duration_seconds": 3.0, "kind": "hook"},
            {"text": "Primero instala Node.js y Express.", "duration_seconds": 35.0, "kind": "content"},
            {"text": "Sígueme para más consejos.", "duration_seconds": 4.0, "kind": "cta"}
        ],
        "palabras_clave": ["api", "rest", "nodejs"],
        "tono": "didáctico",
        "mejoras_aplicadas": ["estructura hook-contenido-cta", "gancho inicial"]
    })
}

pub fn audio_body() -> serde_json::Value {
    serde_json::json!({
        "audio_base64": "aG9sYSBtdW5kbw==",
        "filename": "narration.mp3",
        "duration": AUDIO_DURATION,
        "voice_id": "alloy",
        "segments": [
            {"text": "¿Sabías que puedes crear una API REST en minutos?", "kind": "hook", "emotion": "neutral", "duration_seconds": 3.1, "speed": 1.0},
            {"text": "Primero instala Node.js y Express.", "kind": "content", "emotion": "neutral", "duration_seconds": 33.2, "speed": 1.0},
            {"text": "Sígueme para más consejos.", "kind": "cta", "emotion": "neutral", "duration_seconds": 4.2, "speed": 1.0}
        ]
    })
}

pub fn clips_body() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "selected_clips": [
            clip_json("clip-001", 0.91),
            clip_json("clip-014", 0.84),
            clip_json("clip-007", 0.80)
        ],
        "total_clips_duration": 40.0,
        "duration_compatibility": 0.9,
        "visual_coherence_score": 0.75,
        "estimated_engagement": 0.82,
        "warnings": []
    })
}

pub fn clip_json(id: &str, final_score: f64) -> serde_json::Value {
    serde_json::json!({
        "clip_id": id,
        "filename": format!("{id}.mp4"),
        "duration_seconds": 13.5,
        "source_segment_text": "Primero instala Node.js y Express.",
        "similarity_score": 0.8,
        "final_score": final_score,
        "quality_score": 0.9,
        "motion_intensity": 0.4,
        "concept_tags": ["coding", "laptop"],
        "emotion_tags": ["focused"]
    })
}

pub fn assemble_body() -> serde_json::Value {
    serde_json::json!({
        "url": "https://cdn.vidgen.app/videos/abc123.mp4",
        "duration": AUDIO_DURATION,
        "metadata": {"clips_count": 3, "resolution": "1080x1920"}
    })
}

pub async fn mount_enhance_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/script/enhance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(enhance_body()))
        .mount(server)
        .await;
}

pub async fn mount_audio_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/audio/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(audio_body()))
        .mount(server)
        .await;
}

pub async fn mount_clips_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/clips/select"))
        .respond_with(ResponseTemplate::new(200).set_body_json(clips_body()))
        .mount(server)
        .await;
}

pub async fn mount_assemble_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/video/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(assemble_body()))
        .mount(server)
        .await;
}

/// Drive a fresh session through enhancement and voice selection up to the
/// summary step.
pub async fn session_at_summary(client: &BackendClient) -> WizardSession {
    let mut session = session_at_enhance();
    session
        .enhance(client)
        .await
        .expect("enhancement never hard-fails");
    assert!(session.advance());
    session.select_voice("alloy", vgen_models::PlaybackSpeed::Normal);
    assert!(session.advance());
    assert_eq!(session.step(), vgen_wizard::WizardStep::Summary);
    session
}
