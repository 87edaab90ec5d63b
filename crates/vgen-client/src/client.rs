//! Generation backend HTTP client.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use validator::Validate;

use vgen_models::{word_count, MIN_SCRIPT_WORDS};

use crate::error::{BackendError, BackendResult};
use crate::types::{
    AssembleRequest, AssembleResponse, AudioRequest, AudioResponse, ClipsRequest, ClipsResponse,
    EnhanceRequest, EnhanceResponse, HealthResponse,
};

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the generation backend
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(120), // audio synthesis is the slow call
        }
    }
}

impl BackendConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("VGEN_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            timeout: Duration::from_secs(
                std::env::var("VGEN_BACKEND_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
        }
    }
}

/// Client for the generation backend.
///
/// Calls are single-shot: there is no automatic retry, and a failed call is
/// repeated only when the user triggers the action again.
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

impl BackendClient {
    /// Create a new backend client.
    pub fn new(config: BackendConfig) -> BackendResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(BackendError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> BackendResult<Self> {
        Self::new(BackendConfig::from_env())
    }

    /// Check if the backend is reachable and healthy.
    pub async fn health_check(&self) -> BackendResult<bool> {
        let url = format!("{}/health", self.config.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let health: HealthResponse = response.json().await?;
                Ok(health.status == "healthy" || health.status == "ok")
            }
            Ok(response) => {
                warn!("Backend health check failed: {}", response.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Backend health check error: {}", e);
                Ok(false)
            }
        }
    }

    /// Enhance a raw script into a segmented, structured one.
    pub async fn enhance_script(&self, request: &EnhanceRequest) -> BackendResult<EnhanceResponse> {
        request
            .validate()
            .map_err(|e| BackendError::invalid_request(e.to_string()))?;

        let words = word_count(&request.script);
        if words < MIN_SCRIPT_WORDS {
            return Err(BackendError::invalid_request(format!(
                "script must contain at least {MIN_SCRIPT_WORDS} words, got {words}"
            )));
        }

        self.post_json("/script/enhance", request).await
    }

    /// Synthesize narration audio for an enhanced script.
    pub async fn generate_audio(&self, request: &AudioRequest) -> BackendResult<AudioResponse> {
        self.post_json("/audio/generate", request).await
    }

    /// Select clips matching the script, aligned to the narration duration.
    pub async fn select_clips(&self, request: &ClipsRequest) -> BackendResult<ClipsResponse> {
        let response: ClipsResponse = self.post_json("/clips/select", request).await?;

        if !response.success {
            return Err(BackendError::rejected("clip selection unsuccessful"));
        }

        Ok(response)
    }

    /// Assemble the final video from the whole draft.
    pub async fn assemble_video(
        &self,
        request: &AssembleRequest,
    ) -> BackendResult<AssembleResponse> {
        self.post_json("/video/generate", request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> BackendResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);

        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(BackendError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await.map_err(BackendError::Network)?;
        serde_json::from_str(&text).map_err(BackendError::InvalidResponse)
    }
}
