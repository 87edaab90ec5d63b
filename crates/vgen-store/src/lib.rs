//! Best-effort local snapshot store for in-progress drafts.
//!
//! Mirrors the browser-storage autosave of the original flow: only the
//! fields needed to resume a session (script text, category, voice,
//! template) are kept, as one JSON file under a configurable directory.
//! Nothing here is durable or synced; callers treat every operation as
//! fallible and non-critical.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use vgen_models::{Category, PlaybackSpeed, VoiceId};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resumable subset of a wizard session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    /// Script text as entered
    pub raw_script: String,

    /// Chosen category, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Chosen voice, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<VoiceId>,

    /// Chosen playback speed, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<PlaybackSpeed>,

    /// Template id, for hosts that offer a template picker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,
}

const SNAPSHOT_FILENAME: &str = "draft_snapshot.json";

/// File-backed snapshot store.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("VGEN_SNAPSHOT_DIR").unwrap_or_else(|_| "/tmp/vgen".to_string()),
        )
    }

    fn snapshot_path(&self) -> PathBuf {
        self.dir.join(SNAPSHOT_FILENAME)
    }

    /// Persist a snapshot, replacing any previous one.
    pub async fn save(&self, snapshot: &DraftSnapshot) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        // Write-then-rename so a torn write never leaves a half snapshot.
        let tmp_path = self.dir.join(format!("{SNAPSHOT_FILENAME}.tmp"));
        let payload = serde_json::to_vec_pretty(snapshot)?;
        tokio::fs::write(&tmp_path, &payload).await?;
        tokio::fs::rename(&tmp_path, self.snapshot_path()).await?;

        debug!("Saved draft snapshot to {}", self.snapshot_path().display());
        Ok(())
    }

    /// Load the snapshot, if one exists.
    pub async fn load(&self) -> StoreResult<Option<DraftSnapshot>> {
        match tokio::fs::read(self.snapshot_path()).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the snapshot, if one exists.
    pub async fn clear(&self) -> StoreResult<()> {
        match tokio::fs::remove_file(self.snapshot_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Directory this store writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
