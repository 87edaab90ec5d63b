//! HTTP client for the VidGen generation backend.
//!
//! The backend performs the four heavy pipeline steps (script enhancement,
//! audio synthesis, clip selection, video assembly); this crate wraps its
//! endpoints and owns the wire request/response types. Policy (fallbacks,
//! call ordering, user-triggered retries) lives in `vgen-wizard`, not here.

pub mod client;
pub mod error;
pub mod types;

pub use client::{BackendClient, BackendConfig};
pub use error::{BackendError, BackendResult};
pub use types::{
    AssembleRequest, AssembleResponse, AudioRequest, AudioRequestSegment, AudioResponse,
    ClipsRequest, ClipsResponse, EnhanceRequest, EnhanceResponse, EnhancedScriptPayload,
    DEFAULT_TARGET_CLIPS,
};
