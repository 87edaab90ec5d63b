//! Structured session logging.

use tracing::{info, warn};

use vgen_models::DraftId;

/// Logger scoping one wizard operation to its draft.
///
/// Keeps log lines for a draft greppable across the enhancement, pipeline
/// and assembly operations.
#[derive(Debug, Clone)]
pub struct SessionLogger {
    draft_id: String,
    operation: String,
}

impl SessionLogger {
    pub fn new(draft_id: &DraftId, operation: &str) -> Self {
        Self {
            draft_id: draft_id.to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn start(&self, message: &str) {
        info!(
            draft_id = %self.draft_id,
            operation = %self.operation,
            "Started: {}", message
        );
    }

    pub fn progress(&self, message: &str) {
        info!(
            draft_id = %self.draft_id,
            operation = %self.operation,
            "Progress: {}", message
        );
    }

    pub fn warning(&self, message: &str) {
        warn!(
            draft_id = %self.draft_id,
            operation = %self.operation,
            "Warning: {}", message
        );
    }

    pub fn done(&self, message: &str) {
        info!(
            draft_id = %self.draft_id,
            operation = %self.operation,
            "Completed: {}", message
        );
    }
}
