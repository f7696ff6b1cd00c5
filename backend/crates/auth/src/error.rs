//! Flow Error Types
//!
//! Failure taxonomy for the auth flows. Every flow error is caught at
//! the use-case boundary, translated to exactly one user notice and
//! logged; nothing here propagates to a global handler.

use thiserror::Error;

use crate::domain::notice::Severity;
use crate::domain::provider::{AttemptStatus, ErrorCode, ProviderError};

/// Flow-level failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// Local validation: a required field is empty (no network call)
    #[error("required fields are missing")]
    MissingFields,

    /// Local validation: verification code is empty (no network call)
    #[error("verification code is missing")]
    MissingCode,

    /// Provider rejected the call with a known or unknown code
    #[error("provider rejected: {0}")]
    Rejected(ErrorCode),

    /// Call succeeded but the flow would need a step this gateway does
    /// not implement; treated as failure
    #[error("attempt left in status {0:?}")]
    Incomplete(AttemptStatus),

    /// Call raised or returned something unusable
    #[error("transport error: {0}")]
    Transport(String),
}

impl FlowError {
    /// Notice severity: local validation warns, everything else errors.
    pub fn severity(&self) -> Severity {
        match self {
            FlowError::MissingFields | FlowError::MissingCode => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Log with a level matching the failure class.
    pub fn log(&self, flow: &str) {
        match self {
            FlowError::MissingFields | FlowError::MissingCode => {
                tracing::debug!(flow, "Submission rejected by local validation");
            }
            FlowError::Rejected(code) => {
                tracing::warn!(flow, code = %code, "Provider rejected the attempt");
            }
            FlowError::Incomplete(status) => {
                tracing::warn!(flow, ?status, "Attempt left in a non-complete status");
            }
            FlowError::Transport(message) => {
                tracing::error!(flow, %message, "Provider call failed");
            }
        }
    }
}

impl From<ProviderError> for FlowError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Rejected(code) => FlowError::Rejected(code),
            ProviderError::Transport(message) => FlowError::Transport(message),
        }
    }
}
