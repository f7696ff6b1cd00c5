//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::oauth::OAuthIntent;
use crate::domain::notice::Notice;
use crate::domain::provider::OAuthProvider;

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request (credential step)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Full name; split on the first whitespace for the profile
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Verification step request. Carries the provider-issued pending
/// sign-up id back; the gateway holds no state between the steps.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub sign_up_id: String,
    pub email: String,
    pub code: String,
}

// ============================================================================
// OAuth
// ============================================================================

/// OAuth initiation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthRequest {
    pub intent: OAuthIntent,
    pub provider: OAuthProvider,
}

// ============================================================================
// Responses
// ============================================================================

/// Terminal state of a flow request, for the frontend form machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStatus {
    /// Session activated (or redirect issued); follow `redirectTo`
    Complete,
    /// Pending account created; show the verification step
    VerificationPending,
    /// Form stays interactive; show the notices
    Failed,
}

/// Response for every flow endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowResponse {
    pub status: FlowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_up_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Toast notices, in display order
    pub notices: Vec<Notice>,
}

impl FlowResponse {
    pub fn complete(redirect_to: String, notices: Vec<Notice>) -> Self {
        Self {
            status: FlowStatus::Complete,
            redirect_to: Some(redirect_to),
            sign_up_id: None,
            email: None,
            notices,
        }
    }

    pub fn verification_pending(sign_up_id: String, email: String, notices: Vec<Notice>) -> Self {
        Self {
            status: FlowStatus::VerificationPending,
            redirect_to: None,
            sign_up_id: Some(sign_up_id),
            email: Some(email),
            notices,
        }
    }

    pub fn failed(notices: Vec<Notice>) -> Self {
        Self {
            status: FlowStatus::Failed,
            redirect_to: None,
            sign_up_id: None,
            email: None,
            notices,
        }
    }
}
