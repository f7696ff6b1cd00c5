//! Identity Provider Port
//!
//! Interface to the hosted identity provider that owns all credential
//! storage, verification-code issuance, OAuth handshakes and session
//! tokens. The HTTP implementation lives in the infrastructure layer;
//! tests substitute in-memory fakes.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Provider-issued id of a pending sign-up attempt
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SignUpId(String);

/// Provider-issued id of a created (not yet activated) session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

/// Opaque session token returned by session activation. Installed in
/// the session cookie verbatim; the gateway never inspects it.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

macro_rules! opaque_string {
    ($name:ident) => {
        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_string!(SignUpId);
opaque_string!(SessionId);
opaque_string!(SessionToken);

// Token value stays out of logs
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

/// Status of a sign-in or sign-up attempt as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    /// Attempt finished; a session was created
    Complete,
    NeedsFirstFactor,
    NeedsSecondFactor,
    MissingRequirements,
    Abandoned,
    /// Any status this gateway does not recognize
    #[serde(other)]
    Unknown,
}

/// Rejection codes this gateway understands. Anything outside this
/// vocabulary deserializes to [`ErrorCode::Unknown`] and surfaces as a
/// generic notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    FormIdentifierNotFound,
    FormPasswordIncorrect,
    TooManyAttempts,
    FormIdentifierExists,
    FormPasswordPwned,
    FormParamFormatInvalid,
    FormPasswordLengthTooShort,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::FormIdentifierNotFound => "form_identifier_not_found",
            ErrorCode::FormPasswordIncorrect => "form_password_incorrect",
            ErrorCode::TooManyAttempts => "too_many_attempts",
            ErrorCode::FormIdentifierExists => "form_identifier_exists",
            ErrorCode::FormPasswordPwned => "form_password_pwned",
            ErrorCode::FormParamFormatInvalid => "form_param_format_invalid",
            ErrorCode::FormPasswordLengthTooShort => "form_password_length_too_short",
            ErrorCode::Unknown => "unknown",
        };
        f.write_str(code)
    }
}

/// Provider call failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Call completed; the provider rejected it with a code
    #[error("provider rejected the request: {0}")]
    Rejected(ErrorCode),

    /// Call raised or the response was unusable
    #[error("provider transport error: {0}")]
    Transport(String),
}

/// Result of a credential sign-in attempt
#[derive(Debug, Clone, Deserialize)]
pub struct SignInAttempt {
    pub status: AttemptStatus,
    pub created_session_id: Option<SessionId>,
}

/// State of a pending sign-up attempt
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpAttempt {
    pub id: SignUpId,
    pub status: AttemptStatus,
    pub created_session_id: Option<SessionId>,
}

/// OAuth providers offered on the auth forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthProvider {
    Google,
}

impl OAuthProvider {
    /// Wire strategy name used by the provider API
    pub fn strategy(self) -> &'static str {
        match self {
            OAuthProvider::Google => "oauth_google",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
        }
    }
}

/// Identity provider port
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Verify credentials, creating a sign-in attempt
    async fn create_sign_in(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<SignInAttempt, ProviderError>;

    /// Create a pending account record
    async fn create_sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignUpAttempt, ProviderError>;

    /// Ask the provider to dispatch an emailed verification code
    async fn prepare_email_verification(&self, sign_up_id: &SignUpId)
    -> Result<(), ProviderError>;

    /// Submit an emailed code against the pending sign-up
    async fn attempt_email_verification(
        &self,
        sign_up_id: &SignUpId,
        code: &str,
    ) -> Result<SignUpAttempt, ProviderError>;

    /// Update profile names on the pending sign-up
    async fn update_profile(
        &self,
        sign_up_id: &SignUpId,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ProviderError>;

    /// Activate a created session, obtaining the cookie token
    async fn activate_session(&self, session_id: &SessionId)
    -> Result<SessionToken, ProviderError>;

    /// Whether a session token is currently active
    async fn session_active(&self, token: &str) -> Result<bool, ProviderError>;

    /// Build the redirect URL for a provider-hosted OAuth handshake
    async fn oauth_authorize_url(
        &self,
        provider: OAuthProvider,
        redirect_url: &str,
    ) -> Result<String, ProviderError>;
}
