//! Shared test doubles for the use-case tests: a scriptable provider
//! fake with call counters, and canned inputs.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::sign_in::SignInInput;
use crate::domain::flow::CredentialDraft;
use crate::domain::provider::{
    AttemptStatus, ErrorCode, IdentityProvider, OAuthProvider, ProviderError, SessionId,
    SessionToken, SignInAttempt, SignUpAttempt, SignUpId,
};

/// Scriptable in-memory identity provider. Defaults to the happy path;
/// builder methods script failures per operation.
#[derive(Default)]
pub struct MockProvider {
    sign_in_rejection: Option<ErrorCode>,
    sign_in_status: Option<AttemptStatus>,
    sign_up_rejection: Option<ErrorCode>,
    prepare_fails: bool,
    verify_status: Option<AttemptStatus>,
    verify_transport_fails: bool,
    profile_fails: bool,
    oauth_fails: bool,
    session_is_active: bool,

    calls_create_sign_in: AtomicUsize,
    calls_create_sign_up: AtomicUsize,
    calls_prepare: AtomicUsize,
    calls_verify: AtomicUsize,
    calls_profile: AtomicUsize,
    calls_activate: AtomicUsize,
    calls_session_active: AtomicUsize,
    calls_oauth: AtomicUsize,

    recorded_profile: Mutex<Option<(String, String)>>,
    recorded_code: Mutex<Option<String>>,
}

impl MockProvider {
    pub const SIGN_UP_ID: &'static str = "sua_1";
    pub const SESSION_ID: &'static str = "sess_1";
    pub const TOKEN: &'static str = "tok_opaque_1";
    pub const AUTHORIZE_URL: &'static str = "https://idp.example/oauth/authorize?x=1";

    pub fn reject_sign_in(mut self, code: ErrorCode) -> Self {
        self.sign_in_rejection = Some(code);
        self
    }

    pub fn sign_in_status(mut self, status: AttemptStatus) -> Self {
        self.sign_in_status = Some(status);
        self
    }

    pub fn reject_sign_up(mut self, code: ErrorCode) -> Self {
        self.sign_up_rejection = Some(code);
        self
    }

    pub fn prepare_fails(mut self) -> Self {
        self.prepare_fails = true;
        self
    }

    pub fn verify_status(mut self, status: AttemptStatus) -> Self {
        self.verify_status = Some(status);
        self
    }

    pub fn verify_transport_fails(mut self) -> Self {
        self.verify_transport_fails = true;
        self
    }

    pub fn profile_update_fails(mut self) -> Self {
        self.profile_fails = true;
        self
    }

    pub fn oauth_fails(mut self) -> Self {
        self.oauth_fails = true;
        self
    }

    pub fn with_active_session(mut self) -> Self {
        self.session_is_active = true;
        self
    }

    pub fn total_calls(&self) -> usize {
        self.calls_create_sign_in.load(Ordering::SeqCst)
            + self.calls_create_sign_up.load(Ordering::SeqCst)
            + self.calls_prepare.load(Ordering::SeqCst)
            + self.calls_verify.load(Ordering::SeqCst)
            + self.calls_profile.load(Ordering::SeqCst)
            + self.calls_activate.load(Ordering::SeqCst)
            + self.calls_session_active.load(Ordering::SeqCst)
            + self.calls_oauth.load(Ordering::SeqCst)
    }

    pub fn activate_calls(&self) -> usize {
        self.calls_activate.load(Ordering::SeqCst)
    }

    pub fn verify_calls(&self) -> usize {
        self.calls_verify.load(Ordering::SeqCst)
    }

    /// Last (first_name, last_name) passed to `update_profile`
    pub fn recorded_profile(&self) -> Option<(String, String)> {
        self.recorded_profile.lock().unwrap().clone()
    }

    /// Last code passed to `attempt_email_verification`
    pub fn recorded_code(&self) -> Option<String> {
        self.recorded_code.lock().unwrap().clone()
    }
}

impl IdentityProvider for MockProvider {
    async fn create_sign_in(
        &self,
        _identifier: &str,
        _password: &str,
    ) -> Result<SignInAttempt, ProviderError> {
        self.calls_create_sign_in.fetch_add(1, Ordering::SeqCst);
        if let Some(code) = self.sign_in_rejection {
            return Err(ProviderError::Rejected(code));
        }
        let status = self.sign_in_status.unwrap_or(AttemptStatus::Complete);
        Ok(SignInAttempt {
            status,
            created_session_id: (status == AttemptStatus::Complete)
                .then(|| SessionId::from(Self::SESSION_ID)),
        })
    }

    async fn create_sign_up(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<SignUpAttempt, ProviderError> {
        self.calls_create_sign_up.fetch_add(1, Ordering::SeqCst);
        if let Some(code) = self.sign_up_rejection {
            return Err(ProviderError::Rejected(code));
        }
        Ok(SignUpAttempt {
            id: SignUpId::from(Self::SIGN_UP_ID),
            status: AttemptStatus::MissingRequirements,
            created_session_id: None,
        })
    }

    async fn prepare_email_verification(
        &self,
        _sign_up_id: &SignUpId,
    ) -> Result<(), ProviderError> {
        self.calls_prepare.fetch_add(1, Ordering::SeqCst);
        if self.prepare_fails {
            return Err(ProviderError::Transport("dispatch failed".to_string()));
        }
        Ok(())
    }

    async fn attempt_email_verification(
        &self,
        _sign_up_id: &SignUpId,
        code: &str,
    ) -> Result<SignUpAttempt, ProviderError> {
        self.calls_verify.fetch_add(1, Ordering::SeqCst);
        *self.recorded_code.lock().unwrap() = Some(code.to_string());
        if self.verify_transport_fails {
            return Err(ProviderError::Transport("connection reset".to_string()));
        }
        let status = self.verify_status.unwrap_or(AttemptStatus::Complete);
        Ok(SignUpAttempt {
            id: SignUpId::from(Self::SIGN_UP_ID),
            status,
            created_session_id: (status == AttemptStatus::Complete)
                .then(|| SessionId::from(Self::SESSION_ID)),
        })
    }

    async fn update_profile(
        &self,
        _sign_up_id: &SignUpId,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ProviderError> {
        self.calls_profile.fetch_add(1, Ordering::SeqCst);
        *self.recorded_profile.lock().unwrap() =
            Some((first_name.to_string(), last_name.to_string()));
        if self.profile_fails {
            return Err(ProviderError::Transport("profile update failed".to_string()));
        }
        Ok(())
    }

    async fn activate_session(
        &self,
        _session_id: &SessionId,
    ) -> Result<SessionToken, ProviderError> {
        self.calls_activate.fetch_add(1, Ordering::SeqCst);
        Ok(SessionToken::from(Self::TOKEN))
    }

    async fn session_active(&self, _token: &str) -> Result<bool, ProviderError> {
        self.calls_session_active.fetch_add(1, Ordering::SeqCst);
        Ok(self.session_is_active)
    }

    async fn oauth_authorize_url(
        &self,
        _provider: OAuthProvider,
        _redirect_url: &str,
    ) -> Result<String, ProviderError> {
        self.calls_oauth.fetch_add(1, Ordering::SeqCst);
        if self.oauth_fails {
            return Err(ProviderError::Transport("handshake init failed".to_string()));
        }
        Ok(Self::AUTHORIZE_URL.to_string())
    }
}

/// Canned flow inputs
pub mod input {
    use super::*;

    pub fn sign_in() -> SignInInput {
        SignInInput {
            identifier: "ada@example.com".to_string(),
            password: "correct-horse-battery".to_string(),
        }
    }

    pub fn sign_up() -> CredentialDraft {
        CredentialDraft {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct-horse-battery".to_string(),
            reveal_password: false,
        }
    }
}
