//! Sign Up Flow
//!
//! Two-step flow: create a pending account and request an emailed
//! verification code, then verify the code and activate the session.
//! The wizard phase lives in `domain::flow`; this use case drives the
//! transitions: `submit` consumes the credential draft and either
//! advances to verification or hands the draft back, and `verify`
//! consumes the pending record by value, so once a session is
//! activated there is nothing left to verify again.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::flow::{CodeDraft, CredentialDraft, PendingSignUp, SignUpPhase, split_full_name};
use crate::domain::notice::Notifier;
use crate::domain::provider::{AttemptStatus, ErrorCode, IdentityProvider, SessionToken};
use crate::error::FlowError;

/// Outcome of the verification step
#[derive(Debug)]
pub enum VerifyOutcome {
    /// Session activated; install the cookie and navigate
    SessionActive {
        token: SessionToken,
        redirect_to: String,
    },
    /// Bad or unverifiable code; the pending record is handed back so
    /// the user can retry with a new code
    Retry(PendingSignUp),
}

/// Sign up use case
pub struct SignUpUseCase<P, N>
where
    P: IdentityProvider + Sync,
    N: Notifier,
{
    provider: Arc<P>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<P, N> SignUpUseCase<P, N>
where
    P: IdentityProvider + Sync,
    N: Notifier,
{
    pub fn new(provider: Arc<P>, notifier: Arc<N>, config: Arc<AuthConfig>) -> Self {
        Self {
            provider,
            notifier,
            config,
        }
    }

    /// Credential step: create the pending account, request the code
    /// dispatch, then update profile names. Returns the next wizard
    /// phase; on failure the wizard stays in `Collecting` with the
    /// draft intact. Profile-update failures are logged but never
    /// surfaced; the verification step stands once the code has been
    /// dispatched.
    pub async fn submit(&self, draft: CredentialDraft) -> SignUpPhase {
        if !draft.is_complete() {
            self.fail_submit(FlowError::MissingFields);
            return SignUpPhase::Collecting(draft);
        }

        let pending = match self.create_pending(&draft).await {
            Ok(pending) => pending,
            Err(err) => {
                self.fail_submit(err);
                return SignUpPhase::Collecting(draft);
            }
        };

        // Name split on the first whitespace; a single-word name gets
        // an empty surname, accepted as-is
        let (first_name, last_name) = split_full_name(&draft.full_name);
        if let Err(err) = self
            .provider
            .update_profile(&pending.sign_up_id, first_name, last_name)
            .await
        {
            tracing::warn!(
                sign_up_id = %pending.sign_up_id,
                error = %err,
                "Profile update failed after verification dispatch"
            );
        }

        tracing::info!(
            sign_up_id = %pending.sign_up_id,
            email = %pending.email,
            "Sign-up pending verification"
        );
        SignUpPhase::Collecting(draft).begin_verification(pending)
    }

    /// Verification step. The code arrives as a [`CodeDraft`], so it is
    /// already bounded to the emailed code length. Consumes the pending
    /// record; it is only handed back when a retry is allowed.
    pub async fn verify(&self, pending: PendingSignUp, code: &CodeDraft) -> VerifyOutcome {
        if code.is_empty() {
            return self.fail_verify(FlowError::MissingCode, pending);
        }

        let attempt = match self
            .provider
            .attempt_email_verification(&pending.sign_up_id, code.as_str())
            .await
        {
            Ok(attempt) => attempt,
            Err(err) => return self.fail_verify(err.into(), pending),
        };

        match attempt.status {
            AttemptStatus::Complete => {
                let Some(session_id) = attempt.created_session_id else {
                    return self.fail_verify(
                        FlowError::Transport("complete attempt without a session id".to_string()),
                        pending,
                    );
                };
                match self.provider.activate_session(&session_id).await {
                    Ok(token) => {
                        tracing::info!(sign_up_id = %pending.sign_up_id, "Sign-up complete");
                        VerifyOutcome::SessionActive {
                            token,
                            redirect_to: self.config.callback_path.clone(),
                        }
                    }
                    Err(err) => self.fail_verify(err.into(), pending),
                }
            }
            status => self.fail_verify(FlowError::Incomplete(status), pending),
        }
    }

    async fn create_pending(&self, draft: &CredentialDraft) -> Result<PendingSignUp, FlowError> {
        let attempt = self
            .provider
            .create_sign_up(&draft.email, &draft.password)
            .await?;

        self.provider
            .prepare_email_verification(&attempt.id)
            .await?;

        Ok(PendingSignUp {
            sign_up_id: attempt.id,
            email: draft.email.clone(),
        })
    }

    fn fail_submit(&self, err: FlowError) {
        err.log("sign_up");
        self.notifier.notify(err.severity(), submit_notice_for(&err));
    }

    fn fail_verify(&self, err: FlowError, pending: PendingSignUp) -> VerifyOutcome {
        err.log("sign_up_verify");
        self.notifier.notify(err.severity(), verify_notice_for(&err));
        VerifyOutcome::Retry(pending)
    }
}

/// User-facing message for a credential-step failure
fn submit_notice_for(err: &FlowError) -> &'static str {
    match err {
        FlowError::MissingFields | FlowError::MissingCode => "Please fill in all fields",
        FlowError::Rejected(ErrorCode::FormIdentifierExists) => {
            "This email is already registered. Please sign in."
        }
        FlowError::Rejected(ErrorCode::FormPasswordPwned) => {
            "The password is too common. Please choose a stronger password."
        }
        FlowError::Rejected(ErrorCode::FormParamFormatInvalid) => {
            "Invalid email address. Please enter a valid email address."
        }
        FlowError::Rejected(ErrorCode::FormPasswordLengthTooShort) => {
            "Password is too short. Please choose a longer password."
        }
        FlowError::Rejected(_) | FlowError::Incomplete(_) | FlowError::Transport(_) => {
            "An error occurred. Please try again"
        }
    }
}

/// User-facing message for a verification-step failure
fn verify_notice_for(err: &FlowError) -> &'static str {
    match err {
        FlowError::MissingFields | FlowError::MissingCode => "Verification code is required",
        FlowError::Incomplete(_) => "Invalid verification code",
        FlowError::Rejected(_) | FlowError::Transport(_) => "An error occurred. Please try again",
    }
}
