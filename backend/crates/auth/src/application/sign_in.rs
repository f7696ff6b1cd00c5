//! Sign In Flow
//!
//! Single-step flow: collect credentials, create a sign-in attempt
//! with the provider, activate the created session and navigate to the
//! callback route. Every failure is translated into exactly one user
//! notice here; the flow always ends in an interactive outcome.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::notice::Notifier;
use crate::domain::provider::{AttemptStatus, ErrorCode, IdentityProvider, SessionToken};
use crate::error::FlowError;

/// Sign in input
#[derive(Debug, Clone)]
pub struct SignInInput {
    /// Email address
    pub identifier: String,
    pub password: String,
}

/// Terminal outcome of a sign-in submission
#[derive(Debug)]
pub enum SignInOutcome {
    /// Session activated; install the cookie and navigate
    SessionActive {
        token: SessionToken,
        redirect_to: String,
    },
    /// Flow returned to idle; a notice was emitted
    Failed,
}

/// Sign in use case
pub struct SignInUseCase<P, N>
where
    P: IdentityProvider + Sync,
    N: Notifier,
{
    provider: Arc<P>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<P, N> SignInUseCase<P, N>
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

    /// Submit credentials. Empty fields fail fast without a provider
    /// call; any provider failure surfaces as a single notice.
    pub async fn submit(&self, input: SignInInput) -> SignInOutcome {
        if input.identifier.is_empty() || input.password.is_empty() {
            return self.fail(FlowError::MissingFields);
        }

        match self.verify_credentials(&input).await {
            Ok(token) => {
                tracing::info!(identifier = %input.identifier, "Sign-in complete");
                SignInOutcome::SessionActive {
                    token,
                    redirect_to: self.config.callback_path.clone(),
                }
            }
            Err(err) => self.fail(err),
        }
    }

    async fn verify_credentials(&self, input: &SignInInput) -> Result<SessionToken, FlowError> {
        let attempt = self
            .provider
            .create_sign_in(&input.identifier, &input.password)
            .await?;

        match attempt.status {
            AttemptStatus::Complete => {
                let session_id = attempt.created_session_id.ok_or_else(|| {
                    FlowError::Transport("complete attempt without a session id".to_string())
                })?;
                Ok(self.provider.activate_session(&session_id).await?)
            }
            // Intermediate statuses (e.g. second factor required) are
            // folded into the generic failure path
            status => Err(FlowError::Incomplete(status)),
        }
    }

    fn fail(&self, err: FlowError) -> SignInOutcome {
        err.log("sign_in");
        self.notifier.notify(err.severity(), notice_for(&err));
        SignInOutcome::Failed
    }
}

/// User-facing message for a sign-in failure
fn notice_for(err: &FlowError) -> &'static str {
    match err {
        FlowError::MissingFields | FlowError::MissingCode => "Please fill in all fields",
        FlowError::Incomplete(_) => "Invalid email or password",
        FlowError::Rejected(ErrorCode::FormIdentifierNotFound) => {
            "This email is not registered. Please sign up first."
        }
        FlowError::Rejected(ErrorCode::FormPasswordIncorrect) => {
            "Incorrect password. Please try again."
        }
        FlowError::Rejected(ErrorCode::TooManyAttempts) => {
            "Too many attempts. Please try again later."
        }
        FlowError::Rejected(_) | FlowError::Transport(_) => "An error occurred. Please try again",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{MockProvider, input};
    use crate::domain::notice::{NoticeBuffer, Severity};

    fn use_case(provider: MockProvider) -> (SignInUseCase<MockProvider, NoticeBuffer>, Arc<MockProvider>, Arc<NoticeBuffer>) {
        let provider = Arc::new(provider);
        let notifier = Arc::new(NoticeBuffer::new());
        let config = Arc::new(AuthConfig::development());
        (
            SignInUseCase::new(provider.clone(), notifier.clone(), config),
            provider,
            notifier,
        )
    }

    #[tokio::test]
    async fn test_missing_fields_fail_fast_without_network() {
        let (use_case, provider, notifier) = use_case(MockProvider::default());

        let outcome = use_case
            .submit(SignInInput {
                identifier: String::new(),
                password: "x".to_string(),
            })
            .await;

        assert!(matches!(outcome, SignInOutcome::Failed));
        assert_eq!(provider.total_calls(), 0);

        let notices = notifier.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Warning);
        assert_eq!(notices[0].message, "Please fill in all fields");
    }

    #[tokio::test]
    async fn test_wrong_password_notice() {
        let provider =
            MockProvider::default().reject_sign_in(ErrorCode::FormPasswordIncorrect);
        let (use_case, provider, notifier) = use_case(provider);

        let outcome = use_case.submit(input::sign_in()).await;

        assert!(matches!(outcome, SignInOutcome::Failed));
        let notices = notifier.drain();
        assert_eq!(notices[0].severity, Severity::Error);
        assert_eq!(notices[0].message, "Incorrect password. Please try again.");
        // Flow is interactive again, no session was activated
        assert_eq!(provider.activate_calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_identifier_notice() {
        let provider =
            MockProvider::default().reject_sign_in(ErrorCode::FormIdentifierNotFound);
        let (use_case, _, notifier) = use_case(provider);

        use_case.submit(input::sign_in()).await;

        assert_eq!(
            notifier.drain()[0].message,
            "This email is not registered. Please sign up first."
        );
    }

    #[tokio::test]
    async fn test_incomplete_status_is_generic_failure() {
        let provider = MockProvider::default().sign_in_status(AttemptStatus::NeedsSecondFactor);
        let (use_case, provider, notifier) = use_case(provider);

        let outcome = use_case.submit(input::sign_in()).await;

        assert!(matches!(outcome, SignInOutcome::Failed));
        assert_eq!(notifier.drain()[0].message, "Invalid email or password");
        assert_eq!(provider.activate_calls(), 0);
    }

    #[tokio::test]
    async fn test_unrecognized_code_falls_back() {
        let provider = MockProvider::default().reject_sign_in(ErrorCode::Unknown);
        let (use_case, _, notifier) = use_case(provider);

        use_case.submit(input::sign_in()).await;

        assert_eq!(notifier.drain()[0].message, "An error occurred. Please try again");
    }

    #[tokio::test]
    async fn test_success_activates_and_navigates() {
        let (use_case, provider, notifier) = use_case(MockProvider::default());

        let outcome = use_case.submit(input::sign_in()).await;

        match outcome {
            SignInOutcome::SessionActive { token, redirect_to } => {
                assert_eq!(token.as_str(), MockProvider::TOKEN);
                assert_eq!(redirect_to, "/auth-callback");
            }
            SignInOutcome::Failed => panic!("expected session activation"),
        }
        assert_eq!(provider.activate_calls(), 1);
        assert!(notifier.drain().is_empty());
    }
}
