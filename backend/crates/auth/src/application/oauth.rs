//! OAuth Redirect Sub-flow
//!
//! Shared by sign-in and sign-up: ask the provider for an authorize
//! URL that resumes at the fixed callback route, then hand control to
//! the provider. There is no local completion path; success means
//! navigation away, and the callback route is a separate inbound
//! handler.

use std::sync::Arc;

use serde::Deserialize;

use crate::application::config::AuthConfig;
use crate::domain::notice::Notifier;
use crate::domain::provider::{IdentityProvider, OAuthProvider};

/// Which auth form the handshake was initiated from. Only affects the
/// failure notice wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthIntent {
    SignIn,
    SignUp,
}

impl OAuthIntent {
    fn verb(self) -> &'static str {
        match self {
            OAuthIntent::SignIn => "in",
            OAuthIntent::SignUp => "up",
        }
    }
}

/// Outcome of an OAuth initiation
#[derive(Debug)]
pub enum OAuthOutcome {
    /// Control transfers to the provider
    Redirect { authorize_url: String },
    /// Handshake could not be initiated; a notice was emitted and the
    /// form is interactive again
    Failed,
}

/// OAuth initiation use case
pub struct OAuthUseCase<P, N>
where
    P: IdentityProvider + Sync,
    N: Notifier,
{
    provider: Arc<P>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<P, N> OAuthUseCase<P, N>
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

    pub async fn initiate(&self, intent: OAuthIntent, oauth: OAuthProvider) -> OAuthOutcome {
        match self
            .provider
            .oauth_authorize_url(oauth, &self.config.callback_path)
            .await
        {
            Ok(authorize_url) => {
                tracing::info!(?intent, provider = oauth.display_name(), "OAuth redirect initiated");
                OAuthOutcome::Redirect { authorize_url }
            }
            Err(err) => {
                tracing::warn!(?intent, error = %err, "OAuth initiation failed");
                self.notifier.error(&format!(
                    "Failed to sign {} with {}. Please try again.",
                    intent.verb(),
                    oauth.display_name()
                ));
                OAuthOutcome::Failed
            }
        }
    }
}
