//! Session Presence
//!
//! Read-side of the process-wide authenticated state. The session is
//! owned by the provider; this use case only asks whether the cookie
//! token is active. Provider failures are treated as "no session" so a
//! flaky provider degrades to a challenge instead of an outage.

use std::sync::Arc;

use crate::domain::provider::IdentityProvider;

/// Check session use case
pub struct CheckSessionUseCase<P>
where
    P: IdentityProvider + Sync,
{
    provider: Arc<P>,
}

impl<P> CheckSessionUseCase<P>
where
    P: IdentityProvider + Sync,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Whether a session is present for the given cookie token.
    pub async fn session_present(&self, token: Option<&str>) -> bool {
        let Some(token) = token else {
            return false;
        };

        match self.provider.session_active(token).await {
            Ok(active) => active,
            Err(err) => {
                tracing::warn!(error = %err, "Session check failed, treating as unauthenticated");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::MockProvider;

    #[tokio::test]
    async fn test_no_cookie_means_no_session() {
        let use_case = CheckSessionUseCase::new(Arc::new(MockProvider::default()));
        assert!(!use_case.session_present(None).await);
    }

    #[tokio::test]
    async fn test_active_token() {
        let use_case =
            CheckSessionUseCase::new(Arc::new(MockProvider::default().with_active_session()));
        assert!(use_case.session_present(Some("tok")).await);
    }

    #[tokio::test]
    async fn test_inactive_token() {
        let use_case = CheckSessionUseCase::new(Arc::new(MockProvider::default()));
        assert!(!use_case.session_present(Some("tok")).await);
    }
}
