//! Auth Router
//!
//! Route tables for the flow endpoints and the post-authentication
//! callback. The flow router is meant to be nested under `/api/auth`
//! by the application.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::application::config::AuthConfig;
use crate::domain::provider::IdentityProvider;
use crate::presentation::handlers::{
    AuthAppState, auth_callback, oauth, sign_in, sign_up, verify,
};

/// Build the flow endpoint router.
pub fn auth_router<P>(provider: Arc<P>, config: Arc<AuthConfig>) -> Router
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let state = AuthAppState { provider, config };

    Router::new()
        .route("/sign-in", post(sign_in))
        .route("/sign-up", post(sign_up))
        .route("/sign-up/verify", post(verify))
        .route("/oauth", post(oauth))
        .with_state(state)
}

/// Build the callback router, mounted at the configured callback path.
pub fn callback_router<P>(provider: Arc<P>, config: Arc<AuthConfig>) -> Router
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let path = config.callback_path.clone();
    let state = AuthAppState { provider, config };

    Router::new()
        .route(&path, get(auth_callback))
        .with_state(state)
}
