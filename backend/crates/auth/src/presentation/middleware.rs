//! Route Gate Middleware
//!
//! Wraps the whole application surface. Every request is classified and
//! the gate decision is enforced here: page challenges become redirects
//! to the sign-in form, API challenges become a 401 with a marker
//! header the frontend fetch layer recognizes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{StatusCode, header::HeaderName};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::provider::IdentityProvider;
use crate::domain::route::{GateAction, decide, is_api_route, is_gate_exempt};
use crate::presentation::cookie::extract_cookie;

/// Marker header on API challenge responses
pub const AUTH_REQUIRED_HEADER: HeaderName = HeaderName::from_static("x-auth-required");

/// Shared state for the route gate
pub struct GateState<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub config: Arc<AuthConfig>,
}

impl<P> Clone for GateState<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            config: self.config.clone(),
        }
    }
}

/// Gate middleware, for `axum::middleware::from_fn_with_state`.
pub async fn route_gate<P>(
    State(state): State<GateState<P>>,
    request: Request,
    next: Next,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let path = request.uri().path().to_string();
    if is_gate_exempt(&path) {
        return next.run(request).await;
    }

    let token = extract_cookie(request.headers(), &state.config.session_cookie_name);
    let session_present = CheckSessionUseCase::new(state.provider.clone())
        .session_present(token.as_deref())
        .await;

    match decide(&path, session_present) {
        GateAction::Pass => next.run(request).await,
        GateAction::RedirectToDashboard => {
            tracing::debug!(%path, "authenticated user redirected off auth page");
            Redirect::to(&state.config.dashboard_path).into_response()
        }
        GateAction::Challenge => {
            tracing::debug!(%path, "unauthenticated request challenged");
            if is_api_route(&path) {
                (StatusCode::UNAUTHORIZED, [(AUTH_REQUIRED_HEADER, "true")]).into_response()
            } else {
                Redirect::to(&state.config.sign_in_path).into_response()
            }
        }
    }
}
