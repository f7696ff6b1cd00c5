//! HTTP Handlers
//!
//! Thin adapters between the HTTP surface and the flow use cases. Each
//! request gets a fresh notice buffer; whatever the flow emitted is
//! drained into the response for the frontend toast layer.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, OAuthOutcome, OAuthUseCase, SignInInput, SignInOutcome, SignInUseCase,
    SignUpUseCase, VerifyOutcome,
};
use crate::domain::flow::{CodeDraft, CredentialDraft, PendingSignUp, SignUpPhase};
use crate::domain::notice::NoticeBuffer;
use crate::domain::provider::{IdentityProvider, SignUpId};
use crate::presentation::cookie::{build_session_cookie, extract_cookie};
use crate::presentation::dto::{
    FlowResponse, OAuthRequest, SignInRequest, SignUpRequest, VerifyRequest,
};

/// Shared state for auth handlers
pub struct AuthAppState<P>
where
    P: IdentityProvider + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub config: Arc<AuthConfig>,
}

// Manual impl: Arc fields are always cloneable, the provider need not be
impl<P> Clone for AuthAppState<P>
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

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/sign-in
pub async fn sign_in<P>(
    State(state): State<AuthAppState<P>>,
    Json(req): Json<SignInRequest>,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let notifier = Arc::new(NoticeBuffer::new());
    let use_case = SignInUseCase::new(state.provider.clone(), notifier.clone(), state.config.clone());

    let outcome = use_case
        .submit(SignInInput {
            identifier: req.email,
            password: req.password,
        })
        .await;

    match outcome {
        SignInOutcome::SessionActive { token, redirect_to } => session_response(
            &state.config,
            token.as_str(),
            redirect_to,
            notifier.drain(),
        ),
        SignInOutcome::Failed => Json(FlowResponse::failed(notifier.drain())).into_response(),
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/sign-up
pub async fn sign_up<P>(
    State(state): State<AuthAppState<P>>,
    Json(req): Json<SignUpRequest>,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let notifier = Arc::new(NoticeBuffer::new());
    let use_case = SignUpUseCase::new(state.provider.clone(), notifier.clone(), state.config.clone());

    let draft = CredentialDraft {
        full_name: req.name,
        email: req.email,
        password: req.password,
        reveal_password: false,
    };

    match use_case.submit(draft).await {
        SignUpPhase::VerificationPending { pending, .. } => Json(
            FlowResponse::verification_pending(
                pending.sign_up_id.to_string(),
                pending.email,
                notifier.drain(),
            ),
        )
        .into_response(),
        // Wizard stayed in the credential step; the draft is the
        // client's to keep
        SignUpPhase::Collecting(_) => {
            Json(FlowResponse::failed(notifier.drain())).into_response()
        }
    }
}

/// POST /api/auth/sign-up/verify
pub async fn verify<P>(
    State(state): State<AuthAppState<P>>,
    Json(req): Json<VerifyRequest>,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let notifier = Arc::new(NoticeBuffer::new());
    let use_case = SignUpUseCase::new(state.provider.clone(), notifier.clone(), state.config.clone());

    // Rebuild the pending record from the client-held reference; the
    // provider is the source of truth for whether it still exists
    let pending = PendingSignUp {
        sign_up_id: SignUpId::from(req.sign_up_id),
        email: req.email,
    };

    // The draft bounds the code to the emailed code length
    let mut code = CodeDraft::default();
    code.set(&req.code);

    match use_case.verify(pending, &code).await {
        VerifyOutcome::SessionActive { token, redirect_to } => session_response(
            &state.config,
            token.as_str(),
            redirect_to,
            notifier.drain(),
        ),
        VerifyOutcome::Retry(pending) => Json(FlowResponse::verification_pending(
            pending.sign_up_id.to_string(),
            pending.email,
            notifier.drain(),
        ))
        .into_response(),
    }
}

// ============================================================================
// OAuth
// ============================================================================

/// POST /api/auth/oauth
pub async fn oauth<P>(
    State(state): State<AuthAppState<P>>,
    Json(req): Json<OAuthRequest>,
) -> Response
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let notifier = Arc::new(NoticeBuffer::new());
    let use_case = OAuthUseCase::new(state.provider.clone(), notifier.clone(), state.config.clone());

    match use_case.initiate(req.intent, req.provider).await {
        OAuthOutcome::Redirect { authorize_url } => {
            Json(FlowResponse::complete(authorize_url, notifier.drain())).into_response()
        }
        OAuthOutcome::Failed => Json(FlowResponse::failed(notifier.drain())).into_response(),
    }
}

// ============================================================================
// Auth Callback
// ============================================================================

/// GET /auth-callback
///
/// Post-authentication landing route, reached after credential
/// flows and OAuth alike. Forwards to the dashboard once the session
/// cookie is active, back to sign-in otherwise.
pub async fn auth_callback<P>(
    State(state): State<AuthAppState<P>>,
    headers: HeaderMap,
) -> Redirect
where
    P: IdentityProvider + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);
    let use_case = CheckSessionUseCase::new(state.provider.clone());

    if use_case.session_present(token.as_deref()).await {
        Redirect::to(&state.config.dashboard_path)
    } else {
        Redirect::to(&state.config.sign_in_path)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn session_response(
    config: &AuthConfig,
    token: &str,
    redirect_to: String,
    notices: Vec<crate::domain::notice::Notice>,
) -> Response {
    let cookie = build_session_cookie(config, token);
    (
        [(header::SET_COOKIE, cookie)],
        Json(FlowResponse::complete(redirect_to, notices)),
    )
        .into_response()
}
