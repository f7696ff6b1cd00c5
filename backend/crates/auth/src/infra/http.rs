//! Identity Provider HTTP Client
//!
//! reqwest implementation of the [`IdentityProvider`] port. The wire
//! contract: JSON bodies, bearer secret-key auth, and rejections of the
//! shape `{"errors": [{"code", "message"}]}`. Codes outside the known
//! vocabulary decode to `ErrorCode::Unknown` and surface as generic
//! notices upstream. No retries and no timeout policy beyond the
//! client defaults.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::domain::provider::{
    ErrorCode, IdentityProvider, OAuthProvider, ProviderError, SessionId, SessionToken,
    SignInAttempt, SignUpAttempt, SignUpId,
};

/// Hosted identity provider client
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

/// Rejection body
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: ErrorCode,
    #[allow(dead_code)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ActivateResponse {
    token: SessionToken,
}

#[derive(Debug, Deserialize)]
struct SessionStatusResponse {
    active: bool,
}

#[derive(Debug, Deserialize)]
struct AuthorizeResponse {
    authorize_url: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
        }
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ProviderError> {
        self.send(reqwest::Method::POST, path, body).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, ProviderError> {
        let url = format!("{}/v1/{}", self.base_url, path);

        let response = self
            .http
            .request(method, &url)
            .bearer_auth(&self.secret_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.decode_rejection(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Transport(format!("malformed response body: {e}")))
    }

    async fn decode_rejection(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ProviderError {
        match response.json::<ErrorResponse>().await {
            Ok(body) => match body.errors.first() {
                Some(err) => ProviderError::Rejected(err.code),
                None => ProviderError::Transport(format!("status {status} with empty error list")),
            },
            Err(_) => ProviderError::Transport(format!("status {status} without error body")),
        }
    }
}

impl IdentityProvider for HttpIdentityProvider {
    async fn create_sign_in(
        &self,
        identifier: &str,
        password: &str,
    ) -> Result<SignInAttempt, ProviderError> {
        self.post(
            "sign_ins",
            json!({ "identifier": identifier, "password": password }),
        )
        .await
    }

    async fn create_sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignUpAttempt, ProviderError> {
        self.post(
            "sign_ups",
            json!({ "email_address": email, "password": password }),
        )
        .await
    }

    async fn prepare_email_verification(
        &self,
        sign_up_id: &SignUpId,
    ) -> Result<(), ProviderError> {
        let _: SignUpAttempt = self
            .post(
                &format!("sign_ups/{sign_up_id}/prepare_verification"),
                json!({ "strategy": "email_code" }),
            )
            .await?;
        Ok(())
    }

    async fn attempt_email_verification(
        &self,
        sign_up_id: &SignUpId,
        code: &str,
    ) -> Result<SignUpAttempt, ProviderError> {
        self.post(
            &format!("sign_ups/{sign_up_id}/attempt_verification"),
            json!({ "strategy": "email_code", "code": code }),
        )
        .await
    }

    async fn update_profile(
        &self,
        sign_up_id: &SignUpId,
        first_name: &str,
        last_name: &str,
    ) -> Result<(), ProviderError> {
        let _: SignUpAttempt = self
            .send(
                reqwest::Method::PATCH,
                &format!("sign_ups/{sign_up_id}"),
                json!({ "first_name": first_name, "last_name": last_name }),
            )
            .await?;
        Ok(())
    }

    async fn activate_session(
        &self,
        session_id: &SessionId,
    ) -> Result<SessionToken, ProviderError> {
        let response: ActivateResponse = self
            .post(&format!("sessions/{session_id}/activate"), json!({}))
            .await?;
        Ok(response.token)
    }

    async fn session_active(&self, token: &str) -> Result<bool, ProviderError> {
        let response: SessionStatusResponse = self
            .post("sessions/verify", json!({ "token": token }))
            .await?;
        Ok(response.active)
    }

    async fn oauth_authorize_url(
        &self,
        provider: OAuthProvider,
        redirect_url: &str,
    ) -> Result<String, ProviderError> {
        let response: AuthorizeResponse = self
            .post(
                "oauth/authorizations",
                json!({ "strategy": provider.strategy(), "redirect_url": redirect_url }),
            )
            .await?;
        Ok(response.authorize_url)
    }
}
