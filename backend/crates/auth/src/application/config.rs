//! Application Configuration
//!
//! Configuration for the auth gateway: provider endpoint, session
//! cookie policy and the fixed application routes.

/// SameSite policy for the session cookie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Auth gateway configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the hosted identity provider API
    pub provider_api_url: String,
    /// Secret API key for the provider (bearer auth)
    pub provider_secret_key: String,
    /// Name of the provider session cookie
    pub session_cookie_name: String,
    /// Whether to require Secure on the session cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Protected-area landing path
    pub dashboard_path: String,
    /// Sign-in form path (challenge destination)
    pub sign_in_path: String,
    /// Post-authentication landing route; also the OAuth resume route
    pub callback_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider_api_url: String::new(),
            provider_secret_key: String::new(),
            session_cookie_name: "__session".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            dashboard_path: "/dashboard".to_string(),
            sign_in_path: "/sign-in".to_string(),
            callback_path: "/auth-callback".to_string(),
        }
    }
}

impl AuthConfig {
    /// Config pointed at a provider endpoint
    pub fn new(provider_api_url: impl Into<String>, provider_secret_key: impl Into<String>) -> Self {
        Self {
            provider_api_url: provider_api_url.into(),
            provider_secret_key: provider_secret_key.into(),
            ..Self::default()
        }
    }

    /// Create config for development (insecure cookie, local provider)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::new("http://localhost:3100", "dev_secret")
        }
    }
}
