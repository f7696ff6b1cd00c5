//! Application Layer
//!
//! Use cases and application configuration.

pub mod check_session;
pub mod config;
pub mod oauth;
pub mod sign_in;
pub mod sign_up;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use oauth::{OAuthIntent, OAuthOutcome, OAuthUseCase};
pub use sign_in::{SignInInput, SignInOutcome, SignInUseCase};
pub use sign_up::{SignUpUseCase, VerifyOutcome};
