//! Auth (Authentication) Gateway Module
//!
//! Clean Architecture structure:
//! - `domain/` - Route gate rules, flow state, provider port
//! - `application/` - Sign-in/sign-up/OAuth use cases
//! - `infra/` - Hosted identity provider HTTP client
//! - `presentation/` - HTTP handlers, DTOs, gate middleware, router
//!
//! ## Features
//! - Route protection gate for pages and API routes
//! - Email + password sign-in
//! - Two-step sign-up with email-code verification
//! - OAuth redirect initiation (Google)
//! - Session installed as a provider-owned opaque cookie token
//!
//! ## Model
//! - The gateway holds no credential or session state of its own
//! - Every flow delegates to the hosted identity provider over HTTP
//! - Failures surface as toast notices; flows never panic a request

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::FlowError;
pub use infra::HttpIdentityProvider;
pub use presentation::router::{auth_router, callback_router};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::flow::*;
    pub use crate::domain::notice::*;
    pub use crate::domain::provider::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
