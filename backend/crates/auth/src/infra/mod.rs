//! Infrastructure Layer
//!
//! HTTP implementation of the identity-provider port.

pub mod http;

pub use http::HttpIdentityProvider;
