//! Presentation Layer
//!
//! HTTP surface of the auth crate: request/response DTOs, handlers,
//! the route gate middleware, session cookie helpers and the routers.

pub mod cookie;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{AUTH_REQUIRED_HEADER, GateState, route_gate};
pub use router::{auth_router, callback_router};
