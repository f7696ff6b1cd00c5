//! Domain Layer
//!
//! Pure decision logic and ports: route classification, the sign-up
//! wizard state machine, the notice channel and the identity-provider
//! interface.

pub mod flow;
pub mod notice;
pub mod provider;
pub mod route;

// Re-exports
pub use flow::{CredentialDraft, PendingSignUp, SignUpPhase};
pub use notice::{Notice, NoticeBuffer, Notifier, Severity};
pub use provider::{IdentityProvider, ProviderError};
pub use route::{GateAction, RouteClass};
