//! Route Classification
//!
//! Pure per-request gate decisions. Given a path and whether a session
//! is present, the gate either passes the request through, redirects an
//! already-authenticated user away from the auth forms, or challenges.
//! Same inputs always yield the same action; nothing here does I/O.

/// Classification of an incoming request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable with or without a session
    Public,
    /// Auth forms; authenticated users are redirected away
    AuthOnly,
    /// Everything else; requires a session
    Protected,
}

/// Gate decision for a `(path, session_present)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Pass the request through unchanged
    Pass,
    /// Redirect to the protected-area landing path
    RedirectToDashboard,
    /// Require authentication; the caller translates this into a
    /// redirect to sign-in or a 401 depending on the request kind
    Challenge,
}

/// File extensions treated as static assets and skipped by the gate.
/// Routing hygiene only, not a security boundary.
const ASSET_EXTENSIONS: &[&str] = &[
    "html", "htm", "css", "js", "jpg", "jpeg", "webp", "png", "gif", "svg", "ttf", "woff",
    "woff2", "ico", "csv", "doc", "docx", "xls", "xlsx", "zip", "webmanifest", "txt", "map",
];

/// Classify a path into its route class.
pub fn classify(path: &str) -> RouteClass {
    if is_auth_route(path) {
        RouteClass::AuthOnly
    } else if path == "/" {
        RouteClass::Public
    } else {
        RouteClass::Protected
    }
}

/// Decide the gate action for a request.
///
/// Rules, in order: auth-only paths with a session redirect to the
/// dashboard; public paths (root and the auth forms) pass through;
/// everything else requires a session.
pub fn decide(path: &str, session_present: bool) -> GateAction {
    match classify(path) {
        RouteClass::AuthOnly if session_present => GateAction::RedirectToDashboard,
        RouteClass::AuthOnly | RouteClass::Public => GateAction::Pass,
        RouteClass::Protected => {
            if session_present {
                GateAction::Pass
            } else {
                GateAction::Challenge
            }
        }
    }
}

/// Whether the gate skips this path entirely.
///
/// Framework-internal paths (`/_` prefix) and static assets are
/// excluded from evaluation, except that API-prefixed paths are always
/// evaluated regardless of how they look.
pub fn is_gate_exempt(path: &str) -> bool {
    if is_api_route(path) {
        return false;
    }
    if path.starts_with("/_") {
        return true;
    }
    is_asset_path(path)
}

/// `/api` and `/trpc` prefixed paths are always evaluated.
pub fn is_api_route(path: &str) -> bool {
    matches_prefix(path, "/api") || matches_prefix(path, "/trpc")
}

// The gateway's own flow endpoints belong to the auth forms and follow
// their classification
fn is_auth_route(path: &str) -> bool {
    matches_prefix(path, "/sign-in")
        || matches_prefix(path, "/sign-up")
        || matches_prefix(path, "/api/auth")
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

fn is_asset_path(path: &str) -> bool {
    let last_segment = path.rsplit('/').next().unwrap_or("");
    match last_segment.rsplit_once('.') {
        Some((name, ext)) if !name.is_empty() => {
            let ext = ext.to_ascii_lowercase();
            ASSET_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}
