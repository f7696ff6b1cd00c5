//! Session Cookie Handling
//!
//! The cookie value is the provider's opaque session token; the
//! gateway installs and reads it but never interprets it. No Max-Age
//! is set: token lifetime is owned by the provider.

use axum::http::{HeaderMap, header};

use crate::application::config::AuthConfig;

/// Build the Set-Cookie header value for an activated session.
pub fn build_session_cookie(config: &AuthConfig, token: &str) -> String {
    let mut cookie = format!("{}={}", config.session_cookie_name, token);
    cookie.push_str("; HttpOnly");
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie.push_str(&format!("; SameSite={}", config.cookie_same_site.as_str()));
    cookie.push_str("; Path=/");
    cookie
}

/// Extract a cookie value from request headers.
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_build_session_cookie() {
        let config = AuthConfig::default();
        let cookie = build_session_cookie(&config, "tok_abc");
        assert!(cookie.starts_with("__session=tok_abc"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
    }

    #[test]
    fn test_development_cookie_is_not_secure() {
        let cookie = build_session_cookie(&AuthConfig::development(), "tok_abc");
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; __session=tok_abc; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "__session"),
            Some("tok_abc".to_string())
        );
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }
}
