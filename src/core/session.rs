//! Session resolver: pulls the required `session_id` out of the page URL.

use std::fmt;

use super::constants::endpoints::SESSION_PARAM;

/// Opaque, non-empty token issued by the backend for one authorization request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps a raw token. Empty tokens are rejected.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve the session id from a query string (`?a=b`, `a=b`) or a full URL.
///
/// Returns `None` when the parameter is missing or empty. The first
/// occurrence wins, matching `URLSearchParams.get`.
pub fn resolve_session_id(input: &str) -> Option<SessionId> {
    let query = match url::Url::parse(input) {
        Ok(parsed) => parsed.query().unwrap_or_default().to_string(),
        Err(_) => input.trim_start_matches('?').to_string(),
    };

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SESSION_PARAM)
        .and_then(|(_, value)| SessionId::new(value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_from_search_string() {
        let id = resolve_session_id("?session_id=abc123&x=1").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn resolves_from_full_url() {
        let id = resolve_session_id("https://gate.example/auth?foo=bar&session_id=s%2F42").unwrap();
        assert_eq!(id.as_str(), "s/42");
    }

    #[test]
    fn missing_or_empty_is_absent() {
        assert!(resolve_session_id("").is_none());
        assert!(resolve_session_id("?").is_none());
        assert!(resolve_session_id("?other=1").is_none());
        assert!(resolve_session_id("?session_id=").is_none());
        assert!(resolve_session_id("https://gate.example/auth").is_none());
    }

    #[test]
    fn first_occurrence_wins() {
        let id = resolve_session_id("session_id=first&session_id=second").unwrap();
        assert_eq!(id.to_string(), "first");
    }
}
