//! Persisted client session.

use super::AuthToken;

/// Nickname shown when no session nickname is stored.
pub const GUEST_NICKNAME: &str = "Visitante";

/// Bearer token and display nickname kept across restarts.
///
/// Either half may be missing: the two values are stored under independent
/// keys and a reader can observe one without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<AuthToken>,
    nickname: Option<String>,
}

impl Session {
    /// Creates a session from its stored parts.
    #[must_use]
    pub fn new(token: Option<AuthToken>, nickname: Option<String>) -> Self {
        Self {
            token,
            nickname: nickname.filter(|n| !n.trim().is_empty()),
        }
    }

    /// Creates a fully populated session.
    #[must_use]
    pub fn authenticated(token: AuthToken, nickname: impl Into<String>) -> Self {
        Self::new(Some(token), Some(nickname.into()))
    }

    /// Returns the empty session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns the bearer token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Returns the stored nickname, if any.
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// Returns the nickname to display, falling back to the guest label.
    #[must_use]
    pub fn display_nickname(&self) -> &str {
        self.nickname().unwrap_or(GUEST_NICKNAME)
    }

    /// Whether a token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.display_nickname(), GUEST_NICKNAME);
    }

    #[test]
    fn test_authenticated_session() {
        let session = Session::authenticated(AuthToken::new_unchecked("abc"), "ana");
        assert!(session.is_authenticated());
        assert_eq!(session.token().map(AuthToken::as_str), Some("abc"));
        assert_eq!(session.display_nickname(), "ana");
    }

    #[test]
    fn test_blank_nickname_is_dropped() {
        let session = Session::new(None, Some("  ".to_string()));
        assert_eq!(session.nickname(), None);
    }
}
