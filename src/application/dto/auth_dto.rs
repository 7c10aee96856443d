//! Authentication DTOs.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::entities::Session;

/// Where a session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// Persisted by an earlier login.
    Storage,
    /// Token given with `--token` or `MOCKBANK_TOKEN`.
    CommandLine,
    /// Fresh login from the login screen.
    Login,
}

impl SessionSource {
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Storage => "session storage",
            Self::CommandLine => "command line / environment",
            Self::Login => "login screen",
        }
    }
}

impl fmt::Display for SessionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Login form submission.
#[derive(Clone)]
pub struct LoginRequest {
    pub nickname: String,
    pub password: Zeroizing<String>,
}

impl LoginRequest {
    #[must_use]
    pub fn new(nickname: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("nickname", &self.nickname)
            .finish_non_exhaustive()
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub nickname: String,
    /// False when the session only lives in memory for this run.
    pub persisted: bool,
}

/// Session found at startup.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub session: Session,
    pub source: SessionSource,
}
