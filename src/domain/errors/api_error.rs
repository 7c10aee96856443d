//! Bank API error types.

use thiserror::Error;

use super::{StorageError, ValidationError};

/// Message shown for any failure to reach the backend.
pub const CONNECTION_MESSAGE: &str = "Erro na conexão com o servidor.";

/// Message shown when the session is missing or no longer accepted.
pub const SESSION_EXPIRED_MESSAGE: &str = "Sessão expirada. Faça login novamente.";

/// Failure of a bank API operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("could not connect to the bank API: {message}")]
    Connection { message: String },

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("token rejected by the bank API")]
    Unauthorized,

    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error("bank API returned {status}: {message}")]
    Server { status: u16, message: String },

    #[error("no session token available")]
    Unauthenticated,

    #[error("failed to decode response: {message}")]
    Decode { message: String },

    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Creates connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates conflict error.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Creates server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether the user has to sign in again.
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Unauthenticated)
    }

    /// Whether the request never produced a response.
    #[must_use]
    pub const fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout { .. })
    }

    /// Whether the backend reported a uniqueness conflict.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Converts the error into the message a screen displays.
    ///
    /// Server-provided messages win over `fallback`; transport and decoding
    /// failures never leak internals.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Connection { .. } | Self::Timeout { .. } => CONNECTION_MESSAGE.to_string(),
            Self::Unauthorized | Self::Unauthenticated => SESSION_EXPIRED_MESSAGE.to_string(),
            Self::Conflict { message } | Self::Server { message, .. } if !message.is_empty() => {
                message.clone()
            }
            Self::Conflict { .. } | Self::Server { .. } | Self::Decode { .. } | Self::Storage(_) => {
                fallback.to_string()
            }
        }
    }
}
