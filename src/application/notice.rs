//! Blocking alerts raised by controllers.

use crate::domain::errors::{ApiError, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Alert shown over the current screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Converts a failed request into an error alert.
    #[must_use]
    pub fn from_api_error(error: &ApiError, fallback: &str) -> Self {
        match error {
            ApiError::Validation(e) => Self::from(e),
            _ => Self::error("Erro", error.user_message(fallback)),
        }
    }
}

impl From<&ValidationError> for Notice {
    fn from(error: &ValidationError) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: error.title().to_string(),
            message: error.to_string(),
        }
    }
}
