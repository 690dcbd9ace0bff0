//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("invalid token format: {reason}")]
    InvalidTokenFormat { reason: String },

    #[error("credentials rejected: {message}")]
    CredentialsRejected { message: String },

    #[error("invalid registration data")]
    ValidationFailed { messages: Vec<String> },

    #[error("activation token has been expired or invalid")]
    ActivationRejected,

    #[error("failed to retrieve stored token: {message}")]
    TokenRetrievalFailed { message: String },

    #[error("failed to store token: {message}")]
    TokenStorageFailed { message: String },

    #[error("no authentication token available")]
    NoTokenAvailable,

    #[error("network error during authentication: {message}")]
    NetworkError { message: String },

    #[error("unexpected authentication error: {message}")]
    Unexpected { message: String },
}

impl AuthError {
    /// Creates invalid format error.
    #[must_use]
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidTokenFormat {
            reason: reason.into(),
        }
    }

    /// Creates credentials rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::CredentialsRejected {
            message: message.into(),
        }
    }

    /// Creates validation error from backend messages.
    #[must_use]
    pub const fn validation(messages: Vec<String>) -> Self {
        Self::ValidationFailed { messages }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates retrieval failed error.
    #[must_use]
    pub fn retrieval_failed(message: impl Into<String>) -> Self {
        Self::TokenRetrievalFailed {
            message: message.into(),
        }
    }

    /// Creates storage failed error.
    #[must_use]
    pub fn storage_failed(message: impl Into<String>) -> Self {
        Self::TokenStorageFailed {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns the user-facing messages for this error.
    ///
    /// Validation failures carry the backend's per-field messages; every
    /// other variant collapses into its display form.
    #[must_use]
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed { messages } if !messages.is_empty() => messages.clone(),
            other => vec![other.to_string()],
        }
    }

}
