//! Authentication DTOs.

use crate::domain::entities::{AuthToken, Credentials};

/// Source of the authentication token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// Token from system keyring.
    Keyring,
    /// Token from command line or environment.
    CommandLine,
}

impl TokenSource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Keyring => "system keyring",
            Self::CommandLine => "command line / environment",
        }
    }
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Login request data.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Credentials for this attempt.
    pub credentials: Credentials,
    /// Whether to persist the returned token.
    pub persist_token: bool,
}

impl LoginRequest {
    /// Creates new login request.
    #[must_use]
    pub const fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            persist_token: true,
        }
    }

    /// Disables token persistence.
    #[must_use]
    pub const fn without_persistence(mut self) -> Self {
        self.persist_token = false;
        self
    }
}

/// Login response data.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    /// Access token returned by the backend.
    pub token: AuthToken,
    /// Whether the token was persisted.
    pub token_persisted: bool,
}

impl LoginResponse {
    /// Creates new login response.
    #[must_use]
    pub const fn new(token: AuthToken, token_persisted: bool) -> Self {
        Self {
            token,
            token_persisted,
        }
    }
}

/// Terminal state of one account activation attempt.
///
/// Any failure collapses into the same fixed message; expired, invalid, and
/// unreachable-backend cases are not distinguished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationOutcome {
    /// User-facing message.
    pub message: &'static str,
    /// Whether activation succeeded.
    pub is_okay: bool,
}

impl ActivationOutcome {
    /// Message shown after a successful activation.
    pub const SUCCESS_MESSAGE: &'static str =
        "Your account has been successfully activated.\nNow you can proceed to login";

    /// Message shown after any failed activation.
    pub const FAILURE_MESSAGE: &'static str = "Token has been expired or invalid";

    /// Creates success outcome.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            message: Self::SUCCESS_MESSAGE,
            is_okay: true,
        }
    }

    /// Creates failure outcome.
    #[must_use]
    pub const fn failure() -> Self {
        Self {
            message: Self::FAILURE_MESSAGE,
            is_okay: false,
        }
    }
}
