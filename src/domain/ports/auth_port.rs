//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, Credentials, Registration};
use crate::domain::errors::AuthError;

/// Port for authentication operations against the backend.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges credentials for an access token.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken, AuthError>;

    /// Registers a new account; the backend mails a confirmation code.
    async fn register(&self, registration: &Registration) -> Result<(), AuthError>;

    /// Confirms an account with the mailed activation code.
    async fn confirm(&self, code: &str) -> Result<(), AuthError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Mock authentication port for testing.
    ///
    /// Counts invocations so tests can assert exactly-once dispatch.
    pub struct MockAuthPort {
        should_succeed: Arc<AtomicBool>,
        authenticate_calls: AtomicUsize,
        register_calls: AtomicUsize,
        confirm_calls: AtomicUsize,
    }

    impl MockAuthPort {
        /// Creates new mock.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: Arc::new(AtomicBool::new(should_succeed)),
                authenticate_calls: AtomicUsize::new(0),
                register_calls: AtomicUsize::new(0),
                confirm_calls: AtomicUsize::new(0),
            }
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }

        /// Returns how many times `authenticate` ran.
        pub fn authenticate_calls(&self) -> usize {
            self.authenticate_calls.load(Ordering::SeqCst)
        }

        /// Returns how many times `register` ran.
        pub fn register_calls(&self) -> usize {
            self.register_calls.load(Ordering::SeqCst)
        }

        /// Returns how many times `confirm` ran.
        pub fn confirm_calls(&self) -> usize {
            self.confirm_calls.load(Ordering::SeqCst)
        }

        fn make_token() -> AuthToken {
            AuthToken::new_unchecked("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJ0ZXN0In0.c2ln")
        }
    }

    #[async_trait]
    impl AuthPort for MockAuthPort {
        async fn authenticate(&self, _credentials: &Credentials) -> Result<AuthToken, AuthError> {
            self.authenticate_calls.fetch_add(1, Ordering::SeqCst);
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(Self::make_token())
            } else {
                Err(AuthError::rejected("mock rejection"))
            }
        }

        async fn register(&self, _registration: &Registration) -> Result<(), AuthError> {
            self.register_calls.fetch_add(1, Ordering::SeqCst);
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(AuthError::validation(vec!["mock rejection".to_string()]))
            }
        }

        async fn confirm(&self, _code: &str) -> Result<(), AuthError> {
            self.confirm_calls.fetch_add(1, Ordering::SeqCst);
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(AuthError::ActivationRejected)
            }
        }
    }
}
