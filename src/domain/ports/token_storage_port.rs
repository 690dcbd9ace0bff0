//! Session token persistence port.

use async_trait::async_trait;

use crate::domain::entities::AuthToken;
use crate::domain::errors::AuthError;

/// Port for persisting the JWT issued by the book-network backend between
/// sessions.
///
/// Storage is best-effort from the caller's point of view: a login that
/// cannot persist its token is still a successful login, so implementations
/// report failures but must not be load-bearing for authentication.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Loads the persisted session token, if one exists.
    async fn get_token(&self) -> Result<Option<AuthToken>, AuthError>;

    /// Persists the session token.
    async fn store_token(&self, token: &AuthToken) -> Result<(), AuthError>;

    /// Removes the persisted session token. Removing an absent token is
    /// not an error.
    async fn delete_token(&self) -> Result<(), AuthError>;

    /// Returns whether a session token is persisted.
    async fn has_token(&self) -> Result<bool, AuthError> {
        Ok(self.get_token().await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    /// In-memory stand-in for the keyring.
    ///
    /// Can be switched into a failing mode to exercise the
    /// login-still-succeeds-when-storage-fails path.
    pub struct MockTokenStorage {
        token: RwLock<Option<AuthToken>>,
        fail_writes: AtomicBool,
    }

    impl MockTokenStorage {
        /// Creates empty storage.
        pub fn new() -> Self {
            Self {
                token: RwLock::new(None),
                fail_writes: AtomicBool::new(false),
            }
        }

        /// Creates storage already holding a session token.
        pub fn with_token(token: AuthToken) -> Self {
            Self {
                token: RwLock::new(Some(token)),
                fail_writes: AtomicBool::new(false),
            }
        }

        /// Creates storage whose writes fail, as a locked keyring would.
        pub fn failing() -> Self {
            Self {
                token: RwLock::new(None),
                fail_writes: AtomicBool::new(true),
            }
        }
    }

    impl Default for MockTokenStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl TokenStoragePort for MockTokenStorage {
        async fn get_token(&self) -> Result<Option<AuthToken>, AuthError> {
            Ok(self.token.read().await.clone())
        }

        async fn store_token(&self, token: &AuthToken) -> Result<(), AuthError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(AuthError::storage_failed("keyring unavailable"));
            }
            *self.token.write().await = Some(token.clone());
            Ok(())
        }

        async fn delete_token(&self) -> Result<(), AuthError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(AuthError::storage_failed("keyring unavailable"));
            }
            *self.token.write().await = None;
            Ok(())
        }
    }
}
