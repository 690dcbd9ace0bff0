//! Registration use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::Registration;
use crate::domain::errors::AuthError;
use crate::domain::ports::AuthPort;

/// Handles the account registration workflow.
///
/// Validation rules live in the backend; its per-field messages surface
/// through [`AuthError::ValidationFailed`].
#[derive(Clone)]
pub struct RegisterUseCase {
    auth_port: Arc<dyn AuthPort>,
}

impl RegisterUseCase {
    /// Creates new registration use case.
    #[must_use]
    pub const fn new(auth_port: Arc<dyn AuthPort>) -> Self {
        Self { auth_port }
    }

    /// Submits the registration; on success the backend mails an
    /// activation code.
    ///
    /// # Errors
    /// Returns error if the backend rejects the data or is unreachable.
    pub async fn execute(&self, registration: &Registration) -> Result<(), AuthError> {
        debug!(email = %registration.email, "Attempting registration");

        self.auth_port.register(registration).await.map_err(|e| {
            warn!(error = %e, "Registration failed");
            e
        })?;

        info!(email = %registration.email, "Registration accepted");
        Ok(())
    }
}
